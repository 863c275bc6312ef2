//! Large ASCII art glyphs for animated metric values.

/// Height of every glyph in rows.
pub const GLYPH_ROWS: usize = 5;

/// Digits 0-9 (5 rows tall, 6 chars wide).
const DIGITS: [[&str; GLYPH_ROWS]; 10] = [
    // 0
    [" ████ ", "██  ██", "██  ██", "██  ██", " ████ "],
    // 1
    ["  ██  ", " ███  ", "  ██  ", "  ██  ", "██████"],
    // 2
    [" ████ ", "██  ██", "   ██ ", " ██   ", "██████"],
    // 3
    ["█████ ", "    ██", " ████ ", "    ██", "█████ "],
    // 4
    ["██  ██", "██  ██", "██████", "    ██", "    ██"],
    // 5
    ["██████", "██    ", "█████ ", "    ██", "█████ "],
    // 6
    [" ████ ", "██    ", "█████ ", "██  ██", " ████ "],
    // 7
    ["██████", "    ██", "   ██ ", "  ██  ", "  ██  "],
    // 8
    [" ████ ", "██  ██", " ████ ", "██  ██", " ████ "],
    // 9
    [" ████ ", "██  ██", " █████", "    ██", " ████ "],
];

/// Decimal point (5 rows tall, 2 chars wide).
const POINT: [&str; GLYPH_ROWS] = ["  ", "  ", "  ", "  ", "██"];

/// Percent sign (5 rows tall, 6 chars wide).
const PERCENT: [&str; GLYPH_ROWS] = ["██  ██", "   ██ ", "  ██  ", " ██   ", "██  ██"];

/// Multiplier x (5 rows tall, 6 chars wide).
const MULTIPLIER: [&str; GLYPH_ROWS] = ["██  ██", " ████ ", "  ██  ", " ████ ", "██  ██"];

/// Plus sign (5 rows tall, 6 chars wide).
const PLUS: [&str; GLYPH_ROWS] = ["      ", "  ██  ", "██████", "  ██  ", "      "];

/// Minus sign (5 rows tall, 6 chars wide).
const MINUS: [&str; GLYPH_ROWS] = ["      ", "      ", "██████", "      ", "      "];

/// Blank column (5 rows tall, 3 chars wide).
const SPACE: [&str; GLYPH_ROWS] = ["   ", "   ", "   ", "   ", "   "];

/// Look up the glyph for a character, if one exists.
fn glyph(ch: char) -> Option<&'static [&'static str; GLYPH_ROWS]> {
    match ch {
        '0'..='9' => {
            let digit = ch as usize - '0' as usize;
            Some(&DIGITS[digit])
        }
        '.' => Some(&POINT),
        '%' => Some(&PERCENT),
        'x' => Some(&MULTIPLIER),
        '+' => Some(&PLUS),
        '-' => Some(&MINUS),
        ' ' => Some(&SPACE),
        _ => None,
    }
}

/// Build the large display rows for a metric value string.
///
/// Characters without a glyph are skipped, so any text the counter can
/// emit renders cleanly.
///
/// # Returns
/// A vector of [`GLYPH_ROWS`] strings, one per display line.
pub fn build_value_art(text: &str) -> Vec<String> {
    let mut lines = vec![String::new(); GLYPH_ROWS];

    for ch in text.chars() {
        let Some(glyph) = glyph(ch) else {
            continue;
        };
        for (line, glyph_row) in lines.iter_mut().zip(glyph.iter()) {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(glyph_row);
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_count() {
        let art = build_value_art("98.6%");
        assert_eq!(art.len(), GLYPH_ROWS);
    }

    #[test]
    fn test_rows_have_equal_width() {
        let art = build_value_art("250x");
        let width = art[0].chars().count();
        assert!(width > 0);
        assert!(art.iter().all(|row| row.chars().count() == width));
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        assert_eq!(build_value_art("42"), build_value_art("4?2"));
    }

    #[test]
    fn test_empty_text_yields_blank_rows() {
        let art = build_value_art("~");
        assert_eq!(art.len(), GLYPH_ROWS);
        assert!(art.iter().all(String::is_empty));
    }

    #[test]
    fn test_all_glyphs_are_rectangular() {
        for ch in "0123456789.%x+- ".chars() {
            let glyph = glyph(ch).unwrap();
            let width = glyph[0].chars().count();
            assert!(
                glyph.iter().all(|row| row.chars().count() == width),
                "ragged glyph for {ch:?}"
            );
        }
    }
}

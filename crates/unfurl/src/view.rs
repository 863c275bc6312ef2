//! Rendering helpers for panels, entry transforms, and the menu.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, List, ListItem, Paragraph},
};
use unfurl_core::RevealStyle;

/// Columns a sliding panel travels during its entry.
const SLIDE_COLS: f32 = 12.0;

/// Rows a rising panel travels during its entry.
const RISE_ROWS: f32 = 3.0;

/// Body text color at full reveal.
const BODY: Color = Color::Rgb(158, 158, 170);

/// Heading text color at full reveal.
const HEADING: Color = Color::Rgb(120, 120, 135);

/// Apply a reveal style's entry transform to a panel rectangle.
///
/// `progress` is already eased; the caller clips the result against the
/// content area, so transforms may push the rectangle past its edges.
pub fn entry_transform(style: RevealStyle, progress: f32, base: Rect) -> Rect {
    let t = progress.clamp(0.0, 1.0);
    let remaining = 1.0 - t;
    match style {
        RevealStyle::Fade => base,
        RevealStyle::SlideLeft => {
            let dx = (remaining * SLIDE_COLS).round() as u16;
            Rect {
                x: base.x.saturating_add(dx),
                ..base
            }
        }
        RevealStyle::SlideRight => {
            let dx = (remaining * SLIDE_COLS).round() as u16;
            Rect {
                x: base.x.saturating_sub(dx),
                ..base
            }
        }
        RevealStyle::Rise => {
            let dy = (remaining * RISE_ROWS).round() as u16;
            Rect {
                y: base.y.saturating_add(dy),
                ..base
            }
        }
        RevealStyle::Scale => {
            let scale = 0.5 + 0.5 * t;
            let height = ((f32::from(base.height) * scale).round() as u16)
                .max(1)
                .min(base.height);
            Rect {
                y: base.y + (base.height - height) / 2,
                height,
                ..base
            }
        }
    }
}

/// Scale a color toward dark while a panel is entering.
pub fn dim(color: Color, progress: f32) -> Color {
    let t = progress.clamp(0.0, 1.0);
    let factor = 0.25 + 0.75 * t;
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(
            (f32::from(r) * factor) as u8,
            (f32::from(g) * factor) as u8,
            (f32::from(b) * factor) as u8,
        ),
        other => other,
    }
}

/// Lines for a card panel: themed title over gray body text.
pub fn card_lines(title: &str, body: &str, accent: Color, progress: f32) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(
        Span::styled(title.to_string(), Style::new().fg(dim(accent, progress)).bold()),
    )];
    lines.extend(body_lines(body, progress));
    lines
}

/// Line for a compact list item.
pub fn list_line(title: &str, body: &str, accent: Color, progress: f32) -> Line<'static> {
    Line::from(vec![
        Span::styled("▸ ", Style::new().fg(dim(accent, progress))),
        Span::styled(title.to_string(), Style::new().fg(dim(accent, progress)).bold()),
        Span::styled(" — ", Style::new().fg(dim(HEADING, progress))),
        Span::styled(body.to_string(), Style::new().fg(dim(BODY, progress))),
    ])
}

/// Lines for the hero intro text.
pub fn hero_lines(body: &str, progress: f32) -> Vec<Line<'static>> {
    body_lines(body, progress)
}

/// Line for a single tag label.
pub fn tag_line(label: &str, accent: Color, progress: f32) -> Line<'static> {
    Line::from(
        Span::styled(format!("[{label}]"), Style::new().fg(dim(accent, progress))),
    )
}

/// Lines for a metric panel: large glyph art over its label.
///
/// Text with no renderable glyphs (a non-numeric metric left unanimated)
/// falls back to the plain text so the base content stays readable.
pub fn metric_lines(text: &str, label: &str, accent: Color, progress: f32) -> Vec<Line<'static>> {
    let art = unfurl_fonts::build_value_art(text);
    let accent_style = Style::new().fg(dim(accent, progress)).bold();

    let mut lines: Vec<Line<'static>> = if art.iter().all(String::is_empty) {
        let mut plain = vec![Line::default(); unfurl_fonts::GLYPH_ROWS / 2];
        plain.push(Line::from(Span::styled(text.to_string(), accent_style)));
        plain.resize(unfurl_fonts::GLYPH_ROWS, Line::default());
        plain
    } else {
        art.into_iter()
            .map(|row| Line::from(Span::styled(row, accent_style)))
            .collect()
    };

    lines.push(Line::default());
    lines.push(Line::from(
        Span::styled(label.to_string(), Style::new().fg(dim(BODY, progress))),
    ));
    lines
}

/// The page title line of the hero.
pub fn title_line(title: &str, accent: Color) -> Line<'static> {
    Line::from(Span::styled(title.to_uppercase(), Style::new().fg(accent).bold()))
}

/// The hero tagline: static lead plus the rotating word.
pub fn tagline_line(lead: &str, word: &str, accent: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{lead} "), Style::new().fg(BODY)),
        Span::styled(word.to_string(), Style::new().fg(accent).bold().italic()),
    ])
}

/// Centered heading line for a section.
pub fn heading_line(text: &str, progress: f32) -> Line<'static> {
    Line::from(
        Span::styled(text.to_uppercase(), Style::new().fg(dim(HEADING, progress)).bold()),
    )
}

/// Render the section menu overlay.
pub fn render_menu(
    frame: &mut Frame,
    area: Rect,
    entries: &[String],
    cursor: usize,
    accent: Color,
) {
    let width = entries
        .iter()
        .map(|entry| entry.chars().count() as u16)
        .max()
        .unwrap_or(0)
        .max(16)
        + 6;
    let height = entries.len() as u16 + 2;
    let menu = centered(area, width.min(area.width), height.min(area.height));

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == cursor {
                Style::new().fg(Color::Black).bg(accent).bold()
            } else {
                Style::new().fg(BODY)
            };
            ListItem::new(Line::from(
                Span::styled(format!(" {entry} "), style),
            ))
        })
        .collect();

    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::new().fg(accent))
        .title(" sections ");

    frame.render_widget(Clear, menu);
    frame.render_widget(List::new(items).block(block), menu);
}

/// Render lines into a rect, skipping rows clipped above the viewport.
pub fn render_lines(
    frame: &mut Frame,
    lines: Vec<Line<'static>>,
    rect: Rect,
    skip_rows: u16,
    centered: bool,
) {
    if rect.width == 0 || rect.height == 0 {
        return;
    }
    let mut paragraph = Paragraph::new(lines).scroll((skip_rows, 0));
    if centered {
        paragraph = paragraph.centered();
    }
    frame.render_widget(paragraph, rect);
}

fn body_lines(body: &str, progress: f32) -> Vec<Line<'static>> {
    body.lines()
        .map(|line| {
            Line::from(Span::styled(line.to_string(), Style::new().fg(dim(BODY, progress))))
        })
        .collect()
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Rect {
        Rect::new(20, 20, 40, 6)
    }

    #[test]
    fn test_entry_transform_is_identity_at_full_progress() {
        for style in [
            RevealStyle::Fade,
            RevealStyle::SlideLeft,
            RevealStyle::SlideRight,
            RevealStyle::Rise,
            RevealStyle::Scale,
        ] {
            assert_eq!(entry_transform(style, 1.0, base()), base());
        }
    }

    #[test]
    fn test_slide_offsets_at_start() {
        let left = entry_transform(RevealStyle::SlideLeft, 0.0, base());
        assert_eq!(left.x, 20 + SLIDE_COLS as u16);

        let right = entry_transform(RevealStyle::SlideRight, 0.0, base());
        assert_eq!(right.x, 20 - SLIDE_COLS as u16);
    }

    #[test]
    fn test_slide_right_saturates_at_left_edge() {
        let near_edge = Rect::new(3, 0, 10, 2);
        let moved = entry_transform(RevealStyle::SlideRight, 0.0, near_edge);
        assert_eq!(moved.x, 0);
    }

    #[test]
    fn test_rise_starts_below_and_settles() {
        let start = entry_transform(RevealStyle::Rise, 0.0, base());
        assert_eq!(start.y, 20 + RISE_ROWS as u16);
        let settled = entry_transform(RevealStyle::Rise, 0.99, base());
        assert_eq!(settled.y, 20);
    }

    #[test]
    fn test_scale_never_collapses_to_zero_rows() {
        let thin = Rect::new(0, 0, 10, 1);
        let scaled = entry_transform(RevealStyle::Scale, 0.0, thin);
        assert_eq!(scaled.height, 1);
    }

    #[test]
    fn test_dim_endpoints() {
        let color = Color::Rgb(200, 100, 40);
        assert_eq!(dim(color, 1.0), color);
        let dimmed = dim(color, 0.0);
        assert_eq!(dimmed, Color::Rgb(50, 25, 10));
    }

    #[test]
    fn test_metric_lines_fall_back_to_plain_text() {
        let lines = metric_lines("fast", "a label", Color::Rgb(255, 215, 0), 1.0);
        assert_eq!(lines.len(), unfurl_fonts::GLYPH_ROWS + 2);
        let spans: Vec<String> = lines
            .iter()
            .flat_map(|line| line.spans.iter())
            .map(|span| span.content.to_string())
            .collect();
        assert!(spans.iter().any(|text| text.contains("fast")));
    }
}

//! Parsed metric values and their display formatting.

/// A numeric metric parsed from display text, e.g. `"98.6%"` or `"250x"`.
///
/// The target value and the two suffix flags are captured at parse time;
/// intermediate animation frames are rendered against the target's
/// precision so an integer target never shows a decimal point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricValue {
    /// The target (end) value.
    pub value: f64,
    /// Render a trailing `%`.
    pub percent: bool,
    /// Render a trailing `x`.
    pub multiplier: bool,
}

impl MetricValue {
    /// Parse a metric from its source text.
    ///
    /// The leading numeric prefix becomes the value; a `%` or `x`
    /// anywhere in the text sets the matching suffix flag. Text with no
    /// numeric prefix yields `None` and the caller skips the animation.
    pub fn parse(text: &str) -> Option<Self> {
        let trimmed = text.trim();
        let value = leading_float(trimmed)?;
        Some(Self {
            value,
            percent: trimmed.contains('%'),
            multiplier: trimmed.contains('x'),
        })
    }

    /// Whether the target has a non-zero fractional part.
    fn is_fractional(&self) -> bool {
        self.value.fract() != 0.0
    }

    /// Render an intermediate animation value.
    ///
    /// Floored to an integer unless the target is fractional, in which
    /// case exactly one decimal place is shown.
    pub fn format(&self, current: f64) -> String {
        let rendered = if self.is_fractional() {
            format!("{current:.1}")
        } else {
            format!("{}", current.floor() as i64)
        };
        self.with_suffix(rendered)
    }

    /// Render the exact target value for the final frame.
    ///
    /// Bypasses the eased approximation so the displayed end state never
    /// carries floating-point drift.
    pub fn format_exact(&self) -> String {
        let rendered = if self.is_fractional() {
            format!("{}", self.value)
        } else {
            format!("{}", self.value as i64)
        };
        self.with_suffix(rendered)
    }

    fn with_suffix(&self, mut rendered: String) -> String {
        if self.percent {
            rendered.push('%');
        }
        if self.multiplier {
            rendered.push('x');
        }
        rendered
    }
}

/// Parse the longest leading float prefix of `text`, if any.
fn leading_float(text: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, ch) in text.char_indices() {
        match ch {
            '+' | '-' if i == 0 => {}
            '.' if !seen_dot => seen_dot = true,
            '0'..='9' => seen_digit = true,
            _ => break,
        }
        end = i + ch.len_utf8();
    }
    if !seen_digit {
        return None;
    }
    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percent() {
        let metric = MetricValue::parse("98.6%").unwrap();
        assert_eq!(metric.value, 98.6);
        assert!(metric.percent);
        assert!(!metric.multiplier);
    }

    #[test]
    fn test_parse_multiplier() {
        let metric = MetricValue::parse("250x").unwrap();
        assert_eq!(metric.value, 250.0);
        assert!(metric.multiplier);
        assert!(!metric.percent);
    }

    #[test]
    fn test_parse_plain_number_with_trailing_symbol() {
        let metric = MetricValue::parse("40+").unwrap();
        assert_eq!(metric.value, 40.0);
        assert!(!metric.percent);
        assert!(!metric.multiplier);
    }

    #[test]
    fn test_parse_non_numeric_is_none() {
        assert!(MetricValue::parse("fast").is_none());
        assert!(MetricValue::parse("").is_none());
        assert!(MetricValue::parse("~5").is_none());
    }

    #[test]
    fn test_integer_target_floors_intermediates() {
        let metric = MetricValue::parse("4").unwrap();
        assert_eq!(metric.format(2.97), "2");
        assert_eq!(metric.format(0.4), "0");
        assert!(!metric.format(3.999).contains('.'));
    }

    #[test]
    fn test_fractional_target_shows_one_decimal() {
        let metric = MetricValue::parse("98.6%").unwrap();
        assert_eq!(metric.format(42.01), "42.0%");
        assert_eq!(metric.format(97.55), "97.6%");
    }

    #[test]
    fn test_format_exact() {
        assert_eq!(MetricValue::parse("98.6%").unwrap().format_exact(), "98.6%");
        assert_eq!(MetricValue::parse("250x").unwrap().format_exact(), "250x");
        assert_eq!(MetricValue::parse("100%").unwrap().format_exact(), "100%");
    }
}

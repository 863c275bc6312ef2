//! User-facing style enums: reveal transitions and color themes.

use std::str::FromStr;

use ratatui::style::Color;

/// The entry transition applied to a panel when it reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealStyle {
    /// Fade from dim to full color.
    #[default]
    Fade,
    /// Slide in from the right edge.
    SlideLeft,
    /// Slide in from the left edge.
    SlideRight,
    /// Rise up into place.
    Rise,
    /// Grow from the panel's top edge.
    Scale,
}

impl FromStr for RevealStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fade" => Ok(RevealStyle::Fade),
            "slideleft" | "slide-left" => Ok(RevealStyle::SlideLeft),
            "slideright" | "slide-right" => Ok(RevealStyle::SlideRight),
            "rise" => Ok(RevealStyle::Rise),
            "scale" => Ok(RevealStyle::Scale),
            other => Err(format!("unknown reveal style: {other}")),
        }
    }
}

/// Accent color theme for the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorTheme {
    #[default]
    Gold,
    Sky,
    Coral,
    Mint,
}

impl ColorTheme {
    /// The theme's accent color.
    pub fn color(self) -> Color {
        match self {
            ColorTheme::Gold => Color::Rgb(255, 215, 0),
            ColorTheme::Sky => Color::Rgb(102, 126, 234),
            ColorTheme::Coral => Color::Rgb(255, 127, 102),
            ColorTheme::Mint => Color::Rgb(102, 221, 170),
        }
    }

    /// Cycle to the next theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Gold => ColorTheme::Sky,
            ColorTheme::Sky => ColorTheme::Coral,
            ColorTheme::Coral => ColorTheme::Mint,
            ColorTheme::Mint => ColorTheme::Gold,
        }
    }
}

impl FromStr for ColorTheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gold" => Ok(ColorTheme::Gold),
            "sky" => Ok(ColorTheme::Sky),
            "coral" => Ok(ColorTheme::Coral),
            "mint" => Ok(ColorTheme::Mint),
            other => Err(format!("unknown color theme: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_cycle_returns_to_start() {
        let mut theme = ColorTheme::Gold;
        for _ in 0..4 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::Gold);
    }

    #[test]
    fn test_reveal_style_from_str() {
        assert_eq!("fade".parse::<RevealStyle>(), Ok(RevealStyle::Fade));
        assert_eq!(
            "slide-left".parse::<RevealStyle>(),
            Ok(RevealStyle::SlideLeft)
        );
        assert!("spin".parse::<RevealStyle>().is_err());
    }
}

//! Identifiers and options for watched elements.

/// Opaque identifier for a watched element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u32);

/// Configuration for a reveal watcher instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    /// Fraction of an element that must be visible to trigger (0.0..=1.0).
    pub threshold: f32,
    /// Rows shaved off the top of the effective viewport.
    pub top_inset: u16,
    /// Rows shaved off the bottom of the effective viewport, biasing the
    /// trigger edge upward the way a negative bottom margin does.
    pub bottom_inset: u16,
}

impl WatchOptions {
    /// Options with the given threshold and no viewport insets.
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            top_inset: 0,
            bottom_inset: 0,
        }
    }

    /// Set the bottom viewport inset in rows.
    pub fn bottom_inset(mut self, rows: u16) -> Self {
        self.bottom_inset = rows;
        self
    }

    /// Set the top viewport inset in rows.
    pub fn top_inset(mut self, rows: u16) -> Self {
        self.top_inset = rows;
        self
    }
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self::new(0.15)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_clamped() {
        assert_eq!(WatchOptions::new(1.5).threshold, 1.0);
        assert_eq!(WatchOptions::new(-0.2).threshold, 0.0);
    }

    #[test]
    fn test_default_options() {
        let options = WatchOptions::default();
        assert_eq!(options.threshold, 0.15);
        assert_eq!(options.top_inset, 0);
        assert_eq!(options.bottom_inset, 0);
    }
}

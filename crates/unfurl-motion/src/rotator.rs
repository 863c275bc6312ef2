//! Rotating headline words.

use std::time::Duration;

/// Cycles through a list of words on a fixed period.
///
/// Stateless in the manner of the clock-driven animations: the current
/// word is a pure function of elapsed time, so the rotator needs no
/// per-frame update call.
#[derive(Debug, Clone)]
pub struct TextRotator {
    words: Vec<String>,
    period: Duration,
}

impl TextRotator {
    /// Create a rotator over the given words.
    pub fn new(words: Vec<String>, period: Duration) -> Self {
        Self { words, period }
    }

    /// The word shown at the given time. Empty word lists yield `""`.
    pub fn current(&self, now: Duration) -> &str {
        if self.words.is_empty() {
            return "";
        }
        let period_ms = self.period.as_millis().max(1);
        let index = (now.as_millis() / period_ms) as usize % self.words.len();
        &self.words[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotator() -> TextRotator {
        TextRotator::new(
            vec!["alpha".into(), "beta".into(), "gamma".into()],
            Duration::from_millis(1000),
        )
    }

    #[test]
    fn test_cycles_words_by_period() {
        let rotator = rotator();
        assert_eq!(rotator.current(Duration::ZERO), "alpha");
        assert_eq!(rotator.current(Duration::from_millis(1000)), "beta");
        assert_eq!(rotator.current(Duration::from_millis(2500)), "gamma");
        assert_eq!(rotator.current(Duration::from_millis(3000)), "alpha");
    }

    #[test]
    fn test_stable_within_a_period() {
        let rotator = rotator();
        assert_eq!(rotator.current(Duration::from_millis(1)), "alpha");
        assert_eq!(rotator.current(Duration::from_millis(999)), "alpha");
    }

    #[test]
    fn test_empty_word_list() {
        let rotator = TextRotator::new(Vec::new(), Duration::from_millis(1000));
        assert_eq!(rotator.current(Duration::from_secs(5)), "");
    }
}

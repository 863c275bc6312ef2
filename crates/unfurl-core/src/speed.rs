//! Animation speed settings.

use std::str::FromStr;

/// Global animation speed selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl AnimationSpeed {
    /// Duration of a counter tween in milliseconds.
    pub fn counter_duration_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 2500,
            AnimationSpeed::Medium => 1500,
            AnimationSpeed::Fast => 800,
        }
    }

    /// Duration of a panel's entry transition in milliseconds.
    pub fn reveal_duration_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 900,
            AnimationSpeed::Medium => 600,
            AnimationSpeed::Fast => 350,
        }
    }

    /// Period of the rotating headline word in milliseconds.
    pub fn rotate_period_ms(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 3500,
            AnimationSpeed::Medium => 2500,
            AnimationSpeed::Fast => 1500,
        }
    }
}

impl FromStr for AnimationSpeed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slow" => Ok(AnimationSpeed::Slow),
            "medium" => Ok(AnimationSpeed::Medium),
            "fast" => Ok(AnimationSpeed::Fast),
            other => Err(format!("unknown animation speed: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("fast".parse::<AnimationSpeed>(), Ok(AnimationSpeed::Fast));
        assert_eq!("Slow".parse::<AnimationSpeed>(), Ok(AnimationSpeed::Slow));
        assert!("warp".parse::<AnimationSpeed>().is_err());
    }

    #[test]
    fn test_faster_speeds_have_shorter_periods() {
        assert!(
            AnimationSpeed::Fast.counter_duration_ms()
                < AnimationSpeed::Medium.counter_duration_ms()
        );
        assert!(
            AnimationSpeed::Medium.reveal_duration_ms() < AnimationSpeed::Slow.reveal_duration_ms()
        );
    }
}

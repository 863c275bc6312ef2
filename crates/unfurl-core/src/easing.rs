//! Easing curves for animations.

/// An easing curve mapping linear progress to animated progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic ease-out, decelerating toward the target.
    EaseOutCubic,
    /// Quartic ease-out, starts fast and settles smoothly.
    #[default]
    EaseOutQuart,
}

impl Easing {
    /// Apply the curve to a progress value, clamped to `0.0..=1.0`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseOutQuart => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv * inv
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [Easing::Linear, Easing::EaseOutCubic, Easing::EaseOutQuart] {
            assert_eq!(easing.apply(0.0), 0.0);
            assert_eq!(easing.apply(1.0), 1.0);
        }
    }

    #[test]
    fn test_clamps_out_of_range_input() {
        assert_eq!(Easing::EaseOutQuart.apply(-0.5), 0.0);
        assert_eq!(Easing::EaseOutQuart.apply(1.5), 1.0);
    }

    #[test]
    fn test_quart_midpoint() {
        // 1 - (1 - 0.5)^4 = 0.9375
        let eased = Easing::EaseOutQuart.apply(0.5);
        assert!((eased - 0.9375).abs() < 1e-6);
    }

    #[test]
    fn test_ease_out_is_ahead_of_linear() {
        for t in [0.1, 0.3, 0.5, 0.7, 0.9] {
            assert!(Easing::EaseOutQuart.apply(t) > t);
            assert!(Easing::EaseOutCubic.apply(t) > t);
        }
    }
}

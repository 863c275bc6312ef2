//! Tweened numeric counter.

use std::time::Duration;

use unfurl_core::{Easing, MetricValue};

/// Animates a displayed number from a start value to an exact target
/// over a fixed duration with quartic ease-out.
///
/// Fire-and-forget: there is no cancellation and no progress callback.
/// Once progress reaches 1 the tween latches and every later frame
/// renders the exact target, so the final display never carries eased
/// floating-point drift.
#[derive(Debug, Clone)]
pub struct CounterTween {
    metric: MetricValue,
    start: f64,
    duration: Duration,
    started_at: Duration,
    done: bool,
}

impl CounterTween {
    /// Tween from zero to the metric's value.
    pub fn new(metric: MetricValue, duration: Duration, started_at: Duration) -> Self {
        Self::with_start(metric, 0.0, duration, started_at)
    }

    /// Tween from an explicit start value.
    pub fn with_start(
        metric: MetricValue,
        start: f64,
        duration: Duration,
        started_at: Duration,
    ) -> Self {
        Self {
            metric,
            start,
            duration,
            started_at,
            done: false,
        }
    }

    /// Render the frame for the given time.
    pub fn frame(&mut self, now: Duration) -> String {
        if self.done {
            return self.metric.format_exact();
        }

        let elapsed = now.saturating_sub(self.started_at);
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        if progress >= 1.0 {
            self.done = true;
            return self.metric.format_exact();
        }

        let eased = f64::from(Easing::EaseOutQuart.apply(progress));
        let current = self.start + (self.metric.value - self.start) * eased;
        self.metric.format(current)
    }

    /// Whether the tween has reached its target.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{FrameClock, ManualClock};

    fn tween(text: &str, duration_ms: u64) -> CounterTween {
        let metric = MetricValue::parse(text).unwrap();
        CounterTween::new(metric, Duration::from_millis(duration_ms), Duration::ZERO)
    }

    #[test]
    fn test_final_frame_is_exact_percent() {
        let mut tween = tween("100%", 1500);
        assert_eq!(tween.frame(Duration::from_millis(1500)), "100%");
        assert!(tween.is_done());
    }

    #[test]
    fn test_final_frame_is_exact_for_fractional_target() {
        let mut tween = tween("98.6%", 1500);
        tween.frame(Duration::from_millis(700));
        assert_eq!(tween.frame(Duration::from_millis(2000)), "98.6%");
    }

    #[test]
    fn test_final_frame_is_exact_for_multiplier() {
        let mut tween = tween("250x", 1500);
        assert_eq!(tween.frame(Duration::from_millis(9999)), "250x");
    }

    #[test]
    fn test_integer_target_renders_integer_frames() {
        let mut tween = tween("4", 1000);
        for ms in (0..=1000).step_by(50) {
            let text = tween.frame(Duration::from_millis(ms));
            assert!(!text.contains('.'), "frame {ms}ms rendered {text}");
        }
        assert_eq!(tween.frame(Duration::from_millis(1000)), "4");
    }

    #[test]
    fn test_frames_are_monotonically_non_decreasing() {
        let mut tween = tween("250x", 1000);
        let mut last = -1.0;
        for ms in (0..=1000).step_by(100) {
            let text = tween.frame(Duration::from_millis(ms));
            let value: f64 = text.trim_end_matches('x').parse().unwrap();
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 250.0);
    }

    #[test]
    fn test_done_latches_after_completion() {
        let mut tween = tween("100%", 500);
        assert_eq!(tween.frame(Duration::from_millis(600)), "100%");
        // Frames after completion keep the exact end value.
        assert_eq!(tween.frame(Duration::from_millis(100)), "100%");
        assert_eq!(tween.frame(Duration::from_secs(60)), "100%");
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let metric = MetricValue::parse("42").unwrap();
        let mut tween = CounterTween::new(metric, Duration::ZERO, Duration::ZERO);
        assert_eq!(tween.frame(Duration::ZERO), "42");
        assert!(tween.is_done());
    }

    #[test]
    fn test_nonzero_start_value() {
        let metric = MetricValue::parse("200").unwrap();
        let mut tween =
            CounterTween::with_start(metric, 100.0, Duration::from_millis(1000), Duration::ZERO);
        let first = tween.frame(Duration::ZERO);
        assert_eq!(first, "100");
        assert_eq!(tween.frame(Duration::from_millis(1000)), "200");
    }

    #[test]
    fn test_driven_by_a_manual_clock() {
        let clock = ManualClock::new();
        let mut tween = tween("100%", 1000);

        clock.advance(Duration::from_millis(400));
        let mid = tween.frame(clock.now());
        assert!(mid.ends_with('%'));
        assert!(!tween.is_done());

        clock.advance(Duration::from_millis(600));
        assert_eq!(tween.frame(clock.now()), "100%");
        assert!(tween.is_done());
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        let mut tween = tween("100", 1000);
        let halfway: f64 = tween
            .frame(Duration::from_millis(500))
            .parse()
            .unwrap();
        // Quartic ease-out has covered ~93% of the range at half time.
        assert!(halfway > 90.0);
    }
}

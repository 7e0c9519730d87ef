//! Simple delayed tween sampled against elapsed time.

use std::time::Duration;

use crate::easing::Easing;

/// A time-bounded interpolation of one value, with an optional delay
/// before the interpolation starts.
///
/// Unlike an animator that reads the wall clock on every tick, a
/// `Tween` is sampled with the elapsed time since its trigger, which
/// keeps schedules replayable in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            delay: Duration::ZERO,
            duration,
            easing,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Value at `elapsed` since the tween was triggered. Holds `from`
    /// through the delay window and `to` after completion.
    pub fn sample(&self, elapsed: Duration) -> f32 {
        if elapsed <= self.delay {
            return self.from;
        }
        let active = elapsed - self.delay;
        if active >= self.duration || self.duration.is_zero() {
            return self.to;
        }
        let t = active.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_start_value_through_delay() {
        let tween = Tween::new(0.0, 1.0, Duration::from_millis(800), Easing::Linear)
            .with_delay(Duration::from_millis(150));
        assert_eq!(tween.sample(Duration::ZERO), 0.0);
        assert_eq!(tween.sample(Duration::from_millis(150)), 0.0);
        assert!(tween.sample(Duration::from_millis(151)) >= 0.0);
    }

    #[test]
    fn reaches_target_exactly_at_completion() {
        let tween = Tween::new(0.0, 1.0, Duration::from_millis(600), Easing::QuadOut);
        assert_eq!(tween.sample(Duration::from_millis(600)), 1.0);
        assert_eq!(tween.sample(Duration::from_secs(10)), 1.0);
        assert!(tween.is_finished(Duration::from_millis(600)));
        assert!(!tween.is_finished(Duration::from_millis(599)));
    }

    #[test]
    fn linear_midpoint() {
        let tween = Tween::new(50.0, 0.0, Duration::from_secs(1), Easing::Linear);
        let mid = tween.sample(Duration::from_millis(500));
        assert!((mid - 25.0).abs() < 0.01);
    }

    #[test]
    fn zero_duration_snaps() {
        let tween = Tween::new(0.0, 1.0, Duration::ZERO, Easing::Linear);
        assert_eq!(tween.sample(Duration::from_nanos(1)), 1.0);
    }
}

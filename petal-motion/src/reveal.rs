//! Entrance reveal animations: fade + vertical offset (+ optional scale).
//!
//! A reveal is fire-and-forget relative to whatever triggered it; the
//! trigger records a start time and the pose is sampled from the time
//! since that trigger. Styles carry the tuning the page uses for slide
//! headings, slide body text, and card entrances.

use std::time::Duration;

use crate::easing::Easing;
use crate::tween::Tween;

/// Visual state of a revealed element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPose {
    /// 0 = invisible, 1 = fully visible.
    pub opacity: f32,
    /// Vertical offset in pixels; 0 when settled.
    pub offset: f32,
    /// Uniform scale; 1 when settled.
    pub scale: f32,
}

impl RevealPose {
    /// The fully-visible end state every reveal converges to.
    pub const fn settled() -> Self {
        Self {
            opacity: 1.0,
            offset: 0.0,
            scale: 1.0,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.opacity == 1.0 && self.offset == 0.0 && self.scale == 1.0
    }
}

/// Tuning for one entrance reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    pub delay: Duration,
    pub duration: Duration,
    pub easing: Easing,
    /// Starting vertical offset in pixels.
    pub offset_from: f32,
    /// Starting uniform scale.
    pub scale_from: f32,
}

impl RevealStyle {
    /// Slide heading: short delay, moderate duration, cubic deceleration,
    /// rises 50px while scaling up from 0.8.
    pub const fn heading() -> Self {
        Self {
            delay: Duration::from_millis(150),
            duration: Duration::from_millis(800),
            easing: Easing::CubicOut,
            offset_from: 50.0,
            scale_from: 0.8,
        }
    }

    /// Slide body text: longer delay, shorter duration, quad deceleration.
    pub const fn body() -> Self {
        Self {
            delay: Duration::from_millis(450),
            duration: Duration::from_millis(600),
            easing: Easing::QuadOut,
            offset_from: 30.0,
            scale_from: 1.0,
        }
    }

    /// Showcase card entering the viewport during the horizontal pan.
    pub const fn card() -> Self {
        Self {
            delay: Duration::ZERO,
            duration: Duration::from_millis(800),
            easing: Easing::QuadOut,
            offset_from: 50.0,
            scale_from: 1.0,
        }
    }

    /// Trending section sliding up as it scrolls into view.
    pub const fn section_entrance() -> Self {
        Self {
            delay: Duration::ZERO,
            duration: Duration::from_millis(1000),
            easing: Easing::CubicOut,
            offset_from: 100.0,
            scale_from: 1.0,
        }
    }

    /// Trending card entrance; combine with [`stagger_delay`] per card.
    ///
    /// [`stagger_delay`]: RevealStyle::stagger_delay
    pub const fn trending_card() -> Self {
        Self {
            delay: Duration::ZERO,
            duration: Duration::from_millis(900),
            easing: Easing::QuadOut,
            offset_from: 50.0,
            scale_from: 1.0,
        }
    }

    /// Delay the nth sibling by `n * 300ms` for a staggered entrance.
    pub fn stagger_delay(self, position: u32) -> Self {
        Self {
            delay: self.delay + Duration::from_millis(300) * position,
            ..self
        }
    }

    /// Pose at `since_trigger` after the reveal was triggered.
    pub fn sample(&self, since_trigger: Duration) -> RevealPose {
        let opacity = Tween::new(0.0, 1.0, self.duration, self.easing)
            .with_delay(self.delay)
            .sample(since_trigger);
        let offset = Tween::new(self.offset_from, 0.0, self.duration, self.easing)
            .with_delay(self.delay)
            .sample(since_trigger);
        let scale = Tween::new(self.scale_from, 1.0, self.duration, self.easing)
            .with_delay(self.delay)
            .sample(since_trigger);
        RevealPose {
            opacity,
            offset,
            scale,
        }
    }

    pub fn is_finished(&self, since_trigger: Duration) -> bool {
        since_trigger >= self.delay + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_starts_hidden_and_settles() {
        let style = RevealStyle::heading();
        let start = style.sample(Duration::ZERO);
        assert_eq!(start.opacity, 0.0);
        assert_eq!(start.offset, 50.0);
        assert_eq!(start.scale, 0.8);

        let end = style.sample(Duration::from_millis(950));
        assert!(end.is_settled());
        assert!(style.is_finished(Duration::from_millis(950)));
    }

    #[test]
    fn body_waits_out_its_delay() {
        let style = RevealStyle::body();
        let pose = style.sample(Duration::from_millis(400));
        assert_eq!(pose.opacity, 0.0);
        assert_eq!(pose.offset, 30.0);
    }

    #[test]
    fn reveal_converges_monotonically() {
        let style = RevealStyle::card();
        let mut last = -1.0;
        for ms in (0..=800).step_by(50) {
            let pose = style.sample(Duration::from_millis(ms));
            assert!(pose.opacity >= last);
            last = pose.opacity;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn stagger_shifts_delay_per_position() {
        let base = RevealStyle::trending_card();
        let third = base.stagger_delay(2);
        assert_eq!(third.delay, Duration::from_millis(600));
        // Before its slot opens the staggered card is still hidden.
        assert_eq!(third.sample(Duration::from_millis(500)).opacity, 0.0);
    }
}

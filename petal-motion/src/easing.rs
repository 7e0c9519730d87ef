//! Easing curves shared by tweens, the sequencer, and reveals.

/// Velocity curve applied over a tween's normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic accelerate-in.
    QuadIn,
    /// Quadratic decelerate-out.
    QuadOut,
    /// Quadratic in/out, used for slide strip moves.
    QuadInOut,
    /// Cubic decelerate-out, used for the heading reveal.
    CubicOut,
}

impl Easing {
    /// Map normalized time `t` through the curve. Input is clamped to
    /// `[0, 1]` so callers can pass raw elapsed ratios.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadIn => t * t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::QuadInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
            Easing::CubicOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
        }
    }
}

//! Derived timing for one full carousel cycle.

use std::time::Duration;

use crate::error::ScheduleError;

/// Immutable timing derived from slide count and the two durations.
///
/// One repeat period looks like this (4 slides, hold 3s, transition 1s):
///
/// ```text
/// t=0      hold slide 0
/// t=3..4   move to slide 1, then hold
/// t=6..7   move to slide 2, then hold
/// t=9..10  move to slide 3, then hold
/// t=12     discontinuous reset to slide 0
/// t=12..15 silent hold on slide 0
/// t=15     period repeats
/// ```
///
/// The trailing hold after the reset is deliberate: the restored first
/// slide gets a full dwell before the loop starts moving again, so the
/// wrap reads as a continuous cycle rather than a jump-and-go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceSchedule {
    len: usize,
    hold: Duration,
    transition: Duration,
}

impl SequenceSchedule {
    /// Validate and build. Requires `len >= 1`, a positive hold, and a
    /// transition strictly shorter than the hold.
    pub fn new(
        len: usize,
        hold: Duration,
        transition: Duration,
    ) -> Result<Self, ScheduleError> {
        if len == 0 {
            return Err(ScheduleError::EmptySequence);
        }
        if hold.is_zero() {
            return Err(ScheduleError::ZeroHold(hold));
        }
        if transition >= hold {
            return Err(ScheduleError::TransitionTooLong { transition, hold });
        }
        Ok(Self {
            len,
            hold,
            transition,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    pub fn transition(&self) -> Duration {
        self.transition
    }

    /// `len * hold`: the instant the strip resets to slide 0.
    pub fn total_cycle(&self) -> Duration {
        self.hold * self.len as u32
    }

    /// Full repeat period: the cycle plus one silent hold on slide 0.
    pub fn period(&self) -> Duration {
        self.total_cycle() + self.hold
    }

    /// Start of the move that makes slide `i` active, for `i in 1..len`.
    pub fn move_start(&self, i: usize) -> Duration {
        debug_assert!(i >= 1 && i < self.len, "move index out of range");
        self.hold * i as u32
    }

    /// Strip offset, in percent of the strip, at which slide `i` rests.
    pub fn resting_percent(&self, i: usize) -> f32 {
        -(100.0 / self.len as f32) * i as f32
    }

    /// Reduce an absolute elapsed time into the current period.
    pub fn local_time(&self, elapsed: Duration) -> Duration {
        let period = self.period().as_secs_f64();
        let local = elapsed.as_secs_f64() % period;
        Duration::from_secs_f64(local)
    }
}

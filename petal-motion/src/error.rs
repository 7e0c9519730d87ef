//! Motion-layer error types.
//!
//! Only construction-time validation produces errors here. Animation-time
//! failures (missing bindings, absent surfaces) are skip branches by
//! design and never surface as `Err`.

use std::time::Duration;

/// Rejections from [`SequenceSchedule::new`].
///
/// [`SequenceSchedule::new`]: crate::schedule::SequenceSchedule::new
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("schedule requires at least one slide")]
    EmptySequence,
    #[error("hold duration must be positive, got {0:?}")]
    ZeroHold(Duration),
    #[error("transition ({transition:?}) must be shorter than hold ({hold:?})")]
    TransitionTooLong {
        transition: Duration,
        hold: Duration,
    },
}

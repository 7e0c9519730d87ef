//! Clock-parameterized motion coordination for the Petal storefront.
//!
//! Two independent coordinators compose over one page without talking
//! to each other: the free-running [`SlideSequencer`] and the
//! scroll-driven [`ScrollPanner`]. Both are sampled against elapsed
//! time / normalized progress handed in by a driver, so everything in
//! this crate is deterministic and testable without waiting.
//!
//! [`SlideSequencer`]: sequencer::SlideSequencer
//! [`ScrollPanner`]: panner::ScrollPanner

pub mod easing;
pub mod error;
pub mod panner;
pub mod reveal;
pub mod schedule;
pub mod sequencer;
pub mod source;
pub mod tween;

pub use easing::Easing;
pub use error::ScheduleError;
pub use panner::{PanLayout, PanMapping, ScrollPanner};
pub use reveal::{RevealPose, RevealStyle};
pub use schedule::SequenceSchedule;
pub use sequencer::{Phase, SequencerEvent, SlideSequencer, TrackPose};
pub use source::{ProgressCallback, RegionId, ScrollBinding, ScrollProgressSource};
pub use tween::Tween;

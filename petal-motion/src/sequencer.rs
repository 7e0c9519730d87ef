//! Free-running slide sequencer.
//!
//! The sequencer is a finite state machine over `(active slide, phase)`
//! sampled against a single monotonic clock. The infinite repeat is
//! modular arithmetic over the schedule's period, so nothing here ever
//! reads the wall clock and tests replay whole cycles instantly.

use std::time::Duration;

use petal_model::SlideDeck;

use crate::easing::Easing;
use crate::error::ScheduleError;
use crate::schedule::SequenceSchedule;

/// Which part of the cycle the sequencer is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Resting on the active slide.
    Holding,
    /// The strip is moving toward the active slide.
    Transitioning,
}

/// Discrete triggers emitted as the clock crosses schedule boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    /// The strip started moving toward slide `to`.
    MoveStarted { to: usize },
    /// The strip finished arriving at a slide; its reveal starts now.
    /// Never emitted before the corresponding move completes.
    SlideArrived { index: usize },
    /// Discontinuous jump back to slide 0 at the end of the cycle.
    TrackReset,
}

/// Sampled position of the slide strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPose {
    /// Horizontal offset in percent of the strip width; slide `i` rests
    /// at `-(100 / len) * i`.
    pub x_percent: f32,
}

/// Cyclic sequencer over a slide deck.
///
/// Construction contract: slide 0 is already presented in its settled,
/// fully-revealed state at elapsed 0 — `advance(ZERO)` emits nothing
/// and `pose_at(ZERO)` is slide 0's resting position. There is no
/// terminal state; the sequencer runs for the lifetime of the page.
#[derive(Debug, Clone)]
pub struct SlideSequencer {
    schedule: SequenceSchedule,
    move_easing: Easing,
    last_elapsed: Duration,
}

impl SlideSequencer {
    pub fn new(schedule: SequenceSchedule) -> Self {
        Self {
            schedule,
            move_easing: Easing::QuadInOut,
            last_elapsed: Duration::ZERO,
        }
    }

    /// Build a sequencer sized to a validated slide deck.
    pub fn for_deck(
        deck: &SlideDeck,
        hold: Duration,
        transition: Duration,
    ) -> Result<Self, ScheduleError> {
        Ok(Self::new(SequenceSchedule::new(deck.len(), hold, transition)?))
    }

    pub fn schedule(&self) -> &SequenceSchedule {
        &self.schedule
    }

    /// Pure sample of the strip position at an absolute elapsed time.
    pub fn pose_at(&self, elapsed: Duration) -> TrackPose {
        let local = self.schedule.local_time(elapsed);
        TrackPose {
            x_percent: self.x_percent_at_local(local),
        }
    }

    /// FSM projection: the active slide and phase at an elapsed time.
    /// During a move the destination slide is already the active one.
    pub fn phase_at(&self, elapsed: Duration) -> (usize, Phase) {
        let local = self.schedule.local_time(elapsed);
        if local >= self.schedule.total_cycle() {
            return (0, Phase::Holding);
        }
        let slot = (local.as_nanos() / self.schedule.hold().as_nanos()) as usize;
        if slot == 0 {
            return (0, Phase::Holding);
        }
        let move_start = self.schedule.move_start(slot);
        if local < move_start + self.schedule.transition() {
            (slot, Phase::Transitioning)
        } else {
            (slot, Phase::Holding)
        }
    }

    /// Advance the clock and collect every trigger crossed since the
    /// previous call, in schedule order. A non-advancing clock (or one
    /// that stepped backwards) yields nothing and leaves state alone.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SequencerEvent> {
        if elapsed <= self.last_elapsed {
            return Vec::new();
        }
        let from = self.last_elapsed;
        self.last_elapsed = elapsed;

        let period = self.schedule.period().as_nanos();
        let triggers = self.period_triggers();

        let mut events = Vec::new();
        let from_ns = from.as_nanos();
        let to_ns = elapsed.as_nanos();
        for cycle in (from_ns / period)..=(to_ns / period) {
            for (local, event) in &triggers {
                let at = cycle * period + local.as_nanos();
                if at > from_ns && at <= to_ns {
                    events.push(*event);
                }
            }
        }
        events
    }

    /// The trigger list for one period, sorted by local time. Exactly
    /// `len` positional transitions: the moves plus the wrap-to-zero.
    fn period_triggers(&self) -> Vec<(Duration, SequencerEvent)> {
        let mut triggers = Vec::with_capacity(self.schedule.len() * 2 + 1);
        for i in 1..self.schedule.len() {
            let start = self.schedule.move_start(i);
            triggers.push((start, SequencerEvent::MoveStarted { to: i }));
            triggers.push((
                start + self.schedule.transition(),
                SequencerEvent::SlideArrived { index: i },
            ));
        }
        // Reset and re-reveal fire at the same instant; the reset is
        // applied first so the reveal never precedes arrival.
        let reset_at = self.schedule.total_cycle();
        triggers.push((reset_at, SequencerEvent::TrackReset));
        triggers.push((reset_at, SequencerEvent::SlideArrived { index: 0 }));
        triggers.sort_by_key(|(at, _)| *at);
        triggers
    }

    fn x_percent_at_local(&self, local: Duration) -> f32 {
        if local >= self.schedule.total_cycle() {
            // Past the reset: parked on slide 0 for the trailing hold.
            return 0.0;
        }
        let slot = (local.as_nanos() / self.schedule.hold().as_nanos()) as usize;
        if slot == 0 {
            return 0.0;
        }
        let move_start = self.schedule.move_start(slot);
        let into_move = local - move_start;
        if into_move < self.schedule.transition() {
            let t = into_move.as_secs_f32()
                / self.schedule.transition().as_secs_f32();
            let from = self.schedule.resting_percent(slot - 1);
            let to = self.schedule.resting_percent(slot);
            from + (to - from) * self.move_easing.apply(t)
        } else {
            self.schedule.resting_percent(slot)
        }
    }
}

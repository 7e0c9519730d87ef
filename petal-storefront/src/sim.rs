//! Deterministic stand-in for the browser's scroll observation.
//!
//! The simulator owns region placements on a virtual page and converts
//! absolute scroll offsets into normalized progress for each
//! subscription, which is all the real service would do for us.

use std::collections::HashMap;

use petal_motion::source::{
    ProgressCallback, RegionId, ScrollBinding, ScrollProgressSource,
};
use tracing::trace;

struct Subscription {
    binding: ScrollBinding,
    callback: ProgressCallback,
    active: bool,
}

/// Handle keeping a simulated subscription alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(usize);

/// Scroll-observation simulator for tests and the demo session.
#[derive(Default)]
pub struct SimulatedScroll {
    /// Top offset, in page pixels, of each known trigger region.
    region_tops: HashMap<RegionId, f32>,
    subscriptions: Vec<Subscription>,
    scroll_y: f32,
}

impl std::fmt::Debug for SimulatedScroll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulatedScroll")
            .field("regions", &self.region_tops.len())
            .field("subscriptions", &self.subscriptions.len())
            .field("scroll_y", &self.scroll_y)
            .finish()
    }
}

impl SimulatedScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a region's top edge on the virtual page.
    pub fn place_region(&mut self, region: RegionId, top: f32) {
        self.region_tops.insert(region, top);
    }

    /// Jump the page to an absolute scroll offset, delivering progress
    /// to every subscription whose region is placed.
    pub fn set_scroll(&mut self, y: f32) {
        self.scroll_y = y;
        for sub in &mut self.subscriptions {
            if !sub.active || sub.binding.span <= 0.0 {
                continue;
            }
            let Some(top) = self.region_tops.get(&sub.binding.region) else {
                continue;
            };
            let threshold = top - sub.binding.start;
            let progress = ((y - threshold) / sub.binding.span).clamp(0.0, 1.0);
            trace!(region = %sub.binding.region, progress, "scroll progress");
            (sub.callback)(progress);
        }
    }

    /// Sweep linearly from the current offset to `target` in `steps`
    /// increments, as a user scrolling through the section would.
    pub fn sweep_to(&mut self, target: f32, steps: usize) {
        let from = self.scroll_y;
        for step in 1..=steps.max(1) {
            let t = step as f32 / steps.max(1) as f32;
            self.set_scroll(from + (target - from) * t);
        }
    }

    /// Tear down a subscription (the region left the document).
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        if let Some(sub) = self.subscriptions.get_mut(id.0) {
            sub.active = false;
        }
    }
}

impl ScrollProgressSource for SimulatedScroll {
    type Subscription = SubscriptionId;

    fn subscribe(
        &mut self,
        binding: ScrollBinding,
        on_progress: ProgressCallback,
    ) -> Self::Subscription {
        self.subscriptions.push(Subscription {
            binding,
            callback: on_progress,
            active: true,
        });
        SubscriptionId(self.subscriptions.len() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording() -> (Arc<Mutex<Vec<f32>>>, ProgressCallback) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let callback: ProgressCallback = Box::new(move |p| {
            sink.lock().expect("progress sink").push(p);
        });
        (seen, callback)
    }

    fn binding(span: f32) -> ScrollBinding {
        ScrollBinding {
            region: RegionId::new("product-section"),
            start: 0.0,
            span,
            pin: true,
        }
    }

    #[test]
    fn progress_normalizes_against_region_placement() {
        let mut sim = SimulatedScroll::new();
        sim.place_region(RegionId::new("product-section"), 2000.0);
        let (seen, callback) = recording();
        sim.subscribe(binding(1500.0), callback);

        sim.set_scroll(1000.0); // above the region
        sim.set_scroll(2000.0); // region top
        sim.set_scroll(2750.0); // halfway through the pin span
        sim.set_scroll(4000.0); // past the region

        assert_eq!(*seen.lock().unwrap(), vec![0.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn start_lead_moves_the_threshold_before_the_region() {
        let mut sim = SimulatedScroll::new();
        sim.place_region(RegionId::new("product-section"), 2000.0);
        let (seen, callback) = recording();
        sim.subscribe(
            ScrollBinding {
                region: RegionId::new("product-section"),
                start: 500.0,
                span: 1000.0,
                pin: false,
            },
            callback,
        );

        sim.set_scroll(1400.0); // still above the led threshold at 1500
        sim.set_scroll(1500.0); // progress leaves 0 here
        sim.set_scroll(2000.0); // region top, halfway through the span

        assert_eq!(*seen.lock().unwrap(), vec![0.0, 0.0, 0.5]);
    }

    #[test]
    fn unplaced_region_never_fires() {
        let mut sim = SimulatedScroll::new();
        let (seen, callback) = recording();
        sim.subscribe(binding(1500.0), callback);
        sim.sweep_to(5000.0, 10);
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn unsubscribed_binding_goes_quiet() {
        let mut sim = SimulatedScroll::new();
        sim.place_region(RegionId::new("product-section"), 0.0);
        let (seen, callback) = recording();
        let id = sim.subscribe(binding(1000.0), callback);
        sim.set_scroll(500.0);
        sim.unsubscribe(id);
        sim.set_scroll(800.0);
        assert_eq!(seen.lock().unwrap().len(), 1);
    }
}

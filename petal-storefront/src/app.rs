//! Page assembly: content, stage, cart, and the two motion
//! coordinators, each attached only when its backing service exists.
//!
//! Everything runs on one logical thread: the tokio driver ticks the
//! sequencer, scroll progress arrives as messages drained on the same
//! tick, and cart adds are handled between ticks. No scheduled step
//! ever runs concurrently with another.

use std::time::Duration;

use petal_model::prelude::*;
use petal_motion::panner::{PanLayout, ScrollPanner};
use petal_motion::sequencer::{SequencerEvent, SlideSequencer, TrackPose};
use petal_motion::source::{RegionId, ScrollBinding, ScrollProgressSource};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::cart::{CartHandler, CartNotifier};
use crate::config::StorefrontConfig;
use crate::content;
use crate::stage::PageStage;

/// Region id of the pinned product showcase.
pub const SHOWCASE_REGION: &str = "product-section";

/// Region id of the trending strip below the showcase.
pub const TRENDING_REGION: &str = "trending-section";

/// The assembled promo page.
///
/// `sequencer` and `panner` stay `None` when their services were never
/// attached; every query then degrades to the static pose, matching
/// the page's behavior when an animation library fails to load.
pub struct PromoPage<N: CartNotifier> {
    config: StorefrontConfig,
    deck: SlideDeck,
    cards: Vec<TrendingCard>,
    stage: PageStage,
    cart: CartHandler<N>,
    sequencer: Option<SlideSequencer>,
    panner: Option<ScrollPanner>,
    progress_rx: Option<mpsc::UnboundedReceiver<f32>>,
    pan_progress: f32,
    trending_rx: Option<mpsc::UnboundedReceiver<f32>>,
    trending_entered: bool,
}

impl<N: CartNotifier> std::fmt::Debug for PromoPage<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromoPage")
            .field("slides", &self.deck.len())
            .field("sequencer", &self.sequencer.is_some())
            .field("panner", &self.panner.is_some())
            .finish()
    }
}

impl<N: CartNotifier> PromoPage<N> {
    /// Build the static page: content attached, slide 0 fully revealed,
    /// cart empty. No motion is wired yet.
    pub fn mount(config: StorefrontConfig, notifier: N) -> Self {
        let deck = content::slide_deck();
        let catalog = content::catalog();
        let cards = content::trending_cards();
        let stage = PageStage::new(deck.len(), catalog.len(), cards.len());
        info!(
            slides = deck.len(),
            products = catalog.len(),
            "promo page mounted"
        );
        Self {
            config,
            deck,
            cards,
            stage,
            cart: CartHandler::new(catalog, notifier),
            sequencer: None,
            panner: None,
            progress_rx: None,
            pan_progress: 0.0,
            trending_rx: None,
            trending_entered: false,
        }
    }

    /// Attach the slide sequencer. Called only when the timeline
    /// service is available; a page without it keeps slide 0 static.
    pub fn attach_sequencer(&mut self) {
        match SlideSequencer::for_deck(
            &self.deck,
            self.config.motion.hold(),
            self.config.motion.transition(),
        ) {
            Ok(sequencer) => {
                info!(
                    hold_secs = self.config.motion.hold_secs,
                    transition_secs = self.config.motion.transition_secs,
                    "slide sequencer attached"
                );
                self.sequencer = Some(sequencer);
            }
            Err(err) => {
                // Unanimated content, never a broken page.
                warn!(%err, "sequencer rejected schedule, slides stay static");
            }
        }
    }

    /// The post-layout measurement of the showcase strip. Valid only
    /// after the strip's children are attached, which `mount`
    /// guarantees; the caller still waits one frame before using it.
    pub fn showcase_layout(&self) -> PanLayout {
        let stride = self.config.layout.card_stride as f32;
        let count = self.cart.catalog().len();
        PanLayout {
            track_extent: stride * count as f32,
            viewport_extent: self.config.layout.viewport_width as f32,
            child_offsets: (0..count).map(|i| i as f32 * stride).collect(),
        }
    }

    /// Wire the scroll-linked panner against an observation service.
    /// The bounds measurement must come from a completed layout pass;
    /// scroll progress is then delivered as messages and consumed on
    /// the driver tick.
    pub fn attach_panner<S: ScrollProgressSource>(
        &mut self,
        source: &mut S,
        layout: PanLayout,
    ) -> S::Subscription {
        let mut panner = ScrollPanner::new();
        panner.layout_ready(layout);

        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = source.subscribe(
            ScrollBinding {
                region: RegionId::new(SHOWCASE_REGION),
                start: 0.0,
                span: panner.pin_span(),
                pin: true,
            },
            Box::new(move |progress| {
                let _ = tx.send(progress);
            }),
        );
        info!(pin_span = panner.pin_span(), "scroll panner attached");
        self.panner = Some(panner);
        self.progress_rx = Some(rx);
        subscription
    }

    /// Watch for the trending strip scrolling into view. The entrance
    /// fires once, when the region first reports nonzero progress. The
    /// binding leads the region by a fraction of the viewport so cards
    /// are already moving as the strip clears the fold.
    pub fn attach_trending_watch<S: ScrollProgressSource>(
        &mut self,
        source: &mut S,
    ) -> S::Subscription {
        let lead = self.config.layout.viewport_width as f32 * 0.4;
        let (tx, rx) = mpsc::unbounded_channel();
        let subscription = source.subscribe(
            ScrollBinding {
                region: RegionId::new(TRENDING_REGION),
                start: lead,
                span: 1.0,
                pin: false,
            },
            Box::new(move |progress| {
                let _ = tx.send(progress);
            }),
        );
        self.trending_rx = Some(rx);
        subscription
    }

    /// One driver tick at page-clock `now`: cross sequencer
    /// boundaries, drain scroll progress, and advance every reveal.
    pub fn tick(&mut self, now: Duration) {
        if let Some(sequencer) = &mut self.sequencer {
            for event in sequencer.advance(now) {
                match event {
                    SequencerEvent::MoveStarted { to } => {
                        debug!(slide = to, "strip moving");
                    }
                    SequencerEvent::SlideArrived { index } => {
                        self.stage.reveal_slide(index, now);
                    }
                    SequencerEvent::TrackReset => {
                        debug!("strip reset to slide 0");
                    }
                }
            }
        }

        if let Some(rx) = &mut self.progress_rx {
            let mut latest = None;
            while let Ok(progress) = rx.try_recv() {
                latest = Some(progress);
            }
            if let (Some(progress), Some(panner)) =
                (latest, self.panner.as_mut())
            {
                self.pan_progress = progress;
                for child in panner.advance(progress) {
                    self.stage.reveal_card(child, now);
                }
            }
        }

        if let Some(rx) = &mut self.trending_rx {
            let mut crossed = false;
            while let Ok(progress) = rx.try_recv() {
                crossed |= progress > 0.0;
            }
            if crossed && !self.trending_entered {
                self.trending_entered = true;
                debug!("trending strip entered view");
                self.stage.reveal_trending(now);
            }
        }

        self.stage.update(now);
    }

    /// Handle one add-to-cart click with the raw payload it carried.
    pub fn add_to_cart(&mut self, raw_id: &str) -> u32 {
        self.cart.add_raw(raw_id)
    }

    /// Strip position at `now`; static pages rest on slide 0.
    pub fn track_pose(&self, now: Duration) -> TrackPose {
        self.sequencer
            .as_ref()
            .map(|s| s.pose_at(now))
            .unwrap_or(TrackPose { x_percent: 0.0 })
    }

    /// Current horizontal translation of the showcase strip.
    pub fn pan_translation(&self) -> f32 {
        self.panner
            .as_ref()
            .map(|p| p.translation(self.pan_progress))
            .unwrap_or(0.0)
    }

    pub fn stage(&self) -> &PageStage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut PageStage {
        &mut self.stage
    }

    pub fn cart(&self) -> &Cart {
        self.cart.cart()
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn trending(&self) -> &[TrendingCard] {
        &self.cards
    }

    pub fn catalog(&self) -> &Catalog {
        self.cart.catalog()
    }

    pub fn has_sequencer(&self) -> bool {
        self.sequencer.is_some()
    }

    pub fn has_panner(&self) -> bool {
        self.panner.is_some()
    }
}

/// Drive a mounted page for `run_for` at the configured tick cadence,
/// on the current tokio runtime.
pub async fn run_page<N: CartNotifier>(
    page: &mut PromoPage<N>,
    config: &StorefrontConfig,
    run_for: Duration,
) {
    let start = tokio::time::Instant::now();
    let mut interval = tokio::time::interval(config.motion.tick_interval());
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        interval.tick().await;
        let elapsed = start.elapsed();
        page.tick(elapsed);
        if elapsed >= run_for {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::TracingNotifier;
    use crate::sim::SimulatedScroll;

    fn page() -> PromoPage<TracingNotifier> {
        PromoPage::mount(StorefrontConfig::default(), TracingNotifier)
    }

    #[test]
    fn static_page_rests_on_slide_zero() {
        let mut page = page();
        page.tick(Duration::from_secs(30));
        assert_eq!(page.track_pose(Duration::from_secs(30)).x_percent, 0.0);
        assert_eq!(page.pan_translation(), 0.0);
        assert!(page.stage().heading_pose(0).unwrap().is_settled());
        // Reveal for later slides never ran without a sequencer.
        assert_eq!(page.stage().heading_pose(2).unwrap().opacity, 0.0);
    }

    #[test]
    fn sequencer_reveals_slides_as_the_clock_crosses_boundaries() {
        let mut page = page();
        page.attach_sequencer();
        assert!(page.has_sequencer());

        // Past the first move's completion at t = 4s.
        page.tick(Duration::from_millis(4100));
        // Heading reveal for slide 1 has started but not settled.
        let pose = page.stage().heading_pose(1).unwrap();
        assert!(pose.opacity < 1.0);

        page.tick(Duration::from_millis(5500));
        assert!(page.stage().heading_pose(1).unwrap().is_settled());
    }

    #[test]
    fn panner_progress_reveals_cards_and_translates() {
        let mut page = page();
        let mut sim = SimulatedScroll::new();
        sim.place_region(RegionId::new(SHOWCASE_REGION), 3000.0);
        let layout = page.showcase_layout();
        page.attach_panner(&mut sim, layout);
        assert!(page.has_panner());

        // 6 cards * 450 stride - 1200 viewport = 1500 pin span.
        sim.sweep_to(3000.0 + 750.0, 5);
        page.tick(Duration::from_secs(1));
        assert_eq!(page.pan_translation(), -750.0);

        sim.sweep_to(3000.0 + 1500.0, 5);
        page.tick(Duration::from_secs(2));
        assert_eq!(page.pan_translation(), -1500.0);
        // Child 3 triggered on the first pass and has settled by now;
        // child 5 only just triggered at full progress.
        assert!(page.stage().card_pose(3).unwrap().is_settled());
        assert_eq!(page.stage().card_pose(5).unwrap().opacity, 0.0);
    }

    #[test]
    fn trending_entrance_fires_once_on_first_crossing() {
        let mut page = page();
        let mut sim = SimulatedScroll::new();
        sim.place_region(RegionId::new(TRENDING_REGION), 5000.0);
        page.attach_trending_watch(&mut sim);

        sim.set_scroll(4000.0);
        page.tick(Duration::from_secs(1));
        assert_eq!(page.stage().trending_pose(0).unwrap().opacity, 0.0);

        // 480px of lead: the entrance starts before the region top.
        sim.set_scroll(4600.0);
        page.tick(Duration::from_secs(2));
        page.tick(Duration::from_secs(3));
        assert!(page.stage().trending_pose(0).unwrap().is_settled());

        // Scrolling back and forth does not restart the entrance.
        sim.set_scroll(0.0);
        sim.set_scroll(5200.0);
        page.tick(Duration::from_secs(4));
        assert!(page.stage().trending_pose(0).unwrap().is_settled());
    }

    #[tokio::test(start_paused = true)]
    async fn driver_loop_reaches_the_first_move() {
        let config = StorefrontConfig::default();
        let mut page = page();
        page.attach_sequencer();
        run_page(&mut page, &config, Duration::from_millis(4200)).await;
        // Slide 1 arrived during the run, so its reveal is underway or done.
        assert!(page.stage().heading_pose(1).unwrap().opacity > 0.0);
    }
}

//! End-to-end page sessions against replayed clocks: mount, motion,
//! scroll sweep, and the cart scenario, composed the way the binary
//! wires them.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use petal_motion::source::RegionId;
use petal_storefront::app::{PromoPage, SHOWCASE_REGION, TRENDING_REGION};
use petal_storefront::cart::CartNotifier;
use petal_storefront::config::StorefrontConfig;
use petal_storefront::sim::SimulatedScroll;

/// Notifier that records every (total, name) notification.
#[derive(Debug, Clone, Default)]
struct Recorder(Arc<Mutex<Vec<(u32, String)>>>);

impl CartNotifier for Recorder {
    fn cart_changed(&self, total_items: u32, last_added: &str) {
        self.0
            .lock()
            .expect("recorder lock")
            .push((total_items, last_added.to_string()));
    }
}

#[test]
fn full_session_covers_sequencing_panning_and_cart() {
    let recorder = Recorder::default();
    let mut page = PromoPage::mount(StorefrontConfig::default(), recorder.clone());
    page.attach_sequencer();

    let mut sim = SimulatedScroll::new();
    sim.place_region(RegionId::new(SHOWCASE_REGION), 3000.0);
    sim.place_region(RegionId::new(TRENDING_REGION), 5200.0);
    let layout = page.showcase_layout();
    page.attach_panner(&mut sim, layout);
    page.attach_trending_watch(&mut sim);

    // Drive the page clock through one full carousel period at 10Hz.
    for ms in (0..=15_000).step_by(100) {
        page.tick(Duration::from_millis(ms));
    }

    // Every slide arrived once, so every heading is settled again.
    let now = Duration::from_millis(15_000);
    for slide in 0..page.deck().len() {
        assert!(
            page.stage().heading_pose(slide).unwrap().is_settled(),
            "slide {slide} heading should have settled during the cycle"
        );
    }
    // After the period the strip is back home.
    assert_eq!(page.track_pose(now).x_percent, 0.0);

    // Scroll through the pinned showcase; all cards reveal.
    sim.sweep_to(3000.0 + 1500.0, 30);
    page.tick(Duration::from_millis(15_100));
    page.tick(Duration::from_millis(16_500));
    assert_eq!(page.pan_translation(), -1500.0);
    for card in 0..page.catalog().len() {
        assert!(
            page.stage().card_pose(card).unwrap().opacity > 0.0,
            "card {card} should have been entrance-revealed"
        );
    }

    // Keep scrolling past the trending strip; the entrance plays once.
    sim.sweep_to(5400.0, 10);
    page.tick(Duration::from_millis(16_600));
    page.tick(Duration::from_millis(19_000));
    assert!(page.stage().trending_section_pose().unwrap().is_settled());
    assert!(page.stage().trending_pose(4).unwrap().is_settled());

    // Reference cart scenario.
    page.add_to_cart("101");
    page.add_to_cart("101");
    let total = page.add_to_cart("999");
    assert_eq!(total, 2);
    assert_eq!(page.cart().snapshot().len(), 1);
    assert_eq!(page.cart().snapshot()[0].quantity, 2);
    let notifications = recorder.0.lock().unwrap().clone();
    assert_eq!(
        notifications,
        vec![(1, "Pink Roses".to_string()), (2, "Pink Roses".to_string())]
    );
}

#[test]
fn page_without_services_degrades_to_static_content() {
    let mut page = PromoPage::mount(StorefrontConfig::default(), Recorder::default());

    for secs in 0..20 {
        page.tick(Duration::from_secs(secs));
    }
    let now = Duration::from_secs(20);
    assert_eq!(page.track_pose(now).x_percent, 0.0);
    assert_eq!(page.pan_translation(), 0.0);
    // Slide 0 is presented; nothing else ever animated.
    assert!(page.stage().heading_pose(0).unwrap().is_settled());
    assert_eq!(page.stage().heading_pose(1).unwrap().opacity, 0.0);
    assert_eq!(page.stage().card_pose(0).unwrap().opacity, 0.0);

    // The cart still works on a static page.
    assert_eq!(page.add_to_cart("104"), 1);
}

#[test]
fn custom_timing_shifts_the_schedule() {
    let mut config = StorefrontConfig::default();
    config.motion.hold_secs = 2.0;
    config.motion.transition_secs = 0.5;
    let mut page = PromoPage::mount(config, Recorder::default());
    page.attach_sequencer();

    // First move runs over t = 2.0..2.5s.
    page.tick(Duration::from_millis(2250));
    let mid = page.track_pose(Duration::from_millis(2250)).x_percent;
    assert!(mid < 0.0 && mid > -25.0);
    assert_eq!(
        page.track_pose(Duration::from_millis(2500)).x_percent,
        -25.0
    );
}

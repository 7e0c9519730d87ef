//! Headless demo session for the Petal promo page.
//!
//! Mounts the page, attaches whichever motion services are enabled,
//! drives the sequencer for a few cycles, sweeps the simulated scroll
//! through the pinned showcase, and plays back the reference cart
//! scenario, logging everything through `tracing`.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use petal_motion::source::RegionId;
use petal_storefront::app::{self, PromoPage, SHOWCASE_REGION, TRENDING_REGION};
use petal_storefront::cart::TracingNotifier;
use petal_storefront::config::ConfigLoader;
use petal_storefront::markup;
use petal_storefront::sim::SimulatedScroll;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "petal-storefront", about = "Headless promo page session")]
struct Args {
    /// Path to a petal.toml; defaults are used when omitted and absent.
    #[arg(long)]
    config: Option<PathBuf>,

    /// How long to run the carousel driver, in seconds.
    #[arg(long, default_value_t = 16)]
    run_secs: u64,

    /// Skip attaching the slide sequencer (timeline service absent).
    #[arg(long)]
    no_sequencer: bool,

    /// Skip attaching the scroll panner (scroll service absent).
    #[arg(long)]
    no_scroll: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.with_config_path(path);
    }
    let load = loader.load().context("failed to load configuration")?;
    for warning in &load.warnings {
        match &warning.hint {
            Some(hint) => {
                warn!(message = %warning.message, hint = %hint, "configuration warning")
            }
            None => warn!(message = %warning.message, "configuration warning"),
        }
    }
    let config = load.config;

    let mut page = PromoPage::mount(config, TracingNotifier);
    info!(
        track_vw = markup::track_width_vw(page.deck()),
        slides = %markup::num_slides_property(page.deck()),
        "rendered slide strip ({} bytes of markup)",
        markup::render_slides(page.deck()).len()
    );
    info!(
        trending_cards = page.trending().len(),
        product_bytes = markup::render_products(page.catalog()).len(),
        "rendered showcase sections"
    );

    if args.no_sequencer {
        warn!("timeline service disabled; slides stay static");
    } else {
        page.attach_sequencer();
    }

    let mut sim = SimulatedScroll::new();
    let subscription = if args.no_scroll {
        warn!("scroll service disabled; showcase stays static");
        None
    } else {
        sim.place_region(RegionId::new(SHOWCASE_REGION), 3000.0);
        sim.place_region(RegionId::new(TRENDING_REGION), 5200.0);
        // One frame between mounting the strip and measuring it.
        tokio::time::sleep(config.motion.tick_interval()).await;
        let layout = page.showcase_layout();
        let pan = page.attach_panner(&mut sim, layout);
        let trend = page.attach_trending_watch(&mut sim);
        Some((pan, trend))
    };

    // Let the carousel run free for a few cycles.
    app::run_page(&mut page, &config, Duration::from_secs(args.run_secs)).await;
    let now = Duration::from_secs(args.run_secs);
    info!(
        x_percent = page.track_pose(now).x_percent,
        "carousel position after run"
    );

    // Scroll the user through the pinned showcase and on past the
    // trending strip.
    if subscription.is_some() {
        let end = 3000.0
            + (page.showcase_layout().track_extent
                - page.showcase_layout().viewport_extent);
        sim.sweep_to(end, 24);
        page.tick(now + Duration::from_millis(100));
        info!(
            translation = page.pan_translation(),
            "showcase panned to the end"
        );
        sim.sweep_to(5400.0, 8);
        page.tick(now + Duration::from_millis(200));
        page.tick(now + Duration::from_secs(3));
        info!("trending strip entrance played");
    }

    // Reference cart scenario: two known adds, one unknown.
    page.add_to_cart("101");
    page.add_to_cart("101");
    page.add_to_cart("999");
    let cart = page.cart();
    info!(
        lines = cart.snapshot().len(),
        total_items = cart.total_items(),
        "session cart summary"
    );

    Ok(())
}

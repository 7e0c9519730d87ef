//! Promo page composition for the Petal storefront.
//!
//! Ties the static content, the HTML card templating, the cart wiring,
//! and the two motion coordinators from `petal-motion` into one page,
//! plus a simulated scroll service and a tokio driver for running the
//! whole thing headlessly.
#![allow(missing_docs)]

pub mod app;
pub mod cart;
pub mod config;
pub mod content;
pub mod markup;
pub mod sim;
pub mod stage;

pub use app::{PromoPage, SHOWCASE_REGION, TRENDING_REGION, run_page};
pub use cart::{CartHandler, CartNotifier, TracingNotifier};
pub use config::{ConfigLoad, ConfigLoader, ConfigWarning, StorefrontConfig};
pub use sim::{SimulatedScroll, SubscriptionId};
pub use stage::{PageStage, RevealTarget};

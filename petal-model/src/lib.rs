//! Core data model definitions shared across Petal crates.
#![allow(missing_docs)]

pub mod cart;
pub mod error;
pub mod prelude;
pub mod product;
pub mod slide;

// Intentionally curated re-exports for downstream consumers.
pub use cart::{Cart, CartLine};
pub use error::{ModelError, Result as ModelResult};
pub use product::{Catalog, Price, Product, ProductId};
pub use slide::{ImageRef, Slide, SlideDeck, TrendingCard};

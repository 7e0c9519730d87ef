//! Presentation-focused snapshot of the types surface.
//! Prefer importing from this module instead of individual tree nodes
//! when working in petal-storefront or other composition layers.

pub use super::cart::{Cart, CartLine};
pub use super::error::{ModelError, Result as ModelResult};
pub use super::product::{Catalog, Price, Product, ProductId};
pub use super::slide::{ImageRef, Slide, SlideDeck, TrendingCard};

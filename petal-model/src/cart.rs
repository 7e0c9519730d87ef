//! In-memory cart aggregate, keyed by product identity.
//!
//! The cart is an owned value mutated only by discrete add events on the
//! single-threaded page handler; it is never persisted or cleared.

use crate::product::{Catalog, Price, ProductId};

/// One accumulated line in the cart. `quantity` is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub quantity: u32,
}

/// Ordered collection of cart lines, unique by product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one add event.
    ///
    /// An id absent from the catalog is a no-op, not an error: the event
    /// source may hand us malformed or stale identifiers. An existing
    /// line has its quantity incremented; otherwise a new line with
    /// quantity 1 is appended. Returns the aggregate item count after
    /// the event (the value the notification collaborator consumes).
    pub fn add(&mut self, id: ProductId, catalog: &Catalog) -> u32 {
        let Some(product) = catalog.lookup(id) else {
            return self.total_items();
        };
        match self.lines.iter_mut().find(|l| l.product_id == id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product_id: product.id,
                name: product.name.clone(),
                unit_price: product.price,
                quantity: 1,
            }),
        }
        self.total_items()
    }

    /// Sum of all line quantities.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Read-only view of the current lines, in insertion order.
    pub fn snapshot(&self) -> &[CartLine] {
        &self.lines
    }
}

//! Add-to-cart wiring: raw click payloads in, notifications out.

use petal_model::prelude::*;
use tracing::{debug, info};

/// Collaborator notified after every effective cart change.
pub trait CartNotifier {
    fn cart_changed(&self, total_items: u32, last_added: &str);
}

/// Default notifier: structured log lines instead of a blocking dialog.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl CartNotifier for TracingNotifier {
    fn cart_changed(&self, total_items: u32, last_added: &str) {
        info!(total_items, product = last_added, "added to cart");
    }
}

/// Owns the cart and the fixed catalog, and applies add events.
pub struct CartHandler<N: CartNotifier> {
    catalog: Catalog,
    cart: Cart,
    notifier: N,
}

impl<N: CartNotifier> std::fmt::Debug for CartHandler<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartHandler")
            .field("catalog", &self.catalog.len())
            .field("cart_items", &self.cart.total_items())
            .finish()
    }
}

impl<N: CartNotifier> CartHandler<N> {
    pub fn new(catalog: Catalog, notifier: N) -> Self {
        Self {
            catalog,
            cart: Cart::new(),
            notifier,
        }
    }

    /// Handle one add-to-cart click given the raw id the event carries.
    /// Malformed or unknown ids are no-ops; the notifier only fires
    /// when the cart actually changed. Returns the aggregate count.
    pub fn add_raw(&mut self, raw_id: &str) -> u32 {
        let Some(id) = ProductId::parse(raw_id) else {
            debug!(raw_id, "unparseable product id on add event");
            return self.cart.total_items();
        };
        self.add(id)
    }

    /// Handle an add event with an already-parsed id.
    pub fn add(&mut self, id: ProductId) -> u32 {
        let Some(product) = self.catalog.lookup(id) else {
            debug!(%id, "product not in catalog, ignoring add");
            return self.cart.total_items();
        };
        let name = product.name.clone();
        let total = self.cart.add(id, &self.catalog);
        self.notifier.cart_changed(total, &name);
        total
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

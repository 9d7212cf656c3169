//! Session-scoped cart store.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::{Cart, CartItem};
use crate::catalog::{Product, Variation};
use crate::ids::ProductId;
use crate::money::Money;

/// Read-only view of the cart at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSnapshot {
    /// Lines in insertion order.
    pub items: Vec<CartItem>,
    /// Sum of quantity times product price.
    pub total: Money,
    /// Total units.
    pub item_count: u64,
}

impl CartSnapshot {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Authoritative owner of the session's cart.
///
/// Cloning a `CartStore` yields another handle to the same cart; construct a
/// new store for an independent cart. Every operation takes the lock once,
/// so callers never observe a half-applied mutation, and nothing hands out a
/// mutable reference to the cart itself.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Arc<Mutex<Cart>>,
}

impl CartStore {
    /// Create a store holding an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock cannot leave the cart half-updated:
    // each mutation is a single Vec operation.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add one unit of `product` in `variation`, merging with an existing line.
    pub fn add_to_cart(&self, product: &Product, variation: Variation) {
        let mut cart = self.lock();
        cart.add(product, variation);
        debug!(
            product_id = %product.id(),
            %variation,
            lines = cart.line_count(),
            "added to cart"
        );
    }

    /// Remove a line if present.
    pub fn remove_from_cart(&self, product_id: &ProductId, variation: Variation) {
        let removed = self.lock().remove(product_id, variation);
        debug!(%product_id, %variation, removed, "removed from cart");
    }

    /// Set a line's quantity; below 1 removes the line.
    pub fn update_quantity(&self, product_id: &ProductId, variation: Variation, quantity: i64) {
        let changed = self.lock().update_quantity(product_id, variation, quantity);
        debug!(%product_id, %variation, quantity, changed, "updated cart quantity");
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        self.lock().clear();
        debug!("cleared cart");
    }

    /// Sum of quantity times product price over all lines.
    pub fn total_amount(&self) -> Money {
        self.lock().total_amount()
    }

    /// Total units in the cart.
    pub fn item_count(&self) -> u64 {
        self.lock().item_count()
    }

    /// Copy of the current lines.
    pub fn items(&self) -> Vec<CartItem> {
        self.lock().items().to_vec()
    }

    /// Consistent view of lines and totals taken under a single lock.
    pub fn snapshot(&self) -> CartSnapshot {
        let cart = self.lock();
        CartSnapshot {
            items: cart.items().to_vec(),
            total: cart.total_amount(),
            item_count: cart.item_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

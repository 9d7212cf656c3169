//! Cart and line item types.

use crate::catalog::{Product, Variation};
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One (product, variation) pairing in the cart and its quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// The product, held by value and never mutated.
    pub product: Product,
    /// Chosen variation.
    pub variation: Variation,
    /// Units of this line; always at least 1.
    pub quantity: u32,
}

impl CartItem {
    fn new(product: Product, variation: Variation) -> Self {
        Self {
            product,
            variation,
            quantity: 1,
        }
    }

    /// Check whether this line is keyed by the given product and variation.
    pub fn matches(&self, product_id: &ProductId, variation: Variation) -> bool {
        self.product.id() == product_id && self.variation == variation
    }

    /// Quantity times this line's own product price.
    pub fn line_total(&self) -> Money {
        self.product.price().times(self.quantity)
    }
}

/// The ordered collection of line items for a session.
///
/// At most one line exists per (product id, variation) pair. None of the
/// operations fail: removing or updating a missing line is a no-op.
///
/// Deserialized carts are rebuilt line by line, so duplicate pairs merge and
/// zero-quantity lines are dropped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "CartRecord")]
pub struct Cart {
    items: Vec<CartItem>,
}

/// Wire shape of a cart.
#[derive(Deserialize)]
struct CartRecord {
    #[serde(default)]
    items: Vec<CartItem>,
}

impl From<CartRecord> for Cart {
    fn from(record: CartRecord) -> Self {
        let mut cart = Cart::new();
        for item in record.items.into_iter().filter(|i| i.quantity > 0) {
            cart.merge(item);
        }
        cart
    }
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product in the given variation.
    ///
    /// Merges into an existing line when product id and variation both match
    /// exactly; otherwise appends a new line with quantity 1. The variation is
    /// not checked against the product's category.
    pub fn add(&mut self, product: &Product, variation: Variation) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|i| i.matches(product.id(), variation))
        {
            existing.quantity = existing.quantity.saturating_add(1);
            return;
        }

        self.items.push(CartItem::new(product.clone(), variation));
    }

    fn merge(&mut self, item: CartItem) {
        match self
            .items
            .iter_mut()
            .find(|i| i.matches(item.product.id(), item.variation))
        {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }
    }

    /// Remove a line. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId, variation: Variation) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| !i.matches(product_id, variation));
        self.items.len() < len_before
    }

    /// Replace a line's quantity.
    ///
    /// A quantity below 1 removes the line. Returns whether a line changed.
    pub fn update_quantity(
        &mut self,
        product_id: &ProductId,
        variation: Variation,
        quantity: i64,
    ) -> bool {
        if quantity < 1 {
            return self.remove(product_id, variation);
        }

        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|i| i.matches(product_id, variation)) {
            Some(item) => {
                item.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantity times product price over all lines.
    pub fn total_amount(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line by product and variation.
    pub fn get(&self, product_id: &ProductId, variation: Variation) -> Option<&CartItem> {
        self.items.iter().find(|i| i.matches(product_id, variation))
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductKind;

    fn tee() -> Product {
        Product::new(
            "p1",
            "Tee",
            ProductKind::Clothing,
            Money::from_decimal(19.99),
            vec![Variation::Small, Variation::Medium],
        )
        .unwrap()
    }

    fn console() -> Product {
        Product::new(
            "p3",
            "Console",
            ProductKind::Console,
            Money::from_decimal(499.99),
            vec![Variation::New, Variation::Refurbished],
        )
        .unwrap()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total_amount().is_zero());
    }

    #[test]
    fn test_add_same_pair_increments_quantity() {
        let mut cart = Cart::new();
        cart.add(&tee(), Variation::Small);
        cart.add(&tee(), Variation::Small);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get(&ProductId::new("p1"), Variation::Small).unwrap().quantity, 2);
    }

    #[test]
    fn test_different_variation_creates_new_line() {
        let mut cart = Cart::new();
        cart.add(&tee(), Variation::Small);
        cart.add(&tee(), Variation::Medium);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.items()[0].variation, Variation::Small);
        assert_eq!(cart.items()[1].variation, Variation::Medium);
    }

    #[test]
    fn test_remove_missing_line_is_noop() {
        let mut cart = Cart::new();
        cart.add(&tee(), Variation::Small);

        assert!(!cart.remove(&ProductId::new("p1"), Variation::Medium));
        assert!(!cart.remove(&ProductId::new("nope"), Variation::Small));
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_update_quantity_replaces_value() {
        let mut cart = Cart::new();
        cart.add(&tee(), Variation::Small);
        cart.add(&tee(), Variation::Small);

        assert!(cart.update_quantity(&ProductId::new("p1"), Variation::Small, 5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_update_quantity_below_one_removes() {
        let mut cart = Cart::new();
        cart.add(&tee(), Variation::Small);
        cart.add(&console(), Variation::New);

        assert!(cart.update_quantity(&ProductId::new("p1"), Variation::Small, 0));
        assert!(cart.update_quantity(&ProductId::new("p3"), Variation::New, -4));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_missing_line_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.update_quantity(&ProductId::new("p1"), Variation::Small, 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_uses_each_product_price() {
        let mut cart = Cart::new();
        cart.add(&tee(), Variation::Small);
        cart.add(&tee(), Variation::Small);
        cart.add(&console(), Variation::Refurbished);

        // 2 * 19.99 + 499.99
        assert_eq!(cart.total_amount().amount_cents, 3998 + 49999);
    }

    #[test]
    fn test_item_count_counts_units() {
        let mut cart = Cart::new();
        cart.add(&tee(), Variation::Small);
        cart.update_quantity(&ProductId::new("p1"), Variation::Small, 3);
        cart.add(&console(), Variation::New);

        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.item_count(), 4);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&tee(), Variation::Small);
        cart.add(&console(), Variation::New);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_deserialize_merges_duplicates_and_drops_empty_lines() {
        let line = |variation: &str, quantity: u32| {
            serde_json::json!({
                "product": serde_json::to_value(tee()).unwrap(),
                "variation": variation,
                "quantity": quantity,
            })
        };
        let json = serde_json::json!({
            "items": [
                line("Small", 0),
                line("Small", 0),
                line("Small", 2),
                line("Small", 1),
                line("Medium", 1),
            ]
        });

        let cart: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.get(&ProductId::new("p1"), Variation::Small).unwrap().quantity, 3);
        assert_eq!(cart.item_count(), 4);
        assert!(cart.items().iter().all(|i| i.quantity >= 1));
    }

    #[test]
    fn test_serialized_cart_reads_back() {
        let mut cart = Cart::new();
        cart.add(&tee(), Variation::Small);
        cart.add(&console(), Variation::New);

        let json = serde_json::to_string(&cart).unwrap();
        assert_eq!(serde_json::from_str::<Cart>(&json).unwrap(), cart);
    }
}

//! Cart
//!
//! The persisted cart: an ordered list of line items with at most one line per
//! product, every line holding a quantity of at least one.

use std::{num::NonZeroU32, slice::Iter};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    pricing::{PricingError, total_price},
    products::{Product, ProductId},
};

pub mod errors;
pub mod line_item;
pub mod observer;
pub mod service;

pub use errors::CartError;
pub use line_item::LineItem;
pub use observer::{CartObserver, NoopObserver, RecordingObserver};
pub use service::{CartService, CartUpdate, DEFAULT_STORAGE_KEY};

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored line items.
    ///
    /// Lines with a zero quantity are dropped and repeated product ids are merged into
    /// their first occurrence, so the result always holds one line per product.
    pub fn from_items(items: impl IntoIterator<Item = LineItem>) -> Self {
        let mut cart = Self::new();
        let mut positions: FxHashMap<ProductId, usize> = FxHashMap::default();
        let mut normalized = 0_usize;

        for item in items {
            if item.quantity() == 0 {
                normalized += 1;
                continue;
            }

            if let Some(existing) = positions
                .get(&item.id())
                .and_then(|&position| cart.items.get_mut(position))
            {
                existing.set_quantity(existing.quantity().saturating_add(item.quantity()));
                normalized += 1;
                continue;
            }

            positions.insert(item.id(), cart.items.len());
            cart.items.push(item);
        }

        if normalized > 0 {
            warn!(normalized, "stored cart had empty or duplicate lines");
        }

        cart
    }

    /// Decode a cart from its stored JSON form.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if `json` is not an array of line items.
    pub fn decode(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Encode the cart to its stored JSON form.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if a price cannot be represented as a number.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Line items in the order they were first added.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns an iterator over the line items.
    pub fn iter(&self) -> Iter<'_, LineItem> {
        self.items.iter()
    }

    /// Get the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Quantity held for a product, zero when absent.
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, LineItem::quantity)
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Sum of price × quantity, rounded to cents.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the arithmetic overflows.
    pub fn total(&self) -> Result<Decimal, PricingError> {
        total_price(&self.items)
    }

    /// Add one unit of `product`, returning the line's new quantity.
    ///
    /// An existing line keeps its original snapshot and only gains quantity. Returns
    /// `None`, leaving the cart unchanged, if the line already holds `u32::MAX`.
    pub(crate) fn add_product(&mut self, product: &Product) -> Option<u32> {
        if let Some(item) = self.items.iter_mut().find(|item| item.id() == product.id) {
            let quantity = item.quantity().checked_add(1)?;
            item.set_quantity(quantity);

            return Some(quantity);
        }

        self.items.push(LineItem::from_product(product));

        Some(1)
    }

    /// Remove the line for `id`, returning whether one existed.
    pub(crate) fn remove(&mut self, id: ProductId) -> bool {
        let before = self.items.len();

        self.items.retain(|item| item.id() != id);

        self.items.len() != before
    }

    /// Overwrite the quantity of an existing line, returning whether one existed.
    pub(crate) fn set_quantity(&mut self, id: ProductId, quantity: NonZeroU32) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                item.set_quantity(quantity.get());
                true
            }
            None => false,
        }
    }
}

impl From<Vec<LineItem>> for Cart {
    fn from(items: Vec<LineItem>) -> Self {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn product(id: u32, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price: Decimal::new(cents, 2),
            image: "📦".to_string(),
            category: "Misc".to_string(),
        }
    }

    #[test]
    fn add_product_appends_then_increments() {
        let mut cart = Cart::new();
        let cable = product(4, 1299);

        assert_eq!(cart.add_product(&cable), Some(1));
        assert_eq!(cart.add_product(&cable), Some(2));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(4)), 2);
    }

    #[test]
    fn add_product_at_quantity_limit_leaves_line_unchanged() {
        let cable = product(4, 1299);
        let mut full = LineItem::from_product(&cable);
        full.set_quantity(u32::MAX);
        let mut cart = Cart::from_items(vec![full]);

        assert_eq!(cart.add_product(&cable), None);
        assert_eq!(cart.quantity_of(ProductId::new(4)), u32::MAX);
    }

    #[test]
    fn add_product_keeps_first_snapshot() {
        let mut cart = Cart::new();

        cart.add_product(&product(4, 1299));
        cart.add_product(&product(4, 9999));

        assert_eq!(
            cart.get(ProductId::new(4)).map(LineItem::price),
            Some(Decimal::new(1299, 2))
        );
    }

    #[test]
    fn add_product_preserves_insertion_order() {
        let mut cart = Cart::new();

        cart.add_product(&product(3, 100));
        cart.add_product(&product(1, 100));
        cart.add_product(&product(3, 100));

        let ids: Vec<u32> = cart.iter().map(|item| item.id().get()).collect();

        assert_eq!(ids, [3, 1]);
    }

    #[test]
    fn remove_reports_whether_line_existed() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 100));

        assert!(cart.remove(ProductId::new(1)));
        assert!(!cart.remove(ProductId::new(1)));
        assert!(cart.is_empty());
    }

    #[test]
    fn set_quantity_only_touches_existing_lines() {
        let mut cart = Cart::new();
        cart.add_product(&product(1, 100));

        let five = NonZeroU32::MIN.saturating_add(4);

        assert!(cart.set_quantity(ProductId::new(1), five));
        assert!(!cart.set_quantity(ProductId::new(2), five));
        assert_eq!(cart.quantity_of(ProductId::new(1)), 5);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn unit_count_sums_quantities() {
        let mut cart = Cart::new();

        cart.add_product(&product(1, 100));
        cart.add_product(&product(1, 100));
        cart.add_product(&product(2, 100));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.unit_count(), 3);
    }

    #[test]
    fn decode_normalizes_zero_and_duplicate_lines() -> TestResult {
        let json = r#"[
            {"id":1,"name":"A","price":1.5,"image":"a","category":"X","quantity":2},
            {"id":2,"name":"B","price":2.0,"image":"b","category":"X","quantity":0},
            {"id":1,"name":"A2","price":9.0,"image":"a","category":"X","quantity":3}
        ]"#;

        let cart = Cart::decode(json)?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.quantity_of(ProductId::new(1)), 5);
        assert_eq!(cart.get(ProductId::new(1)).map(LineItem::name), Some("A"));
        assert_eq!(cart.quantity_of(ProductId::new(2)), 0);

        Ok(())
    }

    #[test]
    fn decode_rejects_non_array_payloads() {
        assert!(Cart::decode("{\"id\":1}").is_err());
        assert!(Cart::decode("not json").is_err());
    }

    #[test]
    fn encode_writes_a_json_array() -> TestResult {
        let mut cart = Cart::new();
        cart.add_product(&product(6, 2499));

        let json = cart.encode()?;

        assert!(json.starts_with('['), "expected array, got {json}");
        assert_eq!(Cart::decode(&json)?, cart);

        Ok(())
    }

    #[test]
    fn empty_cart_encodes_as_empty_array() -> TestResult {
        assert_eq!(Cart::new().encode()?, "[]");

        Ok(())
    }
}

//! Cart line items

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::{Product, ProductId};

/// A product snapshot plus quantity.
///
/// The product fields are copied when the product is first added and are never
/// refreshed from the catalog afterwards. The serialized shape is the six-field record
/// the browser storefront keeps under its cart key, with `price` as a JSON number
/// carrying every digit of the decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    id: ProductId,
    name: String,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    price: Decimal,
    image: String,
    category: String,
    quantity: u32,
}

impl LineItem {
    /// Snapshot `product` with a quantity of one.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            category: product.category.clone(),
            quantity: 1,
        }
    }

    /// Returns the product id
    pub fn id(&self) -> ProductId {
        self.id
    }

    /// Returns the product name at add time
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price at add time
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the display glyph
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns the display category
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

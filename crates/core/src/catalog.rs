//! Catalog
//!
//! The fixed list of purchasable products. A catalog is built once and never
//! mutated; lookups are pure.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    fixtures::{FixtureError, products::load_catalog},
    products::{Product, ProductId},
};

const STOREFRONT_PRODUCTS_YAML: &str = include_str!("../../../fixtures/products/storefront.yml");

/// Errors raised while building a catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Product identifiers must be positive.
    #[error("product identifiers must be positive")]
    InvalidProductId,

    /// Two products share an identifier.
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),

    /// A product has a negative price.
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),
}

/// Catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
    currency: &'static Currency,
}

impl Catalog {
    /// Create a catalog from an ordered list of products priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if an id is zero or repeated, or if a price is negative.
    pub fn new(
        products: impl Into<Vec<Product>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let products = products.into();
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            if product.id.get() == 0 {
                return Err(CatalogError::InvalidProductId);
            }

            if product.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(product.id));
            }

            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
        }

        Ok(Self {
            products,
            index,
            currency,
        })
    }

    /// The storefront's own catalog, built from the bundled product fixture.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError`] if the bundled fixture is invalid.
    pub fn storefront() -> Result<Self, FixtureError> {
        load_catalog(STOREFRONT_PRODUCTS_YAML)
    }

    /// Look up a product by id.
    pub fn lookup(&self, id: ProductId) -> Option<&Product> {
        self.index
            .get(&id)
            .and_then(|&position| self.products.get(position))
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Currency every product is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

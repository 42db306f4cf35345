//! Fixtures
//!
//! YAML product fixtures used to build catalogs.

use thiserror::Error;

use crate::catalog::CatalogError;

pub mod products;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between products
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Fixture contains no products
    #[error("No products found in fixture")]
    NoProducts,

    /// Fixture products do not form a valid catalog
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

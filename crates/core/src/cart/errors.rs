//! Cart service errors.

use thiserror::Error;

use crate::{pricing::PricingError, products::ProductId, store::StoreError};

/// Errors surfaced by [`CartService`](crate::cart::CartService) operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Quantities must be between zero and `u32::MAX`.
    #[error("invalid quantity {0}")]
    InvalidQuantity(i64),

    /// The line already holds the largest quantity a cart can store.
    #[error("quantity limit reached for product {0}")]
    QuantityLimit(ProductId),

    /// The store rejected a write or delete.
    #[error("storage error")]
    Store(#[from] StoreError),

    /// The cart could not be serialized.
    #[error("failed to encode cart")]
    Encode(#[source] serde_json::Error),

    /// Totals could not be computed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

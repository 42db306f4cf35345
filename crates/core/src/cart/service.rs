//! Cart service.
//!
//! The store is the only copy of the cart: every operation reads the stored cart,
//! applies its change and writes the whole cart back. Nothing is cached between
//! calls, so a change made through another service over the same store is visible
//! to the next call.

use std::{num::NonZeroU32, sync::Arc};

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tracing::{Span, debug, warn};

use crate::{
    cart::{Cart, CartError, CartObserver, NoopObserver},
    catalog::Catalog,
    config::StorefrontConfig,
    pricing::to_money,
    products::ProductId,
    store::KeyValueStore,
};

/// Key the cart is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "cart";

/// What a cart operation did.
///
/// Not-found outcomes are reported rather than raised; storefront pages ignore them
/// so that, as far as the shopper can tell, nothing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartUpdate {
    /// One unit was added; the line now holds `quantity`.
    Added {
        /// Quantity after the add
        quantity: u32,
    },

    /// The line's quantity was overwritten.
    QuantitySet {
        /// Quantity now held
        quantity: u32,
    },

    /// The line was removed.
    Removed,

    /// The product has no line in the cart.
    NotInCart,

    /// The product is not in the catalog.
    ProductNotFound,
}

impl CartUpdate {
    /// Whether the stored cart contents changed.
    pub fn is_change(self) -> bool {
        matches!(
            self,
            Self::Added { .. } | Self::QuantitySet { .. } | Self::Removed
        )
    }
}

/// Cart state manager over an injected key-value store.
#[derive(Debug)]
pub struct CartService<S, O = NoopObserver> {
    store: S,
    catalog: Arc<Catalog>,
    storage_key: String,
    observer: O,
}

impl<S: KeyValueStore> CartService<S> {
    /// Create a service storing the cart under [`DEFAULT_STORAGE_KEY`].
    #[must_use]
    pub fn new(store: S, catalog: Arc<Catalog>) -> Self {
        Self {
            store,
            catalog,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            observer: NoopObserver,
        }
    }
}

impl<S: KeyValueStore, O: CartObserver> CartService<S, O> {
    /// Replace the change observer.
    #[must_use]
    pub fn with_observer<P: CartObserver>(self, observer: P) -> CartService<S, P> {
        CartService {
            store: self.store,
            catalog: self.catalog,
            storage_key: self.storage_key,
            observer,
        }
    }

    /// Store the cart under `key` instead of the default.
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Apply the storage settings from `config`.
    #[must_use]
    pub fn configured(self, config: &StorefrontConfig) -> Self {
        self.with_storage_key(config.storage_key.clone())
    }

    /// The catalog products are looked up in.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Key the cart is stored under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored cart.
    ///
    /// Never fails: a missing, unreadable or malformed stored value reads as an
    /// empty cart.
    pub fn read(&self) -> Cart {
        let stored = match self.store.get(&self.storage_key) {
            Ok(stored) => stored,
            Err(error) => {
                warn!(storage_key = %self.storage_key, %error, "failed to read cart; using empty cart");

                return Cart::default();
            }
        };

        let Some(json) = stored.filter(|json| !json.trim().is_empty()) else {
            return Cart::default();
        };

        Cart::decode(&json).unwrap_or_else(|error| {
            warn!(storage_key = %self.storage_key, %error, "discarding malformed cart");

            Cart::default()
        })
    }

    /// Add one unit of a catalog product.
    ///
    /// # Errors
    ///
    /// - [`CartError::QuantityLimit`]: the line already holds `u32::MAX`; the stored
    ///   cart is left untouched.
    /// - Any error from writing the updated cart.
    #[tracing::instrument(
        name = "cart.service.add",
        skip(self),
        fields(product_id = %product, line_count = tracing::field::Empty),
        err
    )]
    pub fn add(&self, product: ProductId) -> Result<CartUpdate, CartError> {
        let Some(product) = self.catalog.lookup(product) else {
            debug!("product not in catalog; cart unchanged");

            return Ok(CartUpdate::ProductNotFound);
        };

        let mut cart = self.read();
        let quantity = cart
            .add_product(product)
            .ok_or(CartError::QuantityLimit(product.id))?;

        self.persist(&cart)?;

        Ok(CartUpdate::Added { quantity })
    }

    /// Remove a product's line.
    ///
    /// The cart is rewritten and observers notified even when the product had no
    /// line.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the updated cart cannot be written.
    #[tracing::instrument(
        name = "cart.service.remove",
        skip(self),
        fields(product_id = %product, line_count = tracing::field::Empty),
        err
    )]
    pub fn remove(&self, product: ProductId) -> Result<CartUpdate, CartError> {
        let mut cart = self.read();
        let removed = cart.remove(product);

        self.persist(&cart)?;

        Ok(if removed {
            CartUpdate::Removed
        } else {
            CartUpdate::NotInCart
        })
    }

    /// Set a product's quantity. Zero removes the line.
    ///
    /// # Errors
    ///
    /// - [`CartError::InvalidQuantity`]: `quantity` is negative or above `u32::MAX`;
    ///   the stored cart is left untouched.
    /// - Any error from writing the updated cart.
    #[tracing::instrument(
        name = "cart.service.set_quantity",
        skip(self),
        fields(product_id = %product, line_count = tracing::field::Empty),
        err
    )]
    pub fn set_quantity(&self, product: ProductId, quantity: i64) -> Result<CartUpdate, CartError> {
        if quantity == 0 {
            return self.remove(product);
        }

        let new_quantity = u32::try_from(quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(CartError::InvalidQuantity(quantity))?;

        let mut cart = self.read();

        if !cart.set_quantity(product, new_quantity) {
            debug!("product not in cart; cart unchanged");

            return Ok(CartUpdate::NotInCart);
        }

        self.persist(&cart)?;

        Ok(CartUpdate::QuantitySet {
            quantity: new_quantity.get(),
        })
    }

    /// Sum of price × quantity over the stored cart, rounded to cents.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Pricing`] if the arithmetic overflows.
    pub fn total_price(&self) -> Result<Decimal, CartError> {
        Ok(self.read().total()?)
    }

    /// [`total_price`](Self::total_price) in the catalog currency.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Pricing`] if the arithmetic overflows.
    pub fn total_money(&self) -> Result<Money<'static, Currency>, CartError> {
        Ok(to_money(self.total_price()?, self.catalog.currency()))
    }

    /// Number of line items in the stored cart.
    pub fn item_count(&self) -> usize {
        self.read().len()
    }

    /// Delete the stored cart. Clearing an already empty cart succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] if the store rejects the delete.
    #[tracing::instrument(name = "cart.service.clear", skip(self), err)]
    pub fn clear(&self) -> Result<(), CartError> {
        self.store.remove(&self.storage_key)?;

        debug!(storage_key = %self.storage_key, "cart cleared");

        self.observer.cart_changed(&Cart::default());

        Ok(())
    }

    fn persist(&self, cart: &Cart) -> Result<(), CartError> {
        let json = cart.encode().map_err(CartError::Encode)?;

        self.store.set(&self.storage_key, &json)?;

        Span::current().record("line_count", cart.len());

        debug!(storage_key = %self.storage_key, lines = cart.len(), "cart saved");

        self.observer.cart_changed(cart);

        Ok(())
    }
}

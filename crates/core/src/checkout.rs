//! Checkout

use tracing::info;

use crate::{
    cart::{CartError, CartObserver, CartService},
    config::StorefrontConfig,
    store::KeyValueStore,
};

/// Notice shown when checkout is attempted with nothing in the cart.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty!";

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// Nothing to check out; the cart is left as it was.
    EmptyCart,

    /// The cart was cleared; navigate to the payment flow.
    Redirect(String),
}

impl CheckoutOutcome {
    /// Blocking notice to show the shopper, if any.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::EmptyCart => Some(EMPTY_CART_MESSAGE),
            Self::Redirect(_) => None,
        }
    }
}

/// Hand the cart off to the payment flow.
///
/// An empty cart is refused. Otherwise the stored cart is deleted and the configured
/// checkout URL returned for the page to navigate to.
///
/// # Errors
///
/// Returns a [`CartError`] if the stored cart cannot be deleted.
pub fn checkout<S, O>(
    cart: &CartService<S, O>,
    config: &StorefrontConfig,
) -> Result<CheckoutOutcome, CartError>
where
    S: KeyValueStore,
    O: CartObserver,
{
    let lines = cart.item_count();

    if lines == 0 {
        return Ok(CheckoutOutcome::EmptyCart);
    }

    cart.clear()?;

    info!(lines, destination = %config.checkout_url, "checkout handed off");

    Ok(CheckoutOutcome::Redirect(config.checkout_url.clone()))
}

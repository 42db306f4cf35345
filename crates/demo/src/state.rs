//! Shared cart state

use leptos::prelude::*;
use storefront::cart::{Cart, CartError, CartObserver, CartService, CartUpdate};

use crate::browser::BrowserStore;

/// Cart service used by every panel.
pub type ShopCart = CartService<BrowserStore, RevisionObserver>;

/// Bumps a revision signal whenever the cart changes so views re-read it.
#[derive(Debug, Clone, Copy)]
pub struct RevisionObserver {
    revision: RwSignal<u64>,
}

impl RevisionObserver {
    /// Observer driving `revision`.
    pub fn new(revision: RwSignal<u64>) -> Self {
        Self { revision }
    }
}

impl CartObserver for RevisionObserver {
    fn cart_changed(&self, _cart: &Cart) {
        self.revision.update(|revision| *revision = revision.wrapping_add(1));
    }
}

/// Turn a cart update into a status message for the shopper.
pub fn update_message(name: &str, result: &Result<CartUpdate, CartError>) -> Option<String> {
    match result {
        Ok(CartUpdate::Added { quantity }) => Some(format!("{name} added to cart ({quantity})")),
        Ok(CartUpdate::QuantitySet { quantity }) => Some(format!("{name}: quantity {quantity}")),
        Ok(CartUpdate::Removed) => Some(format!("{name} removed from cart")),
        Ok(CartUpdate::NotInCart | CartUpdate::ProductNotFound) => None,
        Err(error) => Some(format!("Could not update cart: {error}")),
    }
}

/// Blocking confirmation shown after a product is added.
pub fn added_notice(name: &str, result: &Result<CartUpdate, CartError>) -> Option<String> {
    matches!(result, Ok(CartUpdate::Added { .. })).then(|| format!("{name} added to cart!"))
}

/// Publish the outcome of a cart update to `action_message`.
pub fn report(
    action_message: RwSignal<Option<String>>,
    name: &str,
    result: &Result<CartUpdate, CartError>,
) {
    if let Some(message) = update_message(name, result) {
        action_message.set(Some(message));
    }
}

#[cfg(test)]
mod tests {
    use storefront::store::StoreError;

    use super::*;

    #[test]
    fn observer_bumps_revision() {
        let revision = RwSignal::new(0_u64);
        let observer = RevisionObserver::new(revision);

        observer.cart_changed(&Cart::new());
        observer.cart_changed(&Cart::new());

        assert_eq!(revision.get_untracked(), 2, "each change should bump once");
    }

    #[test]
    fn messages_follow_update_kind() {
        assert_eq!(
            update_message("Phone Case", &Ok(CartUpdate::Added { quantity: 2 })).as_deref(),
            Some("Phone Case added to cart (2)")
        );
        assert_eq!(
            update_message("Phone Case", &Ok(CartUpdate::Removed)).as_deref(),
            Some("Phone Case removed from cart")
        );
        assert_eq!(update_message("Phone Case", &Ok(CartUpdate::NotInCart)), None);
    }

    #[test]
    fn only_successful_adds_get_a_notice() {
        assert_eq!(
            added_notice("Smart Watch", &Ok(CartUpdate::Added { quantity: 1 })).as_deref(),
            Some("Smart Watch added to cart!")
        );
        assert_eq!(added_notice("Smart Watch", &Ok(CartUpdate::ProductNotFound)), None);
        assert_eq!(
            added_notice("Smart Watch", &Err(CartError::InvalidQuantity(-1))),
            None,
            "failures are reported on the status line instead"
        );
    }

    #[test]
    fn failures_are_reported() {
        let action_message = RwSignal::new(None::<String>);

        report(
            action_message,
            "Smart Watch",
            &Err(CartError::Store(StoreError::Unavailable)),
        );

        assert!(
            action_message
                .get_untracked()
                .is_some_and(|message| message.starts_with("Could not update cart")),
            "store failures should reach the status line"
        );
    }
}

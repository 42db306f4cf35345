//! Cart Observer

use std::cell::RefCell;

use crate::cart::Cart;

/// Notified after every persisted cart change.
///
/// The storefront uses this to refresh anything derived from the stored cart, such
/// as the item-count badge. Observers see the cart exactly as it was written; after
/// a clear they see an empty cart.
pub trait CartObserver {
    /// Called after the cart has been written to (or removed from) the store.
    fn cart_changed(&self, cart: &Cart);
}

/// Observer that ignores all notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {
    fn cart_changed(&self, _cart: &Cart) {}
}

impl<T: CartObserver + ?Sized> CartObserver for &T {
    fn cart_changed(&self, cart: &Cart) {
        (**self).cart_changed(cart);
    }
}

/// Observer that records the line count of every notification.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    counts: RefCell<Vec<usize>>,
}

impl RecordingObserver {
    /// Create an observer with no recorded notifications.
    pub fn new() -> Self {
        Self::default()
    }

    /// Line counts seen so far, oldest first.
    pub fn counts(&self) -> Vec<usize> {
        self.counts.borrow().clone()
    }

    /// Number of notifications received.
    pub fn notifications(&self) -> usize {
        self.counts.borrow().len()
    }
}

impl CartObserver for RecordingObserver {
    fn cart_changed(&self, cart: &Cart) {
        self.counts.borrow_mut().push(cart.len());
    }
}

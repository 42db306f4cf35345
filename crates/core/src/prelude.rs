//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{
        Cart, CartError, CartObserver, CartService, CartUpdate, LineItem, NoopObserver,
    },
    catalog::{Catalog, CatalogError},
    checkout::{CheckoutOutcome, checkout},
    config::{ConfigError, StorefrontConfig},
    contact::{ContactField, ContactForm, ContactFormError},
    fixtures::FixtureError,
    pricing::{PricingError, format_price},
    products::{Product, ProductId},
    store::{KeyValueStore, MemoryStore, StoreError},
};

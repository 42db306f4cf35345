//! Storefront
//!
//! Cart state management for a small client-side storefront: a fixed product
//! catalog, a cart persisted as one serialized value in a key-value store, and the
//! checkout and contact-form decisions the storefront pages make.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod contact;
pub mod fixtures;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod store;

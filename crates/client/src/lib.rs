//! Foodcart Client - the stateful side of the cart.
//!
//! # Architecture
//!
//! - [`CartEngine`] owns the authoritative [`Cart`](foodcart_core::Cart).
//!   Transitions apply synchronously under a lock and return immediately.
//! - After each transition the post-transition items are queued to a single
//!   writer task, which serializes them to a [`DurableStore`] in transition
//!   order. Failures surface only as the cart's sticky fault.
//! - [`CatalogBrowser`] holds the filter selection and the last catalog
//!   result from a [`CatalogSource`].
//!
//! # Modules
//!
//! - [`config`] - Environment-driven settings
//! - [`store`] - Durable key-value adapters
//! - [`engine`] - The cart engine and its selectors
//! - [`catalog`] - Catalog source seam and filter browsing

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod store;
mod sync;

pub use catalog::{CatalogBrowser, CatalogSource, InMemoryCatalog};
pub use config::CartConfig;
pub use engine::CartEngine;
pub use error::{CartError, CatalogError, ConfigError, StoreError};
pub use store::{DurableStore, FileStore, MemoryStore};

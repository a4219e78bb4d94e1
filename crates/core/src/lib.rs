//! Foodcart Core - Shared types library.
//!
//! This crate provides the types used across all foodcart components:
//! - `client` - Cart engine, durable storage adapters, catalog browsing
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no async runtime, no storage. This keeps it lightweight and lets the cart
//! and filter reducers be tested exhaustively in isolation.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for food IDs, prices, and catalog records
//! - [`cart`] - The cart state and its tagged-variant transitions
//! - [`filters`] - Catalog filter selection and the category projection
//! - [`summary`] - Subtotal, shipping and tax figures derived from the cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod filters;
pub mod summary;
pub mod types;

pub use cart::{Cart, CartAction, CartFault, FaultKind};
pub use filters::{ALL_CATEGORIES, FilterAction, FilterPatch, FoodFilters, category_options};
pub use summary::{FREE_SHIPPING_THRESHOLD, OrderSummary};
pub use types::*;

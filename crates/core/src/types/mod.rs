//! Core types for foodcart.
//!
//! This module provides type-safe wrappers for catalog and cart records.

pub mod food;
pub mod id;
pub mod price;

pub use food::{CartItem, Food};
pub use id::FoodId;
pub use price::{CurrencyCode, Price, PriceError, format_amount};

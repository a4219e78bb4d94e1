//! Integration tests for foodcart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p foodcart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_persistence` - Cart engine over a real `FileStore`, across restarts
//! - `catalog_browse` - Catalog browsing feeding the cart
//!
//! Tests need nothing external; each one works in its own scratch directory.

use std::path::{Path, PathBuf};

use foodcart_core::{Food, Price};
use rust_decimal::Decimal;

/// A uniquely named directory under the system temp dir, removed on drop.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Reserve a fresh path. The directory itself is created by whoever
    /// writes into it first.
    #[must_use]
    pub fn new(label: &str) -> Self {
        let path =
            std::env::temp_dir().join(format!("foodcart-{label}-{}", uuid::Uuid::new_v4()));
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// An available food in the "Meals" category priced at `price`.
///
/// # Panics
///
/// Panics if `price` is negative.
#[must_use]
pub fn food(id: &str, price: i64) -> Food {
    #[allow(clippy::unwrap_used)]
    let price = Price::new(Decimal::from(price)).unwrap();
    Food::new(id, format!("Food {id}"), price, "Meals")
}

/// A small catalog in the mobile app's JSON format.
pub const CATALOG_JSON: &str = r#"[
    {"_id":"p1","name":"Margherita Pizza","price":12,"category":"Pizza","image":"pizza.png"},
    {"_id":"d1","name":"Iced Tea","price":"2.50","category":"Drinks"},
    {"_id":"p2","name":"Pepperoni Pizza","price":15,"category":"Pizza"},
    {"_id":"s1","name":"Caesar Salad","price":9,"category":"Salads","isAvailable":false}
]"#;

//! Durable key-value storage for the serialized cart.
//!
//! The engine needs exactly two operations: read a key, write a key. Values
//! are strings (the JSON-encoded item list). Implementations use `&self`
//! and interior mutability so one store can be shared by the engine and its
//! writer task.

use std::future::Future;

use crate::error::StoreError;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Local device storage behind the cart.
pub trait DurableStore: Send + Sync + 'static {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key has never been written.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Insert or replace the value stored under `key`.
    fn set(&self, key: &str, value: String) -> impl Future<Output = Result<(), StoreError>> + Send;
}

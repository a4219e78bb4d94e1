//! Error types for the client runtime.
//!
//! None of these escape the [`CartEngine`](crate::CartEngine) boundary as a
//! failure of a transition; the engine turns them into the cart's fault.
//! They are returned directly by the store adapters, the catalog, and the
//! configuration loader.

use std::time::Duration;

use thiserror::Error;

/// A durable store operation failed.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem or device I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store refused the operation.
    #[error("write rejected: {0}")]
    Rejected(String),

    /// The key cannot be used by this store.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// Loading or saving the cart failed.
#[derive(Debug, Error)]
pub enum CartError {
    /// The durable store failed.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// The stored payload is not a list of cart items.
    #[error("malformed cart payload: {0}")]
    Decode(#[source] serde_json::Error),

    /// The items could not be serialized.
    #[error("failed to encode cart: {0}")]
    Encode(#[source] serde_json::Error),

    /// The store did not answer in time.
    #[error("storage operation timed out after {0:?}")]
    Timeout(Duration),
}

/// Querying the catalog failed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog is not a list of foods.
    #[error("malformed catalog: {0}")]
    Decode(#[from] serde_json::Error),

    /// The catalog could not be reached.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CartError::Timeout(Duration::from_millis(250));
        assert_eq!(err.to_string(), "storage operation timed out after 250ms");

        let err = CartError::from(StoreError::Rejected("disk full".to_string()));
        assert_eq!(err.to_string(), "storage error: write rejected: disk full");
    }
}

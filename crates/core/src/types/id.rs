//! Newtype ID for catalog entries.
//!
//! Catalog identifiers are opaque strings assigned by the remote catalog.
//! Wrapping them keeps food IDs from being confused with category names or
//! search text, which are also plain strings.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a [`Food`](crate::Food) in the remote catalog.
///
/// A cart holds at most one item per `FoodId`.
///
/// # Example
///
/// ```rust
/// # use foodcart_core::FoodId;
/// let id = FoodId::new("f1");
/// assert_eq!(id.as_str(), "f1");
/// assert_eq!(id, FoodId::from("f1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(String);

impl FoodId {
    /// Create a new ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for FoodId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for FoodId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<FoodId> for String {
    fn from(id: FoodId) -> Self {
        id.0
    }
}

impl AsRef<str> for FoodId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

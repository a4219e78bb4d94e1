//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FOODCART_DATA_DIR` - Directory for the durable cart store (default: .foodcart)
//! - `FOODCART_CATALOG` - JSON catalog file (default: catalog.json)
//! - `FOODCART_CURRENCY` - Display currency code (default: BDT)
//! - `FOODCART_STORAGE_KEY`, `FOODCART_WRITE_TIMEOUT_MS`, `FOODCART_LOAD_TIMEOUT_MS`
//!   - see [`CartConfig`]

use std::path::PathBuf;

use foodcart_client::{CartConfig, ConfigError};
use foodcart_core::CurrencyCode;

/// Resolved CLI settings.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Where the cart file lives
    pub data_dir: PathBuf,
    /// Catalog to browse and resolve food IDs against
    pub catalog_path: PathBuf,
    /// Currency used when printing prices
    pub currency: CurrencyCode,
    /// Engine settings
    pub cart: CartConfig,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = lookup("FOODCART_DATA_DIR").unwrap_or_else(|| ".foodcart".to_string());
        let catalog_path =
            lookup("FOODCART_CATALOG").unwrap_or_else(|| "catalog.json".to_string());
        let currency = lookup("FOODCART_CURRENCY")
            .map(|raw| raw.parse::<CurrencyCode>())
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar("FOODCART_CURRENCY".to_string(), e))?
            .unwrap_or_default();
        let cart = CartConfig::from_lookup(&lookup)?;

        Ok(Self {
            data_dir: PathBuf::from(data_dir),
            catalog_path: PathBuf::from(catalog_path),
            currency,
            cart,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.data_dir, PathBuf::from(".foodcart"));
        assert_eq!(config.catalog_path, PathBuf::from("catalog.json"));
        assert_eq!(config.currency, CurrencyCode::BDT);
        assert_eq!(config.cart, CartConfig::default());
    }

    #[test]
    fn test_currency_override() {
        let config =
            CliConfig::from_lookup(|key| (key == "FOODCART_CURRENCY").then(|| "usd".to_string()))
                .unwrap();
        assert_eq!(config.currency, CurrencyCode::USD);

        let err = CliConfig::from_lookup(|key| {
            (key == "FOODCART_CURRENCY").then(|| "doubloons".to_string())
        });
        assert!(err.is_err());
    }
}

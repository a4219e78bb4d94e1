//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FOODCART_STORAGE_KEY` - Durable store key for the cart (default: cartItems)
//! - `FOODCART_WRITE_TIMEOUT_MS` - Bound on each cart write (default: 5000)
//! - `FOODCART_LOAD_TIMEOUT_MS` - Bound on the startup read (default: 5000)

use std::time::Duration;

use crate::error::ConfigError;

/// Default durable store key. Payloads written by the mobile app live here.
pub const DEFAULT_STORAGE_KEY: &str = "cartItems";

const DEFAULT_TIMEOUT_MS: u64 = 5000;

/// Cart engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Key the item list is stored under
    pub storage_key: String,
    /// Bound on each write; a timeout counts as a save failure
    pub write_timeout: Duration,
    /// Bound on the startup read; a timeout counts as a load failure
    pub load_timeout: Duration,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            write_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            load_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl CartConfig {
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

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_key = lookup("FOODCART_STORAGE_KEY")
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        validate_storage_key(&storage_key)
            .map_err(|e| ConfigError::InvalidEnvVar("FOODCART_STORAGE_KEY".to_string(), e))?;

        let write_timeout = get_millis(&lookup, "FOODCART_WRITE_TIMEOUT_MS")?;
        let load_timeout = get_millis(&lookup, "FOODCART_LOAD_TIMEOUT_MS")?;

        Ok(Self {
            storage_key,
            write_timeout,
            load_timeout,
        })
    }
}

fn get_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Duration, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(Duration::from_millis(DEFAULT_TIMEOUT_MS));
    };
    let millis = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if millis == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(Duration::from_millis(millis))
}

/// Keys double as file names in [`FileStore`](crate::FileStore), so they are
/// restricted to a portable character set.
pub(crate) fn validate_storage_key(key: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err("must not be empty".to_string());
    }
    if key.starts_with('.') {
        return Err("must not start with '.'".to_string());
    }
    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
    {
        return Err(format!("contains unsupported character {bad:?}"));
    }
    Ok(())
}

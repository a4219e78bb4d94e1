//! In-process store, for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::DurableStore;
use crate::error::StoreError;

/// A `HashMap`-backed store.
///
/// Clones share the same map, so a test can keep a handle and inspect what
/// the engine wrote. Reads and writes can be made to fail or stall to
/// exercise the engine's fault handling.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    values: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    read_delay: Mutex<Option<Duration>>,
    write_delay: Mutex<Option<Duration>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store with `value` already present under `key`.
    #[must_use]
    pub fn with_value(key: &str, value: impl Into<String>) -> Self {
        let store = Self::new();
        store.insert(key, value);
        store
    }

    /// Put a value directly, bypassing failure injection.
    pub fn insert(&self, key: &str, value: impl Into<String>) {
        self.values().insert(key.to_string(), value.into());
    }

    /// Current value under `key`.
    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.values().get(key).cloned()
    }

    /// Number of successful writes so far.
    #[must_use]
    pub fn write_count(&self) -> usize {
        self.inner.writes.load(Ordering::SeqCst)
    }

    /// Make subsequent reads fail.
    pub fn fail_reads(&self, fail: bool) {
        self.inner.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent writes fail.
    pub fn fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Stall every read by `delay` before looking the key up.
    pub fn set_read_delay(&self, delay: Option<Duration>) {
        *lock(&self.inner.read_delay) = delay;
    }

    /// Stall every write by `delay` before applying it.
    pub fn set_write_delay(&self, delay: Option<Duration>) {
        *lock(&self.inner.write_delay) = delay;
    }

    fn values(&self) -> MutexGuard<'_, HashMap<String, String>> {
        lock(&self.inner.values)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl DurableStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let delay = *lock(&self.inner.read_delay);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.inner.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other("read failed")));
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        let delay = *lock(&self.inner.write_delay);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected("storage unavailable".to_string()));
        }
        self.values().insert(key.to_string(), value);
        self.inner.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_key() {
        let store = MemoryStore::new();
        assert!(store.get("cartItems").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        store.set("cartItems", "[]".to_string()).await.unwrap();
        assert_eq!(store.get("cartItems").await.unwrap().as_deref(), Some("[]"));
        assert_eq!(store.write_count(), 1);
    }

    #[tokio::test]
    async fn test_clones_share_values() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set("k", "v".to_string()).await.unwrap();
        assert_eq!(handle.value("k").as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let store = MemoryStore::with_value("k", "old");
        store.fail_writes(true);
        assert!(matches!(
            store.set("k", "new".to_string()).await,
            Err(StoreError::Rejected(_))
        ));
        assert_eq!(store.value("k").as_deref(), Some("old"));
        assert_eq!(store.write_count(), 0);

        store.fail_reads(true);
        assert!(store.get("k").await.is_err());
    }
}

//! Persistence synchronizer.
//!
//! A single writer task drains an unbounded queue of snapshots and writes
//! each one to the durable store, in queue order. The engine enqueues while
//! it still holds the cart lock, so queue order is transition order and a
//! slow write can never be overtaken by a newer one.
//!
//! A write that outlives its timeout is reported as a save fault but keeps
//! running; the next write (or flush) waits for it first, so a late write
//! can never land on top of a newer one.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use foodcart_core::{Cart, CartItem, FaultKind};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use crate::error::{CartError, StoreError};
use crate::store::DurableStore;

/// Work for the writer task.
#[derive(Debug)]
pub(crate) enum WriteRequest {
    /// Write the post-transition items of transition number `version`.
    Persist { version: u64, items: Vec<CartItem> },
    /// Signal once every earlier request has been handled.
    Flush(oneshot::Sender<()>),
}

/// Spawn the writer task and return its queue.
///
/// The task exits when every sender has been dropped.
pub(crate) fn spawn_writer<S: DurableStore>(
    store: Arc<S>,
    key: String,
    timeout: Duration,
    cart: Arc<RwLock<Cart>>,
) -> mpsc::UnboundedSender<WriteRequest> {
    let (tx, rx) = mpsc::unbounded_channel();
    let writer = Writer {
        store,
        key,
        timeout,
        cart,
        last_version: 0,
        in_flight: None,
    };
    tokio::spawn(writer.run(rx));
    tx
}

struct Writer<S> {
    store: Arc<S>,
    key: String,
    timeout: Duration,
    cart: Arc<RwLock<Cart>>,
    last_version: u64,
    /// A write that timed out but has not finished yet.
    in_flight: Option<JoinHandle<Result<(), StoreError>>>,
}

impl<S: DurableStore> Writer<S> {
    async fn run(mut self, mut rx: mpsc::UnboundedReceiver<WriteRequest>) {
        while let Some(request) = rx.recv().await {
            match request {
                WriteRequest::Persist { version, items } => self.persist(version, &items).await,
                WriteRequest::Flush(done) => {
                    self.settle().await;
                    let _ = done.send(());
                }
            }
        }
        self.settle().await;
        debug!(key = %self.key, "Cart writer stopped");
    }

    #[instrument(skip(self, items), fields(key = %self.key, items = items.len()))]
    async fn persist(&mut self, version: u64, items: &[CartItem]) {
        if version <= self.last_version {
            debug!(last = self.last_version, "Skipping stale cart snapshot");
            return;
        }
        self.last_version = version;

        self.settle().await;
        let result = self.save(items).await;

        let mut cart = self.cart.write().unwrap_or_else(PoisonError::into_inner);
        match result {
            Ok(()) => {
                debug!("Cart persisted");
                cart.clear_fault(FaultKind::Save);
            }
            Err(e) => {
                warn!(error = %e, "Failed to save cart");
                cart.record_fault(FaultKind::Save, format!("Failed to save cart: {e}"));
            }
        }
    }

    /// Encode `items` and write them, waiting at most `timeout`.
    async fn save(&mut self, items: &[CartItem]) -> Result<(), CartError> {
        let payload = serde_json::to_string(items).map_err(CartError::Encode)?;
        let store = Arc::clone(&self.store);
        let key = self.key.clone();
        let mut task = tokio::spawn(async move { store.set(&key, payload).await });

        match tokio::time::timeout(self.timeout, &mut task).await {
            Ok(joined) => {
                let stored = joined
                    .map_err(|e| StoreError::Rejected(format!("write task failed: {e}")))?;
                stored.map_err(CartError::from)
            }
            Err(_) => {
                self.in_flight = Some(task);
                Err(CartError::Timeout(self.timeout))
            }
        }
    }

    /// Wait for a timed-out write to finish.
    async fn settle(&mut self) {
        let Some(task) = self.in_flight.take() else {
            return;
        };
        match task.await {
            Ok(Ok(())) => debug!(key = %self.key, "Timed-out write finished late"),
            Ok(Err(e)) => debug!(key = %self.key, error = %e, "Timed-out write failed"),
            Err(e) => warn!(key = %self.key, error = %e, "Timed-out write task failed"),
        }
    }
}

/// Read and decode the items stored under `key`, bounded by `timeout`.
///
/// Returns `Ok(None)` when nothing has been stored yet.
pub(crate) async fn load_items<S: DurableStore>(
    store: &S,
    key: &str,
    timeout: Duration,
) -> Result<Option<Vec<CartItem>>, CartError> {
    let stored = tokio::time::timeout(timeout, store.get(key))
        .await
        .map_err(|_| CartError::Timeout(timeout))??;
    stored
        .map(|payload| serde_json::from_str(&payload).map_err(CartError::Decode))
        .transpose()
}

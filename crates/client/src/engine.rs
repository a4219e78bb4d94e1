//! The cart engine.
//!
//! [`CartEngine`] is the one owner of the cart. Components that need the cart
//! receive a clone of the engine handle (clones share state) and observe the
//! cart through the selector methods; nothing else mutates it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use foodcart_core::{Cart, CartAction, CartFault, CartItem, FaultKind, Food, FoodId};
use rust_decimal::Decimal;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::config::CartConfig;
use crate::store::DurableStore;
use crate::sync::{self, WriteRequest};

/// Handle to the shared cart.
///
/// Cheaply cloneable via `Arc`. Transitions apply synchronously and return
/// once the in-memory cart is updated; the write to storage happens in the
/// background and reports failure only through [`CartEngine::error`].
pub struct CartEngine<S: DurableStore> {
    inner: Arc<EngineInner<S>>,
}

struct EngineInner<S> {
    config: CartConfig,
    store: Arc<S>,
    cart: Arc<RwLock<Cart>>,
    version: AtomicU64,
    writer: mpsc::UnboundedSender<WriteRequest>,
    /// Actions dispatched while the startup load is in flight. Only touched
    /// with the cart write lock held.
    deferred: Mutex<Vec<CartAction>>,
}

impl<S: DurableStore> Clone for CartEngine<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: DurableStore> CartEngine<S> {
    /// Create an engine with an empty cart and start its writer task.
    ///
    /// The cart is not seeded from storage until [`CartEngine::load`] runs;
    /// prefer [`CartEngine::open`]. Must be called within a Tokio runtime.
    #[must_use]
    pub fn new(store: S, config: CartConfig) -> Self {
        let store = Arc::new(store);
        let cart = Arc::new(RwLock::new(Cart::new()));
        let writer = sync::spawn_writer(
            Arc::clone(&store),
            config.storage_key.clone(),
            config.write_timeout,
            Arc::clone(&cart),
        );

        Self {
            inner: Arc::new(EngineInner {
                config,
                store,
                cart,
                version: AtomicU64::new(0),
                writer,
                deferred: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Create an engine and seed it from storage before returning.
    pub async fn open(store: S, config: CartConfig) -> Self {
        let engine = Self::new(store, config);
        engine.load().await;
        engine
    }

    /// Seed the cart from the durable store.
    ///
    /// An absent key is a first run and yields an empty cart without a fault.
    /// An unreadable or undecodable value also yields an empty cart, with a
    /// [`FaultKind::Load`] fault. The loaded items are not written back.
    ///
    /// Actions dispatched while the read is in flight are held back, then
    /// replayed on top of the loaded items; the combined result is written
    /// once.
    #[instrument(skip(self), fields(key = %self.inner.config.storage_key))]
    pub async fn load(&self) {
        self.write().set_loading(true);

        let result = sync::load_items(
            self.inner.store.as_ref(),
            &self.inner.config.storage_key,
            self.inner.config.load_timeout,
        )
        .await;

        let mut cart = self.write();
        match result {
            Ok(Some(items)) => {
                info!(items = items.len(), "Cart restored from storage");
                cart.apply(CartAction::Initialize(items));
                cart.clear_fault(FaultKind::Load);
            }
            Ok(None) => {
                debug!("No stored cart, starting empty");
                cart.apply(CartAction::Initialize(Vec::new()));
                cart.clear_fault(FaultKind::Load);
            }
            Err(e) => {
                warn!(error = %e, "Failed to load cart");
                cart.apply(CartAction::Initialize(Vec::new()));
                cart.record_fault(FaultKind::Load, format!("Failed to load cart: {e}"));
            }
        }

        let deferred = std::mem::take(&mut *self.deferred());
        cart.set_loading(false);
        if !deferred.is_empty() {
            info!(actions = deferred.len(), "Replaying actions dispatched during load");
            for action in deferred {
                cart.apply(action);
            }
            self.enqueue(&mut cart);
        }
    }

    /// Apply a transition and queue the resulting items for storage.
    ///
    /// While [`CartEngine::load`] is in flight the action is held back and
    /// applied once the stored items are in place.
    #[instrument(skip(self, action), fields(action = action.name()))]
    pub fn dispatch(&self, action: CartAction) {
        let mut cart = self.write();
        if cart.is_loading() {
            debug!("Cart is loading, deferring action");
            self.deferred().push(action);
            return;
        }
        cart.apply(action);
        self.enqueue(&mut cart);
    }

    /// Queue the current items for storage. Called with the cart write lock
    /// held so queue order matches transition order.
    fn enqueue(&self, cart: &mut Cart) {
        let version = self.inner.version.fetch_add(1, Ordering::SeqCst) + 1;
        let request = WriteRequest::Persist {
            version,
            items: cart.items().to_vec(),
        };
        if self.inner.writer.send(request).is_err() {
            warn!("Cart writer is gone, change not persisted");
            cart.record_fault(FaultKind::Save, "Failed to save cart: writer stopped");
        }
    }

    /// Replace all items.
    pub fn initialize(&self, items: Vec<CartItem>) {
        self.dispatch(CartAction::Initialize(items));
    }

    /// Add one unit of `food`.
    pub fn add(&self, food: Food) {
        self.dispatch(CartAction::Add(food));
    }

    /// Remove the item for `id`, if any.
    pub fn remove(&self, id: impl Into<FoodId>) {
        self.dispatch(CartAction::Remove(id.into()));
    }

    /// Overwrite the quantity of the item for `id`, if any.
    ///
    /// Non-positive quantities are stored as given; call [`CartEngine::remove`]
    /// (or use [`CartEngine::adjust_quantity`]) to drop the item instead.
    pub fn set_quantity(&self, id: impl Into<FoodId>, quantity: i64) {
        self.dispatch(CartAction::SetQuantity {
            id: id.into(),
            quantity,
        });
    }

    /// Step the quantity by `delta`, removing the item if it reaches zero.
    pub fn adjust_quantity(&self, id: impl Into<FoodId>, delta: i64) {
        self.dispatch(CartAction::AdjustQuantity {
            id: id.into(),
            delta,
        });
    }

    /// Empty the cart.
    pub fn clear(&self) {
        self.dispatch(CartAction::Clear);
    }

    /// Wait until every change dispatched so far has been written (or has
    /// failed to be written), including writes that outlived their timeout.
    pub async fn flush(&self) {
        let (done, wait) = oneshot::channel();
        if self.inner.writer.send(WriteRequest::Flush(done)).is_ok() {
            let _ = wait.await;
        }
    }

    /// A copy of the whole cart.
    #[must_use]
    pub fn snapshot(&self) -> Cart {
        self.read().clone()
    }

    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.read().items().to_vec()
    }

    /// Total number of units.
    #[must_use]
    pub fn count(&self) -> i64 {
        self.read().total_quantity()
    }

    /// Total price, unrounded.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.read().total_price()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().is_loading()
    }

    /// The sticky fault from the last failed load or save.
    #[must_use]
    pub fn error(&self) -> Option<CartFault> {
        self.read().error().cloned()
    }

    fn read(&self) -> RwLockReadGuard<'_, Cart> {
        self.inner.cart.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Cart> {
        self.inner
            .cart
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn deferred(&self) -> MutexGuard<'_, Vec<CartAction>> {
        self.inner
            .deferred
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

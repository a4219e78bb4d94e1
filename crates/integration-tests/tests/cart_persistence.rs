//! Integration tests for cart persistence over the filesystem store.
//!
//! Each "restart" drops the engine and opens a new one on the same
//! directory, which is what a new process sees.

#![allow(clippy::indexing_slicing)]

use foodcart_client::{CartConfig, CartEngine, DurableStore, FileStore};
use foodcart_core::{CartItem, FaultKind};
use foodcart_integration_tests::{ScratchDir, food};
use rust_decimal::Decimal;

async fn open(dir: &ScratchDir) -> CartEngine<FileStore> {
    CartEngine::open(FileStore::new(dir.path()), CartConfig::default()).await
}

async fn persisted(dir: &ScratchDir) -> Vec<CartItem> {
    let raw = FileStore::new(dir.path())
        .get("cartItems")
        .await
        .expect("read store")
        .expect("cart was written");
    serde_json::from_str(&raw).expect("decode stored cart")
}

// ============================================================================
// Persistence fidelity
// ============================================================================

#[tokio::test]
async fn test_each_write_reflects_its_own_transition() {
    let dir = ScratchDir::new("fidelity");
    let engine = open(&dir).await;

    engine.add(food("f1", 10));
    engine.flush().await;
    let items = persisted(&dir).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 1);
    assert_eq!(items[0].food.price.amount(), Decimal::from(10));

    engine.add(food("f1", 10));
    engine.flush().await;
    let items = persisted(&dir).await;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, 2);
}

#[tokio::test]
async fn test_two_foods_persist_as_displayed() {
    let dir = ScratchDir::new("two-foods");
    let engine = open(&dir).await;

    engine.add(food("a", 3));
    engine.add(food("b", 4));
    engine.flush().await;

    let items = persisted(&dir).await;
    assert_eq!(items, engine.items());
    assert!(items.iter().all(|item| item.quantity == 1));
}

// ============================================================================
// Restart
// ============================================================================

#[tokio::test]
async fn test_cart_survives_restart() {
    let dir = ScratchDir::new("restart");

    {
        let engine = open(&dir).await;
        engine.add(food("a", 5));
        engine.add(food("a", 5));
        engine.add(food("b", 7));
        engine.set_quantity("b", 3);
        engine.flush().await;
    }

    let engine = open(&dir).await;
    assert_eq!(engine.items().len(), 2);
    assert_eq!(engine.count(), 5);
    assert_eq!(engine.total(), Decimal::from(31));
    assert!(!engine.is_loading());
    assert!(engine.error().is_none());
}

#[tokio::test]
async fn test_clear_survives_restart() {
    let dir = ScratchDir::new("clear");

    {
        let engine = open(&dir).await;
        engine.add(food("a", 5));
        engine.clear();
        engine.flush().await;
    }

    let engine = open(&dir).await;
    assert!(engine.items().is_empty());
    assert_eq!(engine.total(), Decimal::ZERO);
}

#[tokio::test]
async fn test_seeded_from_app_payload() {
    let dir = ScratchDir::new("app-payload");
    let payload = r#"[
        {"_id":"x","name":"Burger","price":10,"category":"Fast Food","quantity":2},
        {"_id":"y","name":"Fries","price":4,"category":"Fast Food","quantity":1}
    ]"#;
    FileStore::new(dir.path())
        .set("cartItems", payload.to_string())
        .await
        .expect("write seed");

    let engine = open(&dir).await;

    assert_eq!(engine.items().len(), 2);
    assert_eq!(engine.count(), 3);
    assert_eq!(engine.total(), Decimal::from(24));
}

#[tokio::test]
async fn test_corrupt_file_starts_empty_with_fault() {
    let dir = ScratchDir::new("corrupt");
    FileStore::new(dir.path())
        .set("cartItems", "not json".to_string())
        .await
        .expect("write seed");

    let engine = open(&dir).await;
    assert!(engine.items().is_empty());
    assert_eq!(engine.error().map(|f| f.kind), Some(FaultKind::Load));

    // The next change overwrites the bad payload.
    engine.add(food("a", 1));
    engine.flush().await;
    drop(engine);

    let engine = open(&dir).await;
    assert_eq!(engine.count(), 1);
    assert!(engine.error().is_none());
}

#[tokio::test]
async fn test_custom_key_is_isolated() {
    let dir = ScratchDir::new("custom-key");
    let config = CartConfig {
        storage_key: "cartItems.v2".to_string(),
        ..CartConfig::default()
    };

    let engine = CartEngine::open(FileStore::new(dir.path()), config.clone()).await;
    engine.add(food("a", 1));
    engine.flush().await;
    drop(engine);

    let default_engine = open(&dir).await;
    assert!(default_engine.items().is_empty());

    let engine = CartEngine::open(FileStore::new(dir.path()), config).await;
    assert_eq!(engine.count(), 1);
}

//! Integration tests for catalog browsing feeding the cart.

use foodcart_client::{
    CartConfig, CartEngine, CatalogBrowser, CatalogSource, InMemoryCatalog, MemoryStore,
};
use foodcart_core::{FilterAction, FilterPatch, FoodFilters};
use foodcart_integration_tests::{CATALOG_JSON, ScratchDir};
use rust_decimal::Decimal;

#[tokio::test]
async fn test_load_catalog_from_file() {
    let dir = ScratchDir::new("catalog");
    tokio::fs::create_dir_all(dir.path()).await.expect("mkdir");
    let path = dir.path().join("catalog.json");
    tokio::fs::write(&path, CATALOG_JSON).await.expect("write catalog");

    let catalog = InMemoryCatalog::load(&path).await.expect("load catalog");

    assert_eq!(catalog.foods().len(), 4);
    assert_eq!(
        catalog.get("p1").and_then(|f| f.image.as_deref()),
        Some("pizza.png")
    );
}

#[tokio::test]
async fn test_browse_filter_and_reset() {
    let catalog = InMemoryCatalog::from_json(CATALOG_JSON).expect("parse catalog");
    let mut browser = CatalogBrowser::new(catalog);

    browser.refresh().await.expect("query");
    assert_eq!(browser.categories(), ["All", "Pizza", "Drinks", "Salads"]);

    browser.dispatch(FilterAction::SelectCategory("Pizza".to_string()));
    browser.set_filters(FilterPatch {
        sort_by: Some("price_desc".to_string()),
        max_price: Some(Decimal::from(14)),
        ..FilterPatch::default()
    });
    let ids: Vec<String> = browser
        .refresh()
        .await
        .expect("query")
        .iter()
        .map(|f| f.id.to_string())
        .collect();
    assert_eq!(ids, ["p1"]);
    assert_eq!(browser.filters().category, "Pizza");

    browser.reset_filters();
    assert_eq!(browser.filters(), &FoodFilters::default());
    browser.refresh().await.expect("query");
    assert_eq!(browser.foods().len(), 4);
}

#[tokio::test]
async fn test_add_resolved_foods_to_cart() {
    let catalog = InMemoryCatalog::from_json(CATALOG_JSON).expect("parse catalog");
    let engine = CartEngine::open(MemoryStore::new(), CartConfig::default()).await;

    let pizzas = catalog
        .query(&FoodFilters {
            category: "Pizza".to_string(),
            ..FoodFilters::default()
        })
        .await
        .expect("query");
    for food in pizzas {
        engine.add(food);
    }
    engine.adjust_quantity("p2", 2);
    engine.flush().await;

    assert_eq!(engine.count(), 4);
    assert_eq!(engine.total(), Decimal::from(12 + 15 * 3));
}

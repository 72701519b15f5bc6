// Common test utilities for integration tests

use std::sync::Arc;

use catalog_api::api::build_routes;
use catalog_api::stores::InMemoryItemStore;
use catalog_api::types::db::Item;
use catalog_api::AppData;
use poem::test::TestClient;
use poem::Route;

/// Creates a test client over the full route tree, backed by a store
/// holding `items`. The store is returned for direct inspection.
pub fn setup_test_client(items: Vec<Item>) -> (TestClient<Route>, Arc<InMemoryItemStore>) {
    let store = Arc::new(InMemoryItemStore::with_items(items));
    let app_data = AppData::with_repository(store.clone());
    let app = build_routes(&app_data, "http://localhost:3000");

    (TestClient::new(app), store)
}

/// Item with no description, created now
pub fn item(name: &str, price: f64) -> Item {
    Item::new(name, None, price)
}

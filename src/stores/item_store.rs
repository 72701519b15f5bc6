use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::types::db::Item;

/// Repository trait for item storage operations
///
/// Operations never fail. `update` and `delete` expect the caller to have
/// confirmed the item exists through `get` beforehand.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemsRepository: Send + Sync {
    /// All items in insertion order
    async fn list(&self) -> Vec<Item>;

    /// Item with the given id, if any
    async fn get(&self, id: Uuid) -> Option<Item>;

    /// Append a new item
    async fn create(&self, item: Item);

    /// Replace the stored item that has the same id
    async fn update(&self, item: Item);

    /// Remove the item with the given id
    async fn delete(&self, id: Uuid);
}

/// Volatile item store backed by an ordered vector
///
/// All access goes through a single `RwLock`; every operation is one
/// critical section.
pub struct InMemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Create a store holding the given items, in order
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Create a store pre-populated with the starter catalog
    pub fn seeded() -> Self {
        Self::with_items(vec![
            Item::new("Potion", None, 10.0),
            Item::new("CSGO", None, 9.0),
            Item::new("Dota 2", None, 8.0),
        ])
    }

    /// Number of items currently stored
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemsRepository for InMemoryItemStore {
    async fn list(&self) -> Vec<Item> {
        self.items.read().await.clone()
    }

    async fn get(&self, id: Uuid) -> Option<Item> {
        self.items.read().await.iter().find(|item| item.id == id).cloned()
    }

    async fn create(&self, item: Item) {
        self.items.write().await.push(item);
    }

    async fn update(&self, item: Item) {
        let mut items = self.items.write().await;
        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => *existing = item,
            None => tracing::warn!(item_id = %item.id, "update called for an item that is not stored"),
        }
    }

    async fn delete(&self, id: Uuid) {
        let mut items = self.items.write().await;
        match items.iter().position(|existing| existing.id == id) {
            Some(index) => {
                items.remove(index);
            }
            None => tracing::warn!(item_id = %id, "delete called for an item that is not stored"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, price: f64) -> Item {
        Item::new(name, Some(format!("{} description", name)), price)
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = InMemoryItemStore::new();
        store.create(named("first", 1.0)).await;
        store.create(named("second", 2.0)).await;
        store.create(named("third", 3.0)).await;

        let names: Vec<String> = store.list().await.into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_get_returns_matching_item() {
        let store = InMemoryItemStore::new();
        let item = named("widget", 4.5);
        let id = item.id;
        store.create(item.clone()).await;
        store.create(named("other", 1.0)).await;

        assert_eq!(store.get(id).await, Some(item));
    }

    #[tokio::test]
    async fn test_get_unknown_id_returns_none() {
        let store = InMemoryItemStore::seeded();

        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_item_in_place() {
        let store = InMemoryItemStore::new();
        let first = named("first", 1.0);
        let second = named("second", 2.0);
        store.create(first.clone()).await;
        store.create(second.clone()).await;

        let updated = Item {
            name: "renamed".to_string(),
            price: 5.0,
            ..second.clone()
        };
        store.update(updated.clone()).await;

        let items = store.list().await;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], first);
        assert_eq!(items[1], updated);
    }

    #[tokio::test]
    async fn test_update_unknown_id_leaves_store_untouched() {
        let store = InMemoryItemStore::seeded();
        let before = store.list().await;

        store.update(named("ghost", 1.0)).await;

        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_item() {
        let store = InMemoryItemStore::new();
        let keep_a = named("a", 1.0);
        let target = named("b", 2.0);
        let keep_c = named("c", 3.0);
        store.create(keep_a.clone()).await;
        store.create(target.clone()).await;
        store.create(keep_c.clone()).await;

        store.delete(target.id).await;

        assert_eq!(store.len().await, 2);
        assert_eq!(store.list().await, vec![keep_a, keep_c]);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_noop() {
        let store = InMemoryItemStore::seeded();

        store.delete(Uuid::new_v4()).await;

        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_seeded_store_contains_starter_catalog() {
        let store = InMemoryItemStore::seeded();
        let items = store.list().await;

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Potion", "CSGO", "Dota 2"]);
        assert_eq!(items[0].price, 10.0);
        assert!(items.iter().all(|i| i.description.is_none()));
    }

    #[tokio::test]
    async fn test_new_store_is_empty() {
        let store = InMemoryItemStore::default();

        assert!(store.is_empty().await);
    }
}

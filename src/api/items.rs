use poem_openapi::param::{Path, Query};
use poem_openapi::{payload::Json, OpenApi, Tags};
use std::sync::Arc;
use uuid::Uuid;

use crate::stores::ItemsRepository;
use crate::types::db::Item;
use crate::types::dto::items::{
    CreateItemApiResponse, CreateItemRequest, GetItemApiResponse, ItemMutationApiResponse,
    ItemView, UpdateItemRequest,
};

/// Items API
pub struct ItemsApi {
    repository: Arc<dyn ItemsRepository>,
}

impl ItemsApi {
    /// Create a new ItemsApi backed by the given repository
    pub fn new(repository: Arc<dyn ItemsRepository>) -> Self {
        Self { repository }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// Item management endpoints
    Items,
}

/// Keep only the views whose name contains `name`, ignoring case
///
/// A missing or blank filter keeps every view. Order is preserved.
pub fn filter_by_name(views: Vec<ItemView>, name: Option<&str>) -> Vec<ItemView> {
    match name {
        Some(needle) if !needle.trim().is_empty() => {
            let needle = needle.to_lowercase();
            views
                .into_iter()
                .filter(|view| view.name.to_lowercase().contains(&needle))
                .collect()
        }
        _ => views,
    }
}

#[OpenApi]
impl ItemsApi {
    /// List items
    ///
    /// Returns every item in insertion order, optionally filtered by a
    /// case-insensitive substring of the name
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn list_items(&self, name: Query<Option<String>>) -> Json<Vec<ItemView>> {
        let views: Vec<ItemView> = self
            .repository
            .list()
            .await
            .iter()
            .map(ItemView::from)
            .collect();

        let views = filter_by_name(views, name.0.as_deref());
        tracing::info!(count = views.len(), "Retrieved items");

        Json(views)
    }

    /// Get an item by id
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_item(&self, id: Path<Uuid>) -> GetItemApiResponse {
        match self.repository.get(id.0).await {
            Some(item) => GetItemApiResponse::Ok(Json(ItemView::from(item))),
            None => {
                tracing::debug!(item_id = %id.0, "Item not found");
                GetItemApiResponse::NotFound
            }
        }
    }

    /// Create a new item
    ///
    /// Accepts item details and returns the created item with generated ID and timestamp
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create_item(&self, body: Json<CreateItemRequest>) -> CreateItemApiResponse {
        let CreateItemRequest {
            name,
            description,
            price,
        } = body.0;
        let item = Item::new(name, description, price);
        let view = ItemView::from(&item);
        let location = format!("/items/{}", item.id);

        tracing::info!(item_id = %item.id, "Creating item");
        self.repository.create(item).await;

        CreateItemApiResponse::Created(Json(view), location)
    }

    /// Update the name and price of an existing item
    #[oai(path = "/items/:id", method = "put", tag = "ApiTags::Items")]
    async fn update_item(
        &self,
        id: Path<Uuid>,
        body: Json<UpdateItemRequest>,
    ) -> ItemMutationApiResponse {
        let Some(existing) = self.repository.get(id.0).await else {
            tracing::debug!(item_id = %id.0, "Item not found for update");
            return ItemMutationApiResponse::NotFound;
        };

        let updated = Item {
            name: body.0.name,
            price: body.0.price,
            ..existing
        };

        tracing::info!(item_id = %updated.id, "Updating item");
        self.repository.update(updated).await;

        ItemMutationApiResponse::NoContent
    }

    /// Delete an item
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete_item(&self, id: Path<Uuid>) -> ItemMutationApiResponse {
        if self.repository.get(id.0).await.is_none() {
            tracing::debug!(item_id = %id.0, "Item not found for delete");
            return ItemMutationApiResponse::NotFound;
        }

        tracing::info!(item_id = %id.0, "Deleting item");
        self.repository.delete(id.0).await;

        ItemMutationApiResponse::NoContent
    }
}

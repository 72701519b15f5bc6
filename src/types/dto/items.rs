use poem_openapi::payload::Json;
use poem_openapi::{ApiResponse, Object};
use serde::{Deserialize, Serialize};

use crate::types::db::Item;

/// Request model for creating a new item
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct CreateItemRequest {
    /// Name of the item
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Price of the item
    pub price: f64,
}

/// Request model for updating an existing item
///
/// Only name and price can be changed; description, id and creation
/// date are kept from the stored item.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItemRequest {
    /// New name of the item
    pub name: String,

    /// New price of the item
    pub price: f64,
}

/// Response model representing an item
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    /// Unique identifier for the item
    pub id: String,

    /// Name of the item
    pub name: String,

    /// Optional description of the item
    pub description: Option<String>,

    /// Price of the item
    pub price: f64,

    /// Timestamp when the item was created (ISO 8601 format)
    pub created_date: String,
}

impl From<&Item> for ItemView {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            created_date: item.created_date.to_rfc3339(),
        }
    }
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self::from(&item)
    }
}

/// API response for the get item endpoint
#[derive(ApiResponse, Debug)]
pub enum GetItemApiResponse {
    /// Item found
    #[oai(status = 200)]
    Ok(Json<ItemView>),

    /// No item with the given id
    #[oai(status = 404)]
    NotFound,
}

/// API response for the create item endpoint
#[derive(ApiResponse, Debug)]
pub enum CreateItemApiResponse {
    /// Item created; `Location` points at the new item
    #[oai(status = 201)]
    Created(Json<ItemView>, #[oai(header = "Location")] String),
}

/// API response for the update and delete endpoints
#[derive(ApiResponse, Debug)]
pub enum ItemMutationApiResponse {
    /// Change applied
    #[oai(status = 204)]
    NoContent,

    /// No item with the given id
    #[oai(status = 404)]
    NotFound,
}

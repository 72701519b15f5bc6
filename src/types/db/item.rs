use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Catalog item as held by the item store
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub created_date: DateTime<Utc>,
}

impl Item {
    /// Create a new item with a freshly minted id and the current timestamp
    pub fn new(name: impl Into<String>, description: Option<String>, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            price,
            created_date: Utc::now(),
        }
    }
}

use std::sync::Arc;

use crate::config::BootstrapSettings;
use crate::stores::{InMemoryItemStore, ItemsRepository};

/// Centralized application data following the main-owned stores pattern
///
/// The item repository is created once at startup and shared with every
/// API that needs it.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(&settings)
///   ↓ creates once
///   └─ items_repository (Arc<dyn ItemsRepository>)
///   ↓ passed to
///   └─ ItemsApi::new(repository)
/// ```
pub struct AppData {
    pub items_repository: Arc<dyn ItemsRepository>,
}

impl AppData {
    /// Initialize all application data from bootstrap settings
    pub fn init(settings: &BootstrapSettings) -> Self {
        tracing::info!("Initializing AppData...");

        let store = if settings.seed_items() {
            tracing::debug!("Seeding item store with starter catalog");
            InMemoryItemStore::seeded()
        } else {
            InMemoryItemStore::new()
        };

        tracing::info!("AppData initialization complete");

        Self::with_repository(Arc::new(store))
    }

    /// Build application data around an existing repository
    pub fn with_repository(items_repository: Arc<dyn ItemsRepository>) -> Self {
        Self { items_repository }
    }
}

//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::InventoryClient;
use crate::config::AdminConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the inventory API client.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    inventory: InventoryClient,
}

impl AppState {
    /// Create a new application state from the loaded configuration.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let inventory = InventoryClient::new(&config);

        Self {
            inner: Arc::new(AppStateInner { config, inventory }),
        }
    }

    /// Get a reference to the admin configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// Get a reference to the inventory API client.
    #[must_use]
    pub fn inventory(&self) -> &InventoryClient {
        &self.inner.inventory
    }
}

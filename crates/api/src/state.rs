//! Application state shared across handlers.

use std::sync::Arc;

use crate::backend::BackendClient;
use crate::catalog::CatalogStore;
use crate::config::ApiConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the provider client, and the catalog.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    backend: BackendClient,
    catalog: CatalogStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The provider client is built once here and reused for the lifetime
    /// of the process.
    #[must_use]
    pub fn new(config: ApiConfig, catalog: CatalogStore) -> Self {
        let backend = BackendClient::new(&config.backend);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                backend,
                catalog,
            }),
        }
    }

    /// Get a reference to the service configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the hosted provider client.
    #[must_use]
    pub fn backend(&self) -> &BackendClient {
        &self.inner.backend
    }

    /// Get a reference to the catalog store.
    #[must_use]
    pub fn catalog(&self) -> &CatalogStore {
        &self.inner.catalog
    }
}

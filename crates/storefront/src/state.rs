//! Application state shared across front ends.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::services::{CartStore, CheckoutService, SessionStore};
use crate::storage::{FileStore, SharedStore, StorageError};

/// Application state shared across all consumers.
///
/// Cheaply cloneable via `Arc`. Owns the catalog and both stores; every
/// consumer goes through here rather than constructing stores of its own,
/// which is what keeps "at most one identity, one cart" true process-wide.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    session: Arc<SessionStore>,
    cart: Arc<CartStore>,
    checkout: CheckoutService,
}

impl AppState {
    /// Create application state over the file store named by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the data directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, StorageError> {
        let storage: SharedStore = Arc::new(FileStore::open(config.storage_path())?);
        Ok(Self::with_storage(config, storage))
    }

    /// Create application state over an explicit storage collaborator.
    #[must_use]
    pub fn with_storage(config: StorefrontConfig, storage: SharedStore) -> Self {
        let session = Arc::new(SessionStore::new(Arc::clone(&storage), config.delays));
        let cart = Arc::new(CartStore::new(storage));
        let checkout =
            CheckoutService::new(Arc::clone(&session), Arc::clone(&cart), config.delays);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::builtin(),
                session,
                cart,
                checkout,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the service catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the session store.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.inner.cart
    }

    /// Get a reference to the checkout flow.
    #[must_use]
    pub fn checkout(&self) -> &CheckoutService {
        &self.inner.checkout
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::SimulatedDelays;
    use crate::storage::MemoryStore;

    fn test_state() -> AppState {
        let config = StorefrontConfig {
            delays: SimulatedDelays::none(),
            ..StorefrontConfig::default()
        };
        AppState::with_storage(config, Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_stores_share_one_storage() {
        let state = test_state();
        let service = state.catalog().all().first().cloned().unwrap();

        state.cart().add_item(&service);
        state.session().login("a@b.com", "longenough").await.unwrap();

        assert_eq!(state.cart().total_items(), 1);
        assert!(state.session().is_authenticated());
    }

    #[test]
    fn test_clone_shares_state() {
        let state = test_state();
        let clone = state.clone();
        let service = state.catalog().all().first().cloned().unwrap();

        state.cart().add_item(&service);
        assert!(clone.cart().is_in_cart(&service.id));
    }
}

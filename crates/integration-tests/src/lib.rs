//! Integration tests for Servex.
//!
//! These run the storefront end to end over a real [`FileStore`] in a
//! temporary directory, covering what the unit tests can't: state that
//! survives a "restart" (a fresh [`AppState`] over the same directory) and
//! full browse → cart → login → checkout flows.
//!
//! ```bash
//! cargo test -p servex-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use tempfile::TempDir;

use servex_storefront::config::{SimulatedDelays, StorefrontConfig};
use servex_storefront::state::AppState;
use servex_storefront::storage::FileStore;

/// A storefront over a temp-dir file store.
///
/// Keep the context alive for as long as the state is in use; dropping it
/// deletes the directory.
pub struct TestContext {
    data_dir: TempDir,
    delays: SimulatedDelays,
}

impl TestContext {
    /// Create a context with zero simulated delays.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created; tests have no
    /// way to proceed without one.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().unwrap(),
            delays: SimulatedDelays::none(),
        }
    }

    /// Open an [`AppState`] over this context's data directory.
    ///
    /// Call it a second time to simulate a process restart: the new state
    /// recovers whatever the previous one persisted.
    ///
    /// # Panics
    ///
    /// Panics if the storage file cannot be opened.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn open(&self) -> AppState {
        let config = StorefrontConfig {
            data_dir: self.data_dir.path().to_path_buf(),
            delays: self.delays,
        };
        AppState::new(config).unwrap()
    }

    /// Direct handle to the underlying file store, for seeding slots.
    ///
    /// # Panics
    ///
    /// Panics if the storage file cannot be opened.
    #[must_use]
    #[allow(clippy::unwrap_used)]
    pub fn raw_storage(&self) -> FileStore {
        let config = StorefrontConfig {
            data_dir: self.data_dir.path().to_path_buf(),
            delays: self.delays,
        };
        FileStore::open(config.storage_path()).unwrap()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

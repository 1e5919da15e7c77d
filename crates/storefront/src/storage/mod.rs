//! Key-value persistence for storefront state.
//!
//! The stores persist through an injected [`KeyValueStore`] collaborator
//! rather than touching storage directly, so tests can substitute
//! [`MemoryStore`] for the file-backed implementation.
//!
//! ## Slots
//!
//! Two independent slots exist, named in [`slots`]:
//!
//! - `servex_user` - the serialized logged-in identity, or absent
//! - `cart` - the serialized ordered cart lines, or absent
//!
//! Values are JSON. A malformed value is never a fatal error: the owning
//! store discards it, clears the slot, and starts from empty state.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::sync::Arc;

/// Storage slot keys.
///
/// The names are load-bearing: data directories written by earlier releases
/// use them, so they stay as-is.
pub mod slots {
    /// Slot holding the serialized logged-in user.
    pub const USER: &str = "servex_user";

    /// Slot holding the serialized cart lines.
    pub const CART: &str = "cart";
}

/// Errors that can occur in a key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying I/O failure.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing blob could not be serialized.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A flat string-to-string blob store.
///
/// Semantics follow browser local storage: `set` overwrites, `remove` of an
/// absent key is a no-op, writes are synchronous and last-write-wins.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, overwriting any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the blob cannot be written back.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. No-op if absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the blob cannot be written back.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to a key-value store.
pub type SharedStore = Arc<dyn KeyValueStore>;

//! File-backed key-value store.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use super::{KeyValueStore, StorageError};

/// A [`KeyValueStore`] backed by a single JSON file.
///
/// The file holds one string-to-string map, loaded eagerly at open and
/// rewritten in full on every mutation. The state is two small slots, so
/// the whole-blob rewrite is simpler than any journal and still last-write-wins.
///
/// A file that exists but fails to parse is logged and treated as empty;
/// corruption of the blob is recoverable by design, never fatal.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open (or create) the store at `path`.
    ///
    /// The parent directory is created if missing. An unreadable or
    /// unparseable existing file resets to an empty map.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the parent directory cannot be
    /// created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let entries = Self::load(&path);
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Read and parse the blob, discarding it on corruption.
    fn load(path: &Path) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Failed to read storage blob, starting empty");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Corrupt storage blob, discarding");
                BTreeMap::new()
            }
        }
    }

    /// Write the full map back to disk.
    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let blob = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, blob)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}

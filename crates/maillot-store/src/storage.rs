//! # Storage Backend
//!
//! The local-storage abstraction behind the cart blob.
//!
//! ## Record Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Local-Storage Record                                 │
//! │                                                                         │
//! │  key:   "cart"                                                          │
//! │  value: JSON array of CartLine-shaped objects                           │
//! │                                                                         │
//! │  Read once at startup, rewritten after EVERY cart mutation.             │
//! │  No versioning/migration scheme - a malformed or schema-mismatched      │
//! │  value is discarded silently (empty cart).                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Backends
//! - [`JsonFileStorage`]: one file per key under the platform data dir
//!   (the browser's localStorage equivalent for a native/desktop shell)
//! - [`MemoryStorage`]: in-memory map for tests

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;

use crate::error::{StoreError, StoreResult};

/// Storage key for the serialized cart.
pub const CART_STORAGE_KEY: &str = "cart";

// =============================================================================
// Backend Trait
// =============================================================================

/// A keyed string store with localStorage semantics.
///
/// Implementations must be cheap to call synchronously - every cart
/// mutation writes through this trait before returning.
pub trait StorageBackend: Send + Sync {
    /// Reads the value for a key; `None` when the key has never been set.
    fn read(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes (creates or replaces) the value for a key.
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;
}

// =============================================================================
// JSON File Storage
// =============================================================================

/// File-per-key storage under a data directory.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.maillot.shop/`
/// - **Windows**: `%APPDATA%\maillot\shop\`
/// - **Linux**: `~/.local/share/maillot-shop/`
///
/// ## Development Override
/// Set `MAILLOT_DATA_DIR` to use a custom directory.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Creates a storage rooted at an explicit directory.
    ///
    /// The directory is created if it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(JsonFileStorage { dir })
    }

    /// Creates a storage in the platform-appropriate data directory.
    ///
    /// Checks `MAILLOT_DATA_DIR` first, then falls back to
    /// `directories::ProjectDirs`.
    pub fn from_project_dirs() -> StoreResult<Self> {
        if let Ok(dir) = std::env::var("MAILLOT_DATA_DIR") {
            return Self::new(dir);
        }

        let proj_dirs =
            ProjectDirs::from("com", "maillot", "shop").ok_or(StoreError::NoDataDir)?;
        Self::new(proj_dirs.data_dir())
    }

    /// Returns the directory this storage writes under.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for JsonFileStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

// =============================================================================
// Memory Storage
// =============================================================================

/// In-memory backend for tests.
///
/// Cloning shares the underlying map, so a "reloaded" store built on a
/// clone sees everything the first store wrote - which is exactly what
/// the persistence round-trip tests need.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self.entries.lock().expect("storage mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("maillot-storage-test-{}", Uuid::new_v4()))
    }

    #[test]
    fn test_file_storage_read_missing_key() {
        let storage = JsonFileStorage::new(scratch_dir()).unwrap();
        assert_eq!(storage.read("cart").unwrap(), None);
    }

    #[test]
    fn test_file_storage_write_then_read() {
        let storage = JsonFileStorage::new(scratch_dir()).unwrap();
        storage.write("cart", "[]").unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[]"));

        // Replace, not append.
        storage.write("cart", "[1]").unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = scratch_dir();
        {
            let storage = JsonFileStorage::new(&dir).unwrap();
            storage.write("cart", "[\"kept\"]").unwrap();
        }
        let reopened = JsonFileStorage::new(&dir).unwrap();
        assert_eq!(
            reopened.read("cart").unwrap().as_deref(),
            Some("[\"kept\"]")
        );
    }

    #[test]
    fn test_memory_storage_clone_shares_state() {
        let storage = MemoryStorage::new();
        let view = storage.clone();

        storage.write("cart", "[]").unwrap();
        assert_eq!(view.read("cart").unwrap().as_deref(), Some("[]"));
    }
}

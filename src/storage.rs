//! Persistent key-value storage behind an injected interface.
//!
//! Every collection in the application round-trips through JSON under a fixed
//! string key. The production implementation writes one file per key inside a
//! data directory; tests inject [`MemoryStorage`] instead. Writes are
//! synchronous and unconditional on every state change.

use crate::errors::Result;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

/// Storage keys used by the application.
///
/// The names match the persisted data of earlier releases, so existing data
/// directories keep loading after an upgrade.
pub mod keys {
    /// Product catalog collection.
    pub const PRODUCTS: &str = "quotation_products";
    /// Category label list.
    pub const CATEGORIES: &str = "product_categories";
    /// Singleton company profile.
    pub const COMPANY_INFO: &str = "company_info";
    /// Preferred currency code.
    pub const SELECTED_CURRENCY: &str = "selected_currency";
    /// Reusable quotation templates.
    pub const TEMPLATES: &str = "quotation_templates";
    /// Archived (finalized) quotations.
    pub const SAVED_QUOTATIONS: &str = "saved_quotations";
    /// Stored credential list overriding the default accounts.
    pub const APP_USERS: &str = "app_users";
    /// Authentication flag set on successful login.
    pub const AUTHENTICATED: &str = "isAuthenticated";
    /// Username of the signed-in account.
    pub const CURRENT_USER: &str = "currentUser";
}

/// Opaque key-value store with string keys and JSON-serialized values.
///
/// Implementations are injected into each store constructor, so business logic
/// never touches the filesystem directly and tests can swap in an in-memory
/// fake.
pub trait KeyValueStorage: Send + Sync {
    /// Returns the raw value stored under `key`, or `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the value stored under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<()>;
}

/// File-backed storage: one `<key>.json` file per key inside a data directory.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    /// Opens the storage rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        tracing::debug!(dir = %dir.display(), "opened file storage");
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for JsonFileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage used by tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}

/// Loads and deserializes the value under `key`, falling back to the default
/// when the key is absent or the stored JSON no longer parses.
///
/// Corrupt data is logged and replaced, never propagated; a damaged collection
/// degrades to an empty one instead of wedging the application.
pub fn load_json_or_default<T>(storage: &dyn KeyValueStorage, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(e) => {
            tracing::warn!(key, error = %e, "failed to read stored value, using default");
            return T::default();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key, error = %e, "stored value is corrupt, using default");
            T::default()
        }
    }
}

/// Serializes `value` to JSON and writes it under `key`.
///
/// # Errors
/// Returns an error if serialization or the underlying write fails.
pub fn store_json<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(value)?;
    storage.set(key, &raw)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();

        assert_eq!(storage.get("missing").unwrap(), None);

        storage.set("greeting", "\"hello\"").unwrap();
        assert_eq!(storage.get("greeting").unwrap().as_deref(), Some("\"hello\""));

        storage.remove("greeting").unwrap();
        assert_eq!(storage.get("greeting").unwrap(), None);

        // Removing a missing key is a no-op
        storage.remove("greeting").unwrap();
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = std::env::temp_dir().join(format!("quotepro-test-{}", uuid::Uuid::new_v4()));
        let storage = JsonFileStorage::open(&dir).unwrap();

        assert_eq!(storage.get("values").unwrap(), None);

        storage.set("values", "[1,2,3]").unwrap();
        assert_eq!(storage.get("values").unwrap().as_deref(), Some("[1,2,3]"));

        storage.remove("values").unwrap();
        assert_eq!(storage.get("values").unwrap(), None);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_json_or_default_on_missing_key() {
        let storage = MemoryStorage::new();
        let values: Vec<String> = load_json_or_default(&storage, "nothing_here");
        assert!(values.is_empty());
    }

    #[test]
    fn test_load_json_or_default_on_corrupt_value() {
        let storage = MemoryStorage::new();
        storage.set("broken", "{not json").unwrap();

        let values: Vec<String> = load_json_or_default(&storage, "broken");
        assert!(values.is_empty());
    }

    #[test]
    fn test_store_and_load_json() {
        let storage = MemoryStorage::new();
        store_json(&storage, "list", &vec!["a".to_string(), "b".to_string()]).unwrap();

        let values: Vec<String> = load_json_or_default(&storage, "list");
        assert_eq!(values, vec!["a".to_string(), "b".to_string()]);
    }
}

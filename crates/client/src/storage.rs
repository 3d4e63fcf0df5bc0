//! Durable key-value storage for client state.
//!
//! The browser storefront kept cart, session, and theme state in origin
//! key-value storage. This module is the explicit equivalent: a small
//! [`KeyValueStore`] port with a filesystem adapter for real use and an
//! in-memory adapter for tests. Stores are constructed at startup and
//! injected; nothing here is global.
//!
//! Each key is independently durable and independently invalidated -
//! removing the session never touches the cart.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Well-known storage keys.
///
/// Key names are kept identical to the browser storefront so a data
/// directory migrated from an export stays readable.
pub mod keys {
    /// Ordered cart line items.
    pub const CART: &str = "cart";

    /// Authenticated user profile.
    pub const USER: &str = "user";

    /// Bearer token for the current session.
    pub const AUTH_TOKEN: &str = "authToken";

    /// Theme mode string (`light` / `dark`).
    pub const THEME: &str = "theme";
}

/// Errors that can occur reading or writing the store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be (de)serialized.
    #[error("storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Key contains characters that cannot map to a file name.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
}

/// Port for durable string-keyed JSON storage.
///
/// Values are opaque JSON documents; typed access goes through
/// [`KeyValueStoreExt`].
pub trait KeyValueStore: Send + Sync {
    /// Read the raw JSON document stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw JSON document under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written.
    fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Typed helpers over [`KeyValueStore`].
pub trait KeyValueStoreExt: KeyValueStore {
    /// Read and deserialize the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error on storage failure or if the stored document does
    /// not match `T`.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.get_raw(key)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Serialize and write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error on storage failure or if `value` cannot be
    /// serialized.
    fn put_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStoreExt for S {}

/// Filesystem-backed key-value store.
///
/// One JSON file per key under a data directory. Writes go through a
/// temp file and rename so a crash never leaves a half-written value.
///
/// The store assumes a single owning process; concurrent writers from
/// other processes are not reconciled.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create, if needed) a file store at `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory key-value store for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let values = self
            .values
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut values = self
            .values
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut values = self
            .values
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        values.remove(key);
        Ok(())
    }
}

/// Keys must map cleanly onto file names.
fn validate_key(key: &str) -> Result<(), StorageError> {
    let ok = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        store.put_json(keys::THEME, "dark").unwrap();

        let value: Option<String> = store.get_json(keys::THEME).unwrap();
        assert_eq!(value.as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_store_remove_is_idempotent() {
        let store = MemoryStore::new();
        store.put_raw("cart", "[]").unwrap();
        store.remove("cart").unwrap();
        store.remove("cart").unwrap();
        assert!(store.get_raw("cart").unwrap().is_none());
    }

    #[test]
    fn test_invalid_key_rejected() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.put_raw("../escape", "{}"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            store.get_raw(""),
            Err(StorageError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_file_store_roundtrip_across_instances() {
        let dir = tempfile::tempdir().unwrap();

        {
            let store = FileStore::open(dir.path()).unwrap();
            store.put_json(keys::CART, &vec![1, 2, 3]).unwrap();
        }

        // A fresh instance over the same directory sees the value.
        let store = FileStore::open(dir.path()).unwrap();
        let value: Option<Vec<i32>> = store.get_json(keys::CART).unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_file_store_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        assert!(store.get_raw("user").unwrap().is_none());
    }

    #[test]
    fn test_file_store_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        store.put_raw(keys::USER, "{\"id\":\"u1\"}").unwrap();
        store.remove(keys::USER).unwrap();
        assert!(store.get_raw(keys::USER).unwrap().is_none());

        // Removing again is a no-op.
        store.remove(keys::USER).unwrap();
    }

    #[test]
    fn test_keys_are_independent() {
        let store = MemoryStore::new();
        store.put_raw(keys::CART, "[]").unwrap();
        store.put_raw(keys::THEME, "\"dark\"").unwrap();

        store.remove(keys::CART).unwrap();
        assert!(store.get_raw(keys::CART).unwrap().is_none());
        assert!(store.get_raw(keys::THEME).unwrap().is_some());
    }
}

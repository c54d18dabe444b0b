//! Key/value backends holding one text value per key.

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::debug;

use crate::StoreError;

/// String-keyed storage of whole text values.
///
/// Writes replace the full value; there is no partial update and no locking
/// between processes, so concurrent writers to the same key lose updates.
pub trait KeyValueStore {
    /// Value for `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Replace the value for `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// One file per key inside a directory.
///
/// Keys are percent-encoded into file names so words such as `CI/CD` stay a
/// single file. Values are written to a temporary file and renamed into place.
#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open the store at `root`, creating the directory if needed.
    pub fn open(root: &Path) -> Result<Self, StoreError> {
        fs::create_dir_all(root).map_err(|source| StoreError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    /// File backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", encode_key(key)))
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let io_err = |source| StoreError::Io {
            path: path.clone(),
            source,
        };

        let mut tmp = tempfile::NamedTempFile::new_in(&self.root).map_err(io_err)?;
        tmp.write_all(value.as_bytes()).map_err(io_err)?;
        tmp.persist(&path).map_err(|e| io_err(e.error))?;
        debug!(path = %path.display(), bytes = value.len(), "wrote cache entry");
        Ok(())
    }
}

/// Bytes escaped in file names: everything but `[A-Za-z0-9_.-]`.
const KEY_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_').remove(b'-').remove(b'.');

fn encode_key(key: &str) -> String {
    utf8_percent_encode(key, KEY_ESCAPES).to_string()
}

/// In-process backend, used by tests and for ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Other(format!("mutex poisoned: {e}")))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| StoreError::Other(format!("mutex poisoned: {e}")))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn encode_key_keeps_safe_characters() {
        assert_eq!(encode_key("feedback_Analytics"), "feedback_Analytics");
        assert_eq!(encode_key("feedback_CI/CD"), "feedback_CI%2FCD");
        assert_eq!(encode_key("a b&c"), "a%20b%26c");
        assert_eq!(encode_key("v1.2-rc"), "v1.2-rc");
    }

    #[test]
    fn encode_key_escapes_percent_and_non_ascii() {
        assert_eq!(encode_key("a%2Fb"), "a%252Fb");
        assert_ne!(encode_key("a%2Fb"), encode_key("a/b"));
        assert_eq!(encode_key("Café"), "Caf%C3%A9");
    }

    #[test]
    fn dir_store_missing_key_is_none() {
        let tmp = TempDir::new().unwrap();
        let store = DirStore::open(tmp.path()).unwrap();
        assert_eq!(store.get("feedback_Cloud").unwrap(), None);
    }

    #[test]
    fn dir_store_set_then_get() {
        let tmp = TempDir::new().unwrap();
        let store = DirStore::open(&tmp.path().join("nested")).unwrap();
        store.set("feedback_CI/CD", "[]").unwrap();
        store.set("feedback_CI/CD", "[1]").unwrap();
        assert_eq!(store.get("feedback_CI/CD").unwrap().as_deref(), Some("[1]"));
        assert!(store.path_for("feedback_CI/CD").exists());
    }

    #[test]
    fn dir_store_survives_reopen() {
        let tmp = TempDir::new().unwrap();
        DirStore::open(tmp.path()).unwrap().set("k", "v").unwrap();
        let reopened = DirStore::open(tmp.path()).unwrap();
        assert_eq!(reopened.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}

//! Local persistent key-value store.
//!
//! Each key is an independently serialized JSON value stored as its own
//! file under the store directory, mirroring the browser client's storage
//! layout. Every write fully overwrites the prior value for that key; there
//! is no cross-key transaction and no cross-process change notification.

use crate::storage::AtomicJsonFile;
use serde::{Serialize, de::DeserializeOwned};
use std::path::{Path, PathBuf};
use stemtree_core::error::{Result, StemtreeError};

/// Storage keys for every persisted collection.
///
/// Key names match the browser client's storage entries so that the
/// persisted state layout is recognizable across implementations.
pub mod keys {
    pub const IDENTITY: &str = "stemtree_user";
    pub const ADMIN_USERS: &str = "admin_users";
    pub const SUPERADMIN_USERS: &str = "superadmin_users";
    pub const ADMIN_DOCUMENTS: &str = "admin_documents";
    pub const CHAT_SESSIONS: &str = "chat_sessions";
    pub const ACTIVE_SESSION: &str = "active_session";
    pub const BOOKMARKED_MESSAGES: &str = "bookmarked_messages";
    pub const PLATFORM_SETTINGS: &str = "platform_settings";
    pub const ACTIVITY_LOG: &str = "activity_log";
    pub const USER_SETTINGS: &str = "user_settings";
}

/// A generic durable key-value store backed by one JSON file per key.
///
/// Reads substitute the caller's default when the entry is absent or
/// unparsable; only real I/O failures surface as errors.
#[derive(Debug, Clone)]
pub struct JsonStore {
    base_dir: PathBuf,
}

impl JsonStore {
    /// Creates a store rooted at the given directory.
    ///
    /// The directory is created lazily on first write.
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// The directory entries are stored under.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn file_for<T>(&self, key: &str) -> AtomicJsonFile<T>
    where
        T: Serialize + DeserializeOwned,
    {
        AtomicJsonFile::new(self.base_dir.join(format!("{}.json", key)))
    }

    /// Reads the value stored under `key`, or the provided default when the
    /// entry is absent or unparsable.
    ///
    /// A parse failure is recovered silently (warn log); it never surfaces
    /// to the caller.
    pub fn read_or<T>(&self, key: &str, default: T) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
    {
        match self.file_for::<T>(key).load() {
            Ok(Some(value)) => Ok(value),
            Ok(None) => Ok(default),
            Err(e) if e.is_parse_error() => {
                tracing::warn!(key, error = %e, "corrupted store entry, substituting default");
                Ok(default)
            }
            Err(e) => Err(StemtreeError::data_access(format!(
                "failed to read store entry '{}': {}",
                key, e
            ))),
        }
    }

    /// Reads the value stored under `key`, treating absent and unparsable
    /// entries alike as `None`.
    pub fn read_opt<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: Serialize + DeserializeOwned,
    {
        self.read_or(key, None)
    }

    /// Serializes `value` and fully overwrites the entry under `key`.
    pub fn write<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + DeserializeOwned,
    {
        tracing::debug!(key, "writing store entry");
        self.file_for::<T>(key).save(value).map_err(|e| {
            StemtreeError::data_access(format!("failed to write store entry '{}': {}", key, e))
        })
    }

    /// Removes the entry under `key` (no-op when absent).
    pub fn remove(&self, key: &str) -> Result<()> {
        self.file_for::<serde_json::Value>(key)
            .remove()
            .map_err(|e| {
                StemtreeError::data_access(format!(
                    "failed to remove store entry '{}': {}",
                    key, e
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stemtree_core::directory::{Document, PlatformSettings};
    use tempfile::TempDir;

    fn store() -> (TempDir, JsonStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn test_round_trip_empty_list() {
        let (_dir, store) = store();
        store.write::<Vec<Document>>("docs", &Vec::new()).unwrap();
        let loaded: Vec<Document> = store.read_or("docs", vec![]).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_round_trip_document_list() {
        let (_dir, store) = store();
        let mut documents = stemtree_core::directory::model::seed_documents();
        for i in 0..4 {
            let mut doc = documents[0].clone();
            doc.id = format!("doc-{}", i);
            documents.push(doc);
        }
        assert_eq!(documents.len(), 5);

        store.write("docs", &documents).unwrap();
        let loaded: Vec<Document> = store.read_or("docs", vec![]).unwrap();
        assert_eq!(loaded, documents);
    }

    #[test]
    fn test_round_trip_platform_settings() {
        let (_dir, store) = store();
        let mut settings = PlatformSettings::default();
        settings.multilingual = false;
        settings.max_file_size_mb = 10;

        store.write(keys::PLATFORM_SETTINGS, &settings).unwrap();
        let loaded: PlatformSettings = store
            .read_or(keys::PLATFORM_SETTINGS, PlatformSettings::default())
            .unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_absent_key_yields_default() {
        let (_dir, store) = store();
        let loaded: PlatformSettings = store
            .read_or("missing", PlatformSettings::default())
            .unwrap();
        assert_eq!(loaded, PlatformSettings::default());
    }

    #[test]
    fn test_corrupted_entry_yields_default_never_errors() {
        let (dir, store) = store();
        std::fs::write(dir.path().join("broken.json"), "][ not json").unwrap();

        let loaded: Vec<String> = store.read_or("broken", vec!["fallback".to_string()]).unwrap();
        assert_eq!(loaded, vec!["fallback".to_string()]);

        let opt: Option<String> = store.read_opt("broken").unwrap();
        assert!(opt.is_none());
    }

    #[test]
    fn test_write_fully_overwrites() {
        let (_dir, store) = store();
        store
            .write("list", &vec!["a".to_string(), "b".to_string()])
            .unwrap();
        store.write("list", &vec!["c".to_string()]).unwrap();
        let loaded: Vec<String> = store.read_or("list", vec![]).unwrap();
        assert_eq!(loaded, vec!["c".to_string()]);
    }

    #[test]
    fn test_remove_then_read_yields_default() {
        let (_dir, store) = store();
        store.write("gone", &42u32).unwrap();
        store.remove("gone").unwrap();
        let loaded: u32 = store.read_or("gone", 7).unwrap();
        assert_eq!(loaded, 7);
    }
}

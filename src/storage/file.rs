//! File-based storage backend.

use crate::error::{Error, Result};
use crate::storage::traits::KeyValueStore;
use std::fs;
use std::path::PathBuf;

/// File-based key-value backend with atomic writes.
///
/// Each key lives in its own `store/<key>.json` file under the base directory.
#[derive(Debug)]
pub struct FileBackend {
    base_dir: PathBuf,
}

impl FileBackend {
    /// Create a new file backend.
    ///
    /// Creates the store directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory cannot be created.
    pub fn new(base_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(base_dir.join("store"))?;
        Ok(Self { base_dir })
    }

    /// Get the path to the file holding `key`.
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(Error::InvalidKey(key.to_string()));
        }
        Ok(self.base_dir.join("store").join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let temp = path.with_extension("tmp");

        fs::write(&temp, value)?;
        // Rename is atomic, readers never observe a half-written value
        fs::rename(&temp, &path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_backend() -> (FileBackend, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let backend = FileBackend::new(temp_dir.path().to_path_buf()).unwrap();
        (backend, temp_dir)
    }

    #[test]
    fn creates_store_directory() {
        let temp_dir = TempDir::new().unwrap();
        let _backend = FileBackend::new(temp_dir.path().to_path_buf()).unwrap();
        assert!(temp_dir.path().join("store").exists());
    }

    #[test]
    fn get_missing_key() {
        let (store, _temp) = create_test_backend();
        assert!(store.get("contentHistory").unwrap().is_none());
    }

    #[test]
    fn set_and_get() {
        let (store, _temp) = create_test_backend();
        store.set("userStats", r#"{"totalGenerations":3}"#).unwrap();

        let raw = store.get("userStats").unwrap().unwrap();
        assert_eq!(raw, r#"{"totalGenerations":3}"#);
    }

    #[test]
    fn set_overwrites_previous_value() {
        let (store, _temp) = create_test_backend();
        store.set("userStats", "1").unwrap();
        store.set("userStats", "2").unwrap();
        assert_eq!(store.get("userStats").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn atomic_write_leaves_no_temp_file() {
        let (store, temp_dir) = create_test_backend();
        store.set("contentHistory", "[]").unwrap();

        let dir = temp_dir.path().join("store");
        assert!(!dir.join("contentHistory.tmp").exists());
        assert!(dir.join("contentHistory.json").exists());
    }

    #[test]
    fn values_survive_reopening() {
        let temp_dir = TempDir::new().unwrap();
        FileBackend::new(temp_dir.path().to_path_buf())
            .unwrap()
            .set("userStats", "{}")
            .unwrap();

        let reopened = FileBackend::new(temp_dir.path().to_path_buf()).unwrap();
        assert_eq!(reopened.get("userStats").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn rejects_path_like_keys() {
        let (store, _temp) = create_test_backend();
        assert!(matches!(
            store.set("../escape", "x"),
            Err(Error::InvalidKey(_))
        ));
        assert!(matches!(store.get(""), Err(Error::InvalidKey(_))));
    }

    #[test]
    fn write_failure_is_reported() {
        let (store, temp_dir) = create_test_backend();
        // A directory where the temp file should go makes the write fail
        fs::create_dir(temp_dir.path().join("store").join("userStats.tmp")).unwrap();
        assert!(store.set("userStats", "{}").is_err());
    }
}

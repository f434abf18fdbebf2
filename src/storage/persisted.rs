//! Typed JSON values on top of a [`KeyValueStore`].
//!
//! Reads fail open: a missing, unreadable, or malformed value yields the
//! caller's default. Writes are best effort: a failed write is logged and
//! the in-memory value keeps the update.

use crate::storage::traits::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Read the value stored under `key`, or `default` if absent or invalid.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str, default: T) -> T {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(e) => {
            warn!(key, error = %e, "failed to read stored value, using default");
            return default;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(key, error = %e, "stored value does not match schema, using default");
            default
        }
    }
}

/// Serialize `value` and store it under `key`.
///
/// Returns `false` (after logging) if serialization or the write failed.
pub fn write_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> bool {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(key, error = %e, "failed to serialize value");
            return false;
        }
    };

    if let Err(e) = store.set(key, &raw) {
        warn!(key, error = %e, "failed to persist value");
        return false;
    }
    true
}

/// A value loaded once from the store and written back on every mutation.
pub struct Persisted<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    value: T,
}

impl<T: Serialize + DeserializeOwned> Persisted<T> {
    /// Load the value under `key`, falling back to `default`.
    pub fn load(store: Arc<dyn KeyValueStore>, key: &'static str, default: T) -> Self {
        let value = read_json(store.as_ref(), key, default);
        Self { store, key, value }
    }

    /// Current in-memory value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutate the value in memory, then persist it.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.value);
        write_json(self.store.as_ref(), self.key, &self.value);
        result
    }

    /// Mutate the value in memory without persisting.
    ///
    /// Used to normalize freshly loaded data.
    pub(crate) fn fixup(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
    }
}

impl<T: fmt::Debug> fmt::Debug for Persisted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persisted")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, Result};
    use crate::storage::MemoryBackend;
    use std::io;

    /// Backend whose writes always fail, like a full quota.
    struct FullBackend;

    impl KeyValueStore for FullBackend {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage(io::Error::other("quota exceeded")))
        }
    }

    /// Backend whose reads always fail.
    struct BrokenReadBackend;

    impl KeyValueStore for BrokenReadBackend {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Storage(io::Error::other("disk on fire")))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn read_missing_returns_default() {
        let store = MemoryBackend::new();
        let value: Vec<u32> = read_json(&store, "numbers", vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn read_corrupt_returns_default() {
        let store = MemoryBackend::new();
        store.set("numbers", "{ not json").unwrap();
        let value: Vec<u32> = read_json(&store, "numbers", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn read_wrong_shape_returns_default() {
        let store = MemoryBackend::new();
        store.set("numbers", r#"{"name": "not a list"}"#).unwrap();
        let value: Vec<u32> = read_json(&store, "numbers", vec![1, 2]);
        assert_eq!(value, vec![1, 2]);
    }

    #[test]
    fn read_backend_error_returns_default() {
        let value: u32 = read_json(&BrokenReadBackend, "count", 5);
        assert_eq!(value, 5);
    }

    #[test]
    fn write_then_read() {
        let store = MemoryBackend::new();
        assert!(write_json(&store, "numbers", &vec![1, 2, 3]));
        let value: Vec<u32> = read_json(&store, "numbers", Vec::new());
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn write_failure_reports_false() {
        assert!(!write_json(&FullBackend, "numbers", &vec![1]));
    }

    #[test]
    fn update_persists() {
        let store = Arc::new(MemoryBackend::new());
        let mut counter = Persisted::load(store.clone(), "count", 0u32);
        counter.update(|c| *c += 2);

        assert_eq!(*counter.get(), 2);
        assert_eq!(store.get("count").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn update_keeps_memory_value_when_write_fails() {
        let mut counter = Persisted::load(Arc::new(FullBackend), "count", 0u32);
        counter.update(|c| *c += 1);
        counter.update(|c| *c += 1);
        assert_eq!(*counter.get(), 2);
    }

    #[test]
    fn fixup_does_not_write() {
        let store = Arc::new(MemoryBackend::new());
        let mut counter = Persisted::load(store.clone(), "count", 0u32);
        counter.fixup(|c| *c = 9);

        assert_eq!(*counter.get(), 9);
        assert!(store.get("count").unwrap().is_none());
    }
}

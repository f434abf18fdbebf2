//! Storage trait definitions.

use crate::error::Result;

/// Durable key-value storage holding serialized JSON documents.
///
/// Backends deal in raw strings; typed reads and writes with fallback
/// semantics live in [`crate::storage::persisted`].
pub trait KeyValueStore: Send + Sync {
    /// Get the raw value stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing has been stored under the key yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a raw value under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

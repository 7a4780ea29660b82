//! Repository Layer - Core Traits
//!
//! Defines the abstract key-value interface the list persists through.
//! Implementations can use browser localStorage, memory, etc.

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

/// Storage adapter failures. These never reach the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store does not exist in this context
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
    #[error("stored data could not be decoded: {0}")]
    Codec(String),
}

/// Durable string key-value store scoped to one client.
///
/// Writes replace the entry wholesale.
pub trait KeyValueStore {
    /// Read an entry. A missing entry is `Ok(None)`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove an entry. Removing a missing entry succeeds.
    fn delete(&self, key: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        (**self).delete(key)
    }
}

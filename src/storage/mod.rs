//! Async key-value persistence.
//!
//! The picker only needs string get/set by key. Hosts embed their own
//! store; the crate ships an in-memory one and a directory-backed one.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StorageError;
use std::future::Future;

/// Trait for string key-value storage.
///
/// Each call is a single best-effort attempt; no retries are made.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent.
    fn get_item(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StorageError>> + Send;

    /// Overwrite the value stored under `key`.
    fn set_item(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}

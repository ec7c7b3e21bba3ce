//! Durable key-value storage.
//!
//! The list is persisted as a single value under a fixed key. This module
//! defines the `Storage` contract and two backends:
//! - `FileStorage`: one JSON file per key inside a data directory
//! - `MemoryStorage`: an in-process map for throwaway lists and tests

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Convenience type alias for Result with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// A single-slot-per-key persistence backend.
///
/// Reading an absent key yields `None`. Writes fully replace the previous
/// value.
pub trait Storage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

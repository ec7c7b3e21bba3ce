//! List store error types.

use crate::storage::StorageError;

/// Errors that can occur while committing the list to durable storage.
///
/// Invalid input and unknown ids are not errors: the store ignores them.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The storage backend failed to read or write
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// The list could not be serialized
    #[error("Failed to serialize shopping list: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_store_error_from_storage_error() {
        let storage_error = StorageError::Write {
            path: PathBuf::from("/data/shoppingItems.json"),
            source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
        };
        let error: StoreError = storage_error.into();
        assert!(matches!(error, StoreError::Storage(_)));
        assert!(error.to_string().contains("Storage error"));
        assert!(error.to_string().contains("disk full"));
    }
}

//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::config::ConfigError;
pub use crate::item::ItemError;
pub use crate::storage::StorageError;
pub use crate::store::StoreError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application. It uses `thiserror` for automatic error derivation
/// and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// List store errors
    #[error("Shopping list error: {0}")]
    Store(#[from] StoreError),

    /// Durable storage errors raised outside the store
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Invalid command input
    #[error("Invalid input: {0}")]
    Item(#[from] ItemError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),

    /// Command-line argument could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// No item matches the given position or id
    #[error("No item matches '{0}'")]
    ItemNotFound(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let config_error = ConfigError::FilePathNotSet;
        let app_error: AppError = config_error.into();
        assert!(matches!(app_error, AppError::Config(_)));
        assert!(app_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_app_error_from_store_error() {
        let store_error: StoreError = serde_json::from_str::<u8>("nope").unwrap_err().into();
        let app_error: AppError = store_error.into();
        assert!(matches!(app_error, AppError::Store(_)));
        assert!(app_error.to_string().contains("Shopping list error"));
    }

    #[test]
    fn test_app_error_from_item_error() {
        let app_error: AppError = ItemError::UnknownUnit("box".to_string()).into();
        assert!(matches!(app_error, AppError::Item(_)));
        assert!(app_error.to_string().contains("box"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert!(app_error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_app_error_item_not_found() {
        let error = AppError::ItemNotFound("7".to_string());
        assert_eq!(error.to_string(), "No item matches '7'");
    }
}

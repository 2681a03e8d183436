//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must
//! implement. The catalog core holds no handle to stored objects; it keeps
//! only their keys, so every operation here is addressed by key.

use async_trait::async_trait;
use thiserror::Error;

use vicat_core::models::Resource;
use vicat_core::AppError;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Store failed: {0}")]
    StoreFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// All storage backends (local filesystem, in-memory) must implement this
/// trait. The media flows work with any backend without coupling to
/// implementation details.
///
/// **Key format:** keys are produced by [`crate::keys`] and are
/// slash-separated relative paths, e.g. `videos/{video_id}/trailer/{name}`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store a resource under the given key, replacing any previous object.
    async fn store(&self, key: &str, resource: Resource) -> StorageResult<()>;

    /// Fetch the resource stored under `key`, if any.
    async fn get(&self, key: &str) -> StorageResult<Option<Resource>>;

    /// List all keys starting with `prefix`, in lexicographic order.
    async fn list(&self, prefix: &str) -> StorageResult<Vec<String>>;

    /// Delete every listed key. Missing keys are ignored.
    async fn delete_all(&self, keys: &[String]) -> StorageResult<()>;
}

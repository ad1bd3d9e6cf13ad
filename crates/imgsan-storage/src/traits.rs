//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("fetch failed: {0}")]
    FetchFailed(String),

    #[error("write failed: {0}")]
    WriteFailed(String),

    #[error("invalid object key: {0}")]
    InvalidKey(String),

    #[error("storage configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// A raw object fetched from a store: the bytes plus the content type the
/// store declared for it, when it declared one.
#[derive(Debug, Clone)]
pub struct FetchedObject {
    pub data: Vec<u8>,
    pub content_type: Option<String>,
}

/// Storage abstraction trait
///
/// Backends (S3, local filesystem) implement object fetch and write addressed
/// by `(store, key)`. The store name comes from the notification for reads and
/// from fixed configuration for writes; backends do not decide routing.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Fetch an object and its declared content type.
    async fn get(&self, store: &str, key: &str) -> StorageResult<FetchedObject>;

    /// Write an object with an explicit content type.
    async fn put(
        &self,
        store: &str,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<()>;
}

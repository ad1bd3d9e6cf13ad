//! Imgsan Storage Library
//!
//! Storage abstraction and backends for the image sanitiser. The sanitiser
//! reads raw objects from a source store named per-notification and writes
//! sanitized copies to a fixed destination store, so the `Storage` trait is
//! addressed by `(store, key)` rather than being bound to a single bucket.

pub mod factory;
pub mod local;
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use traits::{FetchedObject, Storage, StorageError, StorageResult};

//! Imgsan Core Library
//!
//! This crate provides the domain models, error taxonomy, and configuration
//! shared across the image sanitiser components.

pub mod config;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use models::{
    BatchSummary, EventRecord, HandlerResponse, ObjectCreatedEvent, ObjectRef, Outcome, StoreRef,
};
pub use storage_types::StorageBackend;

/// Content type assumed for destination writes when the source store did not
/// declare one.
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

//! Imgsan Processing Library
//!
//! The sanitizer: a pure transform from raw image bytes to a metadata-free,
//! re-encoded copy. Stateless, no I/O.

pub mod sanitizer;

// Re-export commonly used types
pub use sanitizer::{sanitize, SanitizeError, SanitizedImage, JPEG_QUALITY};

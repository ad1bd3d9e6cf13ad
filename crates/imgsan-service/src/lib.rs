//! Imgsan Service
//!
//! Event dispatcher and HTTP surface for the image sanitiser. The dispatcher
//! turns one batch of object-created notifications into one batch summary,
//! isolating failures per record; the HTTP layer is a thin axum wrapper
//! around it.

pub mod dispatcher;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
pub mod telemetry;

pub use dispatcher::{EventDispatcher, RecordError};
pub use state::AppState;

//! Test helpers: build the router against a temp-dir local storage backend.
//!
//! Run from workspace root: `cargo test -p imgsan-service --test events_test`.

pub mod fixtures;

use axum_test::TestServer;
use imgsan_service::dispatcher::EventDispatcher;
use imgsan_service::{routes, AppState};
use imgsan_storage::{LocalStorage, Storage};
use std::sync::Arc;
use tempfile::TempDir;

/// Destination store name used by all integration tests.
pub const OUTPUT_BUCKET: &str = "bucket-out";

pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<LocalStorage>,
    // Keeps the storage directory alive for the duration of the test
    _temp_dir: TempDir,
}

pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let storage = Arc::new(
        LocalStorage::new(temp_dir.path())
            .await
            .expect("Failed to create local storage"),
    );

    let shared: Arc<dyn Storage> = storage.clone();
    let dispatcher = EventDispatcher::new(shared, OUTPUT_BUCKET.to_string());
    let state = Arc::new(AppState { dispatcher });

    let server = TestServer::new(routes::build_router(state)).expect("Failed to start test server");

    TestApp {
        server,
        storage,
        _temp_dir: temp_dir,
    }
}

//! Event dispatcher
//!
//! Turns one batch of object-created notifications into one `HandlerResponse`.
//! Each record is processed fully (fetch, sanitize, write) before the next
//! begins, and every error is caught at the per-record boundary: the batch
//! always completes with exactly one outcome per record, in input order.

use imgsan_core::models::{EventRecord, HandlerResponse, ObjectCreatedEvent, Outcome};
use imgsan_core::DEFAULT_CONTENT_TYPE;
use imgsan_processing::{sanitize, SanitizeError};
use imgsan_storage::{Storage, StorageError};
use std::sync::Arc;
use thiserror::Error;

/// Per-record processing errors. None of these propagate out of `handle`;
/// they are converted into `error` outcomes at the record boundary.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed notification: {0}")]
    Malformed(&'static str),

    #[error(transparent)]
    Fetch(StorageError),

    #[error(transparent)]
    Sanitize(#[from] SanitizeError),

    #[error(transparent)]
    Write(StorageError),
}

struct ProcessedRecord {
    input_key: String,
    input_size: usize,
    output_size: usize,
}

/// Dispatches notification batches to the sanitizer.
///
/// Holds the shared storage client and the fixed destination store name;
/// constructed once at process start and shared by reference.
pub struct EventDispatcher {
    storage: Arc<dyn Storage>,
    output_bucket: String,
}

impl EventDispatcher {
    pub fn new(storage: Arc<dyn Storage>, output_bucket: String) -> Self {
        EventDispatcher {
            storage,
            output_bucket,
        }
    }

    /// Process one batch. Never fails as a whole: per-record failures become
    /// `error` outcomes and the outer status code is always 200.
    pub async fn handle(&self, event: ObjectCreatedEvent) -> HandlerResponse {
        let mut results = Vec::with_capacity(event.records.len());

        for record in &event.records {
            let input_key = record.input_key();

            match self.process_record(record).await {
                Ok(done) => {
                    tracing::info!(
                        key = %done.input_key,
                        output_bucket = %self.output_bucket,
                        input_size = done.input_size,
                        output_size = done.output_size,
                        "Record sanitized"
                    );
                    results.push(Outcome::Success {
                        output_key: done.input_key.clone(),
                        input_key: done.input_key,
                        input_size: done.input_size,
                        output_size: done.output_size,
                    });
                }
                Err(e) => {
                    tracing::error!(key = %input_key, error = %e, "Record processing failed");
                    results.push(Outcome::Error {
                        input_key,
                        error: e.to_string(),
                    });
                }
            }
        }

        HandlerResponse::new(results)
    }

    /// Process a single record. Total: every failure mode maps to a
    /// `RecordError`, so the batch loop needs no catch-all.
    async fn process_record(&self, record: &EventRecord) -> Result<ProcessedRecord, RecordError> {
        let store = record
            .store
            .as_ref()
            .ok_or(RecordError::Malformed("missing store reference"))?;
        let object = record
            .object
            .as_ref()
            .ok_or(RecordError::Malformed("missing object reference"))?;

        tracing::info!(bucket = %store.name, key = %object.key, "Processing image");

        let fetched = self
            .storage
            .get(&store.name, &object.key)
            .await
            .map_err(RecordError::Fetch)?;
        let input_size = fetched.data.len();

        tracing::info!(key = %object.key, size_bytes = input_size, "Fetched image");

        let sanitized = sanitize(&fetched.data)?;
        let output_size = sanitized.data.len();

        // Same key in the destination store, so the object stays traceable
        // across both stores. Content type follows the source's declaration.
        let content_type = fetched
            .content_type
            .as_deref()
            .unwrap_or(DEFAULT_CONTENT_TYPE);

        self.storage
            .put(&self.output_bucket, &object.key, sanitized.data, content_type)
            .await
            .map_err(RecordError::Write)?;

        Ok(ProcessedRecord {
            input_key: object.key.clone(),
            input_size,
            output_size,
        })
    }
}

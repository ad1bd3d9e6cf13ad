//! Event and outcome models
//!
//! Wire shapes for the object-created event batch and the per-record
//! processing outcomes returned to the caller.

use serde::{Deserialize, Serialize};

/// A batch of object-created notifications.
///
/// An absent or empty `records` array is a valid (empty) batch, and a
/// `records` value that is not an array at all degrades to an empty batch:
/// when iteration cannot begin the handler reports `processed = 0` instead
/// of failing the invocation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectCreatedEvent {
    #[serde(default, deserialize_with = "lenient_records")]
    pub records: Vec<EventRecord>,
}

/// Deserialize `records` without ever failing the batch: a non-array value
/// becomes an empty batch, and a non-object entry becomes a record with no
/// references, which later surfaces as a per-record malformed outcome.
fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<EventRecord>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(items) => Ok(items
            .into_iter()
            .map(|item| {
                serde_json::from_value(item).unwrap_or(EventRecord {
                    store: None,
                    object: None,
                })
            })
            .collect()),
        _ => Ok(Vec::new()),
    }
}

/// One object-created notification.
///
/// `store` and `object` are optional so that a malformed record surfaces as a
/// per-record error outcome instead of failing the whole batch parse.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub store: Option<StoreRef>,
    #[serde(default)]
    pub object: Option<ObjectRef>,
}

/// Source store reference inside a notification.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreRef {
    #[serde(default)]
    pub name: String,
}

/// Created-object reference inside a notification.
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRef {
    #[serde(default)]
    pub key: String,
}

impl EventRecord {
    /// Object key for reporting purposes; empty when the record carries none.
    pub fn input_key(&self) -> String {
        self.object
            .as_ref()
            .map(|o| o.key.clone())
            .unwrap_or_default()
    }
}

/// Result of processing one notification. Exactly one outcome is produced per
/// record, failure included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Success {
        input_key: String,
        output_key: String,
        input_size: usize,
        output_size: usize,
    },
    Error {
        input_key: String,
        error: String,
    },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn input_key(&self) -> &str {
        match self {
            Outcome::Success { input_key, .. } => input_key,
            Outcome::Error { input_key, .. } => input_key,
        }
    }
}

/// Per-batch summary: ordered outcomes plus a count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub processed: usize,
    pub results: Vec<Outcome>,
}

/// Envelope returned to the event source. The outer status code is always 200;
/// per-record failures are reported inside `body.results`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: BatchSummary,
}

impl HandlerResponse {
    pub fn new(results: Vec<Outcome>) -> Self {
        HandlerResponse {
            status_code: 200,
            body: BatchSummary {
                processed: results.len(),
                results,
            },
        }
    }
}

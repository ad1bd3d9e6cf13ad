//! Configuration module
//!
//! Environment-driven configuration for the sanitiser service. The only
//! required setting is `OUTPUT_BUCKET`; its absence is a startup-time fatal
//! condition.

use std::env;
use std::str::FromStr;

use crate::storage_types::StorageBackend;

const DEFAULT_SERVER_PORT: u16 = 8080;

/// Service configuration, loaded once at process start.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    /// Destination store for sanitized copies. Fixed configuration, never
    /// derived per-request.
    pub output_bucket: String,
    pub storage_backend: StorageBackend,
    // S3 backend settings
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>,
    // Local backend settings
    pub local_storage_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let output_bucket = env::var("OUTPUT_BUCKET")
            .map_err(|_| anyhow::anyhow!("OUTPUT_BUCKET must be set"))?;

        let storage_backend = env::var("STORAGE_BACKEND")
            .map(|s| StorageBackend::from_str(&s))
            .unwrap_or(Ok(StorageBackend::S3))?;

        Ok(Config {
            server_port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid PORT: {}", e))?,
            output_bucket,
            storage_backend,
            s3_region: env::var("S3_REGION")
                .or_else(|_| env::var("AWS_REGION"))
                .ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.output_bucket.is_empty() {
            return Err(anyhow::anyhow!("OUTPUT_BUCKET must not be empty"));
        }
        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION must be set for the s3 backend"
                    ));
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set for the local backend"
                    ));
                }
            }
        }
        Ok(())
    }
}

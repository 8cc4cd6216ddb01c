use chrono::NaiveDateTime;
use std::io;
use thiserror::Error;
use tracing::{debug, error};

use crate::command::ParseError;
use crate::shared::config::SettingsError;

/// Errors raised while talking to the remote store.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Invalid request URI: {0}")]
    InvalidUri(String),

    #[error("Failed to build request: {0}")]
    Request(#[from] hyper::http::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Connection error: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),

    #[error("Failed to read response body: {0}")]
    Body(#[from] hyper::Error),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("InfluxDB returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed CSV response: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unexpected response: {0}")]
    Other(String),
}

/// Errors that abort a whole run. No partial output is produced.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read input {source_name}: {source}")]
    ReadInput {
        source_name: String,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("Fetching batch {batch} failed: {source}")]
    Fetch {
        batch: usize,
        #[source]
        source: FetchError,
    },

    #[error("tsv output requires an interval")]
    MissingInterval,

    #[error("Local time {at} does not exist in timezone {zone}")]
    NonexistentLocalTime { at: NaiveDateTime, zone: String },
}

impl EngineError {
    pub fn log_error(&self) {
        match self {
            EngineError::ReadInput {
                source_name,
                source,
            } => {
                error!("Failed to read input {}: {}", source_name, source);
            }
            EngineError::Parse(e) => {
                error!("Malformed input: {}", e);
                debug!("Malformed input details: {:?}", e);
            }
            EngineError::Settings(e) => {
                error!("Configuration error: {}", e);
                debug!("Configuration error details: {:?}", e);
            }
            EngineError::Fetch { batch, source } => {
                error!("Fetching batch {} failed: {}", batch, source);
                debug!("Fetch error details: {:?}", source);
            }
            EngineError::MissingInterval => {
                error!("tsv output requires an interval");
            }
            EngineError::NonexistentLocalTime { at, zone } => {
                error!("Local time {} does not exist in timezone {}", at, zone);
            }
        }
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Failed to load configuration: {0}")]
    Config(String),

    #[error("invalid value for {name}: {source}")]
    InvalidConfig {
        name: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Failed to persist news to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to write news store {path} that could not be read: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    #[error("News ids exhausted after id {last_id}")]
    IdsExhausted { last_id: u64 },

    #[error("Failed to encode news: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to initialize tracing: {0}")]
    Telemetry(String),
}

// file: src/error.rs
// description: Custom error types and result type aliases
// reference: https://docs.rs/thiserror

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PipelineError>;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetch failed for {url}: HTTP status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Page is not parseable markup: {0}")]
    Parse(String),

    #[error("Invalid patent number: {0}")]
    PatentNumber(String),

    #[error("Model artifact {path} failed to load: {message}")]
    ModelLoad { path: PathBuf, message: String },

    #[error("Feature shape violation: expected {expected} elements, got {actual}")]
    Shape { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

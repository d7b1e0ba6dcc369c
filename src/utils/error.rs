//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while talking to the WebDriver endpoint
#[derive(Error, Debug)]
pub enum DriverError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("WebDriver endpoint returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("WebDriver error: {0}")]
    Protocol(String),

    #[error("session response missing sessionId")]
    MissingSessionId,
}

/// Errors that can occur while decoding performance log entries
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors raised by the phase aggregator.
///
/// Unmatched Begin/End markers and unknown event names are not errors;
/// only an entry that claims a recognized category while missing a field
/// that category's branch requires is rejected, since silently defaulting
/// would corrupt the totals without any signal.
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("malformed {category} entry: missing required field `{field}`")]
    MalformedEntry {
        category: &'static str,
        field: &'static str,
    },
}

/// Errors that can occur during scenario discovery
#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("scenario directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("failed to read scenario directory: {0}")]
    ReadFailed(#[from] std::io::Error),

    #[error("cannot build file URL for {0}")]
    InvalidPath(PathBuf),
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

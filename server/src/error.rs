//! Error types for the dev server and the CLI.
//!
//! - [`ConfigError`] - Invalid configuration values
//! - [`ServerError`] - Top-level errors returned by every command
//!
//! Submission failures stay [`SubmitError`]s: they are folded into the
//! result record by the session, and only reach [`ServerError`] when a
//! command needs them as a hard failure.

use ragload::SubmitError;
use thiserror::Error;

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors in command-line or environment configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The processor/endpoint URL is not an absolute http(s) URL.
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// The upload limit is zero or overflows.
    #[error("Invalid upload limit: {0} MB")]
    InvalidUploadLimit(u64),
}

// =============================================================================
// Server Errors (top-level)
// =============================================================================

/// Top-level errors for `ragload serve` and `ragload submit`.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Filesystem or socket error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Could not read a file given on the command line.
    #[error("Cannot read '{path}': {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON output error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Submission failed.
    #[error("Submission failed: {0}")]
    Submit(#[from] SubmitError),

    /// Nothing left to send after filtering.
    #[error("No files to submit")]
    NothingToSubmit,

    /// The processing endpoint reported a failure.
    #[error("Processing failed: {0}")]
    ProcessingFailed(String),
}

/// Result type for server and CLI operations.
pub type ServerResult<T> = Result<T, ServerError>;

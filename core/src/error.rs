//! Error types for the submission workflow.
//!
//! Every failure that can happen between "the user pressed Process" and
//! "a result is on screen" is a [`SubmitError`]. The session never shows
//! these directly: they are folded into a synthetic
//! [`ProcessingResult`](crate::ProcessingResult) so the result panel has a
//! single shape to render.

use thiserror::Error;

// =============================================================================
// Submission Errors
// =============================================================================

/// Errors raised while sending files to the processing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request never produced a response (DNS, connection refused,
    /// aborted fetch, timeout).
    #[error("{0}")]
    Transport(String),

    /// The response body is not JSON at all.
    #[error("{0}")]
    InvalidJson(String),

    /// The response body is JSON but not a processing result.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// A selected file could not be attached to the request.
    #[error("Failed to attach '{name}': {message}")]
    Payload { name: String, message: String },
}

impl SubmitError {
    /// Human-readable description used for the `error` field of the
    /// synthetic failure record.
    ///
    /// Falls back to `"Unknown error"` when the underlying failure carried
    /// no text.
    pub fn description(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            text
        }
    }
}

/// Result type for submission operations.
pub type SubmitResult<T> = Result<T, SubmitError>;

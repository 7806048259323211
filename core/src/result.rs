//! The processing result returned by the endpoint, and how it is shown.
//!
//! The endpoint answers every request (success or not) with a flat JSON
//! record:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Successfully processed 3 files and created 12 chunks",
//!   "files_processed": 3,
//!   "chunks_created": 12
//! }
//! ```
//!
//! [`ProcessingResult::from_json_str`] decodes and validates that shape;
//! [`ResultView`] is what the result panel (or the CLI) renders from it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::FAILURE_MESSAGE;
use crate::error::{SubmitError, SubmitResult};

// =============================================================================
// Processing Result
// =============================================================================

/// Terminal outcome of one submission.
///
/// Extra fields in the response are ignored; the optional ones default to
/// absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProcessingResult {
    /// Whether the backend considers the batch processed
    pub success: bool,
    /// Backend message, shown verbatim
    pub message: String,
    /// Number of chunks stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunks_created: Option<u64>,
    /// Number of files the backend read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_processed: Option<u64>,
    /// Error details, shown verbatim when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessingResult {
    /// Decode a response body.
    ///
    /// A body that is not JSON is [`SubmitError::InvalidJson`]; JSON that
    /// does not have the result shape is [`SubmitError::MalformedResponse`].
    pub fn from_json_str(body: &str) -> SubmitResult<Self> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| SubmitError::InvalidJson(e.to_string()))?;
        Self::from_value(value)
    }

    /// Decode a response body, whatever its status.
    ///
    /// The endpoint reports its own failures as JSON with a 500 status, so
    /// the status only matters as context when the body cannot be read.
    pub fn from_response(status: u16, body: &str) -> SubmitResult<Self> {
        Self::from_json_str(body).map_err(|e| match e {
            SubmitError::InvalidJson(msg) if !(200..300).contains(&status) => {
                SubmitError::InvalidJson(format!("HTTP {}: {}", status, msg))
            }
            other => other,
        })
    }

    /// Validate an already-parsed JSON value against the result shape.
    pub fn from_value(value: Value) -> SubmitResult<Self> {
        if !value.is_object() {
            return Err(SubmitError::MalformedResponse(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        serde_json::from_value(value).map_err(|e| SubmitError::MalformedResponse(e.to_string()))
    }

    /// Synthetic record for a submission that failed before a result
    /// could be read.
    pub fn failure(err: &SubmitError) -> Self {
        Self {
            success: false,
            message: FAILURE_MESSAGE.to_string(),
            chunks_created: None,
            files_processed: None,
            error: Some(err.description()),
        }
    }

    /// Error text worth showing: present and not empty. Whitespace is
    /// shown as-is.
    pub fn visible_error(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// =============================================================================
// Result View
// =============================================================================

/// Heading shown for a successful result.
pub const SUCCESS_HEADING: &str = "Processing Complete!";

/// Heading shown for a failed result.
pub const FAILURE_HEADING: &str = "Processing Failed";

/// Label of the fixed storage indicator.
pub const STORED_LABEL: &str = "Stored in vector database";

/// Follow-up hints shown under a successful result.
pub const NEXT_STEPS: [&str; 3] = [
    "Your files have been processed and stored in the vector database",
    "You can now use the query system to search your knowledge base",
    "All content is available for AI-powered retrieval and generation",
];

/// Counters shown for a successful result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResultStats {
    pub files_processed: u64,
    pub chunks_created: u64,
}

/// Everything the result panel renders, derived from a [`ProcessingResult`].
///
/// The success block and the error block are independent: a record with
/// `success: true` and an `error` shows both.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub success: bool,
    pub heading: &'static str,
    pub message: String,
    /// Present only for successful results; absent counters read as 0
    pub stats: Option<ResultStats>,
    /// Present whenever the record carries a non-empty error
    pub error: Option<String>,
}

impl ResultView {
    pub fn new(result: &ProcessingResult) -> Self {
        let stats = result.success.then(|| ResultStats {
            files_processed: result.files_processed.unwrap_or(0),
            chunks_created: result.chunks_created.unwrap_or(0),
        });

        Self {
            success: result.success,
            heading: if result.success { SUCCESS_HEADING } else { FAILURE_HEADING },
            message: result.message.clone(),
            stats,
            error: result.visible_error().map(str::to_string),
        }
    }

    /// Plain-text rendering, used by the CLI.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        let mark = if self.success { "✅" } else { "❌" };
        out.push_str(&format!("{} {}\n", mark, self.heading));
        out.push_str(&format!("   {}\n", self.message));

        if let Some(stats) = self.stats {
            out.push_str(&format!("   Files processed: {}\n", stats.files_processed));
            out.push_str(&format!("   Chunks created:  {}\n", stats.chunks_created));
            out.push_str(&format!("   ✓ {}\n", STORED_LABEL));
        }

        if let Some(ref error) = self.error {
            out.push_str(&format!("   Error details: {}\n", error));
        }

        out
    }
}

impl From<&ProcessingResult> for ResultView {
    fn from(result: &ProcessingResult) -> Self {
        ResultView::new(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_response() {
        let body = r#"{"success":true,"message":"Done","chunks_created":12,"files_processed":3}"#;
        let result = ProcessingResult::from_json_str(body).unwrap();

        assert!(result.success);
        assert_eq!(result.message, "Done");
        assert_eq!(result.chunks_created, Some(12));
        assert_eq!(result.files_processed, Some(3));
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let body = r#"{"success":false,"message":"No files were uploaded","job":"x","error":null}"#;
        let result = ProcessingResult::from_json_str(body).unwrap();

        assert!(!result.success);
        assert_eq!(result.error, None);
        assert_eq!(result.chunks_created, None);
    }

    #[test]
    fn test_not_json_is_invalid_json() {
        let err = ProcessingResult::from_json_str("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, SubmitError::InvalidJson(_)));
    }

    #[test]
    fn test_error_status_with_json_body_is_a_result() {
        let body = r#"{"success":false,"message":"Error processing files","error":"disk full"}"#;
        let result = ProcessingResult::from_response(500, body).unwrap();
        assert_eq!(result.error.as_deref(), Some("disk full"));
    }

    #[test]
    fn test_error_status_with_html_body_mentions_status() {
        let err = ProcessingResult::from_response(404, "<h1>Not Found</h1>").unwrap_err();
        match err {
            SubmitError::InvalidJson(msg) => assert!(msg.starts_with("HTTP 404: ")),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = ProcessingResult::from_response(200, "oops").unwrap_err();
        match err {
            SubmitError::InvalidJson(msg) => assert!(!msg.starts_with("HTTP")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let err = ProcessingResult::from_json_str(r#"{"status":"ok"}"#).unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));

        let err = ProcessingResult::from_json_str(r#"[1,2,3]"#).unwrap_err();
        match err {
            SubmitError::MalformedResponse(msg) => assert!(msg.contains("an array")),
            other => panic!("unexpected error: {:?}", other),
        }

        let err = ProcessingResult::from_json_str(r#"{"success":"yes","message":"m"}"#).unwrap_err();
        assert!(matches!(err, SubmitError::MalformedResponse(_)));
    }

    #[test]
    fn test_failure_record() {
        let result = ProcessingResult::failure(&SubmitError::Transport("Failed to fetch".into()));
        assert!(!result.success);
        assert_eq!(result.message, "Failed to process files");
        assert_eq!(result.error.as_deref(), Some("Failed to fetch"));
    }

    #[test]
    fn test_view_success() {
        let result = ProcessingResult {
            success: true,
            message: "Done".into(),
            chunks_created: Some(12),
            files_processed: Some(3),
            error: None,
        };
        let view = ResultView::new(&result);

        assert_eq!(view.heading, SUCCESS_HEADING);
        assert_eq!(view.message, "Done");
        assert_eq!(
            view.stats,
            Some(ResultStats { files_processed: 3, chunks_created: 12 })
        );
        assert_eq!(view.error, None);
    }

    #[test]
    fn test_view_success_defaults_missing_counts() {
        let result = ProcessingResult::from_json_str(r#"{"success":true,"message":"ok"}"#).unwrap();
        let stats = ResultView::new(&result).stats.unwrap();
        assert_eq!(stats.files_processed, 0);
        assert_eq!(stats.chunks_created, 0);
    }

    #[test]
    fn test_view_failure_hides_stats() {
        let result = ProcessingResult::from_json_str(
            r#"{"success":false,"message":"No content could be extracted","files_processed":2}"#,
        )
        .unwrap();
        let view = ResultView::new(&result);

        assert_eq!(view.heading, FAILURE_HEADING);
        assert_eq!(view.stats, None);
    }

    #[test]
    fn test_view_success_with_error_shows_both() {
        let result = ProcessingResult {
            success: true,
            message: "Partially done".into(),
            chunks_created: Some(4),
            files_processed: Some(1),
            error: Some("1 file skipped".into()),
        };
        let view = ResultView::new(&result);

        assert!(view.stats.is_some());
        assert_eq!(view.error.as_deref(), Some("1 file skipped"));

        let text = view.to_text();
        assert!(text.contains("Processing Complete!"));
        assert!(text.contains("Chunks created:  4"));
        assert!(text.contains("Error details: 1 file skipped"));
    }

    #[test]
    fn test_empty_error_not_shown() {
        let result = ProcessingResult::from_json_str(
            r#"{"success":false,"message":"m","error":""}"#,
        )
        .unwrap();
        assert_eq!(ResultView::new(&result).error, None);
    }

    #[test]
    fn test_whitespace_error_shown_verbatim() {
        let result = ProcessingResult::from_json_str(
            r#"{"success":false,"message":"m","error":"  "}"#,
        )
        .unwrap();
        assert_eq!(result.visible_error(), Some("  "));
        assert_eq!(ResultView::new(&result).error.as_deref(), Some("  "));
    }
}

//! HTTP service posting the selection to the processing endpoint.

use async_trait::async_trait;
use gloo_net::http::Request;
use ragload::{file_field_name, ProcessingClient, ProcessingResult, SubmitError, SubmitResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FormData};

use crate::config::process_url;
use crate::types::BrowserFile;

/// Sends the selection with `fetch` as `multipart/form-data`.
pub struct BrowserClient {
    endpoint: String,
}

impl BrowserClient {
    /// Client for the same-origin processing endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(process_url())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for BrowserClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ProcessingClient<File> for BrowserClient {
    async fn submit(&self, files: &[BrowserFile]) -> SubmitResult<ProcessingResult> {
        let form_data = FormData::new().map_err(|e| SubmitError::Payload {
            name: "form".to_string(),
            message: js_error_text(&e),
        })?;

        for (index, file) in files.iter().enumerate() {
            form_data
                .append_with_blob_and_filename(&file_field_name(index), &file.payload, &file.name)
                .map_err(|e| SubmitError::Payload {
                    name: file.name.clone(),
                    message: js_error_text(&e),
                })?;
        }

        log::info!("📤 Posting {} files to {}", files.len(), self.endpoint);

        let request = Request::post(&self.endpoint)
            .body(form_data)
            .map_err(transport_error)?;

        let response = request.send().await.map_err(transport_error)?;

        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;

        log::debug!("Processing endpoint answered {} ({} bytes)", status, body.len());

        ProcessingResult::from_response(status, &body)
    }
}

/// Transport failure carrying only the JS error message, as the browser
/// reports it (`Failed to fetch`, not `TypeError: Failed to fetch`).
fn transport_error(err: gloo_net::Error) -> SubmitError {
    SubmitError::Transport(fetch_error_text(err))
}

fn fetch_error_text(err: gloo_net::Error) -> String {
    match err {
        gloo_net::Error::JsError(js) => js.message,
        other => other.to_string(),
    }
}

/// Best-effort text of a thrown JS value (`Error.message` or the value itself).
fn js_error_text(value: &JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_errors_use_display() {
        let err = gloo_net::Error::GlooError("request aborted".to_string());
        assert_eq!(fetch_error_text(err), "request aborted");
    }
}

//! Relay from `/api/process-files` to the external processing service.
//!
//! The browser posts to the origin that served it; the processing service
//! listens elsewhere (`/process-files` on port 8000 by default). The relay
//! re-encodes every named `file_*` part with its file name and content type,
//! forwards the request once and hands back the service's status and body
//! untouched.

use axum::{
    extract::{Multipart, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use ragload::config::FILE_FIELD_PREFIX;
use ragload::ProcessingResult;
use reqwest::multipart::{Form, Part};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use super::server::AppState;
use crate::client::error_chain;

/// Message of the record returned when the processing service is down.
pub const UNREACHABLE_MESSAGE: &str = "Failed to reach processing service";

/// `POST /api/process-files`
pub async fn process_files(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    let request_id = Uuid::new_v4();

    let (form, count) = match collect_parts(multipart).await {
        Ok(collected) => collected,
        Err(rejection) => {
            tracing::warn!(%request_id, error = %rejection.message, "Rejected upload");
            return rejection.into_response();
        }
    };

    if count == 0 {
        tracing::info!(%request_id, "Upload without files");
        return Json(json!({
            "success": false,
            "message": "No files were uploaded"
        }))
        .into_response();
    }

    tracing::info!(%request_id, files = count, processor = %state.processor_url, "📤 Relaying upload");

    let upstream = match state
        .http
        .post(&state.processor_url)
        .multipart(form)
        .send()
        .await
    {
        Ok(response) => response,
        Err(e) => {
            let error = error_chain(&e);
            tracing::error!(%request_id, %error, "❌ Processing service unreachable");
            return failure(StatusCode::BAD_GATEWAY, UNREACHABLE_MESSAGE, error);
        }
    };

    let status =
        StatusCode::from_u16(upstream.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| HeaderValue::from_bytes(v.as_bytes()).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    match upstream.bytes().await {
        Ok(body) => {
            tracing::info!(%request_id, status = status.as_u16(), bytes = body.len(), "✅ Processing service answered");
            (status, [(header::CONTENT_TYPE, content_type)], body).into_response()
        }
        Err(e) => {
            let error = error_chain(&e);
            tracing::error!(%request_id, %error, "❌ Processing service response cut short");
            failure(StatusCode::BAD_GATEWAY, UNREACHABLE_MESSAGE, error)
        }
    }
}

/// Read every `file_*` part that carries a file name into a reqwest form,
/// in arrival order. Other fields are dropped.
async fn collect_parts(mut multipart: Multipart) -> Result<(Form, usize), Rejection> {
    let mut form = Form::new();
    let mut count = 0;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return Err(Rejection::new(e.status(), e.body_text())),
        };

        let name = field.name().unwrap_or("").to_string();
        if !name.starts_with(FILE_FIELD_PREFIX) {
            tracing::debug!(field = %name, "Skipping non-file field");
            continue;
        }

        let file_name = match field.file_name() {
            Some(file_name) if !file_name.is_empty() => file_name.to_string(),
            _ => {
                tracing::debug!(field = %name, "Skipping part without a file name");
                continue;
            }
        };
        let content_type = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| Rejection::new(e.status(), e.body_text()))?;

        let mut part = Part::bytes(bytes.to_vec()).file_name(file_name);
        if let Some(content_type) = content_type {
            part = part.mime_str(&content_type).map_err(|e| {
                Rejection::new(
                    StatusCode::BAD_REQUEST,
                    format!("Invalid content type for '{}': {}", name, e),
                )
            })?;
        }

        form = form.part(name, part);
        count += 1;
    }

    Ok((form, count))
}

/// A rejected upload, answered with a failure record.
struct Rejection {
    status: StatusCode,
    message: String,
}

impl Rejection {
    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        failure(self.status, "Invalid upload", self.message)
    }
}

fn failure(status: StatusCode, message: &str, error: String) -> Response {
    let record = ProcessingResult {
        success: false,
        message: message.to_string(),
        chunks_created: None,
        files_processed: None,
        error: Some(error),
    };
    (status, Json(record)).into_response()
}

//! Native client for the processing endpoint.
//!
//! Reads files from disk at submission time and posts them with reqwest as
//! `multipart/form-data`, one part per file named `file_<index>`.

use async_trait::async_trait;
use ragload::{
    file_field_name, mime_hint_for, ProcessingClient, ProcessingResult, SelectedFile, SubmitError,
    SubmitResult,
};
use reqwest::multipart::{Form, Part};
use std::error::Error as StdError;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ServerError, ServerResult};

/// A selected file on the local filesystem.
pub type LocalFile = SelectedFile<PathBuf>;

/// Describe a file on disk: name, size and MIME hint from its extension.
pub async fn local_file(path: &Path) -> ServerResult<LocalFile> {
    let file_error = |source: io::Error| ServerError::File {
        path: path.display().to_string(),
        source,
    };

    let metadata = tokio::fs::metadata(path).await.map_err(file_error)?;
    if !metadata.is_file() {
        return Err(file_error(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let mime_type = mime_hint_for(&name);

    Ok(SelectedFile::new(name, metadata.len(), mime_type, path.to_path_buf()))
}

/// reqwest-backed [`ProcessingClient`].
#[derive(Clone, Debug)]
pub struct HttpProcessingClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpProcessingClient {
    /// Create a client posting to `endpoint`, with an optional overall
    /// request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> ServerResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn build_form(files: &[LocalFile]) -> SubmitResult<Form> {
        let mut form = Form::new();
        for (index, file) in files.iter().enumerate() {
            let payload_error = |message: String| SubmitError::Payload {
                name: file.name.clone(),
                message,
            };

            let bytes = tokio::fs::read(&file.payload)
                .await
                .map_err(|e| payload_error(e.to_string()))?;
            let part = Part::bytes(bytes)
                .file_name(file.name.clone())
                .mime_str(&file.mime_type)
                .map_err(|e| payload_error(e.to_string()))?;

            form = form.part(file_field_name(index), part);
        }
        Ok(form)
    }
}

#[async_trait(?Send)]
impl ProcessingClient<PathBuf> for HttpProcessingClient {
    async fn submit(&self, files: &[LocalFile]) -> SubmitResult<ProcessingResult> {
        let form = Self::build_form(files).await?;

        tracing::info!(files = files.len(), endpoint = %self.endpoint, "📤 Posting files");

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(error_chain(&e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| SubmitError::Transport(error_chain(&e)))?;

        tracing::debug!(status, bytes = body.len(), "Processing endpoint answered");

        ProcessingResult::from_response(status, &body)
    }
}

/// An error and its sources, joined with `: `.
pub(crate) fn error_chain(err: &dyn StdError) -> String {
    let mut text = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !text.contains(&cause_text) {
            text.push_str(": ");
            text.push_str(&cause_text);
        }
        source = cause.source();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{spawn_stub_processor, write_file, ReceivedPart};
    use ragload::Session;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_local_file_metadata() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "notes.txt", b"hello world");

        let file = local_file(&path).await.unwrap();

        assert_eq!(file.name, "notes.txt");
        assert_eq!(file.size, 11);
        assert_eq!(file.mime_type, "text/plain");
        assert_eq!(file.payload, path);
    }

    #[tokio::test]
    async fn test_local_file_missing_or_directory() {
        let dir = TempDir::new().unwrap();

        let missing = local_file(&dir.path().join("nope.pdf")).await;
        assert!(matches!(missing, Err(ServerError::File { .. })));

        let directory = local_file(dir.path()).await;
        assert!(matches!(directory, Err(ServerError::File { .. })));
    }

    #[tokio::test]
    async fn test_submit_posts_indexed_parts() {
        let (endpoint, received) = spawn_stub_processor().await;
        let dir = TempDir::new().unwrap();
        let a = local_file(&write_file(&dir, "a.txt", b"alpha")).await.unwrap();
        let b = local_file(&write_file(&dir, "b.csv", b"x,y\n1,2\n")).await.unwrap();

        let client = HttpProcessingClient::new(endpoint, None).unwrap();
        let result = client.submit(&[a, b]).await.unwrap();

        assert!(result.success);
        assert_eq!(result.files_processed, Some(2));
        assert_eq!(result.chunks_created, Some(7));

        let parts = received.lock().unwrap().clone();
        assert_eq!(
            parts,
            vec![
                ReceivedPart {
                    field: "file_0".into(),
                    file_name: "a.txt".into(),
                    content_type: "text/plain".into(),
                    size: 5,
                },
                ReceivedPart {
                    field: "file_1".into(),
                    file_name: "b.csv".into(),
                    content_type: "text/csv".into(),
                    size: 8,
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_session_round_trip_through_stub() {
        let (endpoint, _received) = spawn_stub_processor().await;
        let dir = TempDir::new().unwrap();
        let file = local_file(&write_file(&dir, "report.pdf", b"%PDF-1.4")).await.unwrap();

        let client = HttpProcessingClient::new(endpoint, None).unwrap();
        let session = Session::new().add_picked(vec![file]).process(&client).await;

        assert_eq!(session.phase(), ragload::Phase::Succeeded);
        assert_eq!(session.result().unwrap().files_processed, Some(1));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // bind then drop to get a port nobody listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let dir = TempDir::new().unwrap();
        let file = local_file(&write_file(&dir, "a.txt", b"alpha")).await.unwrap();
        let client =
            HttpProcessingClient::new(format!("http://{}/process-files", addr), None).unwrap();

        let err = client.submit(&[file]).await.unwrap_err();
        assert!(matches!(err, SubmitError::Transport(_)));
        assert!(!err.description().is_empty());
    }

    #[tokio::test]
    async fn test_vanished_file_is_payload_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "gone.txt", b"bye");
        let file = local_file(&path).await.unwrap();
        std::fs::remove_file(&path).unwrap();

        let client = HttpProcessingClient::new("http://127.0.0.1:9/process-files", None).unwrap();
        let err = client.submit(&[file]).await.unwrap_err();

        match err {
            SubmitError::Payload { name, .. } => assert_eq!(name, "gone.txt"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        // accepts connections (backlog) but never answers
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let dir = TempDir::new().unwrap();
        let file = local_file(&write_file(&dir, "a.txt", b"alpha")).await.unwrap();
        let client = HttpProcessingClient::new(
            format!("http://{}/process-files", addr),
            Some(Duration::from_millis(300)),
        )
        .unwrap();

        let err = client.submit(&[file]).await.unwrap_err();

        match err {
            SubmitError::Transport(message) => assert!(message.contains("timed out"), "{}", message),
            other => panic!("unexpected error: {:?}", other),
        }
        drop(listener);
    }
}

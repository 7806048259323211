//! Test helpers: a stub processing service and fixture files.

use axum::{extract::Multipart, extract::State, routing::post, Json, Router};
use serde_json::{json, Value};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

/// One multipart part as seen by the stub.
#[derive(Clone, Debug, PartialEq)]
pub struct ReceivedPart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub size: usize,
}

pub type Received = Arc<Mutex<Vec<ReceivedPart>>>;

/// Start a stub processing service on a random local port.
///
/// It records every part it receives and answers like the real service:
/// `files_processed` is the number of parts, `chunks_created` is always 7.
/// Returns the `/process-files` URL and the shared record.
pub async fn spawn_stub_processor() -> (String, Received) {
    async fn handler(State(received): State<Received>, mut multipart: Multipart) -> Json<Value> {
        let mut count = 0;
        while let Some(field) = multipart.next_field().await.unwrap() {
            let part = ReceivedPart {
                field: field.name().unwrap_or("").to_string(),
                file_name: field.file_name().unwrap_or("").to_string(),
                content_type: field.content_type().unwrap_or("").to_string(),
                size: field.bytes().await.unwrap().len(),
            };
            received.lock().unwrap().push(part);
            count += 1;
        }
        Json(json!({
            "success": true,
            "message": format!("Successfully processed {} files and created 7 chunks", count),
            "files_processed": count,
            "chunks_created": 7,
            "processed_at": "stub",
        }))
    }

    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/process-files", post(handler))
        .with_state(received.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/process-files", addr), received)
}

/// Write `content` to `dir/name`.
pub fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

//! `ragload submit`: send local documents to a processing endpoint.
//!
//! Runs the same session as the browser page: files are added in order
//! (through the drop-zone filter with `--filter`), submitted once, and the
//! outcome is rendered as the result panel text or as the raw record.

use ragload::{ProcessingResult, ResultView, Session};
use std::path::PathBuf;

use crate::client::{local_file, HttpProcessingClient, LocalFile};
use crate::config::{validate_url, SubmitArgs};
use crate::error::{ServerError, ServerResult};

/// Load, filter and submit the files named in `args`.
///
/// A failed submission is still `Ok`: the returned record carries
/// `success: false` and the error text.
pub async fn submit_files(args: &SubmitArgs) -> ServerResult<ProcessingResult> {
    let endpoint = validate_url(&args.endpoint)?;

    let mut batch: Vec<LocalFile> = Vec::with_capacity(args.files.len());
    for path in &args.files {
        batch.push(local_file(path).await?);
    }

    let given = batch.len();
    let session: Session<PathBuf> = if args.filter {
        Session::new().add_dropped(batch)
    } else {
        Session::new().add_picked(batch)
    };

    let skipped = given - session.files().len();
    if skipped > 0 {
        tracing::warn!(skipped, "Skipping files that are not supported documents");
    }
    if session.is_empty() {
        return Err(ServerError::NothingToSubmit);
    }

    for file in session.files() {
        tracing::info!("   📄 {} ({})", file.name, file.display_size());
    }

    let client = HttpProcessingClient::new(endpoint, args.timeout())?;
    let done = session.process(&client).await;

    done.result()
        .cloned()
        .ok_or(ServerError::NothingToSubmit)
}

/// Render a result record for the terminal.
pub fn render(result: &ProcessingResult, json: bool) -> ServerResult<String> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(ResultView::from(result).to_text())
    }
}

/// Entry point of `ragload submit`.
pub async fn cmd_submit(args: SubmitArgs) -> ServerResult<()> {
    eprintln!("📤 Submitting {} file(s) to {}", args.files.len(), args.endpoint);

    let result = submit_files(&args).await?;
    println!("{}", render(&result, args.json)?);

    if result.success {
        Ok(())
    } else {
        Err(ServerError::ProcessingFailed(
            result.visible_error().unwrap_or(&result.message).to_string(),
        ))
    }
}

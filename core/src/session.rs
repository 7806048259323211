//! Submission session: the selection, the processing flag and the last
//! result, as one value.
//!
//! ```text
//!            begin()                 finish(Ok)
//!   Idle ───────────────▶ Submitting ───────────▶ Succeeded
//!    ▲                         │                      │
//!    │                         │ finish(Err)          │
//!    │                         ▼                      │
//!    └──── clear() / ──────  Failed  ◀────────────────┘
//!          selection change
//! ```
//!
//! Every operation takes `&self` and returns the next session, so the UI can
//! keep it in a single signal and the CLI can thread it through a function
//! without shared mutable state.

use async_trait::async_trait;

use crate::error::SubmitResult;
use crate::intake::{filter_dropped, SelectedFile};
use crate::result::ProcessingResult;

// =============================================================================
// Client Seam
// =============================================================================

/// Something that can send a selection to the processing endpoint.
///
/// Implementations post one multipart request with a part per file named
/// [`file_field_name(i)`](crate::config::file_field_name), in selection
/// order, and decode the body with [`ProcessingResult::from_response`]:
/// the body decides the outcome, whatever the HTTP status.
#[async_trait(?Send)]
pub trait ProcessingClient<P> {
    async fn submit(&self, files: &[SelectedFile<P>]) -> SubmitResult<ProcessingResult>;
}

// =============================================================================
// Phase
// =============================================================================

/// Where the session is in the submission lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Nothing in flight, no result
    #[default]
    Idle,
    /// Request in flight
    Submitting,
    /// The endpoint answered with a result record
    Succeeded,
    /// The request failed locally; the result is synthetic
    Failed,
}

// =============================================================================
// Session
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Session<P> {
    files: Vec<SelectedFile<P>>,
    phase: Phase,
    result: Option<ProcessingResult>,
    next_id: u64,
}

impl<P> Default for Session<P> {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            phase: Phase::Idle,
            result: None,
            next_id: 1,
        }
    }
}

impl<P: Clone> Session<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[SelectedFile<P>] {
        &self.files
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&ProcessingResult> {
        self.result.as_ref()
    }

    /// True while a request is in flight.
    pub fn is_processing(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Add files dropped on the drop zone. Only accepted files are kept;
    /// if none are, the session is returned unchanged.
    pub fn add_dropped(&self, batch: Vec<SelectedFile<P>>) -> Self {
        let offered = batch.len();
        let accepted = filter_dropped(batch);
        if accepted.len() < offered {
            log::info!("Dropped {} files, accepted {}", offered, accepted.len());
        }
        self.with_appended(accepted)
    }

    /// Add files chosen in the picker, unfiltered.
    pub fn add_picked(&self, batch: Vec<SelectedFile<P>>) -> Self {
        self.with_appended(batch)
    }

    fn with_appended(&self, batch: Vec<SelectedFile<P>>) -> Self {
        if batch.is_empty() {
            return self.clone();
        }
        let mut next_id = self.next_id;
        let mut files = self.files.clone();
        files.extend(batch.into_iter().map(|mut file| {
            file.id = next_id;
            next_id += 1;
            file
        }));
        Self {
            next_id,
            ..self.with_selection(files)
        }
    }

    /// Position of the file with identity `id`, if still selected.
    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.files.iter().position(|f| f.id == id)
    }

    /// Remove the file at `index`. Out-of-range indices leave the session
    /// unchanged.
    pub fn remove(&self, index: usize) -> Self {
        if index >= self.files.len() {
            log::warn!(
                "Ignoring removal of file #{} from a selection of {}",
                index,
                self.files.len()
            );
            return self.clone();
        }
        let mut files = self.files.clone();
        let removed = files.remove(index);
        log::debug!("Removed {} from selection", removed.name);
        self.with_selection(files)
    }

    /// A changed selection invalidates the previous result.
    fn with_selection(&self, files: Vec<SelectedFile<P>>) -> Self {
        let phase = if self.is_processing() { Phase::Submitting } else { Phase::Idle };
        Self {
            files,
            phase,
            result: None,
            next_id: self.next_id,
        }
    }

    /// Drop the selection and the result. Identities keep counting.
    pub fn clear(&self) -> Self {
        Self {
            next_id: self.next_id,
            ..Self::default()
        }
    }

    /// Enter `Submitting`, clearing any previous result.
    ///
    /// Returns `None` when there is nothing to send or a request is already
    /// in flight.
    pub fn begin(&self) -> Option<Self> {
        if self.files.is_empty() || self.is_processing() {
            return None;
        }
        Some(Self {
            files: self.files.clone(),
            phase: Phase::Submitting,
            result: None,
            next_id: self.next_id,
        })
    }

    /// Leave `Submitting` with the outcome of the request.
    ///
    /// A decoded record is kept as-is, whatever its own `success` says;
    /// an error becomes a synthetic failure record.
    pub fn finish(&self, outcome: SubmitResult<ProcessingResult>) -> Self {
        let (phase, result) = match outcome {
            Ok(result) => {
                log::info!(
                    "Processing finished: success={} message={:?}",
                    result.success,
                    result.message
                );
                (Phase::Succeeded, result)
            }
            Err(e) => {
                log::error!("Submission failed: {}", e);
                (Phase::Failed, ProcessingResult::failure(&e))
            }
        };
        Self {
            files: self.files.clone(),
            phase,
            result: Some(result),
            next_id: self.next_id,
        }
    }

    /// Run a whole submission: [`begin`](Self::begin), send, then
    /// [`finish`](Self::finish).
    ///
    /// With an empty selection (or a request already in flight) the client
    /// is not called and the session comes back unchanged.
    pub async fn process<C>(&self, client: &C) -> Self
    where
        C: ProcessingClient<P> + ?Sized,
    {
        let Some(submitting) = self.begin() else {
            return self.clone();
        };
        log::info!("Submitting {} files", submitting.files.len());
        let outcome = client.submit(submitting.files()).await;
        submitting.finish(outcome)
    }
}

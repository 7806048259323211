//! # RAG Load - document intake and submission workflow
//!
//! Platform-independent half of the RAG Load uploader. The browser UI
//! (`ragload-frontend`) and the native CLI (`ragload-server`) both drive the
//! same [`Session`] and only differ in how they hold file bytes and how they
//! send the request.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐     ┌─────────────┐
//! │ Drop/Picker │────▶│   Intake    │────▶│     Session      │────▶│ ResultView  │
//! │   batches   │     │  (filter)   │     │ (ProcessingClient│     │  (render)   │
//! └─────────────┘     └─────────────┘     │  POST file_0..N) │     └─────────────┘
//!                                         └──────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Endpoint path, accepted types, field naming
//! - [`error`] - Submission errors
//! - [`intake`] - Selected files, drop filter, file kinds
//! - [`format`] - Human-readable sizes
//! - [`result`] - Processing result decoding and view
//! - [`session`] - Submission state machine and client seam
//! - [`stages`] - Static pipeline stage list

pub mod config;
pub mod error;
pub mod format;
pub mod intake;
pub mod result;
pub mod session;
pub mod stages;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::{file_field_name, ACCEPT_ATTRIBUTE, PROCESS_ENDPOINT};
pub use error::{SubmitError, SubmitResult};
pub use format::format_file_size;
pub use intake::{accepts_dropped, filter_dropped, mime_hint_for, FileKind, SelectedFile};
pub use result::{ProcessingResult, ResultStats, ResultView};
pub use session::{Phase, ProcessingClient, Session};
pub use stages::{PipelineStage, PIPELINE_STAGES, PROCESSING_NOTE};

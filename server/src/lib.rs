//! # RAG Load server - dev server and CLI for document submission
//!
//! Serves the built upload page, relays its uploads to the external
//! processing service, and submits local files from the command line.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐  file_0..N   ┌─────────────┐  file_0..N   ┌─────────────┐
//! │   Browser   │─────────────▶│    Relay    │─────────────▶│  Processing │
//! │  (frontend) │◀─────────────│   (axum)    │◀─────────────│   service   │
//! └─────────────┘  JSON record └─────────────┘  JSON record └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - CLI arguments and environment
//! - [`client`] - reqwest client for the processing endpoint
//! - [`submit`] - `ragload submit`
//! - [`api`] - HTTP dev server and relay
//! - [`logging`] - Tracing setup

pub mod error;
pub mod config;
pub mod client;
pub mod submit;
pub mod api;
pub mod logging;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ConfigError, ServerError, ServerResult};
pub use config::{ServeArgs, ServerConfig, SubmitArgs};
pub use client::{local_file, HttpProcessingClient, LocalFile};
pub use submit::{cmd_submit, render, submit_files};
pub use api::{create_router, start_server};
pub use logging::init_tracing;

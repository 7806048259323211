//! HTTP API module.
//!
//! The dev server: static frontend, health check and the upload relay.

pub mod relay;
pub mod server;

pub use server::{create_router, start_server, AppState};

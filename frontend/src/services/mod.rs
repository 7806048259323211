//! Backend services.
//!
//! # Services
//!
//! - [`process`] - Multipart submission to `/api/process-files`

pub mod process;

pub use process::*;

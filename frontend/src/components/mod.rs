//! UI Components for the RAG Load application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Features`] - Feature cards
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`FileUploader`] - Drag & drop / picker intake with the selection list
//! - [`ProcessingStatus`] - Pipeline stages shown while processing
//! - [`ResultsDisplay`] - Outcome of the last submission

mod hero;
mod uploader;
mod status;
mod results;
mod features;
mod footer;

pub use hero::*;
pub use uploader::*;
pub use status::*;
pub use results::*;
pub use features::*;
pub use footer::*;

//! Common types used across the frontend application.
//!
//! The workflow types live in `ragload`; this module only pins them to
//! browser `File` handles and converts what the DOM hands us.

use ragload::{SelectedFile, Session};
use web_sys::{File, FileList};

// =============================================================================
// Browser Types
// =============================================================================

/// A selected file backed by a browser `File`.
pub type BrowserFile = SelectedFile<File>;

/// The submission session held by the UI.
pub type UiSession = Session<File>;

/// Wrap a DOM `File` with its name, size and MIME type.
pub fn browser_file(file: File) -> BrowserFile {
    let size = file.size().max(0.0) as u64;
    SelectedFile::new(file.name(), size, file.type_(), file)
}

/// All files of a `FileList`, in order.
pub fn files_from_list(list: &FileList) -> Vec<BrowserFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(browser_file)
        .collect()
}

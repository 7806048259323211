//! Shared constants for every client of the processing endpoint.

/// Path of the processing endpoint, relative to the front-end origin.
pub const PROCESS_ENDPOINT: &str = "/api/process-files";

/// Prefix of every multipart field carrying a file (`file_0`, `file_1`, ...).
pub const FILE_FIELD_PREFIX: &str = "file_";

/// Extensions the file picker offers.
pub const ACCEPTED_EXTENSIONS: [&str; 5] = [".txt", ".pdf", ".doc", ".docx", ".csv"];

/// Value of the picker's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = ".txt,.pdf,.doc,.docx,.csv";

/// MIME-type fragments accepted on drop.
pub const ACCEPTED_MIME_FRAGMENTS: [&str; 5] = ["text", "pdf", "word", "document", "csv"];

/// Message of the synthetic record built when a submission fails locally.
pub const FAILURE_MESSAGE: &str = "Failed to process files";

/// Multipart field name for the file at `index` in the selection.
pub fn file_field_name(index: usize) -> String {
    format!("{}{}", FILE_FIELD_PREFIX, index)
}

//! File intake: what a selected file is, which dropped files are accepted,
//! and how a file is presented in the selection list.
//!
//! Two intake paths exist:
//!
//! - **Drop**: candidates go through [`accepts_dropped`] first.
//! - **Picker**: everything the user picked is kept; the picker's `accept`
//!   attribute is only a hint to the native dialog.

use serde::{Deserialize, Serialize};

use crate::config::{ACCEPTED_EXTENSIONS, ACCEPTED_MIME_FRAGMENTS};

// =============================================================================
// Selected File
// =============================================================================

/// A file chosen by the user, waiting to be submitted.
///
/// `P` is the handle used to read the bytes at submission time: a browser
/// `File` in the UI, a path in the CLI.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<P> {
    /// File name as reported by the browser or the filesystem
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME-type hint (may be empty when the platform does not know)
    pub mime_type: String,
    /// Payload handle
    pub payload: P,
    /// Identity within a session, assigned when the file is added;
    /// distinguishes files with the same name
    pub id: u64,
}

impl<P> SelectedFile<P> {
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>, payload: P) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
            payload,
            id: 0,
        }
    }

    /// Icon category for the selection list.
    pub fn kind(&self) -> FileKind {
        FileKind::from_name(&self.name)
    }

    /// Human-readable size.
    pub fn display_size(&self) -> String {
        crate::format::format_file_size(self.size)
    }
}

// =============================================================================
// Drop Filter
// =============================================================================

/// Whether a dropped file is accepted into the selection.
///
/// Accepted if the MIME type contains one of the document fragments
/// (`text`, `pdf`, `word`, `document`, `csv`) or the name ends with one of
/// the accepted extensions. The extension match is case-sensitive:
/// `notes.TXT` only gets in through its MIME type.
pub fn accepts_dropped(name: &str, mime_type: &str) -> bool {
    ACCEPTED_MIME_FRAGMENTS
        .iter()
        .any(|fragment| mime_type.contains(fragment))
        || ACCEPTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Keep only the dropped files that pass [`accepts_dropped`], in order.
pub fn filter_dropped<P>(batch: Vec<SelectedFile<P>>) -> Vec<SelectedFile<P>> {
    batch
        .into_iter()
        .filter(|file| {
            let keep = accepts_dropped(&file.name, &file.mime_type);
            if !keep {
                log::debug!("Rejected dropped file: {} ({})", file.name, file.mime_type);
            }
            keep
        })
        .collect()
}

/// Best-effort MIME type for a file name, for platforms that do not
/// report one (the filesystem).
pub fn mime_hint_for(name: &str) -> &'static str {
    match extension_of(name).as_str() {
        "txt" => "text/plain",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "csv" => "text/csv",
        _ => "application/octet-stream",
    }
}

/// Lowercased text after the last `.`; the whole name when there is none.
fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_lowercase()
}

// =============================================================================
// File Kind
// =============================================================================

/// Icon category of a selected file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// `.pdf`
    Pdf,
    /// `.doc` / `.docx`
    Word,
    /// `.csv`
    Table,
    /// Everything else, `.txt` included
    Text,
}

impl FileKind {
    /// Category from the file name's extension, ignoring case.
    pub fn from_name(name: &str) -> Self {
        match extension_of(name).as_str() {
            "pdf" => FileKind::Pdf,
            "doc" | "docx" => FileKind::Word,
            "csv" => FileKind::Table,
            _ => FileKind::Text,
        }
    }

    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            FileKind::Pdf => "file-icon pdf",
            FileKind::Word => "file-icon word",
            FileKind::Table => "file-icon table",
            FileKind::Text => "file-icon text",
        }
    }

    /// Get emoji for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            FileKind::Pdf => "📕",
            FileKind::Word => "📘",
            FileKind::Table => "📊",
            FileKind::Text => "📄",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, mime: &str) -> SelectedFile<()> {
        SelectedFile::new(name, 10, mime, ())
    }

    #[test]
    fn test_drop_filter_by_extension() {
        let batch = vec![
            named("report.pdf", ""),
            named("notes.TXT", ""),
            named("data.csv", ""),
            named("image.png", ""),
        ];
        let kept: Vec<String> = filter_dropped(batch).into_iter().map(|f| f.name).collect();
        assert_eq!(kept, vec!["report.pdf", "data.csv"]);
    }

    #[test]
    fn test_drop_filter_by_mime_type() {
        assert!(accepts_dropped("notes.TXT", "text/plain"));
        assert!(accepts_dropped("scan", "application/pdf"));
        assert!(accepts_dropped("letter", "application/msword"));
        assert!(accepts_dropped(
            "memo",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ));
        assert!(!accepts_dropped("image.png", "image/png"));
        assert!(!accepts_dropped("archive.zip", "application/zip"));
    }

    #[test]
    fn test_drop_filter_all_extensions() {
        for name in ["a.txt", "a.pdf", "a.doc", "a.docx", "a.csv"] {
            assert!(accepts_dropped(name, ""), "{} should be accepted", name);
        }
        assert!(!accepts_dropped("a.PDF", ""));
    }

    #[test]
    fn test_file_kind_from_name() {
        assert_eq!(FileKind::from_name("report.pdf"), FileKind::Pdf);
        assert_eq!(FileKind::from_name("Report.PDF"), FileKind::Pdf);
        assert_eq!(FileKind::from_name("letter.doc"), FileKind::Word);
        assert_eq!(FileKind::from_name("memo.DOCX"), FileKind::Word);
        assert_eq!(FileKind::from_name("data.csv"), FileKind::Table);
        assert_eq!(FileKind::from_name("notes.txt"), FileKind::Text);
        assert_eq!(FileKind::from_name("README"), FileKind::Text);
        assert_eq!(FileKind::from_name("archive.tar.gz"), FileKind::Text);
    }

    #[test]
    fn test_mime_hint() {
        assert_eq!(mime_hint_for("notes.txt"), "text/plain");
        assert_eq!(mime_hint_for("DATA.CSV"), "text/csv");
        assert_eq!(mime_hint_for("photo.jpg"), "application/octet-stream");
        // hints always pass the drop filter for supported types
        assert!(accepts_dropped("X.DOCX", mime_hint_for("X.DOCX")));
    }
}

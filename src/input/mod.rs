use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::rsvp::Chapter;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("File is empty: {0}")]
    EmptyFile(PathBuf),

    #[error("EPUB parse error: {0}")]
    EpubParse(String),

    #[error("PDF parse error: {0}")]
    PdfParse(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// A loaded document: raw content plus whatever chapter markers the source
/// could provide. Content stays raw because tokenization depends on the
/// session's display mode.
#[derive(Debug, Clone)]
pub struct Document {
    pub content: String,
    pub chapters: Vec<Chapter>,
    pub source: String,
}

pub mod clipboard;
pub mod epub;
pub mod pdf;
pub mod text;

/// Routes a path to the loader for its extension. Extensionless paths are
/// treated as plain text.
pub fn load_path(path: &str) -> Result<Document, LoadError> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("epub") => epub::load(path),
        Some("pdf") => pdf::load(path),
        Some("txt") | Some("md") | None => text::load(path),
        Some(other) => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_extension_is_rejected() {
        let result = load_path("book.mobi");
        assert!(matches!(result, Err(LoadError::UnsupportedFormat(ext)) if ext == "mobi"));
    }

    #[test]
    fn test_missing_text_file() {
        let result = load_path("/nonexistent/notes.txt");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_missing_epub_routes_to_epub_loader() {
        let result = load_path("/nonexistent/book.epub");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }
}

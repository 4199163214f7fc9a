use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{Document, LoadError};

/// Loads a PDF via `pdf-extract`. PDFs give us no reliable chapter
/// structure, so the document carries no markers.
pub fn load(path: &str) -> Result<Document, LoadError> {
    let path_ref = Path::new(path);

    if !path_ref.exists() {
        return Err(LoadError::FileNotFound(path_ref.to_path_buf()));
    }

    let mut file = File::open(path_ref).map_err(|e| LoadError::PdfParse(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    let content = pdf_extract::extract_text_from_mem(&buffer)
        .map_err(|e| LoadError::PdfParse(e.to_string()))?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile(path_ref.to_path_buf()));
    }

    log::debug!("loaded pdf {} ({} bytes)", path_ref.display(), buffer.len());

    Ok(Document {
        content,
        chapters: Vec::new(),
        source: format!("pdf:{}", path_ref.display()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_load_nonexistent_file() {
        let result = load("/nonexistent/path/document.pdf");
        assert!(matches!(result, Err(LoadError::FileNotFound(_))));
    }

    #[test]
    fn test_pdf_parse_error_formatting() {
        let err = LoadError::PdfParse("Invalid PDF structure".to_string());
        assert!(err.to_string().contains("Invalid PDF structure"));
    }
}

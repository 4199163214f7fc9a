use std::path::Path;

use super::{Document, LoadError};

/// Loads a plain UTF-8 text file. Plain text carries no chapter structure.
pub fn load(path: &str) -> Result<Document, LoadError> {
    let path_ref = Path::new(path);

    if !path_ref.exists() {
        return Err(LoadError::FileNotFound(path_ref.to_path_buf()));
    }

    let content = std::fs::read_to_string(path_ref).map_err(|source| LoadError::Io {
        path: path_ref.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Err(LoadError::EmptyFile(path_ref.to_path_buf()));
    }

    Ok(Document {
        content,
        chapters: Vec::new(),
        source: format!("text:{}", path_ref.display()),
    })
}

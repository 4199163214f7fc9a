use super::{Document, LoadError};

/// Reads the system clipboard as a document.
pub fn load() -> Result<Document, LoadError> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| LoadError::Clipboard(e.to_string()))?;
    let content = clipboard
        .get_text()
        .map_err(|e| LoadError::Clipboard(e.to_string()))?;

    if content.trim().is_empty() {
        return Err(LoadError::Clipboard("Clipboard is empty".to_string()));
    }

    Ok(Document {
        content,
        chapters: Vec::new(),
        source: "clipboard".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipboard_error_formatting() {
        let err = LoadError::Clipboard("no display".to_string());
        assert_eq!(err.to_string(), "Clipboard error: no display");
    }
}

use std::path::Path;

use super::{Document, LoadError};
use crate::rsvp::{tokenize, Chapter, RsvpMode};

/// Loads an EPUB by walking its spine. Each spine entry with extractable
/// text becomes one chapter marker, positioned at the running token count so
/// the reader's chapter jumps line up with the flattened content.
pub fn load(path: &str) -> Result<Document, LoadError> {
    let path_ref = Path::new(path);

    if !path_ref.exists() {
        return Err(LoadError::FileNotFound(path_ref.to_path_buf()));
    }

    let mut doc =
        epub::doc::EpubDoc::new(path_ref).map_err(|e| LoadError::EpubParse(e.to_string()))?;

    let num_chapters = doc.get_num_chapters();
    if num_chapters == 0 {
        return Err(LoadError::EpubParse("No chapters found in EPUB".to_string()));
    }

    // Table-of-contents labels, when the spine and toc line up one-to-one.
    let toc_labels: Vec<String> = doc.toc.iter().map(|nav| nav.label.clone()).collect();
    let labelled = toc_labels.len() == num_chapters;

    let mut content = String::new();
    let mut chapters = Vec::new();
    let mut word_count = 0usize;

    for chapter_idx in 0..num_chapters {
        if !doc.set_current_chapter(chapter_idx) {
            continue;
        }
        let Some((html, _mime)) = doc.get_current_str() else {
            continue;
        };

        let plain = extract_plain_text(&html);
        if plain.is_empty() {
            continue;
        }

        let title = if labelled {
            toc_labels[chapter_idx].clone()
        } else {
            format!("Chapter {}", chapters.len() + 1)
        };
        chapters.push(Chapter::new(title, word_count));

        // Retained-token counts are identical in both display modes, so the
        // markers hold no matter which mode the session uses.
        word_count += tokenize(&plain, RsvpMode::Clean).len();

        if !content.is_empty() {
            content.push_str("\n\n");
        }
        content.push_str(&plain);
    }

    if content.is_empty() {
        return Err(LoadError::EpubParse(
            "No extractable text content found in EPUB".to_string(),
        ));
    }

    log::debug!(
        "loaded epub {} ({} chapters, {} tokens)",
        path_ref.display(),
        chapters.len(),
        word_count
    );

    Ok(Document {
        content,
        chapters,
        source: format!("epub:{}", path_ref.display()),
    })
}

/// Strips markup down to text, one trimmed line per source line.
fn extract_plain_text(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        if c == '<' {
            in_tag = true;
        } else if c == '>' {
            in_tag = false;
        } else if !in_tag {
            result.push(c);
        }
    }

    result
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

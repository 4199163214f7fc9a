use crate::app::mode::AppMode;
use crate::ui::theme::ColorScheme;

/// The current word split around its recognition point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordParts {
    pub before: String,
    pub anchor: String,
    pub after: String,
}

impl WordParts {
    pub fn of(word: &str) -> Self {
        let (before, anchor, after) = crate::rsvp::split_at_orp(word);
        Self {
            before: before.to_string(),
            anchor: anchor.to_string(),
            after: after.to_string(),
        }
    }
}

/// Snapshot of everything the reader screen draws.
#[derive(Debug, Clone)]
pub struct RenderState {
    pub mode: AppMode,
    pub scheme: ColorScheme,
    pub book_title: String,
    pub chapter_title: Option<String>,
    pub word: WordParts,
    pub progress: f64,
    pub wpm: u32,
    pub playing: bool,
    pub rsvp_mode: &'static str,
    /// (current token, total tokens), for the position readout.
    pub position: (usize, usize),
    pub status: Option<String>,
}

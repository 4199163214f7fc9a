use std::time::Instant;

use crate::player::Player;
use crate::rsvp::{current_chapter, tokenize, Chapter, RsvpMode};

/// One book open in the reader: the raw content, the display mode, the
/// chapter markers, and the playback state over the tokenized content.
///
/// Tokens are a pure function of `(content, mode)`, so they are recomputed
/// only when the mode flips; the player is re-synced through `set_tokens`,
/// which is always a hard stop.
#[derive(Debug)]
pub struct ReadingSession {
    pub book_id: Option<String>,
    pub title: String,
    content: String,
    rsvp_mode: RsvpMode,
    chapters: Vec<Chapter>,
    pub player: Player,
}

impl ReadingSession {
    pub fn new(
        book_id: Option<String>,
        title: impl Into<String>,
        content: String,
        chapters: Vec<Chapter>,
    ) -> Self {
        let rsvp_mode = RsvpMode::Clean;
        let player = Player::new(tokenize(&content, rsvp_mode));
        Self {
            book_id,
            title: title.into(),
            content,
            rsvp_mode,
            chapters,
            player,
        }
    }

    pub fn rsvp_mode(&self) -> RsvpMode {
        self.rsvp_mode
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    /// Re-tokenizes under the new mode. Token counts match across modes, so
    /// the current position survives the swap.
    pub fn set_rsvp_mode(&mut self, mode: RsvpMode) {
        if mode == self.rsvp_mode {
            return;
        }
        self.rsvp_mode = mode;
        self.player.set_tokens(tokenize(&self.content, mode));
    }

    pub fn toggle_rsvp_mode(&mut self) {
        self.set_rsvp_mode(self.rsvp_mode.toggled());
    }

    /// Index of the chapter the reader is currently inside.
    pub fn current_chapter(&self) -> usize {
        current_chapter(&self.chapters, self.player.current_index())
    }

    /// Jumps to a chapter start. Chapter selection always lands paused.
    pub fn jump_to_chapter(&mut self, chapter_index: usize, now: Instant) {
        let Some(chapter) = self.chapters.get(chapter_index) else {
            return;
        };
        let target = chapter.start_word_index;
        self.player.pause();
        self.player.seek_to_token(target as isize, now);
    }

    /// Position as a whole percent, for the catalog's progress column.
    pub fn progress_percent(&self) -> u8 {
        (self.player.progress_ratio() * 100.0).round() as u8
    }

    /// Seeks to a previously recorded percent position.
    pub fn resume_at_percent(&mut self, percent: u8, now: Instant) {
        let count = self.player.token_count();
        if count < 2 {
            return;
        }
        let target = (percent.min(100) as f64 / 100.0 * (count - 1) as f64).round() as isize;
        self.player.seek_to_token(target, now);
    }
}

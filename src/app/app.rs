use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use super::event::AppEvent;
use super::mode::AppMode;
use super::render_state::{RenderState, WordParts};
use super::session::ReadingSession;
use crate::input::{self, Document};
use crate::library::{samples, Catalog};
use crate::ui::theme::ColorScheme;

/// Application core: the mode state machine plus everything the views read.
pub struct App {
    pub mode: AppMode,
    pub scheme: ColorScheme,
    pub catalog: Catalog,
    pub session: Option<ReadingSession>,

    /// Cursor over `catalog.books` on the library screen.
    pub selected_book: usize,

    pub command_buffer: String,
    return_mode: AppMode,

    pub help_open: bool,
    pub chapter_open: bool,
    pub chapter_cursor: usize,

    pub status: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Library,
            scheme: ColorScheme::Paper,
            catalog: Catalog::seeded(),
            session: None,
            selected_book: 0,
            command_buffer: String::new(),
            return_mode: AppMode::Library,
            help_open: false,
            chapter_open: false,
            chapter_cursor: 0,
            status: None,
        }
    }

    /// How long the event loop may sleep before the next timer is due.
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.session.as_ref().and_then(|s| s.player.poll_timeout(now))
    }

    /// Drives the playback timer chain.
    pub fn tick(&mut self, now: Instant) {
        if let Some(session) = &mut self.session {
            session.player.tick(now);
        }
    }

    /// Routes a key press. In command mode, a completed line is returned to
    /// the caller for parsing.
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> Option<String> {
        self.status = None;

        if self.help_open {
            self.help_open = false;
            return None;
        }

        match self.mode {
            AppMode::Command => self.handle_command_key(key),
            AppMode::Library => {
                self.handle_library_key(key, now);
                None
            }
            AppMode::Reading => {
                self.handle_reading_key(key, now);
                None
            }
            AppMode::Quit => None,
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::LoadFile(path) => match input::load_path(&path) {
                Ok(doc) => {
                    let title = Path::new(&path)
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("Untitled")
                        .to_string();
                    self.open_import(doc, title);
                }
                Err(err) => {
                    log::warn!("load {path} failed: {err}");
                    self.status = Some(err.to_string());
                }
            },
            AppEvent::LoadClipboard => match input::clipboard::load() {
                Ok(doc) => self.open_transient(doc, "Clipboard"),
                Err(err) => {
                    log::warn!("clipboard load failed: {err}");
                    self.status = Some(err.to_string());
                }
            },
            AppEvent::Quit => self.mode = AppMode::Quit,
            AppEvent::Help => self.help_open = true,
            AppEvent::InvalidCommand(line) => {
                self.status = Some(format!("Unknown command: {line}"));
            }
        }
    }

    fn handle_library_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                let last = self.catalog.books.len().saturating_sub(1);
                self.selected_book = (self.selected_book + 1).min(last);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_book = self.selected_book.saturating_sub(1);
            }
            KeyCode::Enter => self.open_selected_book(now),
            KeyCode::Char('t') => self.scheme = self.scheme.toggled(),
            KeyCode::Char('?') => self.help_open = true,
            KeyCode::Char(':') | KeyCode::Char('@') => self.enter_command(key),
            KeyCode::Char('q') | KeyCode::Esc => self.mode = AppMode::Quit,
            _ => {}
        }
    }

    fn handle_reading_key(&mut self, key: KeyCode, now: Instant) {
        if self.chapter_open {
            self.handle_chapter_key(key, now);
            return;
        }
        let Some(session) = &mut self.session else {
            self.mode = AppMode::Library;
            return;
        };

        match key {
            KeyCode::Char(' ') => session.player.toggle_play(now),
            KeyCode::Left | KeyCode::Char('h') => session.player.rewind(now),
            KeyCode::Right | KeyCode::Char('l') => session.player.fast_forward(now),
            KeyCode::Char('+') | KeyCode::Char('=') => session.player.nudge_wpm(1),
            KeyCode::Char('-') | KeyCode::Char('_') => session.player.nudge_wpm(-1),
            KeyCode::Char('m') => session.toggle_rsvp_mode(),
            KeyCode::Char('c') => {
                self.chapter_cursor = session.current_chapter();
                self.chapter_open = !session.chapters().is_empty();
            }
            KeyCode::Char('t') => self.scheme = self.scheme.toggled(),
            KeyCode::Char('?') => self.help_open = true,
            KeyCode::Char(':') | KeyCode::Char('@') => self.enter_command(key),
            KeyCode::Char('q') | KeyCode::Esc => self.close_session(),
            _ => {}
        }
    }

    fn handle_chapter_key(&mut self, key: KeyCode, now: Instant) {
        let Some(session) = &mut self.session else {
            self.chapter_open = false;
            return;
        };
        let last = session.chapters().len().saturating_sub(1);

        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                self.chapter_cursor = (self.chapter_cursor + 1).min(last);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.chapter_cursor = self.chapter_cursor.saturating_sub(1);
            }
            KeyCode::Enter => {
                session.jump_to_chapter(self.chapter_cursor, now);
                self.chapter_open = false;
            }
            KeyCode::Esc | KeyCode::Char('c') | KeyCode::Char('q') => {
                self.chapter_open = false;
            }
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyCode) -> Option<String> {
        match key {
            KeyCode::Char(c) => {
                self.command_buffer.push(c);
                None
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
                None
            }
            KeyCode::Esc => {
                self.command_buffer.clear();
                self.mode = self.return_mode;
                None
            }
            KeyCode::Enter => {
                let line = std::mem::take(&mut self.command_buffer);
                self.mode = self.return_mode;
                Some(line)
            }
            _ => None,
        }
    }

    fn enter_command(&mut self, key: KeyCode) {
        self.return_mode = self.mode;
        self.command_buffer.clear();
        if let KeyCode::Char(prefix) = key {
            self.command_buffer.push(prefix);
        }
        self.mode = AppMode::Command;
    }

    fn open_selected_book(&mut self, now: Instant) {
        let Some(book) = self.catalog.books.get(self.selected_book) else {
            return;
        };
        let id = book.id.clone();
        let title = book.title.clone();
        let progress = book.progress;

        let Some((content, chapters)) = samples::sample_text(&id) else {
            self.status = Some(format!("No content available for \"{title}\""));
            return;
        };

        log::info!("opening {title} ({id})");
        let mut session = ReadingSession::new(Some(id), title, content, chapters);
        session.resume_at_percent(progress, now);
        self.session = Some(session);
        self.chapter_open = false;
        self.mode = AppMode::Reading;
    }

    /// Imported documents join the catalog so they show on the shelf.
    fn open_import(&mut self, doc: Document, title: String) {
        let shelf_id = match self.catalog.shelves.first() {
            Some(shelf) => shelf.id.clone(),
            None => self.catalog.add_shelf("Imports", "Imported files").id.clone(),
        };
        let book_id = self.catalog.add_book(&title, "Imported", &shelf_id).id.clone();

        log::info!("imported {} as {book_id}", doc.source);
        self.session = Some(ReadingSession::new(
            Some(book_id),
            title,
            doc.content,
            doc.chapters,
        ));
        self.chapter_open = false;
        self.mode = AppMode::Reading;
    }

    /// Clipboard text is read without touching the catalog.
    fn open_transient(&mut self, doc: Document, title: &str) {
        self.session = Some(ReadingSession::new(None, title, doc.content, doc.chapters));
        self.chapter_open = false;
        self.mode = AppMode::Reading;
    }

    /// Leaves the reader, recording how far we got.
    fn close_session(&mut self) {
        if let Some(session) = self.session.take() {
            if let Some(book_id) = &session.book_id {
                self.catalog.set_progress(book_id, session.progress_percent());
            }
        }
        self.chapter_open = false;
        self.mode = AppMode::Library;
    }

    /// Snapshot for the reader screen.
    pub fn render_state(&self) -> RenderState {
        let (word, progress, wpm, playing, rsvp_mode, position, book_title, chapter_title) =
            match &self.session {
                Some(session) => (
                    WordParts::of(session.player.current_text()),
                    session.player.progress_ratio(),
                    session.player.wpm(),
                    session.player.is_playing(),
                    session.rsvp_mode().label(),
                    (session.player.current_index(), session.player.token_count()),
                    session.title.clone(),
                    session
                        .chapters()
                        .get(session.current_chapter())
                        .map(|c| c.title.clone()),
                ),
                None => (
                    WordParts::default(),
                    0.0,
                    0,
                    false,
                    "",
                    (0, 0),
                    String::new(),
                    None,
                ),
            };

        RenderState {
            mode: self.mode,
            scheme: self.scheme,
            book_title,
            chapter_title,
            word,
            progress,
            wpm,
            playing,
            rsvp_mode,
            position,
            status: self.status.clone(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> Instant {
        Instant::now()
    }

    #[test]
    fn test_boots_into_library() {
        let app = App::new();
        assert_eq!(app.mode, AppMode::Library);
        assert!(app.session.is_none());
        assert_eq!(app.catalog.books.len(), 3);
    }

    #[test]
    fn test_open_seeded_book_enters_reading() {
        let mut app = App::new();
        app.handle_key(KeyCode::Enter, now());
        assert_eq!(app.mode, AppMode::Reading);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.title, "The Garden at Dusk");
        assert!(session.player.token_count() > 0);
    }

    #[test]
    fn test_opening_resumes_saved_progress() {
        let mut app = App::new();
        // b1 is seeded at 18 percent.
        app.handle_key(KeyCode::Enter, now());
        let session = app.session.as_ref().unwrap();
        assert!(session.player.current_index() > 0);
    }

    #[test]
    fn test_close_session_records_progress() {
        let t = now();
        let mut app = App::new();
        app.selected_book = 1; // b2, progress 0
        app.handle_key(KeyCode::Enter, t);

        let session = app.session.as_mut().unwrap();
        let mid = (session.player.token_count() / 2) as isize;
        session.player.seek_to_token(mid, t);

        app.handle_key(KeyCode::Char('q'), t);
        assert_eq!(app.mode, AppMode::Library);
        assert!(app.session.is_none());
        assert!(app.catalog.book("b2").unwrap().progress > 0);
    }

    #[test]
    fn test_space_toggles_playback() {
        let t = now();
        let mut app = App::new();
        app.handle_key(KeyCode::Enter, t);
        app.handle_key(KeyCode::Char(' '), t);
        assert!(app.session.as_ref().unwrap().player.is_playing());
        app.handle_key(KeyCode::Char(' '), t);
        assert!(!app.session.as_ref().unwrap().player.is_playing());
    }

    #[test]
    fn test_library_cursor_clamps() {
        let t = now();
        let mut app = App::new();
        for _ in 0..10 {
            app.handle_key(KeyCode::Char('j'), t);
        }
        assert_eq!(app.selected_book, 2);
        for _ in 0..10 {
            app.handle_key(KeyCode::Char('k'), t);
        }
        assert_eq!(app.selected_book, 0);
    }

    #[test]
    fn test_chapter_overlay_jump() {
        let t = now();
        let mut app = App::new();
        app.handle_key(KeyCode::Enter, t);
        app.handle_key(KeyCode::Char('c'), t);
        assert!(app.chapter_open);

        app.handle_key(KeyCode::Char('j'), t);
        app.handle_key(KeyCode::Enter, t);
        assert!(!app.chapter_open);

        let session = app.session.as_ref().unwrap();
        assert!(!session.player.is_playing());
    }

    #[test]
    fn test_command_deck_roundtrip() {
        let t = now();
        let mut app = App::new();
        app.handle_key(KeyCode::Char(':'), t);
        assert_eq!(app.mode, AppMode::Command);

        app.handle_key(KeyCode::Char('q'), t);
        let line = app.handle_key(KeyCode::Enter, t);
        assert_eq!(line.as_deref(), Some(":q"));
        assert_eq!(app.mode, AppMode::Library);
    }

    #[test]
    fn test_command_escape_cancels() {
        let t = now();
        let mut app = App::new();
        app.handle_key(KeyCode::Char(':'), t);
        app.handle_key(KeyCode::Char('h'), t);
        app.handle_key(KeyCode::Esc, t);
        assert_eq!(app.mode, AppMode::Library);
        assert!(app.command_buffer.is_empty());
    }

    #[test]
    fn test_quit_event() {
        let mut app = App::new();
        app.handle_event(AppEvent::Quit);
        assert_eq!(app.mode, AppMode::Quit);
    }

    #[test]
    fn test_invalid_command_sets_status() {
        let mut app = App::new();
        app.handle_event(AppEvent::InvalidCommand("wat".into()));
        assert!(app.status.as_ref().unwrap().contains("wat"));
    }

    #[test]
    fn test_load_missing_file_reports_error() {
        let mut app = App::new();
        app.handle_event(AppEvent::LoadFile("/nonexistent/book.txt".into()));
        assert_eq!(app.mode, AppMode::Library);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_render_state_without_session() {
        let app = App::new();
        let state = app.render_state();
        assert_eq!(state.position, (0, 0));
        assert_eq!(state.word, WordParts::default());
    }

    #[test]
    fn test_render_state_reflects_session() {
        let t = now();
        let mut app = App::new();
        app.handle_key(KeyCode::Enter, t);
        let state = app.render_state();
        assert!(!state.word.anchor.is_empty());
        assert_eq!(state.rsvp_mode, "clean");
        assert!(state.chapter_title.is_some());
        assert_eq!(state.wpm, 300);
    }

    #[test]
    fn test_theme_toggle() {
        let t = now();
        let mut app = App::new();
        let before = app.scheme;
        app.handle_key(KeyCode::Char('t'), t);
        assert_ne!(app.scheme, before);
    }
}

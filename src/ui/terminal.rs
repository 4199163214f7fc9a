use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Terminal;

use crate::app::{App, AppMode};
use crate::ui::command::{command_to_app_event, parse_command};
use crate::ui::library_view::render_library;
use crate::ui::reader::view;
use crate::ui::reader::ThumbFade;
use crate::ui::terminal_guard::TerminalGuard;
use crate::ui::theme::Theme;

const RENDER_TICK: Duration = Duration::from_millis(1000 / 60);

/// Owns the terminal, the render loop, and the mouse-to-scrub mapping.
///
/// The loop sleeps on `event::poll` for no longer than the earliest pending
/// deadline (advance timer, thumb fade, or the render tick), so the timer
/// chain fires on time without a busy loop.
pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    _guard: TerminalGuard,
    thumb: ThumbFade,
    track_area: Option<Rect>,
    hud_area: Option<Rect>,
    wpm_drag: bool,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            _guard: guard,
            thumb: ThumbFade::new(),
            track_area: None,
            hud_area: None,
            wpm_drag: false,
        })
    }

    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        let mut last_render = Instant::now() - RENDER_TICK;

        loop {
            if app.mode == AppMode::Quit {
                return Ok(());
            }

            let now = Instant::now();
            app.tick(now);
            self.thumb.tick(now);

            if last_render.elapsed() >= RENDER_TICK {
                self.render_frame(app)?;
                last_render = Instant::now();
            }

            let mut timeout = RENDER_TICK;
            if let Some(t) = app.poll_timeout(now) {
                timeout = timeout.min(t);
            }
            if let Some(t) = self.thumb.poll_timeout(now) {
                timeout = timeout.min(t);
            }

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        let now = Instant::now();
                        if let Some(line) = app.handle_key(key.code, now) {
                            let app_event = command_to_app_event(parse_command(&line));
                            app.handle_event(app_event);
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(app, mouse),
                    _ => {}
                }
            }
        }
    }

    /// Maps progress-track gestures onto the player's scrub operations.
    fn handle_mouse(&mut self, app: &mut App, mouse: MouseEvent) {
        let Some(session) = app.session.as_mut() else {
            return;
        };
        let Some(track) = self.track_area else {
            return;
        };
        let now = Instant::now();
        let ratio = ratio_on_track(track, mouse.column);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if app.mode != AppMode::Reading || app.chapter_open {
                    return;
                }
                if mouse.row.abs_diff(track.y) <= 1
                    && mouse.column >= track.x
                    && mouse.column < track.x.saturating_add(track.width)
                {
                    session.player.begin_scrub(ratio);
                    self.thumb.show_now();
                } else if let Some(hud) = self.hud_area {
                    // Dragging along the rate readout works like a slider.
                    if mouse.row == hud.y {
                        self.wpm_drag = true;
                        session
                            .player
                            .set_wpm_snapped(wpm_for_ratio(ratio_on_track(hud, mouse.column)));
                    }
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if session.player.is_scrubbing() {
                    session.player.update_scrub(ratio);
                    self.thumb.show_now();
                } else if self.wpm_drag {
                    if let Some(hud) = self.hud_area {
                        session
                            .player
                            .set_wpm_snapped(wpm_for_ratio(ratio_on_track(hud, mouse.column)));
                    }
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if session.player.is_scrubbing() {
                    session.player.end_scrub(now);
                    self.thumb.hide_soon(now);
                }
                self.wpm_drag = false;
            }
            _ => {}
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.render_state();
        let theme = Theme::of(state.scheme);
        let reading = app.session.is_some();
        let thumb_visible = self.thumb.is_visible();
        let mut areas = None;

        self.terminal.draw(|frame| {
            let area = frame.area();
            frame.render_widget(
                Block::default().style(Style::default().bg(theme.background)),
                area,
            );

            if reading {
                areas = Some(render_reader(frame, area, &state, &theme, thumb_visible));
            } else {
                frame.render_widget(render_library(app, &theme), area.inner(ratatui::layout::Margin {
                    horizontal: 2,
                    vertical: 1,
                }));
            }

            if state.mode == AppMode::Command {
                render_command_deck(frame, area, &app.command_buffer, &theme);
            }

            if app.chapter_open {
                if let Some(session) = &app.session {
                    let overlay = centered_rect(area, 40, (session.chapters().len() + 2) as u16);
                    view::render_chapter_overlay(
                        frame,
                        overlay,
                        session.chapters(),
                        app.chapter_cursor,
                        session.current_chapter(),
                        &theme,
                    );
                }
            }

            if app.help_open {
                let overlay = centered_rect(area, 52, 10);
                view::render_help_overlay(frame, overlay, &theme);
            }
        })?;

        self.track_area = areas.map(|a| a.track);
        self.hud_area = areas.map(|a| a.hud);
        Ok(())
    }
}

/// Interactive rects of the reader screen, kept for mouse mapping.
#[derive(Debug, Clone, Copy)]
struct ReaderAreas {
    track: Rect,
    hud: Rect,
}

fn ratio_on_track(track: Rect, column: u16) -> f64 {
    if track.width <= 1 {
        return 0.0;
    }
    let offset = column.saturating_sub(track.x) as f64;
    (offset / (track.width - 1) as f64).clamp(0.0, 1.0)
}

/// Maps a slider position onto the allowed rate range.
fn wpm_for_ratio(ratio: f64) -> u32 {
    const MIN_WPM: f64 = 100.0;
    const MAX_WPM: f64 = 600.0;
    (MIN_WPM + ratio.clamp(0.0, 1.0) * (MAX_WPM - MIN_WPM)).round() as u32
}

/// Draws the reader screen and returns its interactive rects.
fn render_reader(
    frame: &mut ratatui::Frame,
    area: Rect,
    state: &crate::app::RenderState,
    theme: &Theme,
    thumb_visible: bool,
) -> ReaderAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // nav
            Constraint::Length(1), // chapter
            Constraint::Min(3),    // word area
            Constraint::Length(1), // progress track
            Constraint::Length(1), // hud
            Constraint::Length(1), // status
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(view::render_nav_line(state, theme)),
        rows[0],
    );
    frame.render_widget(view::render_chapter_line(state, theme), rows[1]);

    // Word block: guide, word, guide, vertically centered in a fixed-width
    // column so the anchor stays put.
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(rows[2]);
    let word_column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(28),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    let word_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(word_column[1]);

    frame.render_widget(view::render_guide(theme), word_rows[0]);
    frame.render_widget(view::render_word_display(&state.word, theme), word_rows[1]);
    frame.render_widget(view::render_guide(theme), word_rows[2]);

    // Progress track, inset from both edges.
    let track_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(10),
            Constraint::Length(6),
        ])
        .split(rows[3]);
    let track = track_row[1];
    frame.render_widget(
        Paragraph::new(view::render_progress_track(
            state.progress,
            track.width,
            thumb_visible,
            theme,
        )),
        track,
    );

    frame.render_widget(Paragraph::new(view::render_hud(state, theme)), rows[4]);

    if let Some(status) = &state.status {
        frame.render_widget(
            Paragraph::new(view::render_status_line(status, theme)),
            rows[5],
        );
    }

    ReaderAreas {
        track,
        hud: rows[4],
    }
}

/// Command deck along the bottom edge: accent bar plus the input buffer.
fn render_command_deck(
    frame: &mut ratatui::Frame,
    area: Rect,
    buffer: &str,
    theme: &Theme,
) {
    let deck = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let bar = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(deck);

    frame.render_widget(
        Paragraph::new("▌").style(Style::default().fg(theme.accent).bg(theme.surface)),
        bar[0],
    );
    frame.render_widget(
        Paragraph::new(format!("{buffer}▏"))
            .style(Style::default().fg(theme.text).bg(theme.surface)),
        bar[1],
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

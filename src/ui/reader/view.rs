use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::render_state::{RenderState, WordParts};
use crate::rsvp::Chapter;
use crate::ui::theme::Theme;

/// Column the anchor glyph is pinned to, so consecutive words line up on
/// their recognition point instead of jittering.
const ANCHOR_COLUMN: usize = 4;

pub fn render_word_display(word: &WordParts, theme: &Theme) -> Paragraph<'static> {
    let padding = ANCHOR_COLUMN.saturating_sub(word.before.width());

    let mut spans = vec![Span::raw(" ".repeat(padding))];
    spans.push(Span::styled(
        word.before.clone(),
        Style::default().fg(theme.text),
    ));
    spans.push(Span::styled(
        word.anchor.clone(),
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        word.after.clone(),
        Style::default().fg(theme.text),
    ));

    Paragraph::new(Line::from(spans)).alignment(Alignment::Left)
}

/// Focal guides above and below the anchor column.
pub fn render_guide(theme: &Theme) -> Paragraph<'static> {
    let guide = format!("{}│", " ".repeat(ANCHOR_COLUMN));
    Paragraph::new(guide)
        .alignment(Alignment::Left)
        .style(Style::default().fg(theme.dimmed))
}

pub fn render_progress_track(
    ratio: f64,
    width: u16,
    thumb_visible: bool,
    theme: &Theme,
) -> Line<'static> {
    let cols = width.max(1) as usize;
    let pos = (ratio.clamp(0.0, 1.0) * (cols - 1) as f64).round() as usize;

    let mut spans = Vec::with_capacity(cols);
    for i in 0..cols {
        if thumb_visible && i == pos {
            spans.push(Span::styled(
                "●",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ));
        } else if i <= pos {
            spans.push(Span::styled("─", Style::default().fg(theme.accent)));
        } else {
            spans.push(Span::styled("─", Style::default().fg(theme.dimmed)));
        }
    }
    Line::from(spans)
}

pub fn render_chapter_line(state: &RenderState, theme: &Theme) -> Paragraph<'static> {
    let title = state.chapter_title.clone().unwrap_or_default();
    Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.secondary))
}

pub fn render_hud(state: &RenderState, theme: &Theme) -> Line<'static> {
    let (current, total) = state.position;
    let position = if total == 0 {
        String::from("–/–")
    } else {
        format!("{}/{}", current + 1, total)
    };
    let glyph = if state.playing { "▶" } else { "⏸" };

    Line::from(vec![
        Span::styled(
            format!("{glyph} {} WPM", state.wpm),
            Style::default().fg(theme.text),
        ),
        Span::styled(
            format!("  ·  {}  ·  {position}", state.rsvp_mode),
            Style::default().fg(theme.secondary),
        ),
    ])
    .alignment(Alignment::Center)
}

pub fn render_nav_line(state: &RenderState, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("RETURN [q]  ", Style::default().fg(theme.secondary)),
        Span::styled(
            state.book_title.clone(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ])
    .alignment(Alignment::Center)
}

pub fn render_status_line(status: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        status.to_string(),
        Style::default().fg(theme.accent),
    ))
    .alignment(Alignment::Center)
}

/// Modal list of chapters, numbered, with the cursor row highlighted and a
/// check on the chapter currently being read.
pub fn render_chapter_overlay(
    frame: &mut Frame,
    area: Rect,
    chapters: &[Chapter],
    cursor: usize,
    current: usize,
    theme: &Theme,
) {
    frame.render_widget(Clear, area);

    let mut lines = Vec::with_capacity(chapters.len());
    for (i, chapter) in chapters.iter().enumerate() {
        let number = format!("{:02}", i + 1);
        let marker = if i == current { " ✓" } else { "" };
        let style = if i == cursor {
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {number}  "), Style::default().fg(theme.secondary)),
            Span::styled(format!("{}{marker}", chapter.title), style),
        ]));
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Contents ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .style(Style::default().bg(theme.surface));
    frame.render_widget(widget, area);
}

pub fn render_help_overlay(frame: &mut Frame, area: Rect, theme: &Theme) {
    frame.render_widget(Clear, area);

    let text = "\
space      play / pause
h / l      back / forward 10 words
+ / -      reading speed ±10 WPM
m          clean / pure mode
c          chapters
t          paper / charcoal theme
:q         quit   @file  load   @@  clipboard
q          back";

    let widget = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Keys ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.dimmed)),
        )
        .style(Style::default().fg(theme.text).bg(theme.surface));
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ColorScheme;

    fn theme() -> Theme {
        Theme::of(ColorScheme::Paper)
    }

    #[test]
    fn test_word_display_builds() {
        let parts = WordParts::of("reading");
        let _ = render_word_display(&parts, &theme());
    }

    #[test]
    fn test_word_display_empty_word() {
        let _ = render_word_display(&WordParts::default(), &theme());
    }

    #[test]
    fn test_progress_track_span_count_matches_width() {
        let line = render_progress_track(0.5, 40, false, &theme());
        assert_eq!(line.spans.len(), 40);
    }

    #[test]
    fn test_progress_track_zero_width_is_safe() {
        let line = render_progress_track(0.0, 0, true, &theme());
        assert_eq!(line.spans.len(), 1);
    }

    #[test]
    fn test_progress_track_thumb_marker() {
        let line = render_progress_track(1.0, 10, true, &theme());
        assert_eq!(line.spans.last().unwrap().content.as_ref(), "●");
    }
}

use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::ui::theme::Theme;

/// Shelf browser: shelves as section headers, books as rows, the cursor row
/// marked with an accent bar.
pub fn render_library(app: &App, theme: &Theme) -> Paragraph<'static> {
    let mut lines = vec![
        Line::from(Span::styled(
            "LIBRARY",
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::default(),
    ];

    for shelf in &app.catalog.shelves {
        lines.push(Line::from(vec![
            Span::styled(
                shelf.name.clone(),
                Style::default().fg(theme.secondary).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", shelf.description),
                Style::default().fg(theme.dimmed),
            ),
        ]));

        for book in app.catalog.books_on_shelf(&shelf.id) {
            let selected = app
                .catalog
                .books
                .get(app.selected_book)
                .map(|b| b.id == book.id)
                .unwrap_or(false);

            let bar = if selected { "▌ " } else { "  " };
            let title_style = if selected {
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text)
            };
            let progress = if book.progress > 0 {
                format!("  {}%", book.progress)
            } else {
                String::new()
            };

            lines.push(Line::from(vec![
                Span::styled(bar, Style::default().fg(theme.accent)),
                Span::styled(book.title.clone(), title_style),
                Span::styled(
                    format!("  {}", book.author),
                    Style::default().fg(theme.secondary),
                ),
                Span::styled(progress, Style::default().fg(theme.dimmed)),
            ]));
        }
        lines.push(Line::default());
    }

    lines.push(
        Line::from(Span::styled(
            "enter open · j/k move · t theme · ? keys · :q quit",
            Style::default().fg(theme.dimmed),
        ))
        .alignment(Alignment::Center),
    );

    Paragraph::new(lines).style(Style::default().bg(theme.background))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ColorScheme;

    #[test]
    fn test_library_renders_all_books() {
        let app = App::new();
        let theme = Theme::of(ColorScheme::Charcoal);
        let _ = render_library(&app, &theme);
    }
}

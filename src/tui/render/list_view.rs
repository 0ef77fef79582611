use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::push_highlighted_spans;

/// Render the (filtered) task list with cursor and match highlighting
pub fn render_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    let len = app.visible_len();
    if len == 0 {
        let message = if app.store.is_empty() {
            "No tasks yet. Press a to add one."
        } else {
            "No tasks match the filter."
        };
        let line = Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    // Keep the cursor on a real row and inside the viewport
    app.clamp_cursor();
    let height = area.height as usize;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let matcher = app.filter_matcher();
    let visible = app.store.search(&app.search_input);
    let width = area.width as usize;

    let mut lines: Vec<Line> = Vec::new();
    for (i, task) in visible
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height.max(1))
    {
        let selected = i == app.cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };

        let marker = if selected { "\u{258C}" } else { " " };
        let checkbox = if task.completed { "[x] " } else { "[ ] " };
        let checkbox_style = Style::default()
            .fg(if task.completed {
                app.theme.green
            } else {
                app.theme.dim
            })
            .bg(row_bg);
        let title_style = if task.completed {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };
        let highlight_style = Style::default()
            .fg(app.theme.search_match_fg)
            .bg(app.theme.search_match_bg);

        let mut spans = vec![
            Span::styled(
                marker.to_string(),
                Style::default().fg(app.theme.highlight).bg(row_bg),
            ),
            Span::styled(checkbox.to_string(), checkbox_style),
        ];

        // marker (1) + checkbox (4)
        let title = unicode::truncate_to_width(&task.title, width.saturating_sub(5));
        push_highlighted_spans(
            &mut spans,
            &title,
            title_style,
            highlight_style,
            matcher.as_ref(),
        );

        // Pad the selected row so its background reaches the right edge
        if selected {
            let used: usize = spans
                .iter()
                .map(|s| unicode::display_width(&s.content))
                .sum();
            if used < width {
                spans.push(Span::styled(
                    " ".repeat(width - used),
                    Style::default().bg(row_bg),
                ));
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

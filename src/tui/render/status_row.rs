use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, InputTarget, Mode};
use crate::util::unicode;

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::Navigate => {
            let mut spans = Vec::new();
            if let Some(ref message) = app.status_message {
                let color = if app.status_is_error {
                    app.theme.red
                } else {
                    app.theme.yellow
                };
                spans.push(Span::styled(
                    format!(" {}", message),
                    Style::default().fg(color).bg(bg),
                ));
            } else {
                let stats = app.store.stats();
                spans.push(Span::styled(
                    format!(
                        " {} pending \u{00B7} {} done \u{00B7} {} total",
                        stats.pending, stats.done, stats.total
                    ),
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }
            let hint = if app.show_key_hints {
                "a add  e edit  d delete  space toggle  / filter  s save  q quit"
            } else {
                ""
            };
            with_right_hint(spans, hint, width, app)
        }
        Mode::Input => {
            let prefix = match app.input_target {
                Some(InputTarget::NewTask) => " Add: ",
                _ => " Edit: ",
            };
            let mut spans = vec![Span::styled(
                prefix,
                Style::default().fg(app.theme.yellow).bg(bg),
            )];
            push_input_spans(&mut spans, app);
            with_right_hint(spans, "Enter save  Esc cancel", width, app)
        }
        Mode::Search => {
            let mut spans = vec![
                Span::styled(
                    format!(" /{}", app.search_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled(
                    "\u{258C}",
                    Style::default().fg(app.theme.highlight).bg(bg),
                ),
            ];
            let hint = "Enter keep filter  Esc clear";
            spans = with_right_hint_spans(spans, hint, width, app);
            Line::from(spans)
        }
        Mode::Confirm => {
            let spans = vec![Span::styled(
                " y confirm  n cancel",
                Style::default().fg(app.theme.yellow).bg(bg),
            )];
            Line::from(spans)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// The input buffer with a cursor glyph at the edit position
fn push_input_spans(spans: &mut Vec<Span<'static>>, app: &App) {
    let bg = app.theme.background;
    let before = &app.input_buffer[..app.input_cursor.min(app.input_buffer.len())];
    let after = &app.input_buffer[app.input_cursor.min(app.input_buffer.len())..];
    spans.push(Span::styled(
        before.to_string(),
        Style::default().fg(app.theme.text_bright).bg(bg),
    ));
    spans.push(Span::styled(
        "\u{258C}",
        Style::default().fg(app.theme.highlight).bg(bg),
    ));
    spans.push(Span::styled(
        after.to_string(),
        Style::default().fg(app.theme.text_bright).bg(bg),
    ));
}

fn with_right_hint(spans: Vec<Span<'static>>, hint: &str, width: usize, app: &App) -> Line<'static> {
    Line::from(with_right_hint_spans(spans, hint, width, app))
}

/// Pad between the left content and a dim right-aligned hint
fn with_right_hint_spans(
    mut spans: Vec<Span<'static>>,
    hint: &str,
    width: usize,
    app: &App,
) -> Vec<Span<'static>> {
    let bg = app.theme.background;
    if !app.show_key_hints || hint.is_empty() {
        return spans;
    }
    let content_width: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    let hint_width = unicode::display_width(hint) + 1;
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            format!("{} ", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
    spans
}

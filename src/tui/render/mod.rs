pub mod dialog;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use regex::Regex;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    list_view::render_list(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Overlays, innermost last so it draws on top
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }
    if app.confirm.is_some() {
        dialog::render_confirm(frame, app, frame.area());
    }
    if app.dialog.is_some() {
        dialog::render_dialog(frame, app, frame.area());
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let mut spans = vec![Span::styled(
        " tick",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    if !app.search_input.trim().is_empty() {
        spans.push(Span::styled(
            format!("  filtering: \"{}\"", app.search_input),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(area.width as usize),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![Line::from(spans), separator])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Push spans for text with match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match
/// boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let re = match search_re {
        Some(r) => r,
        None => {
            spans.push(Span::styled(text.to_string(), base_style));
            return;
        }
    };

    let mut last_end = 0;
    let mut has_match = false;
    for m in re.find_iter(text) {
        has_match = true;
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(
            text[m.start()..m.end()].to_string(),
            highlight_style,
        ));
        last_end = m.end();
    }
    if !has_match {
        spans.push(Span::styled(text.to_string(), base_style));
    } else if last_end < text.len() {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

/// Create a centered rectangle of the given percentage of the parent
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn styles() -> (Style, Style) {
        (
            Style::default().fg(Color::White),
            Style::default().bg(Color::Cyan),
        )
    }

    #[test]
    fn no_regex_is_a_single_span() {
        let (base, hl) = styles();
        let mut spans = Vec::new();
        push_highlighted_spans(&mut spans, "hello", base, hl, None);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].content, "hello");
    }

    #[test]
    fn match_splits_into_three_spans() {
        let (base, hl) = styles();
        let re = Regex::new("(?i)milk").unwrap();
        let mut spans = Vec::new();
        push_highlighted_spans(&mut spans, "Buy Milk now", base, hl, Some(&re));
        let contents: Vec<_> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(contents, vec!["Buy ", "Milk", " now"]);
        assert_eq!(spans[1].style, hl);
    }

    #[test]
    fn no_match_keeps_base_style() {
        let (base, hl) = styles();
        let re = Regex::new("zzz").unwrap();
        let mut spans = Vec::new();
        push_highlighted_spans(&mut spans, "hello", base, hl, Some(&re));
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].style, base);
    }

    #[test]
    fn match_at_end_has_no_trailing_span() {
        let (base, hl) = styles();
        let re = Regex::new("dog").unwrap();
        let mut spans = Vec::new();
        push_highlighted_spans(&mut spans, "Walk dog", base, hl, Some(&re));
        let contents: Vec<_> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(contents, vec!["Walk ", "dog"]);
    }

    #[test]
    fn centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 50, parent);
        assert!(rect.x >= 25 && rect.x <= 26);
        assert!(rect.width <= 50);
        assert!(rect.y >= 10 && rect.y <= 11);
    }
}

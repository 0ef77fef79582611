use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::{App, ConfirmAction};

use super::centered_rect;

/// Render the blocking message dialog (errors and local rejections)
pub fn render_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref dialog) = app.dialog else {
        return;
    };

    let overlay = centered_rect(60, 40, area);
    frame.render_widget(Clear, overlay);

    let bg = app.theme.background;
    let title_color = if dialog.is_error {
        app.theme.red
    } else {
        app.theme.yellow
    };

    let mut lines: Vec<Line> = Vec::new();
    for text in dialog.body.lines() {
        lines.push(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(app.theme.text).bg(bg),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter to dismiss",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", dialog.title),
            Style::default()
                .fg(title_color)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(title_color).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay);
}

/// Render the y/n confirmation popup
pub fn render_confirm(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref action) = app.confirm else {
        return;
    };

    let question = match action {
        ConfirmAction::DeleteTask { title, .. } => {
            format!("Remove task \"{}\"?", title)
        }
        ConfirmAction::ClearCompleted { count } => {
            format!("Remove {} completed task(s)?", count)
        }
    };

    let overlay = centered_rect(50, 25, area);
    frame.render_widget(Clear, overlay);

    let bg = app.theme.background;
    let lines = vec![
        Line::from(Span::styled(
            question,
            Style::default().fg(app.theme.text_bright).bg(bg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "y",
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" confirm   ", Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled(
                "n",
                Style::default()
                    .fg(app.theme.highlight)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" cancel", Style::default().fg(app.theme.dim).bg(bg)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Confirm ",
            Style::default()
                .fg(app.theme.yellow)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(app.theme.yellow).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay);
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, InputTarget, Mode};
use crate::util::unicode;

pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Cancel input
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
            app.input_target = None;
            app.input_buffer.clear();
            app.input_cursor = 0;
        }

        // Commit
        (_, KeyCode::Enter) => commit_input(app),

        // Cursor movement (grapheme-aligned)
        (_, KeyCode::Left) => {
            if let Some(prev) =
                unicode::prev_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Right) => {
            if let Some(next) =
                unicode::next_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_cursor = next;
            }
        }
        (_, KeyCode::Home) => app.input_cursor = 0,
        (_, KeyCode::End) => app.input_cursor = app.input_buffer.len(),

        // Delete backwards / forwards
        (_, KeyCode::Backspace) => {
            if let Some(prev) =
                unicode::prev_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_buffer.replace_range(prev..app.input_cursor, "");
                app.input_cursor = prev;
            }
        }
        (_, KeyCode::Delete) => {
            if let Some(next) =
                unicode::next_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_buffer.replace_range(app.input_cursor..next, "");
            }
        }

        // Clear the whole line: Ctrl+U
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_buffer.clear();
            app.input_cursor = 0;
        }

        // Type a character
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.input_buffer.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }

        _ => {}
    }
}

/// Validate and apply the input line. The title check here mirrors the
/// store's own validation for responsiveness; the store remains the source
/// of truth.
fn commit_input(app: &mut App) {
    if app.input_buffer.trim().is_empty() {
        app.show_message("Invalid title", "Task title cannot be empty");
        return;
    }

    let Some(target) = app.input_target.clone() else {
        app.mode = Mode::Navigate;
        return;
    };

    let buffer = app.input_buffer.clone();
    let result = match &target {
        InputTarget::NewTask => app.store.add(&buffer).map(|_| ()),
        InputTarget::EditTask { id } => app.store.rename(id, &buffer),
    };

    match result {
        Ok(()) => {
            app.mode = Mode::Navigate;
            app.input_target = None;
            app.input_buffer.clear();
            app.input_cursor = 0;
            match target {
                InputTarget::NewTask => {
                    // New tasks land on top of the full list
                    app.cursor = 0;
                    app.scroll_offset = 0;
                    app.set_status("Added");
                }
                InputTarget::EditTask { .. } => app.set_status("Renamed"),
            }
            app.save_and_report();
        }
        Err(e) => app.show_error("Could not apply change", e.to_string()),
    }
}

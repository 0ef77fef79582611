use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, ConfirmAction, InputTarget, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts its own keys
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    // Clear any transient status message on keypress
    app.status_message = None;
    app.status_is_error = false;

    match (key.modifiers, key.code) {
        // Quit: q or Ctrl+Q. Saves first; see App::request_quit.
        (KeyModifiers::NONE, KeyCode::Char('q')) => app.request_quit(),
        (m, KeyCode::Char('q')) if m.contains(KeyModifiers::CONTROL) => {
            app.request_quit();
        }

        // Modifier left open: terminals report '?' with or without Shift
        (_, KeyCode::Char('?')) => app.show_help = true,

        // Cursor movement
        (_, KeyCode::Char('j') | KeyCode::Down) => {
            let len = app.visible_len();
            if len > 0 && app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        (_, KeyCode::Char('k') | KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Char('g')) => app.cursor = 0,
        (KeyModifiers::SHIFT, KeyCode::Char('G')) => {
            app.cursor = app.visible_len().saturating_sub(1);
        }

        // Add a task
        (KeyModifiers::NONE, KeyCode::Char('a')) => {
            app.input_buffer.clear();
            app.input_cursor = 0;
            app.input_target = Some(InputTarget::NewTask);
            app.mode = Mode::Input;
        }

        // Edit the selected task's title
        (KeyModifiers::NONE, KeyCode::Char('e')) => edit_selected(app),

        // Delete the selected task (with confirmation)
        (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Char('x')) => {
            delete_selected(app);
        }

        // Toggle completion: Space as the explicit command, Enter as the
        // activation on the selected row
        (_, KeyCode::Char(' ') | KeyCode::Enter) => toggle_selected(app),

        // Clear all completed tasks (with confirmation)
        (KeyModifiers::SHIFT, KeyCode::Char('C')) => clear_completed(app),

        // Live filter
        (_, KeyCode::Char('/')) => app.mode = Mode::Search,

        // Explicit save
        (KeyModifiers::NONE, KeyCode::Char('s')) => save_now(app),

        // Esc clears an active filter
        (_, KeyCode::Esc) => {
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.cursor = 0;
                app.scroll_offset = 0;
            }
        }

        _ => {}
    }
}

fn require_selection(app: &mut App) -> Option<String> {
    let id = app.selected_id();
    if id.is_none() {
        app.show_message("No selection", "Select a task first");
    }
    id
}

fn edit_selected(app: &mut App) {
    let Some(id) = require_selection(app) else {
        return;
    };
    let title = app
        .store
        .get(&id)
        .map(|t| t.title.clone())
        .unwrap_or_default();
    app.input_cursor = title.len();
    app.input_buffer = title;
    app.input_target = Some(InputTarget::EditTask { id });
    app.mode = Mode::Input;
}

fn delete_selected(app: &mut App) {
    let Some(id) = require_selection(app) else {
        return;
    };
    let title = app
        .store
        .get(&id)
        .map(|t| t.title.clone())
        .unwrap_or_default();
    app.confirm = Some(ConfirmAction::DeleteTask { id, title });
    app.mode = Mode::Confirm;
}

fn toggle_selected(app: &mut App) {
    let Some(id) = require_selection(app) else {
        return;
    };
    match app.store.toggle(&id) {
        Ok(done) => {
            app.set_status(if done { "Marked done" } else { "Marked pending" });
            app.save_and_report();
        }
        Err(e) => app.show_error("Toggle failed", e.to_string()),
    }
}

fn clear_completed(app: &mut App) {
    let count = app.store.stats().done;
    if count == 0 {
        app.set_status("No completed tasks to remove");
        return;
    }
    app.confirm = Some(ConfirmAction::ClearCompleted { count });
    app.mode = Mode::Confirm;
}

fn save_now(app: &mut App) {
    match app.store.save() {
        Ok(()) => {
            app.quit_after_save_failure = false;
            app.set_status(format!("Saved {} task(s)", app.store.len()));
        }
        Err(e) => app.show_error("Save failed", e.to_string()),
    }
}

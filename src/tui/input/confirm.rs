use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, ConfirmAction, Mode};

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        // Confirm: y
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            let action = app.confirm.take();
            app.mode = Mode::Navigate;
            match action {
                Some(ConfirmAction::DeleteTask { id, title }) => {
                    confirm_delete(app, &id, &title);
                }
                Some(ConfirmAction::ClearCompleted { .. }) => {
                    confirm_clear_completed(app);
                }
                None => {}
            }
        }
        // Cancel: n or Esc
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm = None;
            app.mode = Mode::Navigate;
        }
        _ => {}
    }
}

fn confirm_delete(app: &mut App, id: &str, title: &str) {
    match app.store.remove(id) {
        Ok(_) => {
            app.set_status(format!("Removed \"{}\"", title));
            app.clamp_cursor();
            app.save_and_report();
        }
        Err(e) => app.show_error("Delete failed", e.to_string()),
    }
}

fn confirm_clear_completed(app: &mut App) {
    let removed = app.store.clear_completed();
    app.set_status(format!("Removed {} completed task(s)", removed));
    app.clamp_cursor();
    app.save_and_report();
}

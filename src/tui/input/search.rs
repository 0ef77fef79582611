use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Live filter input: every keystroke narrows the visible list as it is
/// typed. Enter keeps the filter and returns to the list; Esc drops it.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Drop the filter
        (_, KeyCode::Esc) => {
            app.search_input.clear();
            app.mode = Mode::Navigate;
            app.cursor = 0;
            app.scroll_offset = 0;
        }

        // Keep the filter active and go back to navigating
        (_, KeyCode::Enter) => {
            app.mode = Mode::Navigate;
            app.clamp_cursor();
        }

        (_, KeyCode::Backspace) => {
            app.search_input.pop();
            app.cursor = 0;
            app.scroll_offset = 0;
        }

        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.search_input.push(c);
            app.cursor = 0;
            app.scroll_offset = 0;
        }

        _ => {}
    }
}

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;

use crate::model::Config;
use crate::store::TaskStore;
use crate::store::file_io;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Cursor over the (filtered) list
    Navigate,
    /// Single-line editor for a new or existing title
    Input,
    /// Typing into the live filter
    Search,
    /// Waiting on a y/n answer
    Confirm,
}

/// What the input line is editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputTarget {
    NewTask,
    EditTask { id: String },
}

/// Pending confirmation action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask { id: String, title: String },
    ClearCompleted { count: usize },
}

/// A blocking message dialog. Dismissed with Enter or Esc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub body: String,
    pub is_error: bool,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Set after a failed shutdown save; the next quit abandons the save
    pub quit_after_save_failure: bool,
    /// Cursor index into the visible (filtered) list
    pub cursor: usize,
    /// First visible row of the list view
    pub scroll_offset: usize,
    /// Live filter text (blank = full list)
    pub search_input: String,
    /// Single-line input buffer for add/edit
    pub input_buffer: String,
    /// Byte offset of the input cursor (grapheme-aligned)
    pub input_cursor: usize,
    pub input_target: Option<InputTarget>,
    pub confirm: Option<ConfirmAction>,
    pub dialog: Option<Dialog>,
    pub status_message: Option<String>,
    pub status_is_error: bool,
    pub show_help: bool,
    pub show_key_hints: bool,
}

impl App {
    pub fn new(store: TaskStore, theme: Theme, show_key_hints: bool) -> Self {
        App {
            store,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            quit_after_save_failure: false,
            cursor: 0,
            scroll_offset: 0,
            search_input: String::new(),
            input_buffer: String::new(),
            input_cursor: 0,
            input_target: None,
            confirm: None,
            dialog: None,
            status_message: None,
            status_is_error: false,
            show_help: false,
            show_key_hints,
        }
    }

    /// Number of tasks in the visible (filtered) list
    pub fn visible_len(&self) -> usize {
        self.store.search(&self.search_input).len()
    }

    /// The id of the task under the cursor, resolved through the filter
    pub fn selected_id(&self) -> Option<String> {
        self.store
            .search(&self.search_input)
            .get(self.cursor)
            .map(|t| t.id.clone())
    }

    /// The matcher for the active filter, used for highlighting
    pub fn filter_matcher(&self) -> Option<Regex> {
        TaskStore::search_matcher(&self.search_input)
    }

    /// Keep the cursor inside the visible list after mutations or filtering
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }

    pub fn show_message(&mut self, title: &str, body: impl Into<String>) {
        self.dialog = Some(Dialog {
            title: title.to_string(),
            body: body.into(),
            is_error: false,
        });
    }

    pub fn show_error(&mut self, title: &str, body: impl Into<String>) {
        self.dialog = Some(Dialog {
            title: title.to_string(),
            body: body.into(),
            is_error: true,
        });
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    /// Persist after a mutation. Failures surface as a dialog; the
    /// in-memory state is kept so the user can retry.
    pub fn save_and_report(&mut self) {
        if let Err(e) = self.store.save() {
            self.show_error("Save failed", e.to_string());
        }
    }

    /// Save and quit. If the save fails, stay alive and report; a second
    /// quit request abandons the save attempt.
    pub fn request_quit(&mut self) {
        match self.store.save() {
            Ok(()) => self.should_quit = true,
            Err(_) if self.quit_after_save_failure => {
                self.should_quit = true;
            }
            Err(e) => {
                self.quit_after_save_failure = true;
                self.show_error(
                    "Save failed",
                    format!("{}\n\nYour tasks were not written to disk. Quit again to exit without saving.", e),
                );
            }
        }
    }
}

/// Run the TUI application
pub fn run(data_dir_override: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let dir = file_io::data_dir(data_dir_override);
    let (config, config_notice) = Config::load(&dir);
    let theme = Theme::from_config(&config.ui);
    let data_path = dir.join(file_io::DATA_FILE);

    // A file that exists but cannot be loaded is reported, not fatal: the
    // session starts empty and the file stays untouched until the next save.
    let (store, load_error) = match TaskStore::open(&data_path) {
        Ok(store) => (store, None),
        Err(e) => (TaskStore::empty(&data_path), Some(e)),
    };

    let mut app = App::new(store, theme, config.ui.show_key_hints);
    if let Some(e) = load_error {
        let bak = file_io::backup_path(&data_path);
        app.show_error(
            "Load failed",
            format!(
                "{}\n\nStarting with an empty list. The file on disk is left as-is; the next save copies it to {} first.",
                e,
                bak.display()
            ),
        );
    }
    if let Some(notice) = config_notice {
        app.status_message = Some(notice);
        app.status_is_error = true;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Shutdown save: the quit path saves, but make sure an abnormal exit
    // still persists the session
    if !app.should_quit {
        let _ = app.store.save();
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

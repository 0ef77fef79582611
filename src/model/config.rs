use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Configuration from `config.toml` in the data directory.
///
/// Everything is optional; a missing file means defaults. A malformed file
/// also means defaults, plus a notice the UI shows once at startup (a bad
/// config should never keep the list from opening).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides, e.g. `background = "#0C001B"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Show key hints in the status row
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            colors: HashMap::new(),
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load `config.toml` from the data directory.
    ///
    /// Returns the config plus an optional notice for the status row when
    /// the file existed but could not be parsed.
    pub fn load(data_dir: &Path) -> (Config, Option<String>) {
        let path = data_dir.join("config.toml");
        let text = match fs::read_to_string(&path) {
            Ok(t) => t,
            Err(_) => return (Config::default(), None),
        };
        match toml::from_str(&text) {
            Ok(config) => (config, None),
            Err(e) => (
                Config::default(),
                Some(format!("config.toml ignored: {}", e.message())),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let (config, notice) = Config::load(dir.path());
        assert!(config.ui.colors.is_empty());
        assert!(config.ui.show_key_hints);
        assert!(notice.is_none());
    }

    #[test]
    fn parses_color_overrides() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.toml"),
            r##"
[ui]
show_key_hints = false

[ui.colors]
background = "#000000"
highlight = "#FB4196"
"##,
        )
        .unwrap();

        let (config, notice) = Config::load(dir.path());
        assert!(notice.is_none());
        assert!(!config.ui.show_key_hints);
        assert_eq!(
            config.ui.colors.get("background"),
            Some(&"#000000".to_string())
        );
        assert_eq!(
            config.ui.colors.get("highlight"),
            Some(&"#FB4196".to_string())
        );
    }

    #[test]
    fn malformed_file_gives_defaults_and_notice() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "not toml [[[").unwrap();

        let (config, notice) = Config::load(dir.path());
        assert!(config.ui.colors.is_empty());
        assert!(notice.unwrap().starts_with("config.toml ignored"));
    }

    #[test]
    fn empty_file_is_valid() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();

        let (config, notice) = Config::load(dir.path());
        assert!(notice.is_none());
        assert!(config.ui.show_key_hints);
    }
}

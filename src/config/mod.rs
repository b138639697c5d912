//! Configuration management.
//!
//! Configuration is read from `~/.config/warta/config.toml` at startup.
//! If the file doesn't exist, a default configuration with comments is created.
//! The API key may also come from the `NEWSAPI_KEY` environment variable,
//! which wins over the file.

pub mod colors;
pub mod keybindings;

pub use colors::ColorConfig;
pub use keybindings::KeybindingConfig;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::search::DEFAULT_TERM;

pub const API_KEY_ENV: &str = "NEWSAPI_KEY";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub search: SearchConfig,
    pub colors: ColorConfig,
    pub keybindings: KeybindingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub key: Option<String>,
    pub endpoint: String,
    pub default_term: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            key: None,
            endpoint: "https://newsapi.org/v2/everything".to_string(),
            default_term: DEFAULT_TERM.to_string(),
            timeout_secs: 10,
        }
    }
}

impl ApiConfig {
    /// `NEWSAPI_KEY` if set and non-empty, else the configured key.
    pub fn resolved_key(&self) -> Option<String> {
        pick_key(std::env::var(API_KEY_ENV).ok(), self.key.clone())
    }
}

fn pick_key(env: Option<String>, file: Option<String>) -> Option<String> {
    env.into_iter()
        .chain(file)
        .map(|k| k.trim().to_string())
        .find(|k| !k.is_empty())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 500 }
    }
}

impl SearchConfig {
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// Missing fields in the config file use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    /// `~/.config/warta/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("warta").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(path, Self::default_config_content()).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn default_config_content() -> &'static str {
        r##"# Warta configuration

[api]
# NewsAPI key. The NEWSAPI_KEY environment variable takes precedence.
# key = "your-key-here"
endpoint = "https://newsapi.org/v2/everything"

# Term the home page shows when nothing is being searched
default_term = "viral"

# Request timeout in seconds
timeout_secs = 10

[search]
# Quiet time after the last keystroke before a search runs (milliseconds)
debounce_ms = 500

[colors]
# Named colors (Red, DarkGray, LightBlue, ...) or "#RRGGBB"
active_border = "Red"
inactive_border = "DarkGray"
selection_bg = "Red"
selection_fg = "White"
hero_title = "White"
headline = "Gray"
description = "DarkGray"
metadata = "Yellow"
source = "Blue"
input_active = "Yellow"
status_fg = "White"
status_bg = "DarkGray"

[keybindings]
# Single characters, special keys (Enter, Tab, PageDown, ...) and
# modifiers ("Ctrl+c", "Shift+Tab")
quit = ["q", "Ctrl+c"]
move_up = ["k", "Up"]
move_down = ["j", "Down"]
next_page = ["n", "PageDown"]
prev_page = ["p", "PageUp"]
next_view = ["Tab"]
prev_view = ["BackTab", "Shift+Tab"]
open_article = ["Enter", "o"]
focus_search = ["/"]
quick_filter = ["f"]
toggle_sort = ["s"]
refresh = ["R"]
"##
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let config: Config = toml::from_str(Config::default_config_content())
            .expect("Default config should be valid TOML");

        assert_eq!(config.api.default_term, "viral");
        assert_eq!(config.api.key, None);
        assert_eq!(config.search.debounce_window(), Duration::from_millis(500));
        assert_eq!(config.colors.active_border, ratatui::style::Color::Red);
        assert_eq!(config.keybindings.quit, vec!["q", "Ctrl+c"]);
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[api]
key = "abc123"
default_term = "teknologi"

[colors]
active_border = "#FF0000"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.api.key.as_deref(), Some("abc123"));
        assert_eq!(config.api.default_term, "teknologi");
        assert_eq!(config.api.endpoint, "https://newsapi.org/v2/everything");
        assert_eq!(
            config.colors.active_border,
            ratatui::style::Color::Rgb(255, 0, 0)
        );
        assert_eq!(config.search.debounce_ms, 500);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.keybindings.focus_search, vec!["/"]);
    }

    #[test]
    fn test_key_precedence() {
        assert_eq!(
            pick_key(Some("env".into()), Some("file".into())),
            Some("env".to_string())
        );
        assert_eq!(
            pick_key(Some("  ".into()), Some("file".into())),
            Some("file".to_string())
        );
        assert_eq!(pick_key(None, Some("".into())), None);
        assert_eq!(pick_key(None, None), None);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warta").join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.api.default_term, "viral");

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.search.debounce_ms, 500);
    }

    #[test]
    fn test_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[api\nkey = ").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}

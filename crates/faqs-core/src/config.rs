//! Configuration types for faqs.
//!
//! [`Config::load`] reads `~/.config/faqs/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).
//!
//! The `[search]` defaults (2 characters, 300 ms, 2000 ms) are the timing
//! contract users see; change them per machine, not here.

use serde::Deserialize;
use std::path::PathBuf;
use tokio::time::Duration;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[search]
min_query_len = 2
debounce_ms   = 300
highlight_ms  = 2000

[ui]
theme           = "auto"
show_categories = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/faqs/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Minimum trimmed query length, in characters, before a search runs.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    #[serde(default = "default_highlight_ms")]
    pub highlight_ms: u64,
}

fn default_min_query_len() -> usize { 2 }
fn default_debounce_ms() -> u64 { 300 }
fn default_highlight_ms() -> u64 { 2000 }

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn highlight(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            debounce_ms: default_debounce_ms(),
            highlight_ms: default_highlight_ms(),
        }
    }
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// `light`, `dark`, or `auto` (follow the terminal's background).
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Draw category headings above each group of cards.
    #[serde(default = "default_show_categories")]
    pub show_categories: bool,
}

fn default_theme() -> String { "auto".to_string() }
fn default_show_categories() -> bool { true }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_categories: default_show_categories(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/faqs/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::load_from(&path)
    }

    /// Layer the file at `path` (if present) over the built-in defaults.
    pub fn load_from(path: &std::path::Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("faqs")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

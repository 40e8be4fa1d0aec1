//! Colour theme for the faqs TUI.
//!
//! Themes are defined as TOML files embedded in the binary via
//! [`include_str!`], so the application works without any files on disk.
//! There are two: [`ThemeKind::Light`] and [`ThemeKind::Dark`]. `Ctrl+d`
//! switches between them at runtime.
//!
//! # Automatic selection
//!
//! With `theme = "auto"` the kind is taken from the terminal's `COLORFGBG`
//! variable (`"fg;bg"`, set by rxvt, Konsole, iTerm2 and others). Background
//! colours 0–6 and 8 are dark; anything else, or no variable at all, is light.

use config::{Config, File, FileFormat};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const LIGHT_THEME_SRC: &str = include_str!("themes/light.toml");
const DARK_THEME_SRC: &str = include_str!("themes/dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types mirroring the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawCards {
    question: RawStyle,
    answer: RawStyle,
    category: RawStyle,
    #[serde(rename = "match")]
    matched: RawStyle,
    highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    found: RawStyle,
    empty: RawStyle,
    hint: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    cards: RawCards,
    status: RawStatus,
}

// ---------------------------------------------------------------------------
// Theme kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeKind {
    Light,
    Dark,
}

impl ThemeKind {
    /// Resolve a `[ui] theme` setting. Unknown values behave like `auto`.
    pub fn from_setting(setting: &str) -> Self {
        match setting.to_ascii_lowercase().as_str() {
            "light" => ThemeKind::Light,
            "dark" => ThemeKind::Dark,
            _ => Self::detect(std::env::var("COLORFGBG").ok().as_deref()),
        }
    }

    /// Pick a kind from a `COLORFGBG` value.
    pub fn detect(colorfgbg: Option<&str>) -> Self {
        let bg = colorfgbg
            .and_then(|v| v.rsplit(';').next())
            .and_then(|bg| bg.trim().parse::<u8>().ok());
        match bg {
            Some(0..=6 | 8) => ThemeKind::Dark,
            _ => ThemeKind::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme.
///
/// All styles are pre-resolved ratatui [`Style`] values, so nothing is allocated at
/// render time.
#[derive(Debug, Clone)]
pub struct Theme {
    pub kind: ThemeKind,

    /// Border style for the currently focused pane.
    pub border_focused: Style,
    /// Border style for unfocused panes.
    pub border_unfocused: Style,

    pub question: Style,
    pub answer: Style,
    pub category: Style,
    /// Marker drawn in front of cards in the current result set.
    pub matched: Style,
    /// Transient style of the card a search just jumped to.
    pub highlight: Style,

    pub status_found: Style,
    pub status_empty: Style,
    pub hint: Style,
}

impl Theme {
    /// Load one of the embedded themes.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed, which the unit tests rule out.
    pub fn load(kind: ThemeKind) -> Self {
        let src = match kind {
            ThemeKind::Light => LIGHT_THEME_SRC,
            ThemeKind::Dark => DARK_THEME_SRC,
        };
        Self::from_toml_str(kind, src).expect("embedded theme must be valid TOML")
    }

    /// Parse a theme from a TOML string.
    ///
    /// Unknown keys are ignored so user themes stay forward-compatible.
    pub fn from_toml_str(kind: ThemeKind, src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            kind,
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            question: raw.cards.question.into_style(),
            answer: raw.cards.answer.into_style(),
            category: raw.cards.category.into_style(),
            matched: raw.cards.matched.into_style(),
            highlight: raw.cards.highlight.into_style(),
            status_found: raw.status.found.into_style(),
            status_empty: raw.status.empty.into_style(),
            hint: raw.status.hint.into_style(),
        })
    }

    /// The other embedded theme.
    pub fn toggled(&self) -> Self {
        Self::load(self.kind.toggled())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

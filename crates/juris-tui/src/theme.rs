//! Colour theme for the juris TUI.
//!
//! Themes are defined as TOML files embedded in the binary via
//! [`include_str!`], so the application works without any files on disk.
//! Call [`Theme::by_name`] with the configured theme name at startup.
//!
//! # Colour assignment for sections
//!
//! Analysis section emoji are hashed to a stable index into the palette so
//! "Resumo Geral" always gets the same colour, whatever order the sections
//! arrive in.

use config::{Config, File, FileFormat};
use juris_core::display::StatusKind;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

/// Names accepted by `:theme` and `ui.theme`.
pub const THEME_NAMES: &[&str] = &["default", "gruvbox"];

// ---------------------------------------------------------------------------
// Raw (serde) types, mirroring the TOML structure
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
    command_bar: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawForm {
    label: RawStyle,
    input: RawStyle,
    disabled: RawStyle,
    placeholder: RawStyle,
    error: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawAlerts {
    error: RawStyle,
    not_found: RawStyle,
    toast: RawStyle,
    loading: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawStatus {
    active: RawStyle,
    closed: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    title: RawStyle,
    label: RawStyle,
    heading: RawStyle,
    bold: RawStyle,
    link: RawStyle,
    dim: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawKeywords {
    chip: RawStyle,
    suggestion: RawStyle,
    suggestion_used: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSections {
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    borders: RawBorders,
    form: RawForm,
    alerts: RawAlerts,
    status: RawStatus,
    result: RawResult,
    keywords: RawKeywords,
    sections: RawSections,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme. All styles are pre-resolved ratatui [`Style`]
/// values.
#[derive(Debug, Clone)]
pub struct Theme {
    pub border_focused: Style,
    pub border_unfocused: Style,
    pub border_command_bar: Style,

    pub form_label: Style,
    pub form_input: Style,
    /// Inputs while a request is in flight.
    pub form_disabled: Style,
    pub form_placeholder: Style,
    pub field_error: Style,

    pub alert_error: Style,
    pub alert_not_found: Style,
    pub toast: Style,
    pub loading: Style,

    pub status_active: Style,
    pub status_closed: Style,

    pub result_title: Style,
    pub result_label: Style,
    pub heading: Style,
    pub bold: Style,
    pub link: Style,
    pub dim: Style,

    pub keyword_chip: Style,
    pub suggestion: Style,
    pub suggestion_used: Style,

    section_palette: Vec<Color>,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a theme name; `None` for names that match no embedded theme.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" | "padrao" | "padrão" => Some(Self::load_default()),
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Some(Self::load_gruvbox_dark()),
            _ => None,
        }
    }

    /// Parse a theme from a TOML string. Unknown keys are ignored.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            border_focused: raw.borders.focused.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            form_label: raw.form.label.into_style(),
            form_input: raw.form.input.into_style(),
            form_disabled: raw.form.disabled.into_style(),
            form_placeholder: raw.form.placeholder.into_style(),
            field_error: raw.form.error.into_style(),
            alert_error: raw.alerts.error.into_style(),
            alert_not_found: raw.alerts.not_found.into_style(),
            toast: raw.alerts.toast.into_style(),
            loading: raw.alerts.loading.into_style(),
            status_active: raw.status.active.into_style(),
            status_closed: raw.status.closed.into_style(),
            result_title: raw.result.title.into_style(),
            result_label: raw.result.label.into_style(),
            heading: raw.result.heading.into_style(),
            bold: raw.result.bold.into_style(),
            link: raw.result.link.into_style(),
            dim: raw.result.dim.into_style(),
            keyword_chip: raw.keywords.chip.into_style(),
            suggestion: raw.keywords.suggestion.into_style(),
            suggestion_used: raw.keywords.suggestion_used.into_style(),
            section_palette: raw
                .sections
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
        })
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }

    pub fn status_style(&self, kind: StatusKind) -> Style {
        match kind {
            StatusKind::Active => self.status_active,
            StatusKind::Closed => self.status_closed,
        }
    }

    /// Stable heading colour for an analysis section emoji.
    pub fn section_style(&self, emoji: &str) -> Style {
        if self.section_palette.is_empty() {
            return self.heading;
        }
        let idx = stable_hash(emoji) % self.section_palette.len();
        self.heading.fg(self.section_palette[idx])
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// djb2-style hash, stable across Rust versions and process restarts.
fn stable_hash(s: &str) -> usize {
    s.bytes().fold(5381usize, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as usize)
    })
}

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

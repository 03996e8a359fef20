//! Theme and style system for Plateful
//!
//! Provides consistent styling across the application with support for
//! light and dark themes. The active theme is held in a process-global
//! store so every widget reads the same palette; toggling the theme at
//! runtime swaps the store and the next draw picks it up.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::RwLock;

/// Global theme instance (supports runtime updates)
static THEME: RwLock<Theme> = RwLock::new(Theme {
    theme_type: ThemeType::Dark,
    primary: Color::Green,
    secondary: Color::Magenta,
    accent: Color::Cyan,
    success: Color::Green,
    warning: Color::Yellow,
    error: Color::Red,
    text: Color::White,
    text_muted: Color::DarkGray,
    text_emphasis: Color::Yellow,
    border: Color::DarkGray,
    border_focused: Color::Green,
    highlight_bg: Color::DarkGray,
    background: Color::Reset,
});

/// Initialize the global theme (call once at startup, or to update at runtime)
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap();
    *theme = Theme::new(theme_type);
}

/// Get the current theme
pub fn theme() -> Theme {
    THEME.read().unwrap().clone()
}

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
}

impl ThemeType {
    /// The other theme, used by the runtime theme toggle.
    pub fn toggled(self) -> Self {
        match self {
            ThemeType::Dark => ThemeType::Light,
            ThemeType::Light => ThemeType::Dark,
        }
    }

    /// Lowercase name as used in config files and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            ThemeType::Dark => "dark",
            ThemeType::Light => "light",
        }
    }
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,

    // === Primary Colors ===
    /// Main accent color (borders, titles, key UI elements)
    pub primary: Color,
    /// Secondary accent (chips, category labels)
    pub secondary: Color,
    /// Additional accent color (links, pills)
    pub accent: Color,

    // === Semantic Colors ===
    /// Success states (submitted, bookmarked)
    pub success: Color,
    /// Warning states
    pub warning: Color,
    /// Error states (validation failures)
    pub error: Color,

    // === Text Colors ===
    /// Main text color
    pub text: Color,
    /// Muted/secondary text
    pub text_muted: Color,
    /// Emphasized text (ratings, key hints)
    pub text_emphasis: Color,

    // === UI Colors ===
    /// Default border color
    pub border: Color,
    /// Focused/active border color
    pub border_focused: Color,
    /// Selection highlight background
    pub highlight_bg: Color,
    /// Background color (use Reset for terminal default)
    pub background: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,

            primary: Color::Green,
            secondary: Color::Magenta,
            accent: Color::Cyan,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,

            text: Color::White,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,

            border: Color::DarkGray,
            border_focused: Color::Green,
            highlight_bg: Color::DarkGray,
            background: Color::Reset,
        }
    }

    /// Light theme - for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,

            // Darker variants for light backgrounds
            primary: Color::Rgb(0, 110, 80),
            secondary: Color::Magenta,
            accent: Color::Blue,

            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,

            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,

            border: Color::DarkGray,
            border_focused: Color::Rgb(0, 110, 80),
            highlight_bg: Color::Gray,
            background: Color::Reset,
        }
    }

    // === Style Helpers ===

    /// Style for primary/title text
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for regular text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for muted/secondary text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for emphasized text (ratings, key hints)
    pub fn emphasis_style(&self) -> Style {
        Style::default().fg(self.text_emphasis)
    }

    /// Style for success states
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for error states
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for focused borders
    pub fn border_focused_style(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Style for unfocused borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for the highlighted item in a list or row (focus cursor)
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for disabled controls
    pub fn disabled_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Background style
    pub fn background_style(&self) -> Style {
        Style::default().bg(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_type_from_str() {
        assert_eq!("dark".parse::<ThemeType>().unwrap(), ThemeType::Dark);
        assert_eq!("light".parse::<ThemeType>().unwrap(), ThemeType::Light);
        assert_eq!("LIGHT".parse::<ThemeType>().unwrap(), ThemeType::Light);
        // Unknown values fall back to dark
        assert_eq!("mauve".parse::<ThemeType>().unwrap(), ThemeType::Dark);
    }

    #[test]
    fn test_theme_toggle_flips_between_two_values() {
        assert_eq!(ThemeType::Dark.toggled(), ThemeType::Light);
        assert_eq!(ThemeType::Light.toggled(), ThemeType::Dark);
        assert_eq!(ThemeType::Dark.toggled().toggled(), ThemeType::Dark);
    }

    #[test]
    fn test_palettes_differ_on_text_color() {
        assert_ne!(Theme::dark().text, Theme::light().text);
    }
}

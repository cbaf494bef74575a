//! Theme configuration for the TUI
//!
//! Centralizes all color and style definitions for easy customization.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights, hearts, and the bite moment
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::romantic()
    }
}

impl Theme {
    /// Romantic theme - the card's default, magenta hearts on soft white.
    pub fn romantic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::LightMagenta,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Classic terminal theme - yellow accent.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Monochrome theme for low-color terminals.
    pub fn mono() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::White,
            error: Color::Gray,
            success: Color::Gray,
            background: Color::Reset,
        }
    }

    /// Look a theme up by its config name, falling back to the default.
    pub fn by_name(name: &str) -> Self {
        match name {
            "classic" => Self::classic(),
            "mono" => Self::mono(),
            _ => Self::romantic(),
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented/highlighted text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (titles, the bite impact).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}

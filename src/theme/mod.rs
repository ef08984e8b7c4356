//! Theme configuration for TUI and CLI
//!
//! Centralizes all color and style definitions.
//! Provides ratatui styles (for the comparison screen) and ANSI escape
//! codes (for printed output).

use ratatui::style::Color;

pub mod cli;
pub mod tui;

pub use cli::{color_to_ansi, ANSI_RESET};

/// Theme configuration for the TUI and CLI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for labels, headings and the active tab
    pub accent: Color,
    /// Failed backends and transport errors
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Loading indicator
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Light gray text with a cyan accent, standard ANSI colors only.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            error: Color::Red,
            success: Color::LightGreen,
            warning: Color::Yellow,
        }
    }
}

/// Global theme instance.
pub fn current_theme() -> Theme {
    Theme::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_standard() {
        let theme = Theme::default();
        assert_eq!(theme.text_primary, Color::Gray);
        assert_eq!(theme.accent, Color::LightCyan);
        assert_eq!(theme.error, Color::Red);
    }
}

//! Color scheme for the TUI.

use ratatui::style::Color;

/// Colors used across the UI components
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// Main background
    pub bg: Color,
    /// Normal text
    pub text: Color,
    /// Secondary text (descriptions, hints)
    pub muted: Color,
    /// Highlight (selection, shortcut keys)
    pub highlight: Color,
    /// Borders
    pub border: Color,
    /// Error text
    pub error: Color,
    /// Completed tasks
    pub done: Color,
}

/// Default dark scheme
pub const DARK: ThemeColors = ThemeColors {
    bg: Color::Rgb(22, 24, 29),
    text: Color::Rgb(220, 223, 228),
    muted: Color::Rgb(128, 134, 145),
    highlight: Color::Rgb(97, 175, 239),
    border: Color::Rgb(60, 64, 72),
    error: Color::Rgb(224, 108, 117),
    done: Color::Rgb(152, 195, 121),
};

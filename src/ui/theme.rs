//! Color themes for the UI.

use crate::app::Theme;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Border color.
    pub border: Color,
    /// Main display line.
    pub display: Color,
    /// Pending-operation line above the display.
    pub history: Color,
    /// Digit and decimal point buttons.
    pub digit: Color,
    /// Operator buttons.
    pub operator: Color,
    /// Clear, delete, sign and percent buttons.
    pub action: Color,
    /// Equals button.
    pub equals: Color,
    /// Highlighted button foreground.
    pub pressed_fg: Color,
    /// Highlighted button background.
    pub pressed_bg: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Error sentinel color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                border: Color::Rgb(102, 92, 84),
                display: Color::Rgb(251, 241, 199),
                history: Color::Rgb(168, 153, 132),
                digit: Color::Rgb(235, 219, 178),
                operator: Color::Rgb(250, 189, 47),
                action: Color::Rgb(131, 165, 152),
                equals: Color::Rgb(184, 187, 38),
                pressed_fg: Color::Rgb(40, 40, 40),
                pressed_bg: Color::Rgb(254, 128, 25),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                border: Color::Rgb(213, 196, 161),
                display: Color::Rgb(40, 40, 40),
                history: Color::Rgb(124, 111, 100),
                digit: Color::Rgb(60, 56, 54),
                operator: Color::Rgb(181, 118, 20),
                action: Color::Rgb(7, 102, 120),
                equals: Color::Rgb(121, 116, 14),
                pressed_fg: Color::Rgb(251, 245, 234),
                pressed_bg: Color::Rgb(175, 58, 3),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }
}

//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Key help shown at the bottom of the screen.
const KEYMAP_HELP: &str =
    "0-9 .,:num | +-*/%:op | Enter/=:eq | Bksp:del | Esc/c:clear | n:± | y:copy | T:theme | ?:settings | q:quit";

/// Draw the keymap help bar.
pub fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph =
        Paragraph::new(KEYMAP_HELP).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}

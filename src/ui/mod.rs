//! User interface rendering.

mod display;
mod keymap_bar;
mod keypad;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub use display::draw_display;
pub use keymap_bar::draw_keymap;
pub use keypad::{draw_keypad, ButtonKind, Keypad, KeypadButton};
pub use status_bar::draw_status;
pub use theme::ThemeColors;

/// Draw the UI.
///
/// Records where the keypad buttons landed so mouse clicks can be
/// hit-tested against the frame the user is looking at.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_display(f, chunks[0], &app.display, &colors);
    app.keypad_area = draw_keypad(f, chunks[1], &app.keypad, app.highlighted, &colors);
    draw_status(f, chunks[2], &app.status, app.calculator.locale().tag, &colors);
    draw_keymap(f, chunks[3], &colors);
}

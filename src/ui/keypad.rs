//! Clickable keypad.
//!
//! The same geometry is used to draw the buttons and to hit-test mouse
//! clicks, so a click always lands on the button drawn under it.
//!
//! ```text
//! [ C ] [ ⌫ ] [ % ] [ ÷ ]
//! [ 7 ] [ 8 ] [ 9 ] [ × ]
//! [ 4 ] [ 5 ] [ 6 ] [ − ]
//! [ 1 ] [ 2 ] [ 3 ] [ + ]
//! [ ± ] [ 0 ] [ . ] [ = ]
//! ```

use super::ThemeColors;
use crate::calc::{Command, Operator};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Visual group of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Digits and the decimal point.
    Digit,
    /// Binary operators.
    Operator,
    /// Clear, delete, sign and percent.
    Action,
    /// Equals.
    Equals,
}

/// A single keypad button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Text drawn on the button.
    pub label: &'static str,
    /// Command dispatched when clicked.
    pub command: Command,
    /// Visual group.
    pub kind: ButtonKind,
}

impl KeypadButton {
    fn digit(d: u8) -> Self {
        const LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        Self {
            label: LABELS[usize::from(d)],
            command: Command::Digit(d),
            kind: ButtonKind::Digit,
        }
    }

    fn operator(op: Operator) -> Self {
        Self {
            label: op.symbol(),
            command: Command::Operator(op),
            kind: ButtonKind::Operator,
        }
    }

    fn action(label: &'static str, command: Command) -> Self {
        Self {
            label,
            command,
            kind: ButtonKind::Action,
        }
    }
}

/// Button grid in row-major order.
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Create the standard 5x4 keypad.
    pub fn new() -> Self {
        let buttons = vec![
            KeypadButton::action("C", Command::Clear),
            KeypadButton::action("⌫", Command::Delete),
            KeypadButton::action("%", Command::Percent),
            KeypadButton::operator(Operator::Divide),
            KeypadButton::digit(7),
            KeypadButton::digit(8),
            KeypadButton::digit(9),
            KeypadButton::operator(Operator::Multiply),
            KeypadButton::digit(4),
            KeypadButton::digit(5),
            KeypadButton::digit(6),
            KeypadButton::operator(Operator::Subtract),
            KeypadButton::digit(1),
            KeypadButton::digit(2),
            KeypadButton::digit(3),
            KeypadButton::operator(Operator::Add),
            KeypadButton::action("±", Command::InvertSign),
            KeypadButton::digit(0),
            KeypadButton {
                label: ".",
                command: Command::Decimal,
                kind: ButtonKind::Digit,
            },
            KeypadButton {
                label: "=",
                command: Command::Equals,
                kind: ButtonKind::Equals,
            },
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Grid dimensions as (rows, cols).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// All buttons in row-major order.
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Index of the first button dispatching `command`.
    pub fn position_of(&self, command: Command) -> Option<usize> {
        self.buttons.iter().position(|b| b.command == command)
    }

    /// Screen rectangle of every button, in row-major order.
    pub fn button_rects(&self, area: Rect) -> Vec<Rect> {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Ratio(1, self.rows as u32); self.rows])
            .split(area);

        rows.iter()
            .flat_map(|row| {
                Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(vec![Constraint::Ratio(1, self.cols as u32); self.cols])
                    .split(*row)
                    .to_vec()
            })
            .collect()
    }

    /// Command of the button under a screen position, if any.
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<Command> {
        self.button_rects(area)
            .iter()
            .position(|r| x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height)
            .and_then(|i| self.buttons.get(i))
            .map(|b| b.command)
    }
}

/// Draw the keypad and return the area its buttons occupy.
pub fn draw_keypad(
    f: &mut Frame<'_>,
    area: Rect,
    keypad: &Keypad,
    highlighted: Option<Command>,
    colors: &ThemeColors,
) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let pressed = highlighted.and_then(|c| keypad.position_of(c));

    for (idx, (button, rect)) in keypad
        .buttons()
        .iter()
        .zip(keypad.button_rects(inner))
        .enumerate()
    {
        let fg = match button.kind {
            ButtonKind::Digit => colors.digit,
            ButtonKind::Operator => colors.operator,
            ButtonKind::Action => colors.action,
            ButtonKind::Equals => colors.equals,
        };
        let style = if pressed == Some(idx) {
            Style::default()
                .fg(colors.pressed_fg)
                .bg(colors.pressed_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fg).bg(colors.bg).add_modifier(Modifier::BOLD)
        };

        // Center the label vertically inside the button border.
        let pad = rect.height.saturating_sub(3) / 2;
        let mut lines: Vec<Line<'_>> = (0..pad).map(|_| Line::from("")).collect();
        lines.push(Line::from(button.label));

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(colors.border)),
            );
        f.render_widget(paragraph, rect);
    }

    inner
}

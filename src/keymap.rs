//! Keyboard bindings.
//!
//! Maps terminal key events to calculator commands or application actions.
//! Keys with no binding map to `None` and are dropped by the caller.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::calc::{Command, Operator};
use crate::error::{AbacoError, Result};

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Feed a command to the calculator.
    Calc(Command),
    /// Copy the current value to the clipboard.
    CopyResult,
    /// Switch to the next theme.
    CycleTheme,
    /// Show the active settings in the status bar.
    ShowSettings,
    /// Leave the application.
    Quit,
}

/// Map a key event to an action.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return None;
    }

    // SHIFT is ignored: terminals disagree on whether `+`, `*` or `%` carry it.
    match key.code {
        KeyCode::Enter => Some(Action::Calc(Command::Equals)),
        KeyCode::Backspace => Some(Action::Calc(Command::Delete)),
        KeyCode::Esc => Some(Action::Calc(Command::Clear)),
        KeyCode::F(9) => Some(Action::Calc(Command::InvertSign)),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('y') => Some(Action::CopyResult),
        KeyCode::Char('T') => Some(Action::CycleTheme),
        KeyCode::Char('?') => Some(Action::ShowSettings),
        KeyCode::Char(c) => command_for_char(c).map(Action::Calc),
        _ => None,
    }
}

/// Map a typed character to a calculator command.
pub fn command_for_char(c: char) -> Option<Command> {
    if let Some(d) = c.to_digit(10) {
        return Some(Command::Digit(d as u8));
    }
    if let Some(op) = Operator::from_key(c) {
        return Some(Command::Operator(op));
    }
    match c {
        '.' | ',' => Some(Command::Decimal),
        '%' => Some(Command::Percent),
        '=' => Some(Command::Equals),
        'n' | '±' => Some(Command::InvertSign),
        'c' | 'C' => Some(Command::Clear),
        '<' => Some(Command::Delete),
        _ => None,
    }
}

/// Parse a replay sequence such as `"12.5 * 4 ="` into commands.
///
/// Whitespace is skipped. Any other character without a binding is an error.
pub fn parse_sequence(keys: &str) -> Result<Vec<Command>> {
    keys.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .map(|(i, c)| command_for_char(c).ok_or_else(|| AbacoError::unbound_key(c, i)))
        .collect()
}

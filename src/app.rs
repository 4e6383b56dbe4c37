//! Application state and logic.

use clap::ValueEnum;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::calc::{Calculator, Command, DisplayText, EngineConfig, Locale};
use crate::clipboard;
use crate::keymap::{self, Action};
use crate::ui::Keypad;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    #[value(name = "dark")]
    GruvboxDark,
    /// Gruvbox light theme.
    #[value(name = "light")]
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Calculator engine.
    pub calculator: Calculator,
    /// Display text for the current state.
    pub display: DisplayText,
    /// Button grid.
    pub keypad: Keypad,
    /// Where the keypad buttons were last drawn.
    pub keypad_area: Rect,
    /// Button to highlight, from the last dispatched command.
    pub highlighted: Option<Command>,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Set when the user asked to quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(config: EngineConfig, locale: Locale, theme: Theme) -> Self {
        let calculator = Calculator::new(config, locale);
        let display = calculator.display();
        Self {
            calculator,
            display,
            keypad: Keypad::new(),
            keypad_area: Rect::default(),
            highlighted: None,
            status: "Ready".to_string(),
            theme,
            should_quit: false,
        }
    }

    /// Handle a key press. Unbound keys leave the state untouched.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(action) = keymap::map_key(key) {
            self.perform(action);
        }
    }

    /// Handle a mouse event. Only left clicks on a button do anything.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(command) = self.keypad.hit_test(self.keypad_area, mouse.column, mouse.row) {
            self.dispatch(command);
        }
    }

    /// Perform an action.
    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Calc(command) => self.dispatch(command),
            Action::CopyResult => self.copy_result(),
            Action::CycleTheme => self.cycle_theme(),
            Action::ShowSettings => self.show_settings(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Feed a command to the calculator and refresh the display.
    pub fn dispatch(&mut self, command: Command) {
        self.display = self.calculator.dispatch(command);
        self.highlighted = Some(command);
        self.status = if self.display.is_error {
            "Error: press Esc or C to clear".to_string()
        } else {
            "Ready".to_string()
        };
    }

    /// Copy the current value to the clipboard.
    pub fn copy_result(&mut self) {
        let value = self.calculator.state().current();
        match clipboard::copy_value(value) {
            Ok(()) => self.status = format!("Copied {}", self.display.output),
            Err(e) => {
                tracing::warn!("Copy failed: {}", e);
                self.status = format!("Copy failed: {}", e);
            },
        }
    }

    /// Show locale, percent mode and operator repeat in the status bar.
    pub fn show_settings(&mut self) {
        let config = self.calculator.config();
        self.status = format!(
            "Locale: {} | %: {} | Operator repeat: {} | Theme: {}",
            self.calculator.locale().tag,
            config.percent_mode.name(),
            config.operator_repeat.name(),
            self.theme.name()
        );
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }
}

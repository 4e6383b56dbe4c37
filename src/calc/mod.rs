//! Calculator engine.
//!
//! - [`Operator`] and [`compute`]: rounded floating-point arithmetic
//! - [`CalculatorState`] and [`Command`]: the input state machine
//! - [`Locale`]: display grouping
//! - [`Calculator`]: state, configuration and locale bundled for a front end

mod config;
mod evaluator;
mod format;
mod operator;
mod state;

pub use config::{EngineConfig, OperatorRepeat, PercentMode};
pub use evaluator::compute;
pub use format::Locale;
pub use operator::Operator;
pub use state::{CalculatorState, Command};

/// Sentinel stored in place of a value when an operation is undefined.
pub const ERROR: &str = "Error";

/// Text ready to be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    /// Main output line.
    pub output: String,
    /// Pending operation, e.g. `1.250 ×`, or empty.
    pub history: String,
    /// Whether the output is the error sentinel.
    pub is_error: bool,
}

/// A calculator with its configuration and locale.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    state: CalculatorState,
    config: EngineConfig,
    locale: Locale,
}

impl Calculator {
    /// Create a calculator in its initial state.
    pub fn new(config: EngineConfig, locale: Locale) -> Self {
        Self {
            state: CalculatorState::new(),
            config,
            locale,
        }
    }

    /// Current state.
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Active locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Apply a command and return the refreshed display text.
    pub fn dispatch(&mut self, command: Command) -> DisplayText {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(command, &self.config);
        tracing::debug!(
            ?command,
            current = self.state.current(),
            previous = ?self.state.previous(),
            operator = ?self.state.operator(),
            "applied command"
        );
        self.display()
    }

    /// Render the current state for display.
    pub fn display(&self) -> DisplayText {
        let history = match (self.state.previous(), self.state.operator()) {
            (Some(prev), Some(op)) => format!("{} {}", self.locale.format(prev), op),
            _ => String::new(),
        };
        DisplayText {
            output: self.locale.format(self.state.current()),
            history,
            is_error: self.state.is_error(),
        }
    }
}

//! Engine behavior switches.

use clap::ValueEnum;

/// What the percent key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PercentMode {
    /// Divide the current value by 100 in place.
    #[default]
    Unary,
    /// Select remainder as the pending operator.
    Modulo,
}

impl PercentMode {
    /// Name as accepted by `--percent-mode`.
    pub fn name(self) -> &'static str {
        match self {
            PercentMode::Unary => "unary",
            PercentMode::Modulo => "modulo",
        }
    }
}

/// What selecting an operator does right after another operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OperatorRepeat {
    /// Replace the pending operator without computing.
    #[default]
    Substitute,
    /// Resolve the pending operation against the current value first.
    Recompute,
}

impl OperatorRepeat {
    /// Name as accepted by `--operator-repeat`.
    pub fn name(self) -> &'static str {
        match self {
            OperatorRepeat::Substitute => "substitute",
            OperatorRepeat::Recompute => "recompute",
        }
    }
}

/// Behavior configuration for the input state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Percent key semantics.
    pub percent_mode: PercentMode,
    /// Operator repeat semantics.
    pub operator_repeat: OperatorRepeat,
}

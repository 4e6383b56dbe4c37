//! Input state machine.
//!
//! [`CalculatorState`] is a plain value. Every transition consumes the state
//! and returns the next one, so sequences can be tested without any UI.

use super::config::{EngineConfig, OperatorRepeat, PercentMode};
use super::evaluator::{compute, parse_operand};
use super::operator::Operator;
use super::ERROR;

/// A logical user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Enter a decimal digit (0-9).
    Digit(u8),
    /// Enter the decimal point.
    Decimal,
    /// Select a binary operator.
    Operator(Operator),
    /// Percent key; meaning depends on [`PercentMode`].
    Percent,
    /// Resolve the pending operation.
    Equals,
    /// Reset everything.
    Clear,
    /// Backspace.
    Delete,
    /// Toggle the sign of the current value.
    InvertSign,
}

/// Calculator state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    current: String,
    previous: Option<String>,
    operator: Option<Operator>,
    just_calculated: bool,
    awaiting_operand: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Create the initial state.
    pub fn new() -> Self {
        Self {
            current: "0".to_string(),
            previous: None,
            operator: None,
            just_calculated: false,
            awaiting_operand: false,
        }
    }

    fn error() -> Self {
        Self {
            current: ERROR.to_string(),
            just_calculated: true,
            ..Self::new()
        }
    }

    /// Value being entered, or the last result.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Left operand of the pending operation.
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Pending operator.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Whether the current value is a finalized result.
    pub fn just_calculated(&self) -> bool {
        self.just_calculated
    }

    /// Whether the current value is the error sentinel.
    pub fn is_error(&self) -> bool {
        self.current == ERROR
    }

    /// Apply a command and return the next state.
    pub fn apply(self, command: Command, config: &EngineConfig) -> Self {
        match command {
            Command::Digit(d) => self.input_digit(d),
            Command::Decimal => self.input_decimal(),
            Command::Operator(op) => self.select_operator(op, config.operator_repeat),
            Command::Percent => match config.percent_mode {
                PercentMode::Unary => self.percent(),
                PercentMode::Modulo => {
                    self.select_operator(Operator::Modulo, config.operator_repeat)
                },
            },
            Command::Equals => self.equals(),
            Command::Clear => Self::new(),
            Command::Delete => self.delete(),
            Command::InvertSign => self.invert_sign(),
        }
    }

    fn input_digit(mut self, digit: u8) -> Self {
        let Some(c) = char::from_digit(u32::from(digit), 10) else {
            return self;
        };

        let candidate = if self.just_calculated || self.current == "0" {
            c.to_string()
        } else {
            strip_leading_zeros(&format!("{}{}", self.current, c))
        };
        // Entry stops growing once it would leave the finite f64 range.
        if parse_operand(&candidate).is_none() {
            return self;
        }

        self.current = candidate;
        self.just_calculated = false;
        self.awaiting_operand = false;
        self
    }

    fn input_decimal(mut self) -> Self {
        if self.just_calculated {
            self.current = "0.".to_string();
            self.just_calculated = false;
        } else if !self.current.contains('.') {
            self.current.push('.');
        }
        self.awaiting_operand = false;
        self
    }

    fn select_operator(mut self, op: Operator, repeat: OperatorRepeat) -> Self {
        if self.is_error() {
            return self;
        }

        if let (Some(pending), Some(prev)) = (self.operator, self.previous.as_deref()) {
            let substitute = self.awaiting_operand && repeat == OperatorRepeat::Substitute;
            if !substitute && !self.just_calculated {
                let result = compute(prev, pending, &self.current);
                if result == ERROR {
                    return Self::error();
                }
                self.previous = Some(result);
                self.current = "0".to_string();
            }
        } else if self.previous.is_none() {
            self.previous = Some(std::mem::replace(&mut self.current, "0".to_string()));
        }

        self.operator = Some(op);
        self.just_calculated = false;
        self.awaiting_operand = true;
        self
    }

    fn equals(self) -> Self {
        let (Some(op), Some(prev)) = (self.operator, self.previous.as_deref()) else {
            return self;
        };
        Self {
            current: compute(prev, op, &self.current),
            just_calculated: true,
            ..Self::new()
        }
    }

    fn delete(mut self) -> Self {
        if self.just_calculated {
            self.current = "0".to_string();
            self.just_calculated = false;
            return self;
        }

        let len = self.current.chars().count();
        if len <= 1 || (len == 2 && self.current.starts_with('-')) {
            self.current = "0".to_string();
        } else {
            self.current.pop();
        }
        self
    }

    fn invert_sign(mut self) -> Self {
        if self.current == "0" || self.is_error() {
            return self;
        }
        self.current = match self.current.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.current),
        };
        self.awaiting_operand = false;
        self
    }

    fn percent(mut self) -> Self {
        if parse_operand(&self.current).is_none() {
            return self;
        }
        self.current = compute(&self.current, Operator::Divide, "100");
        self
    }
}

/// Strip redundant zeros from the integer part, keeping the sign and at
/// least one integer digit. `"005"` becomes `"5"`, `"00.5"` becomes `"0.5"`.
fn strip_leading_zeros(value: &str) -> String {
    let (sign, body) = match value.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", value),
    };
    let int_len = body.find('.').unwrap_or(body.len());
    let zeros = body[..int_len].bytes().take_while(|&b| b == b'0').count();
    let strip = zeros.min(int_len.saturating_sub(1));
    format!("{}{}", sign, &body[strip..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(commands: &[Command]) -> CalculatorState {
        run_with(&EngineConfig::default(), commands)
    }

    fn run_with(config: &EngineConfig, commands: &[Command]) -> CalculatorState {
        commands
            .iter()
            .fold(CalculatorState::new(), |s, &c| s.apply(c, config))
    }

    fn digits(s: &str) -> Vec<Command> {
        s.chars()
            .map(|c| match c {
                '.' => Command::Decimal,
                d => Command::Digit(d.to_digit(10).unwrap() as u8),
            })
            .collect()
    }

    use Command::{Clear, Decimal, Delete, Digit, Equals, InvertSign, Percent};
    const ADD: Command = Command::Operator(Operator::Add);
    const SUB: Command = Command::Operator(Operator::Subtract);
    const MUL: Command = Command::Operator(Operator::Multiply);
    const DIV: Command = Command::Operator(Operator::Divide);

    #[test]
    fn test_initial_state() {
        let s = CalculatorState::new();
        assert_eq!(s.current(), "0");
        assert_eq!(s.previous(), None);
        assert_eq!(s.operator(), None);
        assert!(!s.just_calculated());
    }

    #[test]
    fn test_addition_sequence() {
        let s = run(&[Clear, Digit(5), ADD, Digit(3), Equals]);
        assert_eq!(s.current(), "8");
        assert!(s.just_calculated());
        assert_eq!(s.previous(), None);
        assert_eq!(s.operator(), None);
    }

    #[test]
    fn test_decimal_multiplication_sequence() {
        let s = run(&[Digit(1), Decimal, Digit(5), MUL, Digit(2), Equals]);
        assert_eq!(s.current(), "3");
    }

    #[test]
    fn test_divide_by_zero_then_fresh_digit() {
        let s = run(&[Digit(1), DIV, Digit(0), Equals]);
        assert!(s.is_error());
        assert!(s.just_calculated());

        let s = s.apply(Digit(7), &EngineConfig::default());
        assert_eq!(s.current(), "7");
        assert!(!s.just_calculated());
    }

    #[test]
    fn test_error_state_ignores_operators() {
        let config = EngineConfig::default();
        let s = run(&[Digit(1), DIV, Digit(0), Equals]);
        let s = s.apply(ADD, &config).apply(InvertSign, &config).apply(Percent, &config);
        assert!(s.is_error());
        assert_eq!(s.operator(), None);
        assert_eq!(s.apply(Clear, &config), CalculatorState::new());
    }

    #[test]
    fn test_delete() {
        let s = run(&digits("12"));
        let s = s.apply(Delete, &EngineConfig::default());
        assert_eq!(s.current(), "1");
        let s = s.apply(Delete, &EngineConfig::default());
        assert_eq!(s.current(), "0");
    }

    #[test]
    fn test_delete_negative_single_digit() {
        let s = run(&[Digit(7), InvertSign, Delete]);
        assert_eq!(s.current(), "0");
    }

    #[test]
    fn test_delete_after_result_resets() {
        let s = run(&[Digit(5), ADD, Digit(3), Equals, Delete]);
        assert_eq!(s.current(), "0");
        assert!(!s.just_calculated());

        let s = s.apply(Digit(4), &EngineConfig::default());
        assert_eq!(s.current(), "4");
    }

    #[test]
    fn test_leading_zeros_are_stripped() {
        assert_eq!(run(&digits("005")).current(), "5");
        assert_eq!(run(&digits("000")).current(), "0");
        assert_eq!(run(&digits("0.05")).current(), "0.05");
        assert_eq!(run(&digits("0.0")).current(), "0.0");
    }

    #[test]
    fn test_decimal_point_once() {
        let s = run(&digits("1.2.3"));
        assert_eq!(s.current(), "1.23");
    }

    #[test]
    fn test_decimal_after_result_starts_fresh() {
        let s = run(&[Digit(2), ADD, Digit(2), Equals, Decimal, Digit(5)]);
        assert_eq!(s.current(), "0.5");
        assert!(!s.just_calculated());
    }

    #[test]
    fn test_decimal_after_operator() {
        let s = run(&[Digit(9), SUB, Decimal]);
        assert_eq!(s.current(), "0.");
        assert_eq!(s.previous(), Some("9"));
    }

    #[test]
    fn test_operator_chain_resolves_pending() {
        let s = run(&[Digit(2), ADD, Digit(3), MUL]);
        assert_eq!(s.previous(), Some("5"));
        assert_eq!(s.current(), "0");
        assert_eq!(s.operator(), Some(Operator::Multiply));

        let s = s.apply(Digit(4), &EngineConfig::default()).apply(Equals, &EngineConfig::default());
        assert_eq!(s.current(), "20");
    }

    #[test]
    fn test_operator_substitution() {
        let s = run(&[Digit(5), ADD, MUL]);
        assert_eq!(s.previous(), Some("5"));
        assert_eq!(s.operator(), Some(Operator::Multiply));

        let s = s.apply(Digit(3), &EngineConfig::default()).apply(Equals, &EngineConfig::default());
        assert_eq!(s.current(), "15");
    }

    #[test]
    fn test_operator_recompute() {
        let config = EngineConfig {
            operator_repeat: OperatorRepeat::Recompute,
            ..EngineConfig::default()
        };
        let s = run_with(&config, &[Digit(5), MUL, ADD]);
        assert_eq!(s.previous(), Some("0"));
        assert_eq!(s.operator(), Some(Operator::Add));
    }

    #[test]
    fn test_operator_after_result_uses_result() {
        let s = run(&[Digit(5), ADD, Digit(3), Equals, SUB, Digit(2), Equals]);
        assert_eq!(s.current(), "6");
    }

    #[test]
    fn test_chained_division_by_zero_enters_error() {
        let s = run(&[Digit(1), DIV, Digit(0), ADD]);
        assert!(s.is_error());
        assert_eq!(s.previous(), None);
        assert_eq!(s.operator(), None);
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let s = run(&[Digit(4), Digit(2), Equals]);
        assert_eq!(s.current(), "42");
        assert!(!s.just_calculated());
    }

    #[test]
    fn test_equals_without_second_operand_uses_zero() {
        let s = run(&[Digit(5), ADD, Equals]);
        assert_eq!(s.current(), "5");
    }

    #[test]
    fn test_invert_sign() {
        let s = run(&[Digit(5), InvertSign]);
        assert_eq!(s.current(), "-5");
        let s = s.apply(InvertSign, &EngineConfig::default());
        assert_eq!(s.current(), "5");
        assert_eq!(run(&[InvertSign]).current(), "0");
    }

    #[test]
    fn test_negative_digit_entry() {
        let s = run(&[Digit(3), InvertSign, Digit(4)]);
        assert_eq!(s.current(), "-34");
    }

    #[test]
    fn test_percent_unary() {
        let s = run(&[Digit(5), Digit(0), Percent]);
        assert_eq!(s.current(), "0.5");
        assert_eq!(s.operator(), None);
    }

    #[test]
    fn test_percent_modulo() {
        let config = EngineConfig {
            percent_mode: PercentMode::Modulo,
            ..EngineConfig::default()
        };
        let s = run_with(&config, &[Digit(1), Digit(0), Percent, Digit(3), Equals]);
        assert_eq!(s.current(), "1");
    }

    #[test]
    fn test_clear_resets_everything() {
        let s = run(&[Digit(5), ADD, Digit(3), Clear]);
        assert_eq!(s, CalculatorState::new());
    }

    #[test]
    fn test_out_of_range_digit_is_ignored() {
        let s = run(&[Digit(4), Digit(12)]);
        assert_eq!(s.current(), "4");
    }

    #[test]
    fn test_entry_stops_at_finite_range() {
        let config = EngineConfig::default();
        let s = run(&vec![Digit(9); 400]);
        assert_eq!(s.current().len(), 308);
        assert!(parse_operand(s.current()).is_some());

        let s = s.apply(ADD, &config).apply(Digit(1), &config).apply(Equals, &config);
        assert!(!s.is_error());
        let result = parse_operand(s.current()).unwrap();
        assert!(result > 9.9e307, "{}", s.current());
    }

    #[test]
    fn test_long_negative_entry_stays_finite() {
        let config = EngineConfig::default();
        let s = run(&[Digit(1), InvertSign]);
        let s = (0..400).fold(s, |s, _| s.apply(Digit(5), &config));
        let value = parse_operand(s.current()).unwrap();
        assert!(value < -1e307);
    }

    #[test]
    fn test_strip_leading_zeros() {
        assert_eq!(strip_leading_zeros("007"), "7");
        assert_eq!(strip_leading_zeros("-05"), "-5");
        assert_eq!(strip_leading_zeros("00.50"), "0.50");
        assert_eq!(strip_leading_zeros("0"), "0");
        assert_eq!(strip_leading_zeros("100"), "100");
    }
}

//! Binary operators.

/// A binary operator that can be pending between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition.
    Add,
    /// Subtraction.
    Subtract,
    /// Multiplication.
    Multiply,
    /// Division.
    Divide,
    /// Floating-point remainder.
    Modulo,
}

impl Operator {
    /// Symbol shown on the keypad and in the history line.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Modulo => "mod",
        }
    }

    /// Map an ASCII keyboard character to an operator.
    ///
    /// `%` is not mapped here since its meaning depends on the percent mode.
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }

    /// Apply the operator to two finite values.
    ///
    /// Division and remainder by zero produce NaN so the caller sees a
    /// non-finite result, never an infinity.
    pub(crate) fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide if b == 0.0 => f64::NAN,
            Operator::Divide => a / b,
            Operator::Modulo => a % b,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_ascii_and_symbols() {
        assert_eq!(Operator::from_key('+'), Some(Operator::Add));
        assert_eq!(Operator::from_key('-'), Some(Operator::Subtract));
        assert_eq!(Operator::from_key('×'), Some(Operator::Multiply));
        assert_eq!(Operator::from_key('/'), Some(Operator::Divide));
        assert_eq!(Operator::from_key('%'), None);
        assert_eq!(Operator::from_key('x'), None);
    }

    #[test]
    fn test_divide_by_zero_is_nan() {
        assert!(Operator::Divide.apply(1.0, 0.0).is_nan());
        assert!(Operator::Divide.apply(-3.0, -0.0).is_nan());
        assert!(Operator::Modulo.apply(4.0, 0.0).is_nan());
    }

    #[test]
    fn test_display_uses_symbol() {
        assert_eq!(Operator::Multiply.to_string(), "×");
    }
}

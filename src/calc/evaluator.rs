//! Arithmetic on operand strings.

use super::operator::Operator;
use super::ERROR;

/// Decimal places kept after each computation.
const PRECISION: usize = 12;

/// Compute `a op b` and return the result as an operand string.
///
/// Unparseable operands count as a zero result (`"0"`). Division by zero and
/// non-finite results give the error sentinel.
pub fn compute(a: &str, op: Operator, b: &str) -> String {
    let (Some(a), Some(b)) = (parse_operand(a), parse_operand(b)) else {
        tracing::debug!("unparseable operand, falling back to zero");
        return "0".to_string();
    };

    let result = op.apply(a, b);
    if !result.is_finite() {
        return ERROR.to_string();
    }

    round_to_string(result).unwrap_or_else(|| ERROR.to_string())
}

/// Parse an operand, accepting transient forms like `"12."`.
pub(crate) fn parse_operand(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Round to [`PRECISION`] decimals and serialize to the shortest decimal
/// string that round-trips.
fn round_to_string(value: f64) -> Option<String> {
    let rounded: f64 = format!("{:.*}", PRECISION, value).parse().ok()?;
    if !rounded.is_finite() {
        return None;
    }
    if rounded == 0.0 {
        // Drops the sign of negative zero.
        return Some("0".to_string());
    }
    Some(rounded.to_string())
}

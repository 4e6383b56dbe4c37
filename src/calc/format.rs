//! Display formatting of operand strings.
//!
//! Operands are kept as raw strings with `.` as the decimal point. Formatting
//! only regroups the integer digits for the active [`Locale`] and swaps the
//! decimal separator. Fractional digits pass through untouched; rounding
//! happens in the evaluator, never here.

use super::ERROR;
use crate::error::{AbacoError, Result};

/// Number grouping conventions for the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// BCP 47 tag, e.g. `es-CO`.
    pub tag: &'static str,
    /// Separator placed between groups of three integer digits.
    pub group_separator: char,
    /// Separator placed between the integer and fractional parts.
    pub decimal_separator: char,
    /// Integer digits required beyond the first group before grouping starts.
    /// With 2, `1234` stays ungrouped while `12345` becomes `12.345`.
    pub min_grouping_digits: usize,
}

impl Locale {
    /// Colombian Spanish, the default profile.
    pub const ES_CO: Locale = Locale {
        tag: "es-CO",
        group_separator: '.',
        decimal_separator: ',',
        min_grouping_digits: 1,
    };

    /// Peninsular Spanish.
    pub const ES_ES: Locale = Locale {
        tag: "es-ES",
        group_separator: '.',
        decimal_separator: ',',
        min_grouping_digits: 2,
    };

    /// US English.
    pub const EN_US: Locale = Locale {
        tag: "en-US",
        group_separator: ',',
        decimal_separator: '.',
        min_grouping_digits: 1,
    };

    const ALL: [Locale; 3] = [Locale::ES_CO, Locale::ES_ES, Locale::EN_US];

    /// Look up a profile by tag, ignoring case and accepting `_` for `-`.
    pub fn from_tag(tag: &str) -> Result<Self> {
        let wanted = tag.trim().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|l| l.tag.eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|l| l.tag).collect();
                AbacoError::unknown_locale(tag, &known)
            })
    }

    /// Format a raw operand string for display.
    pub fn format(&self, value: &str) -> String {
        if value == ERROR {
            return value.to_string();
        }

        let (negative, unsigned) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };
        if unsigned.is_empty() {
            return "0".to_string();
        }

        let (int_part, frac_part) = match unsigned.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (unsigned, None),
        };
        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
            return "0".to_string();
        }

        let mut out = String::with_capacity(value.len() + value.len() / 3 + 1);
        if negative {
            out.push('-');
        }
        out.push_str(&self.group(int_part));
        if let Some(frac) = frac_part {
            out.push(self.decimal_separator);
            out.push_str(frac);
        }
        out
    }

    fn group(&self, digits: &str) -> String {
        let digits = digits.trim_start_matches('0');
        if digits.is_empty() {
            return "0".to_string();
        }
        if digits.len() < 3 + self.min_grouping_digits {
            return digits.to_string();
        }

        let mut result = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                result.push(self.group_separator);
            }
            result.push(c);
        }
        result
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::ES_CO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_integer_part() {
        let l = Locale::ES_CO;
        assert_eq!(l.format("0"), "0");
        assert_eq!(l.format("999"), "999");
        assert_eq!(l.format("1234"), "1.234");
        assert_eq!(l.format("1234567"), "1.234.567");
        assert_eq!(l.format("-1234567"), "-1.234.567");
    }

    #[test]
    fn test_fraction_is_verbatim() {
        let l = Locale::ES_CO;
        assert_eq!(l.format("1234.5"), "1.234,5");
        assert_eq!(l.format("0.123456789012"), "0,123456789012");
        assert_eq!(l.format("2.50000"), "2,50000");
        assert_eq!(Locale::EN_US.format("98765.4321"), "98,765.4321");
    }

    #[test]
    fn test_transient_entry_forms() {
        let l = Locale::ES_CO;
        assert_eq!(l.format(""), "0");
        assert_eq!(l.format("-"), "0");
        assert_eq!(l.format("."), "0,");
        assert_eq!(l.format("12."), "12,");
        assert_eq!(l.format("-0."), "-0,");
        assert_eq!(l.format("1000."), "1.000,");
    }

    #[test]
    fn test_error_passes_through() {
        assert_eq!(Locale::ES_CO.format("Error"), "Error");
        assert_eq!(Locale::EN_US.format("Error"), "Error");
    }

    #[test]
    fn test_malformed_input_falls_back_to_zero() {
        assert_eq!(Locale::ES_CO.format("abc"), "0");
        assert_eq!(Locale::ES_CO.format("1.2.3"), "0");
        assert_eq!(Locale::ES_CO.format("--5"), "0");
    }

    #[test]
    fn test_min_grouping_digits() {
        let l = Locale::ES_ES;
        assert_eq!(l.format("1234"), "1234");
        assert_eq!(l.format("12345"), "12.345");
        assert_eq!(l.format("1234567"), "1.234.567");
    }

    #[test]
    fn test_format_is_deterministic() {
        for input in ["0", "1234.5", "-7.", "Error", ""] {
            assert_eq!(Locale::ES_CO.format(input), Locale::ES_CO.format(input));
        }
    }

    #[test]
    fn test_from_tag() {
        assert_eq!(Locale::from_tag("es-CO").unwrap(), Locale::ES_CO);
        assert_eq!(Locale::from_tag("en_us").unwrap(), Locale::EN_US);
        assert!(matches!(
            Locale::from_tag("fr-FR"),
            Err(AbacoError::UnknownLocale { .. })
        ));
    }
}

//! Numeral normalization
//!
//! Rewrites numeral characters of any script into canonical ASCII so the
//! value can be computed by ordinary parsing. Non-decimal numerals
//! (fractions, Roman numerals, ideographs) cannot be concatenated and are
//! only meaningful as single-character runs.

use super::{classify, NumeralClass};
use crate::number::Number;

/// Separators recognized inside a numeral run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    /// Character translated to the canonical decimal point
    pub decimal_point: char,
    /// Digit group separator, dropped before parsing
    pub group: Option<char>,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            decimal_point: '.',
            group: None,
        }
    }
}

/// Value of a maximal run of numeral characters
///
/// A run of decimal digits (any script, mixed scripts allowed) is read as
/// an exact integer. A run made of a single non-decimal numeral yields that
/// character's value. Anything else yields `None`.
pub fn normalize_run(run: &[char]) -> Option<Number> {
    match run {
        [] => None,
        [single] => match classify(*single) {
            NumeralClass::NotNumeric => None,
            class => class.value().and_then(Number::from_f64),
        },
        _ => {
            let mut digits = String::with_capacity(run.len());
            if !push_ascii_digits(run.iter().copied(), &mut digits) {
                return None;
            }
            Some(Number::integer(false, &digits))
        }
    }
}

/// Append the ASCII form of each decimal digit; false on any other character
pub fn push_ascii_digits(chars: impl IntoIterator<Item = char>, out: &mut String) -> bool {
    for ch in chars {
        match classify(ch) {
            NumeralClass::Decimal(d) => out.push(char::from(b'0' + d)),
            _ => return false,
        }
    }
    true
}

/// Parse the raw text of a numeral run found by the scanner
///
/// The text may contain a sign, decimal digits of any script, the decimal
/// point and group separator from `separators`, and an exponent marker.
/// A lone non-decimal numeral is resolved through the table.
pub(crate) fn parse_numeral_text(
    raw: &str,
    separators: Separators,
    integral: bool,
) -> Option<Number> {
    let mut chars = raw.chars();
    if let (Some(first), None) = (chars.next(), chars.next()) {
        if !first.is_ascii() && !classify(first).is_decimal() {
            return normalize_run(&[first]);
        }
    }

    let mut literal = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match classify(ch) {
            NumeralClass::Decimal(d) => literal.push(char::from(b'0' + d)),
            _ if Some(ch) == separators.group => {}
            _ if ch == separators.decimal_point => literal.push('.'),
            _ if matches!(ch, '+' | '-' | 'e' | 'E') => literal.push(ch),
            _ => return None,
        }
    }
    Number::parse_literal(&literal, integral)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_ascii_run() {
        assert_eq!(normalize_run(&chars("0042")), Some(Number::from(42_i64)));
        assert_eq!(normalize_run(&chars("7")), Some(Number::from(7_i64)));
    }

    #[test]
    fn test_non_ascii_decimal_run() {
        assert_eq!(normalize_run(&chars("١٢٣")), Some(Number::from(123_i64)));
        assert_eq!(normalize_run(&chars("1٢3")), Some(Number::from(123_i64)));
        assert_eq!(normalize_run(&chars("４２")), Some(Number::from(42_i64)));
    }

    #[test]
    fn test_single_non_decimal_numeral() {
        assert_eq!(normalize_run(&chars("½")), Some(Number::real(0.5).unwrap()));
        assert_eq!(normalize_run(&chars("²")), Some(Number::from(2_i64)));
        assert_eq!(normalize_run(&chars("Ⅻ")), Some(Number::from(12_i64)));
        assert_eq!(normalize_run(&chars("万")), Some(Number::from(10000_i64)));
    }

    #[test]
    fn test_invalid_runs() {
        assert_eq!(normalize_run(&[]), None);
        assert_eq!(normalize_run(&chars("x")), None);
        assert_eq!(normalize_run(&chars("½½")), None);
        assert_eq!(normalize_run(&chars("1a")), None);
    }

    #[test]
    fn test_parse_numeral_text_plain() {
        let plain = Separators::default();
        assert_eq!(
            parse_numeral_text("-12", plain, true),
            Some(Number::from(-12_i64))
        );
        assert_eq!(
            parse_numeral_text("1.5e2", plain, false),
            Some(Number::real(150.0).unwrap())
        );
        assert_eq!(
            parse_numeral_text("٣.٥", plain, false),
            Some(Number::real(3.5).unwrap())
        );
        assert_eq!(parse_numeral_text("⅓", plain, true), Some(Number::real(1.0 / 3.0).unwrap()));
        assert_eq!(parse_numeral_text("1,5", plain, false), None);
    }

    #[test]
    fn test_parse_numeral_text_grouped() {
        let german = Separators {
            decimal_point: ',',
            group: Some('.'),
        };
        assert_eq!(
            parse_numeral_text("1.234,5", german, false),
            Some(Number::real(1234.5).unwrap())
        );
        assert_eq!(
            parse_numeral_text("1.234", german, true),
            Some(Number::from(1234_i64))
        );
    }
}

//! Locale-aware numeric parsing
//!
//! A locale contributes two characters to number parsing: the decimal
//! separator, translated to the canonical decimal point, and the digit
//! group separator, which is dropped. Built-in locales come from an
//! embedded table; see [`loader`].

pub mod config;
pub mod loader;

pub use loader::{available_locales, get_locale, locale_from_env};

use crate::error::{Error, Result};
use crate::number::Number;
use crate::numeral::{classify, normalize::parse_numeral_text, normalize::Separators};
use crate::options::NumberType;

/// Numeric conventions of a locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    code: String,
    decimal_point: char,
    thousands_sep: Option<char>,
}

impl Locale {
    /// Create a locale, validating its separators
    ///
    /// Separators may not be numerals, letters, or signs, and the two
    /// separators must differ.
    pub fn new(code: &str, decimal_point: char, thousands_sep: Option<char>) -> Result<Self> {
        let unusable =
            |c: char| c.is_alphanumeric() || classify(c).is_numeric() || matches!(c, '+' | '-');

        if unusable(decimal_point) {
            return Err(Error::InvalidLocale(format!(
                "{code}: decimal point {decimal_point:?} is not a separator character"
            )));
        }
        if let Some(sep) = thousands_sep {
            if unusable(sep) {
                return Err(Error::InvalidLocale(format!(
                    "{code}: thousands separator {sep:?} is not a separator character"
                )));
            }
            if sep == decimal_point {
                return Err(Error::InvalidLocale(format!(
                    "{code}: thousands separator and decimal point are both {sep:?}"
                )));
            }
        }

        Ok(Self {
            code: code.to_string(),
            decimal_point,
            thousands_sep,
        })
    }

    /// Locale code, e.g. `de_DE`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Decimal separator
    pub fn decimal_point(&self) -> char {
        self.decimal_point
    }

    /// Digit group separator, if the locale groups digits
    pub fn thousands_sep(&self) -> Option<char> {
        self.thousands_sep
    }

    pub(crate) fn separators(&self) -> Separators {
        Separators {
            decimal_point: self.decimal_point,
            group: self.thousands_sep,
        }
    }

    /// Parse numeral run text written in this locale
    pub fn parse(&self, run_text: &str, number_type: NumberType) -> Option<Number> {
        parse_numeral_text(run_text, self.separators(), number_type.is_integral())
    }
}

/// Parse the text of a numeral run, honoring the locale when one is given
///
/// Without a locale every separator is a literal character, so grouped
/// numbers such as `1,234` do not parse.
pub fn parse_localized(
    run_text: &str,
    locale: Option<&Locale>,
    number_type: NumberType,
) -> Option<Number> {
    match locale {
        Some(locale) => locale.parse(run_text, number_type),
        None => parse_numeral_text(run_text, Separators::default(), number_type.is_integral()),
    }
}

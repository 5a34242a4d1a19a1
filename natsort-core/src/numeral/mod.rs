//! Unicode numeral classification
//!
//! Maps a single code point to its numeral class and numeric value. The
//! lookup is backed by a static range table and never fails: code points
//! missing from the table are simply not numeric.

pub mod normalize;
mod table;

use std::cmp::Ordering;

use table::NUMERALS;

pub use normalize::normalize_run;

/// Kind of numeral recorded in the static table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumeralKind {
    /// Decimal digit of a positional system (Unicode `Nd`)
    Decimal,
    /// Digit that is not positional: superscripts, circled digits
    Digit,
    /// Any other numeric character: fractions, Roman numerals, ideographs
    Numeric,
}

/// Classification of a single character
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumeralClass {
    /// Character has no numeric value
    NotNumeric,
    /// Decimal digit with its value `0..=9`
    Decimal(u8),
    /// Non-positional digit with its value `0..=9`
    Digit(u8),
    /// Numeric character with an arbitrary (possibly fractional) value
    Numeric(f64),
}

impl NumeralClass {
    /// Numeric value of the character, if any
    pub fn value(&self) -> Option<f64> {
        match *self {
            NumeralClass::NotNumeric => None,
            NumeralClass::Decimal(d) | NumeralClass::Digit(d) => Some(f64::from(d)),
            NumeralClass::Numeric(v) => Some(v),
        }
    }

    /// Whether the character has any numeric value
    pub fn is_numeric(&self) -> bool {
        !matches!(self, NumeralClass::NotNumeric)
    }

    /// Whether the character is a decimal digit
    pub fn is_decimal(&self) -> bool {
        matches!(self, NumeralClass::Decimal(_))
    }

    /// Kind of numeral, or `None` when not numeric
    pub fn kind(&self) -> Option<NumeralKind> {
        match self {
            NumeralClass::NotNumeric => None,
            NumeralClass::Decimal(_) => Some(NumeralKind::Decimal),
            NumeralClass::Digit(_) => Some(NumeralKind::Digit),
            NumeralClass::Numeric(_) => Some(NumeralKind::Numeric),
        }
    }
}

/// Classify a character
#[inline]
pub fn classify(ch: char) -> NumeralClass {
    if ch.is_ascii_digit() {
        return NumeralClass::Decimal(ch as u8 - b'0');
    }
    if ch.is_ascii() {
        return NumeralClass::NotNumeric;
    }

    let cp = ch as u32;
    let found = NUMERALS.binary_search_by(|range| {
        if range.end < cp {
            Ordering::Less
        } else if range.start > cp {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });

    match found {
        Ok(index) => {
            let range = &NUMERALS[index];
            let value = range.first_value + f64::from(cp - range.start);
            match range.kind {
                NumeralKind::Decimal => NumeralClass::Decimal(value as u8),
                NumeralKind::Digit => NumeralClass::Digit(value as u8),
                NumeralKind::Numeric => NumeralClass::Numeric(value),
            }
        }
        Err(_) => NumeralClass::NotNumeric,
    }
}

/// Decimal value of a character, if it is a decimal digit
#[inline]
pub fn decimal_value(ch: char) -> Option<u8> {
    match classify(ch) {
        NumeralClass::Decimal(d) => Some(d),
        _ => None,
    }
}

/// Numeric value of a character, if it has one
#[inline]
pub fn numeric_value(ch: char) -> Option<f64> {
    classify(ch).value()
}

/// Every non-ASCII numeral character with its class, in code point order
pub fn all_numerals() -> impl Iterator<Item = (char, NumeralClass)> {
    NUMERALS
        .iter()
        .flat_map(|range| range.start..=range.end)
        .filter_map(char::from_u32)
        .map(|ch| (ch, classify(ch)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_digits_are_decimal() {
        for (i, ch) in ('0'..='9').enumerate() {
            assert_eq!(classify(ch), NumeralClass::Decimal(i as u8));
        }
    }

    #[test]
    fn test_ascii_non_digits() {
        for ch in ['a', 'Z', ' ', '.', '-', '+', '/', 'e'] {
            assert_eq!(classify(ch), NumeralClass::NotNumeric);
        }
    }

    #[test]
    fn test_non_ascii_decimals() {
        assert_eq!(classify('٣'), NumeralClass::Decimal(3)); // ARABIC-INDIC THREE
        assert_eq!(classify('७'), NumeralClass::Decimal(7)); // DEVANAGARI SEVEN
        assert_eq!(classify('９'), NumeralClass::Decimal(9)); // FULLWIDTH NINE
        assert_eq!(classify('𝟘'), NumeralClass::Decimal(0)); // MATHEMATICAL DOUBLE-STRUCK ZERO
    }

    #[test]
    fn test_digits() {
        assert_eq!(classify('²'), NumeralClass::Digit(2));
        assert_eq!(classify('¹'), NumeralClass::Digit(1));
        assert_eq!(classify('①'), NumeralClass::Digit(1));
        assert_eq!(classify('₉'), NumeralClass::Digit(9));
    }

    #[test]
    fn test_other_numerics() {
        assert_eq!(classify('½'), NumeralClass::Numeric(0.5));
        assert_eq!(classify('⅓'), NumeralClass::Numeric(1.0 / 3.0));
        assert_eq!(classify('Ⅻ'), NumeralClass::Numeric(12.0));
        assert_eq!(classify('万'), NumeralClass::Numeric(10000.0));
        assert_eq!(classify('三'), NumeralClass::Numeric(3.0));
    }

    #[test]
    fn test_letters_are_not_numeric() {
        for ch in ['é', 'ß', 'あ', 'Ж', '字'] {
            assert!(!classify(ch).is_numeric(), "{ch} should not be numeric");
        }
    }

    #[test]
    fn test_table_is_sorted_and_disjoint() {
        for pair in NUMERALS.windows(2) {
            assert!(pair[0].start <= pair[0].end);
            assert!(pair[0].end < pair[1].start);
        }
    }

    #[test]
    fn test_all_numerals_agree_with_std() {
        let mut total = 0;
        let mut decimals = 0;
        for (ch, class) in all_numerals() {
            assert!(class.is_numeric());
            // Ideographs such as 万 carry a value but are letters (Lo)
            if class.is_decimal() {
                assert!(ch.is_numeric(), "{ch:?} should be numeric per std");
                decimals += 1;
            }
            total += 1;
        }
        assert_eq!(total, 1862);
        assert_eq!(decimals, 650);
    }

    #[test]
    fn test_helpers() {
        assert_eq!(decimal_value('5'), Some(5));
        assert_eq!(decimal_value('²'), None);
        assert_eq!(numeric_value('¾'), Some(0.75));
        assert_eq!(numeric_value('x'), None);
        assert_eq!(classify('٣').kind(), Some(NumeralKind::Decimal));
        assert_eq!(classify('x').kind(), None);
    }
}

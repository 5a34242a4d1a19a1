//! Single-pass numeral run scanner
//!
//! Splits a string into alternating text and number segments. Number
//! recognition is a small state machine:
//!
//! ```text
//! Text ──sign──▶ SignSeen ──digit──▶ Digits ──point──▶ DecimalPointSeen
//!   │                │                  │  ▲                 │
//!   │                └──point──▶ DecimalPointSeen            │
//!   └──digit──▶ Digits              └─group─┘                │
//!                 │                                          │
//!                 └────e/E────▶ ExponentMarkerSeen ◀───e/E───┘
//!                                 │           │
//!                               sign        digit
//!                                 ▼           ▼
//!                     ExponentSignSeen ──▶ ExponentDigits
//! ```
//!
//! The longest prefix that ends in an accepting state wins; characters
//! consumed past it are handed back to the text run.

use crate::locale::{self, Locale};
use crate::number::Number;
use crate::numeral::{classify, NumeralClass};
use crate::options::{KeyOptions, NumberType};

/// Precomputed number recognition settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NumberFormat {
    number_type: NumberType,
    signed: bool,
    exponent: bool,
    locale: Option<Locale>,
}

impl NumberFormat {
    /// Unsigned integers, no locale
    pub fn integer() -> Self {
        Self::default()
    }

    /// Unsigned floats with exponents, no locale
    pub fn float() -> Self {
        Self {
            number_type: NumberType::Float,
            exponent: true,
            ..Self::default()
        }
    }

    pub fn with_signed(mut self, signed: bool) -> Self {
        self.signed = signed;
        self
    }

    /// Enable exponents; ignored for integers
    pub fn with_exponent(mut self, exponent: bool) -> Self {
        self.exponent = exponent;
        self
    }

    pub fn with_locale(mut self, locale: Option<Locale>) -> Self {
        self.locale = locale;
        self
    }

    pub fn number_type(&self) -> NumberType {
        self.number_type
    }

    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    fn is_float(&self) -> bool {
        self.number_type == NumberType::Float
    }

    fn exponent_enabled(&self) -> bool {
        self.exponent && self.is_float()
    }

    fn decimal_point(&self) -> char {
        self.locale.as_ref().map_or('.', Locale::decimal_point)
    }

    fn group_separator(&self) -> Option<char> {
        self.locale.as_ref().and_then(Locale::thousands_sep)
    }
}

impl From<&KeyOptions> for NumberFormat {
    fn from(options: &KeyOptions) -> Self {
        Self {
            number_type: options.number_type(),
            signed: options.signed(),
            exponent: options.exponent(),
            locale: options.locale().cloned(),
        }
    }
}

/// A piece of scanned input
#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Non-numeric run
    Text(&'a str),
    /// Numeral run with its value and source text
    Number { value: Number, raw: &'a str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    SignSeen,
    Digits,
    DecimalPointSeen,
    ExponentMarkerSeen,
    ExponentSignSeen,
    ExponentDigits,
}

/// Iterator over the segments of a string
pub struct Scanner<'a> {
    text: &'a str,
    chars: Vec<(usize, char)>,
    pos: usize,
    format: &'a NumberFormat,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `text`
    pub fn new(text: &'a str, format: &'a NumberFormat) -> Self {
        Self {
            text,
            chars: text.char_indices().collect(),
            pos: 0,
            format,
        }
    }

    fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).map(|&(_, c)| c)
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map_or(self.text.len(), |&(offset, _)| offset)
    }

    fn is_decimal_at(&self, index: usize) -> bool {
        self.char_at(index)
            .is_some_and(|c| classify(c).is_decimal())
    }

    /// A group separator counts only between a digit and exactly three digits
    fn is_group_at(&self, index: usize) -> bool {
        self.format.group_separator().is_some()
            && self.char_at(index) == self.format.group_separator()
            && (1..=3).all(|k| self.is_decimal_at(index + k))
            && !self.is_decimal_at(index + 4)
    }

    /// Try to read a number starting at `start`; returns the end index
    fn match_number(&self, start: usize) -> Option<usize> {
        let first = self.char_at(start)?;

        // Non-decimal numerals stand alone and take no sign or point
        match classify(first) {
            NumeralClass::Digit(_) | NumeralClass::Numeric(_) => return Some(start + 1),
            _ => {}
        }

        let decimal_point = self.format.decimal_point();
        let mut state = State::Text;
        let mut mantissa_digits = false;
        let mut accepted = None;
        let mut i = start;

        while let Some(c) = self.char_at(i) {
            let is_digit = classify(c).is_decimal();
            let next = match state {
                State::Text => {
                    if is_digit {
                        Some(State::Digits)
                    } else if self.format.signed && matches!(c, '+' | '-') {
                        Some(State::SignSeen)
                    } else if self.format.is_float() && c == decimal_point {
                        Some(State::DecimalPointSeen)
                    } else {
                        None
                    }
                }
                State::SignSeen => {
                    if is_digit {
                        Some(State::Digits)
                    } else if self.format.is_float() && c == decimal_point {
                        Some(State::DecimalPointSeen)
                    } else {
                        None
                    }
                }
                State::Digits => {
                    if is_digit || self.is_group_at(i) {
                        Some(State::Digits)
                    } else if self.format.is_float() && c == decimal_point {
                        Some(State::DecimalPointSeen)
                    } else if self.format.exponent_enabled() && matches!(c, 'e' | 'E') {
                        Some(State::ExponentMarkerSeen)
                    } else {
                        None
                    }
                }
                State::DecimalPointSeen => {
                    if is_digit {
                        Some(State::DecimalPointSeen)
                    } else if mantissa_digits
                        && self.format.exponent_enabled()
                        && matches!(c, 'e' | 'E')
                    {
                        Some(State::ExponentMarkerSeen)
                    } else {
                        None
                    }
                }
                State::ExponentMarkerSeen => {
                    if is_digit {
                        Some(State::ExponentDigits)
                    } else if matches!(c, '+' | '-') {
                        Some(State::ExponentSignSeen)
                    } else {
                        None
                    }
                }
                State::ExponentSignSeen | State::ExponentDigits => {
                    is_digit.then_some(State::ExponentDigits)
                }
            };

            let Some(next) = next else { break };
            state = next;
            i += 1;

            if is_digit && matches!(state, State::Digits | State::DecimalPointSeen) {
                mantissa_digits = true;
            }
            let accepting = match state {
                State::Digits | State::ExponentDigits => true,
                State::DecimalPointSeen => mantissa_digits,
                _ => false,
            };
            if accepting {
                accepted = Some(i);
            }
        }

        accepted
    }

    fn number_segment(&self, start: usize, end: usize) -> Option<Segment<'a>> {
        let raw = &self.text[self.byte_offset(start)..self.byte_offset(end)];
        let value = locale::parse_localized(raw, self.format.locale(), self.format.number_type)?;
        Some(Segment::Number { value, raw })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.chars.len() {
            return None;
        }

        let start = self.pos;
        let mut i = start;
        while i < self.chars.len() {
            if let Some(end) = self.match_number(i) {
                if i > start {
                    // Flush the text before this number first
                    self.pos = i;
                    let text = &self.text[self.byte_offset(start)..self.byte_offset(i)];
                    return Some(Segment::Text(text));
                }
                if let Some(segment) = self.number_segment(i, end) {
                    self.pos = end;
                    return Some(segment);
                }
                // Unparseable run: keep it as text
                i = end;
                continue;
            }
            i += 1;
        }

        self.pos = self.chars.len();
        Some(Segment::Text(&self.text[self.byte_offset(start)..]))
    }
}

/// Every numeral run value in `input`, in order of appearance
pub fn extract_numbers(input: &str, format: &NumberFormat) -> Vec<Number> {
    Scanner::new(input, format)
        .filter_map(|segment| match segment {
            Segment::Number { value, .. } => Some(value),
            Segment::Text(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(input: &str, format: &NumberFormat) -> Vec<String> {
        Scanner::new(input, format)
            .map(|segment| match segment {
                Segment::Text(t) => format!("T:{t}"),
                Segment::Number { value, raw } => format!("N:{raw}={value}"),
            })
            .collect()
    }

    #[test]
    fn test_integer_runs() {
        let format = NumberFormat::integer();
        assert_eq!(segments("a10b2", &format), ["T:a", "N:10=10", "T:b", "N:2=2"]);
        assert_eq!(segments("007", &format), ["N:007=7"]);
        assert_eq!(segments("abc", &format), ["T:abc"]);
        assert!(segments("", &format).is_empty());
    }

    #[test]
    fn test_sign_is_text_when_unsigned() {
        let format = NumberFormat::integer();
        assert_eq!(segments("a-5", &format), ["T:a-", "N:5=5"]);
        assert_eq!(segments("+5", &format), ["T:+", "N:5=5"]);
    }

    #[test]
    fn test_signed_integers() {
        let format = NumberFormat::integer().with_signed(true);
        assert_eq!(segments("a-5", &format), ["T:a", "N:-5=-5"]);
        assert_eq!(segments("x+3y", &format), ["T:x", "N:+3=3", "T:y"]);
        assert_eq!(segments("a-b", &format), ["T:a-b"]);
        assert_eq!(segments("--5", &format), ["T:-", "N:-5=-5"]);
    }

    #[test]
    fn test_floats() {
        let format = NumberFormat::float();
        assert_eq!(segments("v1.5x", &format), ["T:v", "N:1.5=1.5", "T:x"]);
        assert_eq!(segments("a1.txt", &format), ["T:a", "N:1.=1", "T:txt"]);
        assert_eq!(segments("a.5", &format), ["T:a", "N:.5=0.5"]);
        assert_eq!(segments("1.2.3", &format), ["N:1.2=1.2", "N:.3=0.3"]);
        assert_eq!(segments("a.b", &format), ["T:a.b"]);
    }

    #[test]
    fn test_exponents() {
        let format = NumberFormat::float();
        assert_eq!(segments("1e3", &format), ["N:1e3=1000"]);
        assert_eq!(segments("2.5E-1x", &format), ["N:2.5E-1=0.25", "T:x"]);
        assert_eq!(segments("1e", &format), ["N:1=1", "T:e"]);
        assert_eq!(segments("1e+x", &format), ["N:1=1", "T:e+x"]);
        assert_eq!(segments("1.e2", &format), ["N:1.e2=100"]);

        let no_exp = NumberFormat::float().with_exponent(false);
        assert_eq!(segments("1e3", &no_exp), ["N:1=1", "T:e", "N:3=3"]);

        let integers = NumberFormat::integer().with_exponent(true);
        assert_eq!(segments("1e3", &integers), ["N:1=1", "T:e", "N:3=3"]);
    }

    #[test]
    fn test_signed_float() {
        let format = NumberFormat::float().with_signed(true);
        assert_eq!(segments("t-1.5e+2", &format), ["T:t", "N:-1.5e+2=-150"]);
        assert_eq!(segments("-.5", &format), ["N:-.5=-0.5"]);
        assert_eq!(segments("-.", &format), ["T:-."]);
    }

    #[test]
    fn test_unicode_numerals() {
        let format = NumberFormat::integer();
        assert_eq!(segments("ch٣", &format), ["T:ch", "N:٣=3"]);
        assert_eq!(segments("x²", &format), ["T:x", "N:²=2"]);
        assert_eq!(segments("①②", &format), ["N:①=1", "N:②=2"]);
        assert_eq!(segments("½", &format), ["N:½=0.5"]);
        assert_eq!(segments("1½", &format), ["N:1=1", "N:½=0.5"]);
    }

    #[test]
    fn test_locale_grouping() {
        let us = locale::get_locale("en_US").unwrap();
        let format = NumberFormat::integer().with_locale(Some(us.clone()));
        assert_eq!(segments("n1,234", &format), ["T:n", "N:1,234=1234"]);
        assert_eq!(segments("1,234,567", &format), ["N:1,234,567=1234567"]);
        assert_eq!(segments("1,23", &format), ["N:1=1", "T:,", "N:23=23"]);
        assert_eq!(segments("1,2345", &format), ["N:1=1", "T:,", "N:2345=2345"]);

        let format = NumberFormat::float().with_locale(Some(us));
        assert_eq!(segments("1,234.5", &format), ["N:1,234.5=1234.5"]);
    }

    #[test]
    fn test_locale_decimal_comma() {
        let de = locale::get_locale("de_DE").unwrap();
        let format = NumberFormat::float().with_locale(Some(de));
        assert_eq!(segments("x1.234,5", &format), ["T:x", "N:1.234,5=1234.5"]);
        assert_eq!(segments("2,5", &format), ["N:2,5=2.5"]);
    }

    #[test]
    fn test_extract_numbers() {
        let values = extract_numbers("a56b23c89", &NumberFormat::integer());
        assert_eq!(
            values,
            vec![
                Number::from(56_i64),
                Number::from(23_i64),
                Number::from(89_i64)
            ]
        );
        assert!(extract_numbers("none", &NumberFormat::integer()).is_empty());
    }
}

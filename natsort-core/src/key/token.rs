//! Sort key tokens

use std::cmp::Ordering;

use crate::number::Number;

/// One element of a sort key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Boundary between two path components
    Separator,
    /// Numeral run
    Number {
        /// Parsed value
        value: Number,
        /// Source text, used to break ties between equal values
        raw: String,
    },
    /// Non-numeric run
    Text {
        /// Comparison form after the case policy was applied
        text: String,
        /// Source text when it differs from `text`
        raw: Option<String>,
    },
}

impl Token {
    /// Source text of the token
    pub fn raw(&self) -> &str {
        match self {
            Token::Separator => "",
            Token::Number { raw, .. } => raw,
            Token::Text { text, raw } => raw.as_deref().unwrap_or(text),
        }
    }

    /// Type precedence: separators first, then numbers and text in the
    /// configured order
    fn rank(&self, numbers_first: bool) -> u8 {
        match (self, numbers_first) {
            (Token::Separator, _) => 0,
            // The empty key of an empty input sorts first
            (Token::Text { text, .. }, _) if text.is_empty() => 0,
            (Token::Number { .. }, true) | (Token::Text { .. }, false) => 1,
            (Token::Number { .. }, false) | (Token::Text { .. }, true) => 2,
        }
    }

    /// Compare by value and type, ignoring source text
    pub fn cmp_primary(&self, other: &Self, numbers_first: bool) -> Ordering {
        match (self, other) {
            (Token::Separator, Token::Separator) => Ordering::Equal,
            (Token::Number { value: a, .. }, Token::Number { value: b, .. }) => a.cmp(b),
            (Token::Text { text: a, .. }, Token::Text { text: b, .. }) => a.cmp(b),
            _ => self
                .rank(numbers_first)
                .cmp(&other.rank(numbers_first)),
        }
    }
}

//! Natural sort key generation
//!
//! A [`Keyer`] turns a string into a [`SortKey`]: the sequence of text and
//! number tokens found by the scanner, with path component boundaries when
//! path mode is on. Keys compare element by element; a key that is a prefix
//! of another sorts first. Keys that are equal by value are then ordered by
//! their source text, so `"007"` and `"7"` never compare equal.

mod token;

pub use token::Token;

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::options::{CaseMode, KeyOptions};
use crate::path::split_path;
use crate::scan::{NumberFormat, Scanner, Segment};

/// Inline token capacity; most keys are a few runs long
const INLINE_TOKENS: usize = 4;

/// Comparable key for one input string
#[derive(Debug, Clone)]
pub struct SortKey {
    tokens: SmallVec<[Token; INLINE_TOKENS]>,
    numbers_first: bool,
}

impl SortKey {
    /// Tokens of the key, in input order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        for (a, b) in self.tokens.iter().zip(&other.tokens) {
            match a.cmp_primary(b, self.numbers_first) {
                Ordering::Equal => {}
                ordering => return ordering,
            }
        }
        self.tokens
            .len()
            .cmp(&other.tokens.len())
            .then_with(|| {
                self.tokens
                    .iter()
                    .zip(&other.tokens)
                    .map(|(a, b)| a.raw().cmp(b.raw()))
                    .find(|ordering| ordering.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortKey {}

/// Key generator built once per batch from validated options
#[derive(Debug, Clone)]
pub struct Keyer {
    options: KeyOptions,
    format: NumberFormat,
}

impl Keyer {
    /// Create a keyer, precomputing the number format
    pub fn new(options: KeyOptions) -> Self {
        let format = NumberFormat::from(&options);
        Self { options, format }
    }

    pub fn options(&self) -> &KeyOptions {
        &self.options
    }

    /// Number format used for scanning
    pub fn number_format(&self) -> &NumberFormat {
        &self.format
    }

    /// Build the sort key for `input`
    pub fn key(&self, input: &str) -> SortKey {
        let mut tokens = SmallVec::new();

        if self.options.as_path() {
            for (index, component) in split_path(input).into_iter().enumerate() {
                if index > 0 {
                    tokens.push(Token::Separator);
                }
                self.push_tokens(component, &mut tokens);
            }
        } else {
            self.push_tokens(input, &mut tokens);
        }

        // Empty strings still need a comparable key
        if tokens.is_empty() {
            tokens.push(self.text_token(""));
        }

        SortKey {
            tokens,
            numbers_first: self.options.numbers_first(),
        }
    }

    /// Compare two strings by their keys
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.key(a).cmp(&self.key(b))
    }

    fn push_tokens(&self, text: &str, tokens: &mut SmallVec<[Token; INLINE_TOKENS]>) {
        for segment in Scanner::new(text, &self.format) {
            tokens.push(match segment {
                Segment::Text(raw) => self.text_token(raw),
                Segment::Number { value, raw } => Token::Number {
                    value,
                    raw: raw.to_string(),
                },
            });
        }
    }

    fn text_token(&self, raw: &str) -> Token {
        let text = match self.options.case() {
            CaseMode::Sensitive => None,
            CaseMode::IgnoreCase => Some(raw.to_lowercase()),
            CaseMode::LowercaseFirst => Some(swap_case(raw)),
        };
        match text {
            Some(text) if text != raw => Token::Text {
                text,
                raw: Some(raw.to_string()),
            },
            _ => Token::Text {
                text: raw.to_string(),
                raw: None,
            },
        }
    }
}

fn swap_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Build the sort key for `input` under `options`
pub fn tokenize(input: &str, options: &KeyOptions) -> SortKey {
    Keyer::new(options.clone()).key(input)
}

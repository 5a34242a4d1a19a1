//! Numeric values extracted from numeral runs
//!
//! Integer runs keep their exact decimal digits so that arbitrarily long
//! counters still order correctly. Floats and fractional numerals are kept
//! as `f64`. Comparison between the two representations is exact.

use std::cmp::Ordering;
use std::fmt;

/// Largest magnitude at which every integer is exactly representable in `f64`
const EXACT_F64_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Value of a numeral run
#[derive(Debug, Clone)]
pub enum Number {
    /// Exact integer; `digits` is ASCII without leading zeros (`"0"` for zero)
    Integer {
        /// Sign; always false for zero
        negative: bool,
        /// Magnitude digits
        digits: String,
    },
    /// Floating-point value (never NaN, zero is always positive)
    Real(f64),
}

impl Number {
    /// Build an exact integer from a sign and ASCII decimal digits
    ///
    /// Leading zeros are dropped; an empty or all-zero digit string is zero.
    pub fn integer(negative: bool, ascii_digits: &str) -> Self {
        let trimmed = ascii_digits.trim_start_matches('0');
        if trimmed.is_empty() {
            return Number::Integer {
                negative: false,
                digits: "0".to_string(),
            };
        }
        Number::Integer {
            negative,
            digits: trimmed.to_string(),
        }
    }

    /// Build from an `f64`, preferring the exact integer form when lossless
    ///
    /// Returns `None` for NaN.
    pub fn from_f64(value: f64) -> Option<Self> {
        if value.is_finite() && value.fract() == 0.0 && value.abs() <= EXACT_F64_LIMIT {
            return Some(Number::integer(value < 0.0, &format!("{:.0}", value.abs())));
        }
        Number::real(value)
    }

    /// Build a real value, normalizing negative zero
    ///
    /// Returns `None` for NaN, which has no place in the order.
    pub fn real(value: f64) -> Option<Self> {
        if value.is_nan() {
            None
        } else if value == 0.0 {
            Some(Number::Real(0.0))
        } else {
            Some(Number::Real(value))
        }
    }

    /// Parse a canonical ASCII literal (`[+-]digits` for integers,
    /// anything `f64::from_str` accepts for reals)
    pub fn parse_literal(literal: &str, integral: bool) -> Option<Self> {
        if integral {
            let (negative, digits) = match literal.as_bytes().first()? {
                b'-' => (true, &literal[1..]),
                b'+' => (false, &literal[1..]),
                _ => (false, literal),
            };
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            Some(Number::integer(negative, digits))
        } else {
            literal.parse::<f64>().ok().and_then(Number::real)
        }
    }

    /// Approximate value as `f64` (exact for reals and small integers)
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Integer { negative, digits } => {
                let magnitude = digits.parse::<f64>().unwrap_or(f64::INFINITY);
                if *negative {
                    -magnitude
                } else {
                    magnitude
                }
            }
            Number::Real(v) => *v,
        }
    }

    fn signum(&self) -> i8 {
        match self {
            Number::Integer { negative, digits } => {
                if digits == "0" {
                    0
                } else if *negative {
                    -1
                } else {
                    1
                }
            }
            Number::Real(v) => {
                if *v > 0.0 {
                    1
                } else if *v < 0.0 {
                    -1
                } else {
                    0
                }
            }
        }
    }
}

/// Compare two magnitudes given as ASCII digit strings without leading zeros
fn cmp_digits(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Exact comparison of an integer against a real of the same non-zero sign
fn cmp_integer_real(digits: &str, negative: bool, real: f64) -> Ordering {
    if real.is_infinite() {
        return if real > 0.0 {
            Ordering::Less
        } else {
            Ordering::Greater
        };
    }
    let magnitude = real.abs();
    let whole = format!("{:.0}", magnitude.trunc());
    let ordering = match cmp_digits(digits, &whole) {
        Ordering::Equal if magnitude.fract() > 0.0 => Ordering::Less,
        other => other,
    };
    if negative {
        ordering.reverse()
    } else {
        ordering
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        let (sa, sb) = (self.signum(), other.signum());
        if sa != sb || sa == 0 {
            return sa.cmp(&sb);
        }
        match (self, other) {
            (
                Number::Integer {
                    negative, digits: a,
                },
                Number::Integer { digits: b, .. },
            ) => {
                let ordering = cmp_digits(a, b);
                if *negative {
                    ordering.reverse()
                } else {
                    ordering
                }
            }
            (Number::Real(a), Number::Real(b)) => a.total_cmp(b),
            (Number::Integer { negative, digits }, Number::Real(r)) => {
                cmp_integer_real(digits, *negative, *r)
            }
            (Number::Real(r), Number::Integer { negative, digits }) => {
                cmp_integer_real(digits, *negative, *r).reverse()
            }
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::integer(value < 0, &value.unsigned_abs().to_string())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer { negative, digits } => {
                if *negative {
                    write!(f, "-{digits}")
                } else {
                    write!(f, "{digits}")
                }
            }
            Number::Real(v) => write!(f, "{v}"),
        }
    }
}

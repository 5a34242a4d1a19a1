//! Configuration API for natural sort keys

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::locale::{self, Locale};

/// How numeral runs are read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberType {
    /// Unsigned or signed integers only
    #[default]
    Integer,
    /// Decimal points and (optionally) exponents are part of numbers
    Float,
}

impl NumberType {
    /// Whether values are read as exact integers
    pub fn is_integral(&self) -> bool {
        matches!(self, NumberType::Integer)
    }
}

/// Number type with the sign default implied by its name
///
/// Mirrors the names accepted on the command line: `digit`/`version` are
/// unsigned integers and `real` is a signed float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberTypeSpec {
    pub number_type: NumberType,
    pub signed: bool,
}

impl FromStr for NumberTypeSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (number_type, signed) = match s.to_ascii_lowercase().as_str() {
            "int" | "i" | "digit" | "d" | "version" | "ver" => (NumberType::Integer, false),
            "float" | "f" => (NumberType::Float, false),
            "real" | "r" => (NumberType::Float, true),
            _ => {
                return Err(Error::ConflictingOptions(format!(
                    "unknown number type: {s}"
                )))
            }
        };
        Ok(Self {
            number_type,
            signed,
        })
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberType::Integer => write!(f, "int"),
            NumberType::Float => write!(f, "float"),
        }
    }
}

/// Case policy for text comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    /// Ordinal comparison, uppercase before lowercase
    #[default]
    Sensitive,
    /// Compare lowercased text
    IgnoreCase,
    /// Swap case so lowercase sorts before uppercase
    LowercaseFirst,
}

/// Validated natural sort key options
#[derive(Debug, Clone, PartialEq)]
pub struct KeyOptions {
    pub(crate) number_type: NumberType,
    pub(crate) signed: bool,
    pub(crate) exponent: bool,
    pub(crate) locale_aware: bool,
    pub(crate) locale: Option<Locale>,
    pub(crate) as_path: bool,
    pub(crate) case: CaseMode,
    pub(crate) numbers_first: bool,
}

impl Default for KeyOptions {
    fn default() -> Self {
        Self {
            number_type: NumberType::Integer,
            signed: false,
            exponent: true,
            locale_aware: false,
            locale: None,
            as_path: false,
            case: CaseMode::Sensitive,
            numbers_first: true,
        }
    }
}

impl KeyOptions {
    /// Create an options builder
    pub fn builder() -> KeyOptionsBuilder {
        KeyOptionsBuilder::default()
    }

    pub fn number_type(&self) -> NumberType {
        self.number_type
    }

    pub fn signed(&self) -> bool {
        self.signed
    }

    /// Whether exponents are folded into numbers (floats only)
    pub fn exponent(&self) -> bool {
        self.exponent && self.number_type == NumberType::Float
    }

    pub fn locale_aware(&self) -> bool {
        self.locale_aware
    }

    /// Locale in effect; `None` when locale-aware parsing fell back
    pub fn locale(&self) -> Option<&Locale> {
        self.locale.as_ref()
    }

    pub fn as_path(&self) -> bool {
        self.as_path
    }

    pub fn case(&self) -> CaseMode {
        self.case
    }

    pub fn numbers_first(&self) -> bool {
        self.numbers_first
    }
}

/// Fluent builder for key options
#[derive(Debug, Default)]
pub struct KeyOptionsBuilder {
    number_type: Option<NumberType>,
    signed: Option<bool>,
    exponent: Option<bool>,
    locale_aware: bool,
    locale_name: Option<String>,
    locale: Option<Locale>,
    as_path: bool,
    case: CaseMode,
    numbers_first: Option<bool>,
}

impl KeyOptionsBuilder {
    /// Create a new options builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number_type(mut self, number_type: NumberType) -> Self {
        self.number_type = Some(number_type);
        self
    }

    /// Set number type and sign from a named spec (`int`, `float`, `real`, ...)
    pub fn number_type_spec(mut self, spec: NumberTypeSpec) -> Self {
        self.number_type = Some(spec.number_type);
        if spec.signed {
            self.signed = Some(true);
        }
        self
    }

    /// Treat `+`/`-` before a number as its sign
    pub fn signed(mut self, signed: bool) -> Self {
        self.signed = Some(signed);
        self
    }

    /// Fold `e`/`E` exponents into float values
    pub fn exponent(mut self, exponent: bool) -> Self {
        self.exponent = Some(exponent);
        self
    }

    /// Parse numbers using locale separators
    pub fn locale_aware(mut self, enabled: bool) -> Self {
        self.locale_aware = enabled;
        self
    }

    /// Use a named built-in locale (requires locale-aware mode)
    pub fn locale_name(mut self, name: impl Into<String>) -> Self {
        self.locale_name = Some(name.into());
        self
    }

    /// Use an explicit locale (requires locale-aware mode)
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Split inputs into path components before keying
    pub fn as_path(mut self, as_path: bool) -> Self {
        self.as_path = as_path;
        self
    }

    pub fn case(mut self, case: CaseMode) -> Self {
        self.case = case;
        self
    }

    /// Whether numbers sort before text at the same position
    pub fn numbers_first(mut self, numbers_first: bool) -> Self {
        self.numbers_first = Some(numbers_first);
        self
    }

    /// Build the options, resolving the locale
    pub fn build(self) -> Result<KeyOptions> {
        let defaults = KeyOptions::default();
        let number_type = self.number_type.unwrap_or(defaults.number_type);

        if self.exponent == Some(true) && number_type == NumberType::Integer {
            return Err(Error::ConflictingOptions(
                "exponents require the float number type".into(),
            ));
        }
        if !self.locale_aware && (self.locale_name.is_some() || self.locale.is_some()) {
            return Err(Error::ConflictingOptions(
                "a locale was given but locale-aware parsing is disabled".into(),
            ));
        }
        if self.locale_name.is_some() && self.locale.is_some() {
            return Err(Error::ConflictingOptions(
                "both a locale name and an explicit locale were given".into(),
            ));
        }

        let locale = if !self.locale_aware {
            None
        } else if let Some(locale) = self.locale {
            Some(locale)
        } else if let Some(name) = &self.locale_name {
            Some(locale::get_locale(name)?)
        } else {
            let resolved = locale::locale_from_env();
            if resolved.is_none() {
                log::warn!("No locale available; numbers are parsed without locale separators");
            }
            resolved
        };

        Ok(KeyOptions {
            number_type,
            signed: self.signed.unwrap_or(defaults.signed),
            exponent: self.exponent.unwrap_or(defaults.exponent),
            locale_aware: self.locale_aware,
            locale,
            as_path: self.as_path,
            case: self.case,
            numbers_first: self.numbers_first.unwrap_or(defaults.numbers_first),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = KeyOptions::default();
        assert_eq!(options.number_type(), NumberType::Integer);
        assert!(!options.signed());
        assert!(!options.exponent());
        assert!(!options.as_path());
        assert!(options.numbers_first());
        assert_eq!(options.case(), CaseMode::Sensitive);
        assert_eq!(KeyOptions::builder().build().unwrap(), options);
    }

    #[test]
    fn test_float_enables_exponent_by_default() {
        let options = KeyOptions::builder()
            .number_type(NumberType::Float)
            .build()
            .unwrap();
        assert!(options.exponent());

        let options = KeyOptions::builder()
            .number_type(NumberType::Float)
            .exponent(false)
            .build()
            .unwrap();
        assert!(!options.exponent());
    }

    #[test]
    fn test_exponent_with_integers_conflicts() {
        let result = KeyOptions::builder().exponent(true).build();
        assert!(matches!(result, Err(Error::ConflictingOptions(_))));
    }

    #[test]
    fn test_locale_without_locale_mode_conflicts() {
        let result = KeyOptions::builder().locale_name("de_DE").build();
        assert!(matches!(result, Err(Error::ConflictingOptions(_))));
    }

    #[test]
    fn test_named_locale() {
        let options = KeyOptions::builder()
            .locale_aware(true)
            .locale_name("de_DE")
            .build()
            .unwrap();
        assert_eq!(options.locale().map(|l| l.code()), Some("de_DE"));
    }

    #[test]
    fn test_unknown_locale_fails_at_build() {
        let result = KeyOptions::builder()
            .locale_aware(true)
            .locale_name("xx_YY")
            .build();
        assert_eq!(result, Err(Error::UnknownLocale("xx_YY".to_string())));
    }

    #[test]
    fn test_number_type_spec() {
        let spec: NumberTypeSpec = "real".parse().unwrap();
        assert_eq!(spec.number_type, NumberType::Float);
        assert!(spec.signed);

        let spec: NumberTypeSpec = "version".parse().unwrap();
        assert_eq!(spec.number_type, NumberType::Integer);
        assert!(!spec.signed);

        assert!("complex".parse::<NumberTypeSpec>().is_err());

        let options = KeyOptions::builder()
            .number_type_spec("r".parse().unwrap())
            .build()
            .unwrap();
        assert!(options.signed());
        assert_eq!(options.number_type(), NumberType::Float);
    }
}

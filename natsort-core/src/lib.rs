//! Natural sort keys and numeric range filtering
//!
//! This crate orders strings that embed numbers by the value of those
//! numbers instead of their characters, so `file2` sorts before `file10`.
//! Numeral runs are recognized across Unicode scripts, optionally with
//! signs, decimal points, exponents and locale grouping separators.
//!
//! # Architecture
//!
//! - **Classification**: [`numeral`] maps code points to their numeric value
//! - **Scanning**: [`scan`] splits a string into text and number segments
//! - **Keys**: [`key`] builds comparable [`SortKey`]s, optionally per path
//!   component
//! - **Filtering**: [`filter`] keeps or drops strings by their embedded
//!   numbers
//!
//! # Example
//!
//! ```rust
//! use natsort_core::{natsorted, FilterSpec, KeyOptions};
//!
//! let options = KeyOptions::default();
//! let files = ["img12.png", "img10.png", "IMG2.png", "img1.png"];
//! let sorted = natsorted(&files, &options, false);
//! assert_eq!(sorted, ["IMG2.png", "img1.png", "img10.png", "img12.png"]);
//!
//! let filter = FilterSpec::builder().keep(5.0, 11.0).build().unwrap();
//! assert_eq!(filter.apply(sorted), ["img10.png"]);
//! ```

pub mod error;
pub mod filter;
pub mod key;
pub mod locale;
pub mod number;
pub mod numeral;
pub mod options;
pub mod path;
pub mod scan;
pub mod sort;

pub use error::{Error, Result};
pub use filter::{
    check_intervals, check_values, keep, keep_entry_range, keep_entry_value, FilterSpec, Interval,
};
pub use key::{tokenize, Keyer, SortKey, Token};
pub use locale::{parse_localized, Locale};
pub use number::Number;
pub use numeral::{classify, NumeralClass};
pub use options::{CaseMode, KeyOptions, KeyOptionsBuilder, NumberType, NumberTypeSpec};
pub use scan::{extract_numbers, NumberFormat};
pub use sort::{index_natsorted, natcmp, natsort, natsort_key, natsorted};

#[cfg(feature = "parallel")]
pub use sort::par_natsort;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_exports() {
        let options = KeyOptions::default();
        let key: SortKey = tokenize("a1", &options);
        assert_eq!(key.len(), 2);
        assert_eq!(classify('5'), NumeralClass::Decimal(5));
        assert!(Interval::new(1.0, 2.0).is_ok());
    }

    #[test]
    fn test_sort_then_filter() {
        let entries = ["x100", "x5", "x20"];
        let sorted = natsorted(&entries, &KeyOptions::default(), false);
        let kept = FilterSpec::builder()
            .keep(10.0, 100.0)
            .build()
            .unwrap()
            .apply(sorted);
        assert_eq!(kept, ["x20", "x100"]);
    }
}

//! Numeric range filtering
//!
//! Decides whether a string is kept based on the numbers embedded in it.
//! Intervals are validated when the filter is built, so a bad bound fails
//! before any string is looked at.

use crate::error::{Error, Result};
use crate::number::Number;
use crate::scan::{extract_numbers, NumberFormat};

/// Inclusive numeric interval with `low < high`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    low: f64,
    high: f64,
}

impl Interval {
    /// Create an interval; fails unless `low < high` and both are finite
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(Error::NonFiniteInterval { low, high });
        }
        if low >= high {
            return Err(Error::InvalidInterval { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Bounds as a `(low, high)` pair
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.low, self.high)
    }

    /// Whether `value` lies within the interval, bounds included
    ///
    /// Compared exactly, so integers beyond `f64` precision do not round
    /// onto a bound.
    pub fn contains(&self, value: &Number) -> bool {
        // Bounds are finite, so they are valid reals
        let (low, high) = (Number::Real(self.low), Number::Real(self.high));
        low <= *value && *value <= high
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = Error;

    fn try_from((low, high): (f64, f64)) -> Result<Self> {
        Interval::new(low, high)
    }
}

/// Validate a list of `(low, high)` pairs
///
/// Returns the first invalid pair as an error.
pub fn check_intervals(pairs: &[(f64, f64)]) -> Result<Vec<Interval>> {
    pairs.iter().map(|&pair| Interval::try_from(pair)).collect()
}

/// Validate a list of exact values to exclude
///
/// Returns the first NaN or infinite value as an error.
pub fn check_values(values: &[f64]) -> Result<Vec<Number>> {
    values
        .iter()
        .map(|&value| {
            if value.is_finite() {
                Number::from_f64(value).ok_or(Error::NonFiniteValue(value))
            } else {
                Err(Error::NonFiniteValue(value))
            }
        })
        .collect()
}

/// True if any number in `input` falls within any of `intervals`
pub fn keep_entry_range(input: &str, intervals: &[Interval], format: &NumberFormat) -> bool {
    extract_numbers(input, format)
        .iter()
        .any(|value| intervals.iter().any(|interval| interval.contains(value)))
}

/// True if no number in `input` equals any of `values`
pub fn keep_entry_value(input: &str, values: &[Number], format: &NumberFormat) -> bool {
    !extract_numbers(input, format)
        .iter()
        .any(|value| values.contains(value))
}

/// Decide whether `input` passes all filter stages
///
/// * `keep_intervals`: when non-empty, some number must lie in some interval
/// * `exclude_intervals`: no number may lie in any interval
/// * `exclude_values`: no number may equal any value
pub fn keep(
    input: &str,
    keep_intervals: &[Interval],
    exclude_intervals: &[Interval],
    exclude_values: &[Number],
    format: &NumberFormat,
) -> bool {
    if keep_intervals.is_empty() && exclude_intervals.is_empty() && exclude_values.is_empty() {
        return true;
    }

    let numbers = extract_numbers(input, format);
    let in_any = |intervals: &[Interval]| {
        numbers
            .iter()
            .any(|value| intervals.iter().any(|interval| interval.contains(value)))
    };

    if !keep_intervals.is_empty() && !in_any(keep_intervals) {
        return false;
    }
    if in_any(exclude_intervals) {
        return false;
    }
    !numbers.iter().any(|value| exclude_values.contains(value))
}

/// Immutable filter configuration for one batch
#[derive(Debug, Clone, Default)]
pub struct FilterSpec {
    keep_intervals: Vec<Interval>,
    exclude_intervals: Vec<Interval>,
    exclude_values: Vec<Number>,
    format: NumberFormat,
}

impl FilterSpec {
    /// Create a filter from already validated stages
    ///
    /// See [`check_intervals`] and [`check_values`].
    pub fn new(
        keep_intervals: Vec<Interval>,
        exclude_intervals: Vec<Interval>,
        exclude_values: Vec<Number>,
        format: NumberFormat,
    ) -> Self {
        Self {
            keep_intervals,
            exclude_intervals,
            exclude_values,
            format,
        }
    }

    /// Create a filter builder
    pub fn builder() -> FilterSpecBuilder {
        FilterSpecBuilder::default()
    }

    /// Whether the filter has no stages
    pub fn is_empty(&self) -> bool {
        self.keep_intervals.is_empty()
            && self.exclude_intervals.is_empty()
            && self.exclude_values.is_empty()
    }

    pub fn keep_intervals(&self) -> &[Interval] {
        &self.keep_intervals
    }

    pub fn exclude_intervals(&self) -> &[Interval] {
        &self.exclude_intervals
    }

    pub fn exclude_values(&self) -> &[Number] {
        &self.exclude_values
    }

    /// Decide whether `input` is kept
    pub fn keep(&self, input: &str) -> bool {
        keep(
            input,
            &self.keep_intervals,
            &self.exclude_intervals,
            &self.exclude_values,
            &self.format,
        )
    }

    /// Keep the matching items, preserving their order
    pub fn apply<T: AsRef<str>>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .filter(|item| self.keep(item.as_ref()))
            .collect()
    }
}

/// Builder collecting raw bounds; validation happens in [`build`](Self::build)
#[derive(Debug, Default)]
pub struct FilterSpecBuilder {
    keep: Vec<(f64, f64)>,
    exclude: Vec<(f64, f64)>,
    exclude_values: Vec<f64>,
    format: NumberFormat,
}

impl FilterSpecBuilder {
    /// Add a keep interval
    pub fn keep(mut self, low: f64, high: f64) -> Self {
        self.keep.push((low, high));
        self
    }

    /// Add an exclude interval
    pub fn exclude(mut self, low: f64, high: f64) -> Self {
        self.exclude.push((low, high));
        self
    }

    /// Add an exact value to exclude
    pub fn exclude_value(mut self, value: f64) -> Self {
        self.exclude_values.push(value);
        self
    }

    /// Number format used to find numbers in inputs
    pub fn number_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    /// Validate all intervals and values and build the filter
    pub fn build(self) -> Result<FilterSpec> {
        let keep = check_intervals(&self.keep)?;
        let exclude = check_intervals(&self.exclude)?;
        let values = check_values(&self.exclude_values)?;
        Ok(FilterSpec::new(keep, exclude, values, self.format))
    }
}

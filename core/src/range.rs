//! Constraints applied to already-converted values.
//!
//! A [`Range`] inspects a typed value and either accepts it or returns a
//! reason. Ranges are attached to a type through a [`RangeSet`], which keeps
//! them in registration order, deep-clones them with the owning type, and
//! stops at the first range that rejects a value.
//!
//! # Examples
//!
//! ```
//! use argmap_core::{Between, Positive, Range, RangeSet};
//!
//! let ranges = RangeSet::new().with(Positive).with(Between::new(1_i64, 64));
//! assert!(ranges.check(&8).is_ok());
//! assert!(ranges.check(&0).is_err());
//! assert_eq!(ranges.title().as_deref(), Some("positive, [1..64]"));
//! assert_eq!(Between::new(1_i64, 64).title(), "[1..64]");
//! ```

use std::fmt;

use regex::Regex;

use crate::error::{ArgumentError, Result, ValidationError};

/// Constraint over a typed value.
///
/// Implementors only need [`check`](Range::check) and
/// [`title`](Range::title); cloning is provided for every `Clone` range.
pub trait Range<T>: RangeClone<T> + fmt::Debug + Send + Sync {
    /// Accepts the value or returns a human-readable reason.
    fn check(&self, value: &T) -> std::result::Result<(), String>;

    /// Short description appended to the owning type's title.
    fn title(&self) -> String;
}

/// Deep-copy support for boxed ranges.
pub trait RangeClone<T> {
    fn clone_box(&self) -> Box<dyn Range<T>>;
}

impl<T, R> RangeClone<T> for R
where
    R: Range<T> + Clone + 'static,
{
    fn clone_box(&self) -> Box<dyn Range<T>> {
        Box::new(self.clone())
    }
}

impl<T> Clone for Box<dyn Range<T>> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

/// Ordered ranges attached to one type. All must pass.
pub struct RangeSet<T> {
    ranges: Vec<Box<dyn Range<T>>>,
}

impl<T> RangeSet<T> {
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Appends a range and returns the set (builder style).
    pub fn with(mut self, range: impl Range<T> + 'static) -> Self {
        self.push(range);
        self
    }

    pub fn push(&mut self, range: impl Range<T> + 'static) {
        self.ranges.push(Box::new(range));
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Range<T>> {
        self.ranges.iter().map(|r| &**r)
    }

    /// Runs every range in order and reports the first rejection.
    pub fn check(&self, value: &T) -> std::result::Result<(), ValidationError> {
        for range in &self.ranges {
            range.check(value).map_err(|reason| ValidationError::Range {
                range: range.title(),
                reason,
            })?;
        }
        Ok(())
    }

    /// Comma-joined titles, or `None` when the set is empty.
    pub fn title(&self) -> Option<String> {
        if self.ranges.is_empty() {
            return None;
        }
        Some(
            self.ranges
                .iter()
                .map(|r| r.title())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

impl<T> Default for RangeSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for RangeSet<T> {
    fn clone(&self) -> Self {
        Self {
            ranges: self.ranges.clone(),
        }
    }
}

impl<T> fmt::Debug for RangeSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.ranges).finish()
    }
}

impl<T> From<Vec<Box<dyn Range<T>>>> for RangeSet<T> {
    fn from(ranges: Vec<Box<dyn Range<T>>>) -> Self {
        Self { ranges }
    }
}

/// Numeric values with a zero, used by sign-based ranges.
pub trait Numeric: PartialOrd + fmt::Display + Copy + Send + Sync + fmt::Debug + 'static {
    const ZERO: Self;
}

impl Numeric for i64 {
    const ZERO: Self = 0;
}

impl Numeric for f64 {
    const ZERO: Self = 0.0;
}

/// Strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Positive;

impl<T: Numeric> Range<T> for Positive {
    fn check(&self, value: &T) -> std::result::Result<(), String> {
        if *value > T::ZERO {
            Ok(())
        } else {
            Err(format!("{value} is not positive"))
        }
    }

    fn title(&self) -> String {
        "positive".to_string()
    }
}

/// Anything but zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl<T: Numeric> Range<T> for NonZero {
    fn check(&self, value: &T) -> std::result::Result<(), String> {
        if *value != T::ZERO {
            Ok(())
        } else {
            Err("the value must not be zero".to_string())
        }
    }

    fn title(&self) -> String {
        "non-zero".to_string()
    }
}

/// Inclusive bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T> Between<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T> Range<T> for Between<T>
where
    T: PartialOrd + fmt::Display + fmt::Debug + Clone + Send + Sync + 'static,
{
    fn check(&self, value: &T) -> std::result::Result<(), String> {
        if *value >= self.min && *value <= self.max {
            Ok(())
        } else {
            Err(format!(
                "{value} is not between {} and {}",
                self.min, self.max
            ))
        }
    }

    fn title(&self) -> String {
        format!("[{}..{}]", self.min, self.max)
    }
}

/// Comparison used by [`Compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Strictly greater than the bound.
    Greater,
    /// Greater than or equal to the bound.
    GreaterEqual,
    /// Strictly less than the bound.
    Less,
    /// Less than or equal to the bound.
    LessEqual,
}

impl Comparison {
    fn symbol(self) -> &'static str {
        match self {
            Comparison::Greater => ">",
            Comparison::GreaterEqual => ">=",
            Comparison::Less => "<",
            Comparison::LessEqual => "<=",
        }
    }
}

/// One-sided bound against a fixed value.
#[derive(Debug, Clone, PartialEq)]
pub struct Compare<T> {
    op: Comparison,
    bound: T,
}

impl<T> Compare<T> {
    pub fn greater(bound: T) -> Self {
        Self {
            op: Comparison::Greater,
            bound,
        }
    }

    pub fn greater_equal(bound: T) -> Self {
        Self {
            op: Comparison::GreaterEqual,
            bound,
        }
    }

    pub fn less(bound: T) -> Self {
        Self {
            op: Comparison::Less,
            bound,
        }
    }

    pub fn less_equal(bound: T) -> Self {
        Self {
            op: Comparison::LessEqual,
            bound,
        }
    }
}

impl<T> Range<T> for Compare<T>
where
    T: PartialOrd + fmt::Display + fmt::Debug + Clone + Send + Sync + 'static,
{
    fn check(&self, value: &T) -> std::result::Result<(), String> {
        let ok = match self.op {
            Comparison::Greater => *value > self.bound,
            Comparison::GreaterEqual => *value >= self.bound,
            Comparison::Less => *value < self.bound,
            Comparison::LessEqual => *value <= self.bound,
        };
        if ok {
            Ok(())
        } else {
            Err(format!(
                "{value} is not {} {}",
                self.op.symbol(),
                self.bound
            ))
        }
    }

    fn title(&self) -> String {
        format!("{}{}", self.op.symbol(), self.bound)
    }
}

/// The value must be one of the listed values.
#[derive(Debug, Clone, PartialEq)]
pub struct IncludingSet<T> {
    allowed: Vec<T>,
}

impl<T> IncludingSet<T> {
    pub fn new<I: IntoIterator<Item = T>>(allowed: I) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }
}

impl<T> Range<T> for IncludingSet<T>
where
    T: PartialEq + fmt::Display + fmt::Debug + Clone + Send + Sync + 'static,
{
    fn check(&self, value: &T) -> std::result::Result<(), String> {
        if self.allowed.contains(value) {
            Ok(())
        } else {
            Err(format!("'{value}' is not one of {}", join_set(&self.allowed)))
        }
    }

    fn title(&self) -> String {
        join_set(&self.allowed)
    }
}

/// The value must not be one of the listed values.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcludingSet<T> {
    rejected: Vec<T>,
}

impl<T> ExcludingSet<T> {
    pub fn new<I: IntoIterator<Item = T>>(rejected: I) -> Self {
        Self {
            rejected: rejected.into_iter().collect(),
        }
    }
}

impl<T> Range<T> for ExcludingSet<T>
where
    T: PartialEq + fmt::Display + fmt::Debug + Clone + Send + Sync + 'static,
{
    fn check(&self, value: &T) -> std::result::Result<(), String> {
        if self.rejected.contains(value) {
            Err(format!("'{value}' is not allowed"))
        } else {
            Ok(())
        }
    }

    fn title(&self) -> String {
        format!("not {}", join_set(&self.rejected))
    }
}

fn join_set<T: fmt::Display>(values: &[T]) -> String {
    let items = values.iter().map(|v| v.to_string()).collect::<Vec<_>>();
    format!("{{{}}}", items.join("|"))
}

/// Values with a length: text (in characters) and sequences.
pub trait Measured {
    fn measure(&self) -> usize;
}

impl Measured for String {
    fn measure(&self) -> usize {
        self.chars().count()
    }
}

impl<T> Measured for Vec<T> {
    fn measure(&self) -> usize {
        self.len()
    }
}

/// Length bounds for text or sequences. `max = None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length {
    min: usize,
    max: Option<usize>,
}

impl Length {
    pub fn new(min: usize, max: Option<usize>) -> Self {
        Self { min, max }
    }

    pub fn between(min: usize, max: usize) -> Self {
        Self::new(min, Some(max))
    }

    pub fn at_least(min: usize) -> Self {
        Self::new(min, None)
    }
}

impl<T: Measured> Range<T> for Length {
    fn check(&self, value: &T) -> std::result::Result<(), String> {
        let len = value.measure();
        let too_long = self.max.is_some_and(|max| len > max);
        if len < self.min || too_long {
            Err(format!("has a length of {len}"))
        } else {
            Ok(())
        }
    }

    fn title(&self) -> String {
        match self.max {
            Some(max) => format!("length [{}..{}]", self.min, max),
            None => format!("length >={}", self.min),
        }
    }
}

/// Text must match a regular expression.
#[derive(Debug, Clone)]
pub struct Matches {
    pattern: Regex,
}

impl Matches {
    /// Compiles `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::InvalidArgument`] if the pattern does not
    /// compile.
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| ArgumentError::InvalidArgument(format!("bad pattern: {e}")))?;
        Ok(Self { pattern })
    }
}

impl Range<String> for Matches {
    fn check(&self, value: &String) -> std::result::Result<(), String> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(format!("'{value}' does not match /{}/", self.pattern))
        }
    }

    fn title(&self) -> String {
        format!("matching /{}/", self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_failing_range_is_reported() {
        let ranges = RangeSet::new()
            .with(Compare::greater_equal(0_i64))
            .with(Between::new(10_i64, 20))
            .with(NonZero);

        let err = ranges.check(&5).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Range {
                range: "[10..20]".to_string(),
                reason: "5 is not between 10 and 20".to_string(),
            }
        );
        assert!(ranges.check(&15).is_ok());
    }

    #[test]
    fn test_empty_set_accepts_everything() {
        let ranges: RangeSet<i64> = RangeSet::default();
        assert!(ranges.check(&i64::MIN).is_ok());
        assert_eq!(ranges.title(), None);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = RangeSet::new().with(Positive);
        let mut copy = original.clone();
        copy.push(Compare::less(3.0_f64));
        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
        assert!(original.check(&5.0).is_ok());
        assert!(copy.check(&5.0).is_err());
    }

    #[test]
    fn test_sets() {
        let including = IncludingSet::new(["BPSK".to_string(), "QPSK".to_string()]);
        assert!(including.check(&"QPSK".to_string()).is_ok());
        assert!(including.check(&"PSK".to_string()).is_err());
        assert_eq!(Range::<String>::title(&including), "{BPSK|QPSK}");

        let excluding = ExcludingSet::new([0_i64, 1]);
        assert!(excluding.check(&1).is_err());
        assert!(excluding.check(&2).is_ok());
    }

    #[test]
    fn test_length_counts_chars_and_elements() {
        let len = Length::between(1, 3);
        assert!(len.check(&"héé".to_string()).is_ok());
        assert!(len.check(&String::new()).is_err());
        assert!(len.check(&vec![1, 2, 3, 4]).is_err());
        assert!(Length::at_least(2).check(&vec![0; 100]).is_ok());
        assert_eq!(Range::<Vec<i64>>::title(&Length::at_least(2)), "length >=2");
    }

    #[test]
    fn test_matches() {
        let range = Matches::new("^[a-z]+$").unwrap();
        assert!(range.check(&"abc".to_string()).is_ok());
        assert!(range.check(&"ab1".to_string()).is_err());
        assert!(matches!(
            Matches::new("("),
            Err(ArgumentError::InvalidArgument(_))
        ));
    }
}

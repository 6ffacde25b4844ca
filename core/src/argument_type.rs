//! Argument type contracts and the range decorator.
//!
//! [`TypedArgument`] is the contract implemented by concrete types: it checks
//! a raw string, converts accepted strings to a typed `Output`, and describes
//! itself. [`ArgumentType`] is its object-safe counterpart, implemented for
//! every typed argument, so registries can own heterogeneous types behind a
//! `Box<dyn ArgumentType>` and still deep-clone them.

use std::fmt;

use crate::error::{Result, ValidationError};
use crate::range::{Range, RangeSet};
use crate::value::Value;

/// Separator between a type's own title and the titles of its ranges.
pub const TITLE_DESCRIPTION_SEPARATOR: &str = " ";

/// Validation and conversion for a single argument value.
///
/// `check` must not have side effects and must classify every input.
/// `convert` is only meaningful on input that `check` accepted; it reports
/// an [`ArgumentError::Conversion`](crate::ArgumentError::Conversion) rather
/// than panicking when called on anything else.
pub trait TypedArgument: Clone + fmt::Debug + Send + Sync + 'static {
    /// Converted value type.
    type Output: Clone + fmt::Debug + Into<Value> + Send + Sync + 'static;

    /// Accepts `raw` or explains why it was rejected.
    fn check(&self, raw: &str) -> std::result::Result<(), ValidationError>;

    /// Converts a previously checked string.
    fn convert(&self, raw: &str) -> Result<Self::Output>;

    /// Serializes a value back into a string this type accepts.
    fn format(&self, value: &Self::Output) -> String;

    /// Full description, including range descriptions.
    fn title(&self) -> String;

    /// Description without range details.
    fn short_title(&self) -> String {
        self.title()
    }
}

/// Object-safe view of an argument type, as stored by
/// [`Definitions`](crate::Definitions).
pub trait ArgumentType: fmt::Debug + Send + Sync {
    /// Accepts `raw` or explains why it was rejected.
    fn check(&self, raw: &str) -> std::result::Result<(), ValidationError>;

    /// Converts a previously checked string to a type-erased [`Value`].
    fn value(&self, raw: &str) -> Result<Value>;

    /// Full description, including range descriptions.
    fn title(&self) -> String;

    /// Description without range details.
    fn short_title(&self) -> String;

    /// Deep copy, including every owned range and element type.
    fn clone_box(&self) -> Box<dyn ArgumentType>;
}

impl<A: TypedArgument> ArgumentType for A {
    fn check(&self, raw: &str) -> std::result::Result<(), ValidationError> {
        TypedArgument::check(self, raw)
    }

    fn value(&self, raw: &str) -> Result<Value> {
        self.convert(raw).map(Into::into)
    }

    fn title(&self) -> String {
        TypedArgument::title(self)
    }

    fn short_title(&self) -> String {
        TypedArgument::short_title(self)
    }

    fn clone_box(&self) -> Box<dyn ArgumentType> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn ArgumentType> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

/// Appends range titles to a type title.
pub(crate) fn titled<T>(title: String, ranges: &RangeSet<T>) -> String {
    match ranges.title() {
        Some(ranges) => format!("{title}{TITLE_DESCRIPTION_SEPARATOR}{ranges}"),
        None => title,
    }
}

/// A typed argument constrained by zero or more ranges.
///
/// Checking runs in two stages: the base type's own check, then every range
/// against the converted value in registration order. A string rejected by
/// the base type never reaches the ranges.
///
/// # Examples
///
/// ```
/// use argmap_core::{Between, Integer, Limited, TypedArgument, ValidationError};
///
/// let block_size = Limited::new(Integer).with_range(Between::new(1, 64));
/// assert!(block_size.check("32").is_ok());
/// assert!(matches!(block_size.check("0"), Err(ValidationError::Range { .. })));
/// assert!(matches!(block_size.check("abc"), Err(ValidationError::Rule(_))));
/// assert_eq!(block_size.title(), "integer [1..64]");
/// ```
#[derive(Debug, Clone)]
pub struct Limited<A: TypedArgument> {
    base: A,
    ranges: RangeSet<A::Output>,
}

impl<A: TypedArgument> Limited<A> {
    pub fn new(base: A) -> Self {
        Self {
            base,
            ranges: RangeSet::new(),
        }
    }

    /// Attaches one more range. Ranges run in the order they are added.
    pub fn with_range(mut self, range: impl Range<A::Output> + 'static) -> Self {
        self.ranges.push(range);
        self
    }

    pub fn with_ranges(base: A, ranges: RangeSet<A::Output>) -> Self {
        Self { base, ranges }
    }

    pub fn base(&self) -> &A {
        &self.base
    }

    pub fn ranges(&self) -> &RangeSet<A::Output> {
        &self.ranges
    }
}

impl<A: TypedArgument> TypedArgument for Limited<A> {
    type Output = A::Output;

    fn check(&self, raw: &str) -> std::result::Result<(), ValidationError> {
        TypedArgument::check(&self.base, raw)?;
        if self.ranges.is_empty() {
            return Ok(());
        }
        let value = self
            .base
            .convert(raw)
            .map_err(|e| ValidationError::Rule(e.to_string()))?;
        self.ranges.check(&value)
    }

    fn convert(&self, raw: &str) -> Result<Self::Output> {
        self.base.convert(raw)
    }

    fn format(&self, value: &Self::Output) -> String {
        self.base.format(value)
    }

    fn title(&self) -> String {
        titled(TypedArgument::title(&self.base), &self.ranges)
    }

    fn short_title(&self) -> String {
        TypedArgument::short_title(&self.base)
    }
}

//! Lists and two-level lists of typed elements.
//!
//! A [`ListType`] treats one delimited string as a sequence of values of a
//! single element type. The element type can itself be a list built with a
//! different splitter, which gives two-level lists:
//!
//! ```
//! use argmap_core::{DelimitedSplitter, Integer, RangeSet, TypedArgument, list_2d};
//!
//! let matrix = list_2d(
//!     Integer,
//!     DelimitedSplitter::semicolon(),
//!     RangeSet::new(),
//!     DelimitedSplitter::comma(),
//!     RangeSet::new(),
//! );
//! assert!(matrix.check("1,2;3,4,5").is_ok());
//! assert_eq!(matrix.convert("1,2;3,4,5").unwrap(), vec![vec![1, 2], vec![3, 4, 5]]);
//! assert_eq!(matrix.title(), "list of (list of (integer))");
//! ```

use crate::argument_type::{TypedArgument, titled};
use crate::error::{ArgumentError, Result, ValidationError};
use crate::range::{Range, RangeSet};
use crate::splitter::{DelimitedSplitter, Splitter};

/// Sequence of `E` values separated according to `S`.
///
/// Checking stops at the first element that fails and reports its index.
/// Ranges attached to the list itself see the whole converted sequence and
/// only run once every element passed.
#[derive(Debug, Clone)]
pub struct ListType<E: TypedArgument, S: Splitter = DelimitedSplitter> {
    element: E,
    splitter: S,
    ranges: RangeSet<Vec<E::Output>>,
}

impl<E: TypedArgument, S: Splitter> ListType<E, S> {
    pub fn new(element: E, splitter: S) -> Self {
        Self {
            element,
            splitter,
            ranges: RangeSet::new(),
        }
    }

    /// Attaches a range over the whole converted sequence.
    pub fn with_range(mut self, range: impl Range<Vec<E::Output>> + 'static) -> Self {
        self.ranges.push(range);
        self
    }

    /// Replaces the sequence-level ranges.
    pub fn with_ranges(mut self, ranges: RangeSet<Vec<E::Output>>) -> Self {
        self.ranges = ranges;
        self
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn splitter(&self) -> &S {
        &self.splitter
    }

    pub fn ranges(&self) -> &RangeSet<Vec<E::Output>> {
        &self.ranges
    }

    /// Splits `raw` with the configured splitter.
    pub fn split(&self, raw: &str) -> Vec<String> {
        self.splitter.split(raw)
    }

    fn convert_parts(&self, parts: &[String]) -> Result<Vec<E::Output>> {
        parts
            .iter()
            .enumerate()
            .map(|(index, part)| {
                self.element.convert(part).map_err(|e| {
                    ArgumentError::conversion(part, format!("element {index}: {e}"))
                })
            })
            .collect()
    }
}

impl<E: TypedArgument, S: Splitter> TypedArgument for ListType<E, S> {
    type Output = Vec<E::Output>;

    fn check(&self, raw: &str) -> std::result::Result<(), ValidationError> {
        let parts = self.split(raw);

        for (index, part) in parts.iter().enumerate() {
            self.element
                .check(part)
                .map_err(|source| ValidationError::Element {
                    index,
                    value: part.clone(),
                    source: Box::new(source),
                })?;
        }

        if self.ranges.is_empty() {
            return Ok(());
        }
        let values = self
            .convert_parts(&parts)
            .map_err(|e| ValidationError::Rule(e.to_string()))?;
        self.ranges.check(&values)
    }

    fn convert(&self, raw: &str) -> Result<Self::Output> {
        self.convert_parts(&self.split(raw))
    }

    /// Joins formatted elements with the splitter.
    ///
    /// An empty list and a list holding one element that formats to `""`
    /// both produce `""`, which converts back to an empty list. For a
    /// two-level list this means `[[]]` does not round-trip.
    fn format(&self, value: &Self::Output) -> String {
        let parts = value
            .iter()
            .map(|v| self.element.format(v))
            .collect::<Vec<_>>();
        self.splitter.join(&parts)
    }

    fn title(&self) -> String {
        titled(format!("list of ({})", self.element.title()), &self.ranges)
    }

    fn short_title(&self) -> String {
        format!("list of {}", self.element.short_title())
    }
}

/// Comma-separated list of `element`.
///
/// # Examples
///
/// ```
/// use argmap_core::{Integer, TypedArgument, list};
///
/// let ints = list(Integer);
/// assert_eq!(ints.convert("1, 2, 3").unwrap(), vec![1, 2, 3]);
/// assert_eq!(ints.convert("").unwrap(), Vec::<i64>::new());
/// ```
pub fn list<E: TypedArgument>(element: E) -> ListType<E> {
    ListType::new(element, DelimitedSplitter::comma())
}

/// Two-level list: `outer` separates rows, `inner` separates the elements of
/// each row.
///
/// The two splitters must not share separators, otherwise rows cannot be
/// told apart; this is left to the caller.
pub fn list_2d<E, S1, S2>(
    element: E,
    outer: S1,
    outer_ranges: RangeSet<Vec<Vec<E::Output>>>,
    inner: S2,
    inner_ranges: RangeSet<Vec<E::Output>>,
) -> ListType<ListType<E, S2>, S1>
where
    E: TypedArgument,
    S1: Splitter,
    S2: Splitter,
{
    let row = ListType::new(element, inner).with_ranges(inner_ranges);
    ListType::new(row, outer).with_ranges(outer_ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Between, Integer, Length, Limited, Positive, Text};

    fn matrix() -> ListType<ListType<Integer>> {
        list_2d(
            Integer,
            DelimitedSplitter::semicolon(),
            RangeSet::new().with(Length::at_least(1)),
            DelimitedSplitter::comma(),
            RangeSet::new().with(Length::between(2, 3)),
        )
    }

    #[test]
    fn test_reports_first_failing_index() {
        let err = list(Integer).check("1,x,3").unwrap_err();
        match err {
            ValidationError::Element { index, value, .. } => {
                assert_eq!(index, 1);
                assert_eq!(value, "x");
            }
            other => panic!("expected element failure, got {other:?}"),
        }
    }

    #[test]
    fn test_short_circuits_after_first_failure() {
        let err = list(Integer).check("y,x").unwrap_err();
        assert_eq!(err.path(), vec![0]);
    }

    #[test]
    fn test_empty_string_is_empty_list() {
        let ints = list(Integer);
        assert!(ints.check("").is_ok());
        assert!(ints.convert("").unwrap().is_empty());
    }

    #[test]
    fn test_sequence_ranges_see_whole_list() {
        let ints = list(Integer).with_range(Length::between(1, 3));
        assert!(ints.check("1,2").is_ok());
        let err = ints.check("1,2,3,4").unwrap_err();
        assert!(matches!(err, ValidationError::Range { .. }));
        assert!(err.path().is_empty());
        assert!(ints.check("").is_err());
    }

    #[test]
    fn test_element_ranges_are_wrapped_with_index() {
        let ints = list(Limited::new(Integer).with_range(Positive));
        let err = ints.check("3,0").unwrap_err();
        assert_eq!(err.path(), vec![1]);
        assert!(matches!(err.innermost(), ValidationError::Range { .. }));
    }

    #[test]
    fn test_two_level_conversion() {
        let m = matrix();
        assert_eq!(
            m.convert("1,2;3,4,5").unwrap(),
            vec![vec![1, 2], vec![3, 4, 5]]
        );
        assert!(m.check("1,2;3,4,5").is_ok());
    }

    #[test]
    fn test_two_level_errors_locate_cell() {
        let m = matrix();
        let err = m.check("1,2;3,x").unwrap_err();
        assert_eq!(err.path(), vec![1, 1]);

        let err = m.check("1,2;3").unwrap_err();
        assert_eq!(err.path(), vec![1]);
        assert!(matches!(err.innermost(), ValidationError::Range { .. }));
    }

    #[test]
    fn test_titles() {
        let ints = list(Limited::new(Integer).with_range(Between::new(1, 8)))
            .with_range(Length::between(1, 4));
        assert_eq!(ints.title(), "list of (integer [1..8]) length [1..4]");
        assert_eq!(ints.short_title(), "list of integer");
        assert_eq!(list(Text).title(), "list of (text)");
    }

    #[test]
    fn test_format_round_trips() {
        let m = matrix();
        let value = vec![vec![1, 2], vec![3, 4, 5]];
        let raw = m.format(&value);
        assert_eq!(raw, "1,2;3,4,5");
        assert_eq!(m.convert(&raw).unwrap(), value);
    }

    #[test]
    fn test_clone_keeps_ranges() {
        let ints = list(Integer).with_range(Length::at_least(2));
        let copy = ints.clone();
        drop(ints);
        assert!(copy.check("1").is_err());
        assert!(copy.check("1,2").is_ok());
    }

    #[test]
    fn test_single_empty_row_formats_as_empty_list() {
        let rows = list_2d(
            Integer,
            DelimitedSplitter::semicolon(),
            RangeSet::new(),
            DelimitedSplitter::comma(),
            RangeSet::new(),
        );
        let raw = rows.format(&vec![Vec::new()]);
        assert_eq!(raw, "");
        assert_eq!(rows.convert(&raw).unwrap(), Vec::<Vec<i64>>::new());
    }
}

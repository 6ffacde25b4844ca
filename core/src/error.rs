//! Error types for argument registration, validation and conversion.
//!
//! Two layers are kept apart:
//!
//! - [`ValidationError`] describes why a raw string was rejected by an
//!   argument type. It is expected during normal parsing and is reported to
//!   the end user.
//! - [`ArgumentError`] covers everything else: malformed registrations,
//!   conversions of unchecked input, missing values, and validation failures
//!   attributed to a specific [`Tag`].

use thiserror::Error;

use crate::Tag;

/// Reason a raw string was rejected by an argument type.
///
/// Composite types wrap the failure of their elements with positional
/// context instead of replacing it, so the innermost reason is always
/// reachable through [`std::error::Error::source`].
///
/// # Examples
///
/// ```
/// use argmap_core::{Integer, TypedArgument, ValidationError, list};
///
/// let err = list(Integer).check("1,x,3").unwrap_err();
/// assert!(matches!(err, ValidationError::Element { index: 1, .. }));
/// assert_eq!(err.path(), vec![1]);
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The string does not satisfy the domain rules of the base type.
    #[error("{0}")]
    Rule(String),

    /// The converted value was rejected by an attached range.
    #[error("{reason} (expected {range})")]
    Range {
        /// Title of the failing range.
        range: String,
        /// Reason reported by the range.
        reason: String,
    },

    /// An element of a list was rejected.
    #[error("has the element {index} ({value}) not respecting the rules: {source}")]
    Element {
        /// Zero-based position of the element in the split sequence.
        index: usize,
        /// Raw text of the element.
        value: String,
        /// Failure reported by the element type.
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Returns the element indices leading to the innermost failure, outer
    /// list first. Empty when the failure is not inside a list element.
    pub fn path(&self) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = self;
        while let ValidationError::Element { index, source, .. } = current {
            path.push(*index);
            current = source;
        }
        path
    }

    /// Returns the innermost failure, skipping every element wrapper.
    pub fn innermost(&self) -> &ValidationError {
        match self {
            ValidationError::Element { source, .. } => source.innermost(),
            other => other,
        }
    }
}

/// Errors raised by registries, accessors and conversions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    /// Malformed registration call (empty tag, empty prefix or title,
    /// unusable splitter configuration, bad range pattern).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Conversion was attempted on input that the type cannot represent.
    #[error("'{value}' could not be converted: {reason}")]
    Conversion {
        /// Raw text handed to the conversion.
        value: String,
        /// Why the conversion failed.
        reason: String,
    },

    /// No raw value is stored for the tag.
    #[error("no value has been given for {0}")]
    KeyNotFound(Tag),

    /// A value is stored for a tag that has no definition.
    #[error("no definition is registered for {0}")]
    UnknownTag(Tag),

    /// A stored raw value was rejected by the definition's type.
    #[error("invalid value for {tag}: {source}")]
    Validation {
        /// Tag of the offending value.
        tag: Tag,
        /// Rejection reported by the argument type.
        source: ValidationError,
    },
}

impl ArgumentError {
    pub(crate) fn conversion(value: &str, reason: impl ToString) -> Self {
        ArgumentError::Conversion {
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience alias for results with [`ArgumentError`].
pub type Result<T> = std::result::Result<T, ArgumentError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    fn nested() -> ValidationError {
        ValidationError::Element {
            index: 1,
            value: "3,x".into(),
            source: Box::new(ValidationError::Element {
                index: 1,
                value: "x".into(),
                source: Box::new(ValidationError::Rule("'x' is not an integer".into())),
            }),
        }
    }

    #[test]
    fn test_path_follows_nested_elements() {
        assert_eq!(nested().path(), vec![1, 1]);
        assert!(ValidationError::Rule("bad".into()).path().is_empty());
    }

    #[test]
    fn test_innermost_skips_wrappers() {
        assert_eq!(
            nested().innermost(),
            &ValidationError::Rule("'x' is not an integer".into())
        );
    }

    #[test]
    fn test_element_keeps_source_chain() {
        let err = nested();
        let source = err.source().expect("element failures carry a source");
        assert!(source.to_string().contains("has the element 1 (x)"));
        assert!(err.to_string().ends_with("'x' is not an integer"));
    }

    #[test]
    fn test_range_display_names_range() {
        let err = ValidationError::Range {
            range: "[1..10]".into(),
            reason: "0 is out of bounds".into(),
        };
        assert_eq!(err.to_string(), "0 is out of bounds (expected [1..10])");
    }
}

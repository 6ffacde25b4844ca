//! Typed argument definitions, validation, and value maps.
//!
//! This crate is the validation and conversion engine behind a command-line
//! parser. It does not tokenize `argv` or render help text; it defines what
//! a single argument's value may look like and stores what was supplied.
//!
//! - [`TypedArgument`] / [`ArgumentType`] — check a raw string and convert it
//!   to a typed value. Scalar types: [`Integer`], [`Real`], [`Text`],
//!   [`Boolean`].
//! - [`Range`] — a constraint on the converted value, attached through
//!   [`Limited`] or a list's own [`RangeSet`].
//! - [`ListType`] — a delimited sequence of elements, split by a pluggable
//!   [`Splitter`]; nest two of them with [`list_2d`].
//! - [`Definitions`] — owning registry from [`Tag`] to type and
//!   documentation.
//! - [`Values`] — raw strings supplied per tag, with numeric accessors.
//! - [`Groups`] — prefix to section title, for organizing help output.
//!
//! # Example
//!
//! ```
//! use argmap_core::{
//!     Between, DelimitedSplitter, Definitions, Groups, Integer, Length, Limited, RangeSet,
//!     Tag, Values, list, list_2d,
//! };
//!
//! let mut defs = Definitions::new();
//! defs.add_type(
//!     ["--sim-block-size", "-K"],
//!     Limited::new(Integer).with_range(Between::new(1, 64)),
//!     "Number of information bits.",
//! )
//! .unwrap();
//! defs.add_type(
//!     ["--sim-snr-list"],
//!     list(Integer).with_range(Length::between(1, 8)),
//!     "SNR points to simulate.",
//! )
//! .unwrap();
//! defs.add_type(
//!     ["--enc-matrix"],
//!     list_2d(
//!         Integer,
//!         DelimitedSplitter::semicolon(),
//!         RangeSet::new(),
//!         DelimitedSplitter::comma(),
//!         RangeSet::new(),
//!     ),
//!     "Generator matrix rows.",
//! )
//! .unwrap();
//!
//! let mut values = Values::new();
//! values.add(["--sim-block-size", "-K"], "32").unwrap();
//! values.add(["--enc-matrix"], "1,0;0,1").unwrap();
//! assert!(defs.check_values(&values).is_empty());
//!
//! let k = Tag::from(["--sim-block-size", "-K"]);
//! assert_eq!(values.to_int(&k).unwrap(), 32);
//!
//! let mut groups = Groups::new();
//! groups.add("sim", "Simulation").unwrap();
//! let help = defs.help_entries(&groups);
//! assert_eq!(help.len(), 3);
//! ```

mod argument_type;
mod basic;
mod definitions;
mod error;
mod groups;
mod list;
mod range;
mod splitter;
mod tag;
mod value;
mod values;

pub use argument_type::{ArgumentType, Limited, TITLE_DESCRIPTION_SEPARATOR, TypedArgument};
pub use basic::{Boolean, Integer, Real, Text};
pub use definitions::{Definition, Definitions, HelpEntry};
pub use error::{ArgumentError, Result, ValidationError};
pub use groups::Groups;
pub use list::{ListType, list, list_2d};
pub use range::{
    Between, Compare, Comparison, ExcludingSet, IncludingSet, Length, Matches, Measured, NonZero,
    Numeric, Positive, Range, RangeClone, RangeSet,
};
pub use splitter::{DelimitedSplitter, Splitter, SplitterConfig};
pub use tag::Tag;
pub use value::Value;
pub use values::Values;

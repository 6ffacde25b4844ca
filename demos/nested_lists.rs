//! Two-level list example.
//!
//! Shows how a row separator and an element separator combine into a
//! matrix argument, how failures point at the offending cell, and how a
//! bracket-aware splitter handles nesting with a single separator.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p argmap-demos --example nested_lists
//! ```

use argmap_core::{
    ArgumentType, DelimitedSplitter, Integer, Length, ListType, RangeSet, SplitterConfig, list_2d,
};

fn main() {
    let matrix = list_2d(
        Integer,
        DelimitedSplitter::semicolon(),
        RangeSet::new().with(Length::at_least(1)),
        DelimitedSplitter::comma(),
        RangeSet::new().with(Length::between(2, 4)),
    );
    println!("type: {}", matrix.title());

    for raw in ["1,0,1;0,1,1", "1,0;1,x", "1,0;1", ""] {
        match matrix.check(raw) {
            Ok(()) => println!("  {raw:?} -> {}", matrix.value(raw).unwrap()),
            Err(e) => println!("  {raw:?} rejected at {:?}: {e}", e.path()),
        }
    }
    println!();

    // One separator, nesting expressed with brackets
    let config: SplitterConfig =
        serde_json::from_str(r#"{ "separators": ",", "open": "[(", "close": "])" }"#).unwrap();
    let splitter = DelimitedSplitter::new(config).unwrap();
    let nested = ListType::new(ListType::new(Integer, splitter.clone()), splitter);
    println!("type: {}", nested.title());
    let raw = "[(1,2),(3,4,5)]";
    println!("  {raw:?} -> {}", nested.value(raw).unwrap());
}

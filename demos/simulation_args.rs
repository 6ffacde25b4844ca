//! Simulation arguments example.
//!
//! Registers a few typed arguments, stores raw values the way a tokenizer
//! would, validates them in one pass, and prints the help rows as JSON.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p argmap-demos --example simulation_args
//! ```

use argmap_core::{
    Between, Definitions, Groups, IncludingSet, Integer, Length, Limited, Positive, Real, Tag,
    Text, Values, list,
};

fn main() {
    let mut defs = Definitions::new();
    defs.add_type(
        ["--sim-block-size", "-K"],
        Limited::new(Integer).with_range(Between::new(1, 8192)),
        "Number of information bits per frame.",
    )
    .unwrap();
    defs.add_type(
        ["--sim-snr", "-s"],
        Limited::new(Real).with_range(Positive),
        "Signal to noise ratio (dB).",
    )
    .unwrap();
    defs.add_type(
        ["--sim-seeds"],
        list(Integer).with_range(Length::between(1, 4)),
        "Seeds of the pseudo random generators.",
    )
    .unwrap();
    defs.add_type(
        ["--mdm-type"],
        Limited::new(Text).with_range(IncludingSet::new([
            "BPSK".to_string(),
            "QPSK".to_string(),
            "PAM".to_string(),
        ])),
        "Modulation type.",
    )
    .unwrap();

    let mut groups = Groups::new();
    groups.add("sim", "Simulation parameters").unwrap();
    groups.add("mdm", "Modulator parameters").unwrap();

    // Raw values as a tokenizer would hand them over
    let supplied = [
        ("-K", "1024"),
        ("-s", "-1.0"),
        ("--sim-seeds", "1, 2, x"),
        ("--mdm-type", "QPSK"),
    ];
    let mut values = Values::new();
    for (flag, raw) in supplied {
        match defs.find(flag) {
            Some((tags, _)) => values.add(tags.clone(), raw).unwrap(),
            None => println!("unknown flag {flag}"),
        }
    }

    println!("=== Validation ===");
    let errors = defs.check_values(&values);
    if errors.is_empty() {
        println!("all values are valid");
    }
    for error in &errors {
        println!("  {error}");
    }
    println!();

    println!("=== Accessors ===");
    let k = Tag::from(["--sim-block-size", "-K"]);
    println!("K = {}", values.to_int(&k).unwrap());
    match values.to_int(&Tag::from(["--dec-ite"])) {
        Ok(v) => println!("iterations = {v}"),
        Err(e) => println!("iterations: {e}"),
    }
    println!();

    println!("=== Help ===");
    let entries = defs.help_entries(&groups);
    let json = serde_json::to_string_pretty(&entries).unwrap();
    println!("{json}");
}

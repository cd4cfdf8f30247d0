//! Parsing functions for CLI arguments.

mod tone;

pub use tone::{parse_algorithm, parse_output_format};

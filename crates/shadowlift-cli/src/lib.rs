//! Shared utilities for shadowlift-cli
//!
//! Argument groups, parsers, builders and per-file processing used by the
//! `shadowlift` binary's commands.

pub mod args;
pub mod builders;
pub mod parsers;
pub mod processing;
pub mod types;

// Re-export commonly used items at the crate root for convenience
pub use args::ToneArgs;
pub use builders::{build_engine_options, build_processing_params, build_tone_params};
pub use parsers::{parse_algorithm, parse_output_format};
pub use processing::{
    determine_output_path, expand_inputs, process_single_image, SUPPORTED_EXTENSIONS,
};
pub use types::ProcessingParams;

//! Builder functions for processing parameters.

mod tone;

pub use tone::{build_engine_options, build_processing_params, build_tone_params};

//! Processing parameter types for CLI commands.

use shadowlift_core::exporters::OutputFormat;
use shadowlift_core::{EngineOptions, ToneAlgorithm, ToneParams};

/// Parameters for processing a single image.
/// Used by both convert and batch commands to avoid duplication.
#[derive(Clone, Debug)]
pub struct ProcessingParams {
    pub tone: ToneParams,
    pub algorithm: ToneAlgorithm,
    pub options: EngineOptions,
    pub format: OutputFormat,
    pub silent: bool,
    pub verbose: bool,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            tone: ToneParams::default_preset(),
            algorithm: ToneAlgorithm::default(),
            options: EngineOptions::default(),
            format: OutputFormat::Png,
            silent: false,
            verbose: false,
        }
    }
}

//! Tone argument structs for CLI commands.

use clap::Args;
use std::path::PathBuf;

/// Tone controls shared between the Convert and Batch commands.
///
/// Every control is optional; an unset control keeps the value from the
/// preset (or the configured defaults when no preset is given).
#[derive(Args, Clone, Debug, Default)]
pub struct ToneArgs {
    /// Tone preset: built-in name, name in the presets directory, or YAML file
    #[arg(short, long, value_name = "NAME|FILE")]
    pub preset: Option<String>,

    /// Tone algorithm: "classic" or "review"
    #[arg(short, long, value_name = "ALGORITHM")]
    pub algorithm: Option<String>,

    /// Start from all-zero controls instead of the configured defaults
    #[arg(long, conflicts_with = "preset")]
    pub neutral: bool,

    /// Exposure in stops (-5 to +5)
    #[arg(long, value_name = "STOPS", allow_negative_numbers = true)]
    pub exposure: Option<f32>,

    /// Contrast (-100 to +100)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub contrast: Option<f32>,

    /// Highlights (-100 to +100)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub highlights: Option<f32>,

    /// Shadows (-100 to +100)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub shadows: Option<f32>,

    /// Whites (-100 to +100)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub whites: Option<f32>,

    /// Blacks (-100 to +100)
    #[arg(long, value_name = "N", allow_negative_numbers = true)]
    pub blacks: Option<f32>,

    /// Fixed base-layer radius in pixels (default scales with image size)
    #[arg(long, value_name = "PIXELS")]
    pub radius: Option<usize>,

    /// Engine config file (overrides $SHADOWLIFT_CONFIG and the search path)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ToneArgs {
    /// True when at least one tone control was given on the command line
    pub fn has_overrides(&self) -> bool {
        [
            self.exposure,
            self.contrast,
            self.highlights,
            self.shadows,
            self.whites,
            self.blacks,
        ]
        .iter()
        .any(Option::is_some)
    }
}

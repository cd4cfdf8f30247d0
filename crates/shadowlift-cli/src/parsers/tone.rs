//! Tone algorithm and output format parsing.

use shadowlift_core::exporters::OutputFormat;
use shadowlift_core::ToneAlgorithm;

/// Parse a tone algorithm name ("classic" or "review").
///
/// Unlike config files, which fall back to the default algorithm, the
/// command line rejects unknown names.
pub fn parse_algorithm(name: &str) -> Result<ToneAlgorithm, String> {
    ToneAlgorithm::parse(name).ok_or_else(|| {
        let known: Vec<&str> = ToneAlgorithm::ALL.iter().map(|a| a.as_str()).collect();
        format!(
            "Unknown tone algorithm: '{}'. Valid options: {}",
            name,
            known.join(", ")
        )
    })
}

/// Parse an output format ("png", "tiff" or "tif").
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    OutputFormat::from_extension(format.trim()).ok_or_else(|| {
        format!(
            "Unknown output format: '{}'. Valid options: png, tiff",
            format
        )
    })
}

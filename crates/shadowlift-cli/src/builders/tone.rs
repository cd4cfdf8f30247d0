//! Tone parameter builders.

use std::path::Path;

use shadowlift_core::config::EngineDefaults;
use shadowlift_core::exporters::OutputFormat;
use shadowlift_core::presets::{get_presets_dir, resolve_preset};
use shadowlift_core::{EngineOptions, ToneAlgorithm, ToneParams};

use crate::args::ToneArgs;
use crate::parsers::parse_algorithm;
use crate::types::ProcessingParams;

/// Resolve the tone controls and algorithm for a run.
///
/// The starting point is, in order: all-zero controls with `--neutral`, the
/// requested preset, or the configured defaults. Individual flags then
/// override single controls and `--algorithm` overrides the algorithm.
pub fn build_tone_params(
    args: &ToneArgs,
    defaults: &EngineDefaults,
    presets_dir: &Path,
) -> Result<(ToneParams, ToneAlgorithm), String> {
    let (mut params, mut algorithm) = if args.neutral {
        (ToneParams::neutral(), defaults.algorithm)
    } else if let Some(reference) = &args.preset {
        let preset = resolve_preset(reference, presets_dir)?;
        (preset.params, preset.algorithm)
    } else {
        (defaults.tone, defaults.algorithm)
    };

    let overrides = [
        (&mut params.exposure, args.exposure),
        (&mut params.contrast, args.contrast),
        (&mut params.highlights, args.highlights),
        (&mut params.shadows, args.shadows),
        (&mut params.whites, args.whites),
        (&mut params.blacks, args.blacks),
    ];
    for (slot, value) in overrides {
        if let Some(value) = value {
            *slot = value;
        }
    }
    params.validate()?;

    if let Some(name) = &args.algorithm {
        algorithm = parse_algorithm(name)?;
    }

    Ok((params, algorithm))
}

/// Engine options from the configured defaults plus an optional radius override
pub fn build_engine_options(args: &ToneArgs, defaults: &EngineDefaults) -> EngineOptions {
    defaults.to_engine_options().with_radius(args.radius)
}

/// Build the full per-image processing parameters.
///
/// Loads the engine config (honouring `--config`) and the presets directory
/// on first use.
pub fn build_processing_params(
    args: &ToneArgs,
    format: OutputFormat,
    silent: bool,
    verbose: bool,
) -> Result<ProcessingParams, String> {
    let handle = shadowlift_core::config::init_config(args.config.as_deref());
    if let Some(requested) = &args.config {
        let resolved = std::fs::canonicalize(requested)
            .map_err(|e| format!("Failed to read config {}: {}", requested.display(), e))?;
        if handle.source.as_ref() != Some(&resolved) {
            return Err(format!(
                "Failed to load config {}: {}",
                requested.display(),
                handle.warnings.join("; ")
            ));
        }
    }
    let defaults = &handle.config.defaults;

    let presets_dir = get_presets_dir()?;
    let (tone, algorithm) = build_tone_params(args, defaults, &presets_dir)?;

    Ok(ProcessingParams {
        tone,
        algorithm,
        options: build_engine_options(args, defaults),
        format,
        silent,
        verbose,
    })
}

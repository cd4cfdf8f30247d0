use std::path::PathBuf;
use std::time::Instant;

use shadowlift_cli::{
    build_processing_params, determine_output_path, parse_output_format, process_single_image,
    ToneArgs,
};

/// Tone a single image and write the result.
pub fn cmd_convert(
    input: PathBuf,
    out: Option<PathBuf>,
    tone: ToneArgs,
    format: String,
    silent: bool,
    verbose: bool,
) -> Result<(), String> {
    let start = Instant::now();

    // Set verbose mode for core library
    shadowlift_core::config::set_verbose(verbose);

    let format = parse_output_format(&format)?;
    let params = build_processing_params(&tone, format, silent, verbose)?;
    if verbose {
        shadowlift_core::config::log_config_usage();
    }

    if !silent {
        println!("Processing {}...", input.display());
        println!(
            "  Algorithm: {}  exposure {:+.2}  contrast {:+.0}  highlights {:+.0}  shadows {:+.0}  whites {:+.0}  blacks {:+.0}",
            params.algorithm,
            params.tone.exposure,
            params.tone.contrast,
            params.tone.highlights,
            params.tone.shadows,
            params.tone.whites,
            params.tone.blacks
        );
    }

    let output_path = determine_output_path(&input, &out, params.format)?;
    let written = process_single_image(&input, &output_path, &params)?;

    if silent {
        println!("{}", written.display());
    } else {
        println!(
            "Wrote {} ({:.2}s)",
            written.display(),
            start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

use serde::Serialize;
use std::path::PathBuf;

use shadowlift_core::{analyze_image, ImageAnalysis, RgbaImage};

/// Analysis result structure for JSON output.
#[derive(Serialize)]
pub struct AnalysisResult {
    pub file: String,
    #[serde(flatten)]
    pub analysis: ImageAnalysis,
    pub luminance: LuminanceStats,
}

/// Display-domain luminance statistics of the input pixels.
#[derive(Serialize)]
pub struct LuminanceStats {
    pub min: u8,
    pub max: u8,
    pub mean: f32,
}

/// Compute min, max and mean Rec.709 luma over the display-encoded pixels.
pub fn compute_luminance_stats(image: &RgbaImage) -> LuminanceStats {
    let mut min = u8::MAX;
    let mut max = u8::MIN;
    let mut sum = 0.0f64;

    for px in image.as_bytes().chunks_exact(RgbaImage::CHANNELS) {
        let luma =
            0.2126 * px[0] as f32 + 0.7152 * px[1] as f32 + 0.0722 * px[2] as f32;
        let luma = luma.round().clamp(0.0, 255.0) as u8;
        min = min.min(luma);
        max = max.max(luma);
        sum += luma as f64;
    }

    let count = image.pixel_count();
    if count == 0 {
        return LuminanceStats {
            min: 0,
            max: 0,
            mean: 0.0,
        };
    }

    LuminanceStats {
        min,
        max,
        mean: (sum / count as f64) as f32,
    }
}

/// Print the base-layer radius, percentiles and derived shadow tuning.
pub fn cmd_analyze(
    input: PathBuf,
    json_output: bool,
    radius: Option<usize>,
    config: Option<PathBuf>,
    verbose: bool,
) -> Result<(), String> {
    shadowlift_core::config::set_verbose(verbose);
    let handle = shadowlift_core::config::init_config(config.as_deref());
    if verbose {
        shadowlift_core::config::log_config_usage();
    }

    let image = shadowlift_core::decoders::decode_image(&input)?;
    let options = handle.config.engine_options().with_radius(radius);
    let analysis = analyze_image(&image, &options);

    let result = AnalysisResult {
        file: input.display().to_string(),
        analysis,
        luminance: compute_luminance_stats(&image),
    };

    if json_output {
        let json = serde_json::to_string_pretty(&result)
            .map_err(|e| format!("Failed to serialize analysis: {}", e))?;
        println!("{}", json);
        return Ok(());
    }

    let analysis = &result.analysis;
    let tuning = &analysis.tuning;
    println!("Analyzing: {}\n", input.display());

    println!("Image Info:");
    println!("  Dimensions: {}x{}", analysis.width, analysis.height);
    println!(
        "  Luma: min {} / max {} / mean {:.1}",
        result.luminance.min, result.luminance.max, result.luminance.mean
    );

    println!("\nBase Layer:");
    println!("  Radius: {} px", analysis.radius);
    println!("  Epsilon: {:.1e}", analysis.guided_eps);
    println!(
        "  Percentiles: p05 {:.3}  p10 {:.3}  p20 {:.3}  p50 {:.3}",
        tuning.percentiles.p05, tuning.percentiles.p10, tuning.percentiles.p20, tuning.percentiles.p50
    );

    println!("\nShadow Tuning:");
    println!(
        "  Shadow band: {:.3} .. {:.3}",
        tuning.shadow_start, tuning.shadow_end
    );
    println!("  Gate: {:.3} .. {:.3}", tuning.gate_start, tuning.gate_end);
    println!("  Notch strength: {:.3}", tuning.notch_strength);
    println!("  Midtone lift: {:.3}", tuning.midtone_lift);
    println!();

    Ok(())
}

//! Two-pass shadow recovery engine
//!
//! Pass one builds the base layer and derives the per-image tuning. Pass two
//! tones and reconstructs every pixel independently against those read-only
//! inputs.

use std::time::Instant;

use serde::Serialize;

use super::linear::{extract_base_layer, LinearImage};
use super::options::EngineOptions;
use crate::analysis::ShadowTuning;
use crate::models::{RgbaImage, ToneParams};
use crate::parallel::parallel_for_each_chunk_mut;
use crate::reconstruct::Reconstructor;
use crate::tone::ToneAlgorithm;
use crate::verbose_println;

/// Base-layer statistics for one image, as reported by `analyze`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageAnalysis {
    pub width: u32,
    pub height: u32,
    pub radius: usize,
    pub guided_eps: f32,
    pub tuning: ShadowTuning,
}

/// Everything pass one produces
struct BaseAnalysis {
    linear: LinearImage,
    base: Vec<f32>,
    radius: usize,
    tuning: ShadowTuning,
}

fn analyze_base(image: &RgbaImage, options: &EngineOptions) -> BaseAnalysis {
    let linear = LinearImage::from_rgba(image);
    let radius = options.radius_for(linear.width, linear.height);
    let base = extract_base_layer(
        &linear.luminance,
        linear.width,
        linear.height,
        radius,
        options.guided_eps,
    );
    let tuning = ShadowTuning::from_base_layer(&base);

    BaseAnalysis {
        linear,
        base,
        radius,
        tuning,
    }
}

/// Run only the analysis pass
pub fn analyze_image(image: &RgbaImage, options: &EngineOptions) -> ImageAnalysis {
    let analysis = analyze_base(image, options);
    ImageAnalysis {
        width: image.width(),
        height: image.height(),
        radius: analysis.radius,
        guided_eps: options.guided_eps,
        tuning: analysis.tuning,
    }
}

/// Tone an RGBA image.
///
/// Returns a new image with the same dimensions; alpha is copied unchanged.
/// Out-of-range tone parameters are clamped into range first.
pub fn process_image(
    image: &RgbaImage,
    params: &ToneParams,
    algorithm: ToneAlgorithm,
    options: &EngineOptions,
) -> Result<RgbaImage, String> {
    if image.pixel_count() == 0 {
        return Ok(image.clone());
    }

    let start = Instant::now();
    let params = params.sanitized();

    let BaseAnalysis {
        linear,
        base,
        radius,
        tuning,
    } = analyze_base(image, options);

    verbose_println!(
        "[ENGINE] {}x{} algorithm={} radius={} eps={:.1e}",
        image.width(),
        image.height(),
        algorithm,
        radius,
        options.guided_eps
    );
    verbose_println!(
        "[ENGINE] percentiles p05={:.3} p10={:.3} p20={:.3} p50={:.3}",
        tuning.percentiles.p05,
        tuning.percentiles.p10,
        tuning.percentiles.p20,
        tuning.percentiles.p50
    );
    verbose_println!(
        "[ENGINE] shadow band {:.3}..{:.3}, gate ..{:.3} notch={:.3}, midtone lift={:.3}",
        tuning.shadow_start,
        tuning.shadow_end,
        tuning.gate_end,
        tuning.notch_strength,
        tuning.midtone_lift
    );
    verbose_println!(
        "[ENGINE] base layer done in {:.1}ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    let controls = params.normalized();
    let reference_controls = controls.without_shadows();
    let strategy = algorithm.strategy();
    let reconstructor = Reconstructor::new(algorithm, controls, options.max_lift_ratio);

    let src = image.as_bytes();
    let mut out = vec![0u8; src.len()];
    parallel_for_each_chunk_mut(&mut out, RgbaImage::CHANNELS, |index, px| {
        let base_lum = base[index];
        let target = strategy.tone_map(base_lum, &controls, &tuning);
        let reference = strategy.tone_map(base_lum, &reference_controls, &tuning);
        let rgb = reconstructor.reconstruct_u8(
            linear.pixel(index),
            linear.luminance[index],
            base_lum,
            target,
            reference,
        );
        px[..3].copy_from_slice(&rgb);
        px[3] = src[index * RgbaImage::CHANNELS + 3];
    });

    verbose_println!(
        "[ENGINE] processed in {:.1}ms",
        start.elapsed().as_secs_f64() * 1000.0
    );

    RgbaImage::new(image.width(), image.height(), out)
}

/// Tone a raw RGBA buffer, validating its length against the dimensions
pub fn process_rgba(
    width: u32,
    height: u32,
    data: &[u8],
    params: &ToneParams,
    algorithm: ToneAlgorithm,
    options: &EngineOptions,
) -> Result<Vec<u8>, String> {
    let image = RgbaImage::new(width, height, data.to_vec())?;
    Ok(process_image(&image, params, algorithm, options)?.into_bytes())
}

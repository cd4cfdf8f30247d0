//! Adaptive shadow-curve parameters

use serde::{Deserialize, Serialize};

use super::histogram::{build_histogram, percentile_from_histogram};
use crate::color::{clamp01, lerp};

/// Display-domain percentiles of the base layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasePercentiles {
    pub p05: f32,
    pub p10: f32,
    pub p20: f32,
    pub p50: f32,
}

impl BasePercentiles {
    /// Read the four tuning percentiles from a histogram
    pub fn from_histogram(hist: &[u32]) -> Self {
        Self {
            p05: percentile_from_histogram(hist, 0.05),
            p10: percentile_from_histogram(hist, 0.10),
            p20: percentile_from_histogram(hist, 0.20),
            p50: percentile_from_histogram(hist, 0.50),
        }
    }
}

/// Per-image shadow-curve parameters.
///
/// All boundaries are in the display (sRGB-encoded) domain. Computed once per
/// processing call and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShadowTuning {
    /// Percentiles the values below were derived from
    pub percentiles: BasePercentiles,

    /// Display level where the shadow lift starts fading out
    pub shadow_start: f32,

    /// Display level above which the shadow lift no longer applies
    pub shadow_end: f32,

    /// Lower edge of the deep-black gate
    pub gate_start: f32,

    /// Upper edge of the deep-black gate
    pub gate_end: f32,

    /// How strongly the gate suppresses lift below `gate_end` (0-1)
    pub notch_strength: f32,

    /// Extra display-domain midtone lift per unit of positive shadows
    pub midtone_lift: f32,
}

impl ShadowTuning {
    /// Derive tuning from base-layer percentiles.
    ///
    /// Each value is a `lerp` between two tuned constants driven by a 0-1 gain
    /// measuring how far a percentile sits past its threshold.
    pub fn from_percentiles(percentiles: BasePercentiles) -> Self {
        let BasePercentiles { p05, p10, p20, p50 } = percentiles;

        let deep_shadow_gain = clamp01((0.05 - p05) / 0.05);
        let crushed_gain = clamp01((0.10 - p10) / 0.10);
        let bright_gain = clamp01((p20 - 0.15) / 0.35);
        let dark_scene_gain = clamp01((0.25 - p50) / 0.25);

        Self {
            percentiles,
            // Bright scenes get a wider shadow band
            shadow_start: lerp(0.18, 0.28, bright_gain),
            shadow_end: lerp(0.55, 0.75, bright_gain),
            // Black-dominated scenes get a narrower, weaker gate so the
            // deepest tones can still be recovered
            gate_start: 0.0,
            gate_end: lerp(0.06, 0.02, deep_shadow_gain),
            notch_strength: lerp(0.5, 0.15, deep_shadow_gain.max(crushed_gain)),
            midtone_lift: lerp(0.02, 0.08, dark_scene_gain),
        }
    }

    /// Derive tuning from a histogram of the base layer
    pub fn from_histogram(hist: &[u32]) -> Self {
        Self::from_percentiles(BasePercentiles::from_histogram(hist))
    }

    /// Build the histogram of a linear base-luminance plane and derive tuning
    pub fn from_base_layer(base: &[f32]) -> Self {
        Self::from_histogram(&build_histogram(base))
    }
}

impl Default for ShadowTuning {
    /// Tuning for a mid-key scene (p05 0.05, p10 0.10, p20 0.15, p50 0.25),
    /// where every gain is zero
    fn default() -> Self {
        Self::from_percentiles(BasePercentiles {
            p05: 0.05,
            p10: 0.10,
            p20: 0.15,
            p50: 0.25,
        })
    }
}

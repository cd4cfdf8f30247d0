//! Per-pixel reconstruction
//!
//! Turns a toned base luminance back into RGB. The pixel is scaled by the
//! base-layer lift ratio so local detail rides along; deep in the toe, where
//! amplified sensor noise would dominate, the detail only receives part of
//! the gain the shadows stage adds.

use crate::color::linear_to_srgb_u8;
use crate::tone::{ToneAlgorithm, ToneControls, ToneStrategy};

/// Upper bound on the luminance lift ratio
pub const MAX_LIFT_RATIO: f32 = 64.0;

/// Floor applied to luminance divisors
pub const LIFT_EPSILON: f32 = 1e-6;

/// Additive toe lift per unit of positive shadows
const TOE_LIFT_SHADOWS: f32 = 0.012;

/// Additive toe lift per unit of positive blacks
const TOE_LIFT_BLACKS: f32 = 0.02;

/// `min(target / max(ε, base), max_ratio)`
#[inline]
pub fn lift_ratio(target: f32, base: f32, max_ratio: f32) -> f32 {
    (target / base.max(LIFT_EPSILON)).min(max_ratio)
}

/// Reconstructs pixels for one processing call
pub struct Reconstructor {
    strategy: &'static dyn ToneStrategy,
    controls: ToneControls,
    max_lift_ratio: f32,
}

impl Reconstructor {
    pub fn new(algorithm: ToneAlgorithm, controls: ToneControls, max_lift_ratio: f32) -> Self {
        let max_lift_ratio = if max_lift_ratio.is_finite() && max_lift_ratio >= 1.0 {
            max_lift_ratio
        } else {
            MAX_LIFT_RATIO
        };

        Self {
            strategy: algorithm.strategy(),
            controls,
            max_lift_ratio,
        }
    }

    /// Reconstruct linear RGB for one pixel.
    ///
    /// `rgb` and `lum` are the original linear values and `base` the smoothed
    /// luminance. `target` is the toned base luminance; `reference` is the
    /// same base toned with shadows at zero. The toe mask and detail damping
    /// follow `reference`, so they stay fixed while shadows varies, and the
    /// damping only applies to the gain the shadows stage adds on top of it.
    pub fn reconstruct(
        &self,
        rgb: [f32; 3],
        lum: f32,
        base: f32,
        target: f32,
        reference: f32,
    ) -> [f32; 3] {
        let ratio = lift_ratio(target, base, self.max_lift_ratio);
        let reference_ratio = lift_ratio(reference, base, self.max_lift_ratio);

        let shadows = self.controls.shadow_lift();
        let toe = self.strategy.toe_mask(reference);
        let detail_weight = if shadows > 0.0 {
            1.0 - (1.0 - self.strategy.detail_floor()) * toe
        } else {
            1.0
        };

        // Share of the pixel carried by the base color at full ratio; the
        // remainder is detail, which gets the damped ratio
        let base_share = (base / lum.max(LIFT_EPSILON)).min(self.max_lift_ratio);
        let detail_ratio = reference_ratio + (ratio - reference_ratio) * detail_weight;
        let lift = (TOE_LIFT_SHADOWS * shadows + TOE_LIFT_BLACKS * self.controls.black_lift()) * toe;

        let mut out = [0.0f32; 3];
        for (dst, &src) in out.iter_mut().zip(rgb.iter()) {
            *dst = src * base_share * ratio + src * (1.0 - base_share) * detail_ratio + lift;
        }

        self.strategy
            .post_reconstruct(&mut out, target, toe, &self.controls);
        out
    }

    /// Reconstruct and encode to 8-bit sRGB
    #[inline]
    pub fn reconstruct_u8(
        &self,
        rgb: [f32; 3],
        lum: f32,
        base: f32,
        target: f32,
        reference: f32,
    ) -> [u8; 3] {
        let out = self.reconstruct(rgb, lum, base, target, reference);
        [
            linear_to_srgb_u8(out[0]),
            linear_to_srgb_u8(out[1]),
            linear_to_srgb_u8(out[2]),
        ]
    }
}

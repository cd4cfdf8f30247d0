//! Classic tone algorithm

use super::algorithm::ToneStrategy;
use super::stages::{apply_shadows, DarkWeight, ShadowShape};
use crate::analysis::ShadowTuning;
use crate::color::smoothstep;

const SHAPE: ShadowShape = ShadowShape {
    power_k: 0.6,
    toe_gain: 0.04,
    toe_falloff: 30.0,
    weight: DarkWeight::Linear(4),
};

/// Toe mask end, linear toned luminance
const TOE_END: f32 = 0.12;

const DETAIL_FLOOR: f32 = 0.45;

/// Shadow lift weighted by `(1 − l)⁴` in linear light; toe measured on the
/// shadows-free toned value in linear light. No post-reconstruction step.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicTone;

impl ToneStrategy for ClassicTone {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn shadows(&self, luminance: f32, shadows: f32, tuning: &ShadowTuning) -> f32 {
        apply_shadows(luminance, shadows, &SHAPE, tuning)
    }

    fn toe_mask(&self, toned: f32) -> f32 {
        1.0 - smoothstep(0.0, TOE_END, toned)
    }

    fn detail_floor(&self) -> f32 {
        DETAIL_FLOOR
    }
}

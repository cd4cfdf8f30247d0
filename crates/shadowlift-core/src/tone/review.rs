//! Review tone algorithm

use super::algorithm::ToneStrategy;
use super::controls::ToneControls;
use super::stages::{apply_shadows, DarkWeight, ShadowShape};
use crate::analysis::ShadowTuning;
use crate::color::{lerp, linear_to_srgb, luminance, smoothstep};

const SHAPE: ShadowShape = ShadowShape {
    power_k: 0.55,
    toe_gain: 0.03,
    toe_falloff: 24.0,
    weight: DarkWeight::Display(3),
};

/// Toe mask end, display toned luminance
const TOE_END: f32 = 0.35;

const DETAIL_FLOOR: f32 = 0.35;

/// Maximum desaturation at full shadows inside the toe
const TOE_DESATURATION: f32 = 0.25;

/// Shadow lift weighted by `(1 − display)³`; toe measured on the
/// shadows-free toned value in display space. After reconstruction it closes
/// any luminance shortfall against the target and pulls deep-shadow color
/// toward gray.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReviewTone;

impl ToneStrategy for ReviewTone {
    fn name(&self) -> &'static str {
        "review"
    }

    fn shadows(&self, luminance: f32, shadows: f32, tuning: &ShadowTuning) -> f32 {
        apply_shadows(luminance, shadows, &SHAPE, tuning)
    }

    fn toe_mask(&self, toned: f32) -> f32 {
        1.0 - smoothstep(0.0, TOE_END, linear_to_srgb(toned.clamp(0.0, 1.0)))
    }

    fn detail_floor(&self) -> f32 {
        DETAIL_FLOOR
    }

    fn post_reconstruct(&self, rgb: &mut [f32; 3], target: f32, toe: f32, controls: &ToneControls) {
        let strength = controls.shadow_lift() * toe;
        if strength <= 0.0 {
            return;
        }

        let current = luminance(rgb[0], rgb[1], rgb[2]);
        let fill = (target - current).max(0.0) * strength;
        let filled = current + fill;

        // Equal per-channel fill raises luminance by exactly `fill`
        let desaturate = TOE_DESATURATION * strength;
        for channel in rgb.iter_mut() {
            *channel = lerp(*channel + fill, filled, desaturate);
        }
    }
}

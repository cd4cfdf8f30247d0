//! Individual tone stages shared by every algorithm

use crate::analysis::ShadowTuning;
use crate::color::{lerp, linear_to_srgb, smoothstep, srgb_to_linear};

/// Linear mid-gray the contrast stage pivots around
pub const CONTRAST_PIVOT: f32 = 0.18;

/// Display level below which the blacks control acts
const BLACKS_KNEE: f32 = 0.22;

/// Exposure: scale linear luminance by `2^stops`
#[inline]
pub fn apply_exposure(luminance: f32, gain: f32) -> f32 {
    if gain == 1.0 {
        return luminance;
    }
    luminance * gain
}

/// Highlights: `l·(1 + H·0.6·min(1, l)³)`, concentrated near 1.0
#[inline]
pub fn apply_highlights(luminance: f32, highlights: f32) -> f32 {
    if highlights == 0.0 {
        return luminance;
    }
    let mask = luminance.clamp(0.0, 1.0).powi(3);
    luminance * (1.0 + highlights * 0.6 * mask)
}

/// Whites: positive values lift the top and may push past 1.0; negative
/// values compress the top toward headroom with a rising exponent.
pub fn apply_whites(luminance: f32, whites: f32) -> f32 {
    if whites == 0.0 {
        return luminance;
    }

    let l = luminance.max(0.0);
    let display = linear_to_srgb(l.min(1.0));
    let top = smoothstep(0.25, 1.0, display);

    if whites > 0.0 {
        let blend = smoothstep(0.15, 0.9, display);
        let rolloff = 1.0 - (1.0 - l.min(1.0)).powf(1.0 + whites);
        let overshoot = l * (1.0 + 0.8 * whites * top);
        lerp(l, lerp(rolloff, overshoot, top), blend)
    } else {
        let amount = -whites;
        l.powf(1.0 + 0.8 * amount * top) * (1.0 - 0.15 * amount * top)
    }
}

/// Blacks: acts below display 0.22. Positive values raise the floor in
/// proportion to the headroom left below the knee; negative values raise the
/// exponent of the knee-normalized value to crush toward zero.
pub fn apply_blacks(luminance: f32, blacks: f32) -> f32 {
    if blacks == 0.0 {
        return luminance;
    }

    let l = luminance.max(0.0);
    let display = linear_to_srgb(l);
    let mask = 1.0 - smoothstep(0.0, BLACKS_KNEE, display);
    if mask <= 0.0 {
        return l;
    }

    let adjusted = if blacks > 0.0 {
        display + blacks * mask * (BLACKS_KNEE - display) * 0.5
    } else {
        let normalized = (display / BLACKS_KNEE).min(1.0);
        let crushed = BLACKS_KNEE * normalized.powf(1.0 - 1.5 * blacks);
        lerp(display, crushed, mask)
    };

    srgb_to_linear(adjusted)
}

/// Contrast around linear mid-gray: `pivot·(l/pivot)^f`
#[inline]
pub fn apply_contrast(luminance: f32, contrast: f32) -> f32 {
    if contrast == 0.0 {
        return luminance;
    }
    let factor = if contrast >= 0.0 {
        1.0 + contrast
    } else {
        1.0 / (1.0 - contrast)
    };
    CONTRAST_PIVOT * (luminance.max(0.0) / CONTRAST_PIVOT).powf(factor)
}

/// Domain the dark-weight of the shadow blend is measured in
#[derive(Debug, Clone, Copy)]
pub(crate) enum DarkWeight {
    /// `(1 − l)^power` on linear luminance
    Linear(i32),
    /// `(1 − display)^power` on sRGB-encoded luminance
    Display(i32),
}

impl DarkWeight {
    #[inline]
    fn at(self, linear: f32, display: f32) -> f32 {
        match self {
            Self::Linear(power) => (1.0 - linear.min(1.0)).powi(power),
            Self::Display(power) => (1.0 - display.min(1.0)).powi(power),
        }
    }
}

/// Variant-specific constants of the shadow stage
#[derive(Debug, Clone, Copy)]
pub(crate) struct ShadowShape {
    /// `k` in `power = 1 − S·k`
    pub power_k: f32,
    /// Toe term amplitude `c` in `S·c·exp(−d·l)`
    pub toe_gain: f32,
    /// Toe term falloff `d`
    pub toe_falloff: f32,
    pub weight: DarkWeight,
}

/// Shadows stage with adaptive range, gate and midtone lift
pub(crate) fn apply_shadows(
    luminance: f32,
    shadows: f32,
    shape: &ShadowShape,
    tuning: &ShadowTuning,
) -> f32 {
    if shadows == 0.0 {
        return luminance;
    }

    let l = luminance.max(0.0);
    let display = linear_to_srgb(l.min(1.0));

    let mut lifted = l.powf(1.0 - shadows * shape.power_k);
    if shadows > 0.0 {
        lifted += shadows * shape.toe_gain * (-shape.toe_falloff * l).exp();
    }

    let weight = shape.weight.at(l, display);
    let range = 1.0 - smoothstep(tuning.shadow_start, tuning.shadow_end, display);
    let gate = 1.0
        - tuning.notch_strength * (1.0 - smoothstep(tuning.gate_start, tuning.gate_end, display));

    let mut result = l + (lifted - l) * weight * range * gate;

    if shadows > 0.0 {
        let bump = smoothstep(0.1, 0.35, display) * (1.0 - smoothstep(0.45, 0.8, display));
        if bump > 0.0 {
            let encoded = linear_to_srgb(result) + shadows * tuning.midtone_lift * bump;
            result = srgb_to_linear(encoded);
        }
    }

    result
}

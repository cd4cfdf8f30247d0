//! sRGB transfer functions

use std::sync::OnceLock;

/// Decode an sRGB-encoded value to linear light.
///
/// Input and output are unclamped; callers clamp where needed.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear-light value to sRGB.
///
/// Negative values stay on the linear segment.
#[inline]
pub fn linear_to_srgb(c: f32) -> f32 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

static SRGB_TO_LINEAR_LUT: OnceLock<[f32; 256]> = OnceLock::new();

fn srgb_lut() -> &'static [f32; 256] {
    SRGB_TO_LINEAR_LUT.get_or_init(|| {
        let mut lut = [0.0f32; 256];
        for (i, entry) in lut.iter_mut().enumerate() {
            *entry = srgb_to_linear(i as f32 / 255.0);
        }
        lut
    })
}

/// Decode an 8-bit sRGB sample to linear light via lookup table
#[inline]
pub fn srgb_u8_to_linear(v: u8) -> f32 {
    srgb_lut()[v as usize]
}

/// Encode a linear value to an 8-bit sRGB sample, clamping to [0, 255]
#[inline]
pub fn linear_to_srgb_u8(c: f32) -> u8 {
    let encoded = linear_to_srgb(c).clamp(0.0, 1.0);
    (encoded * 255.0).round() as u8
}

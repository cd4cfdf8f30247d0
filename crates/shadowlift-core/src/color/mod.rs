//! Color transforms and small numeric primitives
//!
//! Provides the sRGB transfer functions, BT.709 luminance, and the
//! `smoothstep`/`lerp` helpers every tone stage builds its masks from.

mod transfer;


pub use transfer::{linear_to_srgb, linear_to_srgb_u8, srgb_to_linear, srgb_u8_to_linear};

/// BT.709 luminance weights for linear RGB
pub const LUMA_R: f32 = 0.2126;
pub const LUMA_G: f32 = 0.7152;
pub const LUMA_B: f32 = 0.0722;

/// Linear-light luminance of a linear RGB triple (ITU-R BT.709)
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

/// Clamp to the unit interval
#[inline]
pub fn clamp01(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}

/// Linear interpolation from `a` to `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Hermite smoothstep between two edges.
///
/// Returns 0 at or below `edge0`, 1 at or above `edge1`, and the cubic
/// `t²(3 − 2t)` in between. Used as a soft weight, never as a hard threshold.
/// When the edges coincide the result is a step at `edge0`.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let span = edge1 - edge0;
    if span.abs() <= f32::EPSILON {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = clamp01((x - edge0) / span);
    t * t * (3.0 - 2.0 * t)
}

//! Tone curve and pluggable tone algorithms
//!
//! The curve runs once per pixel on base-layer luminance, in a fixed order:
//! exposure, shadows, highlights, whites, blacks, contrast. Every stage is the
//! identity when its control is exactly zero. The shadow stage, the toe mask
//! and the post-reconstruction hook are owned by a [`ToneStrategy`]; the
//! closed [`ToneAlgorithm`] enum selects one.

mod algorithm;
mod classic;
mod controls;
mod review;
mod stages;

#[cfg(test)]
mod tests;

pub use algorithm::{ToneAlgorithm, ToneStrategy};
pub use classic::ClassicTone;
pub use controls::ToneControls;
pub use review::ReviewTone;
pub use stages::{
    apply_blacks, apply_contrast, apply_exposure, apply_highlights, apply_whites, CONTRAST_PIVOT,
};

//! Data models for shadowlift
//!
//! Image buffers, user-facing tone parameters, and named presets.

mod image;
mod preset;
mod tone_params;


pub use image::RgbaImage;
pub use preset::TonePreset;
pub use tone_params::{ToneParams, EXPOSURE_LIMIT, SLIDER_LIMIT};

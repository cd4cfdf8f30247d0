//! Image processing pipeline
//!
//! RGBA8 → linear RGB + luminance → guided-filter base layer → histogram
//! tuning → per-pixel tone map and reconstruction → RGBA8.
//!
//! - `linear`: sRGB decode and base-layer extraction
//! - `options`: radius, eps and lift-ratio knobs
//! - `engine`: analysis and processing entry points

mod engine;
mod linear;
mod options;


pub use engine::{analyze_image, process_image, process_rgba, ImageAnalysis};
pub use linear::{extract_base_layer, LinearImage};
pub use options::EngineOptions;

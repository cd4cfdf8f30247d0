//! Shadowlift Core Library
//!
//! Edge-aware shadow recovery for 8-bit sRGB images: a guided-filter base
//! layer, histogram-driven tuning, pluggable tone algorithms and a
//! detail-preserving per-pixel reconstruction.

pub mod analysis;
pub mod color;
pub mod config;
pub mod decoders;
pub mod exporters;
pub mod filters;
pub mod models;
pub mod parallel;
pub mod pipeline;
pub mod presets;
pub mod reconstruct;
pub mod tone;

// Re-export commonly used types
pub use analysis::ShadowTuning;
pub use models::{RgbaImage, TonePreset, ToneParams};
pub use pipeline::{analyze_image, process_image, EngineOptions, ImageAnalysis};
pub use tone::{ToneAlgorithm, ToneControls, ToneStrategy};

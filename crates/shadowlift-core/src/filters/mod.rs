//! Spatial filters for base/detail decomposition
//!
//! - `box_filter`: separable prefix-sum mean with edge replication
//! - `guided_filter`: self-guided edge-preserving smoother built on it
//!
//! All planes are row-major `f32` with `width * height` elements.

mod box_blur;
mod guided;


pub use box_blur::box_filter;
pub use guided::{guided_filter, recommended_radius, scaled_radius};

/// Default guided filter regularisation
pub const DEFAULT_GUIDED_EPS: f32 = 1e-3;

/// Default radius as a fraction of the shorter image side
pub const DEFAULT_RADIUS_SCALE: f32 = 0.015;

/// Smallest radius the size-based rule will return
pub const DEFAULT_MIN_RADIUS: usize = 4;

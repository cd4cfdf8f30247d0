//! Engine-facing processing options

use serde::{Deserialize, Serialize};

use crate::filters::{scaled_radius, DEFAULT_GUIDED_EPS, DEFAULT_MIN_RADIUS, DEFAULT_RADIUS_SCALE};
use crate::reconstruct::MAX_LIFT_RATIO;

/// Knobs of the base-layer decomposition and reconstruction.
///
/// These are not user tone controls; they come from configuration and are
/// passed explicitly into every processing call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Fixed guided-filter radius; `None` scales with image size
    pub radius: Option<usize>,

    /// Guided-filter regularisation
    pub guided_eps: f32,

    /// Radius as a fraction of the shorter side
    pub radius_scale: f32,

    /// Smallest size-derived radius
    pub min_radius: usize,

    /// Cap on the per-pixel luminance lift ratio
    pub max_lift_ratio: f32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            radius: None,
            guided_eps: DEFAULT_GUIDED_EPS,
            radius_scale: DEFAULT_RADIUS_SCALE,
            min_radius: DEFAULT_MIN_RADIUS,
            max_lift_ratio: MAX_LIFT_RATIO,
        }
    }
}

impl EngineOptions {
    /// Guided-filter radius for an image of the given size
    pub fn radius_for(&self, width: usize, height: usize) -> usize {
        self.radius
            .unwrap_or_else(|| scaled_radius(width, height, self.radius_scale, self.min_radius))
    }

    /// Override the radius
    pub fn with_radius(mut self, radius: Option<usize>) -> Self {
        self.radius = radius;
        self
    }

    pub(crate) fn sanitize(&mut self) {
        if !self.guided_eps.is_finite() || self.guided_eps <= 0.0 {
            self.guided_eps = DEFAULT_GUIDED_EPS;
        }
        if !self.radius_scale.is_finite() || self.radius_scale < 0.0 {
            self.radius_scale = DEFAULT_RADIUS_SCALE;
        }
        if !self.max_lift_ratio.is_finite() || self.max_lift_ratio < 1.0 {
            self.max_lift_ratio = MAX_LIFT_RATIO;
        }
    }
}

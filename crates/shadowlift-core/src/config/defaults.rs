//! Default engine parameter values and their sanitization.

use serde::{Deserialize, Serialize};

use crate::filters::{DEFAULT_GUIDED_EPS, DEFAULT_MIN_RADIUS, DEFAULT_RADIUS_SCALE};
use crate::models::ToneParams;
use crate::pipeline::EngineOptions;
use crate::reconstruct::MAX_LIFT_RATIO;
use crate::tone::ToneAlgorithm;

/// Upper bound on a configured minimum radius
const MAX_MIN_RADIUS: usize = 256;

/// Default engine parameter values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineDefaults {
    /// Tone algorithm used when none is requested
    pub algorithm: ToneAlgorithm,
    /// Tone controls used when no preset or flags are given
    pub tone: ToneParams,
    /// Guided-filter regularisation
    pub guided_eps: f32,
    /// Base-layer radius as a fraction of the shorter side
    pub radius_scale: f32,
    /// Smallest size-derived radius
    pub min_radius: usize,
    /// Cap on the luminance lift ratio
    pub max_lift_ratio: f32,
}

impl EngineDefaults {
    pub(crate) fn sanitize(&mut self) {
        self.tone.sanitize();
        if !self.guided_eps.is_finite() || self.guided_eps <= 0.0 {
            self.guided_eps = DEFAULT_GUIDED_EPS;
        }
        self.guided_eps = self.guided_eps.clamp(1e-6, 1.0);
        if !self.radius_scale.is_finite() {
            self.radius_scale = DEFAULT_RADIUS_SCALE;
        }
        self.radius_scale = self.radius_scale.clamp(0.0, 0.5);
        self.min_radius = self.min_radius.min(MAX_MIN_RADIUS);
        if !self.max_lift_ratio.is_finite() {
            self.max_lift_ratio = MAX_LIFT_RATIO;
        }
        self.max_lift_ratio = self.max_lift_ratio.clamp(1.0, 1024.0);
    }

    /// Engine options with the size-derived radius
    pub fn to_engine_options(&self) -> EngineOptions {
        let mut options = EngineOptions {
            radius: None,
            guided_eps: self.guided_eps,
            radius_scale: self.radius_scale,
            min_radius: self.min_radius,
            max_lift_ratio: self.max_lift_ratio,
        };
        options.sanitize();
        options
    }
}

impl Default for EngineDefaults {
    fn default() -> Self {
        Self {
            algorithm: ToneAlgorithm::Classic,
            tone: ToneParams::default_preset(),
            guided_eps: DEFAULT_GUIDED_EPS,
            radius_scale: DEFAULT_RADIUS_SCALE,
            min_radius: DEFAULT_MIN_RADIUS,
            max_lift_ratio: MAX_LIFT_RATIO,
        }
    }
}

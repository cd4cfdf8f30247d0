//! User-facing tone controls

use serde::{Deserialize, Serialize};

/// Exposure range in stops (±)
pub const EXPOSURE_LIMIT: f32 = 5.0;

/// Slider range for every other control (±)
pub const SLIDER_LIMIT: f32 = 100.0;

/// The six tone controls as the user sets them.
///
/// Exposure is in stops (−5..+5); the other controls are slider values in
/// −100..+100. Missing fields deserialize to 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneParams {
    pub exposure: f32,
    pub contrast: f32,
    pub highlights: f32,
    pub shadows: f32,
    pub whites: f32,
    pub blacks: f32,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self::neutral()
    }
}

impl ToneParams {
    /// Shadow-recovery starting point: shadows +70, everything else 0
    pub fn default_preset() -> Self {
        Self {
            shadows: 70.0,
            ..Self::neutral()
        }
    }

    /// All controls at 0
    pub fn neutral() -> Self {
        Self {
            exposure: 0.0,
            contrast: 0.0,
            highlights: 0.0,
            shadows: 0.0,
            whites: 0.0,
            blacks: 0.0,
        }
    }

    /// True when every control is exactly zero
    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }

    /// Clamp every control into its documented range; non-finite values reset to 0
    pub fn sanitize(&mut self) {
        self.exposure = sanitize_value(self.exposure, EXPOSURE_LIMIT);
        for value in self.sliders_mut() {
            *value = sanitize_value(*value, SLIDER_LIMIT);
        }
    }

    /// Sanitized copy
    pub fn sanitized(mut self) -> Self {
        self.sanitize();
        self
    }

    /// Reject out-of-range or non-finite controls with a descriptive error
    pub fn validate(&self) -> Result<(), String> {
        check_range("exposure", self.exposure, EXPOSURE_LIMIT)?;
        for (name, value) in self.named_sliders() {
            check_range(name, value, SLIDER_LIMIT)?;
        }
        Ok(())
    }

    fn sliders_mut(&mut self) -> [&mut f32; 5] {
        [
            &mut self.contrast,
            &mut self.highlights,
            &mut self.shadows,
            &mut self.whites,
            &mut self.blacks,
        ]
    }

    fn named_sliders(&self) -> [(&'static str, f32); 5] {
        [
            ("contrast", self.contrast),
            ("highlights", self.highlights),
            ("shadows", self.shadows),
            ("whites", self.whites),
            ("blacks", self.blacks),
        ]
    }
}

fn sanitize_value(value: f32, limit: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-limit, limit)
    } else {
        0.0
    }
}

fn check_range(name: &str, value: f32, limit: f32) -> Result<(), String> {
    if !value.is_finite() || value < -limit || value > limit {
        return Err(format!(
            "{} must be between {} and {}, got {}",
            name, -limit, limit, value
        ));
    }
    Ok(())
}

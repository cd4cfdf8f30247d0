//! Normalized tone controls

use crate::models::ToneParams;

/// Tone controls in engine units.
///
/// `exposure_gain` is the linear multiplier `2^exposure`; every other control
/// is the slider value divided by 100 (−1..+1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneControls {
    pub exposure_gain: f32,
    pub contrast: f32,
    pub highlights: f32,
    pub shadows: f32,
    pub whites: f32,
    pub blacks: f32,
}

impl ToneControls {
    /// Positive part of the shadows control
    #[inline]
    pub fn shadow_lift(&self) -> f32 {
        self.shadows.max(0.0)
    }

    /// Positive part of the blacks control
    #[inline]
    pub fn black_lift(&self) -> f32 {
        self.blacks.max(0.0)
    }

    /// Same controls with shadows at zero
    pub fn without_shadows(&self) -> Self {
        Self {
            shadows: 0.0,
            ..*self
        }
    }
}

impl From<&ToneParams> for ToneControls {
    fn from(params: &ToneParams) -> Self {
        Self {
            exposure_gain: params.exposure.exp2(),
            contrast: params.contrast / 100.0,
            highlights: params.highlights / 100.0,
            shadows: params.shadows / 100.0,
            whites: params.whites / 100.0,
            blacks: params.blacks / 100.0,
        }
    }
}

impl ToneParams {
    /// Convert slider values to engine units
    pub fn normalized(&self) -> ToneControls {
        ToneControls::from(self)
    }
}

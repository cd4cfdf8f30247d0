//! Tone algorithm selection

use std::fmt;

use serde::{Deserialize, Serialize};

use super::classic::ClassicTone;
use super::controls::ToneControls;
use super::review::ReviewTone;
use super::stages::{apply_blacks, apply_contrast, apply_exposure, apply_highlights, apply_whites};
use crate::analysis::ShadowTuning;

/// Capability set of a tone algorithm.
///
/// Implementations are stateless and shared across threads; a variant
/// differs only in its shadow shape, toe mask, detail floor and optional
/// post-reconstruction hook.
pub trait ToneStrategy: Send + Sync {
    /// Identifier used in presets, config and the CLI
    fn name(&self) -> &'static str;

    /// Shadows stage on linear luminance
    fn shadows(&self, luminance: f32, shadows: f32, tuning: &ShadowTuning) -> f32;

    /// Weight (0-1) of deep-shadow-only effects for a toned luminance
    fn toe_mask(&self, target: f32) -> f32;

    /// Lowest detail weight reached inside the toe at full shadows
    fn detail_floor(&self) -> f32;

    /// Hook run on reconstructed linear RGB before encoding
    fn post_reconstruct(
        &self,
        _rgb: &mut [f32; 3],
        _target: f32,
        _toe: f32,
        _controls: &ToneControls,
    ) {
    }

    /// Full tone chain from base luminance to target luminance
    fn tone_map(&self, base: f32, controls: &ToneControls, tuning: &ShadowTuning) -> f32 {
        let l = apply_exposure(base, controls.exposure_gain);
        let l = self.shadows(l, controls.shadows, tuning);
        let l = apply_highlights(l, controls.highlights);
        let l = apply_whites(l, controls.whites);
        let l = apply_blacks(l, controls.blacks);
        apply_contrast(l, controls.contrast).max(0.0)
    }
}

static CLASSIC: ClassicTone = ClassicTone;
static REVIEW: ReviewTone = ReviewTone;

/// Registered tone algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToneAlgorithm {
    /// Linear-domain shadow weight, no post hook
    #[default]
    Classic,

    /// Display-domain shadow weight, fills luminance shortfall and
    /// desaturates the deepest shadows
    Review,
}

impl ToneAlgorithm {
    /// Every registered algorithm
    pub const ALL: [ToneAlgorithm; 2] = [ToneAlgorithm::Classic, ToneAlgorithm::Review];

    /// Strategy implementing this algorithm
    pub fn strategy(self) -> &'static dyn ToneStrategy {
        match self {
            Self::Classic => &CLASSIC,
            Self::Review => &REVIEW,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.strategy().name()
    }

    /// Exact (case-insensitive) lookup; `None` for unknown names
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str().eq_ignore_ascii_case(name))
    }

    /// Lookup that falls back to [`ToneAlgorithm::Classic`] for unknown names
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }
}

impl fmt::Display for ToneAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ToneAlgorithm {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ToneAlgorithm {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<ToneAlgorithm> for String {
    fn from(algorithm: ToneAlgorithm) -> Self {
        algorithm.as_str().to_string()
    }
}

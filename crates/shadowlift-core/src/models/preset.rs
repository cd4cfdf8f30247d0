//! Named tone presets

use serde::{Deserialize, Serialize};

use super::ToneParams;
use crate::tone::ToneAlgorithm;

/// A named set of tone controls plus the algorithm to run them with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TonePreset {
    /// Preset name (e.g., "default", "night street")
    pub name: String,

    /// Tone algorithm; unknown names load as classic
    #[serde(default)]
    pub algorithm: ToneAlgorithm,

    /// Tone controls
    #[serde(default)]
    pub params: ToneParams,

    /// Optional notes or description
    #[serde(default)]
    pub notes: Option<String>,
}

impl TonePreset {
    pub fn new(name: impl Into<String>, algorithm: ToneAlgorithm, params: ToneParams) -> Self {
        Self {
            name: name.into(),
            algorithm,
            params,
            notes: None,
        }
    }
}

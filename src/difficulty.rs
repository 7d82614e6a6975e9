use crate::config::TierParams;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Difficulty tier of a tracing exercise.
///
/// Selects the scoring threshold and the rendered guide thickness. Stricter
/// tiers get a smaller threshold.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum DifficultyTier {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    pub fn threshold(&self) -> f32 {
        self.threshold_with(&TierParams::default())
    }

    pub fn guide_thickness(&self) -> f32 {
        self.guide_thickness_with(&TierParams::default())
    }

    pub fn threshold_with(&self, params: &TierParams) -> f32 {
        match self {
            Self::Easy => params.threshold_easy,
            Self::Medium => params.threshold_medium,
            Self::Hard => params.threshold_hard,
        }
    }

    pub fn guide_thickness_with(&self, params: &TierParams) -> f32 {
        match self {
            Self::Easy => params.guide_thickness_easy,
            Self::Medium => params.guide_thickness_medium,
            Self::Hard => params.guide_thickness_hard,
        }
    }
}

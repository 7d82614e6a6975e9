use serde::{Deserialize, Serialize};

/// Final (or live) result of one traced stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0..=100
    pub accuracy: f32,
    /// 0..=3
    pub stars: u8,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreDetails {
    // Top-line
    pub accuracy: f32,
    pub stars: u8,

    // Coverage: share of samples within threshold of some guide point
    pub match_ratio: f32,
    pub matched_points: usize,
    pub total_points: usize,

    // Precision
    pub avg_distance: f32,
    pub max_distance: f32,
    pub distance_score: f32,
}

impl ScoreDetails {
    pub fn result(&self) -> ScoreResult {
        ScoreResult {
            accuracy: self.accuracy,
            stars: self.stars,
        }
    }
}

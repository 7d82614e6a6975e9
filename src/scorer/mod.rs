pub mod engine;
pub mod types;

pub use self::types::{ScoreDetails, ScoreResult};
use crate::config::ScoringWeights;
use crate::geometry::Point;

/// Stateless accuracy scorer carrying its blend weights and star cut-offs.
///
/// Live and final scoring go through the same call: a live score is just the
/// accuracy of the stroke prefix captured so far.
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    pub weights: ScoringWeights,
}

impl Scorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, user: &[Point], guide: &[Point], threshold: f32) -> f32 {
        engine::score_details(user, guide, threshold, &self.weights).accuracy
    }

    pub fn score_details(&self, user: &[Point], guide: &[Point], threshold: f32) -> ScoreDetails {
        engine::score_details(user, guide, threshold, &self.weights)
    }

    pub fn evaluate(&self, user: &[Point], guide: &[Point], threshold: f32) -> ScoreResult {
        self.score_details(user, guide, threshold).result()
    }

    pub fn stars(&self, accuracy: f32) -> u8 {
        engine::stars_for(accuracy, &self.weights)
    }
}

/// Accuracy in `[0, 100]` of `user` traced against `guide`, using the
/// default 60/40 coverage/precision blend.
pub fn score(user: &[Point], guide: &[Point], threshold: f32) -> f32 {
    engine::score_details(user, guide, threshold, &ScoringWeights::default()).accuracy
}

/// 90+ is three stars, 70+ two, 50+ one.
pub fn stars_from_accuracy(accuracy: f32) -> u8 {
    engine::stars_for(accuracy, &ScoringWeights::default())
}

use crate::config::Config;
use crate::difficulty::DifficultyTier;
use crate::error::TfResult;
use crate::geometry::Point;
use crate::letters::LetterCatalog;
use crate::loader;
use crate::scorer::Scorer;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    /// Letter whose geometry was scored against.
    pub letter: char,
    pub requested: char,
    pub fallback_used: bool,
    pub tier: DifficultyTier,
    pub threshold: f32,
    pub guide_thickness: f32,
    pub accuracy: f32,
    pub stars: u8,
    pub match_ratio: f32,
    pub avg_distance: f32,
    pub sample_count: usize,
}

/// Scores a finished stroke against `letter` at the given tier.
pub fn evaluate_stroke(
    catalog: &LetterCatalog,
    config: &Config,
    letter: char,
    points: &[Point],
    tier: DifficultyTier,
) -> EvaluationResult {
    let lookup = catalog.reference_path(letter, config.practice.sample_count);
    let fallback_used = lookup.is_fallback();
    let served = lookup.served_letter();
    let reference = lookup.into_path();

    let threshold = tier.threshold_with(&config.tiers);
    let scorer = Scorer::new(config.weights.clone());
    let details = scorer.score_details(points, &reference.guide_points, threshold);

    EvaluationResult {
        letter: served,
        requested: reference.letter,
        fallback_used,
        tier,
        threshold,
        guide_thickness: tier.guide_thickness_with(&config.tiers),
        accuracy: details.accuracy,
        stars: details.stars,
        match_ratio: details.match_ratio,
        avg_distance: details.avg_distance,
        sample_count: details.total_points,
    }
}

pub fn evaluate_stroke_file<P: AsRef<Path>>(
    catalog: &LetterCatalog,
    config: &Config,
    letter: char,
    stroke_path: P,
    tier: DifficultyTier,
) -> TfResult<EvaluationResult> {
    let points = loader::load_stroke_from_file(stroke_path)?;
    Ok(evaluate_stroke(catalog, config, letter, &points, tier))
}

use super::types::ScoreDetails;
use crate::config::ScoringWeights;
use crate::geometry::Point;

/// Distance from `p` to the closest guide point. Infinite when `guide` is empty.
#[inline(always)]
pub fn nearest_guide_distance(p: &Point, guide: &[Point]) -> f32 {
    guide
        .iter()
        .map(|g| p.distance(g))
        .fold(f32::INFINITY, f32::min)
}

/// Full breakdown of a stroke against a set of guide points.
///
/// Empty input on either side scores zero. The result is always inside
/// `[0, 100]`, whatever the threshold.
pub fn score_details(
    user: &[Point],
    guide: &[Point],
    threshold: f32,
    weights: &ScoringWeights,
) -> ScoreDetails {
    if user.is_empty() || guide.is_empty() {
        return ScoreDetails {
            total_points: user.len(),
            ..Default::default()
        };
    }

    let mut matched = 0usize;
    let mut total_distance = 0.0f64;
    let mut max_distance = 0.0f32;

    for p in user {
        let d = nearest_guide_distance(p, guide);
        if d <= threshold {
            matched += 1;
        }
        total_distance += d as f64;
        max_distance = max_distance.max(d);
    }

    let n = user.len() as f32;
    let match_ratio = matched as f32 / n;
    let avg_distance = (total_distance / user.len() as f64) as f32;

    // A non-positive threshold leaves only exact hits worth anything.
    let distance_score = if threshold > 0.0 {
        (1.0 - avg_distance / threshold).max(0.0)
    } else if avg_distance == 0.0 {
        1.0
    } else {
        0.0
    };

    let blended =
        (match_ratio * weights.match_weight + distance_score * weights.distance_weight) * 100.0;
    let accuracy = if blended.is_finite() {
        blended.clamp(0.0, 100.0)
    } else {
        0.0
    };

    ScoreDetails {
        accuracy,
        stars: stars_for(accuracy, weights),
        match_ratio,
        matched_points: matched,
        total_points: user.len(),
        avg_distance,
        max_distance,
        distance_score,
    }
}

/// Step function from accuracy to a 0-3 star rating. NaN earns nothing.
#[inline(always)]
pub fn stars_for(accuracy: f32, weights: &ScoringWeights) -> u8 {
    if accuracy >= weights.three_star_accuracy {
        3
    } else if accuracy >= weights.two_star_accuracy {
        2
    } else if accuracy >= weights.one_star_accuracy {
        1
    } else {
        0
    }
}

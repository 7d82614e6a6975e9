use crate::reports;
use clap::Args;
use rayon::prelude::*;
use std::f32::consts::TAU;
use traceforge::config::Config;
use traceforge::difficulty::DifficultyTier;
use traceforge::error::TfResult;
use traceforge::geometry::Point;
use traceforge::letters::LetterCatalog;
use traceforge::scorer::{ScoreDetails, Scorer};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long, default_value = "easy")]
    pub difficulty: DifficultyTier,

    /// Distance each guide point is pushed in a random direction before scoring
    #[arg(long, default_value_t = 0.0)]
    pub jitter: f32,

    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: AuditArgs, catalog: &LetterCatalog, config: &Config) -> TfResult<()> {
    let threshold = args.difficulty.threshold_with(&config.tiers);
    let samples = config.practice.sample_count;
    let scorer = Scorer::new(config.weights.clone());

    info!(
        "Auditing {} letters at '{}' (threshold {:.0}, jitter {:.1})",
        catalog.letters().len(),
        args.difficulty,
        threshold,
        args.jitter
    );

    let mut results: Vec<(char, ScoreDetails)> = catalog
        .letters()
        .into_par_iter()
        .enumerate()
        .map(|(i, letter)| -> TfResult<(char, ScoreDetails)> {
            let reference = catalog.try_reference_path(letter, samples)?;
            let mut rng = if let Some(s) = args.seed {
                fastrand::Rng::with_seed(s.wrapping_add(i as u64))
            } else {
                fastrand::Rng::new()
            };
            let stroke: Vec<Point> = reference
                .guide_points
                .iter()
                .map(|p| {
                    let angle = rng.f32() * TAU;
                    p.offset(angle.cos() * args.jitter, angle.sin() * args.jitter)
                })
                .collect();
            let details = scorer.score_details(&stroke, &reference.guide_points, threshold);
            Ok((letter, details))
        })
        .collect::<TfResult<_>>()?;

    results.sort_by_key(|(letter, _)| *letter);

    reports::print_audit_report(&results, args.difficulty, threshold);
    Ok(())
}

use crate::consts::{DEFAULT_DAILY_GOAL, DEFAULT_FALLBACK_LETTER, DEFAULT_SAMPLE_COUNT};
use crate::error::{TfResult, TraceForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub weights: ScoringWeights,
    #[command(flatten)]
    pub tiers: TierParams,
    #[command(flatten)]
    pub practice: PracticeParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    // === BLEND ===
    // Coverage is favoured over precision for beginners.
    #[arg(long, default_value_t = 0.6)]
    pub match_weight: f32,
    #[arg(long, default_value_t = 0.4)]
    pub distance_weight: f32,

    // === STARS ===
    #[arg(long, default_value_t = 90.0)]
    pub three_star_accuracy: f32,
    #[arg(long, default_value_t = 70.0)]
    pub two_star_accuracy: f32,
    #[arg(long, default_value_t = 50.0)]
    pub one_star_accuracy: f32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            match_weight: 0.6,
            distance_weight: 0.4,
            three_star_accuracy: 90.0,
            two_star_accuracy: 70.0,
            one_star_accuracy: 50.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TierParams {
    // Max distance (canvas units) from a guide point that still counts as on the letter
    #[arg(long, default_value_t = 60.0)]
    pub threshold_easy: f32,
    #[arg(long, default_value_t = 50.0)]
    pub threshold_medium: f32,
    #[arg(long, default_value_t = 40.0)]
    pub threshold_hard: f32,

    // Rendering only
    #[arg(long, default_value_t = 30.0)]
    pub guide_thickness_easy: f32,
    #[arg(long, default_value_t = 20.0)]
    pub guide_thickness_medium: f32,
    #[arg(long, default_value_t = 10.0)]
    pub guide_thickness_hard: f32,
}

impl Default for TierParams {
    fn default() -> Self {
        Self {
            threshold_easy: 60.0,
            threshold_medium: 50.0,
            threshold_hard: 40.0,
            guide_thickness_easy: 30.0,
            guide_thickness_medium: 20.0,
            guide_thickness_hard: 10.0,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PracticeParams {
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    pub sample_count: usize,
    #[arg(long, default_value_t = DEFAULT_FALLBACK_LETTER)]
    pub fallback_letter: char,
    /// Activities per day that count as meeting the goal
    #[arg(long, default_value_t = DEFAULT_DAILY_GOAL)]
    pub daily_goal: usize,
}

impl Default for PracticeParams {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            fallback_letter: DEFAULT_FALLBACK_LETTER,
            daily_goal: DEFAULT_DAILY_GOAL,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TfResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> TfResult<()> {
        self.weights.validate()?;
        self.tiers.validate()?;
        if self.practice.sample_count == 0 {
            return Err(TraceForgeError::Config(
                "sample_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        self.weights.merge_from_cli(&cli.weights, matches);
        self.tiers.merge_from_cli(&cli.tiers, matches);
        self.practice.merge_from_cli(&cli.practice, matches);
    }
}

macro_rules! update_if_present {
    ($self:ident, $cli:ident, $matches:ident, $($field:ident),+ $(,)?) => {
        $(
            if $matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                $self.$field = $cli.$field.clone();
            }
        )+
    };
}

impl ScoringWeights {
    pub fn validate(&self) -> TfResult<()> {
        // Written as negated acceptance so NaN fails every comparison.
        let blend = self.match_weight + self.distance_weight;
        if !(self.match_weight >= 0.0
            && self.distance_weight >= 0.0
            && (blend - 1.0).abs() <= 1e-3)
        {
            return Err(TraceForgeError::Config(format!(
                "match_weight + distance_weight must be 1.0 with both non-negative (got {} + {})",
                self.match_weight, self.distance_weight
            )));
        }
        let cutoffs = [
            self.one_star_accuracy,
            self.two_star_accuracy,
            self.three_star_accuracy,
        ];
        if !(cutoffs.iter().all(|c| c.is_finite())
            && self.one_star_accuracy <= self.two_star_accuracy
            && self.two_star_accuracy <= self.three_star_accuracy)
        {
            return Err(TraceForgeError::Config(
                "star cut-offs must be finite and ordered one <= two <= three".to_string(),
            ));
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli: &ScoringWeights, matches: &ArgMatches) {
        update_if_present!(
            self,
            cli,
            matches,
            match_weight,
            distance_weight,
            three_star_accuracy,
            two_star_accuracy,
            one_star_accuracy,
        );
    }
}

impl TierParams {
    /// Harder tiers must never be more forgiving than easier ones.
    pub fn validate(&self) -> TfResult<()> {
        if !(self.threshold_hard > 0.0
            && self.threshold_hard <= self.threshold_medium
            && self.threshold_medium <= self.threshold_easy)
        {
            return Err(TraceForgeError::Config(format!(
                "thresholds must satisfy 0 < hard <= medium <= easy (got {}, {}, {})",
                self.threshold_hard, self.threshold_medium, self.threshold_easy
            )));
        }
        Ok(())
    }

    pub fn merge_from_cli(&mut self, cli: &TierParams, matches: &ArgMatches) {
        update_if_present!(
            self,
            cli,
            matches,
            threshold_easy,
            threshold_medium,
            threshold_hard,
            guide_thickness_easy,
            guide_thickness_medium,
            guide_thickness_hard,
        );
    }
}

impl PracticeParams {
    pub fn merge_from_cli(&mut self, cli: &PracticeParams, matches: &ArgMatches) {
        update_if_present!(self, cli, matches, sample_count, fallback_letter, daily_goal);
    }
}

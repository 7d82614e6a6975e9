use crate::reports;
use clap::Args;
use traceforge::api;
use traceforge::config::Config;
use traceforge::difficulty::DifficultyTier;
use traceforge::error::TfResult;
use traceforge::letters::LetterCatalog;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(short, long)]
    pub letter: char,

    /// Stroke samples, `.csv` (x,y rows) or `.json` ([{x, y}, ...])
    #[arg(short, long)]
    pub stroke: String,

    #[arg(short, long, default_value = "easy")]
    pub difficulty: DifficultyTier,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ScoreArgs, catalog: &LetterCatalog, config: &Config) -> TfResult<()> {
    let result =
        api::evaluate_stroke_file(catalog, config, args.letter, &args.stroke, args.difficulty)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        reports::print_evaluation(&result);
    }
    Ok(())
}

use crate::reports;
use clap::Args;
use traceforge::config::Config;
use traceforge::error::TfResult;
use traceforge::letters::LetterCatalog;
use traceforge::loader;
use traceforge::progress::{
    badge_board, best_by_item, summarize_day, summarize_recent, total_stars,
};

#[derive(Args, Debug, Clone)]
pub struct ProgressArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON array of completed activity records
    #[arg(short, long)]
    pub records: String,

    /// Day to summarize, as YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// Active days shown in the history table
    #[arg(long, default_value_t = 7)]
    pub days: usize,

    /// JSON array of earned badges
    #[arg(long)]
    pub badges: Option<String>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ProgressArgs, _catalog: &LetterCatalog, config: &Config) -> TfResult<()> {
    let goal = config.practice.daily_goal;
    let records = loader::load_activity_records_from_file(&args.records)?;
    let summary = summarize_day(&records, &args.date, goal);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    reports::print_daily_summary(&summary, goal);
    reports::print_recent_days(&summarize_recent(&records, args.days, goal));
    reports::print_best_attempts(&best_by_item(&records), total_stars(&records));

    if let Some(path) = &args.badges {
        let earned = loader::load_badges_from_file(path)?;
        reports::print_badge_board(&badge_board(&earned));
    }
    Ok(())
}

use crate::reports;
use clap::Args;
use traceforge::config::Config;
use traceforge::error::{TfResult, TraceForgeError};
use traceforge::letters::{normalize_letter, LetterCatalog};
use traceforge::practice::PracticeQueue;
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct PracticeArgs {
    #[command(flatten)]
    pub config: Config,

    /// Letters to drill, e.g. "abcde". Defaults to the whole catalog.
    #[arg(long)]
    pub letters: Option<String>,

    #[arg(short = 'n', long, default_value_t = 10)]
    pub count: usize,

    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn run(args: PracticeArgs, catalog: &LetterCatalog, _config: &Config) -> TfResult<()> {
    let pool: Vec<char> = match &args.letters {
        Some(raw) => {
            let mut picked: Vec<char> = Vec::new();
            for c in raw.chars().filter(|c| !c.is_whitespace()).map(normalize_letter) {
                if !catalog.contains(c) {
                    warn!("'{}' has no path definition; left out of the drill", c);
                    continue;
                }
                if !picked.contains(&c) {
                    picked.push(c);
                }
            }
            picked
        }
        None => catalog.letters(),
    };

    if pool.is_empty() {
        return Err(TraceForgeError::Config(
            "no drillable letters selected".to_string(),
        ));
    }

    let seed = args.seed.unwrap_or_else(|| fastrand::u64(..));
    info!("Drill of {} from {} letters (seed {})", args.count, pool.len(), seed);

    let queue = PracticeQueue::new(&pool, seed);
    let drill: Vec<char> = queue.take(args.count).collect();
    reports::print_drill(&drill, seed);
    Ok(())
}

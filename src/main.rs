use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::collections::BTreeMap;
use std::process;
use traceforge::config::Config;
use traceforge::letters::LetterCatalog;
use tracing::{error, info};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON settings file; explicit command-line flags win over it.
    #[arg(global = true, long)]
    config_file: Option<String>,

    /// JSON object of extra or replacement letter paths.
    #[arg(global = true, long)]
    letters_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List letters or dump one letter's guide points
    Letters(cmd::letters::LettersArgs),
    /// Score a recorded stroke against a letter
    Score(cmd::score::ScoreArgs),
    /// Score every letter's own guide path, optionally displaced
    Audit(cmd::audit::AuditArgs),
    /// Print a seeded drill order
    Practice(cmd::practice::PracticeArgs),
    /// Summarize a day of completed activities
    Progress(cmd::progress::ProgressArgs),
}

fn main() {
    // Raw matches are kept to tell explicit flags apart from defaults.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let cli_config = match &cli.command {
        Commands::Letters(args) => &args.config,
        Commands::Score(args) => &args.config,
        Commands::Audit(args) => &args.config,
        Commands::Practice(args) => &args.config,
        Commands::Progress(args) => &args.config,
    };
    let sub_matches = match matches.subcommand() {
        Some((_, m)) => m,
        None => {
            error!("No command given");
            process::exit(2);
        }
    };

    let config = match &cli.config_file {
        Some(path) => {
            info!("Loading settings from: {}", path);
            let mut file_config = Config::load_from_file(path).unwrap_or_else(|e| {
                error!("{}", e);
                process::exit(1);
            });
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        None => cli_config.clone(),
    };
    if let Err(e) = config.validate() {
        error!("{}", e);
        process::exit(1);
    }

    let fallback = config.practice.fallback_letter;
    let catalog = match &cli.letters_file {
        Some(path) => LetterCatalog::from_definitions_file(path, fallback),
        None => LetterCatalog::with_definitions(&BTreeMap::new(), fallback),
    };
    let catalog = catalog.unwrap_or_else(|e| {
        error!("Failed to build letter catalog: {}", e);
        process::exit(1);
    });

    let outcome = match cli.command {
        Commands::Letters(args) => cmd::letters::run(args, &catalog, &config),
        Commands::Score(args) => cmd::score::run(args, &catalog, &config),
        Commands::Audit(args) => cmd::audit::run(args, &catalog, &config),
        Commands::Practice(args) => cmd::practice::run(args, &catalog, &config),
        Commands::Progress(args) => cmd::progress::run(args, &catalog, &config),
    };

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(1);
    }
}

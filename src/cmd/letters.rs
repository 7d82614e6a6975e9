use crate::reports;
use clap::Args;
use traceforge::config::Config;
use traceforge::error::TfResult;
use traceforge::geometry::{parse_path, path_length};
use traceforge::letters::{LetterCatalog, ReferencePath};

#[derive(Args, Debug, Clone)]
pub struct LettersArgs {
    #[command(flatten)]
    pub config: Config,

    /// Dump the guide points of a single letter
    #[arg(short, long)]
    pub letter: Option<char>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: LettersArgs, catalog: &LetterCatalog, config: &Config) -> TfResult<()> {
    let samples = config.practice.sample_count;

    if let Some(letter) = args.letter {
        let reference = catalog.try_reference_path(letter, samples)?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&reference)?);
        } else {
            reports::print_guide_points(&reference);
        }
        return Ok(());
    }

    let references = catalog
        .letters()
        .into_iter()
        .map(|l| catalog.try_reference_path(l, samples))
        .collect::<TfResult<Vec<ReferencePath>>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&references)?);
        return Ok(());
    }

    let mut rows = Vec::with_capacity(references.len());
    for reference in &references {
        let commands = parse_path(&reference.path)?;
        rows.push(reports::LetterRow {
            letter: reference.letter,
            commands: commands.len(),
            length: path_length(&commands),
            guide_points: reference.guide_points.len(),
        });
    }
    reports::print_letter_table(&rows, catalog.fallback_letter());
    Ok(())
}

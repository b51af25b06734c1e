use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use lexsim::config::Config;
use lexsim::pipeline::{self, Outcome};

/// lexsim: find the most similar pair of text files.
///
/// Each .txt file in the directory is reduced to its K most frequent words
/// (stopwords A, AND, AN, OF, IN, THE removed). Every pair of files is then
/// ranked by how many of those words they share, with the Jaccard index of
/// the two word sets breaking ties.
#[derive(Parser)]
#[command(name = "lexsim", version, about)]
struct Cli {
    /// Directory containing .txt files (not searched recursively)
    #[arg(long)]
    dir: PathBuf,

    /// K for top frequent words (default: $LEXSIM_TOPK or 15)
    #[arg(long)]
    topk: Option<usize>,

    /// Export prefix for CSVs, e.g. `results` -> results_pairs.csv, results_topk.csv
    #[arg(long)]
    export: Option<String>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so the report on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lexsim=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.dir, cli.topk, cli.export, cli.json)?;
    info!(top_k = config.top_k, export = %config.export_prefix, "Starting analysis");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match pipeline::run(&config, &mut out)? {
        Outcome::InsufficientInput { found } => {
            info!(found, "Not enough .txt files to compare");
        }
        Outcome::Complete(analysis) => {
            info!(pairs = analysis.pairs.len(), "Analysis complete");
        }
    }
    out.flush()?;

    Ok(())
}

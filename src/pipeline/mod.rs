// The analysis pipeline: scan → tokenize → rank → compare → sort → report.
//
// `analyze` does the work and returns plain data. `run` adds the side
// effects: the console (or JSON) report and the optional CSV export.

pub mod ranking;

use std::io::Write;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::corpus::{list_text_files, Document};
use crate::output;
use ranking::{ranked_pairs, PairResult};

/// Shown when the directory has fewer than two .txt files.
pub const INSUFFICIENT_INPUT_MESSAGE: &str = "Please provide at least 2 .txt files in the directory.";

/// Result of a completed analysis.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub top_k: usize,
    /// In file name order
    pub documents: Vec<Document>,
    /// Most similar first
    pub pairs: Vec<PairResult>,
}

impl Analysis {
    /// The top-ranked pair.
    pub fn most_similar(&self) -> Option<&PairResult> {
        self.pairs.first()
    }
}

/// What a run produced.
#[derive(Debug)]
pub enum Outcome {
    /// Too few .txt files; nothing was read or written
    InsufficientInput { found: usize },
    Complete(Analysis),
}

/// Analyze every .txt file in the configured directory.
pub fn analyze(config: &Config) -> Result<Outcome> {
    config.validate()?;

    let files = list_text_files(&config.dir)?;
    info!(dir = %config.dir.display(), files = files.len(), "Scanned directory");

    if files.len() < 2 {
        return Ok(Outcome::InsufficientInput { found: files.len() });
    }

    let documents = files
        .iter()
        .map(|path| Document::load(path, config.top_k))
        .collect::<Result<Vec<_>>>()?;

    let pairs = ranked_pairs(&documents);
    info!(
        documents = documents.len(),
        pairs = pairs.len(),
        "Compared documents"
    );

    Ok(Outcome::Complete(Analysis {
        top_k: config.top_k,
        documents,
        pairs,
    }))
}

/// Analyze, print the report to `out`, and write exports if requested.
pub fn run(config: &Config, out: &mut impl Write) -> Result<Outcome> {
    let outcome = analyze(config)?;

    match &outcome {
        Outcome::InsufficientInput { .. } => {
            writeln!(out, "{INSUFFICIENT_INPUT_MESSAGE}")?;
        }
        Outcome::Complete(analysis) => {
            if config.json {
                output::json::write_report(out, analysis)?;
            } else {
                output::terminal::write_report(out, analysis)?;
            }

            if config.exports() {
                let (pairs_path, topk_path) = config.export_paths();
                output::csv::write_pairs(&pairs_path, &analysis.pairs)?;
                output::csv::write_topk(&topk_path, analysis)?;
                info!(
                    pairs = %pairs_path.display(),
                    topk = %topk_path.display(),
                    "Exported CSV tables"
                );
                if !config.json {
                    output::terminal::write_exported(out, &pairs_path, &topk_path)?;
                }
            }
        }
    }

    Ok(outcome)
}

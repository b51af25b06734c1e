// Console report for a completed analysis.
//
// Section headers are bold when colors are enabled (colored honours NO_COLOR
// and non-tty output); the rest of the report is plain text so two runs over
// the same inputs print the same bytes.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::corpus::Document;
use crate::pipeline::ranking::PairResult;
use crate::pipeline::Analysis;
use crate::topics::frequency::TopKEntry;
use crate::topics::overlap::format_score;

/// Write the full text report: file list, per-document tables, pair ranking
/// and the most similar pair.
pub fn write_report(out: &mut impl Write, analysis: &Analysis) -> io::Result<()> {
    write_file_list(out, &analysis.documents)?;
    for doc in &analysis.documents {
        write_document(out, doc, analysis.top_k)?;
    }
    write_pairs(out, &analysis.pairs)?;
    if let Some(best) = analysis.most_similar() {
        write_most_similar(out, best)?;
    }
    Ok(())
}

fn write_file_list(out: &mut impl Write, documents: &[Document]) -> io::Result<()> {
    writeln!(out, "Found {} .txt files:", documents.len())?;
    for doc in documents {
        writeln!(out, " - {}", doc.name)?;
    }
    writeln!(out)
}

/// One document's token total and ranked top-K table.
pub fn write_document(out: &mut impl Write, doc: &Document, top_k: usize) -> io::Result<()> {
    writeln!(out, "{}", format!("=== {} ===", doc.name).bold())?;
    writeln!(
        out,
        "Total tokens (after cleaning & stopword removal): {}",
        doc.total_tokens()
    )?;
    writeln!(out, "Top-{top_k} words:")?;
    for entry in &doc.top_k.entries {
        writeln!(out, "{}", format_entry(entry))?;
    }
    writeln!(out)
}

fn write_pairs(out: &mut impl Write, pairs: &[PairResult]) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        "=== Pairwise similarity (by common TOP-K words, then Jaccard) ===".bold()
    )?;
    for pair in pairs {
        writeln!(out, "{}", format_pair(pair))?;
    }
    writeln!(out)
}

fn write_most_similar(out: &mut impl Write, best: &PairResult) -> io::Result<()> {
    writeln!(out, "{}", "Most similar pair (by this method):".bold())?;
    writeln!(
        out,
        " -> {} and {} (COMMON={}, JACCARD={})",
        best.file_a,
        best.file_b,
        best.common,
        format_score(best.jaccard)
    )
}

/// Announce the export files after they were written.
pub fn write_exported(out: &mut impl Write, pairs_path: &Path, topk_path: &Path) -> io::Result<()> {
    writeln!(
        out,
        "\nExported: {} and {}",
        pairs_path.display(),
        topk_path.display()
    )
}

/// A top-K table row: word right-aligned, count padded, frequency to 4 places.
pub fn format_entry(entry: &TopKEntry) -> String {
    format!(
        "  {:>15}  COUNT={:<5}  NORM_FREQ={:.4}",
        entry.word, entry.count, entry.norm_freq
    )
}

/// A pair line in the similarity section.
pub fn format_pair(pair: &PairResult) -> String {
    format!(
        "{}  vs  {}  ->  COMMON={}, JACCARD={}",
        pair.file_a,
        pair.file_b,
        pair.common,
        format_score(pair.jaccard)
    )
}

// CSV export of the ranked pairs and the flattened top-K tables.
//
// Rows end in CRLF. Fields are quoted only when they contain a comma, a
// double quote or a line break; embedded quotes are doubled.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::pipeline::ranking::PairResult;
use crate::pipeline::Analysis;
use crate::topics::overlap::format_score;

const PAIRS_HEADER: [&str; 4] = ["FILE_A", "FILE_B", "COMMON_TOPK_WORDS", "JACCARD"];
const TOPK_HEADER: [&str; 6] = ["FILE", "WORD", "COUNT", "NORM_FREQ", "TOTAL_TOKENS", "TOPK"];

/// Write the pairs table in ranked order.
pub fn write_pairs(path: &Path, pairs: &[PairResult]) -> Result<()> {
    let mut out = create(path)?;
    write_pairs_to(&mut out, pairs)
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Write one row per (file, top-K word), files in report order.
pub fn write_topk(path: &Path, analysis: &Analysis) -> Result<()> {
    let mut out = create(path)?;
    write_topk_to(&mut out, analysis)
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

pub fn write_pairs_to(out: &mut impl Write, pairs: &[PairResult]) -> io::Result<()> {
    write_record(out, &PAIRS_HEADER)?;
    for pair in pairs {
        write_record(
            out,
            &[
                &pair.file_a,
                &pair.file_b,
                &pair.common.to_string(),
                &format_score(pair.jaccard),
            ],
        )?;
    }
    Ok(())
}

pub fn write_topk_to(out: &mut impl Write, analysis: &Analysis) -> io::Result<()> {
    write_record(out, &TOPK_HEADER)?;
    let top_k = analysis.top_k.to_string();
    for doc in &analysis.documents {
        let total = doc.total_tokens().to_string();
        for entry in &doc.top_k.entries {
            write_record(
                out,
                &[
                    &doc.name,
                    &entry.word,
                    &entry.count.to_string(),
                    &format!("{:.6}", entry.norm_freq),
                    &total,
                    &top_k,
                ],
            )?;
        }
    }
    Ok(())
}

fn write_record<S: AsRef<str>>(out: &mut impl Write, fields: &[S]) -> io::Result<()> {
    let line: Vec<String> = fields.iter().map(|f| escape(f.as_ref())).collect();
    write!(out, "{}\r\n", line.join(","))
}

/// Quote a field if it needs it.
pub fn escape(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

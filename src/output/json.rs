// Machine-readable report (`--json`).

use std::io::{self, Write};

use serde::Serialize;

use crate::pipeline::ranking::PairResult;
use crate::pipeline::Analysis;
use crate::topics::frequency::TopKEntry;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub top_k: usize,
    pub documents: Vec<JsonDocument<'a>>,
    pub pairs: &'a [PairResult],
    pub most_similar: Option<&'a PairResult>,
}

#[derive(Debug, Serialize)]
pub struct JsonDocument<'a> {
    pub file: &'a str,
    pub total_tokens: usize,
    pub top_k: &'a [TopKEntry],
}

impl<'a> JsonReport<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        let documents = analysis
            .documents
            .iter()
            .map(|doc| JsonDocument {
                file: &doc.name,
                total_tokens: doc.total_tokens(),
                top_k: &doc.top_k.entries,
            })
            .collect();

        Self {
            top_k: analysis.top_k,
            documents,
            pairs: &analysis.pairs,
            most_similar: analysis.most_similar(),
        }
    }
}

/// Print the analysis as one pretty-printed JSON document.
pub fn write_report(out: &mut impl Write, analysis: &Analysis) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, &JsonReport::new(analysis))?;
    writeln!(out)
}

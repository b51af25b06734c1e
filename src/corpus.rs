// Corpus loading — find the .txt files in a directory and turn each into a
// Document with its tokens and top-K table.
//
// Files are read one at a time, fully, and released before the next one is
// opened. Any read failure aborts the whole run.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::topics::frequency::{top_k, TopKTable};
use crate::topics::tokenizer::{decode_ignoring_invalid, tokenize};

/// One analyzed input file.
#[derive(Debug, Clone)]
pub struct Document {
    /// File name without directory
    pub name: String,
    pub tokens: Vec<String>,
    pub top_k: TopKTable,
}

impl Document {
    /// Build a document from already-decoded text.
    pub fn from_text(name: impl Into<String>, text: &str, k: usize) -> Self {
        let tokens = tokenize(text);
        let top_k = top_k(&tokens, k);
        Self {
            name: name.into(),
            tokens,
            top_k,
        }
    }

    /// Read, decode and analyze a file.
    pub fn load(path: &Path, k: usize) -> Result<Self> {
        let bytes =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let text = decode_ignoring_invalid(&bytes);
        let doc = Self::from_text(file_name(path), &text, k);

        debug!(
            file = %doc.name,
            total_tokens = doc.top_k.total_tokens,
            distinct_top = doc.top_k.entries.len(),
            "Analyzed document"
        );
        if doc.top_k.total_tokens == 0 {
            warn!(file = %doc.name, "Document has no tokens after filtering");
        }

        Ok(doc)
    }

    pub fn total_tokens(&self) -> usize {
        self.top_k.total_tokens
    }
}

/// List regular files in `dir` whose name ends in `.txt` (any case), sorted
/// by path. Subdirectories are not descended into.
pub fn list_text_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let path = entry.path();
        let is_txt = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase().ends_with(".txt"))
            .unwrap_or(false);
        if is_txt && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// The display name of a path: its final component.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

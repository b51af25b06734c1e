// Frequency ranking — the K most frequent tokens of a document.
//
// Counts are accumulated in first-encounter order, then stably sorted by
// count. Words with equal counts therefore keep the order in which they first
// appeared, which decides who makes the cut at position K.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

/// Default number of top words kept per document.
pub const DEFAULT_TOP_K: usize = 15;

/// One ranked word in a document's top-K table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopKEntry {
    pub word: String,
    pub count: usize,
    /// count / total filtered tokens (0.0 for an empty document)
    pub norm_freq: f64,
}

/// A document's top-K table plus the token total used as denominator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopKTable {
    /// Ranked by count descending, earliest first occurrence first on ties
    pub entries: Vec<TopKEntry>,
    pub total_tokens: usize,
}

impl TopKTable {
    /// The set of words in the table, for overlap comparison.
    pub fn word_set(&self) -> HashSet<&str> {
        self.entries.iter().map(|e| e.word.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rank tokens by frequency and keep at most `k` entries.
pub fn top_k(tokens: &[String], k: usize) -> TopKTable {
    let total_tokens = tokens.len();

    // Distinct words in first-seen order, with a lookup into that order
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut position: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        match position.get(token.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                position.insert(token.as_str(), counts.len());
                counts.push((token.as_str(), 1));
            }
        }
    }

    // sort_by is stable: equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(k);

    let entries = counts
        .into_iter()
        .map(|(word, count)| TopKEntry {
            word: word.to_string(),
            count,
            norm_freq: normalized(count, total_tokens),
        })
        .collect();

    TopKTable {
        entries,
        total_tokens,
    }
}

fn normalized(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

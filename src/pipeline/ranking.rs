// Pairwise comparison and ranking.
//
// Every unordered pair of distinct documents is compared once, in input
// order (0,1), (0,2), ..., (1,2), ... The list is then sorted by common
// top-K words descending, with the rounded Jaccard index breaking ties.

use serde::Serialize;

use crate::corpus::Document;
use crate::topics::overlap::{overlap, round4};

/// Similarity of one pair of documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairResult {
    pub file_a: String,
    pub file_b: String,
    pub common: usize,
    /// Jaccard index of the top-K word sets, rounded to 4 decimals
    pub jaccard: f64,
}

/// Compare every pair of documents, without ranking.
pub fn compare_all(documents: &[Document]) -> Vec<PairResult> {
    let sets: Vec<_> = documents.iter().map(|d| d.top_k.word_set()).collect();

    let mut pairs = Vec::with_capacity(documents.len() * documents.len().saturating_sub(1) / 2);
    for i in 0..documents.len() {
        for j in (i + 1)..documents.len() {
            let result = overlap(&sets[i], &sets[j]);
            pairs.push(PairResult {
                file_a: documents[i].name.clone(),
                file_b: documents[j].name.clone(),
                common: result.common,
                jaccard: round4(result.jaccard),
            });
        }
    }
    pairs
}

/// Order pairs most-similar first.
///
/// Both keys are compared together in one descending sort. Pairs equal on
/// both keys keep their comparison order.
pub fn rank_pairs(pairs: &mut [PairResult]) {
    pairs.sort_by(|a, b| {
        b.common
            .cmp(&a.common)
            .then_with(|| b.jaccard.total_cmp(&a.jaccard))
    });
}

/// Compare and rank in one step.
pub fn ranked_pairs(documents: &[Document]) -> Vec<PairResult> {
    let mut pairs = compare_all(documents);
    rank_pairs(&mut pairs);
    pairs
}

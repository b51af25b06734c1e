// Unit tests for the word statistics functions.
//
// Tests isolated pure functions: tokenize edge cases, top_k ranking
// invariants, and overlap numerical edge cases.

use std::collections::HashSet;

use lexsim::topics::frequency::top_k;
use lexsim::topics::overlap::{format_score, overlap, round4};
use lexsim::topics::tokenizer::tokenize;

// ============================================================
// tokenize
// ============================================================

#[test]
fn tokenize_mixed_case_and_punctuation() {
    assert_eq!(
        tokenize("The Cat and the DOG, the dog-house!"),
        vec!["CAT", "DOG", "DOG", "HOUSE"]
    );
}

#[test]
fn tokenize_preserves_source_order() {
    assert_eq!(
        tokenize("zebra, an apple; of mango in THE yard"),
        vec!["ZEBRA", "APPLE", "MANGO", "YARD"]
    );
}

#[test]
fn tokenize_underscore_and_apostrophe_split() {
    assert_eq!(tokenize("don't snake_case"), vec!["DON", "T", "SNAKE", "CASE"]);
}

#[test]
fn tokenize_newlines_and_tabs() {
    assert_eq!(tokenize("one\ntwo\r\nthree\tfour"), vec!["ONE", "TWO", "THREE", "FOUR"]);
}

// ============================================================
// top_k — ranking invariants
// ============================================================

fn toks(text: &str) -> Vec<String> {
    tokenize(text)
}

#[test]
fn top_k_never_exceeds_k() {
    let tokens = toks("alpha beta gamma delta epsilon zeta eta theta");
    assert_eq!(top_k(&tokens, 3).entries.len(), 3);
    assert_eq!(top_k(&tokens, 1).entries.len(), 1);
}

#[test]
fn top_k_sorted_by_count_descending() {
    let tokens = toks("x y y z z z w w w w");
    let table = top_k(&tokens, 15);
    let counts: Vec<usize> = table.entries.iter().map(|e| e.count).collect();
    assert_eq!(counts, vec![4, 3, 2, 1]);
}

#[test]
fn top_k_norm_freq_sum_bounded() {
    let tokens = toks("red green blue red green red yellow purple orange red");
    let table = top_k(&tokens, 3);
    let sum: f64 = table.entries.iter().map(|e| e.norm_freq).sum();
    assert!(sum <= 1.0, "norm_freq sum {sum} exceeds 1.0");
    for entry in &table.entries {
        assert_eq!(entry.norm_freq, entry.count as f64 / table.total_tokens as f64);
    }
}

#[test]
fn top_k_total_counts_all_tokens_not_just_kept() {
    let table = top_k(&toks("one two three four five"), 2);
    assert_eq!(table.total_tokens, 5);
    assert_eq!(table.entries[0].norm_freq, 0.2);
}

#[test]
fn top_k_empty_document_has_zero_total() {
    let table = top_k(&toks("the and of a an in"), 15);
    assert!(table.entries.is_empty());
    assert_eq!(table.total_tokens, 0);
}

// ============================================================
// overlap — numerical edge cases
// ============================================================

#[test]
fn overlap_common_matches_intersection() {
    let a = top_k(&toks("sun moon star sky"), 15);
    let b = top_k(&toks("moon sky cloud rain wind"), 15);
    let (set_a, set_b) = (a.word_set(), b.word_set());
    let result = overlap(&set_a, &set_b);
    assert_eq!(result.common, set_a.intersection(&set_b).count());
    assert_eq!(result.common, 2);
    // 2 shared out of 7 distinct
    assert!((result.jaccard - 2.0 / 7.0).abs() < 1e-12);
}

#[test]
fn overlap_jaccard_in_unit_interval() {
    let docs = ["a b c", "c d e f", "", "b c", "x"];
    for first in docs {
        for second in docs {
            let a = top_k(&toks(first), 15);
            let b = top_k(&toks(second), 15);
            let result = overlap(&a.word_set(), &b.word_set());
            assert!((0.0..=1.0).contains(&result.jaccard));
            assert!(result.common <= a.entries.len().min(b.entries.len()));
        }
    }
}

#[test]
fn overlap_both_empty_is_zero() {
    let empty: HashSet<String> = HashSet::new();
    let result = overlap(&empty, &empty);
    assert_eq!(result.common, 0);
    assert_eq!(result.jaccard, 0.0);
}

#[test]
fn overlap_half_tie_rounds_to_even() {
    // 17 + 16 words sharing one: Jaccard 1/32 = 0.03125 exactly
    let first: Vec<String> = (0..17).map(|i| format!("W{i}")).collect();
    let mut second: Vec<String> = (100..115).map(|i| format!("W{i}")).collect();
    second.push("W0".to_string());

    let a = top_k(&first, 17);
    let b = top_k(&second, 17);
    let result = overlap(&a.word_set(), &b.word_set());
    assert_eq!(result.common, 1);
    assert_eq!(result.jaccard, 0.03125);

    let rounded = round4(result.jaccard);
    assert_eq!(rounded, 0.0312);
    assert_eq!(format_score(rounded), "0.0312");
}

// Top-K overlap between two documents.
//
// Only the words matter here, not their counts. Two measures come out of one
// set comparison: the number of shared top-K words, and the Jaccard index
//
//   |A ∩ B| / |A ∪ B|
//
// which is defined as 0.0 when both sets are empty.

use std::collections::HashSet;
use std::hash::Hash;

/// Overlap measures for one pair of top-K word sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub common: usize,
    pub jaccard: f64,
}

/// Compare two word sets.
pub fn overlap<T: Eq + Hash>(set_a: &HashSet<T>, set_b: &HashSet<T>) -> Overlap {
    let common = set_a.intersection(set_b).count();
    let union = set_a.len() + set_b.len() - common;

    let jaccard = if union == 0 {
        0.0
    } else {
        common as f64 / union as f64
    };

    Overlap { common, jaccard }
}

/// Round to 4 decimal places, the precision pairs are reported and ranked at.
///
/// Exact halves go to the even neighbour, so 1/32 rounds to 0.0312.
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round_ties_even() / 10_000.0
}

/// Shortest text that reads back as `value`, always with a decimal point
/// (`1.0`, `0.5`, `0.3333`).
pub fn format_score(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{text}.0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set<'a>(words: &[&'a str]) -> HashSet<&'a str> {
        words.iter().copied().collect()
    }

    #[test]
    fn test_identical_sets() {
        let a = set(&["APPLE", "BANANA"]);
        let result = overlap(&a, &a);
        assert_eq!(result.common, 2);
        assert_eq!(result.jaccard, 1.0);
    }

    #[test]
    fn test_no_overlap() {
        let result = overlap(&set(&["FAT", "QUEER"]), &set(&["SPORTS", "GAMING"]));
        assert_eq!(result.common, 0);
        assert_eq!(result.jaccard, 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let result = overlap(&set(&["A1", "B", "C"]), &set(&["B", "C", "D"]));
        assert_eq!(result.common, 2);
        assert!((result.jaccard - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_both_empty() {
        let empty: HashSet<&str> = HashSet::new();
        assert_eq!(overlap(&empty, &empty), Overlap { common: 0, jaccard: 0.0 });
    }

    #[test]
    fn test_one_empty() {
        let empty: HashSet<&str> = HashSet::new();
        let result = overlap(&empty, &set(&["WORD"]));
        assert_eq!(result.common, 0);
        assert_eq!(result.jaccard, 0.0);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(1.0 / 3.0), 0.3333);
        assert_eq!(round4(2.0 / 3.0), 0.6667);
        assert_eq!(round4(0.0), 0.0);
    }

    #[test]
    fn test_round4_ties_to_even() {
        assert_eq!(round4(1.0 / 32.0), 0.0312);
        assert_eq!(round4(3.0 / 32.0), 0.0938);
        assert_eq!(round4(5.0 / 32.0), 0.1562);
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(1.0), "1.0");
        assert_eq!(format_score(0.0), "0.0");
        assert_eq!(format_score(0.5), "0.5");
        assert_eq!(format_score(0.3333), "0.3333");
        assert_eq!(format_score(round4(1.0 / 32.0)), "0.0312");
    }
}

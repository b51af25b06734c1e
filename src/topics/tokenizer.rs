// Tokenizer — raw text to a filtered, upper-cased token stream.
//
// A token is a maximal run of ASCII letters and digits. Everything else
// (punctuation, whitespace, non-ASCII characters) separates tokens. The six
// stopwords are dropped after upper-casing; the remaining tokens keep their
// source order.

use std::sync::OnceLock;

use regex_lite::Regex;

/// The fixed stopword list, already upper-cased.
pub const STOPWORDS: [&str; 6] = ["A", "AND", "AN", "OF", "IN", "THE"];

fn separator() -> &'static Regex {
    static SEPARATOR: OnceLock<Regex> = OnceLock::new();
    SEPARATOR.get_or_init(|| Regex::new(r"[^0-9A-Za-z]+").expect("static regex is valid"))
}

/// Check whether an upper-cased token is one of the stopwords.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Split text into upper-cased alphanumeric tokens with stopwords removed.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned = separator().replace_all(text, " ").to_ascii_uppercase();
    cleaned
        .split_whitespace()
        .filter(|token| !is_stopword(token))
        .map(str::to_string)
        .collect()
}

/// Decode raw file bytes as UTF-8, skipping invalid sequences.
///
/// Skipped bytes leave no separator behind, so `b"ab\xffcd"` decodes to
/// `"abcd"` and becomes a single token.
pub fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(e) => {
                let (valid, after) = rest.split_at(e.valid_up_to());
                // valid_up_to guarantees this prefix is well-formed
                out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                match e.error_len() {
                    Some(len) => rest = &after[len..],
                    // Truncated sequence at end of input
                    None => break,
                }
            }
        }
    }

    out
}

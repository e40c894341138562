//! Benchmark keyword matching.
//!
//! Each vocabulary entry matches as a whole word or contiguous word phrase,
//! case-insensitive. "Benchmarking" does not match `benchmark`, and
//! "test suite" only matches as the two adjacent words.

use std::sync::LazyLock;

use regex::Regex;

/// The benchmark keyword vocabulary, in match-reporting order.
pub const KEYWORDS: [&str; 9] = [
    "benchmark",
    "dataset",
    "evaluation",
    "leaderboard",
    "testbed",
    "test bed",
    "test suite",
    "corpus",
    "survey",
];

/// Word-boundary patterns for each vocabulary entry (compiled once).
static PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    KEYWORDS
        .iter()
        .map(|kw| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(kw));
            (*kw, Regex::new(&pattern).expect("keyword regex"))
        })
        .collect()
});

/// Return the vocabulary entries matching `title`, in vocabulary order.
///
/// An empty result means the title is not benchmark-related; the extraction
/// pipeline uses this as its filter predicate.
pub fn match_keywords(title: &str) -> Vec<String> {
    PATTERNS
        .iter()
        .filter(|(_, pattern)| pattern.is_match(title))
        .map(|(kw, _)| (*kw).to_string())
        .collect()
}

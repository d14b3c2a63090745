//! Compiled regex patterns for title cleaning.
//!
//! All patterns are compiled once on first use via `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Marketing Suffix Patterns
// =============================================================================

/// Separators that introduce a trailing marketing annotation.
static SUFFIX_SEPARATORS: [&str; 3] = [r"\|", "-", "•"];

/// Trailing annotations stripped from titles, in application order.
///
/// "next day delivery" is only recognised after a `|` separator.
static SUFFIX_VOCABULARY: [&str; 13] = [
    r"buy\s+now",
    r"free\s+shipping",
    r"fast\s+shipping",
    r"next\s+day\s+delivery",
    "amazon",
    "ebay",
    "walmart",
    "target",
    "shop",
    "store",
    "online",
    r"official\s+store",
    r"official\s+site",
];

/// End-anchored, case-insensitive suffix patterns in the order they are applied.
///
/// Separator-major: every `|` pattern first, then `-`, then `•`. Each pattern
/// is meant to be tried once against the current string, so a title carrying
/// two annotations only loses both when their patterns happen to come in the
/// right order.
pub static MARKETING_SUFFIXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SUFFIX_SEPARATORS
        .iter()
        .flat_map(|sep| {
            SUFFIX_VOCABULARY
                .iter()
                .filter(move |term| *sep == r"\|" || !term.starts_with("next"))
                .map(move |term| {
                    Regex::new(&format!(r"(?i)\s*{sep}\s*{term}\s*$"))
                        .expect("MARKETING_SUFFIXES regex")
                })
        })
        .collect()
});

// =============================================================================
// Text Cleaning Patterns
// =============================================================================

/// Matches runs of whitespace for normalization.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex")
});

// =============================================================================
// Charset Detection Patterns
// =============================================================================

/// Matches `<meta charset="...">`.
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("CHARSET_META regex")
});

//! Search query generation from product names.
//!
//! A product name is cleaned with [`clean`], lower-cased and split on
//! whitespace. Three queries are then derived independently from the same
//! word list:
//!
//! 1. **main** - the title without marketing adjectives, capped in length
//! 2. **core** - first feature word plus first category word
//! 3. **simple** - the canonical product type
//!
//! The category and feature scans are independent: each takes the first
//! matching word in title order, so the feature may come from later in the
//! title than the category or the other way round.

use crate::normalize::clean;
use crate::options::QueryOptions;
use crate::result::QueryTriple;
use crate::tables;

/// Converts a product name into three search queries using default options.
///
/// Empty input yields three empty queries.
///
/// # Example
///
/// ```rust
/// use product_query::optimize_queries;
///
/// let queries = optimize_queries("Stylish Leather Crossbody Bag - Official Store");
/// assert_eq!(queries.main, "leather crossbody bag");
/// assert_eq!(queries.core, "leather bag");
/// assert_eq!(queries.simple, "bag");
/// ```
#[must_use]
pub fn optimize_queries(product_name: &str) -> QueryTriple {
    optimize_queries_with_options(product_name, &QueryOptions::default())
}

/// Converts a product name into three search queries with custom options.
#[must_use]
pub fn optimize_queries_with_options(product_name: &str, options: &QueryOptions) -> QueryTriple {
    if product_name.is_empty() {
        return QueryTriple::default();
    }

    let lowered = clean(product_name).to_lowercase();
    let words = split_words(&lowered);

    QueryTriple {
        main: main_query(&words, options),
        core: core_query(&words, options),
        simple: simple_query(&words),
    }
}

/// Splits lower-cased text into words, skipping empty segments.
#[must_use]
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Drops marketing adjectives and too-short words, keeping title order.
#[must_use]
pub fn main_query(words: &[&str], options: &QueryOptions) -> String {
    words
        .iter()
        .copied()
        .filter(|word| !tables::is_stop_word(word) && word.chars().count() >= options.min_word_len)
        .take(options.max_main_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pairs the first feature word with the first category word.
///
/// Falls back to whichever one was found, then to the leading words.
#[must_use]
pub fn core_query(words: &[&str], options: &QueryOptions) -> String {
    let category = words.iter().find(|word| tables::is_category(word));
    let feature = words.iter().find(|word| tables::is_feature(word));

    match (feature, category) {
        (Some(feature), Some(category)) => format!("{feature} {category}"),
        (None, Some(only)) | (Some(only), None) => (*only).to_string(),
        (None, None) => words
            .iter()
            .take(options.fallback_words)
            .copied()
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Maps the first recognised word to its canonical product type.
///
/// Falls back to the first word, or an empty string for an empty title.
#[must_use]
pub fn simple_query(words: &[&str]) -> String {
    words
        .iter()
        .find_map(|word| tables::canonical_type(word))
        .or_else(|| words.first().copied())
        .unwrap_or_default()
        .to_string()
}

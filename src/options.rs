//! Configuration options for query generation.
//!
//! The `QueryOptions` struct controls how aggressively a product title is
//! shortened into search queries.

/// Configuration options for query generation.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use product_query::QueryOptions;
///
/// // Use defaults
/// let options = QueryOptions::default();
///
/// // Allow longer main queries
/// let options = QueryOptions {
///     max_main_words: 8,
///     ..QueryOptions::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOptions {
    /// Maximum number of words kept in the main query.
    ///
    /// Default: `6`
    pub max_main_words: usize,

    /// Number of leading words used as the core query when neither a
    /// category nor a feature word is found.
    ///
    /// Default: `3`
    pub fallback_words: usize,

    /// Minimum length (in characters) of a word kept in the main query.
    ///
    /// Single letters and stray symbols rarely help a marketplace search.
    ///
    /// Default: `2`
    pub min_word_len: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            max_main_words: 6,
            fallback_words: 3,
            min_word_len: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let options = QueryOptions::default();
        assert_eq!(options.max_main_words, 6);
        assert_eq!(options.fallback_words, 3);
        assert_eq!(options.min_word_len, 2);
    }
}

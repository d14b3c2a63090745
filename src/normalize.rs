//! Title normalization shared by the title extractor and the query optimizer.

use crate::patterns::{MARKETING_SUFFIXES, WHITESPACE_NORMALIZE};

/// Strips trailing marketing annotations and normalizes whitespace.
///
/// Each pattern in [`MARKETING_SUFFIXES`] is applied once, in order, replacing
/// at most one trailing match. The loop does not run to a fixed point, so
/// `"Widget | Amazon | Shop"` keeps `| Amazon` because the `amazon` pattern has
/// already been tried when `| Shop` is removed.
///
/// Whitespace runs are collapsed to a single space and the result is trimmed.
///
/// # Example
///
/// ```rust
/// use product_query::clean;
///
/// assert_eq!(clean("Widget | Buy Now"), "Widget");
/// assert_eq!(clean("Widget  •   eBay"), "Widget");
/// assert_eq!(clean(""), "");
/// ```
#[must_use]
pub fn clean(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut cleaned = text.to_string();
    for suffix in MARKETING_SUFFIXES.iter() {
        cleaned = suffix.replace(&cleaned, "").into_owned();
    }

    WHITESPACE_NORMALIZE.replace_all(&cleaned, " ").trim().to_string()
}

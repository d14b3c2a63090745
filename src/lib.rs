//! # product-query
//!
//! Turns a product page into marketplace searches.
//!
//! The library finds the product title on a page, strips the marketing
//! suffixes shops append to it, derives three search queries of decreasing
//! specificity and builds search URLs for Amazon, eBay and AliExpress.
//!
//! ## Quick Start
//!
//! ```rust
//! use product_query::plan_search;
//!
//! let html = r#"<html><head><title>Shop</title></head>
//! <body><h1>Waterproof Hiking Boots | Free Shipping</h1></body></html>"#;
//!
//! let plan = plan_search(html);
//! assert_eq!(plan.title.as_deref(), Some("Waterproof Hiking Boots"));
//! assert_eq!(plan.queries.core, "waterproof boots");
//! assert_eq!(plan.queries.simple, "shoes");
//! assert!(plan.urls.ebay.ends_with("_nkw=waterproof%20hiking%20boots"));
//! ```
//!
//! ## Components
//!
//! - **Title extraction**: `<h1>`, `og:title`, `<meta name="title">`, `<title>`
//! - **Normalization**: one shared suffix stripper for titles and queries
//! - **Query generation**: main, core and simple queries from static vocabularies
//! - **Search URLs**: fixed marketplace templates plus a pluggable URL opener
//!
//! Each component is usable on its own; [`plan_search`] chains them.

mod error;
mod normalize;
mod options;
mod patterns;
mod query;
mod result;

/// HTML document adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Marketplace search URL construction.
pub mod marketplace;

/// Dispatching search URLs to an opener.
pub mod open;

/// Static word tables used for query classification.
pub mod tables;

/// Product title extraction.
pub mod title;

// Public API - re-exports
pub use dom::HtmlDocument;
pub use error::{Error, Result};
pub use marketplace::{build_search_urls, Marketplace, SearchUrls};
pub use normalize::clean;
pub use open::{open_all, open_one, OpenTarget, SystemOpener, UrlOpener};
pub use options::QueryOptions;
pub use query::{optimize_queries, optimize_queries_with_options};
pub use result::{QueryTriple, SearchPlan};
pub use title::{extract_title, extract_title_with_source, DocumentLike, ExtractedTitle, TitleSource};

/// Extracts the cleaned product title from an HTML string.
///
/// Returns `None` when the page has no `<h1>`, `og:title`, meta title or
/// `<title>` with text.
#[must_use]
pub fn extract_title_from_html(html: &str) -> Option<String> {
    extract_title(&HtmlDocument::parse(html))
}

/// Extracts the cleaned product title from HTML bytes in any declared charset.
///
/// # Example
///
/// ```rust
/// use product_query::extract_title_from_bytes;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"><title>Caf\xE9 Grinder - Shop</title></head></html>";
/// assert_eq!(extract_title_from_bytes(html).as_deref(), Some("Caf\u{e9} Grinder"));
/// ```
#[must_use]
pub fn extract_title_from_bytes(html: &[u8]) -> Option<String> {
    extract_title(&HtmlDocument::parse_bytes(html))
}

/// Runs the whole pipeline on an HTML page using default options.
///
/// Extracts the title, derives queries from it and builds search URLs for
/// the most specific non-empty query. A page without a title yields an
/// empty plan.
#[must_use]
pub fn plan_search(html: &str) -> SearchPlan {
    plan_search_with_options(html, &QueryOptions::default())
}

/// Runs the whole pipeline on an HTML page with custom query options.
#[must_use]
pub fn plan_search_with_options(html: &str, options: &QueryOptions) -> SearchPlan {
    let doc = HtmlDocument::parse(html);
    match extract_title_with_source(&doc) {
        Some(extracted) => plan_for_title(extracted.cleaned, Some(extracted.source), options),
        None => SearchPlan::default(),
    }
}

/// Plans searches for a product name that is already known.
///
/// # Example
///
/// ```rust
/// use product_query::{plan_from_name, QueryOptions};
///
/// let plan = plan_from_name("New Best Hot Gaming Laptop with RGB Keyboard", &QueryOptions::default());
/// assert_eq!(plan.queries.main, "gaming laptop with rgb keyboard");
/// assert!(plan.source.is_none());
/// ```
#[must_use]
pub fn plan_from_name(product_name: &str, options: &QueryOptions) -> SearchPlan {
    plan_for_title(clean(product_name), None, options)
}

fn plan_for_title(title: String, source: Option<TitleSource>, options: &QueryOptions) -> SearchPlan {
    let queries = optimize_queries_with_options(&title, options);
    let urls = queries
        .distinct()
        .first()
        .map(|query| build_search_urls(query))
        .unwrap_or_default();

    SearchPlan {
        title: Some(title),
        source,
        queries,
        urls,
    }
}

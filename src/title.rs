//! Product title extraction.
//!
//! Candidates are read from a [`DocumentLike`] in fixed priority order:
//!
//! 1. first `<h1>` text
//! 2. `<meta property="og:title">` content
//! 3. `<meta name="title">` content
//! 4. the document `<title>`
//!
//! The first candidate that is non-empty after trimming is cleaned and
//! returned. Candidates are never merged.

use serde::{Deserialize, Serialize};

use crate::normalize::clean;

/// Read-only view of a page, narrow enough to fake in tests.
///
/// [`crate::dom::HtmlDocument`] implements it over parsed HTML.
pub trait DocumentLike {
    /// Text content of the first element matching `selector`.
    fn first_text(&self, selector: &str) -> Option<String>;

    /// Value of `attr` on the first element matching `selector`.
    fn first_attr(&self, selector: &str, attr: &str) -> Option<String>;

    /// The whole-document title.
    fn title(&self) -> Option<String>;
}

/// Where on the page a title candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleSource {
    /// First `<h1>` element.
    Heading,
    /// `og:title` Open Graph meta tag.
    OpenGraph,
    /// `<meta name="title">`.
    MetaTitle,
    /// Document `<title>`.
    DocumentTitle,
}

impl TitleSource {
    /// All sources, highest priority first.
    pub const PRIORITY: [Self; 4] = [
        Self::Heading,
        Self::OpenGraph,
        Self::MetaTitle,
        Self::DocumentTitle,
    ];

    /// Reads this source's raw candidate from `doc`.
    pub fn read<D: DocumentLike + ?Sized>(self, doc: &D) -> Option<String> {
        match self {
            Self::Heading => doc.first_text("h1"),
            Self::OpenGraph => doc.first_attr(r#"meta[property="og:title"]"#, "content"),
            Self::MetaTitle => doc.first_attr(r#"meta[name="title"]"#, "content"),
            Self::DocumentTitle => doc.title(),
        }
    }
}

/// A title together with its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedTitle {
    /// Trimmed candidate as found on the page.
    pub raw: String,
    /// Candidate after suffix stripping and whitespace normalization.
    pub cleaned: String,
    /// Which source won.
    pub source: TitleSource,
}

/// Extracts the cleaned product title, or `None` if no source has text.
///
/// The result can still be empty when the winning candidate consists only
/// of a marketing suffix such as `"| Buy Now"`.
#[must_use]
pub fn extract_title<D: DocumentLike + ?Sized>(doc: &D) -> Option<String> {
    extract_title_with_source(doc).map(|title| title.cleaned)
}

/// Like [`extract_title`], but also reports the raw text and its source.
#[must_use]
pub fn extract_title_with_source<D: DocumentLike + ?Sized>(doc: &D) -> Option<ExtractedTitle> {
    for source in TitleSource::PRIORITY {
        let Some(candidate) = source.read(doc) else {
            continue;
        };

        let raw = candidate.trim();
        if raw.is_empty() {
            tracing::trace!(?source, "skipping blank title candidate");
            continue;
        }

        tracing::debug!(?source, raw, "title candidate selected");
        return Some(ExtractedTitle {
            raw: raw.to_string(),
            cleaned: clean(raw),
            source,
        });
    }

    tracing::debug!("no title candidate found");
    None
}

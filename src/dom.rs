//! HTML document adapter.
//!
//! Wraps a `dom_query::Document` so parsed HTML can be handed to the title
//! extractor through [`DocumentLike`].

pub use dom_query::{Document, Selection};

use crate::encoding;
use crate::title::DocumentLike;

/// A parsed HTML page.
pub struct HtmlDocument {
    doc: Document,
}

impl HtmlDocument {
    /// Parses an HTML string.
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            doc: Document::from(html),
        }
    }

    /// Parses HTML bytes, honouring a BOM or `<meta charset>` declaration.
    #[must_use]
    pub fn parse_bytes(html: &[u8]) -> Self {
        Self::parse(&encoding::decode_html(html))
    }

    /// The underlying `dom_query` document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// First element matching `selector`, if any.
    fn first(&self, selector: &str) -> Option<Selection<'_>> {
        self.doc
            .select(selector)
            .nodes()
            .first()
            .map(|node| Selection::from(*node))
    }
}

impl From<Document> for HtmlDocument {
    fn from(doc: Document) -> Self {
        Self { doc }
    }
}

impl DocumentLike for HtmlDocument {
    fn first_text(&self, selector: &str) -> Option<String> {
        self.first(selector).map(|sel| sel.text().to_string())
    }

    fn first_attr(&self, selector: &str, attr: &str) -> Option<String> {
        self.first(selector)
            .and_then(|sel| sel.attr(attr))
            .map(|value| value.to_string())
    }

    fn title(&self) -> Option<String> {
        // <title> inside inline SVG labels an icon, not the document
        let svg_titles = self.doc.select("svg title");
        let svg_ids: Vec<_> = svg_titles.nodes().iter().map(|node| node.id).collect();

        self.doc
            .select("title")
            .nodes()
            .iter()
            .find(|node| !svg_ids.contains(&node.id))
            .map(|node| Selection::from(*node).text().to_string())
    }
}

//! Result types for title extraction and query planning.

use serde::{Deserialize, Serialize};

use crate::marketplace::SearchUrls;
use crate::title::TitleSource;

/// Three search queries of decreasing specificity derived from one title.
///
/// Any of the queries may be empty when nothing usable was found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryTriple {
    /// Title words minus marketing adjectives, capped in length.
    pub main: String,

    /// `"{feature} {category}"`, either word alone, or the leading words.
    pub core: String,

    /// Canonical product type, or the first word.
    pub simple: String,
}

impl QueryTriple {
    /// Queries in `[main, core, simple]` order.
    #[must_use]
    pub fn as_array(&self) -> [&str; 3] {
        [&self.main, &self.core, &self.simple]
    }

    /// Iterates over the queries in `[main, core, simple]` order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.as_array().into_iter()
    }

    /// Non-empty queries with duplicates removed, first occurrence kept.
    #[must_use]
    pub fn distinct(&self) -> Vec<&str> {
        let mut seen = Vec::with_capacity(3);
        for query in self.iter().filter(|q| !q.is_empty()) {
            if !seen.contains(&query) {
                seen.push(query);
            }
        }
        seen
    }

    /// True when all three queries are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().all(str::is_empty)
    }
}

impl From<QueryTriple> for [String; 3] {
    fn from(triple: QueryTriple) -> Self {
        [triple.main, triple.core, triple.simple]
    }
}

/// Everything needed to search marketplaces for the product on one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPlan {
    /// Cleaned product title, if the page had one.
    pub title: Option<String>,

    /// Which part of the page the title came from.
    pub source: Option<TitleSource>,

    /// Queries derived from the title.
    pub queries: QueryTriple,

    /// Marketplace search URLs for the main query.
    pub urls: SearchUrls,
}

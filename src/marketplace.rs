//! Marketplace search URL construction.
//!
//! URLs are built from fixed templates; nothing here touches the network.

use std::fmt;
use std::str::FromStr;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Characters escaped in a URI component.
///
/// Everything except ASCII alphanumerics and `-_.!~*'()`, so spaces become
/// `%20` and reserved characters such as `&`, `=` and `/` are escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// A marketplace with a search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Marketplace {
    /// amazon.com product search.
    Amazon,
    /// ebay.com listing search.
    Ebay,
    /// aliexpress.com wholesale search.
    AliExpress,
}

impl Marketplace {
    /// All marketplaces in dispatch order.
    pub const ALL: [Self; 3] = [Self::Amazon, Self::Ebay, Self::AliExpress];

    /// Stable lower-case key, e.g. `"aliexpress"`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Amazon => "amazon",
            Self::Ebay => "ebay",
            Self::AliExpress => "aliexpress",
        }
    }

    /// Search URL prefix; the encoded query is appended to it.
    #[must_use]
    pub const fn search_prefix(self) -> &'static str {
        match self {
            Self::Amazon => "https://www.amazon.com/s?k=",
            Self::Ebay => "https://www.ebay.com/sch/i.html?_nkw=",
            Self::AliExpress => "https://www.aliexpress.com/wholesale?SearchText=",
        }
    }

    /// Search URL for an already encoded query.
    #[must_use]
    pub fn search_url(self, encoded_query: &str) -> String {
        format!("{}{encoded_query}", self.search_prefix())
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Marketplace {
    type Err = Error;

    /// Case-insensitive lookup by key.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|marketplace| marketplace.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownMarketplace(s.to_string()))
    }
}

/// Search URLs for every marketplace, empty when there was no query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchUrls {
    /// Amazon search URL.
    pub amazon: String,
    /// eBay search URL.
    pub ebay: String,
    /// AliExpress search URL.
    pub aliexpress: String,
}

impl SearchUrls {
    /// URL for one marketplace.
    #[must_use]
    pub fn get(&self, marketplace: Marketplace) -> &str {
        match marketplace {
            Marketplace::Amazon => &self.amazon,
            Marketplace::Ebay => &self.ebay,
            Marketplace::AliExpress => &self.aliexpress,
        }
    }

    /// `(marketplace, url)` pairs in dispatch order, including empty URLs.
    pub fn iter(&self) -> impl Iterator<Item = (Marketplace, &str)> {
        Marketplace::ALL
            .into_iter()
            .map(move |marketplace| (marketplace, self.get(marketplace)))
    }

    /// True when no URL was built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, url)| url.is_empty())
    }
}

/// Percent-encodes `query` as a URI component.
#[must_use]
pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, URI_COMPONENT).to_string()
}

/// Builds search URLs for every marketplace from a query.
///
/// An empty query yields empty URLs. Otherwise the query is trimmed and
/// encoded once, then substituted into each template.
///
/// # Example
///
/// ```rust
/// use product_query::build_search_urls;
///
/// let urls = build_search_urls("wireless bluetooth headphones");
/// assert_eq!(urls.amazon, "https://www.amazon.com/s?k=wireless%20bluetooth%20headphones");
/// assert!(build_search_urls("").is_empty());
/// ```
#[must_use]
pub fn build_search_urls(query: &str) -> SearchUrls {
    if query.is_empty() {
        return SearchUrls::default();
    }

    let encoded = encode_query(query.trim());
    SearchUrls {
        amazon: Marketplace::Amazon.search_url(&encoded),
        ebay: Marketplace::Ebay.search_url(&encoded),
        aliexpress: Marketplace::AliExpress.search_url(&encoded),
    }
}

//! Error types for product-query.
//!
//! Most operations degrade to empty or `None` results instead of failing.
//! The variants here cover the few conditions a caller can act on.

/// Error type for marketplace dispatch and HTML input handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The marketplace key is not known, or it produced no URL for the query.
    #[error("Invalid marketplace: {0}")]
    UnknownMarketplace(String),

    /// The opener sink could not hand the URL to the platform.
    #[error("Failed to open {url}: {reason}")]
    OpenFailed {
        /// URL that was being opened.
        url: String,
        /// Reason reported by the platform.
        reason: String,
    },
}

/// Result type alias for product-query operations.
pub type Result<T> = std::result::Result<T, Error>;

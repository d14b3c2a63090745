//! Character encoding handling for raw product pages.
//!
//! Shop pages are still served in legacy charsets often enough that titles
//! like `Caf\xE9 Grinder` need transcoding before cleaning.

use std::borrow::Cow;

use encoding_rs::{Encoding, REPLACEMENT, UTF_8};

use crate::patterns::CHARSET_META;

/// Bytes of the document head scanned for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Determines the encoding of an HTML byte buffer.
///
/// A byte order mark wins; otherwise the first `charset=` declaration in a
/// `<meta>` tag within the first kilobyte is used. A declared UTF-16 is read
/// as UTF-8, since the declaration itself was readable as ASCII. Unknown
/// labels, labels that map to the replacement encoding (`iso-2022-kr` and
/// friends) and pages without a declaration fall back to UTF-8.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    CHARSET_META
        .captures(&head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .filter(|encoding| *encoding != REPLACEMENT)
        .map(Encoding::output_encoding)
        .unwrap_or(UTF_8)
}

/// Decodes HTML bytes to UTF-8, replacing malformed sequences with U+FFFD.
///
/// # Example
///
/// ```rust
/// use product_query::encoding::decode_html;
///
/// let html = b"<meta charset=\"windows-1252\"><title>Caf\xE9 Grinder</title>";
/// assert!(decode_html(html).contains("Caf\u{e9} Grinder"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8]) -> Cow<'_, str> {
    let encoding = sniff_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences");
    }
    decoded
}

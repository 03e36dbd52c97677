//! Hop-by-hop header handling.
//!
//! These headers describe a single transport connection and are removed in
//! both directions: from the request sent upstream and from the response
//! relayed back to the caller.

use axum::http::{header, HeaderMap, HeaderName};

/// Connection-scoped headers (RFC 2616 §13.5.1).
///
/// `Trailers` is matched as written; the registered `Trailer` header is an
/// end-to-end header here and passes through.
pub static HOP_BY_HOP_HEADERS: [HeaderName; 8] = [
    header::CONNECTION,
    HeaderName::from_static("keep-alive"),
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    HeaderName::from_static("trailers"),
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[cfg(test)]
fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP_HEADERS.contains(name)
}

/// Remove every value of every hop-by-hop header from `headers`.
pub fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in HOP_BY_HOP_HEADERS.iter() {
        headers.remove(name);
    }
}

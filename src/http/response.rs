//! Response relaying and error mapping.
//!
//! The upstream response keeps its status, its headers (minus hop-by-hop
//! ones, repeated values in order) and its body, which is streamed rather
//! than buffered. Any failure to reach the upstream becomes a bare 500.

use axum::body::{Body, Bytes, HttpBody};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::BoxError;
use thiserror::Error;

use crate::http::headers::strip_hop_by_hop;

/// Body sent to the caller when the upstream cannot be reached.
pub const SERVER_ERROR_BODY: &str = "Server Error";

/// Failure to complete the upstream round trip.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// The configured upstream does not form a valid request URI.
    #[error("invalid upstream address: {0}")]
    InvalidUpstream(#[from] axum::http::Error),

    /// Network-level failure: connect refused, DNS, reset, etc.
    #[error("upstream request failed: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_BODY).into_response()
    }
}

/// Turn the upstream response into the response for the caller.
pub fn relay_response<B>(response: Response<B>) -> Response
where
    B: HttpBody<Data = Bytes> + Send + 'static,
    B::Error: Into<BoxError>,
{
    let (mut parts, body) = response.into_parts();
    strip_hop_by_hop(&mut parts.headers);
    Response::from_parts(parts, Body::new(body))
}

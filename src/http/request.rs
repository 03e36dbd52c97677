//! Request rewriting for the upstream.
//!
//! The inbound request is turned into a client-mode request: absolute URI
//! pointing at the upstream over plain HTTP, HTTP/1.1, hop-by-hop headers
//! removed and the credential pair appended to the query string. The body
//! is moved across untouched so it streams.

use axum::body::Body;
use axum::http::{uri::PathAndQuery, Request, Uri, Version};
use percent_encoding::percent_decode_str;
use url::form_urlencoded;

use crate::config::Credentials;
use crate::http::headers::strip_hop_by_hop;

/// Query parameter carrying the username.
pub const USERNAME_PARAM: &str = "u";
/// Query parameter carrying the password.
pub const PASSWORD_PARAM: &str = "p";

/// Rewrite `request` so it can be sent to `upstream` (host:port).
pub fn rewrite_request(
    request: Request<Body>,
    upstream: &str,
    credentials: Credentials<'_>,
) -> Result<Request<Body>, axum::http::Error> {
    let (mut parts, body) = request.into_parts();

    parts.uri = upstream_uri(&parts.uri, upstream, credentials)?;
    parts.version = Version::HTTP_11;
    strip_hop_by_hop(&mut parts.headers);

    Ok(Request::from_parts(parts, body))
}

/// Build `http://<upstream><path>?<query + credentials>`.
pub fn upstream_uri(
    original: &Uri,
    upstream: &str,
    credentials: Credentials<'_>,
) -> Result<Uri, axum::http::Error> {
    let path = match original.path() {
        "" => "/",
        path => path,
    };
    let query = with_credentials(original.query(), credentials);
    let path_and_query = PathAndQuery::try_from(format!("{path}?{query}"))?;

    Uri::builder()
        .scheme("http")
        .authority(upstream)
        .path_and_query(path_and_query)
        .build()
}

/// Re-encode `query` with `u` and `p` appended.
///
/// Existing parameters, including any caller-supplied `u`/`p`, keep their
/// order and values; the configured pair always comes last. Values are
/// decoded to raw bytes, so escapes that are not UTF-8 survive unchanged.
pub fn with_credentials(query: Option<&str>, credentials: Credentials<'_>) -> String {
    let mut pairs: Vec<String> = query
        .into_iter()
        .flat_map(|query| query.split('&'))
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
            format!(
                "{}={}",
                encode_component(&decode_component(name)),
                encode_component(&decode_component(value))
            )
        })
        .collect();

    pairs.push(format!(
        "{USERNAME_PARAM}={}",
        encode_component(credentials.username.as_bytes())
    ));
    pairs.push(format!(
        "{PASSWORD_PARAM}={}",
        encode_component(credentials.password.as_bytes())
    ));

    pairs.join("&")
}

fn decode_component(raw: &str) -> Vec<u8> {
    percent_decode_str(&raw.replace('+', " ")).collect()
}

fn encode_component(bytes: &[u8]) -> String {
    form_urlencoded::byte_serialize(bytes).collect()
}

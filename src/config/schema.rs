//! Configuration schema definitions.
//!
//! The proxy has exactly one upstream and one credential pair, so the whole
//! configuration is four strings. Every field defaults to empty; nothing here
//! rejects a value.

use serde::{Deserialize, Serialize};

/// Root configuration for the proxy.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listen address (e.g., "0.0.0.0:8087" or ":8087").
    pub address: String,

    /// Upstream database address as host:port (e.g., "localhost:8086").
    pub upstream: String,

    /// Username injected as the `u` query parameter.
    pub username: String,

    /// Password injected as the `p` query parameter.
    pub password: String,
}

impl ProxyConfig {
    /// Credentials appended to every forwarded request.
    pub fn credentials(&self) -> Credentials<'_> {
        Credentials {
            username: &self.username,
            password: &self.password,
        }
    }
}

// Hand-written so the password never reaches a log line.
impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("address", &self.address)
            .field("upstream", &self.upstream)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Borrowed view of the credential pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

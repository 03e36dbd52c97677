//! Startup: binding the listen address.
//!
//! A bind failure is fatal. The caller propagates the error out of `main`
//! so the process exits non-zero instead of idling without a listener.

use tokio::net::TcpListener;

use crate::error::ProxyError;

/// Expand the shorthand forms accepted for `--address` into bind candidates.
///
/// `""` means port 80 on all interfaces and `":8086"` port 8086 on all
/// interfaces. All-interfaces forms try the IPv6 wildcard first (dual-stack
/// where the OS allows it) and fall back to IPv4. Anything else is a single
/// candidate, unchanged.
pub fn listen_candidates(address: &str) -> Vec<String> {
    let port = if address.is_empty() {
        "80"
    } else if let Some(port) = address.strip_prefix(':') {
        port
    } else {
        return vec![address.to_string()];
    };

    vec![format!("[::]:{port}"), format!("0.0.0.0:{port}")]
}

/// Bind the configured listen address.
///
/// Candidates are tried in order; the error of the last one is reported.
pub async fn bind_listener(address: &str) -> Result<TcpListener, ProxyError> {
    let mut last_error = None;

    for candidate in listen_candidates(address) {
        match TcpListener::bind(candidate.as_str()).await {
            Ok(listener) => return Ok(listener),
            Err(source) => {
                tracing::debug!(address = %candidate, error = %source, "Bind attempt failed");
                last_error = Some(ProxyError::Listen {
                    address: candidate,
                    source,
                });
            }
        }
    }

    Err(last_error.unwrap_or_else(|| ProxyError::Listen {
        address: address.to_string(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "no address to bind"),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_candidates() {
        assert_eq!(listen_candidates(""), ["[::]:80", "0.0.0.0:80"]);
        assert_eq!(listen_candidates(":8087"), ["[::]:8087", "0.0.0.0:8087"]);
        assert_eq!(listen_candidates("127.0.0.1:8087"), ["127.0.0.1:8087"]);
        assert_eq!(listen_candidates("localhost:8087"), ["localhost:8087"]);
    }

    #[tokio::test]
    async fn test_port_shorthand_binds_all_interfaces() {
        let listener = bind_listener(":0").await.unwrap();
        let local = listener.local_addr().unwrap();
        assert!(local.ip().is_unspecified());
        assert_ne!(local.port(), 0);
    }

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener = bind_listener("127.0.0.1:0").await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[tokio::test]
    async fn test_bind_conflict_is_listen_error() {
        let taken = bind_listener("127.0.0.1:0").await.unwrap();
        let address = taken.local_addr().unwrap().to_string();

        let err = bind_listener(&address).await.unwrap_err();
        assert!(matches!(err, ProxyError::Listen { address: ref a, .. } if *a == address));
    }

    #[tokio::test]
    async fn test_bind_garbage_is_listen_error() {
        let err = bind_listener("not an address").await.unwrap_err();
        assert!(matches!(err, ProxyError::Listen { .. }));
    }
}

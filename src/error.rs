//! Process-level error type.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that stop the proxy from starting or serving.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("failed to listen on {address}: {source}")]
    Listen {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

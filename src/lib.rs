//! InfluxDB HTTP auth proxy library.
//!
//! A reverse proxy for a single upstream that appends a fixed `u`/`p`
//! credential pair to the query string of every request it forwards.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

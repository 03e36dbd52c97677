//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → server.rs (Axum router, log receipt)
//!     → request.rs (retarget URI, strip hop-by-hop headers, add u/p)
//!     → hyper client → upstream
//!     → response.rs (strip hop-by-hop headers, stream body back)
//!     → caller
//! ```

pub mod headers;
pub mod request;
pub mod response;
pub mod server;

pub use headers::{strip_hop_by_hop, HOP_BY_HOP_HEADERS};
pub use response::ForwardError;
pub use server::HttpServer;

//! Observability subsystem.
//!
//! Logging only: one line per received request, one per upstream failure,
//! plus startup and shutdown events. `tower_http`'s trace layer adds
//! per-request spans at debug level.

pub mod logging;

pub use logging::init_logging;

//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! CLI flags (clap) ──┐
//!                    ├─→ loader.rs (flags override file values)
//! --config TOML ─────┘
//!     → validation.rs (advisory warnings only)
//!     → ProxyConfig (immutable, shared via Arc with the handler)
//! ```

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{CliArgs, ConfigError};
pub use schema::{Credentials, ProxyConfig};
pub use validation::{validate_config, ConfigWarning};

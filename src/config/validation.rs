//! Configuration checks.
//!
//! Empty values are accepted: the proxy still starts, it just cannot
//! authenticate (or reach anything). Each suspicious value produces a
//! warning for the operator instead of an error.

use thiserror::Error;

use crate::config::schema::ProxyConfig;

/// Advisory finding about a configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    #[error("upstream is empty; every request will fail with 500")]
    EmptyUpstream,

    #[error("username is empty; upstream will see an anonymous user")]
    EmptyUsername,

    #[error("password is empty")]
    EmptyPassword,
}

/// Returns every warning for `config`, in field order.
pub fn validate_config(config: &ProxyConfig) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.upstream.is_empty() {
        warnings.push(ConfigWarning::EmptyUpstream);
    }
    if config.username.is_empty() {
        warnings.push(ConfigWarning::EmptyUsername);
    }
    if config.password.is_empty() {
        warnings.push(ConfigWarning::EmptyPassword);
    }

    warnings
}

//! Configuration loading from disk and the command line.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use thiserror::Error;

use crate::config::schema::ProxyConfig;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Command-line flags.
///
/// Flags win over values read from `--config`.
#[derive(Debug, Default, Parser)]
#[command(name = "influxdb-http-auth-proxy")]
#[command(version, about = "Injects InfluxDB query-string credentials into proxied requests", long_about = None)]
pub struct CliArgs {
    /// Listen address
    #[arg(long)]
    pub address: Option<String>,

    /// Upstream address
    #[arg(long)]
    pub upstream: Option<String>,

    /// InfluxDB username
    #[arg(long)]
    pub username: Option<String>,

    /// InfluxDB password
    #[arg(long)]
    pub password: Option<String>,

    /// Optional TOML file providing any of the values above
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the final configuration: flags, then file, then defaults.
    pub fn into_config(self) -> Result<ProxyConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => ProxyConfig::default(),
        };

        if let Some(address) = self.address {
            config.address = address;
        }
        if let Some(upstream) = self.upstream {
            config.upstream = upstream;
        }
        if let Some(username) = self.username {
            config.username = username;
        }
        if let Some(password) = self.password {
            config.password = password;
        }

        Ok(config)
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

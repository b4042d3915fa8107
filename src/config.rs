//! Configuration manager.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::extract::FromRef;
use serde::{Deserialize, Serialize};

use crate::AppState;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";
const DEFAULT_PORT: u16 = 8888;
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors that may occur while reading `config.yaml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot open `{path}`: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to deserialize `config.yaml`: {0}")]
    Deserialize(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Instance name.
    pub name: String,
    /// Listening port.
    #[serde(default = "default_port", skip_serializing)]
    pub port: u16,
    #[serde(default)]
    version: String,
    #[serde(skip)]
    path: PathBuf,
    /// Related to PostgreSQL configuration.
    /// Accounts are kept in memory when missing.
    #[serde(default, skip_serializing)]
    pub postgres: Option<Postgres>,
    /// Related to OTLP and Prometheus exporters.
    #[serde(default, skip_serializing)]
    pub telemetry: Option<Telemetry>,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_owned(),
            port: DEFAULT_PORT,
            version: VERSION.to_owned(),
            path: PathBuf::new(),
            postgres: None,
            telemetry: None,
        }
    }
}

/// PostgreSQL configuration.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Postgres {
    /// Hostname:(?port) for PostgreSQL instance.
    pub address: String,
    /// Database name.
    pub database: Option<String>,
    /// Username credential to connect.
    pub username: Option<String>,
    /// Password credential to connect.
    pub password: Option<String>,
    /// Maximum pool connections.
    pub pool_size: Option<u32>,
}

/// Telemetry configuration.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
pub struct Telemetry {
    /// gRPC endpoint of an OTLP collector for logs and traces.
    pub otlp_endpoint: Option<String>,
    /// Expose Prometheus metrics on `/metrics`.
    #[serde(default)]
    pub metrics: bool,
}

impl FromRef<AppState> for Arc<Configuration> {
    fn from_ref(state: &AppState) -> Arc<Configuration> {
        Arc::clone(&state.config)
    }
}

impl Configuration {
    pub fn path(mut self, path: PathBuf) -> Self {
        self.path = path;
        self
    }

    /// Whether the Prometheus recorder must be installed.
    pub fn metrics_enabled(&self) -> bool {
        self.telemetry.as_ref().is_some_and(|t| t.metrics)
    }

    /// OTLP collector endpoint, if any.
    pub fn otlp_endpoint(&self) -> Option<&str> {
        self.telemetry
            .as_ref()
            .and_then(|t| t.otlp_endpoint.as_deref())
    }

    /// Reads the `config.yaml` file from the specified path or the default
    /// location.
    pub fn read(self) -> Result<Self, ConfigError> {
        let file_path = if self.path.is_file() {
            self.path.clone()
        } else {
            Path::new(DEFAULT_CONFIG_PATH).to_path_buf()
        };

        let file = File::open(&file_path).map_err(|source| ConfigError::Io {
            path: file_path.clone(),
            source,
        })?;
        let mut config: Configuration = serde_yaml::from_reader(file)?;

        // set app version.
        config.version = VERSION.to_owned();
        config.path = file_path;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal() {
        let config: Configuration = serde_yaml::from_str("name: fedauth").unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.postgres.is_none());
        assert!(!config.metrics_enabled());
        assert_eq!(config.otlp_endpoint(), None);
    }

    #[test]
    fn test_deserialize_full() {
        let config: Configuration = serde_yaml::from_str(
            r#"
name: accounts
port: 9000
postgres:
  address: localhost:5432
  pool_size: 4
telemetry:
  otlp_endpoint: http://localhost:4317
  metrics: true
"#,
        )
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.postgres.as_ref().unwrap().pool_size, Some(4));
        assert!(config.metrics_enabled());
    }

    #[test]
    fn test_read_missing_file() {
        let err = Configuration::default()
            .path(PathBuf::from("does/not/exist.yaml"))
            .read();

        // Falls back on `config.yaml`, absent from the crate root.
        assert!(matches!(err, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_secrets_are_not_published() {
        let config = Configuration {
            postgres: Some(Postgres {
                password: Some("hunter2".into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(json.contains(VERSION));
    }
}

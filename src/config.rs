//! Service configuration, loaded from YAML.
//!
//! The file named by `ACCOUNTS_CONFIG` is read if set; otherwise built-in defaults apply.
//! `ORDERS_BASE_URL` overrides `orders_backend.base_url` either way.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_PATH_ENV: &str = "ACCOUNTS_CONFIG";
pub const ORDERS_BASE_URL_ENV: &str = "ORDERS_BASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config yaml: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid config value {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub orders_backend: OrdersBackendConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub accounts: AccountsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Remote orders service.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OrdersBackendConfig {
    pub base_url: String,
    /// Upper bound for a single remote call, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for OrdersBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8083".to_string(),
            timeout_ms: 5000,
        }
    }
}

impl OrdersBackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NotificationConfig {
    pub queue_capacity: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { queue_capacity: 256 }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AccountsConfig {
    pub mailbox_capacity: usize,
}

impl Default for AccountsConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 32,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive. `RUST_LOG` takes precedence when set.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads the configuration named by `ACCOUNTS_CONFIG`, then applies env overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        if let Ok(url) = std::env::var(ORDERS_BASE_URL_ENV) {
            config.orders_backend.base_url = url;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values the runtime cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notifications.queue_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "notifications.queue_capacity",
                reason: "must be at least 1",
            });
        }
        if self.accounts.mailbox_capacity == 0 {
            return Err(ConfigError::Invalid {
                field: "accounts.mailbox_capacity",
                reason: "must be at least 1",
            });
        }
        if self.orders_backend.timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "orders_backend.timeout_ms",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let config = AppConfig::from_yaml(
            "orders_backend:\n  base_url: http://orders:9000\nlogging:\n  json: true\n",
        )
        .unwrap();

        assert_eq!(config.orders_backend.base_url, "http://orders:9000");
        assert_eq!(config.orders_backend.timeout_ms, 5000);
        assert!(config.logging.json);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_sample_config_parses() {
        let config = AppConfig::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/config/default.yaml"))
            .unwrap();
        assert_eq!(config.orders_backend.timeout(), Duration::from_millis(5000));
        assert_eq!(config.notifications.queue_capacity, 256);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = AppConfig::from_file("/nonexistent/accounts.yaml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/accounts.yaml"));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let err = AppConfig::from_yaml("server: [not, a, map]").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_zero_capacities_are_rejected() {
        let err = AppConfig::from_yaml("notifications:\n  queue_capacity: 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "notifications.queue_capacity",
                ..
            }
        ));

        let err = AppConfig::from_yaml("accounts:\n  mailbox_capacity: 0\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "accounts.mailbox_capacity",
                ..
            }
        ));
        assert!(err.to_string().contains("accounts.mailbox_capacity"));
    }
}

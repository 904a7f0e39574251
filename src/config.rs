//! Configuration module for the DevSecOps platform service.
//!
//! Loads configuration from built-in defaults, YAML files and environment
//! variables.

use std::net::{IpAddr, SocketAddr};

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::Deserialize;

use crate::error::{PlatformError, PlatformResult};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub docs: DocsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// API documentation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DocsConfig {
    /// Serve Swagger UI and the OpenAPI document.
    pub enabled: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable lines for local development.
    Pretty,
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DEVSECOPS__*)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml (if exists)
    /// 4. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let config = ConfigLoader::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("docs.enabled", defaults.docs.enabled)?
            .set_default("logging.format", "json")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("DEVSECOPS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl ServerConfig {
    /// The address the listener binds to.
    pub fn socket_addr(&self) -> PlatformResult<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|e| {
            PlatformError::Config(format!("invalid server host '{}': {}", self.host, e))
        })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_server_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };
        let addr = config.socket_addr().unwrap();
        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 8080)));
    }

    #[test]
    fn test_socket_addr_ipv6() {
        let config = ServerConfig {
            host: "::1".to_string(),
            port: 5000,
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:5000");
    }

    #[test]
    fn test_socket_addr_rejects_hostname() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            port: 8080,
        };
        assert!(matches!(
            config.socket_addr(),
            Err(PlatformError::Config(_))
        ));
    }

    #[test]
    fn test_log_format_names() {
        let config: LoggingConfig = serde_json::from_str(r#"{"format":"pretty"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Pretty);
        assert_eq!(LoggingConfig::default().format, LogFormat::Json);
        assert!(serde_json::from_str::<LoggingConfig>(r#"{"format":"xml"}"#).is_err());
    }

    #[test]
    fn test_load_reads_prefixed_environment() {
        // Only this test touches DEVSECOPS__* variables.
        std::env::set_var("DEVSECOPS__SERVER__PORT", "9123");
        std::env::set_var("DEVSECOPS__DOCS__ENABLED", "false");
        std::env::set_var("DEVSECOPS__LOGGING__FORMAT", "pretty");

        let loaded = Config::load();

        std::env::remove_var("DEVSECOPS__SERVER__PORT");
        std::env::remove_var("DEVSECOPS__DOCS__ENABLED");
        std::env::remove_var("DEVSECOPS__LOGGING__FORMAT");

        let config = loaded.unwrap();
        assert_eq!(config.server.port, 9123);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(!config.docs.enabled);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: Config =
            serde_json::from_str(r#"{"server":{"host":"::","port":9000}}"#).unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(config.docs.enabled);
        assert_eq!(config.logging.format, LogFormat::Json);
    }
}

//! Configuration for the SwitchBot exporter.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use switchbot_api::ClientConfig;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] json5::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Complete exporter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Address to listen on (default: "0.0.0.0:3000").
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Path for the scrape endpoint (default: "/metrics").
    #[serde(default = "default_path")]
    pub path: String,

    /// SwitchBot cloud API settings.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_listen() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_path() -> String {
    "/metrics".to_string()
}

/// SwitchBot cloud API connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the SwitchBot API.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Retry a request once after a transport-level failure (default: false).
    #[serde(default)]
    pub retry: bool,
}

fn default_endpoint() -> String {
    switchbot_api::DEFAULT_ENDPOINT.to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
            retry: false,
        }
    }
}

impl UpstreamConfig {
    /// Convert into the API client configuration.
    pub fn to_client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            retry: self.retry,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log output format: "text" or "json".
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl ExporterConfig {
    /// Load configuration from a JSON5 file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: ExporterConfig = json5::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON5 string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: ExporterConfig = json5::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate listen address format
        if self.listen.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid listen address: {}",
                self.listen
            )));
        }

        // Validate path starts with /
        if !self.path.starts_with('/') {
            return Err(ConfigError::Validation(
                "Metrics path must start with /".to_string(),
            ));
        }

        if !self.upstream.endpoint.starts_with("http://")
            && !self.upstream.endpoint.starts_with("https://")
        {
            return Err(ConfigError::Validation(format!(
                "Invalid upstream endpoint: {}",
                self.upstream.endpoint
            )));
        }

        if self.upstream.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "timeout_secs must be > 0".to_string(),
            ));
        }

        if self.upstream.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "connect_timeout_secs must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            path: default_path(),
            upstream: UpstreamConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let json = "{}";
        let config = ExporterConfig::parse(json).unwrap();

        assert_eq!(config.listen, "0.0.0.0:3000");
        assert_eq!(config.path, "/metrics");
        assert_eq!(config.upstream.endpoint, "https://api.switch-bot.com");
        assert_eq!(config.upstream.timeout_secs, 10);
        assert_eq!(config.upstream.connect_timeout_secs, 5);
        assert!(!config.upstream.retry);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            listen: "127.0.0.1:9101",
            path: "/probe",
            upstream: {
                endpoint: "https://api.switch-bot.example",
                timeout_secs: 30,
                connect_timeout_secs: 3,
                retry: true
            },
            logging: {
                level: "debug",
                format: "json"
            }
        }"#;

        let config = ExporterConfig::parse(json).unwrap();

        assert_eq!(config.listen, "127.0.0.1:9101");
        assert_eq!(config.path, "/probe");
        assert_eq!(config.upstream.endpoint, "https://api.switch-bot.example");
        assert_eq!(config.upstream.timeout_secs, 30);
        assert_eq!(config.upstream.connect_timeout_secs, 3);
        assert!(config.upstream.retry);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_validate_invalid_listen() {
        let json = r#"{
            listen: "not-an-address"
        }"#;

        let result = ExporterConfig::parse(json);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid listen address")
        );
    }

    #[test]
    fn test_validate_invalid_path() {
        let json = r#"{
            path: "no-leading-slash"
        }"#;

        let result = ExporterConfig::parse(json);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("must start with /")
        );
    }

    #[test]
    fn test_validate_invalid_endpoint() {
        let json = r#"{
            upstream: { endpoint: "api.switch-bot.com" }
        }"#;

        let result = ExporterConfig::parse(json);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid upstream endpoint")
        );
    }

    #[test]
    fn test_validate_zero_timeout() {
        let json = r#"{
            upstream: { timeout_secs: 0 }
        }"#;

        let result = ExporterConfig::parse(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_zero_connect_timeout() {
        let json = r#"{
            upstream: { connect_timeout_secs: 0 }
        }"#;

        let result = ExporterConfig::parse(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                // Scrape endpoint
                listen: "127.0.0.1:3000",
                upstream: {{ retry: true }}
            }}"#
        )
        .unwrap();

        let config = ExporterConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.listen, "127.0.0.1:3000");
        assert!(config.upstream.retry);
        assert_eq!(config.path, "/metrics");
    }

    #[test]
    fn test_load_missing_file() {
        let result = ExporterConfig::load_from_file("/nonexistent/config.json5");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_to_client_config() {
        let upstream = UpstreamConfig {
            endpoint: "https://api.switch-bot.example".to_string(),
            timeout_secs: 20,
            connect_timeout_secs: 2,
            retry: true,
        };

        let client_config = upstream.to_client_config();
        assert_eq!(client_config.endpoint, "https://api.switch-bot.example");
        assert_eq!(client_config.timeout, Duration::from_secs(20));
        assert_eq!(client_config.connect_timeout, Duration::from_secs(2));
        assert!(client_config.retry);
    }
}

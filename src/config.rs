//! Application configuration loaded from environment variables.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::{Result, ServiceError};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Bind address for the HTTP server.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Logging ===
    /// Log filter used when `RUST_LOG` is unset (e.g., "debug" or "vascular_api=trace,info").
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from explicit `(NAME, value)` pairs.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<()> {
        self.socket_addr().map(|_| ())
    }

    /// Address the HTTP server binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.host.parse().map_err(|_| {
            ServiceError::InvalidConfig(format!("HOST must be an IP address, got {:?}", self.host))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config> {
        Config::from_vars(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn default_values_are_sensible() {
        let config = Config::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.port, default_port());
        assert_eq!(config.host, default_host());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = from_pairs(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9000"),
            ("LOG_LEVEL", "debug"),
            ("LOG_JSON", "true"),
        ])
        .unwrap();

        assert_eq!(config.socket_addr().unwrap(), "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = from_pairs(&[("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)), "{err:?}");
    }

    #[test]
    fn rust_log_does_not_set_log_level() {
        let config = from_pairs(&[("RUST_LOG", "trace")]).unwrap();
        assert_eq!(config.log_level, default_log_level());
    }

    #[test]
    fn validate_rejects_hostname() {
        let config = Config {
            host: "localhost".to_string(),
            ..Config::default()
        };

        assert!(matches!(config.validate(), Err(ServiceError::InvalidConfig(_))));
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn ipv6_host_is_accepted() {
        let config = Config {
            host: "::1".to_string(),
            port: 3001,
            ..Config::default()
        };

        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:3001");
    }
}

// src/common/config.rs
//! Server configuration loaded from environment variables
//!
//! | Variable       | Default                                   |
//! |----------------|-------------------------------------------|
//! | `BIND_ADDR`    | `0.0.0.0`                                 |
//! | `PORT`         | `8080`                                    |
//! | `CORS_ORIGINS` | local dev origins, comma-separated        |
//! | `LOG_BODIES`   | `false`                                   |

use axum::http::HeaderValue;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::warn;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    #[error("Invalid BIND_ADDR value: {0}")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub cors_origins: Vec<HeaderValue>,
    pub log_bodies: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            log_bodies: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("BIND_ADDR") {
            config.bind_addr = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr(raw.clone()))?;
        }

        if let Some(raw) = lookup("PORT") {
            config.port = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?;
        }

        if let Some(raw) = lookup("CORS_ORIGINS") {
            config.cors_origins = parse_origins(&raw);
        }

        if let Some(raw) = lookup("LOG_BODIES") {
            config.log_bodies = raw.trim().eq_ignore_ascii_case("true");
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<HeaderValue> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Skipping invalid CORS origin");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.socket_addr(), "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.cors_origins.len(), 2);
        assert!(!config.log_bodies);
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("BIND_ADDR", "127.0.0.1"),
            ("PORT", "9000"),
            ("CORS_ORIGINS", "https://app.example.com, ,https://admin.example.com"),
            ("LOG_BODIES", "TRUE"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr(), "127.0.0.1:9000".parse().unwrap());
        assert_eq!(
            config.cors_origins,
            vec![
                HeaderValue::from_static("https://app.example.com"),
                HeaderValue::from_static("https://admin.example.com"),
            ]
        );
        assert!(config.log_bodies);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "eighty"));
    }

    #[test]
    fn test_invalid_bind_addr_is_rejected() {
        let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost:1")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBindAddr(_)));
    }

    #[test]
    fn test_invalid_origin_is_skipped() {
        let origins = parse_origins("https://ok.example.com,bad\norigin");
        assert_eq!(origins, vec![HeaderValue::from_static("https://ok.example.com")]);
    }
}

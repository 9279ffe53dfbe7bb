//! Server configuration
//!
//! Read from the environment (optionally seeded from `.env`).

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Runtime settings for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Uses of a phrase after which it is promoted into Mine (None = never)
    pub auto_save_threshold: Option<u64>,
    /// Mark the session cookie `Secure`
    pub secure_cookie: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            auto_save_threshold: None,
            secure_cookie: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or blank keys keep defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(host) = get("HOST") {
            config.host = host.trim().to_string();
        }

        if let Some(port) = get("PORT") {
            config.port = port.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: port.clone(),
                reason: "expected a port number",
            })?;
        }

        if let Some(threshold) = get("MYVOICE_AUTO_SAVE_THRESHOLD") {
            let parsed: u64 = threshold.trim().parse().map_err(|_| ConfigError::Invalid {
                key: "MYVOICE_AUTO_SAVE_THRESHOLD",
                value: threshold.clone(),
                reason: "expected a positive integer",
            })?;
            if parsed == 0 {
                return Err(ConfigError::Invalid {
                    key: "MYVOICE_AUTO_SAVE_THRESHOLD",
                    value: threshold,
                    reason: "expected a positive integer",
                });
            }
            config.auto_save_threshold = Some(parsed);
        }

        if let Some(secure) = get("MYVOICE_SECURE_COOKIE") {
            config.secure_cookie = match secure.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "MYVOICE_SECURE_COOKIE",
                        value: secure,
                        reason: "expected true or false",
                    })
                }
            };
        }

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("MYVOICE_AUTO_SAVE_THRESHOLD", "5"),
            ("MYVOICE_SECURE_COOKIE", "true"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.auto_save_threshold, Some(5));
        assert!(config.secure_cookie);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[("PORT", "  ")])).unwrap();
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_invalid_values() {
        assert!(ServerConfig::from_lookup(lookup(&[("PORT", "http")])).is_err());
        assert!(
            ServerConfig::from_lookup(lookup(&[("MYVOICE_AUTO_SAVE_THRESHOLD", "0")])).is_err()
        );
        assert!(ServerConfig::from_lookup(lookup(&[("MYVOICE_SECURE_COOKIE", "maybe")])).is_err());
    }
}

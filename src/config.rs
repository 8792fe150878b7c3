// src/config.rs
use crate::errors::{Result, ServiceError};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Worker thread count. `None` leaves the HTTP server default in place.
    pub workers: Option<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            workers: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(host) = lookup("MATH_SERVER_HOST") {
            let host = host.trim();
            if host.is_empty() {
                return Err(ServiceError::Config("MATH_SERVER_HOST is empty".to_string()));
            }
            config.host = host.to_string();
        }

        if let Some(port) = lookup("MATH_SERVER_PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|e| ServiceError::Config(format!("Invalid port '{}': {}", port, e)))?;
        }

        if let Some(workers) = lookup("MATH_SERVER_WORKERS") {
            let count: usize = workers.trim().parse().map_err(|e| {
                ServiceError::Config(format!("Invalid worker count '{}': {}", workers, e))
            })?;
            if count == 0 {
                return Err(ServiceError::Config(
                    "MATH_SERVER_WORKERS must be at least 1".to_string(),
                ));
            }
            config.workers = Some(count);
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
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
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.bind_address(), ("0.0.0.0".to_string(), 8080));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("MATH_SERVER_HOST", "127.0.0.1"),
            ("MATH_SERVER_PORT", " 9090 "),
            ("MATH_SERVER_WORKERS", "4"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.workers, Some(4));
    }

    #[test]
    fn test_invalid_values() {
        for pairs in [
            [("MATH_SERVER_PORT", "eighty")],
            [("MATH_SERVER_PORT", "70000")],
            [("MATH_SERVER_WORKERS", "0")],
            [("MATH_SERVER_WORKERS", "-2")],
            [("MATH_SERVER_HOST", "  ")],
        ] {
            let err = AppConfig::from_lookup(lookup_from(&pairs)).unwrap_err();
            assert!(matches!(err, ServiceError::Config(_)), "{:?}", pairs);
        }
    }
}

use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_FILTER: &str = "okey_scorekeeper=debug,tower_http=debug";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid OKEY_BIND_ADDR {value:?}: {reason}")]
    InvalidBindAddr { value: String, reason: String },
}

/// Runtime configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// PostgreSQL backend when set, in-memory storage otherwise
    pub database_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_value = lookup("OKEY_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_value
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidBindAddr {
                value: bind_value.clone(),
                reason: e.to_string(),
            })?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());

        Ok(Self {
            bind_addr,
            database_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert!(config.database_url.is_none());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("OKEY_BIND_ADDR", "127.0.0.1:8080"),
            ("DATABASE_URL", "postgres://localhost/okey"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://localhost/okey")
        );
    }

    #[test]
    fn blank_database_url_means_in_memory() {
        let config = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let result = AppConfig::from_lookup(lookup_from(&[("OKEY_BIND_ADDR", "nowhere")]));
        assert!(matches!(result, Err(ConfigError::InvalidBindAddr { .. })));
    }
}

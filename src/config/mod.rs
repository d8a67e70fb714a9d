use std::env;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PORT must be a valid port number, got {0:?}")]
    InvalidPort(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

fn non_empty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(non_empty)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8000,
        };

        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_url: lookup("DATABASE_URL"),
            database_name: lookup("DATABASE_NAME"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert!(config.database_url.is_none());
        assert!(config.database_name.is_none());
    }

    #[test]
    fn reads_store_settings() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "9090"),
            ("DATABASE_URL", "postgres://localhost/portal"),
            ("DATABASE_NAME", "gov"),
        ]))
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/portal"));
        assert_eq!(config.database_name.as_deref(), Some("gov"));
    }

    #[test]
    fn rejects_bad_port() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(raw) if raw == "eighty"));
    }
}

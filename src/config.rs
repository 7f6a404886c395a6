//! Server configuration from environment variables (a `.env` file is honoured by the binary).

use crate::error::ConfigError;

/// Where documents are kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    /// One JSONB table per collection in PostgreSQL.
    Postgres,
    /// Process memory; contents are lost on exit.
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::InvalidValue {
                name: "WARD_STORE_BACKEND",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    pub environment: String,
    pub backend: StoreBackend,
    pub database_url: String,
    /// PostgreSQL schema holding the collection tables.
    pub schema: String,
    pub max_connections: u32,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable lookup. Unset variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or("WARD_API_PORT", lookup("WARD_API_PORT"), 8080)?;
        let max_connections = parse_or("WARD_DB_MAX_CONNECTIONS", lookup("WARD_DB_MAX_CONNECTIONS"), 5)?;
        let backend = match lookup("WARD_STORE_BACKEND") {
            Some(v) => v.parse()?,
            None => StoreBackend::Postgres,
        };
        Ok(ServerConfig {
            port,
            environment: lookup("WARD_API_ENVIRONMENT").unwrap_or_else(|| "production".into()),
            backend,
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| "postgres://localhost/ward_inventory".into()),
            schema: lookup("WARD_STORE_SCHEMA").unwrap_or_else(|| "ward".into()),
            max_connections,
        })
    }

    /// Seed data is only inserted when the environment is exactly `development`.
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

fn parse_or<T: std::str::FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidValue { name, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.backend, StoreBackend::Postgres);
        assert_eq!(cfg.schema, "ward");
        assert_eq!(cfg.max_connections, 5);
        assert_eq!(cfg.environment, "production");
        assert!(!cfg.is_development());
    }

    #[test]
    fn reads_overrides() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("WARD_API_PORT", "9000"),
            ("WARD_API_ENVIRONMENT", "production"),
            ("WARD_STORE_BACKEND", "Memory"),
        ]))
        .unwrap();
        assert_eq!(cfg.port, 9000);
        assert_eq!(cfg.backend, StoreBackend::Memory);
        assert!(!cfg.is_development());
    }

    #[test]
    fn only_exact_development_seeds() {
        let dev = ServerConfig::from_lookup(lookup(&[("WARD_API_ENVIRONMENT", "development")])).unwrap();
        assert!(dev.is_development());
        let shouted = ServerConfig::from_lookup(lookup(&[("WARD_API_ENVIRONMENT", "Development")])).unwrap();
        assert!(!shouted.is_development());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(ServerConfig::from_lookup(lookup(&[("WARD_API_PORT", "eighty")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("WARD_STORE_BACKEND", "mongo")])).is_err());
    }
}

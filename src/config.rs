//! Process configuration from environment variables (a `.env` file is loaded by the binary first).

use crate::error::ConfigError;
use std::str::FromStr;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://starwarsapi.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5500";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// SQLite URL; the file is created if missing.
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    /// Caller identity used when a request carries no `X-User-Id` header.
    pub default_user_id: i64,
    pub seed_on_startup: bool,
    /// Off by default: favorites may point at planets/people that do not exist.
    pub enforce_foreign_keys: bool,
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_url: DEFAULT_DATABASE_URL.into(),
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_connections: 5,
            default_user_id: 1,
            seed_on_startup: true,
            enforce_foreign_keys: false,
            max_body_bytes: 64 * 1024,
        }
    }
}

impl AppConfig {
    /// Read config from the process environment, falling back to defaults for unset keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = AppConfig::default();
        let default_user_id = parse_or(&lookup, "DEFAULT_USER_ID", defaults.default_user_id)?;
        if default_user_id <= 0 {
            return Err(ConfigError::Invalid {
                key: "DEFAULT_USER_ID",
                value: default_user_id.to_string(),
            });
        }
        Ok(AppConfig {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            default_user_id,
            seed_on_startup: parse_bool_or(&lookup, "SEED_ON_STARTUP", defaults.seed_on_startup)?,
            enforce_foreign_keys: parse_bool_or(&lookup, "SQLITE_FOREIGN_KEYS", defaults.enforce_foreign_keys)?,
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", defaults.max_body_bytes)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_bool_or<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => {
            let normalized = raw.trim().to_lowercase();
            match normalized.as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::Invalid { key, value: raw }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.bind_addr, DEFAULT_BIND_ADDR);
        assert_eq!(cfg.default_user_id, 1);
        assert!(cfg.seed_on_startup);
        assert!(!cfg.enforce_foreign_keys);
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("DB_MAX_CONNECTIONS", "1"),
            ("DEFAULT_USER_ID", "7"),
            ("SEED_ON_STARTUP", "off"),
            ("SQLITE_FOREIGN_KEYS", "TRUE"),
        ]))
        .unwrap();
        assert_eq!(cfg.database_url, "sqlite::memory:");
        assert_eq!(cfg.max_connections, 1);
        assert_eq!(cfg.default_user_id, 7);
        assert!(!cfg.seed_on_startup);
        assert!(cfg.enforce_foreign_keys);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("DB_MAX_CONNECTIONS", "many")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_MAX_CONNECTIONS", .. }));
        let err = AppConfig::from_lookup(lookup_from(&[("SEED_ON_STARTUP", "maybe")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SEED_ON_STARTUP", .. }));
        let err = AppConfig::from_lookup(lookup_from(&[("DEFAULT_USER_ID", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DEFAULT_USER_ID", .. }));
    }
}

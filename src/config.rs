use dotenv::dotenv;
use std::env;
use std::time::Duration;

use crate::db::{ErrorKind, Result};

const DEFAULT_POOL_SIZE: u32 = 10;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_LOG_LEVEL: &str = "realworld_roster=info,rocket=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub pool_size: u32,
    pub connect_timeout: Duration,
    pub run_migrations: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn from_env() -> Result<Config> {
        dotenv().ok();
        Config::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(env::VarError::NotPresent)?;

        let pool_size = match lookup("DATABASE_POOL_SIZE") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => bail!(ErrorKind::InvalidSetting("DATABASE_POOL_SIZE", raw)),
            },
            None => DEFAULT_POOL_SIZE,
        };

        let connect_timeout = match lookup("DATABASE_CONNECT_TIMEOUT") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => bail!(ErrorKind::InvalidSetting("DATABASE_CONNECT_TIMEOUT", raw)),
            },
            None => Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        let run_migrations = match lookup("RUN_MIGRATIONS") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => bail!(ErrorKind::InvalidSetting("RUN_MIGRATIONS", raw)),
            },
            None => true,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" | "" => LogFormat::Pretty,
                _ => bail!(ErrorKind::InvalidSetting("LOG_FORMAT", raw)),
            },
            None => LogFormat::Pretty,
        };

        Ok(Config {
            database_url,
            pool_size,
            connect_timeout,
            run_migrations,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_owned()),
            log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_url_is_set() {
        let config =
            Config::from_lookup(lookup_in(&[("DATABASE_URL", "postgres://localhost/rw")])).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/rw");
        assert_eq!(config.pool_size, 10);
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert!(config.run_migrations);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn missing_database_url_is_an_error() {
        let err = Config::from_lookup(lookup_in(&[])).unwrap_err();
        match err.kind() {
            ErrorKind::Var(env::VarError::NotPresent) => {}
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup_in(&[
            ("DATABASE_URL", "postgres://db/rw"),
            ("DATABASE_POOL_SIZE", "3"),
            ("DATABASE_CONNECT_TIMEOUT", "1"),
            ("RUN_MIGRATIONS", "false"),
            ("LOG_FORMAT", "json"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.pool_size, 3);
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert!(!config.run_migrations);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn zero_pool_size_is_rejected() {
        let err = Config::from_lookup(lookup_in(&[
            ("DATABASE_URL", "postgres://db/rw"),
            ("DATABASE_POOL_SIZE", "0"),
        ]))
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for DATABASE_POOL_SIZE: '0'"
        );
    }
}

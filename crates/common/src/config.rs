//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use std::env;
use std::fmt;

use serde::Deserialize;

use crate::error::{Error, Result};

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_USER: &str = "ca";
const DEFAULT_DB_PASSWORD: &str = "ca"; // pragma: allowlist secret
const DEFAULT_DB_NAME: &str = "care_assistant";
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_RUST_LOG: &str = "caredesk=info";

#[derive(Clone, Deserialize)]
pub struct Config {
    /// PostgreSQL connection URL
    pub database_url: String,

    /// Pool sizing
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,

    /// Runtime configuration
    pub rust_log: String,
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// `DATABASE_URL` wins when present; otherwise the URL is assembled from
    /// the discrete `DB_*` variables with local development defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => url,
            _ => {
                let host = lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
                let port = parse_var(&lookup, "DB_PORT", DEFAULT_DB_PORT)?;
                let user = lookup("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string());
                let password =
                    lookup("DB_PASSWORD").unwrap_or_else(|| DEFAULT_DB_PASSWORD.to_string());
                let name = lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
                format!("postgresql://{user}:{password}@{host}:{port}/{name}")
            }
        };

        let max_connections = parse_var(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(Error::Configuration(
                "DB_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            database_url,
            max_connections,
            acquire_timeout_secs: parse_var(
                &lookup,
                "DB_ACQUIRE_TIMEOUT_SECS",
                DEFAULT_ACQUIRE_TIMEOUT_SECS,
            )?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_RUST_LOG.to_string()),
            log_json: lookup("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json")),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| Error::Configuration(format!("{key} must be a number, got '{raw}'"))),
        None => Ok(default),
    }
}

/// Strip the password component from a connection URL for display
fn redact_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((credentials, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    match credentials.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:***@{host}"),
        None => url.to_string(),
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &redact_url(&self.database_url))
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("rust_log", &self.rust_log)
            .field("log_json", &self.log_json)
            .finish()
    }
}

use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

pub struct Config {
    pub database_url: String,
    pub app_address: String,

    pub database_connect_timeout: Duration,
    pub database_max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Only `DATABASE_URL` is required; every other value has a default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let app_address =
            lookup("APP_ADDRESS").unwrap_or_else(|| DEFAULT_APP_ADDRESS.to_string());

        let connect_timeout_secs = parse_or(
            &lookup,
            "DATABASE_CONNECT_TIMEOUT_SECS",
            DEFAULT_CONNECT_TIMEOUT_SECS,
        )?;
        let database_max_connections =
            parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        Ok(Self {
            database_url,
            app_address,
            database_connect_timeout: Duration::from_secs(connect_timeout_secs),
            database_max_connections,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
    }
}

use std::{net::SocketAddr, time::Duration};

use crate::server::error::config::ConfigError;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_CULL_INTERVAL_SECS: u64 = 24 * 60 * 60;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub invitation_cull_interval: Duration,
}

impl Config {
    /// Loads configuration from process environment variables.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and parseable
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `JWT_SECRET` is unset
    /// - `Err(ConfigError::InvalidEnvVar)` - An optional variable failed to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let cull_secs = parse_or(
            &lookup,
            "INVITATION_CULL_INTERVAL_SECS",
            DEFAULT_CULL_INTERVAL_SECS,
        )?;
        if cull_secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                name: "INVITATION_CULL_INTERVAL_SECS".to_string(),
                value: cull_secs.to_string(),
            });
        }

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            port,
            invitation_cull_interval: Duration::from_secs(cull_secs),
        })
    }

    /// Address the HTTP listener binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: key.to_string(),
            value,
        }),
    }
}

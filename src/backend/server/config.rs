/**
 * Server Configuration
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * by the binaries before this runs). Every value has a development default
 * except that a missing `JWT_SECRET` is reported loudly.
 *
 * | Variable          | Default                            |
 * |-------------------|------------------------------------|
 * | `DATABASE_URL`    | `sqlite:///tmp/test.db?mode=rwc`   |
 * | `PORT`            | `3000`                             |
 * | `JWT_SECRET`      | development fallback               |
 * | `JWT_TTL_SECONDS` | `900` (at most ten years)          |
 */

use std::net::SocketAddr;

use thiserror::Error;

use crate::backend::auth::sessions::MAX_TOKEN_TTL_SECONDS;

/// Datastore used when `DATABASE_URL` is not set
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";

/// Listen port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 3000;

/// Token lifetime used when `JWT_TTL_SECONDS` is not set
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 15 * 60;

const FALLBACK_JWT_SECRET: &str = "change-me-in-production";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Datastore connection string
    pub database_url: String,
    /// Port to bind on all interfaces
    pub port: u16,
    /// HMAC secret used to sign bearer tokens
    pub jwt_secret: String,
    /// Lifetime of issued tokens, in seconds
    pub token_ttl_seconds: i64,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut builder = Self::builder();

        if let Some(url) = get("DATABASE_URL") {
            builder = builder.database_url(url);
        } else {
            tracing::info!("DATABASE_URL not set, using {}", DEFAULT_DATABASE_URL);
        }

        if let Some(port) = get("PORT") {
            let port = port
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: port.clone() })?;
            builder = builder.port(port);
        }

        match get("JWT_SECRET") {
            Some(secret) => builder = builder.jwt_secret(secret),
            None => {
                tracing::warn!("JWT_SECRET not set, using an insecure development secret");
                builder = builder.jwt_secret(FALLBACK_JWT_SECRET);
            }
        }

        if let Some(ttl) = get("JWT_TTL_SECONDS") {
            let ttl = ttl.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                key: "JWT_TTL_SECONDS",
                value: ttl.clone(),
            })?;
            builder = builder.token_ttl_seconds(ttl);
        }

        builder.build()
    }

    /// Address the server binds to (all interfaces)
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    port: Option<u16>,
    jwt_secret: Option<String>,
    token_ttl_seconds: Option<i64>,
}

impl ServerConfigBuilder {
    /// Set the datastore connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime in seconds
    pub fn token_ttl_seconds(mut self, ttl: i64) -> Self {
        self.token_ttl_seconds = Some(ttl);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let jwt_secret = self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        let token_ttl_seconds = self.token_ttl_seconds.unwrap_or(DEFAULT_TOKEN_TTL_SECONDS);
        if !(1..=MAX_TOKEN_TTL_SECONDS).contains(&token_ttl_seconds) {
            return Err(ConfigError::InvalidValue {
                key: "JWT_TTL_SECONDS",
                value: token_ttl_seconds.to_string(),
            });
        }

        Ok(ServerConfig {
            database_url: self
                .database_url
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port: self.port.unwrap_or(DEFAULT_PORT),
            jwt_secret,
            token_ttl_seconds,
        })
    }
}

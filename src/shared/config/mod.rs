//! Application configuration module
//!
//! Configuration is read from environment variables (the binary loads a
//! `.env` file first). Every value has a development default except
//! `DATABASE_URL`, whose absence switches the server to the in-memory
//! comment store.
//!
//! | Variable | Default |
//! |---|---|
//! | `SERVER_PORT` | `3000` |
//! | `DATABASE_URL` | unset |
//! | `JWT_SECRET` | development secret (logged as a warning) |
//! | `ACCESS_TOKEN_TTL_SECS` | `3600` |
//! | `REFRESH_TOKEN_TTL_SECS` | `1209600` (14 days) |
//! | `COOKIE_SECURE` | `false` |

use std::env;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ACCESS_TTL_SECS: u64 = 60 * 60;
const DEFAULT_REFRESH_TTL_SECS: u64 = 14 * 24 * 60 * 60;
const DEVELOPMENT_SECRET: &str = "development-secret-change-in-production";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub server_port: u16,
    /// PostgreSQL connection string
    pub database_url: Option<String>,
    /// HMAC secret used to sign access and refresh tokens
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub access_token_ttl_secs: u64,
    /// Refresh token lifetime in seconds
    pub refresh_token_ttl_secs: u64,
    /// Whether the refresh token cookie carries the `Secure` attribute
    pub cookie_secure: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: DEFAULT_PORT,
            database_url: None,
            jwt_secret: DEVELOPMENT_SECRET.to_string(),
            access_token_ttl_secs: DEFAULT_ACCESS_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TTL_SECS,
            cookie_secure: false,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load the configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using the development secret");
            DEVELOPMENT_SECRET.to_string()
        });

        let config = Self {
            server_port: parse_var("SERVER_PORT", DEFAULT_PORT)?,
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty()),
            jwt_secret,
            access_token_ttl_secs: parse_var("ACCESS_TOKEN_TTL_SECS", DEFAULT_ACCESS_TTL_SECS)?,
            refresh_token_ttl_secs: parse_var("REFRESH_TOKEN_TTL_SECS", DEFAULT_REFRESH_TTL_SECS)?,
            cookie_secure: parse_var("COOKIE_SECURE", false)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.is_empty() {
            return Err(ConfigError::MissingValue("JWT_SECRET"));
        }
        if self.access_token_ttl_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "ACCESS_TOKEN_TTL_SECS",
                value: "0".to_string(),
            });
        }
        if self.refresh_token_ttl_secs <= self.access_token_ttl_secs {
            return Err(ConfigError::InvalidValue {
                key: "REFRESH_TOKEN_TTL_SECS",
                value: self.refresh_token_ttl_secs.to_string(),
            });
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_port: Option<u16>,
    database_url: Option<String>,
    jwt_secret: Option<String>,
    access_token_ttl_secs: Option<u64>,
    refresh_token_ttl_secs: Option<u64>,
    cookie_secure: Option<bool>,
}

impl AppConfigBuilder {
    /// Set the listening port
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the PostgreSQL connection string
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn access_token_ttl_secs(mut self, secs: u64) -> Self {
        self.access_token_ttl_secs = Some(secs);
        self
    }

    pub fn refresh_token_ttl_secs(mut self, secs: u64) -> Self {
        self.refresh_token_ttl_secs = Some(secs);
        self
    }

    pub fn cookie_secure(mut self, secure: bool) -> Self {
        self.cookie_secure = Some(secure);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            server_port: self.server_port.unwrap_or(defaults.server_port),
            database_url: self.database_url,
            jwt_secret: self.jwt_secret.unwrap_or(defaults.jwt_secret),
            access_token_ttl_secs: self.access_token_ttl_secs.unwrap_or(defaults.access_token_ttl_secs),
            refresh_token_ttl_secs: self.refresh_token_ttl_secs.unwrap_or(defaults.refresh_token_ttl_secs),
            cookie_secure: self.cookie_secure.unwrap_or(defaults.cookie_secure),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

//! Configuration handling for the application.
//!
//! Everything comes from environment variables with sensible development
//! defaults, so the binary runs out of the box. The `Config::from_env`
//! method performs the loading and is the single place where validation
//! would go if a field ever needs it.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names. Keeping them public lets tests refer to them.
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_ALLOWED_ORIGIN: &str = "ALLOWED_ORIGIN";

/// Default development values used when environment variables are absent.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_ALLOWED_ORIGIN: &str = "*";

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    allowed_origin: String,
}

impl Config {
    /// Create a new config explicitly.
    pub fn new(bind_addr: impl Into<String>, allowed_origin: impl Into<String>) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            allowed_origin: allowed_origin.into(),
        }
    }

    /// Load from environment variables, falling back to development defaults.
    ///
    /// This never fails today because we only do simple string extraction.
    /// Future validation (e.g. parse the bind address) can make it return a
    /// `ConfigError`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = env::var(ENV_BIND_ADDR).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let allowed_origin =
            env::var(ENV_ALLOWED_ORIGIN).unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string());
        Ok(Self {
            bind_addr,
            allowed_origin,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    /// Origin allowed by the CORS layer; `*` means any origin.
    pub fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    /// Reserved for future validation failures.
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}

//! Client configuration, populated from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use paintshop::Context;
use thiserror::Error;

/// Default backend base URL.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Default session file, relative to the working directory.
pub const DEFAULT_SESSION_FILE: &str = ".paintshop-session.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime configuration for an [`ApiClient`](crate::ApiClient).
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `PAINTSHOP_API_BASE` | `http://localhost:8000/api` | Backend base URL |
/// | `PAINTSHOP_TIMEOUT_SECS` | (absent = no client timeout) | Per-request timeout, positive seconds |
/// | `PAINTSHOP_CONTEXT` | `customer` | `customer` or `admin` |
/// | `PAINTSHOP_SESSION_FILE` | `.paintshop-session.json` | Where the CLI keeps its session |
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL every catalog path is appended to. No trailing slash.
    pub api_base: String,

    /// `None` leaves timing to the transport's defaults.
    pub timeout: Option<Duration>,

    pub context: Context,

    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: None,
            context: Context::Customer,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl ClientConfig {
    /// A default config pointed at `api_base`.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }

    /// Populate config from environment variables, applying defaults where absent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = match lookup("PAINTSHOP_API_BASE") {
            Some(base) => Self::new(base),
            None => Self::default(),
        };

        if let Some(raw) = lookup("PAINTSHOP_TIMEOUT_SECS") {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|&s| s > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: "PAINTSHOP_TIMEOUT_SECS",
                    expected: "a positive whole number of seconds",
                    value: raw.clone(),
                })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(raw) = lookup("PAINTSHOP_CONTEXT") {
            config.context = raw.parse().map_err(|_| ConfigError::Invalid {
                var: "PAINTSHOP_CONTEXT",
                expected: "`customer` or `admin`",
                value: raw.clone(),
            })?;
        }

        if let Some(path) = lookup("PAINTSHOP_SESSION_FILE") {
            config.session_file = PathBuf::from(path);
        }

        Ok(config)
    }
}

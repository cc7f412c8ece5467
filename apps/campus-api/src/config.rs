//! Runtime configuration read from the environment
//!
//! `.env` is loaded by `main` before this runs, so values may come from either.

use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use mockable::{DefaultEnv, Env};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info";

const HOST_ENV: &str = "CAMPUS_HOST";
const PORT_ENV: &str = "CAMPUS_PORT";
const LOG_FILTER_ENV: &str = "RUST_LOG";
const LOG_FORMAT_ENV: &str = "CAMPUS_LOG_FORMAT";

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => bail!("unknown log format '{}', expected 'text' or 'json'", other),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Settings for the HTTP service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::Text,
        }
    }
}

impl ApiConfig {
    /// Read `CAMPUS_HOST`, `CAMPUS_PORT`, `RUST_LOG` and `CAMPUS_LOG_FORMAT`
    pub fn from_env() -> Result<Self> {
        Self::from_source(&DefaultEnv::new())
    }

    /// Build a config from any environment source, falling back to defaults
    pub fn from_source<E: Env>(env: &E) -> Result<Self> {
        let defaults = Self::default();

        let port = match env.string(PORT_ENV) {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("{} must be a port number, got '{}'", PORT_ENV, raw))?,
            None => defaults.port,
        };

        let log_format = match env.string(LOG_FORMAT_ENV) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid {}", LOG_FORMAT_ENV))?,
            None => defaults.log_format,
        };

        Ok(Self {
            host: env.string(HOST_ENV).unwrap_or(defaults.host),
            port,
            log_filter: env.string(LOG_FILTER_ENV).unwrap_or(defaults.log_filter),
            log_format,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Install the global tracing subscriber described by this config
    pub fn init_tracing(&self) -> Result<()> {
        let filter = EnvFilter::try_new(&self.log_filter)
            .with_context(|| format!("invalid log filter '{}'", self.log_filter))?;

        let installed = match self.log_format {
            LogFormat::Text => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .try_init(),
            LogFormat::Json => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .try_init(),
        };

        installed.map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {}", err))
    }
}

//! Logging configuration loaded from the environment

use funcplus_core::{Error, Result};
use std::fmt;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

/// Filter directive variable, checked before `RUST_LOG`
pub const LOG_ENV_VAR: &str = "FUNCPLUS_LOG";
/// Output format variable (`compact` or `json`)
pub const LOG_FORMAT_ENV_VAR: &str = "FUNCPLUS_LOG_FORMAT";
/// Colour output variable (`true`, `false`, `1` or `0`)
pub const LOG_ANSI_ENV_VAR: &str = "FUNCPLUS_LOG_ANSI";
/// Conventional fallback filter variable
pub const RUST_LOG_ENV_VAR: &str = "RUST_LOG";
/// Filter used when no variable is set
pub const DEFAULT_FILTER: &str = "info";

/// How log lines are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Single-line human readable output
    #[default]
    Compact,
    /// One JSON object per line
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::configuration(format!(
                "unknown log format '{other}', expected 'compact' or 'json'"
            ))),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

/// Configuration for the tracing subscriber
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `funcplus_core=trace`
    pub filter: String,
    /// Output format
    pub format: LogFormat,
    /// Force colour on or off; `None` follows TTY detection
    pub ansi: Option<bool>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            ansi: None,
        }
    }
}

impl LogConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter directive
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    /// Set the output format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Force colour output on or off
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = Some(ansi);
        self
    }

    /// Load from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let mut config = Self::default();
        if let Some(filter) = non_empty(LOG_ENV_VAR).or_else(|| non_empty(RUST_LOG_ENV_VAR)) {
            config.filter = filter;
        }
        if let Some(format) = non_empty(LOG_FORMAT_ENV_VAR) {
            config.format = format.parse()?;
        }
        if let Some(ansi) = non_empty(LOG_ANSI_ENV_VAR) {
            config.ansi = Some(parse_bool(LOG_ANSI_ENV_VAR, &ansi)?);
        }
        config.env_filter()?;
        Ok(config)
    }

    /// Build the `EnvFilter` described by `filter`
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.filter).map_err(|e| {
            Error::configuration(format!("invalid log filter '{}': {e}", self.filter))
        })
    }
}

fn parse_bool(variable: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::configuration(format!(
            "{variable} must be a boolean, got '{other}'"
        ))),
    }
}

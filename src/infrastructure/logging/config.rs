use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::models::LoggingConfig;

/// Resolved logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Output format for stderr
    pub format: LogFormat,

    /// Directory for log files (stderr only when None)
    pub log_dir: Option<PathBuf>,

    /// Log rotation policy for file output
    pub rotation: RotationPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}

impl FromStr for RotationPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Self::Daily),
            "hourly" => Ok(Self::Hourly),
            "never" => Ok(Self::Never),
            other => Err(format!("unknown rotation policy: {other}")),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from(&LoggingConfig::default())
    }
}

impl From<&LoggingConfig> for LogConfig {
    /// Unknown format or rotation strings fall back to pretty/daily; the
    /// config loader rejects them before this point.
    fn from(config: &LoggingConfig) -> Self {
        Self {
            level: config.level.clone(),
            format: config.format.parse().unwrap_or(LogFormat::Pretty),
            log_dir: config.log_dir.clone(),
            rotation: config.rotation.parse().unwrap_or_default(),
        }
    }
}

impl LogConfig {
    /// Override the level, e.g. from `--verbose`
    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }
}

//! Logger setup on top of `twyg`.

use anyhow::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl From<LogLevel> for twyg::LogLevel {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::Trace,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// The `[logging]` table of the config file.
///
/// The default level is `warn` so that log lines stay out of the menu.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub coloured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            coloured: true,
        }
    }
}

/// Install the global logger. Call once, before the session starts.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let opts = twyg::OptsBuilder::new()
        .coloured(config.coloured)
        .level(config.level.into())
        .report_caller(false)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build logger options: {:?}", e))?;

    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Failed to set up logger: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_names() {
        let level: LogLevel = serde_json::from_str("\"info\"").unwrap();
        assert_eq!(level, LogLevel::Info);
    }

    #[test]
    fn test_logging_defaults() {
        let config = LoggingConfig::default();
        assert_eq!(config.level, LogLevel::Warn);
        assert!(config.coloured);
    }
}

// RUNTIME PREFERENCES (User Experience)

use crate::logging::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Minimum log level as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevelSetting {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevelSetting {
    pub fn to_log_level(self) -> LogLevel {
        match self {
            Self::Error => LogLevel::Error,
            Self::Warning => LogLevel::Warning,
            Self::Info => LogLevel::Info,
            Self::Debug => LogLevel::Debug,
        }
    }

    fn from_env_value(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warning" | "warn" => Some(Self::Warning),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Minimum level the global logger emits
    pub min_log_level: LogLevelSetting,

    /// Whether to emit JSON events instead of plain console lines
    pub use_structured_logging: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: env::var("IMP_LOG_LEVEL")
                .ok()
                .and_then(|v| LogLevelSetting::from_env_value(&v))
                .unwrap_or(LogLevelSetting::Warning),
            use_structured_logging: env::var("IMP_STRUCTURED_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportPreferences {
    /// Whether to echo the raw input before the token dump
    pub echo_input: bool,

    /// Whether to dump the token table
    pub dump_tokens: bool,

    /// Whether to print per-statement confirmations
    pub show_confirmations: bool,
}

impl Default for ReportPreferences {
    fn default() -> Self {
        Self {
            echo_input: env::var("IMP_REPORT_ECHO_INPUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            dump_tokens: env::var("IMP_REPORT_DUMP_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            show_confirmations: env::var("IMP_REPORT_SHOW_CONFIRMATIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

/// All runtime preferences, with environment defaults and an optional TOML
/// overlay
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimePreferences {
    pub logging: LoggingPreferences,
    pub report: ReportPreferences,
}

impl RuntimePreferences {
    /// Parse preferences from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load preferences from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_overlay_keeps_missing_defaults() {
        let preferences = RuntimePreferences::from_toml_str(
            r#"
            [logging]
            min_log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(preferences.logging.min_log_level, LogLevelSetting::Debug);
        // report section absent, defaults apply
        assert!(preferences.report.dump_tokens);
    }

    #[test]
    fn test_structured_logging_toggle() {
        let preferences = RuntimePreferences::from_toml_str(
            r#"
            [logging]
            use_structured_logging = true

            [report]
            echo_input = false
            "#,
        )
        .unwrap();

        assert!(preferences.logging.use_structured_logging);
        assert!(!preferences.report.echo_input);
        assert!(preferences.report.show_confirmations);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        let result = RuntimePreferences::from_toml_str("[logging\nmin_log_level = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_log_level_setting_parsing() {
        assert_eq!(
            LogLevelSetting::from_env_value("WARN"),
            Some(LogLevelSetting::Warning)
        );
        assert_eq!(
            LogLevelSetting::from_env_value("debug"),
            Some(LogLevelSetting::Debug)
        );
        assert_eq!(LogLevelSetting::from_env_value("verbose"), None);
    }

    #[test]
    fn test_level_conversion() {
        assert_eq!(LogLevelSetting::Error.to_log_level(), LogLevel::Error);
        assert_eq!(LogLevelSetting::Debug.to_log_level(), LogLevel::Debug);
    }
}

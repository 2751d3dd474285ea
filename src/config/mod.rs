//! Configuration management for cmdshell
//!
//! Settings are read from a TOML file; every field has a default so a
//! partial file (or none at all) is valid. Command-line flags applied by
//! the binary take precedence over the file.
//!
//! ```toml
//! [completion]
//! hint_width = 20
//!
//! [logging]
//! level = "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Completion configuration
    #[serde(default)]
    pub completion: CompletionConfig,

    /// History configuration
    #[serde(default)]
    pub history: HistoryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Prompt configuration
    #[serde(default)]
    pub prompt: PromptConfig,
}

/// Tab completion configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompletionConfig {
    /// Column width of the word in printed completion hints
    #[serde(default = "default_hint_width")]
    pub hint_width: usize,

    /// Enable tab completion
    #[serde(default = "default_completion_enabled")]
    pub enabled: bool,
}

/// Command history configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of history entries
    #[serde(default = "default_max_history_size")]
    pub max_size: usize,

    /// Path to history file
    #[serde(default = "default_history_file")]
    pub file_path: PathBuf,

    /// Enable history persistence
    #[serde(default = "default_persist_history")]
    pub persist: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// Enable timestamps in logs
    #[serde(default = "default_log_timestamps")]
    pub timestamps: bool,
}

/// Log level options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Prompt configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Text shown before the cursor
    #[serde(default = "default_prompt_text")]
    pub text: String,
}

// Default value functions
fn default_hint_width() -> usize {
    15
}

fn default_completion_enabled() -> bool {
    true
}

fn default_max_history_size() -> usize {
    1000
}

fn default_history_file() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cmdshell_history")
}

fn default_persist_history() -> bool {
    true
}

fn default_log_level() -> LogLevel {
    LogLevel::Warn
}

fn default_log_timestamps() -> bool {
    true
}

fn default_prompt_text() -> String {
    ">>> ".to_string()
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            hint_width: default_hint_width(),
            enabled: default_completion_enabled(),
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_size: default_max_history_size(),
            file_path: default_history_file(),
            persist: default_persist_history(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            timestamps: default_log_timestamps(),
        }
    }
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            text: default_prompt_text(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file (TOML format)
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()).into());
        }

        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults
    ///
    /// An explicit path must exist. Without one the default path is tried
    /// and a missing file yields the default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Self::default_path();
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Get the default configuration file path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cmdshell")
            .join("config.toml")
    }

    /// Save configuration to a file
    ///
    /// # Arguments
    /// * `path` - Path where to save the configuration
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.completion.hint_width == 0 {
            return Err(ConfigError::InvalidValue {
                field: "completion.hint_width".to_string(),
                value: "0".to_string(),
            }
            .into());
        }
        if self.history.max_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history.max_size".to_string(),
                value: "0".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl LogLevel {
    /// Convert to tracing::Level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.completion.hint_width, 15);
        assert!(config.completion.enabled);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert_eq!(config.prompt.text, ">>> ");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [completion]
            hint_width = 20

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.completion.hint_width, 20);
        assert!(config.completion.enabled);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.history.max_size, 1000);
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml("[completion\nhint_width = ").unwrap_err();
        assert!(matches!(err, ShellError::Config(ConfigError::InvalidFormat(_))));
    }

    #[test]
    fn test_zero_width_rejected() {
        let err = Config::from_toml("[completion]\nhint_width = 0").unwrap_err();
        assert!(matches!(
            err,
            ShellError::Config(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/cmdshell.toml"))).unwrap_err();
        assert!(matches!(err, ShellError::Config(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let path = std::env::temp_dir()
            .join(format!("cmdshell-test-{}", std::process::id()))
            .join("config.toml");

        let mut config = Config::default();
        config.completion.hint_width = 24;
        config.prompt.text = "demo> ".to_string();
        config.save(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded.completion.hint_width, 24);
        assert_eq!(loaded.prompt.text, "demo> ");

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_tracing_level() {
        assert_eq!(LogLevel::Trace.to_tracing_level(), tracing::Level::TRACE);
        assert_eq!(LogLevel::Error.to_tracing_level(), tracing::Level::ERROR);
    }
}

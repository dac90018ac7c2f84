/*!
 * Configuration types for Air-Easy
 */

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{AirEasyError, Result};
use crate::source::{default_artifact_path, CommandSource};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Program run to fetch flights
    #[serde(default = "default_fetch_program")]
    pub fetch_program: String,

    /// Arguments passed to the fetch program before the route codes
    #[serde(default = "default_fetch_args")]
    pub fetch_args: Vec<String>,

    /// File that receives the fetch program's stdout
    #[serde(default = "default_artifact_path")]
    pub artifact_path: PathBuf,

    /// Log level for diagnostic output
    #[serde(default)]
    pub log_level: LogLevel,

    /// Log file path (None = stderr)
    #[serde(default)]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (shorthand for log_level = debug)
    #[serde(default)]
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fetch_program: default_fetch_program(),
            fetch_args: default_fetch_args(),
            artifact_path: default_artifact_path(),
            log_level: LogLevel::default(),
            log_file: None,
            verbose: false,
        }
    }
}

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only errors
    Error,

    /// Warnings and errors
    #[default]
    Warn,

    /// Info, warnings, and errors
    Info,

    /// Debug and above
    Debug,

    /// All messages including traces
    Trace,
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

// Default value functions for serde
fn default_fetch_program() -> String {
    "python".to_string()
}

fn default_fetch_args() -> Vec<String> {
    vec!["fetch_flights.py".to_string()]
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| AirEasyError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Load the config at `path`, or the default location if it exists, or
    /// fall back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Fetch command described by this configuration
    pub fn command_source(&self) -> CommandSource {
        CommandSource::new(&self.fetch_program)
            .with_args(&self.fetch_args)
            .with_artifact(&self.artifact_path)
    }
}

/// `~/.air-easy/air-easy.toml`, when a home directory is known
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".air-easy").join("air-easy.toml"))
}

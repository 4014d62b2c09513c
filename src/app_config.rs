use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::errors::ConfigError;

/// Application configuration module
/// This module handles the application configuration including loading
/// and validating configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Speaker name for lines without a character id
    #[serde(default = "default_narrator")]
    pub narrator: String,

    /// Output document path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Script file extension, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Descend into subdirectories when looking for scripts
    #[serde(default)]
    pub recursive: bool,

    /// Write indented JSON
    #[serde(default)]
    pub pretty: bool,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Logging verbosity
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            Self::Error => log::LevelFilter::Error,
            Self::Warn => log::LevelFilter::Warn,
            Self::Info => log::LevelFilter::Info,
            Self::Debug => log::LevelFilter::Debug,
            Self::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_narrator() -> String {
    "NARRATOR".to_string()
}

fn default_output() -> PathBuf {
    PathBuf::from("dialog.json")
}

fn default_extension() -> String {
    "rpy".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            narrator: default_narrator(),
            output: default_output(),
            extension: default_extension(),
            recursive: false,
            pretty: false,
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load a configuration file; missing fields take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {:?}", path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Check that the configuration can drive an extraction run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.narrator.trim().is_empty() {
            return Err(ConfigError::EmptyNarrator);
        }

        let extension = self.normalized_extension();
        if extension.is_empty() || extension.contains(['/', '\\']) {
            return Err(ConfigError::InvalidExtension(self.extension.clone()));
        }

        Ok(())
    }

    /// Extension without a leading dot
    pub fn normalized_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

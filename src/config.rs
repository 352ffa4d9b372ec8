//! Configuration management and validation.
//!
//! Provides the reader configuration: archive layout, CSV parsing behaviour,
//! output formatting and logging. Configuration is layered as defaults, then
//! an optional TOML file, then command-line overrides.

use crate::constants::{CSV_FILENAME, DEFAULT_DELIMITER, DEFAULT_LOG_LEVEL};
use crate::error::{MyDataError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Archive layout settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// Name of the CSV member inside the export ZIP
    pub member_name: String,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            member_name: CSV_FILENAME.to_string(),
        }
    }
}

/// CSV parsing settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsingConfig {
    /// Field delimiter, must be ASCII
    pub delimiter: char,

    /// Infer numbers and booleans from cell text
    pub infer_types: bool,

    /// Reject records without a scientific name or taxonomic order
    pub strict_validation: bool,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            infer_types: true,
            strict_validation: false,
        }
    }
}

/// JSON export settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Global configuration for reading an eBird export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub archive: ArchiveConfig,
    pub parsing: ParsingConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

impl ReaderConfig {
    /// Default config file location: `<config dir>/ebird-mydata/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            MyDataError::configuration("Could not determine user config directory")
        })?;
        Ok(config_dir.join("ebird-mydata").join("config.toml"))
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text)
            .map_err(|e| MyDataError::configuration(format!("Invalid config file: {}", e)))
    }

    /// Load a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            MyDataError::configuration(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_toml_str(&text)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from an explicit file, else the default location when present,
    /// else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        match Self::default_config_path() {
            Ok(path) if path.exists() => Self::from_file(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject settings the reader cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.archive.member_name.trim().is_empty() {
            return Err(MyDataError::configuration(
                "archive.member_name must not be empty",
            ));
        }
        if !self.parsing.delimiter.is_ascii() {
            return Err(MyDataError::configuration(format!(
                "parsing.delimiter '{}' must be an ASCII character",
                self.parsing.delimiter
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(MyDataError::configuration("logging.level must not be empty"));
        }
        Ok(())
    }

    /// Use a different archive member name
    pub fn with_member_name(mut self, member_name: impl Into<String>) -> Self {
        self.archive.member_name = member_name.into();
        self
    }

    /// Enable strict record validation
    pub fn with_strict_validation(mut self) -> Self {
        self.parsing.strict_validation = true;
        self
    }

    /// Keep every cell as text
    pub fn without_type_inference(mut self) -> Self {
        self.parsing.infer_types = false;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.parsing.delimiter = delimiter;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Write compact rather than indented JSON
    pub fn with_compact_json(mut self) -> Self {
        self.output.pretty_json = false;
        self
    }
}

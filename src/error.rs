//! Error handling for eBird export reading and analysis.
//!
//! Only genuine failures surface here: I/O, corrupt archives, undecodable
//! CSV, bad taxonomy tables and configuration problems. Soft conditions such
//! as a missing archive member or an undated record are not errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MyDataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read archive: {path} - {reason}")]
    ArchiveReadFailed { path: PathBuf, reason: String },

    #[error("Invalid taxonomy table: {reason}")]
    InvalidTaxonomy { reason: String },

    #[error("Invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl MyDataError {
    /// Create a taxonomy table error
    pub fn invalid_taxonomy(reason: impl Into<String>) -> Self {
        Self::InvalidTaxonomy {
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MyDataError>;

//! Error handling for weather data loading and reporting.
//!
//! Every failure in the crate comes from reading or validating the source
//! file (or writing an export). Query operations never fail; they return
//! empty collections or `None` instead.

use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Failed to read weather data from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed row at line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid date at line {line}: '{value}' (expected YYYY-MM-DD)")]
    DateParse {
        line: usize,
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Invalid {field} at line {line}: '{value}' is not a finite number")]
    NumberParse {
        line: usize,
        field: &'static str,
        value: String,
        #[source]
        source: Option<ParseFloatError>,
    },

    #[error("Failed to write weather data to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl WeatherError {
    /// Create an I/O error for the file being read
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an I/O error for the file being written
    pub fn export(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Export {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the source file was readable but its content was rejected
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedRow { .. } | Self::DateParse { .. } | Self::NumberParse { .. }
        )
    }

    /// Line number of the offending row, for format errors
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedRow { line, .. }
            | Self::DateParse { line, .. }
            | Self::NumberParse { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;

//! Error types for the Atelier dashboard
//!
//! This module defines all error types that can occur while loading datasets,
//! computing metrics and exporting the dashboard.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: Unreadable input, failed export writes
//! - **CSV Parsing Errors**: Malformed CSV, rows missing required columns, non-integer counts
//! - **Field Errors**: Values that fail typed parsing (LTV, satisfaction scores)
//! - **Export Errors**: JSON serialization failures
//!
//! A missing input file is not an error: the loader logs a warning and treats
//! the dataset as empty. Everything listed here aborts the run.

use thiserror::Error;

/// Main error type for the dashboard
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    /// I/O error occurred while reading input or writing the export
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Raised for malformed CSV content and for rows that do not deserialize
    /// into their typed record (missing column, non-integer value).
    #[error("CSV parse error in {file}{}: {message}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Input file name
        file: String,
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A field value could not be parsed into its typed representation
    #[error("Invalid {field} '{value}' in {file}{}", .line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    InvalidField {
        /// Input file name
        file: String,
        /// Line number of the offending row (if available)
        line: Option<u64>,
        /// Column name
        field: String,
        /// Raw value that failed to parse
        value: String,
    },

    /// JSON serialization failed during export
    #[error("JSON export error: {message}")]
    ExportError {
        /// Description of the serialization error
        message: String,
    },
}

impl From<std::io::Error> for DashboardError {
    fn from(error: std::io::Error) -> Self {
        DashboardError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for DashboardError {
    fn from(error: serde_json::Error) -> Self {
        DashboardError::ExportError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl DashboardError {
    /// Create a ParseError from a csv::Error raised while reading `file`
    pub fn csv(file: &str, error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        DashboardError::ParseError {
            file: file.to_string(),
            line,
            message: error.to_string(),
        }
    }

    /// Create an InvalidField error without location
    ///
    /// Conversion functions do not know which file or line they are working
    /// on; the loader attaches that context via [`DashboardError::at`].
    pub fn invalid_field(field: &str, value: &str) -> Self {
        DashboardError::InvalidField {
            file: String::new(),
            line: None,
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Create a ParseError for a required column absent from a row
    pub fn missing_field(field: &str) -> Self {
        DashboardError::ParseError {
            file: String::new(),
            line: None,
            message: format!("missing field `{}`", field),
        }
    }

    /// Attach file and line context to a row-level error
    ///
    /// Location already present on the error is kept.
    pub fn at(self, file_name: &str, line_number: u64) -> Self {
        match self {
            DashboardError::ParseError {
                file,
                line,
                message,
            } => DashboardError::ParseError {
                file: if file.is_empty() { file_name.to_string() } else { file },
                line: line.or(Some(line_number)),
                message,
            },
            DashboardError::InvalidField {
                file,
                line,
                field,
                value,
            } => DashboardError::InvalidField {
                file: if file.is_empty() { file_name.to_string() } else { file },
                line: line.or(Some(line_number)),
                field,
                value,
            },
            other => other,
        }
    }
}

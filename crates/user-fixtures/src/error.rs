//! Error types for the user-fixtures crate.
//!
//! This module defines semantic error enums for batch generation, document
//! output, and command-line handling, following the project's error handling
//! conventions with `thiserror`.

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while generating a batch of user records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The date window has a negative day range.
    #[error("invalid days range {days_range}: must not be negative")]
    InvalidDaysRange {
        /// The rejected day range.
        days_range: i64,
    },

    /// Adding the sampled offset to the criterion date left the calendar.
    #[error("date {criterion} plus {days} days is outside the supported calendar")]
    DateOutOfRange {
        /// Window start date.
        criterion: NaiveDate,
        /// Offset in days that could not be applied.
        days: u64,
    },

    /// More records were requested than distinct names of the configured
    /// length exist.
    #[error("cannot generate {count} unique names of length {name_length}")]
    NameSpaceTooSmall {
        /// Number of records requested.
        count: usize,
        /// Configured name length.
        name_length: usize,
    },

    /// Memory for the requested batch could not be reserved.
    #[error("cannot allocate a batch of {count} users")]
    BatchTooLarge {
        /// Number of records requested.
        count: usize,
    },

    /// Every generated batch contained at least one duplicate name.
    #[error("failed to generate a batch of unique names after {max_attempts} attempts")]
    GenerationFailed {
        /// Number of batches generated before giving up.
        max_attempts: usize,
    },
}

/// Errors that can occur when rendering, writing, or reading a fixture
/// document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    /// The filesystem rejected an operation on the document path.
    #[error("failed to write fixture file at '{path}': {message}")]
    Io {
        /// Path involved in the failed operation.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The output path does not name a file.
    #[error("fixture output path '{path}' must name a file")]
    InvalidPath {
        /// The rejected path.
        path: Utf8PathBuf,
    },

    /// The document could not be rendered as JSON.
    #[error("failed to serialize fixture document: {message}")]
    Serialize {
        /// Description of the serialization error.
        message: String,
    },

    /// A fixture file did not contain a valid document.
    #[error("invalid fixture JSON at '{path}': {message}")]
    Parse {
        /// Path of the file that failed to parse.
        path: Utf8PathBuf,
        /// Description of the parse error.
        message: String,
    },
}

/// Errors surfaced by the command-line entry point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The command-line arguments were malformed.
    #[error("{message}")]
    Usage {
        /// Usage text rendered by the argument parser.
        message: String,
    },

    /// Batch generation failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The document could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),
}

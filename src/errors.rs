/*!
 * Error types for the termguard application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 *
 * The alignment/consistency/patch core deliberately defines no error types of
 * its own: missing terms, empty corpora and below-threshold counts degrade to
 * empty outputs instead of failing. Errors here cover the outer surfaces
 * (files, glossary parsing, reports, configuration).
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when loading or parsing a glossary
#[derive(Error, Debug)]
pub enum GlossaryError {
    /// Error reading the glossary file
    #[error("Failed to read glossary file: {0}")]
    ReadFailed(String),

    /// The glossary file has no usable header row
    #[error("Glossary is missing a recognizable header (expected en_term/en/term and zh_term/preferred_zh/zh): {0}")]
    MissingHeader(String),

    /// A row could not be parsed
    #[error("Malformed glossary row {line}: {message}")]
    MalformedRow {
        /// 1-based line number of the offending row
        line: usize,
        /// Description of what went wrong
        message: String,
    },
}

/// Errors that can occur when writing reports
#[derive(Error, Debug)]
pub enum ReportError {
    /// Error writing a report file
    #[error("Failed to write report: {0}")]
    WriteFailed(String),

    /// Error serializing flags to JSON
    #[error("Failed to serialize flags: {0}")]
    SerializeFailed(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from configuration handling
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from glossary loading
    #[error("Glossary error: {0}")]
    Glossary(#[from] GlossaryError),

    /// Error from report writing
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

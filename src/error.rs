//! Error handling for merge and lookup operations.
//!
//! Fatal errors (missing sources, malformed rows, unreadable merged table)
//! live in [`CentreError`]. Request-level outcomes that map onto HTTP status
//! codes live in [`LookupError`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CentreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("XML error in file: {path} - {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: quick_xml::Error,
    },

    #[error("Source file not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Missing column '{column}' in file: {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Missing value for '{field}' in file: {path} (record {record})")]
    MissingValue {
        path: PathBuf,
        field: String,
        record: usize,
    },

    #[error("Invalid record in file: {path} - {reason}")]
    InvalidRecord { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CentreError>;

/// Outcome of a lookup that did not produce a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The query parameter is malformed.
    #[error("{0}")]
    Invalid(String),

    /// The query parameter is well formed but matches nothing.
    #[error("{0}")]
    NotFound(String),
}

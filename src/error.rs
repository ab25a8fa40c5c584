//! Error types for XVG parsing and analysis
//!
//! Provides the single error union returned by the parsing pipeline and the
//! statistics engine. Output formats (CSV, plots) carry their own error
//! types — see [`crate::output::export`].

use std::path::PathBuf;
use thiserror::Error;

/// Error union for parsing and analysis operations
///
/// Every fatal condition stops processing of the current file or operation
/// and is returned to the caller; library code never terminates the process.
#[derive(Error, Debug)]
pub enum XvgError {
    /// Input path does not exist
    #[error("no such file: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Input path does not carry the `.xvg` suffix
    #[error("expected a file with suffix .xvg: {}", path.display())]
    BadExtension { path: PathBuf },

    /// A data row's token count disagrees with the established column count
    #[error("the number of columns in {source_name} is not constant: {line}")]
    ColumnCountMismatch { source_name: String, line: String },

    /// Empty file, zero columns, or a post-parse length mismatch
    #[error("structural error: {0}")]
    Structural(String),

    /// Out-of-domain index range supplied to an analysis call
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// Out-of-domain parameter supplied to an analysis call
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Internal invariant violated — indicates a logic defect
    #[error("internal consistency check failed: {0}")]
    Consistency(String),

    /// IO error while reading the input file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using [`XvgError`]
pub type Result<T> = std::result::Result<T, XvgError>;

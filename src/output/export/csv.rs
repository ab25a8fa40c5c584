//! CSV export for analyzed XVG data
//!
//! Writes a header line of comma-joined column names followed by one
//! comma-joined row per data row. Numeric analysis columns are formatted
//! with a configurable precision; raw text columns that never joined the
//! numeric set are appended verbatim, so no input column is lost.
//!
//! # Quick Example
//!
//! ```rust,ignore
//! use xvg_rs::output::export::{CsvConfig, CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::new(CsvConfig::default().precision(8));
//! exporter.export(&dataset, "energy.csv")?;
//! ```
//!
//! With `include_metadata` the file starts with `#`-comment lines:
//!
//! ```csv
//! # XVG Analysis Data
//! # Generated: 2026-08-07T10:00:00+00:00
//! # Source: energy.xvg
//! # Title: GROMACS Energies
//! #
//! Time (ps),Potential (kJ/mol)
//! 0.000000,-1000.000000
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::XvgDataset;

use super::Exporter;

/// Errors specific to CSV export
#[derive(Error, Debug)]
pub enum CsvError {
    /// Destination does not carry the `.csv` suffix
    #[error("expected a csv file name with suffix .csv: {0}")]
    BadExtension(String),

    /// Destination already exists — existing files are never overwritten
    #[error("output file already exists: {0}")]
    DestinationExists(String),

    /// IO failure while creating or writing the file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration for CSV export
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for numeric values (default: 6)
    pub precision: usize,

    /// Prepend `#`-comment lines with source, title and a timestamp
    /// (default: false)
    pub include_metadata: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable the metadata header
    pub fn with_metadata(mut self) -> Self {
        self.include_metadata = true;
        self
    }
}

/// CSV exporter over an [`XvgDataset`]
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export(&self, dataset: &XvgDataset, path: &str) -> Result<(), CsvError> {
        // ============================= Validation =============================

        if Path::new(path).extension().and_then(|e| e.to_str()) != Some("csv") {
            return Err(CsvError::BadExtension(path.to_string()));
        }
        if Path::new(path).exists() {
            return Err(CsvError::DestinationExists(path.to_string()));
        }

        // ============================= Open File ==============================

        let mut file = File::create(path)?;

        // ============================= Write Metadata =========================

        if self.config.include_metadata {
            write_metadata_header(&mut file, dataset)?;
        }

        // ============================= Write Header ===========================

        writeln!(
            file,
            "{}",
            dataset
                .heads()
                .join(&self.config.delimiter.to_string())
        )?;

        // ============================= Write Data =============================

        for row in 0..dataset.row_count() {
            let mut fields: Vec<String> = dataset
                .columns()
                .iter()
                .map(|column| format_number(column[row], &self.config))
                .collect();
            for text_column in dataset.extra_text_columns() {
                fields.push(text_column[row].clone());
            }
            writeln!(file, "{}", fields.join(&self.config.delimiter.to_string()))?;
        }

        Ok(())
    }
}

/// Write `#`-comment header lines describing the dataset
fn write_metadata_header(file: &mut File, dataset: &XvgDataset) -> Result<(), CsvError> {
    writeln!(file, "# XVG Analysis Data")?;
    writeln!(file, "# Generated: {}", chrono::Utc::now().to_rfc3339())?;
    writeln!(file, "# Source: {}", dataset.source().display())?;

    let meta = dataset.metadata();
    if !meta.title.is_empty() {
        writeln!(file, "# Title: {}", meta.title)?;
    }
    if !meta.x_label.is_empty() {
        writeln!(file, "# X: {}", meta.x_label)?;
    }
    if !meta.y_label.is_empty() {
        writeln!(file, "# Y: {}", meta.y_label)?;
    }

    writeln!(file, "#")?;
    Ok(())
}

/// Format a number with the configured precision
fn format_number(value: f64, config: &CsvConfig) -> String {
    format!("{:.prec$}", value, prec = config.precision)
}

// =================================================================================================
// Tests
// =================================================================================================

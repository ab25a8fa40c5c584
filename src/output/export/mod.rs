//! Export module for analyzed XVG data.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export
//! format. Each format is an independent implementation in its own
//! sub-module, so adding a format means adding a file, not modifying
//! existing code.
//!
//! # Available formats
//!
//! | Format  | Module          |
//! |---------|-----------------|
//! | CSV     | [`csv`]         |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use xvg_rs::output::export::{CsvExporter, Exporter};
//!
//! let exporter = CsvExporter::default();
//! exporter.export(&dataset, "energy.csv")?;
//! ```

pub mod csv;

pub use csv::{CsvConfig, CsvError, CsvExporter};

use crate::XvgDataset;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type. This avoids
/// systematic boxing and allows the caller to react precisely based on the
/// error kind.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Write the dataset's header line and data rows to `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is unsuitable for the format or cannot
    /// be written.
    fn export(&self, dataset: &XvgDataset, path: &str) -> Result<(), Self::Error>;
}

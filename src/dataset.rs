//! The XVG dataset — parsed, reconciled, ready for analysis
//!
//! [`XvgDataset`] is the long-lived artifact of the parsing pipeline: the
//! numeric analysis columns paired with their headers, the file metadata,
//! and whatever raw text columns did not join the numeric set. Statistics
//! ([`crate::stats`]) and output ([`crate::output`]) consume it read-only.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use xvg_rs::XvgDataset;
//!
//! let dataset = XvgDataset::open("energy.xvg")?;
//! println!("{} rows, {} series", dataset.row_count(), dataset.heads().len() - 1);
//!
//! let report = xvg_rs::stats::average(&dataset, None, None)?;
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, XvgError};
use crate::parse::{classify, headers, LineKind, RawColumns, SeriesMetadata};

/// Parsed and reconciled form of one XVG file
///
/// Invariants, established at construction and never mutated afterward:
///
/// - every numeric column holds exactly `row_count` values
/// - `heads.len() == columns.len()`, index-paired
/// - `columns[0]` is the x-axis column
#[derive(Debug, Clone)]
pub struct XvgDataset {
    source: PathBuf,
    metadata: SeriesMetadata,
    heads: Vec<String>,
    columns: Vec<Vec<f64>>,
    /// Raw text columns beyond the numeric set, for CSV fallback output
    extra_text_columns: Vec<Vec<String>>,
    raw_column_count: usize,
    row_count: usize,
    warnings: Vec<String>,
}

impl XvgDataset {
    /// Read and parse an XVG file
    ///
    /// The whole file is loaded before any analysis; there is no streaming
    /// mode.
    ///
    /// # Errors
    ///
    /// - [`XvgError::FileNotFound`] if `path` does not exist
    /// - [`XvgError::BadExtension`] if `path` does not end in `.xvg`
    /// - any parse error from [`XvgDataset::parse_str`]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(XvgError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        if path.extension().and_then(|e| e.to_str()) != Some("xvg") {
            return Err(XvgError::BadExtension {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        Self::parse_str(path, &content)
    }

    /// Parse XVG content that is already in memory
    ///
    /// `source` names the origin for error messages and CSV metadata; no
    /// filesystem access happens here. Mainly useful for tests and for
    /// embedding the parser behind other transports.
    pub fn parse_str(source: impl AsRef<Path>, content: &str) -> Result<Self> {
        let source = source.as_ref().to_path_buf();
        let source_name = source.display().to_string();

        let mut metadata = SeriesMetadata::default();
        let mut raw = RawColumns::new();

        for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
            match classify(line) {
                LineKind::Comment => {}
                LineKind::Data => raw.ingest(&source_name, line)?,
                kind => metadata.record(kind, line),
            }
        }
        raw.finish()?;

        let reconciled = headers::reconcile(&metadata, &raw)?;
        let extra_text_columns = raw.text_columns_from(reconciled.columns.len());

        log::debug!(
            "parsed {}: {} rows, {} raw columns, {} analysis columns",
            source_name,
            raw.row_count(),
            raw.column_count(),
            reconciled.columns.len()
        );

        Ok(Self {
            source,
            metadata,
            heads: reconciled.heads,
            columns: reconciled.columns,
            extra_text_columns,
            raw_column_count: raw.column_count(),
            row_count: raw.row_count(),
            warnings: reconciled.warnings,
        })
    }

    // ======================================= accessors =======================================

    /// Path (or synthetic name) this dataset was parsed from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Title, axis labels and legends as declared in the file
    pub fn metadata(&self) -> &SeriesMetadata {
        &self.metadata
    }

    /// Final column headers; `heads()[0]` names the x-axis column
    pub fn heads(&self) -> &[String] {
        &self.heads
    }

    /// Numeric analysis columns; `columns()[0]` is the x-axis column
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    /// The x-axis column
    pub fn x_column(&self) -> &[f64] {
        &self.columns[0]
    }

    /// Raw text columns that did not join the numeric analysis set
    pub fn extra_text_columns(&self) -> &[Vec<String>] {
        &self.extra_text_columns
    }

    /// Number of data rows in the file
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of whitespace-delimited columns in the raw file
    pub fn raw_column_count(&self) -> usize {
        self.raw_column_count
    }

    /// Non-fatal problems encountered during parsing (header pairing)
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ENERGY_XVG: &str = "\
# gmx energy output
@    title \"GROMACS Energies\"
@    xaxis  label \"Time (ps)\"
@    yaxis  label \"(kJ/mol), (K)\"
@ TYPE xy
@ s0 legend \"Potential\"
@ s1 legend \"Temperature\"
0.0  -1000.0  300.0
1.0  -1001.5  301.5
2.0   -999.0  299.5
";

    #[test]
    fn test_parse_full_file() {
        let ds = XvgDataset::parse_str("energy.xvg", ENERGY_XVG).unwrap();
        assert_eq!(ds.row_count(), 3);
        assert_eq!(ds.raw_column_count(), 3);
        assert_eq!(ds.metadata().title, "GROMACS Energies");
        assert_eq!(
            ds.heads(),
            &["Time (ps)", "Potential (kJ/mol)", "Temperature (K)"]
        );
        assert_eq!(ds.x_column(), &[0.0, 1.0, 2.0]);
        assert_eq!(ds.columns()[1], vec![-1000.0, -1001.5, -999.0]);
        assert!(ds.extra_text_columns().is_empty());
        assert!(ds.warnings().is_empty());
    }

    #[test]
    fn test_row_count_excludes_comments_and_metadata() {
        let ds = XvgDataset::parse_str("t.xvg", "# c\n@ TYPE xy\n1 2\n\n3 4\n& end\n");
        // "& end" is a comment; blank lines are filtered
        let ds = ds.unwrap();
        assert_eq!(ds.row_count(), 2);
    }

    #[test]
    fn test_extra_columns_stay_as_text() {
        // Two legends, four raw columns: column 3 is left out of the numeric set
        let content = "\
@ xaxis label \"Time (ps)\"
@ yaxis label \"nm\"
@ s0 legend \"a\"
@ s1 legend \"b\"
0 1 2 extra0
1 2 3 extra1
";
        let ds = XvgDataset::parse_str("t.xvg", content).unwrap();
        assert_eq!(ds.heads().len(), 3);
        assert_eq!(ds.extra_text_columns().len(), 1);
        assert_eq!(ds.extra_text_columns()[0], vec!["extra0", "extra1"]);
    }

    #[test]
    fn test_mismatched_row_fails_without_partial_dataset() {
        let content = "1 2\n3 4\n5 6 7\n";
        match XvgDataset::parse_str("t.xvg", content) {
            Err(XvgError::ColumnCountMismatch { line, .. }) => assert_eq!(line, "5 6 7"),
            other => panic!("expected ColumnCountMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_file_is_structural() {
        assert!(matches!(
            XvgDataset::parse_str("t.xvg", "# only comments\n"),
            Err(XvgError::Structural(_))
        ));
    }

    #[test]
    fn test_open_rejects_missing_and_misnamed_files() {
        assert!(matches!(
            XvgDataset::open("/definitely/not/there.xvg"),
            Err(XvgError::FileNotFound { .. })
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.txt");
        std::fs::write(&path, "1 2\n").unwrap();
        assert!(matches!(
            XvgDataset::open(&path),
            Err(XvgError::BadExtension { .. })
        ));
    }
}

//! Column-major assembly of XVG data rows
//!
//! Data rows are accumulated as text tokens; conversion to `f64` happens
//! only when the header reconciler decides which columns join the numeric
//! analysis set.

use crate::error::{Result, XvgError};

/// Raw column-major token matrix built from the data rows of one file
///
/// The column count is fixed by the first data row; every subsequent row
/// must match it exactly. Tokens stay as text until
/// [`RawColumns::parse_column`] converts a column to floats.
#[derive(Debug, Clone, Default)]
pub struct RawColumns {
    columns: Vec<Vec<String>>,
    row_count: usize,
}

impl RawColumns {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize one data line on whitespace and append it
    ///
    /// On the first data row this fixes the column count and initializes
    /// that many empty columns.
    ///
    /// # Errors
    ///
    /// [`XvgError::ColumnCountMismatch`] (reporting the offending line) if
    /// the token count disagrees with the established column count.
    pub fn ingest(&mut self, source_name: &str, line: &str) -> Result<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if self.columns.is_empty() {
            self.columns = vec![Vec::new(); tokens.len()];
        }
        if tokens.len() != self.columns.len() {
            return Err(XvgError::ColumnCountMismatch {
                source_name: source_name.to_string(),
                line: line.to_string(),
            });
        }
        for (column, token) in self.columns.iter_mut().zip(tokens) {
            column.push(token.to_string());
        }
        self.row_count += 1;
        Ok(())
    }

    /// Post-parse validation
    ///
    /// # Errors
    ///
    /// [`XvgError::Structural`] if any column's length differs from the row
    /// count, or if no data line was seen at all (empty file after
    /// filtering).
    pub fn finish(&self) -> Result<()> {
        for (i, column) in self.columns.iter().enumerate() {
            if column.len() != self.row_count {
                return Err(XvgError::Structural(format!(
                    "length of column {} is not equal to the count of rows",
                    i
                )));
            }
        }
        if self.columns.is_empty() || self.row_count == 0 {
            return Err(XvgError::Structural(
                "no data line detected in xvg file".to_string(),
            ));
        }
        Ok(())
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Raw text tokens of column `index`
    pub fn column(&self, index: usize) -> &[String] {
        &self.columns[index]
    }

    /// Convert column `index` to floats
    ///
    /// # Errors
    ///
    /// [`XvgError::Structural`] naming the offending token if it does not
    /// parse as `f64`.
    pub fn parse_column(&self, index: usize) -> Result<Vec<f64>> {
        self.columns[index]
            .iter()
            .map(|token| {
                token.parse::<f64>().map_err(|_| {
                    XvgError::Structural(format!(
                        "column {} contains a non-numeric value: {}",
                        index, token
                    ))
                })
            })
            .collect()
    }

    /// Clone the raw text columns in `range` (used for CSV fallback output)
    pub fn text_columns_from(&self, start: usize) -> Vec<Vec<String>> {
        self.columns.get(start..).unwrap_or(&[]).to_vec()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_fixes_column_count() {
        let mut raw = RawColumns::new();
        raw.ingest("test.xvg", "0.0 1.0 2.0").unwrap();
        assert_eq!(raw.column_count(), 3);
        raw.ingest("test.xvg", "0.1 1.1 2.1").unwrap();
        assert_eq!(raw.row_count(), 2);
        assert!(raw.finish().is_ok());
    }

    #[test]
    fn test_width_mismatch_reports_offending_line() {
        let mut raw = RawColumns::new();
        raw.ingest("test.xvg", "0.0 1.0").unwrap();
        let err = raw.ingest("test.xvg", "0.1 1.1 2.1").unwrap_err();
        match err {
            XvgError::ColumnCountMismatch { line, .. } => {
                assert_eq!(line, "0.1 1.1 2.1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_is_structural() {
        let raw = RawColumns::new();
        assert!(matches!(raw.finish(), Err(XvgError::Structural(_))));
    }

    #[test]
    fn test_parse_column() {
        let mut raw = RawColumns::new();
        raw.ingest("test.xvg", "0.0 -1.5").unwrap();
        raw.ingest("test.xvg", "0.5 2.25").unwrap();
        assert_eq!(raw.parse_column(1).unwrap(), vec![-1.5, 2.25]);
    }

    #[test]
    fn test_parse_column_rejects_text() {
        let mut raw = RawColumns::new();
        raw.ingest("test.xvg", "0.0 abc").unwrap();
        assert!(matches!(raw.parse_column(1), Err(XvgError::Structural(_))));
    }
}

//! Header reconciliation — pairing y-axis label text with legend entries
//!
//! GROMACS writes the units of multi-series files into the y-axis label
//! (for example `@ yaxis label "(kJ/mol), (K)"` next to two legends), so
//! the final column headers are derived by pairing label fragments with
//! legend strings. The pairing is heuristic and covers three cases:
//!
//! 1. Comma-split label pieces match the legend count → one piece appended
//!    to each legend.
//! 2. A single piece shorter than 5 characters (a bare unit such as `nm`)
//!    → appended to every legend.
//! 3. Anything else → legends kept unmodified and a warning recorded.

use crate::error::{Result, XvgError};
use crate::parse::{RawColumns, SeriesMetadata};

/// Outcome of header reconciliation
///
/// `heads` and `columns` are index-paired; `columns[0]` is always the
/// x-axis column. Raw columns not consumed into the numeric set remain
/// available from [`RawColumns`] for text fallback output.
#[derive(Debug, Clone)]
pub struct ReconciledColumns {
    /// Final human-readable column headers
    pub heads: Vec<String>,

    /// Numeric analysis columns, one per header
    pub columns: Vec<Vec<f64>>,

    /// Non-fatal pairing problems, in encounter order
    pub warnings: Vec<String>,
}

/// Derive the final `(headers, columns)` pairing
///
/// Rules, applied in order:
///
/// 1. Column 0 is always included, headed by the x-axis label.
/// 2. No legends and ≥2 raw columns → column 1 joins, headed by the y-axis
///    label.
/// 3. Legends declared and more raw columns than legends → legends are
///    enriched from the y-axis label (see module doc) and raw columns
///    `1..=legends.len()` join, one per legend.
///
/// # Errors
///
/// - [`XvgError::Structural`] if the declared legend count exceeds the
///   number of raw data columns beyond column 0 — the file promises more
///   series than it delivers.
/// - [`XvgError::Structural`] if a consumed column fails float conversion.
pub fn reconcile(meta: &SeriesMetadata, raw: &RawColumns) -> Result<ReconciledColumns> {
    let mut heads = vec![meta.x_label.clone()];
    let mut columns = vec![raw.parse_column(0)?];
    let mut warnings = Vec::new();

    if meta.legends.is_empty() {
        if raw.column_count() > 1 {
            heads.push(meta.y_label.clone());
            columns.push(raw.parse_column(1)?);
        }
        return Ok(ReconciledColumns {
            heads,
            columns,
            warnings,
        });
    }

    if meta.legends.len() > raw.column_count() - 1 {
        return Err(XvgError::Structural(format!(
            "{} legends declared but only {} data columns available",
            meta.legends.len(),
            raw.column_count() - 1
        )));
    }

    if raw.column_count() > meta.legends.len() {
        let pieces: Vec<&str> = meta.y_label.split(',').map(str::trim).collect();
        let mut legend_heads = meta.legends.clone();
        if pieces.len() == legend_heads.len() {
            for (head, piece) in legend_heads.iter_mut().zip(&pieces) {
                head.push(' ');
                head.push_str(piece);
            }
        } else if pieces.len() == 1 && pieces[0].len() < 5 {
            for head in legend_heads.iter_mut() {
                head.push(' ');
                head.push_str(pieces[0]);
            }
        } else {
            let warning =
                "failed to pair y-axis label with legends, using legends unmodified".to_string();
            log::warn!("{}", warning);
            warnings.push(warning);
        }

        for (i, head) in legend_heads.into_iter().enumerate() {
            heads.push(head);
            columns.push(raw.parse_column(i + 1)?);
        }
    }

    Ok(ReconciledColumns {
        heads,
        columns,
        warnings,
    })
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_with_columns(n: usize, rows: usize) -> RawColumns {
        let mut raw = RawColumns::new();
        for r in 0..rows {
            let line: Vec<String> = (0..n).map(|c| format!("{}.{}", r, c)).collect();
            raw.ingest("test.xvg", &line.join(" ")).unwrap();
        }
        raw
    }

    fn meta(y_label: &str, legends: &[&str]) -> SeriesMetadata {
        SeriesMetadata {
            title: String::new(),
            x_label: "Time (ps)".to_string(),
            y_label: y_label.to_string(),
            legends: legends.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_no_legends_single_extra_series() {
        let result = reconcile(&meta("(nm)", &[]), &raw_with_columns(2, 3)).unwrap();
        assert_eq!(result.heads, vec!["Time (ps)", "(nm)"]);
        assert_eq!(result.columns.len(), 2);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_no_legends_single_column_keeps_x_only() {
        let result = reconcile(&meta("(nm)", &[]), &raw_with_columns(1, 3)).unwrap();
        assert_eq!(result.heads.len(), 1);
        assert_eq!(result.columns.len(), 1);
    }

    #[test]
    fn test_comma_pieces_match_legend_count() {
        let result = reconcile(&meta("A, B", &["s1", "s2"]), &raw_with_columns(3, 2)).unwrap();
        assert_eq!(result.heads, vec!["Time (ps)", "s1 A", "s2 B"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_short_single_piece_appended_to_all() {
        let result = reconcile(&meta("nm", &["s1", "s2"]), &raw_with_columns(3, 2)).unwrap();
        assert_eq!(result.heads, vec!["Time (ps)", "s1 nm", "s2 nm"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_unpairable_label_warns_and_keeps_legends() {
        let result = reconcile(
            &meta("Energy Components", &["s1", "s2"]),
            &raw_with_columns(3, 2),
        )
        .unwrap();
        assert_eq!(result.heads, vec!["Time (ps)", "s1", "s2"]);
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_more_legends_than_columns_fails() {
        let err = reconcile(&meta("nm", &["s1", "s2", "s3"]), &raw_with_columns(3, 2));
        assert!(matches!(err, Err(XvgError::Structural(_))));
    }
}

//! Per-column mean and standard deviation over an index range

use crate::error::{Result, XvgError};
use crate::XvgDataset;

use super::{mean, population_std};

/// Mean and population standard deviation of every analysis column
///
/// Index-paired with the dataset's heads; `means[0]`/`std_devs[0]` describe
/// the x-axis column.
#[derive(Debug, Clone)]
pub struct ColumnAverages {
    pub heads: Vec<String>,
    pub means: Vec<f64>,
    pub std_devs: Vec<f64>,
}

/// Compute per-column averages over the half-open row range `[start, end)`
///
/// `None` bounds default to the full column: `average(&ds, None, None)`
/// averages every row.
///
/// # Errors
///
/// [`XvgError::InvalidRange`] if `start >= end` when both are given, or if
/// either bound is `>= row_count`.
///
/// # Example
///
/// ```rust,ignore
/// let report = stats::average(&ds, Some(500), Some(1500))?;
/// for ((head, mean), std) in report.heads.iter().zip(&report.means).zip(&report.std_devs) {
///     println!("{head:>20} {mean:.3} ± {std:.3}");
/// }
/// ```
pub fn average(
    dataset: &XvgDataset,
    start: Option<usize>,
    end: Option<usize>,
) -> Result<ColumnAverages> {
    let rows = dataset.row_count();
    if let (Some(s), Some(e)) = (start, end) {
        if s >= e {
            return Err(XvgError::InvalidRange(format!(
                "start index {} should be less than end index {}",
                s, e
            )));
        }
    }
    if start.is_some_and(|s| s >= rows) || end.is_some_and(|e| e >= rows) {
        return Err(XvgError::InvalidRange(format!(
            "start or end index should be less than the number of rows ({})",
            rows
        )));
    }

    let lo = start.unwrap_or(0);
    let hi = end.unwrap_or(rows);

    let mut means = Vec::with_capacity(dataset.columns().len());
    let mut std_devs = Vec::with_capacity(dataset.columns().len());
    for column in dataset.columns() {
        let slice = &column[lo..hi];
        let m = mean(slice);
        means.push(m);
        std_devs.push(population_std(slice, m));
    }

    Ok(ColumnAverages {
        heads: dataset.heads().to_vec(),
        means,
        std_devs,
    })
}

// =================================================================================================
// Tests
// =================================================================================================

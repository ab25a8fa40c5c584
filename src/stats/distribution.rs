//! Equal-width frequency-distribution binning

use crate::error::{Result, XvgError};
use crate::XvgDataset;

/// Binned value distribution of every analysis column
///
/// For column `c`, `bin_edges[c]` holds the left edge of each bucket and
/// `frequencies[c]` the percentage of rows falling into it. Frequencies sum
/// to 100 (within floating tolerance), and the two vectors always have the
/// same length: `bins` buckets, or a single bucket for a constant-valued
/// column.
#[derive(Debug, Clone)]
pub struct Distribution {
    pub heads: Vec<String>,
    pub bin_edges: Vec<Vec<f64>>,
    pub frequencies: Vec<Vec<f64>>,
}

/// Bin every analysis column into `bins` equal-width buckets
///
/// Bucket index for a value `v` is `floor((v - min) / bin_width)`; the
/// column maximum lands exactly on the right edge and is clamped into the
/// last bucket. A column without fluctuation (`max == min`) yields a single
/// bucket at the constant value with frequency 100.
///
/// # Errors
///
/// - [`XvgError::InvalidParameter`] if `bins == 0`
/// - [`XvgError::Consistency`] if the summed raw counts disagree with the
///   row count — a defect in the clamping logic, not a data problem
pub fn distribution(dataset: &XvgDataset, bins: usize) -> Result<Distribution> {
    if bins == 0 {
        return Err(XvgError::InvalidParameter(
            "bin count should be positive".to_string(),
        ));
    }

    let rows = dataset.row_count();
    let mut bin_edges = Vec::with_capacity(dataset.columns().len());
    let mut frequencies = Vec::with_capacity(dataset.columns().len());

    for column in dataset.columns() {
        let min = column.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = column.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let bin_width = (max - min) / bins as f64;

        if bin_width == 0.0 {
            // No fluctuation: everything sits in one bucket at the value
            bin_edges.push(vec![min]);
            frequencies.push(vec![100.0]);
            continue;
        }

        let mut counts = vec![0usize; bins];
        for &value in column {
            let mut index = ((value - min) / bin_width) as usize;
            if index == bins {
                // The maximum lands on the right edge of the last bucket
                index = bins - 1;
            }
            counts[index] += 1;
        }

        if counts.iter().sum::<usize>() != rows {
            return Err(XvgError::Consistency(format!(
                "distribution counts for column '{}' do not sum to the row count",
                dataset.heads()[bin_edges.len()]
            )));
        }

        bin_edges.push((0..bins).map(|b| min + bin_width * b as f64).collect());
        frequencies.push(
            counts
                .into_iter()
                .map(|c| c as f64 * 100.0 / rows as f64)
                .collect(),
        );
    }

    Ok(Distribution {
        heads: dataset.heads().to_vec(),
        bin_edges,
        frequencies,
    })
}

// =================================================================================================
// Tests
// =================================================================================================

//! Descriptive statistics over analyzed XVG columns
//!
//! # Architecture
//!
//! Every transform takes a read-only [`crate::XvgDataset`] and returns an
//! owned result; nothing is cached on the dataset. All transforms operate
//! on every analysis column, including column 0 (the x axis), exactly as
//! the heads are ordered.
//!
//! ```text
//! stats/
//! ├── mod.rs          ← This file
//! ├── average.rs      ← mean / population std over an index range
//! ├── moving.rs       ← trailing-window moving average + confidence band
//! └── distribution.rs ← equal-width frequency binning
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use xvg_rs::{stats, XvgDataset};
//!
//! let ds = XvgDataset::open("energy.xvg")?;
//!
//! let avg = stats::average(&ds, None, None)?;
//! let mv = stats::moving_average(&ds, 10, 0.95)?;
//! let dist = stats::distribution(&ds, 100)?;
//! ```

pub mod average;
pub mod distribution;
pub mod moving;

pub use average::{average, ColumnAverages};
pub use distribution::{distribution, Distribution};
pub use moving::{moving_average, MovingAverage};

/// Arithmetic mean of a slice
///
/// Callers guarantee a non-empty slice; an empty slice yields NaN.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation of a slice (divisor `n`, not `n - 1`)
pub(crate) fn population_std(values: &[f64], mean: f64) -> f64 {
    let variance = values
        .iter()
        .map(|v| {
            let diff = v - mean;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_population_std() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let m = mean(&values);
        assert!((m - 5.0).abs() < 1e-12);
        // Classic population-std example: sigma = 2
        assert!((population_std(&values, m) - 2.0).abs() < 1e-12);
    }
}

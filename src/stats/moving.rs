//! Trailing-window moving average with a normal confidence band

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{Result, XvgError};
use crate::XvgDataset;

use super::{mean, population_std};

/// Moving average and confidence bounds for every analysis column
///
/// `averages[c]`, `lows[c]` and `highs[c]` all have `row_count` entries for
/// column `c`; the first `windowsize` entries of each are `f64::NAN` — no
/// full window of history exists there, and the sentinel keeps them
/// distinguishable from a computed zero.
#[derive(Debug, Clone)]
pub struct MovingAverage {
    pub heads: Vec<String>,
    pub windowsize: usize,
    pub averages: Vec<Vec<f64>>,
    pub lows: Vec<Vec<f64>>,
    pub highs: Vec<Vec<f64>>,
}

/// Compute the trailing moving average of every analysis column
///
/// At row `i` (for `i >= windowsize`) the window is the half-open slice
/// `[i - windowsize, i)` — the `windowsize` rows before `i`, not including
/// row `i` itself. The confidence bounds assume the window values are
/// normally distributed with the window's mean and population standard
/// deviation; a zero-variance window collapses the band onto the mean.
///
/// # Errors
///
/// [`XvgError::InvalidParameter`] unless `0 < windowsize <= row_count / 2`
/// and `0 < confidence < 1`.
pub fn moving_average(
    dataset: &XvgDataset,
    windowsize: usize,
    confidence: f64,
) -> Result<MovingAverage> {
    let rows = dataset.row_count();
    if windowsize == 0 || windowsize > rows / 2 {
        return Err(XvgError::InvalidParameter(format!(
            "windowsize {} is not in (0, {}]",
            windowsize,
            rows / 2
        )));
    }
    if confidence <= 0.0 || confidence >= 1.0 {
        return Err(XvgError::InvalidParameter(format!(
            "confidence {} should be in (0, 1)",
            confidence
        )));
    }

    let alpha = 1.0 - confidence;
    let mut averages = Vec::with_capacity(dataset.columns().len());
    let mut lows = Vec::with_capacity(dataset.columns().len());
    let mut highs = Vec::with_capacity(dataset.columns().len());

    for column in dataset.columns() {
        let mut ave = vec![f64::NAN; windowsize];
        let mut low = vec![f64::NAN; windowsize];
        let mut high = vec![f64::NAN; windowsize];

        for i in windowsize..rows {
            let window = &column[i - windowsize..i];
            let m = mean(window);
            let s = population_std(window, m);
            let (lo, hi) = normal_interval(m, s, alpha)?;
            ave.push(m);
            low.push(lo);
            high.push(hi);
        }

        averages.push(ave);
        lows.push(low);
        highs.push(high);
    }

    Ok(MovingAverage {
        heads: dataset.heads().to_vec(),
        windowsize,
        averages,
        lows,
        highs,
    })
}

/// Two-sided interval of a normal distribution at significance `alpha`
///
/// A zero standard deviation degenerates to `(mean, mean)`.
fn normal_interval(mean: f64, std_dev: f64, alpha: f64) -> Result<(f64, f64)> {
    if std_dev == 0.0 {
        return Ok((mean, mean));
    }
    let normal = Normal::new(mean, std_dev).map_err(|e| {
        XvgError::Consistency(format!(
            "normal distribution with mean {} and std {} rejected: {}",
            mean, std_dev, e
        ))
    })?;
    Ok((
        normal.inverse_cdf(alpha / 2.0),
        normal.inverse_cdf(1.0 - alpha / 2.0),
    ))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset_1_to_6() -> XvgDataset {
        XvgDataset::parse_str(
            "t.xvg",
            "@ xaxis label \"t\"\n@ yaxis label \"v\"\n0 1\n1 2\n2 3\n3 4\n4 5\n5 6\n",
        )
        .unwrap()
    }

    #[test]
    fn test_prefix_is_nan_and_lengths_match() {
        let ds = dataset_1_to_6();
        let mv = moving_average(&ds, 2, 0.95).unwrap();
        for c in 0..ds.columns().len() {
            assert_eq!(mv.averages[c].len(), ds.row_count());
            assert!(mv.averages[c][0].is_nan());
            assert!(mv.averages[c][1].is_nan());
            assert!(mv.lows[c][1].is_nan());
            assert!(mv.highs[c][1].is_nan());
            assert!(!mv.averages[c][2].is_nan());
        }
    }

    #[test]
    fn test_window_excludes_current_row() {
        let mv = moving_average(&dataset_1_to_6(), 2, 0.95).unwrap();
        // Value column at row 2 sees the window [1, 2]
        assert!((mv.averages[1][2] - 1.5).abs() < 1e-12);
        // At the last row it sees [4, 5]
        assert!((mv.averages[1][5] - 4.5).abs() < 1e-12);
    }

    #[test]
    fn test_interval_is_symmetric_about_the_mean() {
        let mv = moving_average(&dataset_1_to_6(), 2, 0.90).unwrap();
        for i in 2..6 {
            let m = mv.averages[1][i];
            let lo = mv.lows[1][i];
            let hi = mv.highs[1][i];
            assert!(lo < m && m < hi);
            assert!(((m - lo) - (hi - m)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_constant_window_collapses_the_band() {
        let ds = XvgDataset::parse_str(
            "t.xvg",
            "@ xaxis label \"t\"\n@ yaxis label \"v\"\n0 5\n1 5\n2 5\n3 5\n",
        )
        .unwrap();
        let mv = moving_average(&ds, 2, 0.95).unwrap();
        assert!((mv.lows[1][2] - 5.0).abs() < 1e-12);
        assert!((mv.highs[1][2] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_parameter_validation() {
        let ds = dataset_1_to_6();
        assert!(matches!(
            moving_average(&ds, 0, 0.95),
            Err(XvgError::InvalidParameter(_))
        ));
        // 6 rows: windowsize must not exceed 3
        assert!(matches!(
            moving_average(&ds, 4, 0.95),
            Err(XvgError::InvalidParameter(_))
        ));
        assert!(matches!(
            moving_average(&ds, 2, 1.0),
            Err(XvgError::InvalidParameter(_))
        ));
        assert!(matches!(
            moving_average(&ds, 2, 0.0),
            Err(XvgError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_ninety_five_percent_interval_width() {
        // Window [1, 2]: mean 1.5, population std 0.5.
        // The 95% two-sided normal interval is mean ± 1.95996 * std.
        let mv = moving_average(&dataset_1_to_6(), 2, 0.95).unwrap();
        let half_width = mv.highs[1][2] - mv.averages[1][2];
        assert!((half_width - 1.959963985 * 0.5).abs() < 1e-6);
    }
}

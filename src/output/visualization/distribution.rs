//! Distribution plot — per-column frequency polygons in a subplot grid

use plotters::prelude::*;
use std::error::Error;

use crate::stats;
use crate::XvgDataset;

use super::config::{PlotConfig, NO_TITLE};
use super::padded_range;

/// Plot the value distribution of every analysis column
///
/// Computes [`crate::stats::distribution`] with `bins` buckets and draws
/// one frequency polygon per column, laid out on a two-row subplot grid.
/// The y axis of every cell is "Frequency %".
///
/// # Arguments
///
/// * `dataset`     — Parsed dataset
/// * `bins`        — Number of equal-width buckets per column
/// * `output_path` — Output file path (`.png` or `.svg`)
/// * `config`      — Optional plot configuration
///
/// # Errors
///
/// Returns `Err` on invalid `bins` (zero) or if the backend cannot write
/// to `output_path`.
pub fn plot_distribution(
    dataset: &XvgDataset,
    bins: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let dist = stats::distribution(dataset, bins)?;

    let default_config = PlotConfig::distribution(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_distribution_impl(backend, &dist, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_distribution_impl(backend, &dist, config)
        }
    }
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

/// Render one frequency polygon per column on a 2-row grid
fn plot_distribution_impl<DB: DrawingBackend>(
    backend: DB,
    dist: &stats::Distribution,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let column_num = dist.frequencies.len();
    let grid_cols = (column_num + 1) / 2;
    let cells = root.split_evenly((2, grid_cols.max(1)));

    for (i, cell) in cells.iter().enumerate().take(column_num) {
        let edges = &dist.bin_edges[i];
        let freqs = &dist.frequencies[i];

        let first = edges.first().copied().unwrap_or(0.0);
        let last = edges.last().copied().unwrap_or(first);
        let (x_lo, x_hi) = padded_range(first, last);
        let max_freq = freqs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let (y_lo, y_hi) = (0.0, (max_freq * 1.1).max(1.0));

        let color = config.series_color(i);
        let mut chart = ChartBuilder::on(cell)
            .caption(&dist.heads[i], ("sans-serif", 20).into_font())
            .margin(10)
            .x_label_area_size(35)
            .y_label_area_size(45)
            .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

        if config.show_grid {
            chart
                .configure_mesh()
                .x_desc(&dist.heads[i])
                .y_desc(&config.ylabel)
                .draw()?;
        }

        chart.draw_series(LineSeries::new(
            edges.iter().zip(freqs.iter()).map(|(x, y)| (*x, *y)),
            ShapeStyle::from(&color).stroke_width(config.line_width),
        ))?;
    }

    root.present()?;
    Ok(())
}

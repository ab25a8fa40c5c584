//! Stacked-area plot of a range of data series
//!
//! Each series in the range is drawn as a band sitting on top of the
//! previous ones, so the outer envelope is the running total. Useful for
//! energy-component files where the series decompose a whole.

use plotters::prelude::*;
use std::error::Error;

use crate::XvgDataset;

use super::config::{PlotConfig, NO_TITLE};
use super::{finite_min_max, padded_range};

/// Plot analysis columns `[start, end)` as stacked areas
///
/// `start` defaults to the first data series when out of range, and `end`
/// (`None`, or an out-of-range/unordered value) defaults to the last
/// column; both fallbacks log a warning instead of failing, matching how
/// the rest of the toolkit treats presentation-only parameters.
///
/// Bands are rendered as cumulative sums from the full total downward, so
/// the band visible for series `k` is the slice between the partial sums
/// up to `k - 1` and up to `k`.
///
/// # Arguments
///
/// * `dataset`     — Parsed dataset; needs at least one data series
/// * `start`       — First analysis-column index in the stack (≥ 1)
/// * `end`         — One past the last column index, `None` for all
/// * `output_path` — Output file path (`.png` or `.svg`)
/// * `config`      — Optional plot configuration
///
/// # Errors
///
/// Returns `Err` if the dataset has no data series or the backend fails.
pub fn plot_stacked(
    dataset: &XvgDataset,
    start: usize,
    end: Option<usize>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let column_num = dataset.columns().len();
    if column_num < 2 {
        return Err("no data series to stack beyond the x column".into());
    }

    let start = if start == 0 || start >= column_num {
        log::warn!("stack start index {} not in proper range, using first data series", start);
        1
    } else {
        start
    };
    let end = match end {
        None => column_num,
        Some(e) if e <= start || e > column_num => {
            log::warn!("stack end index {} not in proper range, using last column", e);
            column_num
        }
        Some(e) => e,
    };

    let default_config = PlotConfig::stacked(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    // Cumulative sums per row: stacks[j] = sum of series start..=(start + j)
    let rows = dataset.row_count();
    let mut stacks: Vec<Vec<f64>> = Vec::with_capacity(end - start);
    let mut running = vec![0.0; rows];
    for column in &dataset.columns()[start..end] {
        for (acc, v) in running.iter_mut().zip(column.iter()) {
            *acc += v;
        }
        stacks.push(running.clone());
    }

    let (x_min, x_max) = finite_min_max(dataset.x_column().iter());
    let (stack_min, stack_max) = finite_min_max(stacks.iter().flat_map(|s| s.iter()));
    // The baseline at zero is always part of the picture
    let y_min = stack_min.min(0.0);
    let y_max = stack_max.max(0.0);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_stacked_impl(
                backend, dataset, &stacks, start, config, (x_min, x_max), (y_min, y_max),
            )
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_stacked_impl(
                backend, dataset, &stacks, start, config, (x_min, x_max), (y_min, y_max),
            )
        }
    }
}

// =================================================================================================
// Private Plot Implementation
// =================================================================================================

/// Render the cumulative bands, outermost first so inner bands overdraw
fn plot_stacked_impl<DB: DrawingBackend>(
    backend: DB,
    dataset: &XvgDataset,
    stacks: &[Vec<f64>],
    start: usize,
    config: &PlotConfig,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let title = if config.title.is_empty() {
        &dataset.metadata().title
    } else {
        &config.title
    };
    let ylabel = if config.ylabel.is_empty() {
        &dataset.metadata().y_label
    } else {
        &config.ylabel
    };

    let (x_lo, x_hi) = padded_range(x_range.0, x_range.1);
    let (y_lo, y_hi) = padded_range(y_range.0, y_range.1);

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, y_lo..y_hi)?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&dataset.heads()[0])
            .y_desc(ylabel)
            .draw()?;
    }

    let x = dataset.x_column();
    for (j, stack) in stacks.iter().enumerate().rev() {
        let color = config.series_color(j);
        chart
            .draw_series(AreaSeries::new(
                x.iter().zip(stack.iter()).map(|(x, y)| (*x, *y)),
                0.0,
                color.mix(0.6),
            ))?
            .label(&dataset.heads()[start + j])
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

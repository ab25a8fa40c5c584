//! Line plots — data series against the x column

use plotters::prelude::*;
use std::error::Error;

use crate::stats::MovingAverage;
use crate::XvgDataset;

use super::config::{PlotConfig, NO_TITLE};
use super::{finite_min_max, padded_range};

/// Plot every analyzed data series against the x column
///
/// One colored line per series, labeled with the series head. The backend
/// is chosen from the output extension: `.svg` → vector, anything else →
/// bitmap.
///
/// # Arguments
///
/// * `dataset`     — Parsed dataset; needs at least one data series
/// * `output_path` — Output file path (`.png` or `.svg`)
/// * `config`      — Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the dataset has no data series beyond the x column or
/// the backend cannot write to `output_path`.
///
/// # Example
///
/// ```rust,ignore
/// use xvg_rs::output::visualization::plot_lines;
///
/// let dataset = XvgDataset::open("energy.xvg")?;
/// plot_lines(&dataset, "energy.png", None)?;
/// ```
pub fn plot_lines(
    dataset: &XvgDataset,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if dataset.columns().len() < 2 {
        return Err("no data series to plot beyond the x column".into());
    }

    let default_config = PlotConfig::lines(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let (x_min, x_max) = finite_min_max(dataset.x_column().iter());
    let (y_min, y_max) = finite_min_max(
        dataset.columns()[1..]
            .iter()
            .flat_map(|column| column.iter()),
    );

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_lines_impl(backend, dataset, config, (x_min, x_max), (y_min, y_max))
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_lines_impl(backend, dataset, config, (x_min, x_max), (y_min, y_max))
        }
    }
}

/// Plot one series with its moving average and confidence band
///
/// Draws four lines: the raw series, the moving average, and the low/high
/// confidence bounds. The NaN prefix of the moving-average vectors (rows
/// without a full window) is simply not drawn.
///
/// # Arguments
///
/// * `dataset`      — Parsed dataset the moving average was computed from
/// * `mv`           — Result of [`crate::stats::moving_average`]
/// * `series_index` — Analysis-column index to draw (1 = first data series)
/// * `output_path`  — Output file path (`.png` or `.svg`)
/// * `config`       — Optional plot configuration
///
/// # Errors
///
/// Returns `Err` if `series_index` is 0 or out of range, or the backend
/// fails.
pub fn plot_moving_average(
    dataset: &XvgDataset,
    mv: &MovingAverage,
    series_index: usize,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if series_index == 0 || series_index >= dataset.columns().len() {
        return Err(format!(
            "series index {} is not a data series (1..{})",
            series_index,
            dataset.columns().len()
        )
        .into());
    }

    let default_config = PlotConfig::lines(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let (x_min, x_max) = finite_min_max(dataset.x_column().iter());
    let raw = &dataset.columns()[series_index];
    let (y_min, y_max) = finite_min_max(
        raw.iter()
            .chain(mv.lows[series_index].iter())
            .chain(mv.highs[series_index].iter()),
    );

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_moving_average_impl(
                backend, dataset, mv, series_index, config, (x_min, x_max), (y_min, y_max),
            )
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_moving_average_impl(
                backend, dataset, mv, series_index, config, (x_min, x_max), (y_min, y_max),
            )
        }
    }
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

/// Render all data series with the given drawing backend
fn plot_lines_impl<DB: DrawingBackend>(
    backend: DB,
    dataset: &XvgDataset,
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
    let xlabel = if config.xlabel.is_empty() {
        &dataset.heads()[0]
    } else {
        &config.xlabel
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
            .x_desc(xlabel)
            .y_desc(ylabel)
            .draw()?;
    }

    for (k, column) in dataset.columns().iter().enumerate().skip(1) {
        let color = config.series_color(k - 1);
        chart
            .draw_series(LineSeries::new(
                dataset.x_column().iter().zip(column.iter()).map(|(x, y)| (*x, *y)),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(&dataset.heads()[k])
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

/// Render one series plus moving average and confidence bounds
fn plot_moving_average_impl<DB: DrawingBackend>(
    backend: DB,
    dataset: &XvgDataset,
    mv: &MovingAverage,
    series_index: usize,
    config: &PlotConfig,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let head = &dataset.heads()[series_index];
    let title = if config.title.is_empty() {
        head
    } else {
        &config.title
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
            .y_desc(head)
            .draw()?;
    }

    let x = dataset.x_column();
    let defined = |values: &[f64]| {
        x.iter()
            .zip(values.iter())
            .filter(|(_, v)| v.is_finite())
            .map(|(x, v)| (*x, *v))
            .collect::<Vec<_>>()
    };

    let raw_color = config.series_color(0);
    chart
        .draw_series(LineSeries::new(
            defined(&dataset.columns()[series_index]),
            ShapeStyle::from(&raw_color).stroke_width(1),
        ))?
        .label(head.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], raw_color));

    let mv_color = config.series_color(1);
    chart
        .draw_series(LineSeries::new(
            defined(&mv.averages[series_index]),
            ShapeStyle::from(&mv_color).stroke_width(config.line_width),
        ))?
        .label(format!("moving average ({})", mv.windowsize))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], mv_color));

    let band_color = config.series_color(2);
    for bound in [&mv.lows[series_index], &mv.highs[series_index]] {
        chart.draw_series(LineSeries::new(
            defined(bound),
            ShapeStyle::from(&band_color).stroke_width(1),
        ))?;
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

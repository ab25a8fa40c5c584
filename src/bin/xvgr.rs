//! xvgr — command-line front end for the XVG analysis toolkit
//!
//! Thin wrapper: argument parsing, dispatch to the library, error-to-exit
//! mapping. All logic lives in `xvg_rs`.

use std::process::ExitCode;

use clap::Parser;
use log::error;

use xvg_rs::output::export::{CsvConfig, CsvExporter, Exporter};
use xvg_rs::output::visualization::{
    plot_distribution, plot_lines, plot_moving_average, plot_stacked,
};
use xvg_rs::{stats, XvgDataset};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Parse, analyse and plot GROMACS XVG output files"
)]
struct Args {
    /// Input .xvg file
    file: String,

    /// Write the parsed data to this .csv file
    #[arg(long)]
    csv: Option<String>,

    /// Prepend a commented metadata header to the CSV output
    #[arg(long, requires = "csv")]
    csv_metadata: bool,

    /// Render a line plot of all series to this .png/.svg file
    #[arg(long)]
    plot: Option<String>,

    /// Render a stacked-area plot to this .png/.svg file
    #[arg(long)]
    stacked: Option<String>,

    /// Render per-column distribution plots to this .png/.svg file
    #[arg(long)]
    distribution: Option<String>,

    /// Number of buckets for --distribution
    #[arg(long, default_value_t = 100)]
    bins: usize,

    /// Print per-column averages over rows [start, end)
    #[arg(long)]
    average: bool,

    /// Start row for --average
    #[arg(long)]
    start: Option<usize>,

    /// End row for --average
    #[arg(long)]
    end: Option<usize>,

    /// Render a moving-average plot of one series to this .png/.svg file
    #[arg(long)]
    mvave: Option<String>,

    /// Window size for --mvave
    #[arg(long, default_value_t = 50)]
    window: usize,

    /// Confidence level for --mvave, in (0, 1)
    #[arg(long, default_value_t = 0.95)]
    confidence: f64,

    /// Series index for --mvave (1 = first data series)
    #[arg(long, default_value_t = 1)]
    series: usize,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = XvgDataset::open(&args.file)?;
    println!(
        "read {}: {} rows, {} series",
        args.file,
        dataset.row_count(),
        dataset.heads().len().saturating_sub(1)
    );
    for warning in dataset.warnings() {
        println!("warning: {}", warning);
    }

    if args.average {
        let report = stats::average(&dataset, args.start, args.end)?;
        println!("{:>24}  {:>14}  {:>14}", "column", "average", "std");
        for ((head, mean), std) in report
            .heads
            .iter()
            .zip(&report.means)
            .zip(&report.std_devs)
        {
            println!("{:>24}  {:>14.6}  {:>14.6}", head, mean, std);
        }
    }

    if let Some(path) = &args.csv {
        let config = if args.csv_metadata {
            CsvConfig::default().with_metadata()
        } else {
            CsvConfig::default()
        };
        CsvExporter::new(config).export(&dataset, path)?;
        println!("wrote {}", path);
    }

    if let Some(path) = &args.plot {
        plot_lines(&dataset, path, None)?;
        println!("wrote {}", path);
    }

    if let Some(path) = &args.stacked {
        plot_stacked(&dataset, 1, None, path, None)?;
        println!("wrote {}", path);
    }

    if let Some(path) = &args.distribution {
        plot_distribution(&dataset, args.bins, path, None)?;
        println!("wrote {}", path);
    }

    if let Some(path) = &args.mvave {
        let mv = stats::moving_average(&dataset, args.window, args.confidence)?;
        plot_moving_average(&dataset, &mv, args.series, path, None)?;
        println!("wrote {}", path);
    }

    Ok(())
}

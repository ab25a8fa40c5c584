//! xvg-rs: XVG Parsing & Analysis Toolkit
//!
//! A toolkit for post-processing GROMACS XVG simulation output: parsing
//! the text format into structured columns, computing descriptive
//! statistics, and exporting the results as CSV or plots.
//!
//! # Architecture
//!
//! xvg-rs is built on two core principles:
//!
//! 1. **Separation of Parsing and Analysis**
//!    - The parsing pipeline turns text into a validated column set
//!    - Statistics and output consume that set read-only, on demand
//!
//! 2. **Typed failure reporting**
//!    - Every fatal condition is a [`XvgError`] variant returned to the
//!      caller; library code never prints-and-exits
//!    - Non-fatal header-pairing problems are collected on the dataset's
//!      warning list
//!
//! # Quick Start
//!
//! ```rust
//! use xvg_rs::{stats, XvgDataset};
//!
//! # fn main() -> xvg_rs::Result<()> {
//! let content = "\
//! @    title \"Potential Energy\"
//! @    xaxis  label \"Time (ps)\"
//! @    yaxis  label \"(kJ/mol)\"
//! @ s0 legend \"Potential\"
//! 0.0  -1000.0
//! 1.0  -1001.5
//! 2.0   -999.0
//! 3.0  -1000.5
//! ";
//! let dataset = XvgDataset::parse_str("energy.xvg", content)?;
//!
//! let report = stats::average(&dataset, None, None)?;
//! assert_eq!(report.heads[1], "Potential (kJ/mol)");
//!
//! let mv = stats::moving_average(&dataset, 2, 0.95)?;
//! assert!(mv.averages[1][0].is_nan());
//! # Ok(())
//! # }
//! ```
//!
//! Files on disk go through [`XvgDataset::open`], which also enforces the
//! `.xvg` suffix convention.
//!
//! # Modules
//!
//! - [`parse`]: line classification, metadata, columns, header pairing
//! - [`stats`]: averages, moving averages, distributions
//! - [`output`]: CSV export and plot rendering (optional consumers)

pub mod dataset;
pub mod error;
pub mod output;
pub mod parse;
pub mod stats;

pub use dataset::XvgDataset;
pub use error::{Result, XvgError};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust,ignore
    //! use xvg_rs::prelude::*;
    //! ```
    pub use crate::dataset::XvgDataset;
    pub use crate::error::{Result, XvgError};
    pub use crate::output::export::{CsvConfig, CsvExporter, Exporter};
    pub use crate::output::visualization::{
        plot_distribution, plot_lines, plot_moving_average, plot_stacked, PlotConfig, NO_TITLE,
    };
    pub use crate::stats::{average, distribution, moving_average};
}

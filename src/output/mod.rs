//! Output module for analyzed XVG data
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots (PNG/SVG via plotters)
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   ├── lines.rs
//! │   ├── stacked.rs
//! │   └── distribution.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! Both sub-modules consume a read-only [`crate::XvgDataset`]:
//! visualization for human interpretation, export for programmatic
//! analysis in other tools.

pub mod export;
pub mod visualization;

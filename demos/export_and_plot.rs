//! Example: Export and Plot — CSV conversion plus all chart types
//!
//! Generates a synthetic multi-component energy file, then produces in the
//! current directory:
//!
//! - `demo_energy.csv`  — CSV conversion with a commented metadata header
//! - `demo_lines.png`   — every series against time
//! - `demo_stacked.png` — stacked-area view of the components
//! - `demo_dist.png`    — per-column value distributions
//! - `demo_mvave.png`   — first series with moving average and band

use std::fmt::Write as _;

use xvg_rs::output::export::{CsvConfig, CsvExporter, Exporter};
use xvg_rs::output::visualization::{
    plot_distribution, plot_lines, plot_moving_average, plot_stacked, PlotConfig,
};
use xvg_rs::{stats, XvgDataset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  XVG Export & Plot Demo");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Synthetic three-component energy file ======

    let mut content = String::from(
        "@    title \"Interaction Energies\"\n\
         @    xaxis  label \"Time (ps)\"\n\
         @    yaxis  label \"(kJ/mol), (kJ/mol), (kJ/mol)\"\n\
         @ s0 legend \"Coulomb\"\n\
         @ s1 legend \"LJ (SR)\"\n\
         @ s2 legend \"Bonded\"\n",
    );
    for i in 0..1500 {
        let t = i as f64 * 0.01;
        let coulomb = -250.0 - 15.0 * (t * 0.8).sin();
        let lj = -90.0 + 8.0 * (t * 1.7).cos();
        let bonded = 40.0 + 5.0 * (t * 0.3).sin();
        writeln!(content, "{t:.3} {coulomb:.4} {lj:.4} {bonded:.4}")?;
    }

    let dir = tempfile::tempdir()?;
    let input = dir.path().join("interactions.xvg");
    std::fs::write(&input, content)?;

    let dataset = XvgDataset::open(&input)?;
    println!(
        "Parsed {} rows, series: {:?}\n",
        dataset.row_count(),
        &dataset.heads()[1..]
    );

    // ====== CSV ======

    let exporter = CsvExporter::new(CsvConfig::default().with_metadata());
    exporter.export(&dataset, "demo_energy.csv")?;
    println!("wrote demo_energy.csv");

    // ====== Plots ======

    plot_lines(&dataset, "demo_lines.png", None)?;
    println!("wrote demo_lines.png");

    plot_stacked(&dataset, 1, None, "demo_stacked.png", None)?;
    println!("wrote demo_stacked.png");

    plot_distribution(&dataset, 100, "demo_dist.png", None)?;
    println!("wrote demo_dist.png");

    let mv = stats::moving_average(&dataset, 50, 0.95)?;
    let config = PlotConfig::lines("Coulomb with moving average");
    plot_moving_average(&dataset, &mv, 1, "demo_mvave.png", Some(&config))?;
    println!("wrote demo_mvave.png");

    Ok(())
}

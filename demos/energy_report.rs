//! Example: Energy Report — averages and moving averages
//!
//! Generates a synthetic `gmx energy` style file, parses it, and prints:
//!
//! - the reconciled column headers
//! - per-column averages with population standard deviation
//! - a short excerpt of the moving average with its confidence band
//!
//! The input file is written into a temporary directory, so the example is
//! fully self-contained.

use std::fmt::Write as _;

use xvg_rs::{stats, XvgDataset};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("═══════════════════════════════════════════════════════");
    println!("  XVG Energy Report");
    println!("═══════════════════════════════════════════════════════\n");

    // ====== Synthetic gmx-energy output ======

    let mut content = String::from(
        "# Synthetic output in the style of gmx energy\n\
         @    title \"GROMACS Energies\"\n\
         @    xaxis  label \"Time (ps)\"\n\
         @    yaxis  label \"(kJ/mol), (K)\"\n\
         @ TYPE xy\n\
         @ s0 legend \"Potential\"\n\
         @ s1 legend \"Temperature\"\n",
    );
    let rows = 2000;
    for i in 0..rows {
        let t = i as f64 * 0.002;
        // Slow drift plus deterministic ripple, energy-like numbers
        let potential = -10500.0 + 0.05 * t + 12.0 * (i % 31) as f64 / 31.0;
        let temperature = 300.0 + 2.0 * (i % 13) as f64 / 13.0;
        writeln!(content, "{t:.3} {potential:.4} {temperature:.4}")?;
    }

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("energy.xvg");
    std::fs::write(&path, content)?;

    // ====== Parse ======

    let dataset = XvgDataset::open(&path)?;
    println!(
        "Parsed {} rows into {} columns:",
        dataset.row_count(),
        dataset.heads().len()
    );
    for head in dataset.heads() {
        println!("  - {head}");
    }

    // ====== Averages ======

    let report = stats::average(&dataset, None, None)?;
    println!("\nFull-range averages:");
    for ((head, mean), std) in report
        .heads
        .iter()
        .zip(&report.means)
        .zip(&report.std_devs)
    {
        println!("  {head:>24}  {mean:>14.4} ± {std:.4}");
    }

    // Equilibrated tail only
    let tail = stats::average(&dataset, Some(rows / 2), None)?;
    println!("\nSecond-half averages:");
    for (head, mean) in tail.heads.iter().zip(&tail.means) {
        println!("  {head:>24}  {mean:>14.4}");
    }

    // ====== Moving average excerpt ======

    let mv = stats::moving_average(&dataset, 100, 0.95)?;
    println!("\nMoving average of {} (window 100, 95% band):", mv.heads[1]);
    for i in (100..rows).step_by(400) {
        println!(
            "  row {i:>5}: {:.3}  [{:.3}, {:.3}]",
            mv.averages[1][i], mv.lows[1][i], mv.highs[1][i]
        );
    }

    Ok(())
}

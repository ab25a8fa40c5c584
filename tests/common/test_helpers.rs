//! Helper functions and fixtures for integration tests

use std::path::PathBuf;

use tempfile::TempDir;

use xvg_rs::XvgDataset;

/// A realistic `gmx energy` style file: two legends whose units live in
/// the comma-separated y-axis label, plus comment and styling lines.
pub const ENERGY_XVG: &str = "\
# This file was created by gmx energy
# gmx is part of G R O M A C S
@    title \"GROMACS Energies\"
@    xaxis  label \"Time (ps)\"
@    yaxis  label \"(kJ/mol), (K)\"
@ TYPE xy
@ view 0.15, 0.15, 0.75, 0.85
@ legend on
@ s0 legend \"Potential\"
@ s1 legend \"Temperature\"
0.0  -1000.00  300.00
1.0  -1001.50  301.25
2.0   -999.00  299.50
3.0  -1000.25  300.75
4.0  -1002.00  298.50
5.0   -998.75  301.00
";

/// Write `content` under `name` into a fresh temp directory
///
/// Returns the directory guard (keep it alive) and the file path.
pub fn write_xvg(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    (dir, path)
}

/// Parse the energy fixture from a real file on disk
pub fn energy_fixture() -> (TempDir, XvgDataset) {
    let (dir, path) = write_xvg("energy.xvg", ENERGY_XVG);
    let dataset = XvgDataset::open(&path).expect("parse energy fixture");
    (dir, dataset)
}

/// Assert that two floats are close (within tolerance)
pub fn assert_close(actual: f64, expected: f64, tolerance: f64, message: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff < tolerance,
        "{}: {} differs from {} by {} (tolerance {})",
        message,
        actual,
        expected,
        diff,
        tolerance
    );
}

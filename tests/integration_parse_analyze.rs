//! End-to-end tests: parse a realistic XVG file, run every analysis

mod common;

use common::{assert_close, energy_fixture, write_xvg, ENERGY_XVG};
use xvg_rs::{stats, XvgDataset, XvgError};

#[test]
fn parses_metadata_and_reconciles_headers() {
    let (_dir, dataset) = energy_fixture();

    assert_eq!(dataset.metadata().title, "GROMACS Energies");
    assert_eq!(dataset.metadata().x_label, "Time (ps)");
    assert_eq!(dataset.metadata().legends, vec!["Potential", "Temperature"]);
    assert_eq!(
        dataset.heads(),
        &["Time (ps)", "Potential (kJ/mol)", "Temperature (K)"]
    );
    assert!(dataset.warnings().is_empty());
}

#[test]
fn row_count_matches_data_lines_and_column_lengths() {
    let (_dir, dataset) = energy_fixture();

    // 6 data lines, everything else is comments or metadata
    assert_eq!(dataset.row_count(), 6);
    for column in dataset.columns() {
        assert_eq!(column.len(), 6);
    }
    assert_eq!(dataset.heads().len(), dataset.columns().len());
}

#[test]
fn average_over_full_range_and_subrange() {
    let (_dir, dataset) = energy_fixture();

    let full = stats::average(&dataset, None, None).unwrap();
    let expected = (-1000.0 - 1001.5 - 999.0 - 1000.25 - 1002.0 - 998.75) / 6.0;
    assert_close(full.means[1], expected, 1e-9, "potential mean");

    let sub = stats::average(&dataset, Some(1), Some(4)).unwrap();
    let expected_sub = (-1001.5 - 999.0 - 1000.25) / 3.0;
    assert_close(sub.means[1], expected_sub, 1e-9, "potential sub-range mean");
}

#[test]
fn moving_average_has_undefined_prefix_and_symmetric_band() {
    let (_dir, dataset) = energy_fixture();

    let mv = stats::moving_average(&dataset, 2, 0.95).unwrap();
    for c in 0..dataset.columns().len() {
        assert_eq!(mv.averages[c].len(), dataset.row_count());
        assert!(mv.averages[c][0].is_nan());
        assert!(mv.averages[c][1].is_nan());
    }

    // Window at row 2 covers rows 0 and 1 of the potential column
    assert_close(
        mv.averages[1][2],
        (-1000.0 - 1001.5) / 2.0,
        1e-9,
        "trailing window mean",
    );

    for i in 2..dataset.row_count() {
        let m = mv.averages[1][i];
        let lo = mv.lows[1][i];
        let hi = mv.highs[1][i];
        assert_close(m - lo, hi - m, 1e-9, "band symmetry");
        assert!(lo <= m && m <= hi);
    }
}

#[test]
fn distribution_frequencies_sum_to_hundred() {
    let (_dir, dataset) = energy_fixture();

    let dist = stats::distribution(&dataset, 10).unwrap();
    for freqs in &dist.frequencies {
        let total: f64 = freqs.iter().sum();
        assert_close(total, 100.0, 1e-9, "frequency total");
    }
}

#[test]
fn mismatched_row_width_fails_with_offending_line() {
    let content = "\
@ xaxis label \"Time (ps)\"
@ yaxis label \"(nm)\"
0.0 1.0
1.0 2.0
2.0 3.0
3.0 4.0
4.0 5.0 999.0
";
    let (_dir, path) = write_xvg("broken.xvg", content);
    match XvgDataset::open(&path) {
        Err(XvgError::ColumnCountMismatch { line, .. }) => {
            assert_eq!(line, "4.0 5.0 999.0");
        }
        other => panic!("expected ColumnCountMismatch, got {other:?}"),
    }
}

#[test]
fn unpairable_ylabel_is_surfaced_as_warning() {
    let content = "\
@ xaxis label \"Time (ps)\"
@ yaxis label \"Energy Components\"
@ s0 legend \"s1\"
@ s1 legend \"s2\"
0 1 2
1 2 3
";
    let (_dir, path) = write_xvg("components.xvg", content);
    let dataset = XvgDataset::open(&path).unwrap();
    assert_eq!(dataset.heads(), &["Time (ps)", "s1", "s2"]);
    assert_eq!(dataset.warnings().len(), 1);
}

#[test]
fn parse_str_matches_open() {
    let (_dir, from_file) = energy_fixture();
    let from_str = XvgDataset::parse_str("energy.xvg", ENERGY_XVG).unwrap();
    assert_eq!(from_file.heads(), from_str.heads());
    assert_eq!(from_file.columns(), from_str.columns());
}

//! Line classification for XVG files
//!
//! An XVG file mixes three kinds of lines: comments (`#`, `&`), Grace
//! metadata directives (`@`), and whitespace-delimited data rows. The
//! classifier tags each stripped, non-empty line; text extraction happens
//! later in [`super::metadata`].

/// Classification tag for one stripped, non-empty input line
///
/// # Variants
///
/// - `Comment`: `#`/`&` comment lines and every `@` directive the parser
///   does not consume (plot styling, axis ranges, ...)
/// - `Title`: `@ title "..."` (but not `@ subtitle`)
/// - `XLabel` / `YLabel`: `@ xaxis label "..."` / `@ yaxis label "..."`
/// - `Legend`: `@ s<n> legend "..."` — one per data series, order-significant
/// - `Data`: anything else, to be tokenized on whitespace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Title,
    XLabel,
    YLabel,
    Legend,
    Data,
}

/// Classify one line of XVG content
///
/// The caller is expected to have stripped surrounding whitespace and
/// filtered out empty lines.
///
/// Metadata detection is substring-based, matching how GROMACS tools and
/// Grace write these directives with varying spacing.
///
/// # Example
///
/// ```rust
/// use xvg_rs::parse::{classify, LineKind};
///
/// assert_eq!(classify("# gmx energy output"), LineKind::Comment);
/// assert_eq!(classify("@ title \"Energy\""), LineKind::Title);
/// assert_eq!(classify("@ s0 legend \"Potential\""), LineKind::Legend);
/// assert_eq!(classify("0.0  -1234.5"), LineKind::Data);
/// ```
pub fn classify(line: &str) -> LineKind {
    if line.starts_with('#') || line.starts_with('&') {
        return LineKind::Comment;
    }
    if line.starts_with('@') {
        if line.contains("title") && !line.contains("subtitle") {
            return LineKind::Title;
        }
        if line.contains("xaxis") && line.contains("label") {
            return LineKind::XLabel;
        }
        if line.contains("yaxis") && line.contains("label") {
            return LineKind::YLabel;
        }
        if line.starts_with("@ s") && line.contains("legend") {
            return LineKind::Legend;
        }
        // Any other directive (styling, ranges, ...) is ignored
        return LineKind::Comment;
    }
    LineKind::Data
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments() {
        assert_eq!(classify("# created by gmx energy"), LineKind::Comment);
        assert_eq!(classify("&"), LineKind::Comment);
    }

    #[test]
    fn test_title_but_not_subtitle() {
        assert_eq!(classify("@    title \"RMSD\""), LineKind::Title);
        assert_eq!(classify("@ subtitle \"run 2\""), LineKind::Comment);
    }

    #[test]
    fn test_axis_labels() {
        assert_eq!(classify("@    xaxis  label \"Time (ps)\""), LineKind::XLabel);
        assert_eq!(classify("@    yaxis  label \"(nm)\""), LineKind::YLabel);
    }

    #[test]
    fn test_legend_requires_series_prefix() {
        assert_eq!(classify("@ s0 legend \"Potential\""), LineKind::Legend);
        assert_eq!(classify("@ s11 legend \"LJ (SR)\""), LineKind::Legend);
        // A bare legend directive without a series index is styling, not a series name
        assert_eq!(classify("@ legend on"), LineKind::Comment);
    }

    #[test]
    fn test_styling_directives_are_ignored() {
        assert_eq!(classify("@ TYPE xy"), LineKind::Comment);
        assert_eq!(classify("@ view 0.15, 0.15, 0.75, 0.85"), LineKind::Comment);
    }

    #[test]
    fn test_data_rows() {
        assert_eq!(classify("0.000000  -12345.6  42.0"), LineKind::Data);
        assert_eq!(classify("1e-3 2e-3"), LineKind::Data);
    }
}

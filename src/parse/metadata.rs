//! Metadata extraction for XVG files
//!
//! Pulls the human-readable payload out of `@` directives: the plot title,
//! the axis labels, and the per-series legend strings.

/// Extract the content of the outermost quoted string on a metadata line
///
/// Mirrors what Grace-writing tools produce: the value is everything after
/// the last `"` once surrounding quotes are stripped, so
/// `@ xaxis label "Time (ps)"` yields `Time (ps)`.
///
/// This is a heuristic — it silently takes the last `"`-delimited token even
/// for malformed lines. A line with no quotes at all yields an empty string.
///
/// # Example
///
/// ```rust
/// use xvg_rs::parse::quoted_value;
///
/// assert_eq!(quoted_value("@ title \"Potential Energy\""), "Potential Energy");
/// assert_eq!(quoted_value("@ s0 legend \"LJ (SR)\""), "LJ (SR)");
/// assert_eq!(quoted_value("@ title"), "");
/// ```
pub fn quoted_value(line: &str) -> &str {
    let trimmed = line.trim_matches('"');
    match trimmed.rfind('"') {
        Some(idx) => &trimmed[idx + 1..],
        None => "",
    }
}

/// Title, axis labels and legend strings of one XVG file
///
/// Populated once during parsing, immutable afterward. All fields default
/// to empty; `legends` preserves encounter order, one entry per declared
/// data series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesMetadata {
    /// Plot title (`@ title`), empty if the file declares none
    pub title: String,

    /// X-axis label (`@ xaxis label`)
    pub x_label: String,

    /// Y-axis label (`@ yaxis label`)
    pub y_label: String,

    /// Per-series legend strings (`@ s<n> legend`), in encounter order
    pub legends: Vec<String>,
}

impl SeriesMetadata {
    /// Record the payload of a classified metadata line
    pub fn record(&mut self, kind: super::LineKind, line: &str) {
        use super::LineKind;
        match kind {
            LineKind::Title => self.title = quoted_value(line).to_string(),
            LineKind::XLabel => self.x_label = quoted_value(line).to_string(),
            LineKind::YLabel => self.y_label = quoted_value(line).to_string(),
            LineKind::Legend => self.legends.push(quoted_value(line).to_string()),
            LineKind::Comment | LineKind::Data => {}
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

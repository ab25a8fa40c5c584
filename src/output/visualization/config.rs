//! Plot configuration shared across visualization modules
//!
//! One explicit [`PlotConfig`] value per plot call replaces process-wide
//! styling state: every knob a renderer consults lives here, and two calls
//! with different configs never interfere.

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// Labels left empty are filled from the dataset's own metadata at render
/// time, so a default config already produces fully-annotated charts.
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title; empty means "use the dataset title"
    pub title: String,

    /// X-axis label; empty means "use the dataset's x head"
    pub xlabel: String,

    /// Y-axis label; empty means "use the dataset's y-axis label"
    pub ylabel: String,

    /// Optional colors, one per data series
    ///
    /// If None, series cycle through the default palette.
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: String::new(),
            xlabel: String::new(),
            ylabel: String::new(),
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (the dataset title will be used)
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for a line plot with an optional custom title
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::lines("RMSD over time");
    /// let config = PlotConfig::lines(NO_TITLE);
    /// ```
    pub fn lines(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.title = title.into_optional_title().unwrap_or_default();
        config
    }

    /// Create config for a stacked-area plot with an optional custom title
    pub fn stacked(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.title = title.into_optional_title().unwrap_or_default();
        config
    }

    /// Create config for a distribution plot with an optional custom title
    ///
    /// Sets the y label to "Frequency %"; the x label of each subplot comes
    /// from the column head at render time.
    pub fn distribution(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.title = title.into_optional_title().unwrap_or_default();
        config.ylabel = "Frequency %".to_string();
        config
    }

    /// Get color for the series at index `i`
    ///
    /// Uses custom colors if provided, otherwise falls back to the default
    /// palette (wrapping around).
    pub(crate) fn series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors {
            if series_index < colors.len() {
                return colors[series_index];
            }
        }

        const DEFAULT_COLORS: [RGBColor; 10] = [
            RED,
            BLUE,
            GREEN,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0),   // Orange
            RGBColor(128, 0, 128),   // Purple
            RGBColor(255, 192, 203), // Pink
            RGBColor(165, 42, 42),   // Brown
        ];

        DEFAULT_COLORS[series_index % DEFAULT_COLORS.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlotConfig::default();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 768);
        assert!(config.show_grid);
        assert!(config.title.is_empty());
    }

    #[test]
    fn test_lines_config_titles() {
        assert_eq!(PlotConfig::lines("RMSD").title, "RMSD");
        assert_eq!(PlotConfig::lines(format!("run {}", 2)).title, "run 2");
        assert!(PlotConfig::lines(NO_TITLE).title.is_empty());
    }

    #[test]
    fn test_distribution_config_sets_frequency_label() {
        let config = PlotConfig::distribution(NO_TITLE);
        assert_eq!(config.ylabel, "Frequency %");
    }

    #[test]
    fn test_series_color_palette_wraps() {
        let config = PlotConfig::default();
        assert_eq!(config.series_color(0), RED);
        assert_eq!(config.series_color(1), BLUE);
        assert_eq!(config.series_color(10), RED);
    }

    #[test]
    fn test_series_color_custom() {
        let config = PlotConfig {
            series_colors: Some(vec![BLACK, GREEN]),
            ..Default::default()
        };
        assert_eq!(config.series_color(0), BLACK);
        assert_eq!(config.series_color(1), GREEN);
        // Past the custom list: default palette
        assert_eq!(config.series_color(2), GREEN);
    }
}

//! Run configuration.
//!
//! There is no configuration file: the binary always uses
//! [`PlotConfig::default`]. The structs exist so each stage can be driven
//! with other paths or sizes from tests.

use std::path::PathBuf;

/// Default input data file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "plot_data.txt";

/// Default output image, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "colors_vs_fps.png";

/// Appearance of the colors-vs-fps figure.
#[derive(Debug, Clone)]
pub struct FigureConfig {
    /// Figure width in inches.
    pub width_in: f64,
    /// Figure height in inches.
    pub height_in: f64,
    /// Pixels per inch used when rasterizing.
    pub dpi: f64,
    /// Line format for the fps series.
    pub fmt: String,
    /// X-axis label.
    pub x_label: String,
    /// Y-axis label.
    pub y_label: String,
    /// Apply tight layout before saving.
    pub tight_layout: bool,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_in: 6.0,
            height_in: 4.0,
            dpi: 100.0,
            fmt: ".-".to_string(),
            x_label: "color changes".to_string(),
            y_label: "FPS".to_string(),
            tight_layout: true,
        }
    }
}

/// Layout constants for rasterized axes, in pixels at 100 dpi.
#[derive(Debug, Clone)]
pub struct AxesLayoutConfig {
    /// Fraction of the data span added on each side of the view (0.05 = 5%).
    pub margin_factor: f64,
    /// Font size of tick labels.
    pub tick_label_size: f64,
    /// Font size of axis labels.
    pub axis_label_size: f64,
    /// Font size of the title.
    pub title_size: f64,
    /// Approximate number of ticks per axis.
    pub tick_count: usize,
    /// Length of tick marks.
    pub tick_length: i32,
    /// Blank space kept around the figure edge.
    pub outer_pad: u32,
    /// Space between tick labels and axis labels.
    pub label_pad: u32,
    /// Label area used when tight layout is off.
    pub default_label_area: u32,
}

impl Default for AxesLayoutConfig {
    fn default() -> Self {
        Self {
            margin_factor: 0.05, // matplotlib's default autoscale margin
            tick_label_size: 14.0,
            axis_label_size: 14.0,
            title_size: 21.0,
            tick_count: 6,
            tick_length: 4,
            outer_pad: 8,
            label_pad: 6,
            default_label_area: 60,
        }
    }
}

/// Full configuration for one run.
#[derive(Debug, Clone)]
pub struct PlotConfig {
    /// Two-column data file to read.
    pub input: PathBuf,
    /// PNG file to write.
    pub output: PathBuf,
    /// Figure appearance.
    pub figure: FigureConfig,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            figure: FigureConfig::default(),
        }
    }
}

impl PlotConfig {
    /// Configuration reading and writing inside `dir` with default styling.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            input: dir.join(DEFAULT_INPUT),
            output: dir.join(DEFAULT_OUTPUT),
            figure: FigureConfig::default(),
        }
    }
}

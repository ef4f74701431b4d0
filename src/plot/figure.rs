//! In-memory figure model.
//!
//! A [`Figure`] owns one [`Axes`], which owns the plotted [`Line2D`]
//! series and the axis labels. Nothing here touches a drawing backend;
//! see [`Figure::rasterize`](crate::plot::raster) and
//! [`Figure::save`] for output.
//!
//! # Example
//!
//! ```
//! use fpsplot::plot::Figure;
//!
//! let mut fig = Figure::new(6.0, 4.0);
//! let ax = fig.axes_mut();
//! ax.xy(&[1.0, 2.0], &[30.0, 25.0]).fmt(".-").plot()?;
//! ax.set_xlabel("color changes").set_ylabel("FPS");
//! assert_eq!(fig.axes().lines()[0].len(), 2);
//! # Ok::<(), fpsplot::PlotError>(())
//! ```

use super::style::LineFormat;
use crate::error::{PlotError, Result};
use crate::writer::Savefig;

/// Default line width in pixels at 100 dpi.
pub const DEFAULT_LINEWIDTH: f64 = 1.5;

/// One plotted series.
#[derive(Debug, Clone, PartialEq)]
pub struct Line2D {
    x: Vec<f64>,
    y: Vec<f64>,
    format: LineFormat,
    linewidth: f64,
}

impl Line2D {
    /// X values in plotting order.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Y values in plotting order.
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    /// Color, marker and line settings.
    pub fn format(&self) -> &LineFormat {
        &self.format
    }

    /// Line width in pixels at 100 dpi.
    pub fn linewidth(&self) -> f64 {
        self.linewidth
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the series has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(x, y)` pairs in plotting order.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Axis ranges, `(min, max)` per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// X range.
    pub x: (f64, f64),
    /// Y range.
    pub y: (f64, f64),
}

/// A single set of axes.
#[derive(Debug, Clone, Default)]
pub struct Axes {
    lines: Vec<Line2D>,
    xlabel: String,
    ylabel: String,
    title: Option<String>,
}

impl Axes {
    /// Empty axes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plot `y` versus `x` as lines and/or markers.
    ///
    /// Points are connected in the given order; nothing is sorted.
    #[must_use]
    pub fn xy<'a>(&'a mut self, x: &'a [f64], y: &'a [f64]) -> XY<'a> {
        XY {
            axes: self,
            x,
            y,
            fmt: "",
            linewidth: None,
        }
    }

    /// Set the x-axis label.
    pub fn set_xlabel(&mut self, label: &str) -> &mut Self {
        self.xlabel = label.to_string();
        self
    }

    /// Set the y-axis label.
    pub fn set_ylabel(&mut self, label: &str) -> &mut Self {
        self.ylabel = label.to_string();
        self
    }

    /// Set the title drawn above the axes.
    pub fn set_title(&mut self, title: &str) -> &mut Self {
        self.title = Some(title.to_string());
        self
    }

    /// Plotted series, in drawing order.
    pub fn lines(&self) -> &[Line2D] {
        &self.lines
    }

    /// The x-axis label.
    pub fn xlabel(&self) -> &str {
        &self.xlabel
    }

    /// The y-axis label.
    pub fn ylabel(&self) -> &str {
        &self.ylabel
    }

    /// The title, if set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Bounding box of all finite points, or `None` when there are none.
    pub fn data_limits(&self) -> Option<Limits> {
        let finite = self
            .lines
            .iter()
            .flat_map(|l| l.points())
            .filter(|(x, y)| x.is_finite() && y.is_finite());

        let mut limits: Option<Limits> = None;
        for (x, y) in finite {
            limits = Some(match limits {
                None => Limits { x: (x, x), y: (y, y) },
                Some(l) => Limits {
                    x: (l.x.0.min(x), l.x.1.max(x)),
                    y: (l.y.0.min(y), l.y.1.max(y)),
                },
            });
        }
        limits
    }

    /// View ranges: data limits widened by `margin` of the span on each side.
    ///
    /// Empty axes view `(0, 1)` on both axes. Limits are clamped to
    /// `±f64::MAX / 4`; points beyond that are clipped when drawn.
    pub fn view_limits(&self, margin: f64) -> Limits {
        match self.data_limits() {
            Some(l) => Limits {
                x: padded_range(l.x, margin),
                y: padded_range(l.y, margin),
            },
            None => Limits {
                x: (0.0, 1.0),
                y: (0.0, 1.0),
            },
        }
    }
}

/// Largest magnitude a view limit may take. Keeps `hi - lo` finite so
/// tick placement always terminates.
const VIEW_BOUND: f64 = f64::MAX / 4.0;

fn padded_range((min, max): (f64, f64), margin: f64) -> (f64, f64) {
    // Halved before subtracting so the span of any two finite values is finite.
    let half_span = max / 2.0 - min / 2.0;
    let (lo, hi) = if half_span > 0.0 {
        let pad = half_span * (2.0 * margin);
        (min - pad, max + pad)
    } else if min == 0.0 {
        (-1.0, 1.0)
    } else {
        let pad = min.abs() * 0.05;
        (min - pad, max + pad)
    };

    let lo = lo.clamp(-VIEW_BOUND, VIEW_BOUND);
    let hi = hi.clamp(-VIEW_BOUND, VIEW_BOUND);
    if lo < hi {
        (lo, hi)
    } else if hi > 0.0 {
        (hi * 0.95, hi)
    } else {
        (lo, lo * 0.95)
    }
}

/// Builder returned by [`Axes::xy`]; call [`XY::plot`] to add the series.
#[must_use]
#[derive(Debug)]
pub struct XY<'a> {
    axes: &'a mut Axes,
    x: &'a [f64],
    y: &'a [f64],
    fmt: &'a str,
    linewidth: Option<f64>,
}

impl<'a> XY<'a> {
    /// Format string such as `".-"` or `"ro"`.
    pub fn fmt(mut self, fmt: &'a str) -> Self {
        self.fmt = fmt;
        self
    }

    /// Line width in pixels at 100 dpi. Non-positive values keep the default.
    pub fn linewidth(mut self, w: f64) -> Self {
        self.linewidth = (w > 0.0).then_some(w);
        self
    }

    /// Add the series to the axes.
    pub fn plot(self) -> Result<()> {
        if self.x.len() != self.y.len() {
            return Err(PlotError::LengthMismatch {
                x: self.x.len(),
                y: self.y.len(),
            });
        }
        let format = LineFormat::parse(self.fmt)?;

        self.axes.lines.push(Line2D {
            x: self.x.to_vec(),
            y: self.y.to_vec(),
            format,
            linewidth: self.linewidth.unwrap_or(DEFAULT_LINEWIDTH),
        });
        Ok(())
    }
}

/// The top level container for all the plot elements.
#[derive(Debug, Clone)]
pub struct Figure {
    width_in: f64,
    height_in: f64,
    dpi: f64,
    axes: Axes,
    tight: bool,
}

impl Figure {
    /// A figure of the given size in inches, at 100 dpi, with empty axes.
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
            dpi: 100.0,
            axes: Axes::new(),
            tight: false,
        }
    }

    /// Set the resolution used when rasterizing. Non-positive values are ignored.
    pub fn with_dpi(mut self, dpi: f64) -> Self {
        if dpi > 0.0 {
            self.dpi = dpi;
        }
        self
    }

    /// Size in inches, `(width, height)`.
    pub fn size_inches(&self) -> (f64, f64) {
        (self.width_in, self.height_in)
    }

    /// Resolution in pixels per inch.
    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Raster size in pixels at the figure's own dpi.
    pub fn pixel_size(&self) -> (u32, u32) {
        self.pixel_size_at(self.dpi)
    }

    /// Raster size in pixels at `dpi`. Each side is at least one pixel.
    pub fn pixel_size_at(&self, dpi: f64) -> (u32, u32) {
        let px = |inches: f64| (inches * dpi).round().max(1.0) as u32;
        (px(self.width_in), px(self.height_in))
    }

    /// The figure's axes.
    pub fn axes(&self) -> &Axes {
        &self.axes
    }

    /// Mutable access to the figure's axes.
    pub fn axes_mut(&mut self) -> &mut Axes {
        &mut self.axes
    }

    /// Size label areas from their contents so no label is clipped.
    pub fn tight_layout(&mut self) -> &mut Self {
        self.tight = true;
        self
    }

    /// Whether tight layout is enabled.
    pub fn is_tight(&self) -> bool {
        self.tight
    }

    /// Start saving the figure; see [`Savefig`].
    pub fn save(&self) -> Savefig<'_> {
        Savefig::new(self)
    }
}

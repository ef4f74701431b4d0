//! Line format strings in the matplotlib shorthand (`"r.-"`, `"o"`, ...).

use crate::error::{PlotError, Result};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// matplotlib's first cycle color, `C0`.
pub const DEFAULT_COLOR: Rgb = Rgb(31, 119, 180);

/// Marker drawn at every data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `.` small filled dot.
    Point,
    /// `o` filled circle.
    Circle,
    /// `^` filled triangle.
    Triangle,
    /// `x` cross.
    Cross,
}

impl Marker {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Point),
            'o' => Some(Self::Circle),
            '^' => Some(Self::Triangle),
            'x' => Some(Self::Cross),
            _ => None,
        }
    }

    /// Marker size in pixels at 100 dpi.
    pub fn size(self) -> u32 {
        match self {
            Self::Point => 2,
            Self::Circle => 4,
            Self::Triangle => 5,
            Self::Cross => 4,
        }
    }
}

fn color_from_char(c: char) -> Option<Rgb> {
    Some(match c {
        'b' => Rgb(0, 0, 255),
        'g' => Rgb(0, 128, 0),
        'r' => Rgb(255, 0, 0),
        'c' => Rgb(0, 191, 191),
        'm' => Rgb(191, 0, 191),
        'y' => Rgb(191, 191, 0),
        'k' => Rgb(0, 0, 0),
        'w' => Rgb(255, 255, 255),
        _ => return None,
    })
}

/// Parsed line format: color, optional marker, optional connecting line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineFormat {
    /// Series color.
    pub color: Rgb,
    /// Marker at each point.
    pub marker: Option<Marker>,
    /// Whether consecutive points are joined by a solid line.
    pub line: bool,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR,
            marker: None,
            line: true,
        }
    }
}

impl LineFormat {
    /// Parse a format string.
    ///
    /// Each of color, marker, and line style may appear at most once, in
    /// any order. A marker without a line style draws markers only; an
    /// empty string draws a solid line.
    pub fn parse(fmt: &str) -> Result<Self> {
        let mut color = None;
        let mut marker = None;
        let mut line = None;

        let mut chars = fmt.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '-' {
                if matches!(chars.peek(), Some('-') | Some('.')) {
                    return Err(PlotError::invalid_format(fmt, "only solid lines are supported"));
                }
                if line.replace(true).is_some() {
                    return Err(PlotError::invalid_format(fmt, "two line styles"));
                }
            } else if c == ':' {
                return Err(PlotError::invalid_format(fmt, "only solid lines are supported"));
            } else if let Some(m) = Marker::from_char(c) {
                if marker.replace(m).is_some() {
                    return Err(PlotError::invalid_format(fmt, "two markers"));
                }
            } else if let Some(rgb) = color_from_char(c) {
                if color.replace(rgb).is_some() {
                    return Err(PlotError::invalid_format(fmt, "two colors"));
                }
            } else {
                return Err(PlotError::invalid_format(
                    fmt,
                    format!("unrecognized character {:?}", c),
                ));
            }
        }

        Ok(Self {
            color: color.unwrap_or(DEFAULT_COLOR),
            marker,
            line: line.unwrap_or(marker.is_none()),
        })
    }
}

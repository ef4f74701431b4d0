//! Error types for fpsplot.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! Every failure is fatal for a run; callers propagate with `?` and the
//! binary reports the chain on stderr.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fpsplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while loading, plotting, or saving.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The input data file does not exist.
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// The input data file exists but could not be read.
    #[error("Failed to read input file: {}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line could not be parsed into exactly two numbers.
    #[error("Malformed row at {}:{line}: {reason} ({content:?})", path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        content: String,
        reason: String,
    },

    /// The input contained no samples.
    #[error("No samples found in {}", path.display())]
    EmptyDataset { path: PathBuf },

    /// A reciprocal was requested for a zero value.
    #[error("Division by zero: color_changes is 0 at sample {index}")]
    DivisionByZero { index: usize },

    /// X and Y data passed to a plot have different lengths.
    #[error("Length mismatch: x has {x} values, y has {y}")]
    LengthMismatch { x: usize, y: usize },

    /// A line format string could not be understood.
    #[error("Invalid format string {fmt:?}: {reason}")]
    InvalidFormat { fmt: String, reason: String },

    /// The drawing backend failed.
    #[error("Render error: {0}")]
    Render(String),

    /// The output image could not be written.
    #[error("Failed to write {}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PNG encoder failed.
    #[error("Failed to encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },
}

impl PlotError {
    /// Create an error for a failed read, mapping `NotFound` to `InputNotFound`.
    pub fn read_input(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::InputNotFound { path }
        } else {
            Self::ReadInput { path, source }
        }
    }

    /// Create a MalformedRow error.
    pub fn malformed_row(
        path: PathBuf,
        line: usize,
        content: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedRow {
            path,
            line,
            content: content.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidFormat error.
    pub fn invalid_format(fmt: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            fmt: fmt.into(),
            reason: reason.into(),
        }
    }

    /// Create a WriteError.
    pub fn write_error(path: PathBuf, source: std::io::Error) -> Self {
        Self::WriteError { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_input_not_found() {
        let err = PlotError::read_input(
            PathBuf::from("plot_data.txt"),
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(matches!(err, PlotError::InputNotFound { .. }));
        assert_eq!(err.to_string(), "Input file not found: plot_data.txt");
    }

    #[test]
    fn other_io_errors_keep_their_source() {
        let err = PlotError::read_input(
            PathBuf::from("plot_data.txt"),
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, PlotError::ReadInput { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn malformed_row_names_the_line() {
        let err = PlotError::malformed_row(PathBuf::from("d.txt"), 3, "1.0", "expected 2 fields, found 1");
        assert_eq!(
            err.to_string(),
            "Malformed row at d.txt:3: expected 2 fields, found 1 (\"1.0\")"
        );
    }
}

//! The load, compute, render, save sequence.
//!
//! A run moves strictly forward through [`Stage`]s. Any error ends the
//! run immediately; nothing is retried and no output is written unless
//! every earlier stage succeeded.

use crate::config::PlotConfig;
use crate::data::{color_lifetime, DataReader};
use crate::error::Result;
use crate::plot::render_fps_plot;
use ndarray::Array1;
use std::fmt;
use std::path::PathBuf;

/// Progress of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Nothing done yet.
    Start,
    /// Input parsed.
    Loaded,
    /// Figure built.
    Rendered,
    /// Image written.
    Saved,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Start => "start",
            Self::Loaded => "loaded",
            Self::Rendered => "rendered",
            Self::Saved => "saved",
        };
        f.write_str(name)
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Number of samples plotted.
    pub samples: usize,
    /// Path of the written image.
    pub output: PathBuf,
    /// `1 / color_changes` for every sample. Computed, not plotted.
    pub color_lifetime: Array1<f64>,
    /// Last stage reached.
    pub stage: Stage,
}

/// Run the full sequence with `config`.
pub fn run(config: &PlotConfig) -> Result<RunSummary> {
    let mut stage = Stage::Start;
    tracing::debug!(%stage, input = %config.input.display(), "starting run");

    let dataset = DataReader::read_file(&config.input)?;
    stage = Stage::Loaded;
    let (cc_stats, fps_stats) = dataset.summary();
    tracing::info!(
        %stage,
        samples = dataset.len(),
        color_changes = ?cc_stats.min_max,
        fps_mean = ?fps_stats.mean,
        fps_std = ?fps_stats.std,
        "loaded samples"
    );

    let lifetime = color_lifetime(dataset.color_changes())?;
    tracing::debug!(color_lifetime = ?lifetime.as_slice(), "computed color lifetime");

    let fig = render_fps_plot(&dataset, &config.figure)?;
    stage = Stage::Rendered;
    tracing::info!(%stage, "figure rendered");

    fig.save().to_file(&config.output)?;
    stage = Stage::Saved;
    tracing::info!(%stage, output = %config.output.display(), "figure saved");

    Ok(RunSummary {
        samples: dataset.len(),
        output: config.output.clone(),
        color_lifetime: lifetime,
        stage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlotError;

    fn write_input(dir: &std::path::Path, text: &str) -> PlotConfig {
        let config = PlotConfig::in_dir(dir);
        std::fs::write(&config.input, text).unwrap();
        config
    }

    #[test]
    fn two_rows_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_input(dir.path(), "1.0 30.0\n2.0 25.0\n");

        let summary = run(&config).unwrap();
        assert_eq!(summary.samples, 2);
        assert_eq!(summary.color_lifetime.to_vec(), vec![1.0, 0.5]);
        assert_eq!(summary.stage, Stage::Saved);
        assert!(config.output.exists());

        let img = image::open(&config.output).unwrap();
        assert_eq!((img.width(), img.height()), (600, 400));
    }

    #[test]
    fn missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = PlotConfig::in_dir(dir.path());

        let err = run(&config).unwrap_err();
        assert!(matches!(err, PlotError::InputNotFound { .. }));
        assert!(!config.output.exists());
    }

    #[test]
    fn malformed_row_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_input(dir.path(), "1.0 30.0\nabc\n");

        let err = run(&config).unwrap_err();
        assert!(matches!(err, PlotError::MalformedRow { line: 2, .. }));
        assert!(!config.output.exists());
    }

    #[test]
    fn zero_color_changes_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_input(dir.path(), "0 60\n1 30\n");

        let err = run(&config).unwrap_err();
        assert!(matches!(err, PlotError::DivisionByZero { index: 0 }));
        assert!(!config.output.exists());
    }

    #[test]
    fn existing_output_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_input(dir.path(), "1 30\n2 25\n3 20\n");
        std::fs::write(&config.output, b"stale").unwrap();

        run(&config).unwrap();
        assert!(image::open(&config.output).is_ok());
    }

    #[test]
    fn extreme_values_still_render() {
        let dir = tempfile::tempdir().unwrap();
        let config = write_input(dir.path(), "1 -1e308\n2 1e308\n");

        let summary = run(&config).unwrap();
        assert_eq!(summary.stage, Stage::Saved);
        assert!(image::open(&config.output).is_ok());
    }

    #[test]
    fn stage_names() {
        assert_eq!(Stage::Start.to_string(), "start");
        assert_eq!(Stage::Saved.to_string(), "saved");
    }
}

//! Loaded sample columns.

use ndarray::Array1;
use std::path::{Path, PathBuf};

/// One row of the input file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Independent variable.
    pub color_changes: f64,
    /// Measured frames per second.
    pub fps: f64,
}

/// Samples loaded from a data file, stored as two parallel columns.
///
/// Both columns always have the same length and keep file order. A
/// `Dataset` is never mutated after loading.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: PathBuf,
    color_changes: Array1<f64>,
    fps: Array1<f64>,
}

impl Dataset {
    /// Build a dataset from samples in file order.
    pub fn from_samples(source: impl Into<PathBuf>, samples: &[Sample]) -> Self {
        let color_changes = samples.iter().map(|s| s.color_changes).collect();
        let fps = samples.iter().map(|s| s.fps).collect();
        Self {
            source: source.into(),
            color_changes,
            fps,
        }
    }

    /// Path the samples were read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// The `color_changes` column.
    pub fn color_changes(&self) -> &Array1<f64> {
        &self.color_changes
    }

    /// The `fps` column.
    pub fn fps(&self) -> &Array1<f64> {
        &self.fps
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.color_changes.len()
    }

    /// Whether the dataset holds no samples.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate samples in file order.
    pub fn samples(&self) -> impl Iterator<Item = Sample> + '_ {
        self.color_changes
            .iter()
            .zip(self.fps.iter())
            .map(|(&color_changes, &fps)| Sample { color_changes, fps })
    }

    /// Statistics of both columns, `(color_changes, fps)`.
    pub fn summary(&self) -> (ColumnStats, ColumnStats) {
        (
            ColumnStats::of(&self.color_changes),
            ColumnStats::of(&self.fps),
        )
    }
}

/// Summary statistics over the finite values of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    /// Minimum and maximum values.
    pub min_max: Option<(f64, f64)>,
    /// Mean value.
    pub mean: Option<f64>,
    /// Sample standard deviation.
    pub std: Option<f64>,
    /// Count of finite values.
    pub valid_count: usize,
}

impl ColumnStats {
    /// Compute statistics, skipping NaN and infinite values.
    pub fn of(column: &Array1<f64>) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut count = 0usize;
        for &v in column.iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
            sum += v;
            count += 1;
        }

        let min_max = (count > 0).then_some((min, max));
        let mean = (count > 0).then(|| sum / count as f64);
        let std = match mean {
            Some(mean) if count > 1 => {
                let ssd: f64 = column
                    .iter()
                    .filter(|v| v.is_finite())
                    .map(|v| (v - mean) * (v - mean))
                    .sum();
                Some((ssd / (count - 1) as f64).sqrt())
            }
            _ => None,
        };

        Self {
            min_max,
            mean,
            std,
            valid_count: count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(color_changes: f64, fps: f64) -> Sample {
        Sample { color_changes, fps }
    }

    #[test]
    fn columns_keep_file_order() {
        let ds = Dataset::from_samples(
            "d.txt",
            &[sample(3.0, 10.0), sample(1.0, 30.0), sample(2.0, 20.0)],
        );
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.color_changes().to_vec(), vec![3.0, 1.0, 2.0]);
        assert_eq!(ds.fps().to_vec(), vec![10.0, 30.0, 20.0]);
        assert_eq!(ds.samples().nth(1), Some(sample(1.0, 30.0)));
    }

    #[test]
    fn empty_dataset() {
        let ds = Dataset::from_samples("d.txt", &[]);
        assert!(ds.is_empty());
        let (cc, _) = ds.summary();
        assert_eq!(cc.valid_count, 0);
        assert_eq!(cc.min_max, None);
        assert_eq!(cc.mean, None);
    }

    #[test]
    fn stats_skip_non_finite_values() {
        let column = Array1::from(vec![2.0, f64::NAN, 4.0, f64::INFINITY, 6.0]);
        let stats = ColumnStats::of(&column);
        assert_eq!(stats.valid_count, 3);
        assert_eq!(stats.min_max, Some((2.0, 6.0)));
        assert_eq!(stats.mean, Some(4.0));
        assert_eq!(stats.std, Some(2.0));
    }

    #[test]
    fn single_value_has_no_std() {
        let stats = ColumnStats::of(&Array1::from(vec![5.0]));
        assert_eq!(stats.mean, Some(5.0));
        assert_eq!(stats.std, None);
    }
}

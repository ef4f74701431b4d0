//! Two-column text file reader.

use super::{Dataset, Sample};
use crate::error::{PlotError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reader for whitespace-separated `color_changes fps` files.
///
/// Each non-blank line holds exactly two numeric tokens. Text after `#`
/// is a comment. There is no header line.
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a data file into a [`Dataset`].
    pub fn read_file(path: &Path) -> Result<Dataset> {
        let file = File::open(path).map_err(|e| PlotError::read_input(path.to_path_buf(), e))?;
        Self::read(BufReader::new(file), path)
    }

    /// Read samples from any buffered source. `path` is only used in errors.
    pub fn read<R: BufRead>(reader: R, path: &Path) -> Result<Dataset> {
        let mut samples = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| PlotError::read_input(path.to_path_buf(), e))?;
            if let Some(sample) = Self::parse_line(&line, idx + 1, path)? {
                samples.push(sample);
            }
        }

        if samples.is_empty() {
            return Err(PlotError::EmptyDataset {
                path: path.to_path_buf(),
            });
        }

        tracing::debug!(path = %path.display(), rows = samples.len(), "parsed data file");
        Ok(Dataset::from_samples(path, &samples))
    }

    /// Parse one line. Blank and comment-only lines yield `None`.
    fn parse_line(line: &str, line_no: usize, path: &Path) -> Result<Option<Sample>> {
        let content = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };

        let tokens: Vec<&str> = content.split_whitespace().collect();
        if tokens.is_empty() {
            return Ok(None);
        }
        if tokens.len() != 2 {
            return Err(PlotError::malformed_row(
                path.to_path_buf(),
                line_no,
                line.trim(),
                format!("expected 2 fields, found {}", tokens.len()),
            ));
        }

        let parse = |token: &str| {
            token.parse::<f64>().map_err(|_| {
                PlotError::malformed_row(
                    path.to_path_buf(),
                    line_no,
                    line.trim(),
                    format!("{:?} is not a number", token),
                )
            })
        };

        Ok(Some(Sample {
            color_changes: parse(tokens[0])?,
            fps: parse(tokens[1])?,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_str(text: &str) -> Result<Dataset> {
        DataReader::read(Cursor::new(text), Path::new("plot_data.txt"))
    }

    #[test]
    fn reads_two_rows() {
        let ds = read_str("1.0 30.0\n2.0 25.0\n").unwrap();
        assert_eq!(ds.color_changes().to_vec(), vec![1.0, 2.0]);
        assert_eq!(ds.fps().to_vec(), vec![30.0, 25.0]);
    }

    #[test]
    fn keeps_unsorted_file_order() {
        let ds = read_str("5 10\n1 50\n3 30\n").unwrap();
        assert_eq!(ds.color_changes().to_vec(), vec![5.0, 1.0, 3.0]);
        assert_eq!(ds.fps().to_vec(), vec![10.0, 50.0, 30.0]);
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let ds = read_str("# colors fps\n\n1 60 # warmup\n   \n2\t59.5\r\n").unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.fps().to_vec(), vec![60.0, 59.5]);
    }

    #[test]
    fn accepts_exponents_and_signs() {
        let ds = read_str("1e3 -2.5E-1\n+4 .5\n").unwrap();
        assert_eq!(ds.color_changes().to_vec(), vec![1000.0, 4.0]);
        assert_eq!(ds.fps().to_vec(), vec![-0.25, 0.5]);
    }

    #[test]
    fn one_token_is_malformed() {
        let err = read_str("1.0 30.0\n2.0\n").unwrap_err();
        match err {
            PlotError::MalformedRow { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "2.0");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn three_tokens_are_malformed() {
        let err = read_str("1 2 3\n").unwrap_err();
        assert!(matches!(err, PlotError::MalformedRow { line: 1, .. }));
    }

    #[test]
    fn non_numeric_text_is_malformed() {
        let err = read_str("1.0 fast\n").unwrap_err();
        match err {
            PlotError::MalformedRow { reason, .. } => assert!(reason.contains("\"fast\"")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(read_str(""), Err(PlotError::EmptyDataset { .. })));
        assert!(matches!(
            read_str("# only a comment\n\n"),
            Err(PlotError::EmptyDataset { .. })
        ));
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = DataReader::read_file(&dir.path().join("plot_data.txt")).unwrap_err();
        assert!(matches!(err, PlotError::InputNotFound { .. }));
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot_data.txt");
        std::fs::write(&path, "1.0 30.0\n2.0 25.0\n").unwrap();
        let ds = DataReader::read_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.source(), path.as_path());
    }
}

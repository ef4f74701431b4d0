//! Saving figures as PNG files.

use crate::error::{PlotError, Result};
use crate::plot::Figure;
use image::ImageFormat;
use std::path::Path;

/// Options for saving a [`Figure`]; created by [`Figure::save`].
#[derive(Debug)]
pub struct Savefig<'a> {
    fig: &'a Figure,
    dpi: Option<f64>,
}

impl<'a> Savefig<'a> {
    pub(crate) fn new(fig: &'a Figure) -> Self {
        Self { fig, dpi: None }
    }

    /// Override the figure's dpi. Non-positive values restore the figure's own.
    pub fn dpi(&mut self, dpi: f64) -> &mut Self {
        self.dpi = (dpi > 0.0).then_some(dpi);
        self
    }

    /// Write the figure to `path` as PNG, replacing any existing file.
    ///
    /// The image is encoded into a temporary file next to `path` and then
    /// renamed over it, so a failure never leaves a partial image behind.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let image = self.fig.rasterize_at(self.dpi.unwrap_or(self.fig.dpi()))?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = tempfile::Builder::new()
            .prefix(".fpsplot-")
            .suffix(".png.tmp")
            .tempfile_in(dir)
            .map_err(|e| PlotError::write_error(path.to_path_buf(), e))?;

        image
            .write_to(tmp.as_file_mut(), ImageFormat::Png)
            .map_err(|e| match e {
                image::ImageError::IoError(io) => PlotError::write_error(path.to_path_buf(), io),
                other => PlotError::Encode {
                    path: path.to_path_buf(),
                    message: other.to_string(),
                },
            })?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| PlotError::write_error(path.to_path_buf(), e))?;

        tmp.persist(path)
            .map_err(|e| PlotError::write_error(path.to_path_buf(), e.error))?;

        tracing::debug!(path = %path.display(), width = image.width(), height = image.height(), "png written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn figure() -> Figure {
        let mut fig = Figure::new(2.0, 1.5);
        fig.axes_mut().xy(&[1.0, 2.0], &[3.0, 4.0]).fmt(".-").plot().unwrap();
        fig
    }

    #[test]
    fn writes_a_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        figure().save().to_file(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (200, 150));
    }

    #[test]
    fn dpi_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        figure().save().dpi(50.0).to_file(&path).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (100, 75));
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        std::fs::write(&path, b"not a png").unwrap();
        figure().save().to_file(&path).unwrap();
        assert!(image::open(&path).is_ok());
    }

    #[test]
    fn missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let err = figure().save().to_file(&path).unwrap_err();
        assert!(matches!(err, PlotError::WriteError { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn no_temp_files_left_behind() {
        let dir = tempfile::tempdir().unwrap();
        figure().save().to_file(dir.path().join("out.png")).unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("out.png")]);
    }
}

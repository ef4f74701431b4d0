//! Construction of the colors-vs-fps figure.

use super::figure::Figure;
use crate::config::FigureConfig;
use crate::data::Dataset;
use crate::error::Result;

/// Build the figure plotting `fps` against `color_changes` in file order.
///
/// Pure construction: no file or backend is touched.
pub fn render_fps_plot(dataset: &Dataset, config: &FigureConfig) -> Result<Figure> {
    let x = dataset.color_changes().to_vec();
    let y = dataset.fps().to_vec();

    let mut fig = Figure::new(config.width_in, config.height_in).with_dpi(config.dpi);
    let ax = fig.axes_mut();
    ax.xy(&x, &y).fmt(&config.fmt).plot()?;
    ax.set_xlabel(&config.x_label).set_ylabel(&config.y_label);

    if config.tight_layout {
        fig.tight_layout();
    }

    tracing::debug!(points = x.len(), "figure built");
    Ok(fig)
}

//! Figure model, rendering, and rasterization.

pub mod figure;
pub mod glyphs;
pub mod raster;
pub mod render;
pub mod style;

pub use figure::{Axes, Figure, Limits, Line2D, XY};
pub use raster::GlyphTextBackend;
pub use render::render_fps_plot;
pub use style::{LineFormat, Marker, Rgb};

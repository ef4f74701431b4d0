//! Rasterization of a [`Figure`] into an RGB image.
//!
//! Drawing goes through plotters into an in-memory bitmap. Text is routed
//! through [`GlyphTextBackend`], which draws it with the built-in bitmap
//! font instead of a system font.

use super::figure::{Figure, Limits, Line2D};
use super::glyphs;
use super::style::{Marker, Rgb};
use crate::config::AxesLayoutConfig;
use crate::error::{PlotError, Result};
use image::RgbImage;
use plotters::chart::ChartContext;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind};
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use plotters_backend::{
    text_anchor, BackendColor, BackendCoord, BackendTextStyle, DrawingBackend,
    DrawingErrorKind, FontTransform,
};

impl Figure {
    /// Rasterize at the figure's own dpi.
    pub fn rasterize(&self) -> Result<RgbImage> {
        self.rasterize_at(self.dpi())
    }

    /// Rasterize at `dpi` with the default axes layout.
    pub fn rasterize_at(&self, dpi: f64) -> Result<RgbImage> {
        self.rasterize_with(dpi, &AxesLayoutConfig::default())
    }

    /// Rasterize at `dpi` with an explicit axes layout.
    pub fn rasterize_with(&self, dpi: f64, layout: &AxesLayoutConfig) -> Result<RgbImage> {
        let (width, height) = self.pixel_size_at(dpi);
        let plan = RasterPlan::new(self, layout, dpi);
        tracing::debug!(width, height, ?plan, "rasterizing figure");

        let mut buf = vec![0u8; width as usize * height as usize * 3];
        {
            let backend = BitMapBackend::with_buffer(&mut buf, (width, height));
            let root = GlyphTextBackend::new(backend).into_drawing_area();
            draw_figure(&root, self, &plan).map_err(render_error)?;
            root.present().map_err(render_error)?;
        }

        RgbImage::from_raw(width, height, buf)
            .ok_or_else(|| PlotError::Render("pixel buffer does not match image size".to_string()))
    }
}

fn render_error<E>(err: DrawingAreaErrorKind<E>) -> PlotError
where
    E: std::error::Error + Send + Sync,
{
    PlotError::Render(err.to_string())
}

/// Format a tick value with precision chosen by magnitude.
pub fn format_tick(val: &f64) -> String {
    let val = *val;
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val < 1e-12 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Pixel sizes and view ranges resolved for one rasterization.
#[derive(Debug, Clone)]
struct RasterPlan {
    limits: Limits,
    scale: f64,
    tick_font: f64,
    label_font: f64,
    title_font: f64,
    tick_count: usize,
    tick_length: i32,
    margin_left: u32,
    margin_right: u32,
    margin_top: u32,
    margin_bottom: u32,
    x_label_area: u32,
    y_label_area: u32,
}

impl RasterPlan {
    fn new(fig: &Figure, layout: &AxesLayoutConfig, dpi: f64) -> Self {
        let scale = dpi / 100.0;
        let px = |v: u32| (v as f64 * scale).round() as u32;
        let axes = fig.axes();
        let limits = axes.view_limits(layout.margin_factor);

        let tick_font = layout.tick_label_size * scale;
        let label_font = layout.axis_label_size * scale;
        let title_font = layout.title_size * scale;
        let tick_length = (layout.tick_length as f64 * scale).round() as i32;
        let outer = px(layout.outer_pad);

        let mut plan = Self {
            limits,
            scale,
            tick_font,
            label_font,
            title_font,
            tick_count: layout.tick_count,
            tick_length,
            margin_left: outer,
            margin_right: outer,
            margin_top: outer,
            margin_bottom: outer,
            x_label_area: px(layout.default_label_area),
            y_label_area: px(layout.default_label_area),
        };

        if fig.is_tight() {
            let pad = px(layout.label_pad);
            let tick_space = tick_length.max(0) as u32 + pad;
            let slack = glyphs::text_extent("0", tick_font).0;

            let y_tick_width = tick_label_candidates(limits.y)
                .iter()
                .map(|s| glyphs::text_extent(s, tick_font).0)
                .max()
                .unwrap_or(0);
            let x_tick_labels = tick_label_candidates(limits.x);
            let last_x_tick_width = glyphs::text_extent(&x_tick_labels[1], tick_font).0;
            let (_, tick_height) = glyphs::text_extent("0", tick_font);
            let (_, label_height) = glyphs::text_extent("X", label_font);

            plan.y_label_area = tick_space + y_tick_width + slack;
            if !axes.ylabel().is_empty() {
                plan.y_label_area += label_height + pad;
            }
            plan.x_label_area = tick_space + tick_height;
            if !axes.xlabel().is_empty() {
                plan.x_label_area += label_height + pad;
            }
            plan.margin_right = outer + last_x_tick_width / 2;
            plan.margin_top = outer + tick_height / 2;
        }

        plan
    }
}

/// Labels at the low end, high end, and middle of a range.
fn tick_label_candidates((lo, hi): (f64, f64)) -> [String; 3] {
    [
        format_tick(&lo),
        format_tick(&hi),
        format_tick(&((lo + hi) / 2.0)),
    ]
}

fn rgb_color(c: Rgb) -> RGBColor {
    RGBColor(c.0, c.1, c.2)
}

fn sans(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
}

fn draw_figure<DB>(
    root: &DrawingArea<DB, Shift>,
    fig: &Figure,
    plan: &RasterPlan,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE)?;

    let axes = fig.axes();
    let Limits { x: (x0, x1), y: (y0, y1) } = plan.limits;

    let mut builder = ChartBuilder::on(root);
    builder
        .margin_left(plan.margin_left)
        .margin_right(plan.margin_right)
        .margin_top(plan.margin_top)
        .margin_bottom(plan.margin_bottom)
        .x_label_area_size(plan.x_label_area)
        .y_label_area_size(plan.y_label_area);
    if let Some(title) = axes.title() {
        builder.caption(title, sans(plan.title_font));
    }
    let mut chart = builder.build_cartesian_2d(x0..x1, y0..y1)?;

    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .x_labels(plan.tick_count)
            .y_labels(plan.tick_count)
            .x_label_formatter(&format_tick)
            .y_label_formatter(&format_tick)
            .set_tick_mark_size(LabelAreaPosition::Left, plan.tick_length)
            .set_tick_mark_size(LabelAreaPosition::Bottom, plan.tick_length)
            .label_style(sans(plan.tick_font))
            .axis_desc_style(sans(plan.label_font));
        if !axes.xlabel().is_empty() {
            mesh.x_desc(axes.xlabel());
        }
        if !axes.ylabel().is_empty() {
            mesh.y_desc(axes.ylabel());
        }
        mesh.draw()?;
    }

    // Frame on all four sides.
    chart.draw_series(std::iter::once(Rectangle::new(
        [(x0, y0), (x1, y1)],
        Color::stroke_width(&BLACK, 1),
    )))?;

    for line in axes.lines() {
        draw_line(&mut chart, line, plan.scale)?;
    }

    Ok(())
}

fn draw_line<DB>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    line: &Line2D,
    scale: f64,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
{
    let points: Vec<(f64, f64)> = line
        .points()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .collect();
    if points.len() < line.len() {
        tracing::warn!(
            dropped = line.len() - points.len(),
            "non-finite points are not drawn"
        );
    }

    let format = line.format();
    let color = rgb_color(format.color);
    let width = (line.linewidth() * scale).round().max(1.0) as u32;

    if format.line {
        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            Color::stroke_width(&color, width),
        ))?;
    }

    if let Some(marker) = format.marker {
        let size = (marker.size() as f64 * scale).round().max(1.0) as u32;
        match marker {
            Marker::Point | Marker::Circle => {
                chart.draw_series(points.iter().map(|&p| Circle::new(p, size, color.filled())))?;
            }
            Marker::Triangle => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|&p| TriangleMarker::new(p, size, color.filled())),
                )?;
            }
            Marker::Cross => {
                chart.draw_series(
                    points
                        .iter()
                        .map(|&p| Cross::new(p, size, Color::stroke_width(&color, width))),
                )?;
            }
        }
    }

    Ok(())
}

/// Backend wrapper that draws text with the built-in bitmap font and
/// forwards everything else to the inner backend.
#[derive(Debug)]
pub struct GlyphTextBackend<DB> {
    inner: DB,
}

impl<DB> GlyphTextBackend<DB> {
    /// Wrap `inner`.
    pub fn new(inner: DB) -> Self {
        Self { inner }
    }
}

fn rotate(transform: FontTransform, x: i32, y: i32) -> (i32, i32) {
    match transform {
        FontTransform::None => (x, y),
        FontTransform::Rotate90 => (-y, x),
        FontTransform::Rotate180 => (-x, -y),
        FontTransform::Rotate270 => (y, -x),
    }
}

impl<DB: DrawingBackend> DrawingBackend for GlyphTextBackend<DB> {
    type ErrorType = DB::ErrorType;

    fn get_size(&self) -> (u32, u32) {
        self.inner.get_size()
    }

    fn ensure_prepared(&mut self) -> std::result::Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.ensure_prepared()
    }

    fn present(&mut self) -> std::result::Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.present()
    }

    fn draw_pixel(
        &mut self,
        point: BackendCoord,
        color: BackendColor,
    ) -> std::result::Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_pixel(point, color)
    }

    fn draw_line<S: plotters_backend::BackendStyle>(
        &mut self,
        from: BackendCoord,
        to: BackendCoord,
        style: &S,
    ) -> std::result::Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_line(from, to, style)
    }

    fn draw_rect<S: plotters_backend::BackendStyle>(
        &mut self,
        upper_left: BackendCoord,
        bottom_right: BackendCoord,
        style: &S,
        fill: bool,
    ) -> std::result::Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_rect(upper_left, bottom_right, style, fill)
    }

    fn draw_path<S: plotters_backend::BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        path: I,
        style: &S,
    ) -> std::result::Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_path(path, style)
    }

    fn draw_circle<S: plotters_backend::BackendStyle>(
        &mut self,
        center: BackendCoord,
        radius: u32,
        style: &S,
        fill: bool,
    ) -> std::result::Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.draw_circle(center, radius, style, fill)
    }

    fn fill_polygon<S: plotters_backend::BackendStyle, I: IntoIterator<Item = BackendCoord>>(
        &mut self,
        vert: I,
        style: &S,
    ) -> std::result::Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.fill_polygon(vert, style)
    }

    fn blit_bitmap(
        &mut self,
        pos: BackendCoord,
        (iw, ih): (u32, u32),
        src: &[u8],
    ) -> std::result::Result<(), DrawingErrorKind<Self::ErrorType>> {
        self.inner.blit_bitmap(pos, (iw, ih), src)
    }

    fn draw_text<TStyle: BackendTextStyle>(
        &mut self,
        text: &str,
        style: &TStyle,
        pos: BackendCoord,
    ) -> std::result::Result<(), DrawingErrorKind<Self::ErrorType>> {
        let color = style.color();
        if color.alpha == 0.0 || text.trim().is_empty() {
            return Ok(());
        }

        let (w, h) = glyphs::text_extent(text, style.size());
        let (w, h) = (w as i32, h as i32);
        let anchor = style.anchor();
        let dx = match anchor.h_pos {
            text_anchor::HPos::Left => 0,
            text_anchor::HPos::Center => -w / 2,
            text_anchor::HPos::Right => -w,
        };
        let dy = match anchor.v_pos {
            text_anchor::VPos::Top => 0,
            text_anchor::VPos::Center => -h / 2,
            text_anchor::VPos::Bottom => -h,
        };

        let (width, height) = self.inner.get_size();
        let transform = style.transform();
        for (x, y) in glyphs::text_pixels(text, style.size()) {
            let (rx, ry) = rotate(transform.clone(), x + dx, y + dy);
            let (px, py) = (pos.0 + rx, pos.1 + ry);
            if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                continue;
            }
            self.inner.draw_pixel((px, py), color.clone())?;
        }
        Ok(())
    }

    fn estimate_text_size<TStyle: BackendTextStyle>(
        &self,
        text: &str,
        style: &TStyle,
    ) -> std::result::Result<(u32, u32), DrawingErrorKind<Self::ErrorType>> {
        Ok(glyphs::text_extent(text, style.size()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::style::DEFAULT_COLOR;

    fn two_point_figure() -> Figure {
        let mut fig = Figure::new(6.0, 4.0);
        fig.axes_mut()
            .xy(&[1.0, 2.0], &[30.0, 25.0])
            .fmt(".-")
            .plot()
            .unwrap();
        fig.axes_mut().set_xlabel("color changes").set_ylabel("FPS");
        fig.tight_layout();
        fig
    }

    fn count(img: &RgbImage, rgb: [u8; 3]) -> usize {
        img.pixels().filter(|p| p.0 == rgb).count()
    }

    #[test]
    fn raster_has_figure_size_and_white_background() {
        let img = two_point_figure().rasterize().unwrap();
        assert_eq!(img.dimensions(), (600, 400));
        assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(599, 399).0, [255, 255, 255]);
    }

    #[test]
    fn series_and_text_are_drawn() {
        let img = two_point_figure().rasterize().unwrap();
        let c0 = [DEFAULT_COLOR.0, DEFAULT_COLOR.1, DEFAULT_COLOR.2];
        assert!(count(&img, c0) > 0);
        assert!(count(&img, [0, 0, 0]) > 0);
    }

    #[test]
    fn dpi_scales_the_raster() {
        let img = two_point_figure().rasterize_at(50.0).unwrap();
        assert_eq!(img.dimensions(), (300, 200));
    }

    #[test]
    fn non_finite_points_are_skipped() {
        let mut fig = Figure::new(2.0, 2.0);
        fig.axes_mut()
            .xy(&[1.0, f64::NAN, 3.0], &[1.0, 2.0, f64::INFINITY])
            .fmt("o")
            .plot()
            .unwrap();
        assert!(fig.rasterize().is_ok());
    }

    #[test]
    fn empty_axes_still_render() {
        let mut fig = Figure::new(3.0, 2.0);
        fig.axes_mut().set_title("empty");
        let img = fig.rasterize().unwrap();
        assert_eq!(img.dimensions(), (300, 200));
    }

    #[test]
    fn tight_layout_fits_wide_labels() {
        let mut fig = Figure::new(6.0, 4.0);
        fig.axes_mut()
            .xy(&[0.0, 1.0], &[100000.0, 250000.0])
            .plot()
            .unwrap();
        fig.axes_mut().set_ylabel("FPS");
        fig.tight_layout();
        let plan = RasterPlan::new(&fig, &AxesLayoutConfig::default(), 100.0);
        let widest = glyphs::text_extent(&format_tick(&257500.0), plan.tick_font).0;
        assert!(plan.y_label_area > widest);
    }

    #[test]
    fn huge_spans_render() {
        let mut fig = Figure::new(3.0, 2.0);
        fig.axes_mut()
            .xy(&[1.0, 2.0], &[-1e308, 1e308])
            .fmt(".-")
            .plot()
            .unwrap();
        fig.tight_layout();
        assert!(fig.rasterize().is_ok());

        let mut fig = Figure::new(3.0, 2.0);
        fig.axes_mut()
            .xy(&[1e308, -1e308], &[1.0, 2.0])
            .fmt("x-")
            .plot()
            .unwrap();
        assert!(fig.rasterize().is_ok());
    }

    #[test]
    fn cross_markers_are_drawn() {
        let mut fig = Figure::new(2.0, 2.0);
        fig.axes_mut()
            .xy(&[1.0, 2.0, 3.0], &[1.0, 4.0, 9.0])
            .fmt("rx")
            .plot()
            .unwrap();
        let img = fig.rasterize().unwrap();
        assert!(img.pixels().any(|p| p.0[0] > 200 && p.0[1] < 50 && p.0[2] < 50));
    }

    #[test]
    fn tick_formatting() {
        assert_eq!(format_tick(&0.0), "0");
        assert_eq!(format_tick(&30.0), "30.0");
        assert_eq!(format_tick(&250.0), "250");
        assert_eq!(format_tick(&0.5), "0.50");
        assert_eq!(format_tick(&123456.0), "1.2e5");
        assert_eq!(format_tick(&f64::NAN), "?");
    }

    #[test]
    fn rotation_turns_quarter() {
        assert_eq!(rotate(FontTransform::Rotate270, 3, 1), (1, -3));
        assert_eq!(rotate(FontTransform::Rotate90, 3, 1), (-1, 3));
        assert_eq!(rotate(FontTransform::None, 3, 1), (3, 1));
    }
}

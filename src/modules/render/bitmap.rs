//! Raster surface backed by the plotters bitmap backend
//!
//! Draw calls go to a back buffer; [`RenderSurface::present`] copies it to the
//! front buffer, which is what exports encode. The chart carries no mesh, no
//! labels and no margin, so the data range fills the whole image.

use super::{Color, ExportFormat, MarkerShape, RenderSurface, ViewBounds};
use crate::constants::{DEFAULT_MARKER_SIZE, PIXELS_PER_UNIT};
use crate::data::Point;
use crate::error::{CanvasError, CanvasResult};
use image::RgbImage;
use log::{debug, info};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::{
    BitMapBackend, ChartBuilder, ChartContext, Circle, EmptyElement, IntoDrawingArea, LineSeries,
    RGBColor, Rectangle,
};
use plotters::style::Color as _;
use std::io::Cursor;
use std::path::Path;

type Chart<'a, 'b> = ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn render_error<E: std::fmt::Display>(error: E) -> CanvasError {
    CanvasError::Render(error.to_string())
}

fn units_to_pixels(units: u32) -> CanvasResult<u32> {
    units.checked_mul(PIXELS_PER_UNIT).ok_or_else(|| {
        CanvasError::Config(format!("canvas of {} units exceeds the pixel range", units))
    })
}

impl From<Color> for RGBColor {
    fn from(color: Color) -> Self {
        RGBColor(color.r, color.g, color.b)
    }
}

pub struct BitmapSurface {
    width: u32,
    height: u32,
    back: Vec<u8>,
    front: Vec<u8>,
    bounds: ViewBounds,
    marker_size: u32,
}

impl BitmapSurface {
    /// A white surface of `width` x `height` pixels
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 3;
        Self {
            width,
            height,
            back: vec![255; len],
            front: vec![255; len],
            bounds: ViewBounds {
                x_min: 0.0,
                x_max: width as f64,
                y_min: 0.0,
                y_max: height as f64,
            },
            marker_size: DEFAULT_MARKER_SIZE,
        }
    }

    /// A surface sized for a canvas of `width_units` x `height_units`
    pub fn for_canvas(width_units: u32, height_units: u32) -> CanvasResult<Self> {
        let mut surface = Self::new(units_to_pixels(width_units)?, units_to_pixels(height_units)?);
        surface.bounds = ViewBounds::for_canvas(width_units, height_units);
        Ok(surface)
    }

    pub fn with_marker_size(mut self, marker_size: u32) -> Self {
        self.marker_size = marker_size;
        self
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The presented frame as an RGB image
    pub fn snapshot(&self) -> CanvasResult<RgbImage> {
        RgbImage::from_raw(self.width, self.height, self.front.clone())
            .ok_or_else(|| CanvasError::Render("frame buffer does not match surface size".to_string()))
    }

    fn with_chart<F>(&mut self, draw: F) -> CanvasResult<()>
    where
        F: FnOnce(&mut Chart<'_, '_>) -> CanvasResult<()>,
    {
        let bounds = self.bounds;
        let root = BitMapBackend::with_buffer(&mut self.back, (self.width, self.height))
            .into_drawing_area();
        {
            let mut chart = ChartBuilder::on(&root)
                .margin(0)
                .build_cartesian_2d(bounds.x_min..bounds.x_max, bounds.y_min..bounds.y_max)
                .map_err(render_error)?;
            draw(&mut chart)?;
        }
        root.present().map_err(render_error)
    }
}

impl RenderSurface for BitmapSurface {
    fn clear_surface(&mut self) -> CanvasResult<()> {
        self.back.fill(255);
        Ok(())
    }

    fn set_view_bounds(&mut self, bounds: ViewBounds) {
        self.bounds = bounds;
    }

    fn draw_polyline(&mut self, points: &[Point], color: Color) -> CanvasResult<()> {
        if points.len() < 2 {
            return Ok(());
        }
        let style = RGBColor::from(color).stroke_width(1);
        self.with_chart(|chart| {
            chart
                .draw_series(LineSeries::new(points.iter().map(|p| (p.x, p.y)), style))
                .map_err(render_error)?;
            Ok(())
        })
    }

    fn draw_markers(&mut self, points: &[Point], color: Color, shape: MarkerShape) -> CanvasResult<()> {
        if points.is_empty() {
            return Ok(());
        }
        let style = RGBColor::from(color).filled();
        let size = self.marker_size as i32;
        self.with_chart(|chart| {
            match shape {
                MarkerShape::Circle => chart
                    .draw_series(points.iter().map(|p| Circle::new((p.x, p.y), size, style)))
                    .map_err(render_error)?,
                MarkerShape::Square => chart
                    .draw_series(points.iter().map(|p| {
                        EmptyElement::at((p.x, p.y))
                            + Rectangle::new([(-size, -size), (size, size)], style)
                    }))
                    .map_err(render_error)?,
            };
            Ok(())
        })
    }

    fn present(&mut self) -> CanvasResult<()> {
        self.front.copy_from_slice(&self.back);
        debug!("presented {}x{} frame", self.width, self.height);
        Ok(())
    }

    fn export_to_file(&self, path: &Path, format: ExportFormat) -> CanvasResult<()> {
        self.snapshot()?.save_with_format(path, format.into())?;
        info!("saved {:?} snapshot to {}", format, path.display());
        Ok(())
    }

    fn export_to_buffer(&self, format: ExportFormat) -> CanvasResult<Vec<u8>> {
        let mut bytes = Vec::new();
        self.snapshot()?
            .write_to(&mut Cursor::new(&mut bytes), format.into())?;
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pt;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

    fn dark_pixels(surface: &BitmapSurface) -> usize {
        let image = surface.snapshot().unwrap();
        image.pixels().filter(|p| p.0 != [255, 255, 255]).count()
    }

    #[test]
    fn test_new_surface_is_white() {
        let surface = BitmapSurface::for_canvas(2, 1).unwrap();
        assert_eq!(surface.dimensions(), (200, 100));
        assert_eq!(dark_pixels(&surface), 0);
    }

    #[test]
    fn test_drawing_is_visible_only_after_present() {
        let mut surface = BitmapSurface::for_canvas(2, 2).unwrap();
        surface
            .draw_polyline(&[pt!(10, 10), pt!(190, 190)], Color::BLACK)
            .unwrap();
        assert_eq!(dark_pixels(&surface), 0);

        surface.present().unwrap();
        assert!(dark_pixels(&surface) > 100);

        surface.clear_surface().unwrap();
        surface.present().unwrap();
        assert_eq!(dark_pixels(&surface), 0);
    }

    #[test]
    fn test_markers_draw_in_colour() {
        let mut surface = BitmapSurface::for_canvas(1, 1).unwrap().with_marker_size(4);
        surface
            .draw_markers(&[pt!(50, 50)], Color::RED, MarkerShape::Square)
            .unwrap();
        surface
            .draw_markers(&[pt!(20, 80)], Color::BLUE, MarkerShape::Circle)
            .unwrap();
        surface.present().unwrap();

        let image = surface.snapshot().unwrap();
        assert!(image.pixels().any(|p| p.0 == [255, 0, 0]));
        assert!(image.pixels().any(|p| p.0 == [0, 0, 255]));
    }

    #[test]
    fn test_degenerate_inputs_draw_nothing() {
        let mut surface = BitmapSurface::for_canvas(1, 1).unwrap();
        surface.draw_polyline(&[], Color::BLACK).unwrap();
        surface.draw_polyline(&[pt!(50, 50)], Color::BLACK).unwrap();
        surface.draw_markers(&[], Color::BLACK, MarkerShape::Circle).unwrap();
        surface.present().unwrap();
        assert_eq!(dark_pixels(&surface), 0);
    }

    #[test]
    fn test_oversized_canvas_is_rejected() {
        assert!(matches!(
            BitmapSurface::for_canvas(u32::MAX / 10, 1),
            Err(CanvasError::Config(_))
        ));
        assert!(matches!(
            BitmapSurface::for_canvas(1, u32::MAX),
            Err(CanvasError::Config(_))
        ));
    }

    #[test]
    fn test_export_formats() {
        let surface = BitmapSurface::for_canvas(1, 1).unwrap();

        let png = surface.export_to_buffer(ExportFormat::Png).unwrap();
        assert_eq!(png[..8], PNG_SIGNATURE);

        let bmp = surface.export_to_buffer(ExportFormat::Bmp).unwrap();
        assert_eq!(&bmp[..2], b"BM");
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");
        let surface = BitmapSurface::for_canvas(1, 1).unwrap();

        assert!(matches!(
            surface.export_to_file(&path, ExportFormat::Png),
            Err(CanvasError::Image(_))
        ));
    }
}

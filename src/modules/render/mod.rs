//! Rendering collaborator
//!
//! The canvas only talks to a [`RenderSurface`]; it never touches pixels
//! itself. [`bitmap::BitmapSurface`] is the raster implementation used for
//! PNG / BMP export.
//!
//! - [bitmap](bitmap/index.html) - plotters-backed RGB surface
//! - [picker](picker/index.html) - marker hit notifications for pointer presses

pub mod bitmap;
pub mod picker;

pub use bitmap::BitmapSurface;
pub use picker::pick_marker;

use crate::constants::{PIXELS_PER_UNIT, VIEW_ORIGIN};
use crate::data::Point;
use crate::error::CanvasResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// An opaque RGB colour, serialised as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 128, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(color: Color) -> Self {
        [color.r, color.g, color.b]
    }
}

/// Colours for the four drawable layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub curve_line: Color,
    pub curve_dot: Color,
    pub anchor_line: Color,
    pub anchor_dot: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            curve_line: Color::BLACK,
            curve_dot: Color::new(31, 119, 180),
            anchor_line: Color::new(255, 127, 14),
            anchor_dot: Color::new(44, 160, 44),
        }
    }
}

impl Palette {
    /// Colours used while editing interactively
    pub fn interactive() -> Self {
        Self {
            curve_line: Color::RED,
            curve_dot: Color::BLUE,
            anchor_line: Color::GREEN,
            anchor_dot: Color::BLACK,
        }
    }
}

/// Which layers `update_view` draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewFlags {
    pub anchor_line: bool,
    pub anchor_dot: bool,
    pub curve_line: bool,
    pub curve_dot: bool,
}

impl Default for ViewFlags {
    fn default() -> Self {
        Self {
            anchor_line: true,
            anchor_dot: true,
            curve_line: true,
            curve_dot: true,
        }
    }
}

impl ViewFlags {
    /// Only the curve polyline
    pub fn curve_only() -> Self {
        Self {
            anchor_line: false,
            anchor_dot: false,
            curve_line: true,
            curve_dot: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerShape {
    Circle,
    Square,
}

/// Visible data range of the surface, y growing upward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewBounds {
    /// Bounds of a canvas measured in units of [`PIXELS_PER_UNIT`] pixels
    pub fn for_canvas(width_units: u32, height_units: u32) -> Self {
        Self {
            x_min: VIEW_ORIGIN,
            x_max: PIXELS_PER_UNIT as f64 * width_units as f64,
            y_min: VIEW_ORIGIN,
            y_max: PIXELS_PER_UNIT as f64 * height_units as f64,
        }
    }

    pub fn contains(&self, point: &Point) -> bool {
        (self.x_min..=self.x_max).contains(&point.x) && (self.y_min..=self.y_max).contains(&point.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Png,
    Bmp,
}

impl From<ExportFormat> for image::ImageFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Png => image::ImageFormat::Png,
            ExportFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

/// Drawing target used by the canvas
pub trait RenderSurface {
    fn clear_surface(&mut self) -> CanvasResult<()>;

    fn set_view_bounds(&mut self, bounds: ViewBounds);

    fn draw_polyline(&mut self, points: &[Point], color: Color) -> CanvasResult<()>;

    fn draw_markers(&mut self, points: &[Point], color: Color, shape: MarkerShape) -> CanvasResult<()>;

    /// Make everything drawn since the last clear visible to exports
    fn present(&mut self) -> CanvasResult<()>;

    fn export_to_file(&self, path: &Path, format: ExportFormat) -> CanvasResult<()>;

    fn export_to_buffer(&self, format: ExportFormat) -> CanvasResult<Vec<u8>>;
}

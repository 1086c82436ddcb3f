//! The editing canvas: anchors, gesture handling and drawing in one place
//!
//! # Example
//!
//! ```rust,no_run
//! use bezier_canvas::modules::render::ViewFlags;
//! use bezier_canvas::BezierCanvas;
//!
//! // a 6 x 6 canvas is 600 x 600 pixels
//! let mut canvas = BezierCanvas::new(6, 6).unwrap();
//! canvas.add_anchor(0.0, 0.0);
//! canvas.add_anchor(340.0, 20.0);
//! canvas.add_anchor(460.0, 46.0);
//! canvas.add_anchor(600.0, 600.0);
//!
//! canvas.update_view(ViewFlags::curve_only()).unwrap();
//! canvas.save_to_file("new.png").unwrap();
//! ```

use crate::config::CanvasConfig;
use crate::constants::BINARY_THRESHOLD;
use crate::data::{CurveModel, Point};
use crate::error::CanvasResult;
use crate::modules::interaction::{Command, InteractionController, Phase, PointerEvent};
use crate::modules::render::{
    pick_marker, BitmapSurface, ExportFormat, MarkerShape, Palette, RenderSurface, ViewBounds,
    ViewFlags,
};
use crate::modules::session::{EventSource, Gesture};
use log::{debug, info};
use nalgebra::DMatrix;
use std::path::Path;

pub struct BezierCanvas<S: RenderSurface = BitmapSurface> {
    model: CurveModel,
    controller: InteractionController,
    surface: S,
    bounds: ViewBounds,
    palette: Palette,
    view: ViewFlags,
    pick_radius: f64,
}

impl BezierCanvas<BitmapSurface> {
    /// A canvas of `width_units` x `height_units`, 100 pixels per unit
    pub fn new(width_units: u32, height_units: u32) -> CanvasResult<Self> {
        let config = CanvasConfig::default();
        let surface = BitmapSurface::for_canvas(width_units, height_units)?;
        Ok(Self::build(width_units, height_units, &config, surface))
    }

    pub fn with_config(width_units: u32, height_units: u32, config: CanvasConfig) -> CanvasResult<Self> {
        let surface = BitmapSurface::for_canvas(width_units, height_units)?
            .with_marker_size(config.marker_size);
        Self::with_surface(width_units, height_units, config, surface)
    }
}

impl<S: RenderSurface> BezierCanvas<S> {
    /// A canvas drawing onto a caller-provided surface
    pub fn with_surface(
        width_units: u32,
        height_units: u32,
        config: CanvasConfig,
        surface: S,
    ) -> CanvasResult<Self> {
        config.validate()?;
        Ok(Self::build(width_units, height_units, &config, surface))
    }

    fn build(width_units: u32, height_units: u32, config: &CanvasConfig, surface: S) -> Self {
        Self {
            model: CurveModel::new(config.resolution),
            controller: InteractionController::from_config(config),
            surface,
            bounds: ViewBounds::for_canvas(width_units, height_units),
            palette: config.palette,
            view: config.view,
            pick_radius: config.pick_radius,
        }
    }

    pub fn model(&self) -> &CurveModel {
        &self.model
    }

    pub fn anchors(&self) -> &[Point] {
        self.model.anchors()
    }

    pub fn curve_points(&self) -> &[Point] {
        self.model.evaluate()
    }

    pub fn is_closed(&self) -> bool {
        self.controller.is_closed()
    }

    pub fn phase(&self) -> Phase {
        self.controller.phase()
    }

    pub fn bounds(&self) -> ViewBounds {
        self.bounds
    }

    pub fn palette(&self) -> Palette {
        self.palette
    }

    pub fn view_flags(&self) -> ViewFlags {
        self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn add_anchor(&mut self, x: f64, y: f64) {
        self.model.add_anchor(x, y);
        self.controller.sync_with(&self.model);
    }

    pub fn delete_anchor_at(&mut self, index: isize) -> CanvasResult<()> {
        self.model.delete_anchor_at(index)?;
        self.controller.sync_with(&self.model);
        Ok(())
    }

    pub fn replace_anchor_at(&mut self, index: isize, x: f64, y: f64) -> CanvasResult<()> {
        self.model.replace_anchor_at(index, x, y)?;
        self.controller.sync_with(&self.model);
        Ok(())
    }

    pub fn set_colors(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// Redraw with the given layers; later redraws triggered by gestures reuse them
    pub fn update_view(&mut self, view: ViewFlags) -> CanvasResult<()> {
        self.view = view;
        self.redraw()
    }

    /// Clear the surface and draw the curve, then the anchors, on top
    pub fn redraw(&mut self) -> CanvasResult<()> {
        let curve = self.model.evaluate();
        let anchors = self.model.anchors();

        self.surface.clear_surface()?;
        self.surface.set_view_bounds(self.bounds);
        if self.view.curve_line {
            self.surface.draw_polyline(curve, self.palette.curve_line)?;
        }
        if self.view.curve_dot {
            self.surface
                .draw_markers(curve, self.palette.curve_dot, MarkerShape::Circle)?;
        }
        if self.view.anchor_line {
            self.surface.draw_polyline(anchors, self.palette.anchor_line)?;
        }
        if self.view.anchor_dot {
            self.surface
                .draw_markers(anchors, self.palette.anchor_dot, MarkerShape::Square)?;
        }
        self.surface.present()
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> CanvasResult<()> {
        self.export(path, ExportFormat::Png)
    }

    pub fn export(&self, path: impl AsRef<Path>, format: ExportFormat) -> CanvasResult<()> {
        self.surface.export_to_file(path.as_ref(), format)
    }

    pub fn to_png_bytes(&self) -> CanvasResult<Vec<u8>> {
        self.surface.export_to_buffer(ExportFormat::Png)
    }

    /// The presented frame as a black/white matrix (rows x columns), `true` for light pixels
    pub fn to_binary_matrix(&self) -> CanvasResult<DMatrix<bool>> {
        let png = self.to_png_bytes()?;
        let luma = image::load_from_memory_with_format(&png, image::ImageFormat::Png)?.to_luma8();
        let (width, height) = luma.dimensions();

        Ok(DMatrix::from_fn(height as usize, width as usize, |row, col| {
            luma.get_pixel(col as u32, row as u32).0[0] >= BINARY_THRESHOLD
        }))
    }

    /// Feed one raw pointer event through the gesture state machine
    pub fn handle_event(&mut self, event: PointerEvent) -> CanvasResult<()> {
        let commands = self.controller.handle(&event, &mut self.model)?;
        if commands.contains(&Command::Redraw) {
            self.redraw()?;
        }
        Ok(())
    }

    /// Pointer press; raises a hit when it lands on a visible anchor marker
    pub fn press(&mut self, x: f64, y: f64) -> CanvasResult<()> {
        let pos = Point::new(x, y);
        let in_bounds = self.bounds.contains(&pos);
        self.handle_event(PointerEvent::Press { pos, in_bounds })?;

        if in_bounds && self.view.anchor_dot {
            if let Some(marker_index) = pick_marker(self.model.anchors(), pos, self.pick_radius) {
                debug!("press picked marker {}", marker_index);
                self.handle_event(PointerEvent::Hit { marker_index })?;
            }
        }
        Ok(())
    }

    pub fn release(&mut self, x: f64, y: f64) -> CanvasResult<()> {
        let pos = Point::new(x, y);
        let in_bounds = self.bounds.contains(&pos);
        self.handle_event(PointerEvent::Release { pos, in_bounds })
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> CanvasResult<()> {
        let pos = Point::new(x, y);
        let in_bounds = self.bounds.contains(&pos);
        self.handle_event(PointerEvent::Move { pos, in_bounds })
    }

    pub fn apply_gesture(&mut self, gesture: Gesture) -> CanvasResult<()> {
        match gesture {
            Gesture::Press { x, y } => self.press(x, y),
            Gesture::Release { x, y } => self.release(x, y),
            Gesture::Move { x, y } => self.move_to(x, y),
            Gesture::Click { x, y } => {
                self.press(x, y)?;
                self.release(x, y)
            }
            Gesture::Drag { from, to, steps } => {
                self.press(from.x, from.y)?;
                for p in Gesture::drag_path(from, to, steps) {
                    self.move_to(p.x, p.y)?;
                }
                self.release(to.x, to.y)
            }
        }
    }

    /// Interactive mode: draw with the interactive palette and consume gestures
    /// until the source runs dry
    pub fn show(&mut self, mut source: impl EventSource) -> CanvasResult<()> {
        self.set_colors(Palette::interactive());
        self.redraw()?;

        let mut count = 0usize;
        while let Some(gesture) = source.next_gesture() {
            self.apply_gesture(gesture)?;
            count += 1;
        }
        info!(
            "session ended after {} gestures with {} anchors",
            count,
            self.model.len()
        );
        Ok(())
    }
}

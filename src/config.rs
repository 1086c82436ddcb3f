//! Canvas configuration, loadable from JSON.
//!
//! Every field has a default, so a config file only needs the values it changes:
//!
//! ```rust
//! use bezier_canvas::CanvasConfig;
//!
//! let config = CanvasConfig::from_json_str(r#"{ "tolerance": 0.02, "resolution": 100 }"#).unwrap();
//! assert_eq!(config.resolution, 100);
//! assert_eq!(config.pick_radius, 5.0);
//! ```

use crate::constants::{DEFAULT_MARKER_SIZE, DEFAULT_PICK_RADIUS, DEFAULT_RESOLUTION, DEFAULT_TOLERANCE};
use crate::data::curve_model::HitTest;
use crate::error::{CanvasError, CanvasResult};
use crate::modules::render::{Palette, ViewFlags};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Hit-test tolerance, in the same units as the anchor coordinates
    pub tolerance: f64,
    /// Number of curve samples over t in [0, 1]
    pub resolution: usize,
    /// Radius within which a press raises a hit on a marker
    pub pick_radius: f64,
    pub hit_test: HitTest,
    pub palette: Palette,
    pub view: ViewFlags,
    /// Marker half-size in pixels
    pub marker_size: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            resolution: DEFAULT_RESOLUTION,
            pick_radius: DEFAULT_PICK_RADIUS,
            hit_test: HitTest::default(),
            palette: Palette::default(),
            view: ViewFlags::default(),
            marker_size: DEFAULT_MARKER_SIZE,
        }
    }
}

impl CanvasConfig {
    pub fn from_json_str(json: &str) -> CanvasResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> CanvasResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> CanvasResult<()> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(CanvasError::Config(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if !self.pick_radius.is_finite() || self.pick_radius <= 0.0 {
            return Err(CanvasError::Config(format!(
                "pick_radius must be positive, got {}",
                self.pick_radius
            )));
        }
        if self.resolution < 2 {
            return Err(CanvasError::Config(format!(
                "resolution must be at least 2, got {}",
                self.resolution
            )));
        }
        Ok(())
    }
}

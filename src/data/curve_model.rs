//! The anchor list and the Bézier curve sampled from it.

use crate::constants::DEFAULT_RESOLUTION;
use crate::data::point::Point;
use crate::error::{CanvasError, CanvasResult};
use crate::modules::eval::bernstein;
use serde::{Deserialize, Serialize};

/// Rule used to decide whether a pointer position is "on" an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HitTest {
    /// Both axis distances strictly below the tolerance
    #[default]
    AxisBox,
    /// x distance below the tolerance, y compared one-sided: `anchor.y - y < tolerance`.
    /// Matches editors built against the old precedence slip `abs(a - b < tol)`.
    Legacy,
}

impl HitTest {
    pub fn matches(&self, anchor: &Point, x: f64, y: f64, tolerance: f64) -> bool {
        let x_hit = (anchor.x - x).abs() < tolerance;
        match self {
            Self::AxisBox => x_hit && (anchor.y - y).abs() < tolerance,
            Self::Legacy => x_hit && anchor.y - y < tolerance,
        }
    }
}

/// Ordered anchors plus the curve sampled from them
///
/// The sample is recomputed in full after every mutation and is never
/// patched incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveModel {
    anchors: Vec<Point>,
    t_values: Vec<f64>,
    curve: Vec<Point>,
}

impl Default for CurveModel {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION)
    }
}

impl CurveModel {
    /// Create an empty model sampling the curve at `resolution` parameters
    pub fn new(resolution: usize) -> Self {
        Self {
            anchors: Vec::new(),
            t_values: bernstein::sample_parameters(resolution),
            curve: Vec::new(),
        }
    }

    pub fn anchors(&self) -> &[Point] {
        &self.anchors
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn first(&self) -> Option<Point> {
        self.anchors.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.anchors.last().copied()
    }

    pub fn resolution(&self) -> usize {
        self.t_values.len()
    }

    /// Append an anchor at the end of the list
    pub fn add_anchor(&mut self, x: f64, y: f64) {
        self.anchors.push(Point::new(x, y));
        self.recompute();
    }

    /// Remove the anchor at `index`; negative indices count from the end
    pub fn delete_anchor_at(&mut self, index: isize) -> CanvasResult<Point> {
        let i = self.resolve_index(index)?;
        let removed = self.anchors.remove(i);
        self.recompute();
        Ok(removed)
    }

    /// Overwrite the anchor at `index`; negative indices count from the end
    pub fn replace_anchor_at(&mut self, index: isize, x: f64, y: f64) -> CanvasResult<()> {
        let i = self.resolve_index(index)?;
        self.anchors[i] = Point::new(x, y);
        self.recompute();
        Ok(())
    }

    /// Index of the first anchor inside the tolerance box around (x, y)
    pub fn find_nearest(&self, x: f64, y: f64, tolerance: f64) -> Option<usize> {
        self.find_nearest_with(x, y, tolerance, HitTest::AxisBox)
    }

    /// Same as [`find_nearest`](Self::find_nearest) with an explicit hit-test rule
    pub fn find_nearest_with(&self, x: f64, y: f64, tolerance: f64, rule: HitTest) -> Option<usize> {
        self.anchors
            .iter()
            .position(|anchor| rule.matches(anchor, x, y, tolerance))
    }

    /// Whether (x, y) hits the start anchor of the path
    pub fn is_first_anchor(&self, x: f64, y: f64, tolerance: f64, rule: HitTest) -> bool {
        self.anchors
            .first()
            .is_some_and(|first| rule.matches(first, x, y, tolerance))
    }

    /// The sampled curve
    pub fn evaluate(&self) -> &[Point] {
        &self.curve
    }

    fn resolve_index(&self, index: isize) -> CanvasResult<usize> {
        let len = self.anchors.len();
        let resolved = if index < 0 {
            index + len as isize
        } else {
            index
        };
        if resolved < 0 || resolved >= len as isize {
            return Err(CanvasError::OutOfRange { index, len });
        }
        Ok(resolved as usize)
    }

    fn recompute(&mut self) {
        self.curve = bernstein::evaluate(&self.anchors, &self.t_values);
    }
}

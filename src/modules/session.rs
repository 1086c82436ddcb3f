//! Gesture scripts for driving a canvas without a window
//!
//! A script is a JSON array of gestures:
//!
//! ```json
//! [
//!     { "kind": "click", "x": 100, "y": 100 },
//!     { "kind": "drag", "from": { "x": 100, "y": 100 }, "to": { "x": 300, "y": 250 }, "steps": 5 },
//!     { "kind": "press", "x": 300, "y": 250 },
//!     { "kind": "release", "x": 300, "y": 250 }
//! ]
//! ```

use crate::data::Point;
use crate::error::CanvasResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_steps() -> usize {
    1
}

/// One user gesture, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gesture {
    Press { x: f64, y: f64 },
    Release { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    /// Press and release at the same spot
    Click { x: f64, y: f64 },
    /// Press at `from`, move to `to` in `steps` equal moves, release at `to`
    Drag {
        from: Point,
        to: Point,
        #[serde(default = "default_steps")]
        steps: usize,
    },
}

impl Gesture {
    /// Intermediate pointer positions of a drag, ending at `to`
    pub fn drag_path(from: Point, to: Point, steps: usize) -> Vec<Point> {
        let steps = steps.max(1);
        (1..=steps)
            .map(|i| {
                let s = i as f64 / steps as f64;
                Point::new(from.x + (to.x - from.x) * s, from.y + (to.y - from.y) * s)
            })
            .collect()
    }
}

/// Supplies gestures until the user is done
///
/// Returning `None` plays the role of closing the window.
pub trait EventSource {
    fn next_gesture(&mut self) -> Option<Gesture>;
}

impl<I> EventSource for I
where
    I: Iterator<Item = Gesture>,
{
    fn next_gesture(&mut self) -> Option<Gesture> {
        self.next()
    }
}

pub fn parse_script(json: &str) -> CanvasResult<Vec<Gesture>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_script(path: impl AsRef<Path>) -> CanvasResult<Vec<Gesture>> {
    let json = fs::read_to_string(path)?;
    parse_script(&json)
}

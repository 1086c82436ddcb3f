//! Marker picking
//!
//! A press that lands within `radius` of an anchor marker produces a hit
//! notification for that marker, the way a plotting toolkit reports a pick on
//! a scatter artist.

use crate::data::Point;

/// Index of the first marker within `radius` of `pos`
pub fn pick_marker(markers: &[Point], pos: Point, radius: f64) -> Option<usize> {
    markers.iter().position(|marker| marker.distance(&pos) <= radius)
}

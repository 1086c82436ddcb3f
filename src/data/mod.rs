//! Core data structures: points and the anchor/curve model.

pub mod curve_model;
pub mod macros;
pub mod point;

pub use curve_model::CurveModel;
pub use point::Point;

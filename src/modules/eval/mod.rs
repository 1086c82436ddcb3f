//! Curve evaluation
//!
//! - [Bernstein](bernstein/index.html) - full-degree Bézier evaluation through the Bernstein basis

pub mod bernstein;

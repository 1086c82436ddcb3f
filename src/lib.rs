// Module definitions
pub mod canvas;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use canvas::BezierCanvas;
pub use config::CanvasConfig;
pub use data::curve_model::CurveModel;
pub use data::point::Point;
pub use error::{CanvasError, CanvasResult};

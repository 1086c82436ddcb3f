//! Error type for the canvas crate.

use thiserror::Error;

/// Errors raised by the curve model, the renderer and configuration loading
#[derive(Debug, Error)]
pub enum CanvasError {
    /// An anchor index fell outside the anchor list
    #[error("anchor index {index} out of range for {len} anchors")]
    OutOfRange { index: isize, len: usize },

    /// Reading or writing a file failed
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the raster snapshot failed
    #[error("image export failed: {0}")]
    Image(#[from] image::ImageError),

    /// The drawing backend rejected a draw call
    #[error("render error: {0}")]
    Render(String),

    /// A configuration value is unusable
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A configuration or gesture script is not valid JSON
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CanvasResult<T> = Result<T, CanvasError>;

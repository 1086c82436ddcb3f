//! Default values shared by the model, the controller and the renderer.

/// Number of curve samples taken over `t ∈ [0, 1]`.
pub const DEFAULT_RESOLUTION: usize = 50;

/// Hit-test tolerance in device units (pixels of the default view).
pub const DEFAULT_TOLERANCE: f64 = 10.0;

/// Radius within which a press on a marker raises a hit notification.
pub const DEFAULT_PICK_RADIUS: f64 = 5.0;

/// Pixels per canvas unit. A 6 x 6 canvas is 600 x 600 pixels.
pub const PIXELS_PER_UNIT: u32 = 100;

/// Lower bound of both view axes.
pub const VIEW_ORIGIN: f64 = 1.0;

/// Marker half-size in pixels.
pub const DEFAULT_MARKER_SIZE: u32 = 3;

/// Luma threshold separating dark and light pixels in the binary matrix.
pub const BINARY_THRESHOLD: u8 = 128;

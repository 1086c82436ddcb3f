//! This module provides convenient macros for creating points and anchor lists.

/// Macro for creating a Point
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64)
    };
}

/// Macro for creating a curve model from a list of anchor coordinates
///
/// ```
/// use bezier_canvas::anchors;
///
/// let model = anchors!([(0, 0), (340, 20), (460, 46), (600, 600)]);
/// assert_eq!(model.len(), 4);
/// ```
#[macro_export]
macro_rules! anchors {
    ([$(($x:expr, $y:expr)),* $(,)?]) => {{
        let mut model = $crate::data::CurveModel::default();
        $(model.add_anchor($x as f64, $y as f64);)*
        model
    }};

    // Use a custom sampling resolution
    ([$(($x:expr, $y:expr)),* $(,)?], $resolution:expr) => {{
        let mut model = $crate::data::CurveModel::new($resolution);
        $(model.add_anchor($x as f64, $y as f64);)*
        model
    }};
}

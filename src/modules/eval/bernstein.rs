//! Evaluate a Bézier curve of arbitrary degree with the Bernstein basis
//!
//! For control points P0..Pn and a parameter t the curve point is
//!
//! B(t) = Σ_{k=0}^{n} P_k · C(n,k) · t^k · (1-t)^{n-k}
//!
//! The weights for every sample parameter are laid out as a basis matrix
//! (one row per sample, one column per control point), so the whole sample
//! is two matrix-vector products, one per coordinate. The curve is always
//! recomputed in full; the anchor counts of an interactive editor are small.
//!
//! # Example
//!
//! ```rust
//! use bezier_canvas::modules::eval::bernstein::{evaluate, sample_parameters};
//! use bezier_canvas::pt;
//!
//! let anchors = vec![pt!(0, 0), pt!(50, 100), pt!(100, 0)];
//! let samples = evaluate(&anchors, &sample_parameters(3));
//!
//! assert_eq!(samples[1], pt!(50, 50));
//! ```

use crate::data::Point;
use nalgebra::{DMatrix, DVector};

/// Binomial coefficient C(n, k) as a float
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// `resolution` parameters evenly spaced over [0, 1], both ends included
pub fn sample_parameters(resolution: usize) -> Vec<f64> {
    match resolution {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => (0..resolution)
            .map(|i| i as f64 / (resolution - 1) as f64)
            .collect(),
    }
}

/// Bernstein weights of the given degree, one row per parameter value
pub fn basis_matrix(t_values: &[f64], degree: usize) -> DMatrix<f64> {
    let coefficients: Vec<f64> = (0..=degree).map(|k| binomial(degree, k)).collect();
    DMatrix::from_fn(t_values.len(), degree + 1, |i, k| {
        let t = t_values[i];
        // powi(0) is 1 even for a zero base, which keeps the endpoints exact
        coefficients[k] * t.powi(k as i32) * (1.0 - t).powi((degree - k) as i32)
    })
}

/// Sample the Bézier curve defined by `anchors` at every parameter in `t_values`
pub fn evaluate(anchors: &[Point], t_values: &[f64]) -> Vec<Point> {
    if anchors.is_empty() {
        return Vec::new();
    }

    let basis = basis_matrix(t_values, anchors.len() - 1);
    let xs = DVector::from_iterator(anchors.len(), anchors.iter().map(|p| p.x));
    let ys = DVector::from_iterator(anchors.len(), anchors.iter().map(|p| p.y));

    let bx = &basis * xs;
    let by = &basis * ys;

    bx.iter()
        .zip(by.iter())
        .map(|(&x, &y)| Point::new(x, y))
        .collect()
}

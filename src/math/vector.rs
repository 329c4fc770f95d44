use ndarray::{Array1, Array2};

use crate::error::Result;
use crate::math::matrix::ensure_len;

/// Euclidean norm.
pub fn norm_l2(v: &Array1<f64>) -> f64 {
    v.dot(v).sqrt()
}

/// Sum of absolute elementwise differences, `Σ |a_i - b_i|`.
///
/// Returns [`SolverError::LengthMismatch`](crate::error::SolverError::LengthMismatch)
/// when `b` is not as long as `a`.
pub fn abs_diff_sum(a: &Array1<f64>, b: &Array1<f64>) -> Result<f64> {
    ensure_len(b, a.len())?;
    Ok(a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum())
}

/// `‖b - A·x‖₂`
pub fn residual_norm(a: &Array2<f64>, x: &Array1<f64>, b: &Array1<f64>) -> f64 {
    let r = b - &a.dot(x);
    norm_l2(&r)
}

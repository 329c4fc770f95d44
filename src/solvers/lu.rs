//! Doolittle LU decomposition without pivoting.
//!
//! [`lu_decompose`] packs both factors into one matrix: the strict lower
//! triangle holds the multipliers of the unit lower-triangular `L` and the
//! upper triangle, diagonal included, holds `U`. [`solve_lu`] and [`inv_lu`]
//! consume that packed form directly.
use log::{debug, info};
use ndarray::{Array1, Array2};

use crate::error::Result;
use crate::math::{ensure_len, ensure_square, residual_norm};
use crate::solvers::{LinearSolver, SolveStatus, Solution};

/// Factor a square matrix into its packed Doolittle form.
///
/// A zero `U[i][i]` is not guarded against; it propagates infinities or NaN
/// into the multipliers below it.
pub fn lu_decompose(a: &Array2<f64>) -> Result<Array2<f64>> {
    let n = ensure_square(a)?;
    debug!("lu_decompose: n = {}", n);

    let mut m = a.clone();
    for i in 0..n {
        for j in i..n {
            // U[i][j]
            let sum: f64 = (0..i).map(|k| m[(i, k)] * m[(k, j)]).sum();
            m[(i, j)] -= sum;

            // L[j][i]
            if j != i {
                let sum: f64 = (0..i).map(|k| m[(j, k)] * m[(k, i)]).sum();
                m[(j, i)] = (m[(j, i)] - sum) / m[(i, i)];
            }
        }
    }
    Ok(m)
}

/// Split a packed LU matrix into explicit `(L, U)` factors.
pub fn extract_lu(packed: &Array2<f64>) -> (Array2<f64>, Array2<f64>) {
    let (rows, cols) = packed.dim();
    let mut l = Array2::<f64>::zeros((rows, cols));
    let mut u = Array2::<f64>::zeros((rows, cols));
    for i in 0..rows {
        for j in 0..cols {
            if j < i {
                l[(i, j)] = packed[(i, j)];
            } else {
                u[(i, j)] = packed[(i, j)];
            }
        }
        if i < cols {
            l[(i, i)] = 1.0;
        }
    }
    (l, u)
}

/// Solve `A·x = b` from the packed factors of `A`.
///
/// Forward substitution solves `L·y = b` with the unit diagonal implied,
/// then back substitution solves `U·x = y`, summing only over the columns to
/// the right of each pivot.
pub fn solve_lu(packed: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>> {
    let n = ensure_square(packed)?;
    ensure_len(b, n)?;

    let mut y = Array1::<f64>::zeros(n);
    for i in 0..n {
        let sum: f64 = (0..i).map(|j| packed[(i, j)] * y[j]).sum();
        y[i] = b[i] - sum;
    }

    let mut x = Array1::<f64>::zeros(n);
    for i in (0..n).rev() {
        let sum: f64 = (i + 1..n).map(|j| packed[(i, j)] * x[j]).sum();
        x[i] = (y[i] - sum) / packed[(i, i)];
    }
    Ok(x)
}

/// Invert a square matrix by factoring once and solving against each column
/// of the identity.
pub fn inv_lu(a: &Array2<f64>) -> Result<Array2<f64>> {
    let packed = lu_decompose(a)?;
    let n = packed.nrows();
    let mut inverse = Array2::<f64>::zeros((n, n));
    for col in 0..n {
        let mut e = Array1::<f64>::zeros(n);
        e[col] = 1.0;
        let x = solve_lu(&packed, &e)?;
        inverse.column_mut(col).assign(&x);
    }
    Ok(inverse)
}

#[derive(Debug, Clone, Default)]
pub struct LuSolver;

impl LinearSolver for LuSolver {
    fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> Result<Solution<Array1<f64>>> {
        let packed = lu_decompose(a)?;
        let x = solve_lu(&packed, b)?;
        let residual = residual_norm(a, &x, b);
        info!("lu: solved {} x {} system, residual = {:.4e}", a.nrows(), a.ncols(), residual);
        Ok(Solution {
            value: x,
            status: SolveStatus::Converged,
            iterations: 0,
            residual,
        })
    }

    fn name(&self) -> &str {
        "lu"
    }
}

use log::{debug, info, trace, warn};
use ndarray::{Array1, Array2};

use crate::config::ConjugateGradientConfig;
use crate::error::Result;
use crate::math::{ensure_len, ensure_square, norm_l2};
use crate::solvers::{LinearSolver, SolveStatus, Solution};

/// Solve `A·x = b` for a symmetric positive-definite `A` with the
/// unpreconditioned conjugate gradient method.
///
/// The returned value is the full sequence of iterates, starting with `x0`.
/// Iteration continues while the residual norm is above
/// `config.tolerance`; exhausting `config.max_iterations` is reported as
/// [`SolveStatus::IterationCapReached`] with the partial sequence.
///
/// `A` is not checked for symmetry or definiteness.
///
/// # Arguments
///
/// * `a` - Square coefficient matrix.
/// * `b` - Right-hand side.
/// * `x0` - Initial guess.
/// * `config` - Tolerance and iteration cap.
pub fn conjugate_gradient(
    a: &Array2<f64>,
    b: &Array1<f64>,
    x0: &Array1<f64>,
    config: &ConjugateGradientConfig,
) -> Result<Solution<Vec<Array1<f64>>>> {
    let n = ensure_square(a)?;
    ensure_len(b, n)?;
    ensure_len(x0, n)?;
    debug!("conjugate_gradient: n = {}, tol = {:e}", n, config.tolerance);

    let mut x = x0.clone();
    let mut r = b - &a.dot(&x);
    let mut d = r.clone();
    let mut r_norm = norm_l2(&r);

    let mut iterates = vec![x.clone()];
    let mut iterations = 0;
    let mut status = SolveStatus::Converged;

    while r_norm > config.tolerance {
        if iterations >= config.max_iterations {
            status = SolveStatus::IterationCapReached;
            break;
        }

        let a_d = a.dot(&d);
        let r_r = r.dot(&r);
        let alpha = r_r / d.dot(&a_d);

        x.scaled_add(alpha, &d);
        r.scaled_add(-alpha, &a_d);
        let beta = r.dot(&r) / r_r;
        d = &r + &(&d * beta);

        iterations += 1;
        iterates.push(x.clone());
        r_norm = norm_l2(&r);
        trace!("iteration {}: residual = {:.4e}", iterations, r_norm);
    }

    match status {
        SolveStatus::IterationCapReached => warn!(
            "conjugate_gradient stopped after {} iterations with residual {:.4e}",
            iterations, r_norm
        ),
        _ => info!(
            "conjugate_gradient converged in {} iterations: x = {}, residual = {:.4e}",
            iterations, x, r_norm
        ),
    }

    Ok(Solution {
        value: iterates,
        status,
        iterations,
        residual: r_norm,
    })
}

/// [`LinearSolver`] running conjugate gradient from the zero vector and
/// keeping only the final iterate.
#[derive(Debug, Clone, Default)]
pub struct ConjugateGradient {
    config: ConjugateGradientConfig,
}

impl ConjugateGradient {
    pub fn new(config: ConjugateGradientConfig) -> Self {
        Self { config }
    }
}

impl LinearSolver for ConjugateGradient {
    fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> Result<Solution<Array1<f64>>> {
        let x0 = Array1::zeros(b.len());
        let run = conjugate_gradient(a, b, &x0, &self.config)?;
        Ok(run.map(|mut iterates| iterates.pop().unwrap_or(x0)))
    }

    fn name(&self) -> &str {
        "conjugate_gradient"
    }
}

use log::{debug, info, trace, warn};
use ndarray::{Array1, Array2};

use crate::config::StationaryConfig;
use crate::error::Result;
use crate::math::{abs_diff_sum, ensure_len, ensure_square};
use crate::solvers::{SolveStatus, Solution};

/// Drive a Jacobi-style sweep from the zero vector until the summed absolute
/// change between consecutive iterates drops below the tolerance, reaches the
/// divergence threshold, or the sweep budget runs out. A non-finite change
/// (a zero diagonal entry yields NaN or inf) counts as divergence.
///
/// `sweep(a, b, x_old, x_new)` receives `x_new` holding a copy of `x_old`
/// and must overwrite every component.
pub(crate) fn iterate<F>(
    method: &str,
    a: &Array2<f64>,
    b: &Array1<f64>,
    config: &StationaryConfig,
    mut sweep: F,
) -> Result<Solution<Array1<f64>>>
where
    F: FnMut(&Array2<f64>, &Array1<f64>, &Array1<f64>, &mut Array1<f64>),
{
    let n = ensure_square(a)?;
    ensure_len(b, n)?;
    debug!("{}: n = {}, tol = {:e}", method, n, config.tolerance);

    let mut x_new = Array1::<f64>::zeros(n);
    let mut iterations = 0;

    loop {
        let x_old = x_new.clone();
        sweep(a, b, &x_old, &mut x_new);
        iterations += 1;

        let change = abs_diff_sum(&x_new, &x_old)?;
        trace!("{} sweep {}: change = {:.4e}", method, iterations, change);

        // NaN fails every threshold comparison below.
        let status = if !change.is_finite() {
            SolveStatus::Diverged
        } else if change < config.tolerance {
            SolveStatus::Converged
        } else if change >= config.divergence_threshold {
            SolveStatus::Diverged
        } else if iterations >= config.max_iterations {
            SolveStatus::IterationCapReached
        } else {
            continue;
        };

        match status {
            SolveStatus::Converged => info!(
                "{} converged after {} sweeps (change {:.4e})",
                method, iterations, change
            ),
            SolveStatus::Diverged => warn!(
                "{}: solution not possible, method diverges (change {:.4e} after {} sweeps)",
                method, change, iterations
            ),
            SolveStatus::IterationCapReached => warn!(
                "{} stopped after {} sweeps without converging (change {:.4e})",
                method, iterations, change
            ),
        }

        return Ok(Solution {
            value: x_new,
            status,
            iterations,
            residual: change,
        });
    }
}

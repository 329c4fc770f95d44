use ndarray::{Array1, Array2};

use crate::config::StationaryConfig;
use crate::error::Result;
use crate::solvers::stationary;
use crate::solvers::{LinearSolver, Solution};

/// Solve `A·x = b` with Gauss-Seidel iteration starting from the zero vector.
///
/// Each component update reads the components already updated in the same
/// sweep. A non-converged result is still returned, tagged
/// [`Diverged`](crate::solvers::SolveStatus::Diverged) or
/// [`IterationCapReached`](crate::solvers::SolveStatus::IterationCapReached).
/// Zero diagonal entries are not guarded against.
pub fn gauss_seidel(
    a: &Array2<f64>,
    b: &Array1<f64>,
    config: &StationaryConfig,
) -> Result<Solution<Array1<f64>>> {
    stationary::iterate("gauss_seidel", a, b, config, sweep)
}

fn sweep(a: &Array2<f64>, b: &Array1<f64>, x_old: &Array1<f64>, x_new: &mut Array1<f64>) {
    let n = b.len();
    for i in 0..n {
        let updated: f64 = (0..i).map(|j| a[(i, j)] * x_new[j]).sum();
        let previous: f64 = (i + 1..n).map(|j| a[(i, j)] * x_old[j]).sum();
        x_new[i] = (b[i] - updated - previous) / a[(i, i)];
    }
}

#[derive(Debug, Clone, Default)]
pub struct GaussSeidel {
    config: StationaryConfig,
}

impl GaussSeidel {
    pub fn new(config: StationaryConfig) -> Self {
        Self { config }
    }
}

impl LinearSolver for GaussSeidel {
    fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> Result<Solution<Array1<f64>>> {
        gauss_seidel(a, b, &self.config)
    }

    fn name(&self) -> &str {
        "gauss_seidel"
    }
}

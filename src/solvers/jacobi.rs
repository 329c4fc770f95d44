use ndarray::{Array1, Array2};

use crate::config::StationaryConfig;
use crate::error::Result;
use crate::solvers::stationary;
use crate::solvers::{LinearSolver, Solution};

/// Solve `A·x = b` with Jacobi iteration starting from the zero vector.
///
/// Every component of a sweep is computed from the previous iterate only.
/// Thresholds and status reporting match [`gauss_seidel`](crate::solvers::gauss_seidel::gauss_seidel).
pub fn jacobi(
    a: &Array2<f64>,
    b: &Array1<f64>,
    config: &StationaryConfig,
) -> Result<Solution<Array1<f64>>> {
    stationary::iterate("jacobi", a, b, config, sweep)
}

fn sweep(a: &Array2<f64>, b: &Array1<f64>, x_old: &Array1<f64>, x_new: &mut Array1<f64>) {
    let n = b.len();
    for i in 0..n {
        let off_diagonal: f64 = (0..n)
            .filter(|&j| j != i)
            .map(|j| a[(i, j)] * x_old[j])
            .sum();
        x_new[i] = (b[i] - off_diagonal) / a[(i, i)];
    }
}

#[derive(Debug, Clone, Default)]
pub struct Jacobi {
    config: StationaryConfig,
}

impl Jacobi {
    pub fn new(config: StationaryConfig) -> Self {
        Self { config }
    }
}

impl LinearSolver for Jacobi {
    fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> Result<Solution<Array1<f64>>> {
        jacobi(a, b, &self.config)
    }

    fn name(&self) -> &str {
        "jacobi"
    }
}

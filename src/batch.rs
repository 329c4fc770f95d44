//! Solve many independent systems on the rayon thread pool.
//!
//! Each system is handled by exactly one task; no solver shares state across
//! calls, so results match a sequential loop exactly.
use ndarray::{Array1, Array2};
use rayon::prelude::*;

use crate::error::Result;
use crate::solvers::{LinearSolver, Solution};

/// Solve every `(A, b)` pair with `solver`, returning results in input order.
pub fn solve_batch(
    solver: &dyn LinearSolver,
    systems: &[(Array2<f64>, Array1<f64>)],
) -> Vec<Result<Solution<Array1<f64>>>> {
    log::debug!("solve_batch: {} systems with {}", systems.len(), solver.name());
    systems
        .par_iter()
        .map(|(a, b)| solver.solve(a, b))
        .collect()
}

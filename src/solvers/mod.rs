//! Linear-system solvers.
//!
//! Every solver is a free function taking its inputs by reference and working
//! on internal copies. The [`LinearSolver`] trait wraps each of them behind a
//! common `A·x = b` signature so a method can be picked from a
//! [`SolverConfig`](crate::config::SolverConfig) at runtime.
use ndarray::{Array1, Array2};

use crate::error::Result;

pub mod conjugate_gradient;
pub mod factory;
pub mod gauss_jordan;
pub mod gauss_seidel;
pub mod jacobi;
pub mod lu;
mod stationary;

/// How an iterative solve terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Converged,
    Diverged,
    IterationCapReached,
}

/// A solver output tagged with how it was reached.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    pub value: T,
    pub status: SolveStatus,
    pub iterations: usize,
    /// Convergence measure at termination. Its meaning depends on the method:
    /// the residual norm for conjugate gradient, the summed absolute change
    /// of the last sweep for Jacobi and Gauss-Seidel, and `‖b - A·x‖₂` for
    /// direct solves.
    pub residual: f64,
}

impl<T> Solution<T> {
    pub fn is_converged(&self) -> bool {
        self.status == SolveStatus::Converged
    }

    pub fn map<U, F>(self, f: F) -> Solution<U>
    where
        F: FnOnce(T) -> U,
    {
        Solution {
            value: f(self.value),
            status: self.status,
            iterations: self.iterations,
            residual: self.residual,
        }
    }
}

/// Common contract for solving a square system `A·x = b`.
pub trait LinearSolver: Send + Sync {
    fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> Result<Solution<Array1<f64>>>;

    /// Optional human readable name for the solver
    fn name(&self) -> &str {
        "solver"
    }
}

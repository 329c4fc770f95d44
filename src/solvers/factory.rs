use crate::config::{Method, SolverConfig};
use crate::solvers::conjugate_gradient::ConjugateGradient;
use crate::solvers::gauss_jordan::GaussJordan;
use crate::solvers::gauss_seidel::GaussSeidel;
use crate::solvers::jacobi::Jacobi;
use crate::solvers::lu::LuSolver;
use crate::solvers::LinearSolver;

/// Build a boxed solver for the method selected in `config`.
pub fn build_solver(config: &SolverConfig) -> Box<dyn LinearSolver> {
    match config.method {
        Method::ConjugateGradient => {
            Box::new(ConjugateGradient::new(config.conjugate_gradient.clone()))
        }
        Method::GaussJordan => Box::new(GaussJordan::new(config.elimination.clone())),
        Method::GaussSeidel => Box::new(GaussSeidel::new(config.stationary.clone())),
        Method::Jacobi => Box::new(Jacobi::new(config.stationary.clone())),
        Method::Lu => Box::new(LuSolver),
    }
}

//! redeem-solvers: classical solvers for dense linear systems.
//!
//! This crate provides conjugate gradient, Gauss-Jordan elimination (with
//! determinant and inverse extraction), Gauss-Seidel and Jacobi iteration,
//! and Doolittle LU decomposition with forward/back substitution, all on
//! `ndarray` matrices.
//!
//! Each solver is a standalone function that copies its inputs. Iterative
//! methods return a [`Solution`](solvers::Solution) tagged with a
//! [`SolveStatus`](solvers::SolveStatus) instead of printing progress, and
//! Gauss-Jordan reports an early zero pivot through its
//! [`EliminationStatus`](solvers::gauss_jordan::EliminationStatus).
pub mod batch;
pub mod config;
pub mod error;
pub mod logging;
pub mod math;
pub mod solvers;

pub use error::{Result, SolverError};

//! Integration tests for the Jacobi and Gauss-Seidel iterative solvers.

use ndarray::{array, Array1, Array2};
use redeem_solvers::config::StationaryConfig;
use redeem_solvers::solvers::gauss_seidel::gauss_seidel;
use redeem_solvers::solvers::jacobi::jacobi;
use redeem_solvers::solvers::SolveStatus;
use redeem_solvers::SolverError;

fn dominant_system() -> (Array2<f64>, Array1<f64>) {
    (array![[10.0, 1.0], [2.0, 10.0]], array![11.0, 12.0])
}

fn divergent_system() -> (Array2<f64>, Array1<f64>) {
    (array![[1.0, 5.0], [7.0, 1.0]], array![1.0, 1.0])
}

// ---------------------------------------------------------------------------
// Convergence
// ---------------------------------------------------------------------------

#[test]
fn both_methods_converge_on_diagonally_dominant_system() {
    let (a, b) = dominant_system();
    let config = StationaryConfig::default();

    let gs = gauss_seidel(&a, &b, &config).unwrap();
    let jac = jacobi(&a, &b, &config).unwrap();
    assert_eq!(gs.status, SolveStatus::Converged);
    assert_eq!(jac.status, SolveStatus::Converged);

    for i in 0..2 {
        assert!((gs.value[i] - 1.0).abs() < 1e-4, "gauss_seidel x[{}] = {}", i, gs.value[i]);
        assert!((jac.value[i] - 1.0).abs() < 1e-4, "jacobi x[{}] = {}", i, jac.value[i]);
        assert!((gs.value[i] - jac.value[i]).abs() < 1e-4);
    }
    assert!(gs.residual < 1e-4);
    assert!(jac.residual < 1e-4);
}

#[test]
fn gauss_seidel_needs_fewer_sweeps_than_jacobi() {
    let (a, b) = dominant_system();
    let config = StationaryConfig::default();
    let gs = gauss_seidel(&a, &b, &config).unwrap();
    let jac = jacobi(&a, &b, &config).unwrap();
    assert!(gs.iterations <= jac.iterations);
}

#[test]
fn one_by_one_system_is_division() {
    let a = array![[4.0]];
    let b = array![8.0];
    let config = StationaryConfig::default();
    assert_eq!(gauss_seidel(&a, &b, &config).unwrap().value[0], 2.0);
    assert_eq!(jacobi(&a, &b, &config).unwrap().value[0], 2.0);
}

#[test]
fn large_system_is_not_declared_divergent_up_front() {
    let n = 120;
    let mut a = Array2::<f64>::zeros((n, n));
    for i in 0..n {
        a[(i, i)] = 4.0;
        if i > 0 {
            a[(i, i - 1)] = -1.0;
        }
        if i + 1 < n {
            a[(i, i + 1)] = -1.0;
        }
    }
    let b = Array1::<f64>::ones(n);
    let config = StationaryConfig::default();

    assert_eq!(jacobi(&a, &b, &config).unwrap().status, SolveStatus::Converged);
    assert_eq!(gauss_seidel(&a, &b, &config).unwrap().status, SolveStatus::Converged);
}

// ---------------------------------------------------------------------------
// Divergence and iteration cap
// ---------------------------------------------------------------------------

#[test]
fn jacobi_flags_divergence() {
    let (a, b) = divergent_system();
    let result = jacobi(&a, &b, &StationaryConfig::default()).unwrap();
    assert_eq!(result.status, SolveStatus::Diverged);
    assert!(result.iterations <= 10, "took {} sweeps", result.iterations);
    assert!(result.residual >= 100.0);
    assert!(!result.is_converged());
}

#[test]
fn gauss_seidel_flags_divergence() {
    let (a, b) = divergent_system();
    let result = gauss_seidel(&a, &b, &StationaryConfig::default()).unwrap();
    assert_eq!(result.status, SolveStatus::Diverged);
    assert_eq!(result.iterations, 2);
    // the last computed iterate is returned
    assert_eq!(result.value, array![31.0, -216.0]);
}

#[test]
fn zero_diagonal_is_reported_as_divergence() {
    // the first sweep divides 0 by 0
    let a = array![[0.0, 1.0], [1.0, 1.0]];
    let b = array![0.0, 1.0];
    let config = StationaryConfig::default();

    for (name, result) in [
        ("jacobi", jacobi(&a, &b, &config).unwrap()),
        ("gauss_seidel", gauss_seidel(&a, &b, &config).unwrap()),
    ] {
        assert_eq!(result.status, SolveStatus::Diverged, "{}", name);
        assert_eq!(result.iterations, 1, "{} took {} sweeps", name, result.iterations);
        assert!(result.residual.is_nan(), "{} residual = {}", name, result.residual);
    }
}

#[test]
fn sweep_cap_is_reported() {
    let (a, b) = dominant_system();
    let config = StationaryConfig {
        max_iterations: 2,
        ..StationaryConfig::default()
    };
    let result = jacobi(&a, &b, &config).unwrap();
    assert_eq!(result.status, SolveStatus::IterationCapReached);
    assert_eq!(result.iterations, 2);
}

// ---------------------------------------------------------------------------
// Validation and purity
// ---------------------------------------------------------------------------

#[test]
fn rectangular_matrix_is_rejected() {
    let a = Array2::<f64>::zeros((2, 3));
    let b = array![1.0, 2.0];
    assert!(matches!(
        jacobi(&a, &b, &StationaryConfig::default()),
        Err(SolverError::NotSquare { .. })
    ));
    assert!(matches!(
        gauss_seidel(&a, &b, &StationaryConfig::default()),
        Err(SolverError::NotSquare { .. })
    ));
}

#[test]
fn repeated_runs_are_identical() {
    let (a, b) = dominant_system();
    let config = StationaryConfig::default();
    assert_eq!(
        gauss_seidel(&a, &b, &config).unwrap(),
        gauss_seidel(&a, &b, &config).unwrap()
    );
    assert_eq!(jacobi(&a, &b, &config).unwrap(), jacobi(&a, &b, &config).unwrap());
}

#[test]
fn inputs_are_not_mutated() {
    let (a, b) = dominant_system();
    let (a_before, b_before) = (a.clone(), b.clone());
    let _ = gauss_seidel(&a, &b, &StationaryConfig::default()).unwrap();
    let _ = jacobi(&a, &b, &StationaryConfig::default()).unwrap();
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

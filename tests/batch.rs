//! Integration tests for parallel batch solving.

use ndarray::{array, Array1, Array2};
use redeem_solvers::batch::solve_batch;
use redeem_solvers::config::{Method, SolverConfig};
use redeem_solvers::solvers::factory::build_solver;
use redeem_solvers::SolverError;

fn systems() -> Vec<(Array2<f64>, Array1<f64>)> {
    (1..=8)
        .map(|k| {
            let k = k as f64;
            let a = array![[4.0 + k, 1.0, 0.0], [1.0, 3.0 + k, 1.0], [0.0, 1.0, 2.0 + k]];
            let b = array![1.0, k, 3.0];
            (a, b)
        })
        .collect()
}

#[test]
fn batch_matches_sequential_solves() {
    let systems = systems();
    for method in [Method::ConjugateGradient, Method::GaussSeidel, Method::Lu] {
        let solver = build_solver(&SolverConfig::new(method));
        let parallel = solve_batch(solver.as_ref(), &systems);
        assert_eq!(parallel.len(), systems.len());

        for ((a, b), result) in systems.iter().zip(parallel) {
            let sequential = solver.solve(a, b).unwrap();
            assert_eq!(result.unwrap(), sequential);
        }
    }
}

#[test]
fn batch_keeps_per_system_errors() {
    let mut systems = systems();
    systems.insert(1, (Array2::zeros((2, 3)), array![1.0, 2.0]));

    let solver = build_solver(&SolverConfig::new(Method::Lu));
    let results = solve_batch(solver.as_ref(), &systems);

    assert_eq!(results.len(), systems.len());
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(SolverError::NotSquare { .. })));
    assert!(results[2..].iter().all(|r| r.is_ok()));
}

#[test]
fn empty_batch() {
    let solver = build_solver(&SolverConfig::default());
    assert!(solve_batch(solver.as_ref(), &[]).is_empty());
}

use log::{debug, trace, warn};
use ndarray::{Array1, Array2, Axis};

use crate::config::{EliminationConfig, PivotRule, ZeroRowScan};
use crate::error::{Result, SolverError};
use crate::math::{augment_column, ensure_square, extract_inv, make_aug, residual_norm, swap_rows};
use crate::solvers::{LinearSolver, SolveStatus, Solution};

/// Column inspected by [`ZeroRowScan::CheckColumn`].
const CHECK_COLUMN: usize = 1;

/// Whether elimination reached every pivot row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminationStatus {
    Complete,
    /// Elimination stopped at `row`; rows from `row` on are not reduced.
    ZeroPivot { row: usize },
}

/// Output of [`gauss_jordan`].
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub matrix: Array2<f64>,
    pub determinant: f64,
    /// Number of row exchanges performed while pivoting.
    pub swaps: usize,
    pub status: EliminationStatus,
}

impl Reduction {
    pub fn is_complete(&self) -> bool {
        self.status == EliminationStatus::Complete
    }
}

/// Reduce a (typically augmented) matrix with Gauss-Jordan elimination.
///
/// All-zero rows are first moved to the bottom, keeping the order of the
/// remaining rows. Each pivot row `i` is then swapped with the candidate row
/// selected by `config.pivot_rule` in column `i`, normalized, and used to clear
/// column `i` from every other row. Entries whose magnitude is at most
/// `config.zero_tolerance` are flushed to zero.
///
/// The determinant of the leading square block is
/// `(-1)^swaps · Π pivots · Π diag(reduced)`. A zero pivot stops the
/// elimination: the partially reduced matrix is returned with
/// [`EliminationStatus::ZeroPivot`] and a determinant of zero.
///
/// # Errors
///
/// Returns [`SolverError::NotSquare`] when the matrix has fewer columns than
/// rows, since some pivot would fall outside the matrix.
pub fn gauss_jordan(matrix: &Array2<f64>, config: &EliminationConfig) -> Result<Reduction> {
    let (rows, cols) = matrix.dim();
    if cols < rows {
        return Err(SolverError::NotSquare { rows, cols });
    }
    debug!("gauss_jordan: reducing {} x {} matrix", rows, cols);

    let tol = config.zero_tolerance;
    let mut m = move_zero_rows_last(matrix, config.zero_row_scan);
    let mut swaps = 0;
    let mut pivot_product = 1.0;
    let mut status = EliminationStatus::Complete;

    for i in 0..rows {
        let pivot_row = max_row(&m, i, config.pivot_rule);
        if pivot_row != i && m.row(pivot_row) != m.row(i) {
            swap_rows(&mut m, i, pivot_row);
            swaps += 1;
        }

        if m[(i, i)].abs() <= tol {
            m[(i, i)] = 0.0;
        }
        let pivot = m[(i, i)];
        if pivot == 0.0 {
            warn!("gauss_jordan: zero pivot at row {}, elimination stopped", i);
            status = EliminationStatus::ZeroPivot { row: i };
            break;
        }

        m.row_mut(i).mapv_inplace(|v| v / pivot);
        pivot_product *= pivot;
        trace!("row {}: pivot = {}", i, pivot);

        let normalized = m.row(i).to_owned();
        for j in 0..rows {
            if j != i {
                let factor = m[(j, i)];
                m.row_mut(j).scaled_add(-factor, &normalized);
            }
            if m[(i, j)].abs() <= tol {
                m[(i, j)] = 0.0;
            }
        }
    }

    let diagonal: f64 = (0..rows).map(|i| m[(i, i)]).product();
    let sign = if swaps % 2 == 0 { 1.0 } else { -1.0 };
    let determinant = sign * pivot_product * diagonal;

    m.mapv_inplace(|v| if v.abs() <= tol { 0.0 } else { v });

    Ok(Reduction {
        matrix: m,
        determinant,
        swaps,
        status,
    })
}

/// Index of the row in `start..` holding the largest value in column
/// `start` under `rule`. Ties resolve to the later row.
fn max_row(m: &Array2<f64>, start: usize, rule: PivotRule) -> usize {
    let key = |row: usize| match rule {
        PivotRule::MaxAbs => m[(row, start)].abs(),
        PivotRule::SignedMax => m[(row, start)],
    };
    let mut best = start;
    for row in start..m.nrows() {
        if key(best) <= key(row) {
            best = row;
        }
    }
    best
}

fn is_zero_row(m: &Array2<f64>, row: usize, scan: ZeroRowScan) -> bool {
    match scan {
        ZeroRowScan::FullRow => m.row(row).iter().all(|&v| v == 0.0),
        ZeroRowScan::CheckColumn => {
            m.ncols() > CHECK_COLUMN
                && m[(row, CHECK_COLUMN)] == 0.0
                && m.row(row).iter().all(|&v| v == 0.0)
        }
    }
}

fn move_zero_rows_last(m: &Array2<f64>, scan: ZeroRowScan) -> Array2<f64> {
    let (nonzero, zero): (Vec<usize>, Vec<usize>) =
        (0..m.nrows()).partition(|&row| !is_zero_row(m, row, scan));
    if !zero.is_empty() {
        debug!("gauss_jordan: moving zero rows {:?} to the bottom", zero);
    }
    let order: Vec<usize> = nonzero.into_iter().chain(zero).collect();
    m.select(Axis(0), &order)
}

/// Invert a square matrix by reducing `[A | I]`.
///
/// # Errors
///
/// [`SolverError::ZeroPivot`] when elimination stops early, which happens for
/// singular matrices.
pub fn gauss_jordan_inverse(a: &Array2<f64>, config: &EliminationConfig) -> Result<Array2<f64>> {
    let n = ensure_square(a)?;
    let aug = make_aug(a, &Array2::eye(n))?;
    let reduction = gauss_jordan(&aug, config)?;
    if let EliminationStatus::ZeroPivot { row } = reduction.status {
        return Err(SolverError::ZeroPivot { row });
    }
    extract_inv(&reduction.matrix)
}

/// [`LinearSolver`] reducing `[A | b]` and reading the solution from the last column.
#[derive(Debug, Clone, Default)]
pub struct GaussJordan {
    config: EliminationConfig,
}

impl GaussJordan {
    pub fn new(config: EliminationConfig) -> Self {
        Self { config }
    }
}

impl LinearSolver for GaussJordan {
    fn solve(&self, a: &Array2<f64>, b: &Array1<f64>) -> Result<Solution<Array1<f64>>> {
        let n = ensure_square(a)?;
        let aug = augment_column(a, b)?;
        let reduction = gauss_jordan(&aug, &self.config)?;
        if let EliminationStatus::ZeroPivot { row } = reduction.status {
            return Err(SolverError::ZeroPivot { row });
        }
        let x = reduction.matrix.column(n).to_owned();
        let residual = residual_norm(a, &x, b);
        Ok(Solution {
            value: x,
            status: SolveStatus::Converged,
            iterations: 0,
            residual,
        })
    }

    fn name(&self) -> &str {
        "gauss_jordan"
    }
}

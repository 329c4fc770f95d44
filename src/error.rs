use std::error::Error;
use std::fmt;

use ndarray::ShapeError;

/// Result alias used by every solver entry point.
pub type Result<T> = std::result::Result<T, SolverError>;

/// Errors raised when a system cannot be set up or solved
#[derive(Debug)]
pub enum SolverError {
    NotSquare { rows: usize, cols: usize },
    LengthMismatch { expected: usize, found: usize },
    /// Coefficient and right-hand-side shapes cannot be augmented
    NoUniqueSolution {
        a_shape: (usize, usize),
        b_shape: (usize, usize),
    },
    /// The matrix does not split into an `n x n` left block and an `n x n` inverse block
    InverseBlock { rows: usize, cols: usize },
    ZeroPivot { row: usize },
    Shape(ShapeError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolverError::NotSquare { rows, cols } => {
                write!(f, "Expected a square matrix, got {} x {}", rows, cols)
            }
            SolverError::LengthMismatch { expected, found } => write!(
                f,
                "Vector length mismatch: expected {}, found {}",
                expected, found
            ),
            SolverError::NoUniqueSolution { a_shape, b_shape } => write!(
                f,
                "unique solution probably not possible: cannot augment {:?} with {:?}",
                a_shape, b_shape
            ),
            SolverError::InverseBlock { rows, cols } => write!(
                f,
                "Cannot extract an inverse block from a {} x {} matrix",
                rows, cols
            ),
            SolverError::ZeroPivot { row } => write!(f, "Zero pivot encountered at row {}", row),
            SolverError::Shape(err) => write!(f, "Shape error: {}", err),
        }
    }
}

impl Error for SolverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SolverError::Shape(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ShapeError> for SolverError {
    fn from(err: ShapeError) -> Self {
        SolverError::Shape(err)
    }
}

use ndarray::{concatenate, s, Array1, Array2, Axis};

use crate::error::{Result, SolverError};

/// Return the dimension of a square matrix.
pub fn ensure_square(a: &Array2<f64>) -> Result<usize> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(SolverError::NotSquare { rows, cols });
    }
    Ok(rows)
}

pub fn ensure_len(v: &Array1<f64>, expected: usize) -> Result<()> {
    if v.len() != expected {
        return Err(SolverError::LengthMismatch {
            expected,
            found: v.len(),
        });
    }
    Ok(())
}

/// Swap two rows in place.
pub fn swap_rows(m: &mut Array2<f64>, a: usize, b: usize) {
    if a == b {
        return;
    }
    for col in 0..m.ncols() {
        m.swap((a, col), (b, col));
    }
}

/// Build the augmented matrix `[A | B]`.
///
/// When the row counts differ but `rows(A) == cols(B)` and `B` is a single
/// row, the result is a `1 x N` row holding every entry of `A` (row-major)
/// followed by the entries of `B`. This is the flattened append older
/// callers depend on; it is not an augmented system and must not be fed to
/// [`gauss_jordan`](crate::solvers::gauss_jordan::gauss_jordan). Use
/// [`augment_column`] to attach a right-hand-side vector.
pub fn make_aug(a: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>> {
    let (rows_a, _) = a.dim();
    let (rows_b, cols_b) = b.dim();

    if rows_a == rows_b {
        return Ok(concatenate(Axis(1), &[a.view(), b.view()])?);
    }

    if rows_a == cols_b && rows_b == 1 {
        log::debug!(
            "make_aug: flattening {:?} and {:?} into a single row",
            a.dim(),
            b.dim()
        );
        let flat: Vec<f64> = a.iter().chain(b.iter()).copied().collect();
        let len = flat.len();
        return Ok(Array2::from_shape_vec((1, len), flat)?);
    }

    Err(SolverError::NoUniqueSolution {
        a_shape: a.dim(),
        b_shape: b.dim(),
    })
}

/// Append a right-hand-side vector to `A` as an extra column.
pub fn augment_column(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array2<f64>> {
    ensure_len(b, a.nrows())?;
    let column = b.view().insert_axis(Axis(1));
    Ok(concatenate(Axis(1), &[a.view(), column])?)
}

/// Extract the right half of a reduced `[I | A⁻¹]` matrix.
///
/// With `h = cols / 2`, columns `h..2h` are returned; the matrix must have
/// exactly `h` rows.
pub fn extract_inv(m: &Array2<f64>) -> Result<Array2<f64>> {
    let (rows, cols) = m.dim();
    let half = cols / 2;
    if half == 0 || rows != half {
        return Err(SolverError::InverseBlock { rows, cols });
    }
    Ok(m.slice(s![.., half..2 * half]).to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_swap_rows() {
        let mut m = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        swap_rows(&mut m, 0, 2);
        assert_eq!(m, array![[5.0, 6.0], [3.0, 4.0], [1.0, 2.0]]);
    }

    #[test]
    fn test_augment_column() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![5.0, 6.0];
        let aug = augment_column(&a, &b).unwrap();
        assert_eq!(aug, array![[1.0, 2.0, 5.0], [3.0, 4.0, 6.0]]);
    }

    #[test]
    fn test_ensure_square_rejects_rectangular() {
        let a = Array2::<f64>::zeros((2, 3));
        assert!(matches!(
            ensure_square(&a),
            Err(SolverError::NotSquare { rows: 2, cols: 3 })
        ));
    }
}

use num_traits::Float;

use crate::matrix::Matrix;

/// Reduce a matrix to reduced row-echelon form in place, returning the pivot columns.
///
/// Runs Gauss-Jordan elimination without pivoting by magnitude: for each row the
/// first entry at or below it that is non-zero in the current pivot column is
/// swapped up, normalized to a leading 1 and used to clear that column in every
/// other row. When no row has a non-zero entry in the pivot column, the search
/// moves on to the next column. Reduction stops early once the columns run out,
/// leaving the remaining rows as they are.
///
/// # Arguments
///
/// * `mat` - The matrix to reduce. It is modified in place.
/// * `tolerance` - Entries with `|x| <= tolerance` are treated as zero when searching
///   for a pivot. Zero gives exact comparison; entries that are analytically zero but
///   carry rounding noise are then used as pivots. Negative and NaN values act as zero.
///
/// # Returns
///
/// The pivot column of each reduced row, in row order. Its length is the rank found.
///
/// # Example
///
/// ```
/// use matalg::{reduce_row_echelon, Matrix};
///
/// let mut m = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]]).unwrap();
/// let pivots = reduce_row_echelon(&mut m, 0.0);
/// assert_eq!(pivots, vec![0]);
/// assert_eq!(m.row(0), &[1.0, 2.0]);
/// ```
pub fn reduce_row_echelon<T: Float>(mat: &mut Matrix<T>, tolerance: T) -> Vec<usize> {
    let (rows, cols) = mat.shape();
    let mut pivots = Vec::with_capacity(rows.min(cols));
    // `max` returns zero for a NaN tolerance
    let tolerance = tolerance.max(T::zero());
    let is_zero = |x: T| x.abs() <= tolerance;

    let mut col = 0;
    for r in 0..rows {
        if col >= cols {
            log::debug!("columns exhausted at row {r}, rank {}", pivots.len());
            return pivots;
        }

        // find a row at or below `r` with a usable entry, advancing the column on failure
        let mut i = r;
        while is_zero(mat[(i, col)]) {
            i += 1;
            if i == rows {
                i = r;
                col += 1;
                if col == cols {
                    log::debug!("no pivot left from row {r}, rank {}", pivots.len());
                    return pivots;
                }
            }
        }

        if i != r {
            log::debug!("swapping rows {i} and {r} for pivot column {col}");
        }
        mat.swap_rows(i, r);

        let lead = mat[(r, col)];
        mat.row_mut(r).iter_mut().for_each(|v| *v = *v / lead);

        for i in (0..rows).filter(|&i| i != r) {
            let factor = mat[(i, col)];
            for c in 0..cols {
                let rv = mat[(r, c)];
                mat[(i, c)] = mat[(i, c)] - factor * rv;
            }
        }

        pivots.push(col);
        col += 1;
    }

    pivots
}

/// Transform a matrix into reduced row-echelon form in place.
///
/// Pivots are searched with exact comparison against zero. The same matrix is
/// returned so calls can be chained; rank-deficient inputs come back only partially
/// reduced past the last pivot, as described in [`reduce_row_echelon`].
///
/// # Example
///
/// ```
/// use matalg::{to_red_row_echelon, Matrix};
///
/// let mut m = Matrix::from_rows(&[[0.0, 2.0], [1.0, 1.0]]).unwrap();
/// to_red_row_echelon(&mut m);
/// assert_eq!(m, Matrix::identity(2));
/// ```
pub fn to_red_row_echelon<T: Float>(mat: &mut Matrix<T>) -> &mut Matrix<T> {
    reduce_row_echelon(mat, T::zero());
    mat
}

/// Return the reduced row-echelon form of a matrix, leaving the input untouched.
pub fn red_row_echelon<T: Float>(mat: &Matrix<T>) -> Matrix<T> {
    let mut out = mat.clone();
    to_red_row_echelon(&mut out);
    out
}

/// Compute the rank of a matrix as the number of pivots found by elimination.
///
/// # Example
///
/// ```
/// use matalg::{rank, Matrix};
///
/// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [2.0, 4.0, 6.0]]).unwrap();
/// assert_eq!(rank(&m), 1);
/// ```
pub fn rank<T: Float>(mat: &Matrix<T>) -> usize {
    let mut work = mat.clone();
    reduce_row_echelon(&mut work, T::zero()).len()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::MatrixError;

    fn assert_matrix_eq(a: &Matrix<f64>, b: &Matrix<f64>) {
        assert_eq!(a.shape(), b.shape());
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_rref_augmented_system() -> Result<(), MatrixError> {
        let mut m = Matrix::from_rows(&[
            [1.0, 2.0, -1.0, -4.0],
            [2.0, 3.0, -1.0, -11.0],
            [-2.0, 0.0, -3.0, 22.0],
        ])?;
        let pivots = reduce_row_echelon(&mut m, 0.0);
        assert_eq!(pivots, vec![0, 1, 2]);

        let expected = Matrix::from_rows(&[
            [1.0, 0.0, 0.0, -8.0],
            [0.0, 1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, -2.0],
        ])?;
        assert_matrix_eq(&m, &expected);
        Ok(())
    }

    #[test]
    fn test_rref_swaps_zero_pivot() -> Result<(), MatrixError> {
        let mut m = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]])?;
        to_red_row_echelon(&mut m);
        assert_eq!(m, Matrix::identity(2));
        Ok(())
    }

    #[test]
    fn test_rref_idempotent() -> Result<(), MatrixError> {
        let m = Matrix::from_rows(&[[2.0, 4.0, 1.0], [1.0, 3.0, 5.0]])?;
        let once = red_row_echelon(&m);
        let twice = red_row_echelon(&once);
        assert_eq!(once, twice);
        Ok(())
    }

    #[test]
    fn test_rref_returns_same_matrix() -> Result<(), MatrixError> {
        let mut m = Matrix::from_rows(&[[2.0, 4.0], [1.0, 1.0]])?;
        let reduced = to_red_row_echelon(&mut m);
        reduced[(0, 0)] = 5.0;
        assert_eq!(m[(0, 0)], 5.0);
        Ok(())
    }

    #[test]
    fn test_rref_rank_deficient_tall() -> Result<(), MatrixError> {
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0], [3.0, 6.0]])?;
        let pivots = reduce_row_echelon(&mut m, 0.0);
        assert_eq!(pivots, vec![0]);
        assert_eq!(
            m.to_rows(),
            vec![vec![1.0, 2.0], vec![0.0, 0.0], vec![0.0, 0.0]]
        );
        Ok(())
    }

    #[test]
    fn test_rref_skips_zero_column() -> Result<(), MatrixError> {
        let mut m = Matrix::from_rows(&[[0.0, 2.0, 4.0], [0.0, 1.0, 3.0]])?;
        let pivots = reduce_row_echelon(&mut m, 0.0);
        assert_eq!(pivots, vec![1, 2]);
        assert_matrix_eq(&m, &Matrix::from_rows(&[[0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])?);
        Ok(())
    }

    #[test]
    fn test_rref_zero_and_empty() -> Result<(), MatrixError> {
        let mut zero = Matrix::<f64>::zeros((2, 3));
        assert!(reduce_row_echelon(&mut zero, 0.0).is_empty());
        assert_eq!(zero, Matrix::zeros((2, 3)));

        let mut empty = Matrix::<f64>::zeros((0, 0));
        assert!(reduce_row_echelon(&mut empty, 0.0).is_empty());

        let mut no_cols = Matrix::<f64>::zeros((2, 0));
        assert!(reduce_row_echelon(&mut no_cols, 0.0).is_empty());
        Ok(())
    }

    #[test]
    fn test_rref_exact_zero_vs_tolerance() -> Result<(), MatrixError> {
        // analytically rank 1, but elimination leaves ~2.2e-16 in the second row
        let m = Matrix::from_rows(&[[0.1, 0.3], [0.3, 0.9]])?;

        let mut exact = m.clone();
        assert_eq!(reduce_row_echelon(&mut exact, 0.0), vec![0, 1]);
        assert_eq!(exact, Matrix::identity(2));

        let mut tolerant = m.clone();
        assert_eq!(reduce_row_echelon(&mut tolerant, 1e-12), vec![0]);
        assert_eq!(tolerant[(1, 0)], 0.0);
        Ok(())
    }

    #[test]
    fn test_rref_invalid_tolerance_is_exact() -> Result<(), MatrixError> {
        for tolerance in [-1.0, f64::NAN] {
            let mut zero = Matrix::<f64>::zeros((2, 2));
            assert!(reduce_row_echelon(&mut zero, tolerance).is_empty());
            assert_eq!(zero, Matrix::zeros((2, 2)));

            let mut m = Matrix::from_rows(&[[0.0, 2.0, 4.0], [0.0, 1.0, 3.0]])?;
            assert_eq!(reduce_row_echelon(&mut m, tolerance), vec![1, 2]);
            assert!(m.as_slice().iter().all(|v| v.is_finite()));
        }
        Ok(())
    }

    #[test]
    fn test_rank() -> Result<(), MatrixError> {
        assert_eq!(rank(&Matrix::<f64>::identity(4)), 4);
        assert_eq!(rank(&Matrix::<f64>::zeros((3, 3))), 0);
        assert_eq!(rank(&Matrix::from_rows(&[[1.0f32, 2.0], [2.0, 4.0]])?), 1);
        Ok(())
    }

    #[test]
    fn test_red_row_echelon_keeps_input() -> Result<(), MatrixError> {
        let m = Matrix::from_rows(&[[2.0, 4.0], [1.0, 1.0]])?;
        let copy = m.clone();
        let _ = red_row_echelon(&m);
        assert_eq!(m, copy);
        Ok(())
    }
}

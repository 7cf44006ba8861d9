use num_traits::Float;

use crate::{
    error::MatrixError,
    matrix::{hstack, Matrix},
    rref::reduce_row_echelon,
};

/// Compute the inverse of a square matrix.
///
/// Builds the augmented matrix `[A | I]`, reduces it with exact zero pivot tests and
/// returns its right half. The input is not modified.
///
/// # Errors
///
/// * [`MatrixError::NotSquare`] if the matrix is not square.
/// * [`MatrixError::Singular`] if the matrix has no inverse.
///
/// # Example
///
/// ```
/// use matalg::{inverse, Matrix};
///
/// let m = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
/// let inv = inverse(&m).unwrap();
/// assert!((inv[(0, 0)] - 0.6_f64).abs() < 1e-12);
/// assert!((inv[(1, 1)] - 0.4_f64).abs() < 1e-12);
///
/// let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]]).unwrap();
/// assert!(inverse(&singular).is_err());
/// ```
pub fn inverse<T: Float>(mat: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    inverse_with_tolerance(mat, T::zero())
}

/// Compute the inverse of a square matrix, treating entries with `|x| <= tolerance`
/// as zero during elimination. A negative or NaN tolerance behaves like zero.
///
/// See [`inverse`] for details and errors.
pub fn inverse_with_tolerance<T: Float>(
    mat: &Matrix<T>,
    tolerance: T,
) -> Result<Matrix<T>, MatrixError> {
    if !mat.is_square() {
        return Err(MatrixError::NotSquare(mat.rows(), mat.cols()));
    }
    let n = mat.rows();

    let mut augmented = hstack(mat, &Matrix::identity(n))?;
    let pivots = reduce_row_echelon(&mut augmented, tolerance);

    // pivots are increasing; a rank-deficient `A` still pivots inside the identity half,
    // so only the pivots of the left half count
    let rank = pivots.iter().take_while(|&&c| c < n).count();
    if rank != n {
        log::warn!("cannot invert {n}x{n} matrix: rank {rank}");
        return Err(MatrixError::Singular { rank, size: n });
    }

    augmented.columns(n..)
}

use std::ops::Mul;

use num_traits::Float;

use crate::{error::MatrixError, matrix::Matrix};

/// Compute the transpose of a matrix.
///
/// The input is left untouched and a new `cols x rows` matrix is returned with
/// `output[(i, j)] == input[(j, i)]`.
///
/// # Example
///
/// ```
/// use matalg::{transpose, Matrix};
///
/// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
/// let t = transpose(&m);
/// assert_eq!(t.to_rows(), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
/// ```
pub fn transpose<T: Clone>(mat: &Matrix<T>) -> Matrix<T> {
    let (rows, cols) = mat.shape();
    Matrix::from_shape_fn((cols, rows), |(i, j)| mat[(j, i)].clone())
}

/// Multiply two matrices.
///
/// # Arguments
///
/// * `a` - Left operand of shape `(r1, c1)`.
/// * `b` - Right operand of shape `(r2, c2)`.
///
/// # Returns
///
/// A new `(r1, c2)` matrix where each cell accumulates `a[(i, k)] * b[(k, j)]` from zero.
///
/// # Errors
///
/// If `c1 != r2`, a [`MatrixError::DimensionMismatch`] citing both counts is returned
/// and no product is computed.
///
/// # Example
///
/// ```
/// use matalg::{matmul, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
/// let b = Matrix::from_rows(&[[5.0], [6.0]]).unwrap();
/// let c = matmul(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![17.0], vec![39.0]]);
/// ```
pub fn matmul<T: Float>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            a_cols: a.cols(),
            b_rows: b.rows(),
        });
    }

    let mut out = Matrix::zeros((a.rows(), b.cols()));
    for i in 0..a.rows() {
        let a_row = a.row(i);
        for j in 0..b.cols() {
            let mut acc = T::zero();
            for (k, &a_ik) in a_row.iter().enumerate() {
                acc = acc + a_ik * b[(k, j)];
            }
            out[(i, j)] = acc;
        }
    }

    Ok(out)
}

impl<T: Float> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: &Matrix<T>) -> Self::Output {
        matmul(self, rhs)
    }
}

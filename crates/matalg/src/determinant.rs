use num_traits::Float;

use crate::{error::MatrixError, matrix::Matrix};

fn check_shape<T>(mat: &Matrix<T>, n: usize) -> Result<(), MatrixError> {
    if mat.shape() != (n, n) {
        return Err(MatrixError::UnexpectedShape {
            expected: (n, n),
            actual: mat.shape(),
        });
    }
    Ok(())
}

/// Compute the determinant of a 2x2 matrix as `ad - bc`.
///
/// # Errors
///
/// If the matrix is not 2x2, an error is returned.
///
/// # Example
///
/// ```
/// use matalg::{det2, Matrix};
///
/// let m = Matrix::from_rows(&[[2.0, 3.0], [4.0, 5.0]]).unwrap();
/// assert_eq!(det2(&m).unwrap(), -2.0);
/// ```
pub fn det2<T: Float>(mat: &Matrix<T>) -> Result<T, MatrixError> {
    check_shape(mat, 2)?;
    Ok(mat[(0, 0)] * mat[(1, 1)] - mat[(0, 1)] * mat[(1, 0)])
}

/// Compute the determinant of a 3x3 matrix by cofactor expansion along the first row.
///
/// Each cofactor is the [`det2`] of the minor left after removing row 0 and the
/// column of the expanded element.
///
/// # Errors
///
/// If the matrix is not 3x3, an error is returned.
///
/// # Example
///
/// ```
/// use matalg::{det3, Matrix};
///
/// let m = Matrix::from_rows(&[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 1.0]]).unwrap();
/// assert_eq!(det3(&m).unwrap(), 0.0);
/// ```
pub fn det3<T: Float>(mat: &Matrix<T>) -> Result<T, MatrixError> {
    check_shape(mat, 3)?;

    // minor of (0, col) keeps rows 1..3 and the two remaining columns
    let minor = |col: usize| -> Result<T, MatrixError> {
        let keep = (0..3).filter(move |&c| c != col);
        let data = (1..3)
            .flat_map(|r| keep.clone().map(move |c| mat[(r, c)]))
            .collect();
        det2(&Matrix::from_shape_vec((2, 2), data)?)
    };

    Ok(mat[(0, 0)] * minor(0)? - mat[(0, 1)] * minor(1)? + mat[(0, 2)] * minor(2)?)
}

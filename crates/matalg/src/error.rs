use thiserror::Error;

/// An error type for matrix operations.
#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    /// The buffer length does not match the requested shape.
    #[error(
        "Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data"
    )]
    InvalidShape {
        /// Number of elements implied by the shape
        expected: usize,
        /// Number of elements in the data
        actual: usize,
    },

    /// Nested-row input where a row differs in length from the first one.
    #[error("Ragged rows: row {row} has {actual} values, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// The inner dimensions of a matrix product do not agree.
    #[error("Matrix dimensions don't match! A has {a_cols} columns and B has {b_rows} rows.")]
    DimensionMismatch {
        /// Number of columns of the left operand
        a_cols: usize,
        /// Number of rows of the right operand
        b_rows: usize,
    },

    /// Two matrices concatenated side by side have different row counts.
    #[error("Row count mismatch: {0} != {1}")]
    RowCountMismatch(usize, usize),

    /// Two vectors have different lengths.
    #[error("Length mismatch: {0} != {1}")]
    LengthMismatch(usize, usize),

    /// The matrix does not have the fixed shape the operation requires.
    #[error("Unexpected shape: expected {expected:?}, got {actual:?}")]
    UnexpectedShape {
        /// Required shape as (rows, cols)
        expected: (usize, usize),
        /// Shape of the input as (rows, cols)
        actual: (usize, usize),
    },

    /// The operation requires a square matrix.
    #[error("Matrix is not square: {0}x{1}")]
    NotSquare(usize, usize),

    /// The matrix has no inverse.
    #[error("Matrix is singular: rank {rank} < {size}")]
    Singular {
        /// Rank found during elimination
        rank: usize,
        /// Dimension of the square input
        size: usize,
    },

    /// Index exceeds the matrix bounds.
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index that was attempted
        index: usize,
        /// The size of the dimension being indexed
        size: usize,
    },
}

impl MatrixError {
    /// Creates an InvalidShape error.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }

    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(index: usize, size: usize) -> Self {
        Self::IndexOutOfBounds { index, size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = MatrixError::DimensionMismatch {
            a_cols: 3,
            b_rows: 2,
        };
        assert_eq!(
            err.to_string(),
            "Matrix dimensions don't match! A has 3 columns and B has 2 rows."
        );
    }
}

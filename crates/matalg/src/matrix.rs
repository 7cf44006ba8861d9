use std::ops::{Bound, Index, IndexMut, RangeBounds};

use num_traits::{One, Zero};

use crate::error::MatrixError;

/// A dense matrix stored as a contiguous row-major buffer.
///
/// Every row has exactly `cols` elements; the container cannot represent ragged rows.
/// A matrix with zero rows is valid and has shape `(0, 0)` when built from nested rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    /// Creates a new `Matrix` with the given shape and vector of data.
    ///
    /// # Arguments
    ///
    /// * `shape` - The number of rows and columns.
    /// * `data` - The elements in row-major order.
    ///
    /// # Errors
    ///
    /// If the number of elements does not match `rows * cols`, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        let numel = rows
            .checked_mul(cols)
            .ok_or_else(|| MatrixError::invalid_shape(usize::MAX, data.len()))?;
        if numel != data.len() {
            return Err(MatrixError::invalid_shape(numel, data.len()));
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a new `Matrix` with the given shape and a function of `(row, col)`.
    ///
    /// # Example
    ///
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::from_shape_fn((2, 2), |(i, j)| (i * 2 + j) as f64);
    /// assert_eq!(m.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    /// ```
    pub fn from_shape_fn<F>(shape: (usize, usize), mut f: F) -> Self
    where
        F: FnMut((usize, usize)) -> T,
    {
        let (rows, cols) = shape;
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f((i, j)));
            }
        }
        Self { data, rows, cols }
    }

    /// Returns the shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix has as many rows as columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns true if the matrix holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the data of the matrix as a row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the data of the matrix as a mutable row-major slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the matrix and returns the underlying row-major vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the element at `(row, col)`, or `None` when out of bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// assert_eq!(m.get(1, 0), Some(&3));
    /// assert!(m.get(2, 0).is_none());
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.data.get(self.offset(row, col))
    }

    /// Get a mutable reference to the element at `(row, col)`, or `None` when out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let offset = self.offset(row, col);
        self.data.get_mut(offset)
    }

    /// Returns row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Returns row `row` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.rows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        let cols = self.cols;
        &mut self.data[start..start + cols]
    }

    /// Returns an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> impl Iterator<Item = &[T]> {
        (0..self.rows).map(move |r| self.row(r))
    }

    /// Swaps rows `a` and `b` in place.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` are out of bounds.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        assert!(
            a < self.rows && b < self.rows,
            "row swap ({a}, {b}) out of bounds for {} rows",
            self.rows
        );
        if a == b {
            return;
        }
        let (lo, hi) = (a.min(b), a.max(b));
        let cols = self.cols;
        let (head, tail) = self.data.split_at_mut(hi * cols);
        head[lo * cols..(lo + 1) * cols].swap_with_slice(&mut tail[..cols]);
    }
}

impl<T: Clone> Matrix<T> {
    /// Creates a new `Matrix` from a sequence of equally long rows.
    ///
    /// # Arguments
    ///
    /// * `rows` - The rows of the matrix, as arrays, vectors or slices.
    ///
    /// # Errors
    ///
    /// If a row differs in length from the first row, an error naming that row is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use matalg::{Matrix, MatrixError};
    ///
    /// let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape(), (2, 2));
    ///
    /// let ragged = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    /// assert_eq!(
    ///     ragged,
    ///     Err(MatrixError::RaggedRows { row: 1, expected: 2, actual: 1 })
    /// );
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Returns a copy of the matrix as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.row_iter().map(|r| r.to_vec()).collect()
    }

    /// Returns a new matrix holding the columns in `range`.
    ///
    /// # Errors
    ///
    /// If the range does not fit inside the matrix columns, an error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use matalg::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// let right = m.columns(1..).unwrap();
    /// assert_eq!(right.to_rows(), vec![vec![2, 3], vec![5, 6]]);
    /// ```
    pub fn columns<R: RangeBounds<usize>>(&self, range: R) -> Result<Self, MatrixError> {
        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s
                .checked_add(1)
                .ok_or_else(|| MatrixError::index_out_of_bounds(s, self.cols))?,
        };
        let end = match range.end_bound() {
            Bound::Unbounded => self.cols,
            Bound::Included(&e) => e
                .checked_add(1)
                .ok_or_else(|| MatrixError::index_out_of_bounds(e, self.cols))?,
            Bound::Excluded(&e) => e,
        };
        if end > self.cols {
            return Err(MatrixError::index_out_of_bounds(end, self.cols));
        }
        if start > end {
            return Err(MatrixError::index_out_of_bounds(start, end));
        }

        let new_cols = end - start;
        let mut data = Vec::with_capacity(self.rows * new_cols);
        for row in self.row_iter() {
            data.extend_from_slice(&row[start..end]);
        }
        Ok(Self {
            data,
            rows: self.rows,
            cols: new_cols,
        })
    }
}

impl<T: Clone + Zero> Matrix<T> {
    /// Creates a matrix of the given shape filled with zeros.
    pub fn zeros(shape: (usize, usize)) -> Self {
        let (rows, cols) = shape;
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }
}

impl<T: Clone + Zero + One> Matrix<T> {
    /// Creates the `n x n` identity matrix.
    ///
    /// # Example
    ///
    /// ```
    /// use matalg::Matrix;
    ///
    /// let eye = Matrix::<f64>::identity(2);
    /// assert_eq!(eye.as_slice(), &[1.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn identity(n: usize) -> Self {
        Self::from_shape_fn((n, n), |(i, j)| if i == j { T::one() } else { T::zero() })
    }
}

/// Concatenates two matrices side by side, producing `[a | b]`.
///
/// # Errors
///
/// If the matrices have a different number of rows, an error is returned.
///
/// # Example
///
/// ```
/// use matalg::{hstack, Matrix};
///
/// let a = Matrix::from_rows(&[[1.0], [2.0]]).unwrap();
/// let b = Matrix::<f64>::identity(2);
/// let ab = hstack(&a, &b).unwrap();
/// assert_eq!(ab.to_rows(), vec![vec![1.0, 1.0, 0.0], vec![2.0, 0.0, 1.0]]);
/// ```
pub fn hstack<T: Clone>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if a.rows != b.rows {
        return Err(MatrixError::RowCountMismatch(a.rows, b.rows));
    }
    let cols = a.cols + b.cols;
    let mut data = Vec::with_capacity(a.rows * cols);
    for (ra, rb) in a.row_iter().zip(b.row_iter()) {
        data.extend_from_slice(ra);
        data.extend_from_slice(rb);
    }
    Ok(Matrix {
        data,
        rows: a.rows,
        cols,
    })
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for shape ({}, {})",
            self.rows,
            self.cols
        );
        &self.data[self.offset(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let (row, col) = index;
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for shape ({}, {})",
            self.rows,
            self.cols
        );
        let offset = self.offset(row, col);
        &mut self.data[offset]
    }
}

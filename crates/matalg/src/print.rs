use std::{fmt, io};

use crate::matrix::Matrix;

/// Rows are separated by newlines and values by two spaces.
///
/// Values use their `Debug` representation, so floats always show a decimal
/// point (`1.0`, `-0.5`) and print with enough digits to round-trip.
impl<T: fmt::Debug> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{value:?}")?;
            }
        }
        Ok(())
    }
}

/// Write a matrix to `writer`, followed by a newline.
///
/// # Example
///
/// ```
/// use matalg::{print_matrix, Matrix};
///
/// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.5]]).unwrap();
/// let mut out = Vec::new();
/// print_matrix(&m, &mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "1.0  2.0\n3.0  4.5\n");
/// ```
pub fn print_matrix<T: fmt::Debug, W: io::Write>(
    mat: &Matrix<T>,
    writer: &mut W,
) -> io::Result<()> {
    writeln!(writer, "{mat}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MatrixError;

    #[test]
    fn test_display() -> Result<(), MatrixError> {
        let m = Matrix::from_rows(&[[1.0, -0.5, 3.25], [0.0, 10.0, 0.1]])?;
        assert_eq!(m.to_string(), "1.0  -0.5  3.25\n0.0  10.0  0.1");
        Ok(())
    }

    #[test]
    fn test_display_round_trip_digits() -> Result<(), MatrixError> {
        let m = Matrix::from_rows(&[[0.1 + 0.2]])?;
        assert_eq!(m.to_string(), "0.30000000000000004");
        Ok(())
    }

    #[test]
    fn test_print_empty() -> std::io::Result<()> {
        let mut out = Vec::new();
        print_matrix(&Matrix::<f64>::zeros((0, 0)), &mut out)?;
        assert_eq!(out, b"\n");
        Ok(())
    }
}

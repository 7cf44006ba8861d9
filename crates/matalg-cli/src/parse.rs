use matalg::{Matrix, MatrixError};
use thiserror::Error;

/// Errors raised while reading command line input.
#[derive(Error, Debug, PartialEq)]
pub enum CliError {
    /// The literal holds no values.
    #[error("empty input")]
    EmptyInput,

    /// A value is not a number.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// The parsed rows do not form a matrix.
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// Determinants are only available in closed form for 2x2 and 3x3.
    #[error("determinant needs a 2x2 or 3x3 matrix, got {0}x{1}")]
    UnsupportedDeterminant(usize, usize),
}

/// Parse a comma separated list of numbers, e.g. `"1, 2.5, -3"`.
pub fn parse_vector(value: &str) -> Result<Vec<f64>, CliError> {
    if value.trim().is_empty() {
        return Err(CliError::EmptyInput);
    }
    value
        .split(',')
        .map(|v| {
            let v = v.trim();
            v.parse::<f64>()
                .map_err(|_| CliError::InvalidNumber(v.to_string()))
        })
        .collect()
}

/// Parse a matrix literal with rows separated by `;`, e.g. `"1,2;3,4"`.
pub fn parse_matrix(value: &str) -> Result<Matrix<f64>, CliError> {
    let rows = value
        .split(';')
        .map(parse_vector)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Matrix::from_rows(&rows)?)
}

pub fn matrix_arg(value: &str) -> Result<Matrix<f64>, String> {
    parse_matrix(value).map_err(|e| e.to_string())
}

/// A vector given as a single option value.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorArg(pub Vec<f64>);

pub fn vector_arg(value: &str) -> Result<VectorArg, String> {
    parse_vector(value).map(VectorArg).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_matrix() -> Result<(), CliError> {
        let m = parse_matrix(" 1, 2 ; 3,4.5 ")?;
        assert_eq!(m.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.5]]);
        Ok(())
    }

    #[test]
    fn test_parse_matrix_ragged() {
        assert_eq!(
            parse_matrix("1,2;3"),
            Err(CliError::Matrix(MatrixError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 1
            }))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            parse_vector("1,x,3"),
            Err(CliError::InvalidNumber("x".to_string()))
        );
        assert_eq!(parse_matrix("1,2;"), Err(CliError::EmptyInput));
        assert_eq!(parse_vector("  "), Err(CliError::EmptyInput));
    }
}

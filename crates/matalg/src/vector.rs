use num_traits::Float;

use crate::error::MatrixError;

/// Compute the dot product between two vectors.
///
/// # Arguments
///
/// * `a` - First vector
/// * `b` - Second vector
///
/// # Returns
///
/// The sum of the element-wise products of `a` and `b`.
///
/// # Errors
///
/// If the vectors have different lengths, an error is returned.
///
/// # Example
///
/// ```
/// use matalg::dot_product;
///
/// let result = dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(result, 32.0); // 1*4 + 2*5 + 3*6
/// ```
pub fn dot_product<T: Float>(a: &[T], b: &[T]) -> Result<T, MatrixError> {
    if a.len() != b.len() {
        return Err(MatrixError::LengthMismatch(a.len(), b.len()));
    }

    Ok(a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y))
}

/// Compute the Euclidean length of a vector.
///
/// The empty vector and the zero vector both have length zero.
///
/// # Example
///
/// ```
/// use matalg::vector_length;
///
/// assert_eq!(vector_length(&[3.0, 4.0]), 5.0);
/// ```
pub fn vector_length<T: Float>(a: &[T]) -> T {
    a.iter().fold(T::zero(), |acc, &x| acc + x * x).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_product_length_mismatch() {
        let result = dot_product(&[1.0, 2.0, 3.0], &[4.0, 5.0]);
        assert_eq!(result, Err(MatrixError::LengthMismatch(3, 2)));
    }

    #[test]
    fn test_dot_product_f32() -> Result<(), MatrixError> {
        let result = dot_product(&[1.0f32, 2.0, 3.0], &[4.0, 5.0, 6.0])?;
        assert_eq!(result, 32.0);
        Ok(())
    }

    #[test]
    fn test_dot_product_empty() -> Result<(), MatrixError> {
        let empty: [f64; 0] = [];
        assert_eq!(dot_product(&empty, &empty)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_vector_length() {
        assert_eq!(vector_length(&[3.0, 4.0]), 5.0);
        assert_eq!(vector_length(&[0.0f64, 0.0, 0.0]), 0.0);
        assert_eq!(vector_length::<f64>(&[]), 0.0);
        assert_eq!(vector_length(&[-2.0f32]), 2.0);
    }
}

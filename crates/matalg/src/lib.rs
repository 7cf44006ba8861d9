#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Overview
//!
//! `matalg` provides a small set of dense linear-algebra routines over an owned,
//! row-major [`Matrix`] container: closed-form determinants, transpose, vector dot
//! product and length, matrix multiplication, reduction to reduced row-echelon form
//! and inversion through Gauss-Jordan elimination of the augmented matrix `[A | I]`.
//!
//! # Quick Start
//!
//! ```rust
//! use matalg::{inverse, matmul, Matrix};
//!
//! let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
//! let a_inv = inverse(&a).unwrap();
//!
//! let eye = matmul(&a, &a_inv).unwrap();
//! assert!((eye[(0, 0)] - 1.0_f64).abs() < 1e-12);
//! assert!(eye[(1, 0)].abs() < 1e-12);
//! ```

/// Closed-form determinants of small matrices.
pub mod determinant;

/// Error types for matrix operations.
///
/// Defines [`MatrixError`] for every failure reported by this crate.
pub mod error;

/// Matrix inversion through row reduction of the augmented matrix.
pub mod inverse;

/// Dense row-major matrix container.
pub mod matrix;

/// Matrix products and transposition.
pub mod ops;

/// Text rendering of matrices.
pub mod print;

/// Gauss-Jordan elimination to reduced row-echelon form.
pub mod rref;

/// Serialization support for [`Matrix`].
#[cfg(feature = "serde")]
pub mod serde;

/// Operations on plain vectors.
pub mod vector;

pub use crate::determinant::{det2, det3};
pub use crate::error::MatrixError;
pub use crate::inverse::{inverse, inverse_with_tolerance};
pub use crate::matrix::{hstack, Matrix};
pub use crate::ops::{matmul, transpose};
pub use crate::print::print_matrix;
pub use crate::rref::{rank, red_row_echelon, reduce_row_echelon, to_red_row_echelon};
pub use crate::vector::{dot_product, vector_length};

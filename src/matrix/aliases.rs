//! Shorthand names for the matrix shapes the camera and mesh code uses.
//!
//! Vector aliases live next to the vector operations in
//! [`vector`](crate::matrix::vector).

use crate::Matrix;

// ── Square ─────────────────────────────────────────────────────────

/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;

// ── Rectangular ────────────────────────────────────────────────────

/// 2×3 matrix.
pub type Matrix2x3<T> = Matrix<T, 2, 3>;
/// 2×4 matrix.
pub type Matrix2x4<T> = Matrix<T, 2, 4>;
/// 3×2 matrix.
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
/// 3×4 matrix.
pub type Matrix3x4<T> = Matrix<T, 3, 4>;
/// 4×2 matrix.
pub type Matrix4x2<T> = Matrix<T, 4, 2>;
/// 4×3 matrix.
pub type Matrix4x3<T> = Matrix<T, 4, 3>;

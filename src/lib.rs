//! # matquat
//!
//! Fixed-size matrices, vectors and quaternions for small real-time
//! rendering code, no-std compatible. Everything lives on the stack; shapes
//! are const generics.
//!
//! ## Quick start
//!
//! ```
//! use matquat::{Axis, ColumnVector, Matrix, Quaternion};
//!
//! let a = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
//! assert_eq!(a.determinant().unwrap(), 10.0);
//! let inv = a.inverse().unwrap();
//! assert_eq!(inv, Matrix::new([[0.6, -0.7], [-0.2, 0.4]]));
//!
//! let v = ColumnVector::from_column([1.0_f64, 0.0, 0.0]);
//! let w = v.rotate_vector(90.0, Axis::Z).unwrap();
//! assert!((w[(1, 0)] - 1.0).abs() < 1e-12);
//!
//! let q = Quaternion::new(1.0, 2.0, 3.0, 4.0);
//! assert_eq!(q.conjugate().conjugate(), q);
//! ```
//!
//! ## Value semantics
//!
//! [`Matrix`] and [`Quaternion`] are `Copy`. Operators and methods return
//! new values and leave their operands alone; `+=`, `-=` and `*=` are the
//! in-place forms. Operations with preconditions return [`Result`] and
//! check everything before computing, so an `Err` never comes with a
//! half-updated value.
//!
//! ## Modules
//!
//! - [`matrix`]: `Matrix<T, R, C>` with row-major `[[T; C]; R]` storage.
//!   Arithmetic, 1-based checked access, determinant / inverse / minor for
//!   2×2 through 4×4, and vector operations (dot, cross, magnitude, angle,
//!   normalize, axis rotation) on any one-row or one-column shape.
//!   [`Vector<T, N>`] and [`ColumnVector<T, N>`] are aliases for 1-row and
//!   1-column matrices.
//!
//! - [`quaternion`]: `w + xi + yj + zk` with the Hamilton product, norm,
//!   conjugate, normalize and inverse.
//!
//! - [`camera`]: `look_at` and `perspective` matrices.
//!
//! - [`traits`]: element traits ([`Scalar`], [`FloatScalar`]) and the two
//!   product capabilities, [`MatrixProduct`] and [`ElementwiseProduct`].
//!
//! - [`error`]: the crate-wide [`Error`].
//!
//! ## Cargo features
//!
//! | Feature  | Default | Description |
//! |----------|---------|-------------|
//! | `std`    | yes     | Implies `alloc`. Hardware FPU via system libm |
//! | `alloc`  | via std | [`circle_table`] (returns a `Vec`) |
//! | `approx` | no      | `approx` crate traits for `Matrix` and `Quaternion` |
//! | `all`    | no      | `std` + `approx` |
//!
//! Without `std`, float math falls back to the pure-Rust `libm`.
//!
//! ## Logging
//!
//! Rejected operations are reported through the [`log`] facade at `debug`
//! level, and the quaternion zero-guards at `trace` level. Nothing is
//! printed unless the application installs a logger.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod camera;
#[cfg(feature = "alloc")]
mod circle;
pub mod error;
pub mod matrix;
pub mod quaternion;
#[cfg(feature = "approx")]
mod tolerance;
pub mod traits;

#[cfg(feature = "alloc")]
pub use circle::circle_table;
pub use error::{Error, Result};
pub use matrix::aliases::{
    Matrix2, Matrix2x3, Matrix2x4, Matrix3, Matrix3x2, Matrix3x4, Matrix4, Matrix4x2, Matrix4x3,
};
pub use matrix::vector::{
    Axis, ColumnVector, ColumnVector2, ColumnVector3, ColumnVector4, Vector, Vector2, Vector3,
    Vector4,
};
pub use matrix::Matrix;
pub use quaternion::Quaternion;
pub use traits::{ElementwiseProduct, FloatScalar, MatrixProduct, Scalar};

/// Errors from matrix, vector and quaternion operations.
///
/// Every fallible operation validates its preconditions before producing a
/// result, so an `Err` never comes with a partially updated value.
///
/// ```
/// use matquat::{Error, Matrix};
///
/// let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.inverse().unwrap_err(), Error::Singular);
///
/// let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
/// assert_eq!(m.try_div(0.0).unwrap_err(), Error::DivideByZero);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operand does not have the shape the operation needs
    /// (square, vector, matching dimensions, supported size).
    #[error("shape error: {0}")]
    Shape(&'static str),
    /// A 1-based coordinate lies outside the declared bounds.
    #[error("index ({row}, {col}) out of range for a {rows}x{cols} matrix (indices are 1-based)")]
    Index {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// An initializer sequence holds more elements than the matrix.
    #[error("initializer has {len} elements but the matrix holds {capacity}")]
    Length { len: usize, capacity: usize },
    /// A scalar (or elementwise) divisor is exactly zero.
    #[error("division by zero")]
    DivideByZero,
    /// The determinant is zero, so no inverse exists.
    #[error("matrix is singular (determinant is zero)")]
    Singular,
}

pub type Result<T> = core::result::Result<T, Error>;

/// Log a rejected operation and return it as an `Err`.
#[inline]
pub(crate) fn reject<T>(err: Error) -> Result<T> {
    log::debug!("rejected: {err}");
    Err(err)
}

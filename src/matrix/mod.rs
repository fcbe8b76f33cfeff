pub mod aliases;
mod ops;
mod square;
mod util;
pub mod vector;

use core::ops::{Index, IndexMut};

use crate::error::{reject, Error, Result};
use crate::traits::Scalar;

/// Fixed-size matrix with `R` rows and `C` columns.
///
/// Storage is row-major: `data[row][col]`.
/// Stack-allocated, no-std compatible. A matrix with one row or one column
/// doubles as a vector (see [`Matrix::is_vector`]).
///
/// Two accessors are provided: the checked, 1-based [`Matrix::get`] /
/// [`Matrix::get_mut`], and the usual 0-based `m[(row, col)]` indexing,
/// which panics when out of bounds.
///
/// Every matrix has at least one row and one column. A zero dimension is
/// rejected when the constructor is instantiated:
///
/// ```compile_fail
/// use matquat::Matrix;
/// let _m = Matrix::<f64, 1, 0>::zeros();
/// ```
///
/// ```compile_fail
/// use matquat::Matrix;
/// let _m: Matrix<i32, 0, 3> = Matrix::new([]);
/// ```
///
/// # Examples
///
/// ```
/// use matquat::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(*a.get(1, 2).unwrap(), 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b: Matrix<f64, 3, 3> = Matrix::eye();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) data: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], ...]` (R arrays of C elements each).
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        const { assert!(R >= 1 && C >= 1, "a matrix needs at least one row and one column") }
        Self { data: rows }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }

    /// `true` when the matrix has exactly one row or one column.
    #[inline]
    pub const fn is_vector(&self) -> bool {
        R == 1 || C == 1
    }

    /// Total number of elements, `R * C`.
    #[inline]
    pub const fn len(&self) -> usize {
        R * C
    }

    /// Always `false`: shapes with a zero dimension do not construct.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        R * C == 0
    }

    /// `true` when rows and columns agree.
    #[inline]
    pub const fn is_square(&self) -> bool {
        R == C
    }

    /// View the elements as a flat slice in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// View the elements as a mutable flat slice in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Validate a 1-based `(row, col)` pair and convert it to 0-based.
    pub(crate) fn check_index(row: usize, col: usize) -> Result<(usize, usize)> {
        if row == 0 || row > R || col == 0 || col > C {
            return reject(Error::Index {
                row,
                col,
                rows: R,
                cols: C,
            });
        }
        Ok((row - 1, col - 1))
    }

    /// Checked element access with 1-based coordinates.
    ///
    /// ```
    /// use matquat::{Error, Matrix};
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(*m.get(2, 1).unwrap(), 3);
    /// assert!(matches!(m.get(0, 1), Err(Error::Index { .. })));
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Result<&T> {
        let (i, j) = Self::check_index(row, col)?;
        Ok(&self.data[i][j])
    }

    /// Checked mutable element access with 1-based coordinates.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T> {
        let (i, j) = Self::check_index(row, col)?;
        Ok(&mut self.data[i][j])
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self::new([[T::zero(); C]; R])
    }

    /// Create a matrix from a row-major element sequence.
    ///
    /// A shorter sequence leaves the remaining entries at zero; a longer one
    /// is rejected with [`Error::Length`].
    ///
    /// ```
    /// use matquat::Matrix;
    /// let m: Matrix<i32, 2, 2> = Matrix::from_slice(&[1, 2, 3]).unwrap();
    /// assert_eq!(m, Matrix::new([[1, 2], [3, 0]]));
    /// assert!(Matrix::<i32, 2, 2>::from_slice(&[1, 2, 3, 4, 5]).is_err());
    /// ```
    pub fn from_slice(values: &[T]) -> Result<Self> {
        if values.len() > R * C {
            return reject(Error::Length {
                len: values.len(),
                capacity: R * C,
            });
        }
        let mut m = Self::zeros();
        for (dst, &src) in m.as_mut_slice().iter_mut().zip(values) {
            *dst = src;
        }
        Ok(m)
    }

    /// Reinterpret the row-major element sequence as an `R2×C2` matrix.
    ///
    /// The element count must be preserved (`R2 * C2 == R * C`), otherwise
    /// [`Error::Shape`] is returned. The original is left untouched.
    ///
    /// ```
    /// use matquat::Matrix;
    /// let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    /// let r: Matrix<i32, 3, 2> = m.reshape().unwrap();
    /// assert_eq!(r, Matrix::new([[1, 2], [3, 4], [5, 6]]));
    /// ```
    pub fn reshape<const R2: usize, const C2: usize>(&self) -> Result<Matrix<T, R2, C2>> {
        if R2 * C2 != R * C {
            return reject(Error::Shape("reshape must preserve the element count"));
        }
        Matrix::from_slice(self.as_slice())
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Create an identity matrix (square matrices only).
    pub fn eye() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Scalar, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
    type Error = Error;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::from_slice(values)
    }
}

// Index by 0-based (row, col) tuple
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row][col]
    }
}

pub use aliases::*;
pub use vector::*;

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{reject, Error, Result};
use crate::traits::{ElementwiseProduct, MatrixProduct, Scalar};
use crate::Matrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        out += rhs;
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..R {
            for j in 0..C {
                self[(i, j)] = self[(i, j)] + rhs[(i, j)];
            }
        }
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        out -= rhs;
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..R {
            for j in 0..C {
                self[(i, j)] = self[(i, j)] - rhs[(i, j)];
            }
        }
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut out = self;
        for x in out.as_mut_slice() {
            *x = T::zero() - *x;
        }
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Matrix<T, R, C> {
        (*self).neg()
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: &Matrix<T, R, C>) {
        self.add_assign(*rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: &Matrix<T, R, C>) {
        self.sub_assign(*rhs);
    }
}

// ── Matrix multiplication: (R×C) * (C×N) → (R×N) ──────────────────
// Mismatched inner dimensions do not type-check.

impl<T: Scalar, const R: usize, const C: usize, const N: usize> Mul<Matrix<T, C, N>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, N>;

    fn mul(self, rhs: Matrix<T, C, N>) -> Matrix<T, R, N> {
        let mut out = Matrix::<T, R, N>::zeros();
        for i in 0..R {
            for j in 0..N {
                let mut sum = T::zero();
                for k in 0..C {
                    sum = sum + self[(i, k)] * rhs[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize, const N: usize> MatrixProduct<Matrix<T, C, N>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, N>;

    #[inline]
    fn matrix_product(&self, rhs: &Matrix<T, C, N>) -> Matrix<T, R, N> {
        *self * *rhs
    }
}

// ── Element-wise multiplication (Hadamard product) ──────────────────

impl<T: Scalar, const R: usize, const C: usize> ElementwiseProduct for Matrix<T, R, C> {
    /// `c[i][j] = a[i][j] * b[i][j]`. This is how vectors get scaled
    /// componentwise.
    fn elementwise_product(&self, rhs: &Self) -> Self {
        let mut out = *self;
        for (x, &y) in out.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *x = *x * y;
        }
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Element-wise quotient of two vectors: `c[i] = a[i] / b[i]`.
    ///
    /// Fails with [`Error::Shape`] unless both operands are vectors, and
    /// with [`Error::DivideByZero`] if any divisor entry is zero.
    ///
    /// ```
    /// use matquat::ColumnVector;
    /// let a = ColumnVector::from_column([2.0, 3.0, 9.0]);
    /// let b = ColumnVector::from_column([1.0, 2.0, 3.0]);
    /// let q = a.elementwise_quotient(&b).unwrap();
    /// assert_eq!(q, ColumnVector::from_column([2.0, 1.5, 3.0]));
    /// ```
    pub fn elementwise_quotient(&self, rhs: &Self) -> Result<Self> {
        if !self.is_vector() {
            return reject(Error::Shape("elementwise quotient requires vectors"));
        }
        if rhs.as_slice().iter().any(|&y| y == T::zero()) {
            return reject(Error::DivideByZero);
        }
        let mut out = *self;
        for (x, &y) in out.as_mut_slice().iter_mut().zip(rhs.as_slice()) {
            *x = *x / y;
        }
        Ok(out)
    }
}

// ── Scalar broadcast: matrix + s, matrix - s, matrix * s ────────────

impl<T: Scalar, const R: usize, const C: usize> Add<T> for Matrix<T, R, C> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        let mut out = self;
        out += rhs;
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign<T> for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: T) {
        for x in self.as_mut_slice() {
            *x = *x + rhs;
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub<T> for Matrix<T, R, C> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        let mut out = self;
        out -= rhs;
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign<T> for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: T) {
        for x in self.as_mut_slice() {
            *x = *x - rhs;
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        out *= rhs;
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.as_mut_slice() {
            *x = *x * rhs;
        }
    }
}

// ── Scalar division ─────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Divide every element by `rhs`.
    ///
    /// Fails with [`Error::DivideByZero`] when `rhs` is exactly zero.
    pub fn try_div(&self, rhs: T) -> Result<Self> {
        if rhs == T::zero() {
            return reject(Error::DivideByZero);
        }
        let mut out = *self;
        for x in out.as_mut_slice() {
            *x = *x / rhs;
        }
        Ok(out)
    }
}

// ── Reference variants for same-shape binary ops ────────────────────
// Matrix is Copy, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const R: usize, const C: usize> $Op<Matrix<T, R, C>>
            for &Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: Matrix<T, R, C>) -> Matrix<T, R, C> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>>
            for Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>>
            for &Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

// ── Reference variants for matrix multiplication ────────────────────

impl<T: Scalar, const R: usize, const C: usize, const N: usize> Mul<Matrix<T, C, N>>
    for &Matrix<T, R, C>
{
    type Output = Matrix<T, R, N>;
    fn mul(self, rhs: Matrix<T, C, N>) -> Matrix<T, R, N> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize, const N: usize> Mul<&Matrix<T, C, N>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, N>;
    fn mul(self, rhs: &Matrix<T, C, N>) -> Matrix<T, R, N> {
        self.mul(*rhs)
    }
}

impl<T: Scalar, const R: usize, const C: usize, const N: usize> Mul<&Matrix<T, C, N>>
    for &Matrix<T, R, C>
{
    type Output = Matrix<T, R, N>;
    fn mul(self, rhs: &Matrix<T, C, N>) -> Matrix<T, R, N> {
        (*self).mul(*rhs)
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs * self
                }
            }

            impl<const R: usize, const C: usize> Mul<&Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: &Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Transpose: (R×C) → (C×R), as a new value.
    pub fn transpose(&self) -> Matrix<T, C, R> {
        let mut out = Matrix::<T, C, R>::zeros();
        for i in 0..R {
            for j in 0..C {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }
}

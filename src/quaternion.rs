use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{reject, Error, Result};
use crate::traits::{FloatScalar, Scalar};

/// Quaternion `w + xi + yj + zk`.
///
/// Scalar-first convention: `w` is the real part and `(x, y, z)` the
/// imaginary part. Unit length is not enforced; [`Quaternion::normalize`]
/// produces a unit quaternion when one is needed. There is no conversion
/// to or from [`Matrix`](crate::Matrix).
///
/// ```
/// use matquat::Quaternion;
///
/// let q = Quaternion::new(1.0, 0.0, 1.0, 0.0);
/// let r = Quaternion::new(1.0, 0.5, 0.5, 0.75);
/// assert_eq!(q * r, Quaternion::new(0.5, 1.25, 1.5, 0.25));
/// assert_ne!(q * r, r * q);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion<T> {
    pub w: T,
    pub x: T,
    pub y: T,
    pub z: T,
}

// ── Constructors ─────────────────────────────────────────────────────

impl<T: Scalar> Quaternion<T> {
    /// Create a quaternion from components.
    #[inline]
    pub fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// All four components zero.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Identity quaternion `(1, 0, 0, 0)`.
    #[inline]
    pub fn identity() -> Self {
        Self::new(T::one(), T::zero(), T::zero(), T::zero())
    }

    fn map(self, f: impl Fn(T) -> T) -> Self {
        Self::new(f(self.w), f(self.x), f(self.y), f(self.z))
    }
}

impl<T: Scalar> Default for Quaternion<T> {
    fn default() -> Self {
        Self::zero()
    }
}

// ── Core operations ──────────────────────────────────────────────────

impl<T: Scalar> Quaternion<T> {
    /// Conjugate: `(w, -x, -y, -z)`.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(
            self.w,
            T::zero() - self.x,
            T::zero() - self.y,
            T::zero() - self.z,
        )
    }

    /// Squared norm: `w² + x² + y² + z²`.
    #[inline]
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        self.w * rhs.w + self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Divide every component by `rhs`.
    ///
    /// Fails with [`Error::DivideByZero`] when `rhs` is exactly zero.
    pub fn try_div(&self, rhs: T) -> Result<Self> {
        if rhs == T::zero() {
            return reject(Error::DivideByZero);
        }
        Ok(self.map(|c| c / rhs))
    }
}

impl<T: FloatScalar> Quaternion<T> {
    /// Euclidean length.
    #[inline]
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Unit-length copy. A zero quaternion comes back unchanged.
    ///
    /// ```
    /// use matquat::Quaternion;
    /// let q = Quaternion::new(0.0, 3.0, 0.0, 4.0).normalize();
    /// assert_eq!(q, Quaternion::new(0.0, 0.6, 0.0, 0.8));
    /// assert_eq!(Quaternion::<f64>::zero().normalize(), Quaternion::zero());
    /// ```
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        if n == T::zero() {
            log::trace!("normalize: zero quaternion left unchanged");
            return *self;
        }
        self.map(|c| c / n)
    }

    /// Multiplicative inverse, `conjugate / norm²`.
    ///
    /// A zero quaternion comes back unchanged.
    pub fn inverse(&self) -> Self {
        let n2 = self.norm_squared();
        if n2 == T::zero() {
            log::trace!("inverse: zero quaternion left unchanged");
            return *self;
        }
        self.conjugate().map(|c| c / n2)
    }
}

// ── Operators ────────────────────────────────────────────────────────

// Hamilton product: q1 * q2. Subtracted terms are grouped last so
// unsigned component types only subtract once per component.
impl<T: Scalar> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let (a1, b1, c1, d1) = (self.w, self.x, self.y, self.z);
        let (a2, b2, c2, d2) = (rhs.w, rhs.x, rhs.y, rhs.z);
        Self {
            w: a1 * a2 - (b1 * b2 + c1 * c2 + d1 * d2),
            x: (a1 * b2 + b1 * a2 + c1 * d2) - d1 * c2,
            y: (a1 * c2 + c1 * a2 + d1 * b2) - b1 * d2,
            z: (a1 * d2 + b1 * c2 + d1 * a2) - c1 * b2,
        }
    }
}

impl<T: Scalar> Mul<&Quaternion<T>> for Quaternion<T> {
    type Output = Quaternion<T>;

    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        self * *rhs
    }
}

impl<T: Scalar> Mul<Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;

    fn mul(self, rhs: Quaternion<T>) -> Quaternion<T> {
        *self * rhs
    }
}

impl<T: Scalar> Mul<&Quaternion<T>> for &Quaternion<T> {
    type Output = Quaternion<T>;

    fn mul(self, rhs: &Quaternion<T>) -> Quaternion<T> {
        *self * *rhs
    }
}

impl<T: Scalar> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> AddAssign for Quaternion<T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Quaternion<T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

// Scalar broadcast over all four components

impl<T: Scalar> Add<T> for Quaternion<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self {
        self.map(|c| c + rhs)
    }
}

impl<T: Scalar> Sub<T> for Quaternion<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self {
        self.map(|c| c - rhs)
    }
}

impl<T: Scalar> Mul<T> for Quaternion<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|c| c * rhs)
    }
}

impl<T: Scalar> AddAssign<T> for Quaternion<T> {
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign<T> for Quaternion<T> {
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Quaternion<T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

// Negation
impl<T: Scalar> Neg for Quaternion<T> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| T::zero() - c)
    }
}

impl<T: Scalar> Neg for &Quaternion<T> {
    type Output = Quaternion<T>;

    fn neg(self) -> Quaternion<T> {
        -*self
    }
}

// ── Display ──────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} + {}i + {}j + {}k)", self.w, self.x, self.y, self.z)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

use core::fmt;
use core::ops::{Index, IndexMut};
use core::str::FromStr;

use crate::error::{reject, Error, Result};
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

/// A row vector (1×N matrix).
///
/// Row vectors support single-index access (`v[i]`). Use [`ColumnVector`]
/// for column vectors, which are what [`Matrix::rotate_vector`] and the
/// camera helpers expect.
///
/// # Examples
///
/// ```
/// use matquat::Vector;
///
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert_eq!(v[0], 3.0);
/// assert_eq!(v.dot(&v).unwrap(), 25.0);
/// assert_eq!(v.magnitude().unwrap(), 5.0);
/// ```
pub type Vector<T, const N: usize> = Matrix<T, 1, N>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a row vector from a 1D array.
    ///
    /// ```
    /// use matquat::Vector;
    /// let v = Vector::from_array([1.0, 2.0, 3.0]);
    /// assert_eq!(v[0], 1.0);
    /// ```
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self::new([data])
    }
}

// Single-index access: v[i] instead of v[(0, i)]
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self[(0, i)]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self[(0, i)]
    }
}

/// A column vector (N×1 matrix).
///
/// `(M×N) * (N×1) → (M×1)`, so matrices act on column vectors from the
/// left. Convert between row and column vectors with `.transpose()`.
/// Single-element access uses `cv[(i, 0)]`.
pub type ColumnVector<T, const N: usize> = Matrix<T, N, 1>;

impl<T: Scalar, const N: usize> ColumnVector<T, N> {
    /// Create a column vector from a 1D array.
    ///
    /// ```
    /// use matquat::ColumnVector;
    /// let cv = ColumnVector::from_column([1.0, 2.0, 3.0]);
    /// assert_eq!(cv[(0, 0)], 1.0);
    /// assert_eq!(cv[(2, 0)], 3.0);
    /// ```
    #[inline]
    pub fn from_column(data: [T; N]) -> Self {
        Self::new(data.map(|x| [x]))
    }
}

// ── Vector size aliases ─────────────────────────────────────────────

/// A 2-element row vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-element row vector.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-element row vector.
pub type Vector4<T> = Vector<T, 4>;

/// A 2-element column vector.
pub type ColumnVector2<T> = ColumnVector<T, 2>;
/// A 3-element column vector.
pub type ColumnVector3<T> = ColumnVector<T, 3>;
/// A 4-element column vector.
pub type ColumnVector4<T> = ColumnVector<T, 4>;

// ── Rotation axis ───────────────────────────────────────────────────

/// Principal axis for [`Matrix::rotate_vector`].
///
/// Parses from `"x"`, `"y"`, `"z"` (or the uppercase letters); anything else
/// is an [`Error::Shape`].
///
/// ```
/// use matquat::Axis;
/// assert_eq!("z".parse::<Axis>().unwrap(), Axis::Z);
/// assert_eq!(Axis::try_from('Y').unwrap(), Axis::Y);
/// assert!("w".parse::<Axis>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl TryFrom<char> for Axis {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        match c {
            'x' | 'X' => Ok(Axis::X),
            'y' | 'Y' => Ok(Axis::Y),
            'z' | 'Z' => Ok(Axis::Z),
            _ => reject(Error::Shape("rotation axis must be x, y or z")),
        }
    }
}

impl FromStr for Axis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Axis::try_from(c),
            _ => reject(Error::Shape("rotation axis must be x, y or z")),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}

// ── Vector operations on any one-row or one-column matrix ───────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    fn require_vector(&self, op: &'static str) -> Result<()> {
        if self.is_vector() {
            Ok(())
        } else {
            reject(Error::Shape(op))
        }
    }

    /// Sum of elementwise products.
    ///
    /// Both operands must be vectors of the same shape, so a row vector
    /// dotted with a column vector is an [`Error::Shape`].
    ///
    /// ```
    /// use matquat::ColumnVector;
    /// let a = ColumnVector::from_column([4, 8, 10]);
    /// let b = ColumnVector::from_column([9, 2, 7]);
    /// assert_eq!(a.dot(&b).unwrap(), 122);
    /// ```
    pub fn dot<const R2: usize, const C2: usize>(&self, rhs: &Matrix<T, R2, C2>) -> Result<T> {
        self.require_vector("dot product requires vectors")?;
        rhs.require_vector("dot product requires vectors")?;
        if R != R2 || C != C2 {
            return reject(Error::Shape("dot product requires equal shapes"));
        }
        Ok(self
            .as_slice()
            .iter()
            .zip(rhs.as_slice())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// 3D cross product, for row or column vectors of exactly 3 elements.
    ///
    /// ```
    /// use matquat::ColumnVector;
    /// let a = ColumnVector::from_column([2, 3, 4]);
    /// let b = ColumnVector::from_column([5, 6, 7]);
    /// assert_eq!(a.cross(&b).unwrap(), ColumnVector::from_column([-3, 6, -3]));
    /// ```
    pub fn cross(&self, rhs: &Self) -> Result<Self> {
        if R * C != 3 {
            return reject(Error::Shape("cross product requires 3-element vectors"));
        }
        let (a, b) = (self.as_slice(), rhs.as_slice());
        let mut out = *self;
        let c = out.as_mut_slice();
        c[0] = a[1] * b[2] - a[2] * b[1];
        c[1] = a[2] * b[0] - a[0] * b[2];
        c[2] = a[0] * b[1] - a[1] * b[0];
        Ok(out)
    }
}

impl<T: FloatScalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Euclidean length of a vector.
    pub fn magnitude(&self) -> Result<T> {
        self.require_vector("magnitude requires a vector")?;
        Ok(self
            .as_slice()
            .iter()
            .fold(T::zero(), |acc, &x| acc + x * x)
            .sqrt())
    }

    /// Angle between two vectors, in degrees.
    ///
    /// A zero-length operand makes the quotient `0/0` and the result NaN;
    /// that case is not trapped. For parallel or anti-parallel operands,
    /// rounding can push the cosine just past `±1`, and `acos` then also
    /// returns NaN. The cosine is not clamped.
    ///
    /// ```
    /// use matquat::Vector;
    /// let x = Vector::from_array([1.0_f64, 0.0]);
    /// let y = Vector::from_array([0.0, 2.0]);
    /// assert!((x.angle(&y).unwrap() - 90.0).abs() < 1e-12);
    /// ```
    pub fn angle(&self, rhs: &Self) -> Result<T> {
        let dot = self.dot(rhs)?;
        let mags = self.magnitude()? * rhs.magnitude()?;
        Ok((dot / mags).acos().to_degrees())
    }

    /// Vector scaled to unit length.
    ///
    /// Every element is divided by the magnitude; a zero vector yields
    /// non-finite elements rather than an error.
    ///
    /// ```
    /// use matquat::ColumnVector;
    /// let v = ColumnVector::from_column([4.0, 3.0, 0.0]);
    /// assert_eq!(v.normalize_vector().unwrap(), ColumnVector::from_column([0.8, 0.6, 0.0]));
    /// ```
    pub fn normalize_vector(&self) -> Result<Self> {
        let mag = self.magnitude()?;
        let mut out = *self;
        for x in out.as_mut_slice() {
            *x = *x / mag;
        }
        Ok(out)
    }

    /// Rotate a column vector counter-clockwise by `angle_deg` degrees.
    ///
    /// Two-element vectors rotate about the origin and ignore `axis`;
    /// three-element vectors rotate about the given principal axis.
    /// Row vectors and other sizes are an [`Error::Shape`].
    ///
    /// ```
    /// use matquat::{Axis, ColumnVector};
    /// let v = ColumnVector::from_column([1.0_f64, 0.0, 0.0]);
    /// let r = v.rotate_vector(90.0, Axis::Z).unwrap();
    /// assert!((r[(0, 0)]).abs() < 1e-12);
    /// assert!((r[(1, 0)] - 1.0).abs() < 1e-12);
    /// ```
    pub fn rotate_vector(&self, angle_deg: T, axis: Axis) -> Result<Self> {
        if C != 1 || !(R == 2 || R == 3) {
            return reject(Error::Shape(
                "rotation requires a 2- or 3-element column vector",
            ));
        }
        let (s, c) = angle_deg.to_radians().sin_cos();
        let v = self.as_slice();
        let mut out = *self;
        let r = out.as_mut_slice();

        if R == 2 {
            r[0] = c * v[0] - s * v[1];
            r[1] = s * v[0] + c * v[1];
            return Ok(out);
        }

        let (x, y, z) = (v[0], v[1], v[2]);
        match axis {
            Axis::X => {
                r[1] = c * y - s * z;
                r[2] = s * y + c * z;
            }
            Axis::Y => {
                r[0] = c * x + s * z;
                r[2] = c * z - s * x;
            }
            Axis::Z => {
                r[0] = c * x - s * y;
                r[1] = s * x + c * y;
            }
        }
        Ok(out)
    }
}

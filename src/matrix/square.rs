use crate::error::{reject, Error, Result};
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

// Closed-form expansions only exist for these sizes.
const SUPPORTED: &str = "determinant and inverse need a square 2x2, 3x3 or 4x4 matrix";

fn det2<T: Scalar>(a: &[[T; 2]; 2]) -> T {
    a[0][0] * a[1][1] - a[0][1] * a[1][0]
}

/// Scalar triple product expansion; the cyclic indices carry the signs.
fn det3<T: Scalar>(a: &[[T; 3]; 3]) -> T {
    let mut det = T::zero();
    for i in 0..3 {
        det = det
            + a[0][i] * (a[1][(i + 1) % 3] * a[2][(i + 2) % 3]
                - a[1][(i + 2) % 3] * a[2][(i + 1) % 3]);
    }
    det
}

/// The 3×3 matrix left after deleting row `r` and column `c`.
fn minor4<T: Scalar>(a: &[[T; 4]; 4], r: usize, c: usize) -> [[T; 3]; 3] {
    let mut m = [[T::zero(); 3]; 3];
    let mut mi = 0;
    for (i, row) in a.iter().enumerate() {
        if i == r {
            continue;
        }
        let mut mj = 0;
        for (j, &x) in row.iter().enumerate() {
            if j == c {
                continue;
            }
            m[mi][mj] = x;
            mj += 1;
        }
        mi += 1;
    }
    m
}

/// Laplace expansion along the first row over the 3×3 minors.
fn det4<T: Scalar>(a: &[[T; 4]; 4]) -> T {
    let even = a[0][0] * det3(&minor4(a, 0, 0)) + a[0][2] * det3(&minor4(a, 0, 2));
    let odd = a[0][1] * det3(&minor4(a, 0, 1)) + a[0][3] * det3(&minor4(a, 0, 3));
    even - odd
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Copy the top-left `N×N` block into a plain array.
    ///
    /// Callers check `R == C == N` first.
    fn square_block<const N: usize>(&self) -> [[T; N]; N] {
        let mut a = [[T::zero(); N]; N];
        for (i, row) in a.iter_mut().enumerate() {
            for (j, x) in row.iter_mut().enumerate() {
                *x = self.data[i][j];
            }
        }
        a
    }

    /// Determinant of a 2×2, 3×3 or 4×4 matrix.
    ///
    /// Any other shape, square or not, fails with [`Error::Shape`].
    ///
    /// ```
    /// use matquat::Matrix;
    /// let a = Matrix::new([[6, 9, 4], [5, 6, 2], [5, 4, 3]]);
    /// assert_eq!(a.determinant().unwrap(), -25);
    /// ```
    pub fn determinant(&self) -> Result<T> {
        if R != C {
            return reject(Error::Shape("determinant of a non-square matrix"));
        }
        match R {
            2 => Ok(det2(&self.square_block::<2>())),
            3 => Ok(det3(&self.square_block::<3>())),
            4 => Ok(det4(&self.square_block::<4>())),
            _ => reject(Error::Shape(SUPPORTED)),
        }
    }

    /// Submatrix with the given 1-based row and column deleted.
    ///
    /// The output shape is named by the caller and must be
    /// `(R-1)×(C-1)`; an out-of-range coordinate is reported as
    /// [`Error::Index`] before the shape is checked. A single row or column
    /// has no minor: its `P` or `Q` would be zero, which does not compile.
    ///
    /// ```
    /// use matquat::Matrix;
    /// let a = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
    /// let m = a.minor_matrix::<2, 2>(2, 2).unwrap();
    /// assert_eq!(m, Matrix::new([[1, 3], [7, 9]]));
    /// ```
    pub fn minor_matrix<const P: usize, const Q: usize>(
        &self,
        row: usize,
        col: usize,
    ) -> Result<Matrix<T, P, Q>> {
        let (r, c) = Self::check_index(row, col)?;
        if P + 1 != R || Q + 1 != C {
            return reject(Error::Shape("minor must have one row and one column fewer"));
        }
        let mut out = Matrix::<T, P, Q>::zeros();
        let cells = self
            .data
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != r)
            .flat_map(|(_, src)| {
                src.iter()
                    .enumerate()
                    .filter(|&(j, _)| j != c)
                    .map(|(_, &x)| x)
            });
        for (dst, x) in out.as_mut_slice().iter_mut().zip(cells) {
            *dst = x;
        }
        Ok(out)
    }
}

impl<T: FloatScalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Inverse via the adjugate: cofactor transpose over the determinant.
    ///
    /// Fails with [`Error::Shape`] for anything but a 2×2, 3×3 or 4×4
    /// matrix and with [`Error::Singular`] when the determinant is exactly
    /// zero. No pivoting is done, so near-singular input loses precision.
    ///
    /// ```
    /// use matquat::Matrix;
    /// let a = Matrix::new([[4.0, 7.0], [2.0, 6.0]]);
    /// let inv = a.inverse().unwrap();
    /// assert_eq!(inv, Matrix::new([[0.6, -0.7], [-0.2, 0.4]]));
    /// ```
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det == T::zero() {
            return reject(Error::Singular);
        }

        let mut out = Self::zeros();
        match R {
            2 => {
                let a = self.square_block::<2>();
                out.data[0][0] = a[1][1] / det;
                out.data[0][1] = -a[0][1] / det;
                out.data[1][0] = -a[1][0] / det;
                out.data[1][1] = a[0][0] / det;
            }
            3 => {
                let a = self.square_block::<3>();
                for i in 0..3 {
                    for j in 0..3 {
                        let cof = a[(i + 1) % 3][(j + 1) % 3] * a[(i + 2) % 3][(j + 2) % 3]
                            - a[(i + 1) % 3][(j + 2) % 3] * a[(i + 2) % 3][(j + 1) % 3];
                        out.data[j][i] = cof / det;
                    }
                }
            }
            _ => {
                let a = self.square_block::<4>();
                for i in 0..4 {
                    for j in 0..4 {
                        let minor = det3(&minor4(&a, i, j));
                        let cof = if (i + j) % 2 == 0 { minor } else { -minor };
                        out.data[j][i] = cof / det;
                    }
                }
            }
        }
        Ok(out)
    }

    /// `true` when the inverse equals the transpose exactly.
    ///
    /// Non-square, unsupported or singular matrices are not orthogonal.
    /// The comparison is exact, so rotations built from `sin`/`cos` of
    /// arbitrary angles usually need a tolerance check instead, e.g.
    /// `approx::relative_eq!` with the `approx` feature enabled.
    pub fn orthogonal(&self) -> bool {
        if R != C {
            return false;
        }
        let Ok(inv) = self.inverse() else {
            return false;
        };
        inv.as_slice()
            .iter()
            .zip(self.transpose().as_slice())
            .all(|(a, b)| a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn approx_eq<const R: usize, const C: usize>(a: Matrix<f64, R, C>, b: Matrix<f64, R, C>) {
        for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
            assert!((x - y).abs() < EPS, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn det_2x2() {
        let a = Matrix::new([[4.0, 7.0], [2.0, 6.0]]);
        assert_eq!(a.determinant().unwrap(), 10.0);
    }

    #[test]
    fn det_3x3() {
        let a = Matrix::new([[6.0, 9.0, 4.0], [5.0, 6.0, 2.0], [5.0, 4.0, 3.0]]);
        assert_eq!(a.determinant().unwrap(), -25.0);
    }

    #[test]
    fn det_4x4() {
        let a = Matrix::new([
            [4.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0],
            [0.0, 1.0, 2.0, 0.0],
            [1.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(a.determinant().unwrap(), -8.0);
    }

    #[test]
    fn det_4x4_dense() {
        let a = Matrix::new([[1, 3, 5, 9], [1, 3, 1, 7], [4, 3, 9, 7], [5, 2, 0, 9]]);
        assert_eq!(a.determinant().unwrap(), -376);
    }

    #[test]
    fn det_identity() {
        let id: Matrix<f64, 4, 4> = Matrix::eye();
        assert_eq!(id.determinant().unwrap(), 1.0);
    }

    #[test]
    fn det_integer() {
        let a = Matrix::new([[6, 9, 4], [5, 6, 2], [5, 4, 3]]);
        assert_eq!(a.determinant().unwrap(), -25);
    }

    #[test]
    fn det_rejects_non_square() {
        let a: Matrix<f64, 2, 3> = Matrix::zeros();
        assert!(matches!(a.determinant(), Err(Error::Shape(_))));
    }

    #[test]
    fn det_rejects_unsupported_sizes() {
        let one: Matrix<f64, 1, 1> = Matrix::eye();
        let five: Matrix<f64, 5, 5> = Matrix::eye();
        assert_eq!(one.determinant(), Err(Error::Shape(SUPPORTED)));
        assert_eq!(five.determinant(), Err(Error::Shape(SUPPORTED)));
        assert_eq!(five.inverse(), Err(Error::Shape(SUPPORTED)));
    }

    #[test]
    fn inverse_2x2() {
        let a = Matrix::new([[4.0, 7.0], [2.0, 6.0]]);
        let inv = a.inverse().unwrap();
        assert_eq!(inv, Matrix::new([[0.6, -0.7], [-0.2, 0.4]]));
    }

    #[test]
    fn inverse_3x3() {
        let a = Matrix::new([[6.0, 9.0, 4.0], [5.0, 6.0, 2.0], [5.0, 4.0, 3.0]]);
        let inv = a.inverse().unwrap();
        approx_eq(a * inv, Matrix::eye());
        approx_eq(inv * a, Matrix::eye());
    }

    #[test]
    fn inverse_4x4() {
        let a = Matrix::new([
            [1.0, 3.0, 5.0, 9.0],
            [1.0, 3.0, 1.0, 7.0],
            [4.0, 3.0, 9.0, 7.0],
            [5.0, 2.0, 0.0, 9.0],
        ]);
        let inv = a.inverse().unwrap();
        approx_eq(a * inv, Matrix::eye());
        approx_eq(inv * a, Matrix::eye());
    }

    #[test]
    fn inverse_4x4_sparse() {
        let a = Matrix::new([
            [4.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0],
            [0.0, 1.0, 2.0, 0.0],
            [1.0, 0.0, 0.0, 1.0],
        ]);
        let inv = a.inverse().unwrap();
        approx_eq(a * inv, Matrix::eye());
        assert_eq!(inv[(0, 0)], 0.25);
        assert_eq!(inv[(3, 0)], -0.25);
    }

    #[test]
    fn inverse_singular() {
        let a = Matrix::new([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(a.inverse(), Err(Error::Singular));

        let b = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        assert_eq!(b.inverse(), Err(Error::Singular));
    }

    #[test]
    fn inverse_rejects_non_square() {
        let a: Matrix<f64, 3, 2> = Matrix::zeros();
        assert!(matches!(a.inverse(), Err(Error::Shape(_))));
    }

    #[test]
    fn orthogonal_matrices() {
        let id: Matrix<f64, 3, 3> = Matrix::eye();
        assert!(id.orthogonal());

        let quarter_turn = Matrix::new([[0.0, -1.0], [1.0, 0.0]]);
        assert!(quarter_turn.orthogonal());

        let swap = Matrix::new([
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
            [0.0, 0.0, 1.0, 0.0],
        ]);
        assert!(swap.orthogonal());
    }

    #[test]
    fn not_orthogonal() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert!(!a.orthogonal());

        let singular = Matrix::new([[1.0, 2.0], [2.0, 4.0]]);
        assert!(!singular.orthogonal());

        let rect: Matrix<f64, 2, 3> = Matrix::zeros();
        assert!(!rect.orthogonal());
    }

    #[test]
    fn minor_matrix_corners() {
        let a = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert_eq!(a.minor_matrix::<2, 2>(1, 1).unwrap(), Matrix::new([[5, 6], [8, 9]]));
        assert_eq!(a.minor_matrix::<2, 2>(3, 3).unwrap(), Matrix::new([[1, 2], [4, 5]]));
        assert_eq!(a.minor_matrix::<2, 2>(1, 3).unwrap(), Matrix::new([[4, 5], [7, 8]]));
    }

    #[test]
    fn minor_matrix_rectangular() {
        let a = Matrix::new([[1, 2, 3, 4], [5, 6, 7, 8]]);
        let m = a.minor_matrix::<1, 3>(2, 3).unwrap();
        assert_eq!(m, Matrix::new([[1, 2, 4]]));
    }

    #[test]
    fn minor_matrix_bad_index() {
        let a = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert!(matches!(a.minor_matrix::<2, 2>(0, 1), Err(Error::Index { .. })));
        assert!(matches!(a.minor_matrix::<2, 2>(1, 4), Err(Error::Index { .. })));
        // index is reported even when the requested shape is also wrong
        assert!(matches!(a.minor_matrix::<3, 3>(4, 1), Err(Error::Index { .. })));
    }

    #[test]
    fn minor_matrix_bad_shape() {
        let a = Matrix::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        assert!(matches!(a.minor_matrix::<3, 2>(1, 1), Err(Error::Shape(_))));

        let wide = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        assert!(matches!(wide.minor_matrix::<1, 1>(1, 1), Err(Error::Shape(_))));
        assert_eq!(wide.minor_matrix::<1, 2>(2, 2).unwrap(), Matrix::new([[1, 3]]));
    }

    #[test]
    fn minor_determinants_expand_4x4() {
        let a = Matrix::new([[1, 3, 5, 9], [1, 3, 1, 7], [4, 3, 9, 7], [5, 2, 0, 9]]);
        let mut det = 0;
        for j in 1..=4 {
            let minor = a.minor_matrix::<3, 3>(1, j).unwrap().determinant().unwrap();
            let term = *a.get(1, j).unwrap() * minor;
            det += if j % 2 == 1 { term } else { -term };
        }
        assert_eq!(det, a.determinant().unwrap());
    }
}

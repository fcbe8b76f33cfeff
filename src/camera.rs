//! View and projection matrices for a fixed-function style camera.
//!
//! Both matrices follow the demo renderer's layout: the translation part of
//! the view matrix sits in the fourth *row*, and the projection's `-1`
//! lands at `(3, 4)` (1-based). Vectors are 3-element column vectors.

use crate::error::{reject, Error, Result};
use crate::matrix::{ColumnVector3, Matrix4};
use crate::traits::FloatScalar;

/// Degrees to radians.
#[inline]
pub fn radians<T: FloatScalar>(deg: T) -> T {
    deg.to_radians()
}

/// View matrix for a camera at `eye` looking towards `look`.
///
/// The first three columns hold the camera's right, up and backward axes;
/// the fourth row holds the eye position projected onto them. `up` only
/// needs to be roughly upwards; it is re-orthogonalised against the view
/// direction. `eye == look`, or `up` parallel to the view direction,
/// leaves the basis undefined and the result full of NaN.
///
/// ```
/// use matquat::{camera, ColumnVector, Matrix};
/// let eye = ColumnVector::from_column([0.0, 0.0, 5.0]);
/// let look = ColumnVector::from_column([0.0, 0.0, 0.0]);
/// let up = ColumnVector::from_column([0.0, 1.0, 0.0]);
/// let view = camera::look_at(&eye, &look, &up).unwrap();
/// assert_eq!(view[(3, 2)], -5.0);
/// assert_eq!(view[(0, 0)], 1.0);
/// ```
pub fn look_at<T: FloatScalar>(
    eye: &ColumnVector3<T>,
    look: &ColumnVector3<T>,
    up: &ColumnVector3<T>,
) -> Result<Matrix4<T>> {
    let n = *look - *eye;
    let v = n.cross(up)?;
    let u = v.cross(&n)?;

    let n = n.normalize_vector()?;
    let v = v.normalize_vector()?;
    let u = u.normalize_vector()?;

    let mut view = Matrix4::eye();
    for i in 0..3 {
        view[(i, 0)] = v[(i, 0)];
        view[(i, 1)] = u[(i, 0)];
        view[(i, 2)] = -n[(i, 0)];
    }
    view[(3, 0)] = -eye.dot(&v)?;
    view[(3, 1)] = -eye.dot(&u)?;
    view[(3, 2)] = eye.dot(&n)?;
    Ok(view)
}

/// Perspective projection for a vertical field of view `fovy_deg`.
///
/// Fails with [`Error::DivideByZero`] when the frustum is degenerate:
/// `far == near`, zero `aspect`, or a zero-width view (zero `near` or zero
/// field of view).
///
/// ```
/// use matquat::camera;
/// let p = camera::perspective(90.0, 1.0, 1.0, 3.0).unwrap();
/// assert_eq!(p[(2, 2)], -2.0);
/// assert_eq!(p[(2, 3)], -1.0);
/// assert_eq!(p[(3, 2)], -3.0);
/// assert!(camera::perspective(45.0, 1.0, 2.0, 2.0).is_err());
/// ```
pub fn perspective<T: FloatScalar>(
    fovy_deg: T,
    aspect: T,
    near: T,
    far: T,
) -> Result<Matrix4<T>> {
    let two = T::one() + T::one();
    let range = radians(fovy_deg / two).tan() * near;
    let (left, right) = (-range * aspect, range * aspect);
    let (bottom, top) = (-range, range);

    if far == near || right == left || top == bottom {
        return reject(Error::DivideByZero);
    }

    let mut p = Matrix4::zeros();
    p[(0, 0)] = two * near / (right - left);
    p[(1, 1)] = two * near / (top - bottom);
    p[(2, 2)] = -(far + near) / (far - near);
    p[(2, 3)] = -T::one();
    p[(3, 2)] = -(two * far * near) / (far - near);
    Ok(p)
}

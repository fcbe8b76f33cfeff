use approx::{assert_abs_diff_eq, assert_relative_eq};
use matquat::{
    Axis, ColumnVector, ElementwiseProduct, Error, Matrix, Matrix3, Matrix4, MatrixProduct,
    Vector,
};

fn assert_near<const R: usize, const C: usize>(a: &Matrix<f64, R, C>, b: &Matrix<f64, R, C>) {
    for (x, y) in a.as_slice().iter().zip(b.as_slice()) {
        assert_abs_diff_eq!(*x, *y, epsilon = 1e-10);
    }
}

// ── Construction and access ──────────────────────────────────────────

#[test]
fn sequence_construction() {
    let full: Matrix<f32, 2, 3> = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(*full.get(2, 1).unwrap(), 4.0);

    let short: Matrix<f32, 2, 3> = Matrix::from_slice(&[1.0, 2.0]).unwrap();
    assert_eq!(short.as_slice(), &[1.0, 2.0, 0.0, 0.0, 0.0, 0.0]);

    let long = Matrix::<f32, 2, 3>::from_slice(&[0.0; 7]);
    assert_eq!(long, Err(Error::Length { len: 7, capacity: 6 }));
}

#[test]
fn one_based_access_bounds() {
    let mut m: Matrix3<i64> = Matrix::eye();
    for (row, col) in [(0, 1), (1, 0), (4, 1), (1, 4)] {
        assert!(matches!(m.get(row, col), Err(Error::Index { .. })));
        assert!(matches!(m.get_mut(row, col), Err(Error::Index { .. })));
    }
    *m.get_mut(3, 1).unwrap() = 7;
    assert_eq!(m[(2, 0)], 7);
}

#[test]
fn equality_is_elementwise() {
    let a = Matrix::new([[1, 2], [3, 4]]);
    let mut b = a;
    assert_eq!(a, b);
    b[(1, 1)] = 5;
    assert_ne!(a, b);
}

// ── Arithmetic properties ────────────────────────────────────────────

#[test]
fn add_then_subtract_is_identity() {
    let a = Matrix::new([[0.1, 0.7, -3.2], [2.5, 1e-3, 9.0]]);
    let b = Matrix::new([[1.3, -0.2, 0.05], [7.0, 3.3, -1.1]]);
    assert_near(&((a + b) - b), &a);

    let ai = Matrix::new([[1, -5], [8, 13]]);
    let bi = Matrix::new([[100, 2], [-3, 4]]);
    assert_eq!((ai + bi) - bi, ai);
}

#[test]
fn operands_are_not_modified() {
    let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::new([[5.0, 6.0], [7.0, 8.0]]);
    let a0 = a;
    let b0 = b;
    let _ = a * b;
    let _ = a + b;
    let _ = -a;
    let _ = a.transpose();
    let _ = a.inverse();
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

#[test]
fn scalar_division() {
    let a = Matrix::new([[2.0, 4.0], [6.0, 8.0]]);
    assert_eq!(a.try_div(2.0).unwrap(), Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
    assert_eq!(a.try_div(0.0), Err(Error::DivideByZero));
}

#[test]
fn product_dispatch_is_explicit() {
    let a = ColumnVector::from_column([1.0, 2.0, 3.0]);
    let b = ColumnVector::from_column([4.0, 5.0, 6.0]);
    assert_eq!(a.elementwise_product(&b), ColumnVector::from_column([4.0, 10.0, 18.0]));

    // column · row is an outer product under the matrix product
    let outer = a.matrix_product(&b.transpose());
    assert_eq!(outer[(2, 0)], 12.0);
    assert_eq!(outer.nrows(), 3);
    assert_eq!(outer.ncols(), 3);

    let inner = a.transpose() * b;
    assert_eq!(inner[(0, 0)], 32.0);
}

// ── Square operations ────────────────────────────────────────────────

#[test]
fn known_determinants() {
    assert_eq!(Matrix::new([[4.0, 7.0], [2.0, 6.0]]).determinant(), Ok(10.0));
    assert_eq!(
        Matrix::new([[6.0, 9.0, 4.0], [5.0, 6.0, 2.0], [5.0, 4.0, 3.0]]).determinant(),
        Ok(-25.0)
    );
    assert_eq!(
        Matrix::new([
            [4.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0],
            [0.0, 1.0, 2.0, 0.0],
            [1.0, 0.0, 0.0, 1.0],
        ])
        .determinant(),
        Ok(-8.0)
    );
}

#[test]
fn known_inverse() {
    let inv = Matrix::new([[4.0, 7.0], [2.0, 6.0]]).inverse().unwrap();
    assert_eq!(inv, Matrix::new([[0.6, -0.7], [-0.2, 0.4]]));
}

#[test]
fn inverse_times_original_is_identity() {
    let a3: Matrix3<f64> = Matrix::new([[2.0, -1.0, 0.0], [-1.0, 2.0, -1.0], [0.0, -1.0, 2.0]]);
    assert_near(&(a3 * a3.inverse().unwrap()), &Matrix::eye());

    let a4: Matrix4<f64> = Matrix::from_fn(|i, j| {
        ((i + 1) * (j + 2)) as f64 + if i == j { 10.0 } else { 0.0 }
    });
    assert_near(&(a4 * a4.inverse().unwrap()), &Matrix::eye());
}

#[test]
fn inverse_failures() {
    assert_eq!(
        Matrix::new([[1.0, 2.0], [2.0, 4.0]]).inverse(),
        Err(Error::Singular)
    );
    let rect: Matrix<f64, 2, 4> = Matrix::zeros();
    assert!(matches!(rect.inverse(), Err(Error::Shape(_))));
}

#[test]
fn rotation_about_z_is_orthogonal() {
    let quarter = Matrix::new([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
    assert!(quarter.orthogonal());
    assert!(!Matrix::new([[2.0, 0.0], [0.0, 2.0]]).orthogonal());
}

#[test]
fn minor_of_4x4() {
    let a: Matrix4<i32> = Matrix::from_fn(|i, j| (4 * i + j + 1) as i32);
    let m = a.minor_matrix::<3, 3>(2, 3).unwrap();
    assert_eq!(m, Matrix::new([[1, 2, 4], [9, 10, 12], [13, 14, 16]]));
    assert!(matches!(a.minor_matrix::<3, 3>(5, 1), Err(Error::Index { .. })));
}

#[test]
fn reshape_round_trip() {
    let v = Vector::from_array([1, 2, 3, 4, 5, 6]);
    let m: Matrix<i32, 2, 3> = v.reshape().unwrap();
    assert_eq!(m, Matrix::new([[1, 2, 3], [4, 5, 6]]));
    assert!(m.reshape::<4, 2>().is_err());
}

// ── Vector operations ────────────────────────────────────────────────

#[test]
fn known_vector_results() {
    let a = ColumnVector::from_column([2.0, 3.0, 4.0]);
    let b = ColumnVector::from_column([5.0, 6.0, 7.0]);
    assert_eq!(a.cross(&b).unwrap(), ColumnVector::from_column([-3.0, 6.0, -3.0]));

    let c = ColumnVector::from_column([4.0, 8.0, 10.0]);
    let d = ColumnVector::from_column([9.0, 2.0, 7.0]);
    assert_eq!(c.dot(&d).unwrap(), 122.0);

    assert_eq!(ColumnVector::from_column([0.0, 3.0, 4.0]).magnitude().unwrap(), 5.0);
    assert_eq!(
        ColumnVector::from_column([4.0, 3.0, 0.0]).normalize_vector().unwrap(),
        ColumnVector::from_column([0.8, 0.6, 0.0])
    );
}

#[test]
fn rotate_about_named_axis() {
    let v = ColumnVector::from_column([1.0, 0.0, 0.0]);
    let axis: Axis = "z".parse().unwrap();
    let r = v.rotate_vector(90.0, axis).unwrap();
    assert_near(&r, &ColumnVector::from_column([0.0, 1.0, 0.0]));

    let row = Vector::from_array([1.0, 0.0, 0.0]);
    assert!(matches!(row.rotate_vector(90.0, axis), Err(Error::Shape(_))));
    assert!(matches!("up".parse::<Axis>(), Err(Error::Shape(_))));
}

#[test]
fn cross_is_perpendicular() {
    let a = Vector::from_array([1.5, -2.0, 0.25]);
    let b = Vector::from_array([0.3, 4.0, -1.0]);
    let c = a.cross(&b).unwrap();
    assert_relative_eq!(c.angle(&a).unwrap(), 90.0, epsilon = 1e-9);
    assert_relative_eq!(c.angle(&b).unwrap(), 90.0, epsilon = 1e-9);
}

#[test]
fn vector_ops_reject_matrices() {
    let m: Matrix3<f64> = Matrix::eye();
    assert!(matches!(m.magnitude(), Err(Error::Shape(_))));
    assert!(matches!(m.normalize_vector(), Err(Error::Shape(_))));
    assert!(matches!(m.dot(&m), Err(Error::Shape(_))));
    assert!(matches!(m.angle(&m), Err(Error::Shape(_))));
    assert!(matches!(m.elementwise_quotient(&m), Err(Error::Shape(_))));
}

#[test]
fn display_aligns_columns() {
    let m = Matrix::new([[1, -20], [300, 4]]);
    assert_eq!(m.to_string(), "│  1  -20│\n│300    4│");
}

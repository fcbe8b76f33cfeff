use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix and quaternion elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point elements.
///
/// Required by operations that need `sqrt`, `acos`, `sin`, etc.
/// (magnitudes, angles, rotations, inverses, quaternion norms).
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// The true matrix product: `(R×C) · (C×N) → (R×N)`.
///
/// Row and column vectors are matrices like any other here, so a `1×3`
/// times a `3×1` is a `1×1` inner product. For componentwise scaling use
/// [`ElementwiseProduct`].
pub trait MatrixProduct<Rhs> {
    type Output;

    fn matrix_product(&self, rhs: &Rhs) -> Self::Output;
}

/// The elementwise (Hadamard) product of two same-shape values.
pub trait ElementwiseProduct {
    fn elementwise_product(&self, rhs: &Self) -> Self;
}

//! `approx` trait impls, so matrices and quaternions work with
//! `assert_relative_eq!` and friends.
//!
//! Compound values compare equal when every component does.

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Matrix, Quaternion};

impl<T: AbsDiffEq, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: UlpsEq, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.as_slice()
            .iter()
            .zip(other.as_slice())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<T> Quaternion<T> {
    fn components(&self) -> [&T; 4] {
        [&self.w, &self.x, &self.y, &self.z]
    }
}

impl<T: AbsDiffEq> AbsDiffEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> T::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T::Epsilon) -> bool {
        self.components()
            .into_iter()
            .zip(other.components())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T: RelativeEq> RelativeEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    fn default_max_relative() -> T::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T::Epsilon, max_relative: T::Epsilon) -> bool {
        self.components()
            .into_iter()
            .zip(other.components())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T: UlpsEq> UlpsEq for Quaternion<T>
where
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: T::Epsilon, max_ulps: u32) -> bool {
        self.components()
            .into_iter()
            .zip(other.components())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

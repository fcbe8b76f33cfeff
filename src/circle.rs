use alloc::vec::Vec;

use crate::traits::FloatScalar;

fn cast<T: FloatScalar>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

/// Evenly spaced `(sin, cos)` samples around the unit circle.
///
/// Returns `|n| + 1` pairs starting at angle zero, `(0, 1)`, with the last
/// pair repeating the first so strips and fans close without wrapping
/// indices. A negative `n` walks the circle clockwise. `n == 0` gives the
/// single pair `(0, 1)`.
///
/// ```
/// use matquat::circle_table;
/// let t: Vec<(f64, f64)> = circle_table(4);
/// assert_eq!(t.len(), 5);
/// assert_eq!(t[0], (0.0, 1.0));
/// assert!((t[1].0 - 1.0).abs() < 1e-12); // sin 90°
/// assert_eq!(t[4], t[0]);
/// ```
pub fn circle_table<T: FloatScalar>(n: i32) -> Vec<(T, T)> {
    let size = n.unsigned_abs() as usize;
    let step = cast::<T>(core::f64::consts::TAU) / cast(f64::from(if n == 0 { 1 } else { n }));

    let mut table = Vec::with_capacity(size + 1);
    table.push((T::zero(), T::one()));
    for i in 1..size {
        table.push((step * cast(i as f64)).sin_cos());
    }
    if size > 0 {
        table.push(table[0]);
    }
    table
}

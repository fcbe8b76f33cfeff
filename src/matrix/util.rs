use core::fmt::{self, Write as _};

use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T: Copy + Default, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix by calling `f(row, col)` (0-based) for each element.
    ///
    /// ```
    /// use matquat::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::eye());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = [[T::default(); C]; R];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, x) in row.iter_mut().enumerate() {
                *x = f(i, j);
            }
        }
        Self::new(data)
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Find max width per column for alignment
        let mut widths = [0usize; C];
        for row in &self.data {
            for (w, x) in widths.iter_mut().zip(row) {
                *w = (*w).max(WriteCounting::count(|wc| write!(wc, "{}", x)));
            }
        }

        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "│")?;
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", x, width = widths[j])?;
            }
            write!(f, "│")?;
        }
        Ok(())
    }
}

/// Helper to count characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}

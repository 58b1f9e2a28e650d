use std::ops::{Add, Div, Mul, Neg, Sub};

/// R×C matrix of `f32` in row-major order.
///
/// Invariants:
/// - Storage is exactly `R * C` values, contiguous, row-major.
/// - Valid indices are `r < R`, `c < C`, flat `i < R * C`; accessors panic
///   outside that range (caller responsibility, not an error path).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat<const R: usize, const C: usize> {
    data: [[f32; C]; R],
}

impl<const R: usize, const C: usize> Mat<R, C> {
    /// All-zero matrix.
    #[inline]
    pub fn zeros() -> Self {
        Self {
            data: [[0.0; C]; R],
        }
    }

    /// Matrix from raw rows. Useful for literals in callers and tests.
    #[inline]
    pub fn from_rows(rows: [[f32; C]; R]) -> Self {
        Self { data: rows }
    }

    #[inline]
    pub fn get(&self, r: usize, c: usize) -> f32 {
        self.data[r][c]
    }

    #[inline]
    pub fn set(&mut self, r: usize, c: usize, value: f32) {
        self.data[r][c] = value;
    }

    /// Value at flat row-major index `i`.
    #[inline]
    pub fn at(&self, i: usize) -> f32 {
        self.data[i / C][i % C]
    }

    #[inline]
    pub fn set_at(&mut self, i: usize, value: f32) {
        self.data[i / C][i % C] = value;
    }

    #[inline]
    pub fn row(&self, r: usize) -> [f32; C] {
        self.data[r]
    }

    #[inline]
    pub fn col(&self, c: usize) -> [f32; R] {
        let mut out = [0.0; R];
        for r in 0..R {
            out[r] = self.data[r][c];
        }
        out
    }

    /// Row-major flat view of the storage.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        self.data.as_flattened()
    }

    /// Matrix product. Inner dimensions must conform, which the const
    /// parameters enforce at compile time.
    pub fn multiply<const K: usize>(&self, other: &Mat<C, K>) -> Mat<R, K> {
        let mut out = Mat::zeros();
        for r in 0..R {
            let row = self.row(r);
            for c in 0..K {
                let col = other.col(c);
                let mut acc = 0.0;
                for i in 0..C {
                    acc += row[i] * col[i];
                }
                out.data[r][c] = acc;
            }
        }
        out
    }

    /// Elementwise scale.
    pub fn scale(&self, factor: f32) -> Self {
        let mut out = *self;
        for r in 0..R {
            for c in 0..C {
                out.data[r][c] *= factor;
            }
        }
        out
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Self) -> Self {
        let mut out = *self;
        for r in 0..R {
            for c in 0..C {
                out.data[r][c] += other.data[r][c];
            }
        }
        out
    }

    /// Elementwise difference, as `self + other * -1`.
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.scale(-1.0))
    }

    pub fn transpose(&self) -> Mat<C, R> {
        let mut out = Mat::zeros();
        for r in 0..R {
            for c in 0..C {
                out.set(c, r, self.data[r][c]);
            }
        }
        out
    }

    /// `self * other.transpose()`.
    ///
    /// This is the historical "matrix division" convenience operator: it is
    /// NOT a matrix inverse and does not solve a linear system. It exists
    /// because transposing the right-hand side is a common step when mixing
    /// row- and column-shaped operands.
    #[inline]
    pub fn divide<const K: usize>(&self, other: &Mat<K, C>) -> Mat<R, K> {
        self.multiply(&other.transpose())
    }

    /// Max-abs elementwise comparison within `tol`.
    pub fn approx_eq(&self, other: &Self, tol: f32) -> bool {
        for r in 0..R {
            for c in 0..C {
                if (self.data[r][c] - other.data[r][c]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

impl<const N: usize> Mat<N, N> {
    /// Identity matrix. Only defined for square shapes.
    pub fn identity() -> Self {
        let mut out = Self::zeros();
        for i in 0..N {
            out.data[i][i] = 1.0;
        }
        out
    }
}

impl<const R: usize, const C: usize> Default for Mat<R, C> {
    #[inline]
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const R: usize, const C: usize, const K: usize> Mul<Mat<C, K>> for Mat<R, C> {
    type Output = Mat<R, K>;
    #[inline]
    fn mul(self, rhs: Mat<C, K>) -> Mat<R, K> {
        self.multiply(&rhs)
    }
}

impl<const R: usize, const C: usize> Mul<f32> for Mat<R, C> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self {
        self.scale(rhs)
    }
}

/// Scalar division as multiplication by the reciprocal. The caller guarantees
/// a nonzero divisor; zero propagates IEEE infinities/NaN, not an error.
impl<const R: usize, const C: usize> Div<f32> for Mat<R, C> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self {
        self.scale(1.0 / rhs)
    }
}

impl<const R: usize, const C: usize> Add for Mat<R, C> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Mat::add(&self, &rhs)
    }
}

impl<const R: usize, const C: usize> Sub for Mat<R, C> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Mat::sub(&self, &rhs)
    }
}

impl<const R: usize, const C: usize> Neg for Mat<R, C> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

use crate::{Scalar, Vec3};
use core::ops::{Add, Div, Index, Mul, Neg, Sub};

/// 3x3 matrix, row-major storage.
///
/// A general linear map on [`Vec3`] (not constrained to be a rotation).
/// Entry `(i, j)` is component `j` of row `i`; [`as_array`](Self::as_array)
/// flattens to offset `3*i + j`. Every operation agrees on this layout.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<S> {
    /// Row 0
    pub r0: Vec3<S>,
    /// Row 1
    pub r1: Vec3<S>,
    /// Row 2
    pub r2: Vec3<S>,
}

impl<S: Scalar> Mat3<S> {
    /// Construct from individual elements in row-major order.
    /// ```text
    /// | m00 m01 m02 |
    /// | m10 m11 m12 |
    /// | m20 m21 m22 |
    /// ```
    #[inline]
    pub fn new(m00: S, m01: S, m02: S, m10: S, m11: S, m12: S, m20: S, m21: S, m22: S) -> Self {
        Self {
            r0: Vec3::new(m00, m01, m02),
            r1: Vec3::new(m10, m11, m12),
            r2: Vec3::new(m20, m21, m22),
        }
    }

    /// Construct from row vectors
    #[inline]
    pub fn from_rows(r0: Vec3<S>, r1: Vec3<S>, r2: Vec3<S>) -> Self {
        Self { r0, r1, r2 }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_rows(Vec3::zero(), Vec3::zero(), Vec3::zero())
    }

    #[inline]
    pub fn identity() -> Self {
        Self::diagonal(Vec3::splat(S::ONE))
    }

    #[inline]
    pub fn diagonal(d: Vec3<S>) -> Self {
        Self::new(
            d.x,
            S::ZERO,
            S::ZERO,
            S::ZERO,
            d.y,
            S::ZERO,
            S::ZERO,
            S::ZERO,
            d.z,
        )
    }

    /// Element access (row, col)
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> S {
        let r = self.row(row);
        match col {
            0 => r.x,
            1 => r.y,
            _ => r.z,
        }
    }

    /// Row access
    #[inline]
    pub fn row(&self, i: usize) -> Vec3<S> {
        match i {
            0 => self.r0,
            1 => self.r1,
            _ => self.r2,
        }
    }

    /// Column access
    #[inline]
    pub fn col(&self, j: usize) -> Vec3<S> {
        match j {
            0 => Vec3::new(self.r0.x, self.r1.x, self.r2.x),
            1 => Vec3::new(self.r0.y, self.r1.y, self.r2.y),
            _ => Vec3::new(self.r0.z, self.r1.z, self.r2.z),
        }
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.col(0), self.col(1), self.col(2))
    }

    /// Entries flattened row-major: offset `3*i + j` holds entry `(i, j)`.
    #[inline]
    pub fn as_array(&self) -> [S; 9] {
        [
            self.r0.x, self.r0.y, self.r0.z, self.r1.x, self.r1.y, self.r1.z, self.r2.x, self.r2.y,
            self.r2.z,
        ]
    }

    /// Cofactor expansion along the first row.
    #[inline]
    pub fn determinant(&self) -> S {
        self.r0.x * (self.r1.y * self.r2.z - self.r1.z * self.r2.y)
            - self.r0.y * (self.r1.x * self.r2.z - self.r1.z * self.r2.x)
            + self.r0.z * (self.r1.x * self.r2.y - self.r1.y * self.r2.x)
    }

    // Transpose of the cofactor matrix.
    fn adjugate(&self) -> Self {
        let Self { r0, r1, r2 } = *self;
        Self::new(
            r1.y * r2.z - r1.z * r2.y,
            r0.z * r2.y - r0.y * r2.z,
            r0.y * r1.z - r0.z * r1.y,
            r1.z * r2.x - r1.x * r2.z,
            r0.x * r2.z - r0.z * r2.x,
            r0.z * r1.x - r0.x * r1.z,
            r1.x * r2.y - r1.y * r2.x,
            r0.y * r2.x - r0.x * r2.y,
            r0.x * r1.y - r0.y * r1.x,
        )
    }

    /// Inverse via adjugate over determinant.
    ///
    /// Divides without a guard: a matrix with zero determinant yields
    /// Infinity/NaN entries per IEEE-754. Use
    /// [`try_inverse`](Self::try_inverse) for explicit degenerate-matrix
    /// detection.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.adjugate() / self.determinant()
    }

    /// Checked inverse: `None` when the determinant is exactly zero.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == S::ZERO {
            return None;
        }
        Some(self.adjugate() / det)
    }

    /// Matrix-vector product: result row `i` is `row(i) . v`.
    #[inline]
    pub fn mul_vec(&self, v: Vec3<S>) -> Vec3<S> {
        Vec3::new(self.r0.dot(v), self.r1.dot(v), self.r2.dot(v))
    }

    /// Matrix-matrix product, `R[i][j] = row_i(self) . col_j(rhs)`.
    /// Not commutative.
    #[inline]
    pub fn mul_mat(&self, rhs: &Mat3<S>) -> Mat3<S> {
        let (c0, c1, c2) = (rhs.col(0), rhs.col(1), rhs.col(2));
        Mat3::new(
            self.r0.dot(c0),
            self.r0.dot(c1),
            self.r0.dot(c2),
            self.r1.dot(c0),
            self.r1.dot(c1),
            self.r1.dot(c2),
            self.r2.dot(c0),
            self.r2.dot(c1),
            self.r2.dot(c2),
        )
    }

    /// True when every entry is finite (no NaN, no Infinity).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.r0.is_finite() && self.r1.is_finite() && self.r2.is_finite()
    }
}

impl<S: Scalar> Index<(usize, usize)> for Mat3<S> {
    type Output = S;
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &S {
        let r = match row {
            0 => &self.r0,
            1 => &self.r1,
            _ => &self.r2,
        };
        match col {
            0 => &r.x,
            1 => &r.y,
            _ => &r.z,
        }
    }
}

impl<S: Scalar> Default for Mat3<S> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<S: Scalar> Add for Mat3<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_rows(self.r0 + rhs.r0, self.r1 + rhs.r1, self.r2 + rhs.r2)
    }
}

impl<S: Scalar> Sub for Mat3<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_rows(self.r0 - rhs.r0, self.r1 - rhs.r1, self.r2 - rhs.r2)
    }
}

impl<S: Scalar> Neg for Mat3<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_rows(-self.r0, -self.r1, -self.r2)
    }
}

impl<S: Scalar> Mul<S> for Mat3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self::from_rows(self.r0 * rhs, self.r1 * rhs, self.r2 * rhs)
    }
}

/// Entrywise division by a scalar. Division by zero follows IEEE-754 and
/// produces Infinity/NaN entries; the kernel does not guard.
impl<S: Scalar> Div<S> for Mat3<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        Self::from_rows(self.r0 / rhs, self.r1 / rhs, self.r2 / rhs)
    }
}

// Scalar * Mat3 (commutative)
impl Mul<Mat3<f64>> for f64 {
    type Output = Mat3<f64>;
    #[inline]
    fn mul(self, rhs: Mat3<f64>) -> Mat3<f64> {
        rhs * self
    }
}

impl Mul<Mat3<f32>> for f32 {
    type Output = Mat3<f32>;
    #[inline]
    fn mul(self, rhs: Mat3<f32>) -> Mat3<f32> {
        rhs * self
    }
}

// Mat3 * Vec3
impl<S: Scalar> Mul<Vec3<S>> for Mat3<S> {
    type Output = Vec3<S>;
    #[inline]
    fn mul(self, rhs: Vec3<S>) -> Vec3<S> {
        self.mul_vec(rhs)
    }
}

// Mat3 * Mat3
impl<S: Scalar> Mul for Mat3<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl<S: Scalar> core::fmt::Display for Mat3<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        for i in 0..3 {
            let r = self.row(i);
            writeln!(f, "|{}\t{}\t{}|", r.x, r.y, r.z)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_mat_eq(a: &Mat3<f64>, b: &Mat3<f64>, tol: f64) {
        for i in 0..3 {
            for j in 0..3 {
                assert!(
                    (a.get(i, j) - b.get(i, j)).abs() < tol,
                    "entry ({i}, {j}): {} vs {}",
                    a.get(i, j),
                    b.get(i, j)
                );
            }
        }
    }

    #[test]
    fn row_major_layout() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.as_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m.get(1, 2), 6.0);
        assert_eq!(m[(2, 0)], 7.0);
        assert_eq!(m.row(0), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(m.col(1), Vec3::new(2.0, 5.0, 8.0));
    }

    #[test]
    fn identity_is_neutral() {
        let m = Mat3::new(2.0, 3.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 2.0);
        let id = Mat3::<f64>::identity();
        assert_eq!(m * id, m);
        assert_eq!(id * m, m);
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(id * v, v);
    }

    #[test]
    fn worked_example_determinant_and_inverse() {
        let m = Mat3::new(2.0, 3.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 2.0);
        assert_eq!(m.determinant(), -2.0);

        let expected = Mat3::new(-1.0, 3.0, -1.5, 1.0, -2.0, 1.0, 0.0, 0.0, 0.5);
        assert_eq!(m.inverse(), expected);
        assert_eq!(m.try_inverse().unwrap(), expected);
    }

    #[test]
    fn worked_example_mat_vec() {
        let m = Mat3::new(2.0, 3.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 2.0);
        let v = Vec3::new(2.0, 1.0, 5.0);
        assert_eq!(m * v, Vec3::new(7.0, 8.0, 10.0));
    }

    #[test]
    fn inverse_roundtrip() {
        let m = Mat3::new(1.0, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0);
        let inv = m.inverse();
        assert_mat_eq(&(m * inv), &Mat3::identity(), 1e-9);
        assert_mat_eq(&(inv * m), &Mat3::identity(), 1e-9);
    }

    #[test]
    fn mat_mul_not_commutative() {
        let a = Mat3::new(0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let b = Mat3::new(0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        assert_ne!(a * b, b * a);
    }

    #[test]
    fn scale_divide_roundtrip() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_mat_eq(&((m * 7.3) / 7.3), &m, 1e-12);
        assert_eq!(2.0 * m, m * 2.0);
    }

    #[test]
    fn singular_inverse_passes_through() {
        // Rank 1: every row a multiple of (1, 2, 3)
        let m = Mat3::new(1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 3.0, 6.0, 9.0);
        assert_eq!(m.determinant(), 0.0);
        assert!(m.try_inverse().is_none());
        assert!(!m.inverse().is_finite());

        assert!(Mat3::<f64>::zero().try_inverse().is_none());
        assert!(!Mat3::<f64>::zero().inverse().is_finite());
    }

    #[test]
    fn divide_by_zero_passes_through() {
        let m = Mat3::new(1.0, -1.0, 0.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0);
        let r = m / 0.0;
        assert_eq!(r.get(0, 0), f64::INFINITY);
        assert_eq!(r.get(0, 1), f64::NEG_INFINITY);
        assert!(r.get(0, 2).is_nan());
        assert!(!r.is_finite());
    }

    #[test]
    fn transpose_involution() {
        let m = Mat3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().get(0, 1), 4.0);
    }

    #[test]
    fn determinant_of_diagonal() {
        let d = Mat3::diagonal(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(d.determinant(), 24.0);
        assert_eq!(Mat3::<f64>::identity().determinant(), 1.0);
    }

    #[test]
    fn add_sub_neg() {
        let m = Mat3::<f64>::identity();
        assert_eq!((m + m).get(0, 0), 2.0);
        assert_eq!((m - m), Mat3::zero());
        assert_eq!((-m).get(1, 1), -1.0);
    }
}

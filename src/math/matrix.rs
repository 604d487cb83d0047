use approx::{AbsDiffEq, RelativeEq};
use nalgebra as na;
use crate::math::Vector3;
use std::fmt;
use std::ops::{Add, Mul};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A row-major 3x3 matrix, used for rotations and inertia tensors
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Matrix3 {
    pub data: [[f32; 3]; 3],
}

impl Matrix3 {
    /// Creates a new 3x3 matrix from rows
    #[inline]
    pub fn new(data: [[f32; 3]; 3]) -> Self {
        Self { data }
    }

    /// Creates a new 3x3 identity matrix
    #[inline]
    pub fn identity() -> Self {
        Self::from_diagonal(Vector3::one())
    }

    /// Creates a new 3x3 zero matrix
    #[inline]
    pub fn zero() -> Self {
        Self { data: [[0.0; 3]; 3] }
    }

    /// Creates a diagonal matrix
    #[inline]
    pub fn from_diagonal(diagonal: Vector3) -> Self {
        Self {
            data: [
                [diagonal.x, 0.0, 0.0],
                [0.0, diagonal.y, 0.0],
                [0.0, 0.0, diagonal.z],
            ],
        }
    }

    /// Outer product `a ⊗ b`, i.e. `m[i][j] = a[i] * b[j]`
    pub fn outer_product(a: Vector3, b: Vector3) -> Self {
        Self {
            data: [
                [a.x * b.x, a.x * b.y, a.x * b.z],
                [a.y * b.x, a.y * b.y, a.y * b.z],
                [a.z * b.x, a.z * b.y, a.z * b.z],
            ],
        }
    }

    /// Builds a matrix from its three rows
    #[inline]
    pub fn from_rows(r0: Vector3, r1: Vector3, r2: Vector3) -> Self {
        Self::new([[r0.x, r0.y, r0.z], [r1.x, r1.y, r1.z], [r2.x, r2.y, r2.z]])
    }

    #[inline]
    pub fn row(&self, i: usize) -> Vector3 {
        Vector3::from(self.data[i])
    }

    #[inline]
    pub fn column(&self, j: usize) -> Vector3 {
        Vector3::new(self.data[0][j], self.data[1][j], self.data[2][j])
    }

    #[inline]
    pub fn diagonal(&self) -> Vector3 {
        Vector3::new(self.data[0][0], self.data[1][1], self.data[2][2])
    }

    /// Scalar triple product of the rows
    pub fn determinant(&self) -> f32 {
        self.row(0).dot(&self.row(1).cross(&self.row(2)))
    }

    /// Largest absolute entry
    pub fn max_abs_entry(&self) -> f32 {
        self.data.iter().flatten().fold(0.0, |max: f32, value| max.max(value.abs()))
    }

    /// Inverse through the adjugate.
    ///
    /// Returns `None` when the matrix is singular relative to its own scale, i.e.
    /// `|det| <= EPSILON * max|entry|^3`, so uniformly scaling a matrix never changes
    /// whether it inverts. The columns of the inverse are the pairwise cross products
    /// of the rows.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        let scale = self.max_abs_entry();
        if !det.is_finite() || det.abs() <= crate::math::EPSILON * scale * scale * scale {
            return None;
        }

        let (r0, r1, r2) = (self.row(0), self.row(1), self.row(2));
        let inv_det = 1.0 / det;
        let adjugate_t = Self::from_rows(r1.cross(&r2), r2.cross(&r0), r0.cross(&r1));

        Some(adjugate_t.transpose().scale(inv_det))
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_rows(self.column(0), self.column(1), self.column(2))
    }

    #[inline]
    pub fn multiply_vector(&self, v: Vector3) -> Vector3 {
        Vector3::new(self.row(0).dot(&v), self.row(1).dot(&v), self.row(2).dot(&v))
    }

    pub fn multiply_matrix(&self, other: &Self) -> Self {
        let mut data = [[0.0; 3]; 3];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = self.row(i).dot(&other.column(j));
            }
        }
        Self { data }
    }

    /// Multiplies every entry by a scalar
    #[inline]
    pub fn scale(&self, factor: f32) -> Self {
        let mut result = *self;
        for row in result.data.iter_mut() {
            for value in row.iter_mut() {
                *value *= factor;
            }
        }
        result
    }

    /// Entry-wise sum
    pub fn add_matrix(&self, other: &Self) -> Self {
        let mut result = *self;
        for (row, other_row) in result.data.iter_mut().zip(other.data.iter()) {
            for (value, other_value) in row.iter_mut().zip(other_row.iter()) {
                *value += other_value;
            }
        }
        result
    }

    /// Entry-wise difference
    pub fn sub_matrix(&self, other: &Self) -> Self {
        self.add_matrix(&other.scale(-1.0))
    }

    /// Returns `self * inner * selfᵀ`, the change of basis used for inertia tensors
    #[inline]
    pub fn conjugate(&self, inner: &Self) -> Self {
        self.multiply_matrix(inner).multiply_matrix(&self.transpose())
    }

    #[inline]
    pub fn to_nalgebra(&self) -> na::Matrix3<f32> {
        na::Matrix3::from_fn(|i, j| self.data[i][j])
    }

    #[inline]
    pub fn from_nalgebra(m: &na::Matrix3<f32>) -> Self {
        let mut data = [[0.0; 3]; 3];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, value) in row.iter_mut().enumerate() {
                *value = m[(i, j)];
            }
        }
        Self { data }
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Add for Matrix3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.add_matrix(&rhs)
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        self.multiply_vector(rhs)
    }
}

impl Mul for Matrix3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply_matrix(&rhs)
    }
}

impl Mul<f32> for Matrix3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl AbsDiffEq for Matrix3 {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for Matrix3 {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.data
            .iter()
            .flatten()
            .zip(other.data.iter().flatten())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, [a, b, c]) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[ {}, {}, {} ]", a, b, c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outer_product_is_rank_one() {
        let m = Matrix3::outer_product(Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m.data[1][2], 12.0);
        assert_eq!(m.data[2][0], 12.0);
        assert!(m.determinant().abs() < 1e-4);
    }

    #[test]
    fn singularity_cutoff_follows_matrix_scale() {
        let tiny = Matrix3::from_diagonal(Vector3::splat(1.0e-3));
        let inverse = tiny.inverse().expect("scaled identity is invertible");
        assert!((inverse.data[0][0] - 1.0e3).abs() < 1e-1);

        let rank_two = Matrix3::from_diagonal(Vector3::new(1.0e-3, 1.0e-3, 0.0));
        assert!(rank_two.inverse().is_none());
        assert!(Matrix3::zero().inverse().is_none());
    }

    #[test]
    fn conjugate_by_identity_is_noop() {
        let inner = Matrix3::new([[2.0, 0.5, 0.0], [0.5, 3.0, 0.1], [0.0, 0.1, 4.0]]);
        assert_eq!(Matrix3::identity().conjugate(&inner), inner);
    }
}

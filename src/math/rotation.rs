use crate::math::{Vector3, Matrix3, EPSILON};
use std::fmt;
use std::ops::{Mul, MulAssign};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Quaternion `w + xi + yj + zk`.
///
/// Orientations are unit quaternions, but the type itself does not enforce unit
/// length; see [`Quaternion::normalize`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Quaternion {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Rotation trait for rotation representations
pub trait Rotation {
    /// Rotate a vector by this rotation
    fn rotate_vector(&self, v: Vector3) -> Vector3;

    /// Get the angle in radians of this rotation
    fn angle(&self) -> f32;

    /// Get the axis of this rotation
    fn axis(&self) -> Vector3;
}

impl Quaternion {
    #[inline]
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Builds `w + v` with no normalization or half-angle conversion
    #[inline]
    pub fn from_scalar_vector(w: f32, v: Vector3) -> Self {
        Self::new(w, v.x, v.y, v.z)
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Unit quaternion rotating by `angle` radians about `axis` (normalized here)
    pub fn from_axis_angle(axis: Vector3, angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::from_scalar_vector(cos, axis.normalize() * sin)
    }

    /// The imaginary part as a vector
    #[inline]
    pub fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    fn scaled(&self, factor: f32) -> Self {
        Self::from_scalar_vector(self.w * factor, self.vector() * factor)
    }

    /// Matrix form of the quaternion.
    ///
    /// This is a pure rotation only for unit quaternions. Nothing is normalized
    /// here, so a non-unit input also scales and shears.
    pub fn to_rotation_matrix(&self) -> Matrix3 {
        let Self { w, x, y, z } = *self;
        let (x2, y2, z2) = (x + x, y + y, z + z);

        let (xx, yy, zz) = (x * x2, y * y2, z * z2);
        let (xy, xz, yz) = (x * y2, x * z2, y * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);

        Matrix3::new([
            [1.0 - (yy + zz), xy - wz, xz + wy],
            [xy + wz, 1.0 - (xx + zz), yz - wx],
            [xz - wy, yz + wx, 1.0 - (xx + yy)],
        ])
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::from_scalar_vector(self.w, -self.vector())
    }

    #[inline]
    pub fn length_squared(&self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn is_normalized(&self, tolerance: f32) -> bool {
        (self.length() - 1.0).abs() <= tolerance
    }

    /// Unit quaternion with the same direction. A (near) zero quaternion has no
    /// direction and normalizes to the identity.
    #[inline]
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > EPSILON {
            self.scaled(1.0 / len)
        } else {
            Self::identity()
        }
    }

    /// Multiplicative inverse `conj(q) / |q|^2`, identity for a (near) zero quaternion
    #[inline]
    pub fn inverse(&self) -> Self {
        let len_sq = self.length_squared();
        if len_sq > EPSILON {
            self.conjugate().scaled(1.0 / len_sq)
        } else {
            Self::identity()
        }
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.w * other.w + self.vector().dot(&other.vector())
    }

    #[inline]
    pub fn to_nalgebra(&self) -> nalgebra::Quaternion<f32> {
        nalgebra::Quaternion::new(self.w, self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_nalgebra(q: &nalgebra::Quaternion<f32>) -> Self {
        Self::new(q.w, q.i, q.j, q.k)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Rotation for Quaternion {
    /// `q v q^-1`. Uses the true inverse, so non-unit quaternions still rotate.
    fn rotate_vector(&self, v: Vector3) -> Vector3 {
        (*self * Quaternion::from_scalar_vector(0.0, v) * self.inverse()).vector()
    }

    fn angle(&self) -> f32 {
        2.0 * self.w.clamp(-1.0, 1.0).acos()
    }

    /// Normalized rotation axis; zero for the identity
    fn axis(&self) -> Vector3 {
        self.vector().normalize()
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}; {}, {}, {})", self.w, self.x, self.y, self.z)
    }
}

// Hamilton product: `a * b` applies `b` first, then `a`
impl Mul for Quaternion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self.vector(), rhs.vector());
        Self::from_scalar_vector(
            self.w * rhs.w - a.dot(&b),
            b * self.w + a * rhs.w + a.cross(&b),
        )
    }
}

impl MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

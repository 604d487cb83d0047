//! Small fixed-size linear algebra: vectors, row-major 3x3 matrices, quaternions
//! and axis-aligned boxes. Conversions to `nalgebra` exist for interop and tests.

mod vector;
mod matrix;
mod rotation;
mod aabb;

pub use vector::Vector3;
pub use matrix::Matrix3;
pub use rotation::{Quaternion, Rotation};
pub use aabb::Aabb;

/// Tolerance for near-zero lengths and determinants
pub const EPSILON: f32 = 1.0e-6;

/// `|a - b| < EPSILON`
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    approx_zero(a - b)
}

/// `|a| < EPSILON`
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}

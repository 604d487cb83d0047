use crate::math::{Vector3, Matrix3, Aabb, Quaternion};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A solid sphere centred on the body origin
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ShapeSphere {
    radius: f32,
}

impl ShapeSphere {
    /// Creates a new sphere with the given radius.
    ///
    /// # Panics
    ///
    /// Panics unless `radius` is finite and positive.
    pub fn new(radius: f32) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "sphere radius must be finite and positive, got {}",
            radius
        );
        Self { radius }
    }

    /// Returns the radius of the sphere
    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn center_of_mass(&self) -> Vector3 {
        Vector3::ZERO
    }

    /// `position` must already be the sphere's centre, so orientation plays no part.
    pub fn support(&self, direction: Vector3, position: Vector3, _orientation: Quaternion, bias: f32) -> Vector3 {
        position + direction.normalize() * (self.radius + bias)
    }

    pub fn world_bounds(&self, position: Vector3, _orientation: Quaternion) -> Aabb {
        Aabb::from_center_half_extents(position, Vector3::splat(self.radius))
    }

    pub fn local_bounds(&self) -> Aabb {
        Aabb::from_center_half_extents(Vector3::ZERO, Vector3::splat(self.radius))
    }

    /// I = 2/5 * r^2 on every axis (unit mass)
    pub fn inertia_tensor(&self) -> Matrix3 {
        let inertia = 2.0 * self.radius * self.radius / 5.0;
        Matrix3::from_diagonal(Vector3::splat(inertia))
    }

    /// A sphere has no vertices to sweep, so spinning never adds linear reach.
    pub fn fastest_linear_speed(&self, _angular_velocity: Vector3, _direction: Vector3) -> f32 {
        0.0
    }
}

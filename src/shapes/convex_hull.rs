use crate::error::PhysicsError;
use crate::math::{Vector3, Matrix3, Aabb, Quaternion};
use crate::shapes::shape::{transformed_bounds, fastest_vertex_speed};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Convex hull of a point cloud.
///
/// Hull construction is not implemented yet: [`ShapeConvex::build`] always fails,
/// and the queries that need the hull (support, body-space bounds, inertia) panic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ShapeConvex {
    points: Vec<Vector3>,
    bounds: Aabb,
    center_of_mass: Vector3,
}

impl ShapeConvex {
    /// Builds the hull of `points`.
    ///
    /// Always returns [`PhysicsError::NotImplemented`] for now.
    pub fn build(_points: &[Vector3]) -> Result<Self> {
        Err(PhysicsError::NotImplemented("convex hull construction"))
    }

    pub fn points(&self) -> &[Vector3] {
        &self.points
    }

    pub fn center_of_mass(&self) -> Vector3 {
        self.center_of_mass
    }

    pub fn support(&self, _direction: Vector3, _position: Vector3, _orientation: Quaternion, _bias: f32) -> Vector3 {
        unimplemented!("convex hull support mapping")
    }

    pub fn world_bounds(&self, position: Vector3, orientation: Quaternion) -> Aabb {
        transformed_bounds(&self.points, position, orientation)
    }

    pub fn local_bounds(&self) -> Aabb {
        unimplemented!("convex hull body-space bounds for {:?}", self.bounds)
    }

    pub fn inertia_tensor(&self) -> Matrix3 {
        unimplemented!("convex hull inertia tensor")
    }

    pub fn fastest_linear_speed(&self, angular_velocity: Vector3, direction: Vector3) -> f32 {
        fastest_vertex_speed(&self.points, self.center_of_mass, angular_velocity, direction)
    }
}

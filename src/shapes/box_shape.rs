use crate::math::{Vector3, Matrix3, Aabb, Quaternion};
use crate::shapes::shape::{furthest_point, transformed_bounds, fastest_vertex_speed};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A solid box, stored as its body-space bounds and 8 corners.
///
/// The box does not have to be centred on the body origin; its center of mass is
/// the centre of its bounds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ShapeBox {
    points: [Vector3; 8],
    bounds: Aabb,
    center_of_mass: Vector3,
}

impl ShapeBox {
    /// Builds the box enclosing a point cloud.
    ///
    /// # Panics
    ///
    /// Panics if `points` is empty.
    pub fn build(points: &[Vector3]) -> Self {
        Self::from_bounds(Aabb::from_points(points))
    }

    /// Builds a box from its body-space bounds
    pub fn from_bounds(bounds: Aabb) -> Self {
        Self {
            points: bounds.corners(),
            bounds,
            center_of_mass: bounds.center(),
        }
    }

    /// Builds a box centred on the body origin
    pub fn from_half_extents(half_extents: Vector3) -> Self {
        Self::from_bounds(Aabb::from_center_half_extents(Vector3::ZERO, half_extents))
    }

    /// Corners in their fixed build order. Support queries resolve ties by this order.
    pub fn points(&self) -> &[Vector3; 8] {
        &self.points
    }

    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    pub fn center_of_mass(&self) -> Vector3 {
        self.center_of_mass
    }

    /// Brute-force scan of the corners. When several corners are equally far the
    /// first one in [`points`](Self::points) order wins.
    pub fn support(&self, direction: Vector3, position: Vector3, orientation: Quaternion, bias: f32) -> Vector3 {
        let furthest = furthest_point(&self.points, direction, position, orientation);
        furthest + direction.normalize() * bias
    }

    /// Encloses the rotated corners. Loose for rotated boxes.
    pub fn world_bounds(&self, position: Vector3, orientation: Quaternion) -> Aabb {
        transformed_bounds(&self.points, position, orientation)
    }

    pub fn local_bounds(&self) -> Aabb {
        self.bounds
    }

    /// Unit-mass inertia tensor about the body origin.
    ///
    /// Starts from the tensor of a box about its own centroid and shifts it with the
    /// parallel axis theorem: `I' = I + m (|R|^2 Id - R ⊗ R)`, where `R` runs from the
    /// center of mass to the origin.
    pub fn inertia_tensor(&self) -> Matrix3 {
        let extents = self.bounds.extents();
        let (dx2, dy2, dz2) = (extents.x * extents.x, extents.y * extents.y, extents.z * extents.z);

        let centroid_tensor = Matrix3::from_diagonal(Vector3::new(
            (dy2 + dz2) / 12.0,
            (dx2 + dz2) / 12.0,
            (dx2 + dy2) / 12.0,
        ));

        let r = Vector3::ZERO - self.center_of_mass;
        let parallel_axis = Matrix3::identity()
            .scale(r.length_squared())
            .sub_matrix(&Matrix3::outer_product(r, r));

        centroid_tensor.add_matrix(&parallel_axis)
    }

    pub fn fastest_linear_speed(&self, angular_velocity: Vector3, direction: Vector3) -> f32 {
        fastest_vertex_speed(&self.points, self.center_of_mass, angular_velocity, direction)
    }
}

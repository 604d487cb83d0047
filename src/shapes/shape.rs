use crate::math::{Vector3, Matrix3, Aabb, Quaternion};
use crate::shapes::{ShapeSphere, ShapeBox, ShapeConvex};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Tag identifying which variant a [`Shape`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Sphere,
    Box,
    Convex,
}

/// Collision and mass geometry shared by bodies.
///
/// Shapes are immutable once built and are shared between bodies through
/// `Arc<Shape>`. All queries take the body's world transform as arguments rather
/// than storing one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    Sphere(ShapeSphere),
    Box(ShapeBox),
    /// Convex hull. No public constructor produces this variant yet, see [`ShapeConvex::build`].
    Convex(ShapeConvex),
}

impl Shape {
    /// Returns the variant tag
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Sphere(_) => ShapeKind::Sphere,
            Shape::Box(_) => ShapeKind::Box,
            Shape::Convex(_) => ShapeKind::Convex,
        }
    }

    /// Body-space offset of the mass centroid
    pub fn center_of_mass(&self) -> Vector3 {
        match self {
            Shape::Sphere(sphere) => sphere.center_of_mass(),
            Shape::Box(cuboid) => cuboid.center_of_mass(),
            Shape::Convex(hull) => hull.center_of_mass(),
        }
    }

    /// Returns the world-space point furthest along `direction`, pushed outward by
    /// `bias` along the normalized direction.
    ///
    /// `direction` does not need to be normalized.
    pub fn support(&self, direction: Vector3, position: Vector3, orientation: Quaternion, bias: f32) -> Vector3 {
        match self {
            Shape::Sphere(sphere) => sphere.support(direction, position, orientation, bias),
            Shape::Box(cuboid) => cuboid.support(direction, position, orientation, bias),
            Shape::Convex(hull) => hull.support(direction, position, orientation, bias),
        }
    }

    /// World-space bounds of the shape placed at `position` / `orientation`
    pub fn world_bounds(&self, position: Vector3, orientation: Quaternion) -> Aabb {
        match self {
            Shape::Sphere(sphere) => sphere.world_bounds(position, orientation),
            Shape::Box(cuboid) => cuboid.world_bounds(position, orientation),
            Shape::Convex(hull) => hull.world_bounds(position, orientation),
        }
    }

    /// Body-space bounds
    pub fn local_bounds(&self) -> Aabb {
        match self {
            Shape::Sphere(sphere) => sphere.local_bounds(),
            Shape::Box(cuboid) => cuboid.local_bounds(),
            Shape::Convex(hull) => hull.local_bounds(),
        }
    }

    /// Inertia tensor for unit mass, in body space
    pub fn inertia_tensor(&self) -> Matrix3 {
        match self {
            Shape::Sphere(sphere) => sphere.inertia_tensor(),
            Shape::Box(cuboid) => cuboid.inertia_tensor(),
            Shape::Convex(hull) => hull.inertia_tensor(),
        }
    }

    /// Fastest speed along `direction` reached by any vertex while spinning with
    /// `angular_velocity` about the center of mass. Never negative.
    pub fn fastest_linear_speed(&self, angular_velocity: Vector3, direction: Vector3) -> f32 {
        match self {
            Shape::Sphere(sphere) => sphere.fastest_linear_speed(angular_velocity, direction),
            Shape::Box(cuboid) => cuboid.fastest_linear_speed(angular_velocity, direction),
            Shape::Convex(hull) => hull.fastest_linear_speed(angular_velocity, direction),
        }
    }
}

impl From<ShapeSphere> for Shape {
    fn from(sphere: ShapeSphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<ShapeBox> for Shape {
    fn from(cuboid: ShapeBox) -> Self {
        Shape::Box(cuboid)
    }
}

impl From<ShapeConvex> for Shape {
    fn from(hull: ShapeConvex) -> Self {
        Shape::Convex(hull)
    }
}

// Point-cloud queries shared by the box and hull variants.

/// Furthest transformed point along `direction`. Ties keep the earliest point.
pub(crate) fn furthest_point(
    points: &[Vector3],
    direction: Vector3,
    position: Vector3,
    orientation: Quaternion,
) -> Vector3 {
    use crate::math::Rotation;

    let mut best = orientation.rotate_vector(points[0]) + position;
    let mut best_distance = direction.dot(&best);
    for point in &points[1..] {
        let candidate = orientation.rotate_vector(*point) + position;
        let distance = direction.dot(&candidate);
        if distance > best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

/// Bounds of the point cloud after rotating and translating every point
pub(crate) fn transformed_bounds(points: &[Vector3], position: Vector3, orientation: Quaternion) -> Aabb {
    use crate::math::Rotation;

    let world_points: Vec<Vector3> = points
        .iter()
        .map(|p| orientation.rotate_vector(*p) + position)
        .collect();
    Aabb::from_points(&world_points)
}

pub(crate) fn fastest_vertex_speed(
    points: &[Vector3],
    center_of_mass: Vector3,
    angular_velocity: Vector3,
    direction: Vector3,
) -> f32 {
    points.iter().fold(0.0, |max_speed: f32, point| {
        let r = *point - center_of_mass;
        let linear_velocity = angular_velocity.cross(&r);
        max_speed.max(direction.dot(&linear_velocity))
    })
}

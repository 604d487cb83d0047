use crate::math::Vector3;
use std::ops::Add;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-aligned bounding box.
///
/// `min <= max` holds component-wise for every box built through the constructors
/// and combinators below.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner of the AABB
    pub min: Vector3,

    /// Maximum corner of the AABB
    pub max: Vector3,
}

impl Aabb {
    /// Creates an AABB from its minimum and maximum corners
    #[inline]
    pub fn from_min_max(min: Vector3, max: Vector3) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y && min.z <= max.z,
            "AABB min {} exceeds max {}",
            min,
            max
        );
        Self { min, max }
    }

    /// Creates an AABB centered at a position with the given half extents
    #[inline]
    pub fn from_center_half_extents(center: Vector3, half_extents: Vector3) -> Self {
        Self::from_min_max(center - half_extents, center + half_extents)
    }

    /// Creates the smallest AABB enclosing a set of points.
    ///
    /// # Panics
    ///
    /// Panics if `points` is empty.
    pub fn from_points(points: &[Vector3]) -> Self {
        assert!(!points.is_empty(), "cannot build an AABB from an empty point set");

        let mut bounds = Self::from_min_max(points[0], points[0]);
        for point in &points[1..] {
            bounds.expand_to_include_point(*point);
        }
        bounds
    }

    /// Returns the center of the AABB
    #[inline]
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the full size of the AABB along each axis
    #[inline]
    pub fn extents(&self) -> Vector3 {
        self.max - self.min
    }

    /// Returns half the extents of the AABB in each dimension
    #[inline]
    pub fn half_extents(&self) -> Vector3 {
        self.extents() * 0.5
    }

    /// Checks if this AABB contains a point
    #[inline]
    pub fn contains_point(&self, point: Vector3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x &&
        point.y >= self.min.y && point.y <= self.max.y &&
        point.z >= self.min.z && point.z <= self.max.z
    }

    /// Checks if this AABB intersects with another AABB
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Returns the union of this AABB with another
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.component_min(&other.min),
            max: self.max.component_max(&other.max),
        }
    }

    /// Grows this AABB to include a point
    #[inline]
    pub fn expand_to_include_point(&mut self, point: Vector3) {
        self.min = self.min.component_min(&point);
        self.max = self.max.component_max(&point);
    }

    /// Returns a copy grown by `margin` in every direction
    #[inline]
    pub fn expand(&self, margin: f32) -> Self {
        let margin_vec = Vector3::splat(margin);
        Self::from_min_max(self.min - margin_vec, self.max + margin_vec)
    }

    /// Returns the 8 corners, ordered so that the first four seed each axis from `min`
    pub fn corners(&self) -> [Vector3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vector3::new(lo.x, lo.y, lo.z),
            Vector3::new(hi.x, lo.y, lo.z),
            Vector3::new(lo.x, hi.y, lo.z),
            Vector3::new(lo.x, lo.y, hi.z),
            Vector3::new(hi.x, hi.y, hi.z),
            Vector3::new(lo.x, hi.y, hi.z),
            Vector3::new(hi.x, lo.y, hi.z),
            Vector3::new(hi.x, hi.y, lo.z),
        ]
    }
}

impl Add for Aabb {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

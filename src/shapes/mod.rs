//! Shape geometry: support mapping, bounds and mass properties.

mod shape;
mod sphere;
mod box_shape;
mod convex_hull;

pub use self::shape::{Shape, ShapeKind};
pub use self::sphere::ShapeSphere;
pub use self::box_shape::ShapeBox;
pub use self::convex_hull::ShapeConvex;

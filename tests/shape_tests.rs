use rigid_phys::error::PhysicsError;
use rigid_phys::math::{Aabb, Matrix3, Quaternion, Vector3};
use rigid_phys::shapes::{Shape, ShapeBox, ShapeConvex, ShapeKind, ShapeSphere};
use std::f32::consts::PI;
use approx::{assert_relative_eq, assert_abs_diff_eq};

fn unit_cube() -> Shape {
    Shape::from(ShapeBox::from_half_extents(Vector3::new(1.0, 1.0, 1.0)))
}

#[test]
fn test_sphere_inertia() {
    let sphere = Shape::from(ShapeSphere::new(2.0));
    let tensor = sphere.inertia_tensor();

    // 2/5 * r^2 on the diagonal, nothing else
    for i in 0..3 {
        for j in 0..3 {
            if i == j {
                assert_relative_eq!(tensor.data[i][j], 1.6, epsilon = 1e-6);
            } else {
                assert_eq!(tensor.data[i][j], 0.0);
            }
        }
    }
}

#[test]
fn test_cube_inertia() {
    let cube = unit_cube();
    let tensor = cube.inertia_tensor();

    let expected = Matrix3::from_diagonal(Vector3::splat(2.0 / 3.0));
    assert_abs_diff_eq!(tensor, expected, epsilon = 1e-4);
    assert_abs_diff_eq!(cube.center_of_mass(), Vector3::zero(), epsilon = 1e-6);
}

#[test]
fn test_offset_box_inertia() {
    // Side 2, centered on (2, 2, 2): parallel axis shift of R = -(2, 2, 2)
    let cuboid = ShapeBox::build(&[Vector3::new(1.0, 1.0, 1.0), Vector3::new(3.0, 3.0, 3.0)]);
    assert_eq!(cuboid.center_of_mass(), Vector3::new(2.0, 2.0, 2.0));

    let tensor = cuboid.inertia_tensor();
    let diagonal = 2.0 / 3.0 + 12.0 - 4.0;
    let expected = Matrix3::new([
        [diagonal, -4.0, -4.0],
        [-4.0, diagonal, -4.0],
        [-4.0, -4.0, diagonal],
    ]);
    assert_abs_diff_eq!(tensor, expected, epsilon = 1e-4);
}

#[test]
fn test_sphere_support() {
    let sphere = Shape::from(ShapeSphere::new(1.0));
    let position = Vector3::new(5.0, 0.0, 0.0);

    let support = sphere.support(Vector3::unit_x(), position, Quaternion::identity(), 0.0);
    assert_relative_eq!(support, Vector3::new(6.0, 0.0, 0.0));

    // Direction length does not matter, bias pushes further out
    let support = sphere.support(Vector3::new(0.0, 10.0, 0.0), position, Quaternion::identity(), 0.5);
    assert_relative_eq!(support, Vector3::new(5.0, 1.5, 0.0));
}

#[test]
fn test_box_support() {
    let cube = unit_cube();
    let position = Vector3::new(0.0, 10.0, 0.0);

    let support = cube.support(Vector3::new(1.0, 1.0, 1.0), position, Quaternion::identity(), 0.0);
    assert_eq!(support, Vector3::new(1.0, 11.0, 1.0));

    // Four corners tie along +x; the first one in corner order wins, every time
    let first = cube.support(Vector3::unit_x(), Vector3::zero(), Quaternion::identity(), 0.0);
    assert_eq!(first, Vector3::new(1.0, -1.0, -1.0));
    for _ in 0..10 {
        assert_eq!(cube.support(Vector3::unit_x(), Vector3::zero(), Quaternion::identity(), 0.0), first);
    }

    // Rotated 90 degrees about Y, the +x extreme comes from the old -z face
    let rotation = Quaternion::from_axis_angle(Vector3::unit_y(), PI / 2.0);
    let support = cube.support(Vector3::new(1.0, 0.2, 0.1), Vector3::zero(), rotation, 0.0);
    assert_abs_diff_eq!(support, Vector3::new(1.0, 1.0, 1.0), epsilon = 1e-5);
}

#[test]
fn test_box_support_bias() {
    let cube = unit_cube();
    let support = cube.support(Vector3::new(0.0, 3.0, 0.0), Vector3::zero(), Quaternion::identity(), 0.25);
    assert_abs_diff_eq!(support.y, 1.25, epsilon = 1e-6);
}

#[test]
fn test_bounds() {
    let sphere = Shape::from(ShapeSphere::new(0.5));
    let bounds = sphere.world_bounds(Vector3::new(1.0, 2.0, 3.0), Quaternion::identity());
    assert_relative_eq!(bounds.min, Vector3::new(0.5, 1.5, 2.5));
    assert_relative_eq!(bounds.max, Vector3::new(1.5, 2.5, 3.5));
    assert_eq!(
        sphere.local_bounds(),
        Aabb::from_min_max(Vector3::splat(-0.5), Vector3::splat(0.5))
    );

    // A quarter turn about Z swaps the x and y extents
    let cuboid = Shape::from(ShapeBox::from_half_extents(Vector3::new(1.0, 2.0, 3.0)));
    let rotation = Quaternion::from_axis_angle(Vector3::unit_z(), PI / 2.0);
    let bounds = cuboid.world_bounds(Vector3::zero(), rotation);
    assert_abs_diff_eq!(bounds.min, Vector3::new(-2.0, -1.0, -3.0), epsilon = 1e-5);
    assert_abs_diff_eq!(bounds.max, Vector3::new(2.0, 1.0, 3.0), epsilon = 1e-5);

    assert_eq!(cuboid.local_bounds().half_extents(), Vector3::new(1.0, 2.0, 3.0));
}

#[test]
fn test_fastest_linear_speed() {
    let cube = unit_cube();
    let spin = Vector3::new(0.0, 0.0, 1.0);

    // Corners are one unit off the spin axis along y
    assert_relative_eq!(cube.fastest_linear_speed(spin, Vector3::unit_x()), 1.0, epsilon = 1e-6);
    assert_relative_eq!(cube.fastest_linear_speed(spin, -Vector3::unit_x()), 1.0, epsilon = 1e-6);

    // Motion along the spin axis never happens
    assert_eq!(cube.fastest_linear_speed(spin, Vector3::unit_z()), 0.0);
    assert_eq!(cube.fastest_linear_speed(Vector3::zero(), Vector3::unit_x()), 0.0);

    let sphere = Shape::from(ShapeSphere::new(3.0));
    assert_eq!(sphere.fastest_linear_speed(spin, Vector3::unit_x()), 0.0);
}

#[test]
fn test_shape_kind() {
    assert_eq!(Shape::from(ShapeSphere::new(1.0)).kind(), ShapeKind::Sphere);
    assert_eq!(unit_cube().kind(), ShapeKind::Box);
}

#[test]
fn test_convex_build_not_implemented() {
    let points = [
        Vector3::new(0.0, 0.0, 0.0),
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, 1.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ];
    let result = ShapeConvex::build(&points);
    assert!(matches!(result, Err(PhysicsError::NotImplemented(_))));
}

#[test]
#[should_panic]
fn test_sphere_rejects_non_positive_radius() {
    ShapeSphere::new(0.0);
}

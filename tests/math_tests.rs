use rigid_phys::math::{Vector3, Matrix3, Quaternion, Aabb, Rotation};
use std::f32::consts::PI;
use approx::{assert_relative_eq, assert_abs_diff_eq};
use nalgebra as na;

#[test]
fn test_vector3_operations() {
    let v1 = Vector3::new(1.0, 2.0, 3.0);
    let v2 = Vector3::new(4.0, 5.0, 6.0);

    assert_eq!(v1 + v2, Vector3::new(5.0, 7.0, 9.0));
    assert_eq!(v2 - v1, Vector3::new(3.0, 3.0, 3.0));
    assert_eq!(v1 * 2.0, Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(v1.dot(&v2), 32.0);

    // Cross product is orthogonal to both inputs
    let cross = v1.cross(&v2);
    assert_eq!(cross, Vector3::new(-3.0, 6.0, -3.0));
    assert_eq!(cross.dot(&v1), 0.0);
    assert_eq!(cross.dot(&v2), 0.0);

    let normalized = v1.normalize();
    assert_relative_eq!(normalized.length(), 1.0);

    // The zero vector normalizes to itself
    assert_eq!(Vector3::zero().normalize(), Vector3::zero());
    assert!(Vector3::zero().is_zero());

    assert_eq!(v1.component_min(&Vector3::new(0.0, 5.0, 3.0)), Vector3::new(0.0, 2.0, 3.0));
    assert_eq!(v1.component_max(&Vector3::new(0.0, 5.0, 3.0)), Vector3::new(1.0, 5.0, 3.0));
}

#[test]
fn test_quaternion_operations() {
    // 90 degrees around Y
    let q = Quaternion::from_axis_angle(Vector3::unit_y(), PI / 2.0);
    assert_relative_eq!(q.length(), 1.0);

    // x rotates onto -z
    let rotated = q.rotate_vector(Vector3::unit_x());
    assert_abs_diff_eq!(rotated, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-5);

    // Inverse undoes the rotation
    let back = q.inverse().rotate_vector(rotated);
    assert_abs_diff_eq!(back, Vector3::unit_x(), epsilon = 1e-5);

    // Composition: q2 * q1 applies q1 first
    let q1 = Quaternion::from_axis_angle(Vector3::unit_x(), PI / 4.0);
    let q2 = Quaternion::from_axis_angle(Vector3::unit_y(), PI / 4.0);
    let v = Vector3::unit_z();
    assert_abs_diff_eq!(
        (q2 * q1).rotate_vector(v),
        q2.rotate_vector(q1.rotate_vector(v)),
        epsilon = 1e-5
    );

    assert_relative_eq!(q.angle(), PI / 2.0, epsilon = 1e-5);
    assert_abs_diff_eq!(q.axis(), Vector3::unit_y(), epsilon = 1e-5);
}

#[test]
fn test_zero_quaternion_normalizes_to_identity() {
    let zero = Quaternion::new(0.0, 0.0, 0.0, 0.0);
    assert_eq!(zero.normalize(), Quaternion::identity());
    assert_eq!(zero.to_rotation_matrix(), Matrix3::identity());
}

#[test]
fn test_quaternion_matches_nalgebra() {
    let q = Quaternion::new(0.9, 0.2, -0.3, 0.25).normalize();
    let unit = na::UnitQuaternion::from_quaternion(q.to_nalgebra());

    let v = Vector3::new(1.5, -2.0, 0.5);
    let expected = Vector3::from_nalgebra(&unit.transform_vector(&v.to_nalgebra()));
    assert_abs_diff_eq!(q.rotate_vector(v), expected, epsilon = 1e-5);

    let expected_matrix = Matrix3::from_nalgebra(&unit.to_rotation_matrix().into_inner());
    assert_abs_diff_eq!(q.to_rotation_matrix(), expected_matrix, epsilon = 1e-5);

    assert_eq!(Quaternion::from_nalgebra(&q.to_nalgebra()), q);
}

#[test]
fn test_matrix3_operations() {
    let identity = Matrix3::identity();
    let m = Matrix3::new([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);

    assert_eq!(m.multiply_matrix(&identity), m);

    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(m.multiply_vector(v), Vector3::new(14.0, 32.0, 50.0));
    assert_eq!(m * v, m.multiply_vector(v));

    let m_transpose = m.transpose();
    assert_eq!(m_transpose.data[0][1], m.data[1][0]);
    assert_eq!(m_transpose.data[2][0], m.data[0][2]);

    // Rows are linearly dependent
    assert!(m.inverse().is_none());

    assert_eq!(m.add_matrix(&m), m.scale(2.0));
    assert_eq!(m.sub_matrix(&m), Matrix3::zero());
}

#[test]
fn test_matrix3_inverse_matches_nalgebra() {
    let m = Matrix3::new([
        [4.0, 1.0, 0.0],
        [1.0, 3.0, 1.0],
        [0.0, 1.0, 2.0],
    ]);
    assert_relative_eq!(m.determinant(), 18.0, epsilon = 1e-5);

    let inverse = m.inverse().expect("matrix is invertible");
    let expected = m.to_nalgebra().try_inverse().expect("nalgebra inverse");
    assert_abs_diff_eq!(inverse, Matrix3::from_nalgebra(&expected), epsilon = 1e-5);
    assert_abs_diff_eq!(inverse * m, Matrix3::identity(), epsilon = 1e-5);
}

#[test]
fn test_aabb_operations() {
    let aabb = Aabb::from_min_max(Vector3::new(-1.0, -2.0, -3.0), Vector3::new(1.0, 2.0, 3.0));

    assert_eq!(aabb.center(), Vector3::zero());
    assert_eq!(aabb.extents(), Vector3::new(2.0, 4.0, 6.0));
    assert_eq!(aabb.half_extents(), Vector3::new(1.0, 2.0, 3.0));

    assert!(aabb.contains_point(Vector3::zero()));
    assert!(aabb.contains_point(Vector3::new(0.5, 1.0, 1.5)));
    assert!(!aabb.contains_point(Vector3::new(2.0, 0.0, 0.0)));

    let aabb2 = Aabb::from_min_max(Vector3::new(0.5, 0.5, 0.5), Vector3::new(2.0, 3.0, 4.0));
    assert!(aabb.intersects(&aabb2));

    let aabb3 = Aabb::from_min_max(Vector3::new(2.0, 3.0, 4.0), Vector3::new(3.0, 4.0, 5.0));
    assert!(!aabb.intersects(&aabb3));

    // `+` is the union
    let union = aabb + aabb2;
    assert_eq!(union, aabb.union(&aabb2));
    assert_eq!(union.min, Vector3::new(-1.0, -2.0, -3.0));
    assert_eq!(union.max, Vector3::new(2.0, 3.0, 4.0));

    let grown = aabb.expand(0.5);
    assert_eq!(grown.min, Vector3::new(-1.5, -2.5, -3.5));
}

#[test]
fn test_aabb_from_points() {
    let points = [
        Vector3::new(1.0, -1.0, 0.0),
        Vector3::new(-2.0, 3.0, 0.5),
        Vector3::new(0.0, 0.0, -4.0),
    ];
    let aabb = Aabb::from_points(&points);
    assert_eq!(aabb.min, Vector3::new(-2.0, -1.0, -4.0));
    assert_eq!(aabb.max, Vector3::new(1.0, 3.0, 0.5));

    // A single point gives a degenerate box
    let single = Aabb::from_points(&points[..1]);
    assert_eq!(single.min, single.max);
}

#[test]
fn test_scalar_helpers() {
    assert!(rigid_phys::math::approx_eq(0.1 + 0.2, 0.3));
    assert!(!rigid_phys::math::approx_eq(1.0, 1.001));
    assert!(rigid_phys::math::approx_zero(1e-7));
    assert!(!rigid_phys::math::approx_zero(1e-3));
}

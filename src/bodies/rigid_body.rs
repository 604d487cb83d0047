use crate::math::{Vector3, Matrix3, Quaternion, Aabb, Rotation};
use crate::shapes::Shape;

use std::sync::Arc;
use tracing::trace;

/// Angular speed cap in rad/s, applied after every angular impulse
pub const MAX_ANGULAR_SPEED: f32 = 30.0;

/// A rigid body: transform, velocities, inverse mass and a shared shape.
///
/// `inv_mass == 0` marks a static body with infinite mass. Every impulse applied to
/// a static body is a silent no-op.
#[derive(Debug, Clone)]
pub struct Body {
    /// World-space location of the body origin (not necessarily the center of mass)
    position: Vector3,

    /// World-space rotation, kept normalized
    orientation: Quaternion,

    linear_velocity: Vector3,

    angular_velocity: Vector3,

    inv_mass: f32,

    shape: Arc<Shape>,
}

impl Body {
    /// Creates a body. `orientation` is normalized on the way in.
    ///
    /// # Panics
    ///
    /// Panics if `inv_mass` is negative or not finite.
    pub fn new(shape: Arc<Shape>, position: Vector3, orientation: Quaternion, inv_mass: f32) -> Self {
        assert!(
            inv_mass.is_finite() && inv_mass >= 0.0,
            "inverse mass must be finite and non-negative, got {}",
            inv_mass
        );

        Self {
            position,
            orientation: orientation.normalize(),
            linear_velocity: Vector3::zero(),
            angular_velocity: Vector3::zero(),
            inv_mass,
            shape,
        }
    }

    /// Creates a dynamic body with the given mass
    pub fn new_dynamic(shape: Arc<Shape>, position: Vector3, mass: f32) -> Self {
        let mut body = Self::new(shape, position, Quaternion::identity(), 0.0);
        body.set_mass(mass);
        body
    }

    /// Creates a static (infinite mass) body
    pub fn new_static(shape: Arc<Shape>, position: Vector3) -> Self {
        Self::new(shape, position, Quaternion::identity(), 0.0)
    }

    pub fn shape(&self) -> &Arc<Shape> {
        &self.shape
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    pub fn orientation(&self) -> Quaternion {
        self.orientation
    }

    /// Sets the orientation, normalizing it
    pub fn set_orientation(&mut self, orientation: Quaternion) {
        self.orientation = orientation.normalize();
    }

    pub fn linear_velocity(&self) -> Vector3 {
        self.linear_velocity
    }

    pub fn set_linear_velocity(&mut self, velocity: Vector3) {
        self.linear_velocity = velocity;
    }

    pub fn angular_velocity(&self) -> Vector3 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, velocity: Vector3) {
        self.angular_velocity = velocity;
    }

    pub fn inv_mass(&self) -> f32 {
        self.inv_mass
    }

    /// # Panics
    ///
    /// Panics if `inv_mass` is negative or not finite.
    pub fn set_inv_mass(&mut self, inv_mass: f32) {
        assert!(
            inv_mass.is_finite() && inv_mass >= 0.0,
            "inverse mass must be finite and non-negative, got {}",
            inv_mass
        );
        self.inv_mass = inv_mass;
    }

    /// Sets the mass (and inverse mass).
    ///
    /// # Panics
    ///
    /// Panics unless `mass` is finite and positive. Use [`Body::set_inv_mass`] with
    /// `0.0` for a static body.
    pub fn set_mass(&mut self, mass: f32) {
        assert!(mass.is_finite() && mass > 0.0, "mass must be finite and positive, got {}", mass);
        self.inv_mass = 1.0 / mass;
    }

    /// Whether the body has infinite mass
    #[inline]
    pub fn is_static(&self) -> bool {
        self.inv_mass == 0.0
    }

    /// World-space bounds of the body's shape at its current transform
    pub fn world_bounds(&self) -> Aabb {
        self.shape.world_bounds(self.position, self.orientation)
    }

    pub fn center_of_mass_world_space(&self) -> Vector3 {
        self.position + self.orientation.rotate_vector(self.shape.center_of_mass())
    }

    pub fn center_of_mass_model_space(&self) -> Vector3 {
        self.shape.center_of_mass()
    }

    /// Maps a world-space point into body space (pivoted on the center of mass)
    pub fn world_space_to_body_space(&self, point: Vector3) -> Vector3 {
        let offset = point - self.center_of_mass_world_space();
        self.orientation.inverse().rotate_vector(offset)
    }

    /// Inverse of [`Body::world_space_to_body_space`]
    pub fn body_space_to_world_space(&self, point: Vector3) -> Vector3 {
        self.center_of_mass_world_space() + self.orientation.rotate_vector(point)
    }

    /// `inverse(shape tensor) * inv_mass`
    ///
    /// # Panics
    ///
    /// Panics if the shape's inertia tensor is singular (degenerate extents).
    pub fn inverse_inertia_tensor_body_space(&self) -> Matrix3 {
        invert_tensor(&self.shape.inertia_tensor()).scale(self.inv_mass)
    }

    /// `R * I^-1 * R^T` for the current orientation. Not cached.
    pub fn inverse_inertia_tensor_world_space(&self) -> Matrix3 {
        let orient = self.orientation.to_rotation_matrix();
        orient.conjugate(&self.inverse_inertia_tensor_body_space())
    }

    /// Applies `impulse` at the world-space point `impulse_point`, splitting it into
    /// a linear part and the torque it produces about the center of mass.
    pub fn apply_impulse(&mut self, impulse_point: Vector3, impulse: Vector3) {
        if self.is_static() {
            return;
        }

        self.apply_impulse_linear(impulse);

        let r = impulse_point - self.center_of_mass_world_space();
        let angular_impulse = r.cross(&impulse);
        self.apply_impulse_angular(angular_impulse);
    }

    /// dv = J / m
    pub fn apply_impulse_linear(&mut self, impulse: Vector3) {
        if self.is_static() {
            return;
        }

        self.linear_velocity += impulse * self.inv_mass;
    }

    /// dw = I^-1 * dL, then caps the angular speed at [`MAX_ANGULAR_SPEED`].
    pub fn apply_impulse_angular(&mut self, impulse: Vector3) {
        if self.is_static() {
            return;
        }

        self.angular_velocity += self.inverse_inertia_tensor_world_space().multiply_vector(impulse);

        if self.angular_velocity.length_squared() > MAX_ANGULAR_SPEED * MAX_ANGULAR_SPEED {
            trace!(speed = self.angular_velocity.length(), "clamping angular velocity");
            self.angular_velocity = self.angular_velocity.normalize() * MAX_ANGULAR_SPEED;
        }
    }

    /// Advances the body by `dt` seconds.
    ///
    /// Velocities must already contain this step's impulses. Position integrates
    /// linearly, the angular velocity picks up the torque-free precession term, and
    /// the orientation rotates about the center of mass.
    ///
    /// The orientation increment is the raw quaternion `(|ω dt|, ω dt)`, normalized
    /// after composing. One deliberate departure: when `ω dt` is exactly zero the
    /// orientation is kept as is, where normalizing the zero product would reset it
    /// to the identity.
    pub fn update(&mut self, dt: f32) {
        self.position += self.linear_velocity * dt;

        let position_cm = self.center_of_mass_world_space();
        let cm_to_pos = self.position - position_cm;

        // Only internal torque is left here: T = w x (I w), a = I^-1 T
        let orient = self.orientation.to_rotation_matrix();
        let inertia_tensor = orient.conjugate(&self.shape.inertia_tensor());
        let alpha = invert_tensor(&inertia_tensor).multiply_vector(
            self.angular_velocity.cross(&inertia_tensor.multiply_vector(self.angular_velocity)),
        );
        self.angular_velocity += alpha * dt;

        // The increment is the raw (|dθ|, dθ) quaternion, not a half-angle rotation.
        let d_angle = self.angular_velocity * dt;
        if d_angle == Vector3::zero() {
            // A zero increment would normalize to the identity and drop the current orientation
            return;
        }
        let dq = Quaternion::from_scalar_vector(d_angle.length(), d_angle);
        self.orientation = (dq * self.orientation).normalize();

        self.position = position_cm + dq.to_rotation_matrix().multiply_vector(cm_to_pos);
    }
}

fn invert_tensor(tensor: &Matrix3) -> Matrix3 {
    match tensor.inverse() {
        Some(inverse) => inverse,
        None => panic!("inertia tensor is singular, shape extents are degenerate:\n{}", tensor),
    }
}

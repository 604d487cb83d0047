//! Rigid body dynamics core.
//!
//! Bodies carry a transform, velocities and an inverse mass, and share immutable
//! [`Shape`](shapes::Shape)s that provide support mapping, bounds and inertia. A
//! [`PhysicsScene`] owns the bodies and advances them under gravity.

pub mod math;
pub mod core;
pub mod bodies;
pub mod shapes;

/// Re-export common types for easier usage
pub use crate::core::{PhysicsScene, SceneConfig, BodyHandle};
pub use crate::bodies::Body;
pub use crate::shapes::Shape;
pub use crate::math::{Vector3, Quaternion};

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        /// A configuration value is out of range
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        /// A body handle that is not (or no longer) in the scene
        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Not implemented: {0}")]
        NotImplemented(&'static str),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

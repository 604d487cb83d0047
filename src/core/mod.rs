pub mod scene;
pub mod config;
pub mod storage;

pub use self::scene::PhysicsScene;
pub use self::config::SceneConfig;
pub use self::storage::BodyStorage;

use crate::math::Vector3;

/// Default world-space gravity (Y up)
pub const GRAVITY: Vector3 = Vector3::new(0.0, -9.8, 0.0);

/// A unique identifier for a body in a physics scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyHandle(pub(crate) u32);

use crate::core::GRAVITY;
use crate::error::PhysicsError;
use crate::math::Vector3;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for a [`PhysicsScene`](crate::core::PhysicsScene)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SceneConfig {
    /// World-space gravity, added to every body's linear velocity each tick
    pub gravity: Vector3,

    /// The fixed tick length used by [`PhysicsScene::step`](crate::core::PhysicsScene::step)
    pub time_step: f32,

    /// The maximum number of ticks a single `step` call may run
    pub max_substeps: u32,
}

impl SceneConfig {
    /// Checks that the configuration can drive a simulation
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }

        if !(self.time_step.is_finite() && self.time_step > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "time_step must be finite and positive, got {}",
                self.time_step
            )));
        }

        if self.max_substeps == 0 {
            return Err(PhysicsError::InvalidParameter(
                "max_substeps must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            time_step: 1.0 / 60.0,
            max_substeps: 10,
        }
    }
}

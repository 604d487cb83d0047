use crate::bodies::Body;
use crate::core::{BodyHandle, BodyStorage, SceneConfig};
use crate::Result;

use tracing::{debug, trace, warn};

/// Owns the simulated bodies and advances them through time
#[derive(Debug)]
pub struct PhysicsScene {
    /// All bodies, in insertion order
    bodies: BodyStorage<Body>,

    /// Configuration for the simulation
    config: SceneConfig,

    /// The total elapsed simulation time
    time: f32,
}

impl PhysicsScene {
    /// Creates a new scene with default settings
    pub fn new() -> Self {
        Self {
            bodies: BodyStorage::new(),
            config: SceneConfig::default(),
            time: 0.0,
        }
    }

    /// Creates a new scene with the given configuration
    pub fn with_config(config: SceneConfig) -> Result<Self> {
        config.validate()?;
        debug!(?config, "creating physics scene");

        Ok(Self {
            bodies: BodyStorage::new(),
            config,
            time: 0.0,
        })
    }

    /// Setup hook, run once before the first update. Currently does nothing.
    pub fn initialize(&mut self) {
        debug!(bodies = self.bodies.len(), "physics scene initialized");
    }

    /// Returns a reference to the simulation configuration
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Total simulated seconds, summed over the ticks run by [`step`](Self::step)
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Adds a body to the scene and returns its handle
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let handle = self.bodies.add(body);
        debug!(?handle, "added body");
        handle
    }

    /// Removes a body from the scene
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<Body> {
        let body = self.bodies.remove_body(handle)?;
        debug!(?handle, "removed body");
        Ok(body)
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&Body> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body> {
        self.bodies.get_body_mut(handle)
    }

    /// Iterates over the bodies in insertion order
    pub fn bodies(&self) -> impl Iterator<Item = (BodyHandle, &Body)> + '_ {
        self.bodies.iter()
    }

    /// Returns the number of bodies in the scene
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Removes every body and resets the clock
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.time = 0.0;
    }

    /// Advances every body by one tick of `delta_seconds`.
    ///
    /// Gravity is added straight to each linear velocity, then each position moves
    /// by its velocity. Neither pass looks at the inverse mass, so a body with
    /// `inv_mass == 0` kept in the scene falls like any other. Keep static bodies out
    /// of the scene if they must stay put.
    pub fn update(&mut self, delta_seconds: f32) {
        trace!(dt = delta_seconds, bodies = self.bodies.len(), "physics tick");

        let gravity_impulse = self.config.gravity * delta_seconds;
        for (_, body) in self.bodies.iter_mut() {
            body.set_linear_velocity(body.linear_velocity() + gravity_impulse);
        }

        for (_, body) in self.bodies.iter_mut() {
            body.set_position(body.position() + body.linear_velocity() * delta_seconds);
        }
    }

    /// Runs fixed ticks of at most `config.time_step` until `elapsed` is consumed or
    /// `config.max_substeps` ticks have run. Returns the number of ticks.
    ///
    /// Only the time actually simulated is added to [`time`](Self::time); whatever the
    /// sub-step cap cuts off is dropped.
    pub fn step(&mut self, elapsed: f32) -> u32 {
        let fixed_step = self.config.time_step;
        let max_steps = self.config.max_substeps;

        let mut remaining_time = elapsed;
        let mut steps = 0;

        while remaining_time > crate::math::EPSILON && steps < max_steps {
            let dt = fixed_step.min(remaining_time);

            self.update(dt);
            self.time += dt;

            remaining_time -= dt;
            steps += 1;
        }

        if remaining_time > crate::math::EPSILON {
            warn!(
                dropped = remaining_time,
                max_substeps = max_steps,
                "sub-step limit reached, dropping simulation time"
            );
        }

        steps
    }
}

impl Default for PhysicsScene {
    fn default() -> Self {
        Self::new()
    }
}

//! Simulation configuration
//!
//! Every tunable constant of the sandbox lives in [`SimulationConfig`]. A config is
//! built once (defaults, a JSON file, or CLI overrides), validated, and then treated
//! as read-only for the lifetime of a [`crate::Simulation`].
//!
//! Missing fields fall back to [`Default`], so a file only has to mention what it
//! changes:
//!
//! ```json
//! { "friction_factor": 0.5, "obstacles": { "sphere_radius": 2.0 } }
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::colliders::CollisionResponse;

/// Rejected configuration values
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle_count must be at least 1")]
    NoParticles,
    #[error("particle_mass must be positive and finite, got {0}")]
    InvalidMass(f32),
    #[error("{name} must be non-negative and finite, got {value}")]
    NegativeOrNonFinite { name: &'static str, value: f32 },
    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f32 },
    #[error("gravity_direction must be a non-zero vector")]
    ZeroGravityDirection,
    #[error("{name} radius must be positive, got {value}")]
    InvalidRadius { name: &'static str, value: f32 },
    #[error("{name} has min {min} greater than max {max} on some axis")]
    InvertedRegion { name: &'static str, min: Vec3, max: Vec3 },
}

/// Axis-aligned region new particles are spawned in
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnRegion {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for SpawnRegion {
    fn default() -> Self {
        Self {
            min: Vec3::new(-5.0, 5.0, -5.0),
            max: Vec3::new(5.0, 10.0, 5.0),
        }
    }
}

/// The box enclosed by the six bounding planes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for BoxBounds {
    fn default() -> Self {
        Self {
            min: Vec3::new(-5.0, 0.0, -5.0),
            max: Vec3::new(5.0, 10.0, 5.0),
        }
    }
}

/// Static obstacle geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub sphere_center: Vec3,
    pub sphere_radius: f32,
    pub capsule_a: Vec3,
    pub capsule_b: Vec3,
    pub capsule_radius: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            sphere_center: Vec3::new(1.0, 5.0, 0.0),
            sphere_radius: 1.5,
            capsule_a: Vec3::new(-2.0, 1.0, 1.0),
            capsule_b: Vec3::new(2.0, 1.0, 1.0),
            capsule_radius: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Scale of the gravity force
    pub gravity_magnitude: f32,
    /// Direction gravity pulls in; normalized when the force list is built
    pub gravity_direction: Vec3,
    /// Restitution used when pushing a penetrating particle back out
    pub bounce_elasticity: f32,
    /// Fraction of tangential velocity removed per collision
    pub friction_factor: f32,
    /// Multiplier applied to every external frame delta
    pub time_factor: f32,
    pub particle_count: usize,
    /// Mass shared by every particle
    pub particle_mass: f32,
    /// Seed for spawn positions
    pub seed: u64,
    pub spawn: SpawnRegion,
    pub bounds: BoxBounds,
    pub obstacles: ObstacleConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity_magnitude: 9.81,
            gravity_direction: Vec3::NEG_Y,
            bounce_elasticity: 0.8,
            friction_factor: 0.2,
            time_factor: 0.2,
            particle_count: 500,
            particle_mass: 1.0,
            seed: 0,
            spawn: SpawnRegion::default(),
            bounds: BoxBounds::default(),
            obstacles: ObstacleConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Check every field, reporting the first problem found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::NoParticles);
        }
        if !(self.particle_mass.is_finite() && self.particle_mass > 0.0) {
            return Err(ConfigError::InvalidMass(self.particle_mass));
        }
        non_negative("gravity_magnitude", self.gravity_magnitude)?;
        non_negative("time_factor", self.time_factor)?;
        unit_range("bounce_elasticity", self.bounce_elasticity)?;
        unit_range("friction_factor", self.friction_factor)?;
        if self.gravity_direction.try_normalize().is_none() {
            return Err(ConfigError::ZeroGravityDirection);
        }
        positive_radius("sphere", self.obstacles.sphere_radius)?;
        positive_radius("capsule", self.obstacles.capsule_radius)?;
        ordered("spawn", self.spawn.min, self.spawn.max)?;
        ordered("bounds", self.bounds.min, self.bounds.max)?;
        Ok(())
    }

    /// Scale an external frame delta into a simulation step
    pub fn scaled_dt(&self, frame_dt: f32) -> f32 {
        frame_dt * self.time_factor
    }

    pub fn response(&self) -> CollisionResponse {
        CollisionResponse {
            bounce_elasticity: self.bounce_elasticity,
            friction_factor: self.friction_factor,
        }
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NegativeOrNonFinite { name, value })
    }
}

fn unit_range(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}

fn positive_radius(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidRadius { name, value })
    }
}

fn ordered(name: &'static str, min: Vec3, max: Vec3) -> Result<(), ConfigError> {
    if min.cmple(max).all() {
        Ok(())
    } else {
        Err(ConfigError::InvertedRegion { name, min, max })
    }
}

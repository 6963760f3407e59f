//! Test helper utilities for particlebox tests

use glam::Vec3;

use crate::colliders::Collider;
use crate::config::SimulationConfig;
use crate::forces::ForceActuator;
use crate::particles::{ParticleState, ParticleStore};
use crate::render::RenderSink;
use crate::Simulation;

/// Check if two f32 values are approximately equal within tolerance
pub fn approx_eq_f32(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

/// Component-wise approximate equality for vectors
pub fn approx_eq_vec3(a: Vec3, b: Vec3, tol: f32) -> bool {
    approx_eq_f32(a.x, b.x, tol) && approx_eq_f32(a.y, b.y, tol) && approx_eq_f32(a.z, b.z, tol)
}

/// Default config without gravity
pub fn weightless_config() -> SimulationConfig {
    SimulationConfig {
        gravity_magnitude: 0.0,
        ..SimulationConfig::default()
    }
}

/// Simulation of a single particle with the given forces and colliders
pub fn single_particle_sim(
    config: SimulationConfig,
    state: ParticleState,
    forces: Vec<ForceActuator>,
    colliders: Vec<Collider>,
) -> Simulation {
    Simulation::from_parts(config, ParticleStore::from_states([state]), forces, colliders)
        .expect("test config should be valid")
}

/// Render sink that remembers everything it was sent
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub spheres: Vec<(Vec3, f32)>,
    pub capsules: Vec<(Vec3, Vec3, f32)>,
    pub particle_updates: usize,
    pub last_positions: Vec<Vec3>,
}

impl RenderSink for RecordingSink {
    fn update_sphere(&mut self, center: Vec3, radius: f32) {
        self.spheres.push((center, radius));
    }

    fn update_capsule(&mut self, a: Vec3, b: Vec3, radius: f32) {
        self.capsules.push((a, b, radius));
    }

    fn update_particles(&mut self, start: usize, positions: &[Vec3]) {
        self.particle_updates += 1;
        let end = start + positions.len();
        if self.last_positions.len() < end {
            self.last_positions.resize(end, Vec3::ZERO);
        }
        self.last_positions[start..end].copy_from_slice(positions);
    }
}

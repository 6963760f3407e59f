//! Default sandbox contents: randomized particles in a box with two obstacles

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::colliders::Collider;
use crate::config::{BoxBounds, SimulationConfig, SpawnRegion};
use crate::forces::ForceActuator;
use crate::math::map_range;
use crate::particles::{ParticleState, ParticleStore};

/// `count` particles at rest, uniformly spread over `region`
///
/// The same seed always yields the same positions.
pub fn spawn_particles(count: usize, region: &SpawnRegion, seed: u64) -> ParticleStore {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut sample = |min: f32, max: f32| map_range(rng.random::<f32>(), 0.0, 1.0, min, max);

    ParticleStore::from_states((0..count).map(|_| {
        let position = Vec3::new(
            sample(region.min.x, region.max.x),
            sample(region.min.y, region.max.y),
            sample(region.min.z, region.max.z),
        );
        ParticleState::at_rest(position)
    }))
}

pub fn default_forces(config: &SimulationConfig) -> Vec<ForceActuator> {
    vec![ForceActuator::gravity(
        config.gravity_direction,
        config.gravity_magnitude,
    )]
}

/// Six planes facing into `bounds`: floor, ceiling, then x, then z walls
pub fn bounding_planes(bounds: &BoxBounds) -> [Collider; 6] {
    let BoxBounds { min, max } = *bounds;
    [
        Collider::plane(min, Vec3::Y),
        Collider::plane(max, Vec3::NEG_Y),
        Collider::plane(min, Vec3::X),
        Collider::plane(max, Vec3::NEG_X),
        Collider::plane(min, Vec3::Z),
        Collider::plane(max, Vec3::NEG_Z),
    ]
}

/// Bounding planes followed by the sphere and capsule obstacles
pub fn default_colliders(config: &SimulationConfig) -> Vec<Collider> {
    let obstacles = &config.obstacles;
    let mut colliders = bounding_planes(&config.bounds).to_vec();
    colliders.push(Collider::sphere(
        obstacles.sphere_center,
        obstacles.sphere_radius,
    ));
    colliders.push(Collider::capsule(
        obstacles.capsule_a,
        obstacles.capsule_b,
        obstacles.capsule_radius,
    ));
    colliders
}

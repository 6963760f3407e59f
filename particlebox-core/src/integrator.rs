use crate::colliders::{Collider, CollisionResponse};
use crate::forces::{net_force, ForceActuator};
use crate::particles::ParticleStore;

/// Step every particle forward by dt using explicit Euler integration
///
/// Velocity is updated from the net force first, then position from the new
/// velocity. Colliders run afterwards in list order, each one seeing the state
/// left by the previous collider, so the last colliding entry wins.
pub fn step(
    particles: &mut ParticleStore,
    forces: &[ForceActuator],
    colliders: &[Collider],
    response: &CollisionResponse,
    mass: f32,
    dt: f32,
) {
    for i in 0..particles.len() {
        let mut state = particles.state(i);

        let accel = net_force(forces, mass, state.position) / mass;
        state.velocity += dt * accel;
        state.position += dt * state.velocity;

        let state = colliders
            .iter()
            .fold(state, |state, collider| collider.resolve(state, response));

        particles.set_state(i, state);
    }
}

//! Tests for the explicit Euler integrator

use glam::Vec3;
use particlebox_core::integrator::step;
use particlebox_core::tests::test_helpers::{
    approx_eq_f32, approx_eq_vec3, single_particle_sim, weightless_config,
};
use particlebox_core::{
    Collider, CollisionResponse, ForceActuator, ParticleState, ParticleStore, SimulationConfig,
};

fn response() -> CollisionResponse {
    CollisionResponse {
        bounce_elasticity: 0.8,
        friction_factor: 0.2,
    }
}

#[test]
fn test_free_particles_move_with_constant_velocity() {
    let mut particles = ParticleStore::from_states([
        ParticleState::new(Vec3::ZERO, Vec3::new(1.0, 2.0, -3.0)),
        ParticleState::new(Vec3::new(4.0, 4.0, 4.0), Vec3::new(-0.5, 0.0, 0.25)),
    ]);
    let start = particles.clone();
    let dt = 0.02;

    for n in 1..=10 {
        step(&mut particles, &[], &[], &response(), 1.0, dt);

        for i in 0..particles.len() {
            let initial = start.state(i);
            let expected = initial.position + initial.velocity * dt * n as f32;
            assert!(approx_eq_vec3(particles.state(i).position, expected, 1e-5));
            assert_eq!(particles.state(i).velocity, initial.velocity);
        }
    }
}

#[test]
fn test_single_gravity_step() {
    let config = SimulationConfig::default();
    let mut sim = single_particle_sim(
        config.clone(),
        ParticleState::at_rest(Vec3::new(0.0, 8.0, 0.0)),
        vec![ForceActuator::gravity(Vec3::NEG_Y, config.gravity_magnitude)],
        vec![],
    );
    let frame_dt = 1.0 / 60.0;

    sim.advance(frame_dt);

    let dt = 0.2 * frame_dt;
    let expected_vy = -9.81 * dt;
    let state = sim.particles().state(0);
    assert!(approx_eq_f32(state.velocity.y, expected_vy, 1e-6));
    assert!(approx_eq_f32(state.position.y, 8.0 + expected_vy * dt, 1e-5));
    assert_eq!(state.position.x, 0.0);
    assert_eq!(state.position.z, 0.0);
}

#[test]
fn test_acceleration_is_independent_of_mass() {
    let run = |mass: f32| {
        let config = SimulationConfig {
            particle_mass: mass,
            ..SimulationConfig::default()
        };
        let mut sim = single_particle_sim(
            config,
            ParticleState::at_rest(Vec3::new(0.0, 8.0, 0.0)),
            vec![ForceActuator::gravity(Vec3::NEG_Y, 9.81)],
            vec![],
        );
        sim.advance(0.1);
        sim.particles().state(0)
    };

    let light = run(1.0);
    let heavy = run(5.0);

    assert!(approx_eq_vec3(light.velocity, heavy.velocity, 1e-6));
    assert!(approx_eq_vec3(light.position, heavy.position, 1e-6));
}

#[test]
fn test_colliders_run_after_motion() {
    // Particle sits just above the floor and falls through it within the step
    let falling = ParticleState::new(Vec3::new(0.0, 0.01, 0.0), Vec3::new(0.0, -1.0, 0.0));
    let mut particles = ParticleStore::from_states([falling]);
    let floor = Collider::plane(Vec3::ZERO, Vec3::Y);

    step(&mut particles, &[], &[floor], &response(), 1.0, 0.1);

    // moved to -0.09, then pushed to 0.8 * 0.09
    let state = particles.state(0);
    assert!(approx_eq_f32(state.position.y, 0.072, 1e-5));
    assert!(approx_eq_f32(state.velocity.y, -1.0, 1e-6));
}

#[test]
fn test_collider_order_matters() {
    // Each collider sees the state left by the previous one
    let floor = Collider::plane(Vec3::ZERO, Vec3::Y);
    let raised = Collider::plane(Vec3::new(0.0, 0.1, 0.0), Vec3::Y);
    let start = ParticleState::at_rest(Vec3::new(0.0, -0.1, 0.0));

    let mut floor_first = ParticleStore::from_states([start]);
    step(&mut floor_first, &[], &[floor, raised], &response(), 1.0, 0.0);
    let mut raised_first = ParticleStore::from_states([start]);
    step(&mut raised_first, &[], &[raised, floor], &response(), 1.0, 0.0);

    // floor: -0.1 -> 0.08, raised: 0.08 -> 0.116
    assert!(approx_eq_f32(floor_first.state(0).position.y, 0.116, 1e-5));
    // raised: -0.1 -> 0.26, floor: no contact
    assert!(approx_eq_f32(raised_first.state(0).position.y, 0.26, 1e-5));
}

#[test]
fn test_zero_time_factor_freezes_motion() {
    let config = SimulationConfig {
        time_factor: 0.0,
        ..weightless_config()
    };
    let start = ParticleState::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(5.0, 5.0, 5.0));
    let mut sim = single_particle_sim(config, start, vec![], vec![]);

    sim.advance(1.0);

    assert_eq!(sim.particles().state(0), start);
}

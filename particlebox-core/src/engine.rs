use crate::colliders::{Collider, CollisionResponse};
use crate::config::{ConfigError, SimulationConfig};
use crate::forces::ForceActuator;
use crate::integrator::step;
use crate::particles::ParticleStore;
use crate::render::RenderSink;
use crate::scene::{default_colliders, default_forces, spawn_particles};

/// The particle sandbox: owns particles, forces and colliders
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    response: CollisionResponse,
    particles: ParticleStore,
    forces: Vec<ForceActuator>,
    colliders: Vec<Collider>,
    frame: u64,
    sim_time: f32,
}

impl Simulation {
    /// Build the default scene and announce its obstacles to `sink`
    pub fn init(config: SimulationConfig, sink: &mut dyn RenderSink) -> Result<Self, ConfigError> {
        config.validate()?;

        let particles = spawn_particles(config.particle_count, &config.spawn, config.seed);
        let forces = default_forces(&config);
        let colliders = default_colliders(&config);

        let obstacles = &config.obstacles;
        sink.update_sphere(obstacles.sphere_center, obstacles.sphere_radius);
        sink.update_capsule(
            obstacles.capsule_a,
            obstacles.capsule_b,
            obstacles.capsule_radius,
        );
        sink.update_particles(0, particles.positions());

        let sim = Self::assemble(config, particles, forces, colliders);
        log::info!(
            "initialized {} particles, {} forces, {} colliders (seed {})",
            sim.particles.len(),
            sim.forces.len(),
            sim.colliders.len(),
            sim.config.seed,
        );
        Ok(sim)
    }

    /// Simulation over a caller-provided scene
    ///
    /// `config.particle_count` is ignored in favour of `particles.len()`.
    pub fn from_parts(
        config: SimulationConfig,
        particles: ParticleStore,
        forces: Vec<ForceActuator>,
        colliders: Vec<Collider>,
    ) -> Result<Self, ConfigError> {
        let config = SimulationConfig {
            particle_count: particles.len(),
            ..config
        };
        config.validate()?;
        Ok(Self::assemble(config, particles, forces, colliders))
    }

    fn assemble(
        config: SimulationConfig,
        particles: ParticleStore,
        forces: Vec<ForceActuator>,
        colliders: Vec<Collider>,
    ) -> Self {
        Self {
            response: config.response(),
            config,
            particles,
            forces,
            colliders,
            frame: 0,
            sim_time: 0.0,
        }
    }

    /// Advance one external frame of length `frame_dt` and publish positions
    pub fn update(&mut self, frame_dt: f32, sink: &mut dyn RenderSink) {
        self.advance(frame_dt);
        sink.update_particles(0, self.particles.positions());
    }

    /// Advance one external frame without publishing anything
    pub fn advance(&mut self, frame_dt: f32) {
        let frame_dt = if frame_dt.is_finite() && frame_dt >= 0.0 {
            frame_dt
        } else {
            log::warn!("ignoring invalid frame delta {frame_dt}");
            0.0
        };
        let dt = self.config.scaled_dt(frame_dt);

        step(
            &mut self.particles,
            &self.forces,
            &self.colliders,
            &self.response,
            self.config.particle_mass,
            dt,
        );

        self.frame += 1;
        self.sim_time += dt;
        log::trace!("frame {} dt {dt} t {}", self.frame, self.sim_time);
    }

    /// Release the scene
    pub fn teardown(self) {
        log::info!(
            "tearing down after {} frames ({:.3}s simulated)",
            self.frame,
            self.sim_time
        );
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn particles(&self) -> &ParticleStore {
        &self.particles
    }

    pub fn forces(&self) -> &[ForceActuator] {
        &self.forces
    }

    pub fn colliders(&self) -> &[Collider] {
        &self.colliders
    }

    /// Number of completed updates
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Total scaled time simulated so far
    pub fn sim_time(&self) -> f32 {
        self.sim_time
    }
}

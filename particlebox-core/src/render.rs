//! Outbound interface to whatever draws the simulation

use glam::Vec3;

/// Receives geometry from a [`crate::Simulation`]
///
/// Obstacle updates are sent once after the colliders are built; particle
/// positions are sent after every update as one contiguous slice.
pub trait RenderSink {
    fn update_sphere(&mut self, center: Vec3, radius: f32);

    fn update_capsule(&mut self, a: Vec3, b: Vec3, radius: f32);

    /// Positions of particles `start..start + positions.len()`
    fn update_particles(&mut self, start: usize, positions: &[Vec3]);
}

/// Sink that discards everything, for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn update_sphere(&mut self, _center: Vec3, _radius: f32) {}

    fn update_capsule(&mut self, _a: Vec3, _b: Vec3, _radius: f32) {}

    fn update_particles(&mut self, _start: usize, _positions: &[Vec3]) {}
}

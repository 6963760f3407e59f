pub mod colliders;
pub mod config;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod math;
pub mod particles;
pub mod render;
pub mod scene;

pub use colliders::{
    CapsuleCollider, Collider, CollisionResponse, Contact, ContactPlane, PlaneCollider,
    SphereCollider,
};
pub use config::{BoxBounds, ConfigError, ObstacleConfig, SimulationConfig, SpawnRegion};
pub use engine::Simulation;
pub use forces::ForceActuator;
pub use particles::{ParticleState, ParticleStore};
pub use render::{NullSink, RenderSink};

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;

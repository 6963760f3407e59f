use glam::Vec3;

/// Position and velocity of a single particle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParticleState {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl ParticleState {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity }
    }

    pub fn at_rest(position: Vec3) -> Self {
        Self::new(position, Vec3::ZERO)
    }
}

/// Fixed-size pool of particles stored as parallel position/velocity arrays
///
/// The position array is contiguous so it can be handed to a renderer as-is.
/// Indices are always in `0..len()`; anything else is a bug and panics.
#[derive(Debug, Clone)]
pub struct ParticleStore {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
}

impl ParticleStore {
    /// `count` particles at the origin, at rest
    pub fn new(count: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; count],
            velocities: vec![Vec3::ZERO; count],
        }
    }

    pub fn from_states(states: impl IntoIterator<Item = ParticleState>) -> Self {
        let (positions, velocities) = states
            .into_iter()
            .map(|state| (state.position, state.velocity))
            .unzip();
        Self {
            positions,
            velocities,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn set_particle(&mut self, index: usize, position: Vec3, velocity: Vec3) {
        self.positions[index] = position;
        self.velocities[index] = velocity;
    }

    pub fn state(&self, index: usize) -> ParticleState {
        ParticleState::new(self.positions[index], self.velocities[index])
    }

    pub fn set_state(&mut self, index: usize, state: ParticleState) {
        self.set_particle(index, state.position, state.velocity);
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    pub fn states(&self) -> impl Iterator<Item = ParticleState> + '_ {
        self.positions
            .iter()
            .zip(&self.velocities)
            .map(|(&position, &velocity)| ParticleState::new(position, velocity))
    }
}

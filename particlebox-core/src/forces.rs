use glam::Vec3;

/// A force source applied to every particle each step
#[derive(Debug, Clone, PartialEq)]
pub enum ForceActuator {
    /// Uniform field: `direction * mass * magnitude`, independent of position
    Gravity {
        direction: Vec3, // unit vector
        magnitude: f32,
    },
    /// Pull towards a fixed point, scaled by mass
    PositionalGravity {
        center: Vec3,
        strength: f32,
    },
}

impl ForceActuator {
    /// Uniform gravity from a (not necessarily normalized) direction
    pub fn gravity(direction: Vec3, magnitude: f32) -> Self {
        Self::Gravity {
            direction: direction.normalize_or_zero(),
            magnitude,
        }
    }

    pub fn positional_gravity(center: Vec3, strength: f32) -> Self {
        Self::PositionalGravity { center, strength }
    }

    /// Force acting on a particle of `mass` at `position`
    pub fn compute_force(&self, mass: f32, position: Vec3) -> Vec3 {
        match self {
            Self::Gravity {
                direction,
                magnitude,
            } => *direction * (mass * magnitude),
            Self::PositionalGravity { center, strength } => {
                // Zero at the center itself
                (*center - position).normalize_or_zero() * (mass * strength)
            }
        }
    }
}

/// Net force from a list of actuators
pub fn net_force(forces: &[ForceActuator], mass: f32, position: Vec3) -> Vec3 {
    forces
        .iter()
        .map(|force| force.compute_force(mass, position))
        .sum()
}

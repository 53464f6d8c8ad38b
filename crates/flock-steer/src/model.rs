//! The `SteeringModel` trait: the extension point for flocking behaviour.

use flock_core::{AgentId, Vec3};

use crate::SteeringContext;

/// Per-rule delta-velocities for one boid at one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SteeringForces {
    pub alignment:  Vec3,
    pub cohesion:   Vec3,
    pub separation: Vec3,
    pub wall:       Vec3,
}

impl SteeringForces {
    pub const ZERO: SteeringForces = SteeringForces {
        alignment:  Vec3::ZERO,
        cohesion:   Vec3::ZERO,
        separation: Vec3::ZERO,
        wall:       Vec3::ZERO,
    };

    /// Sum of all contributions.
    #[inline]
    pub fn total(&self) -> Vec3 {
        self.alignment + self.cohesion + self.separation + self.wall
    }
}

/// Pluggable steering behaviour.
///
/// Called once per boid per tick during the force phase with the boid's
/// neighbour set (nearest first) and the previous tick's committed state.
/// The returned forces are added to the boid's previous velocity and the
/// sum is clamped to the configured maximum speed by the integrator, so a
/// model never needs to clamp on its own.
///
/// # Thread safety
///
/// With flock-sim's `parallel` feature the force phase calls `steer` for
/// many boids at once, so implementations must be `Send + Sync`.
pub trait SteeringModel: Send + Sync + 'static {
    fn steer(
        &self,
        agent:     AgentId,
        neighbors: &[AgentId],
        ctx:       &SteeringContext<'_>,
    ) -> SteeringForces;
}

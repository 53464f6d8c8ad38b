//! A no-op steering model: boids coast in straight lines.

use flock_core::AgentId;

use crate::{SteeringContext, SteeringForces, SteeringModel};

/// A [`SteeringModel`] that always returns zero forces.
///
/// Useful in tests of pure integration and for passive populations that
/// simply drift.
pub struct NoSteering;

impl SteeringModel for NoSteering {
    fn steer(
        &self,
        _agent:     AgentId,
        _neighbors: &[AgentId],
        _ctx:       &SteeringContext<'_>,
    ) -> SteeringForces {
        SteeringForces::ZERO
    }
}

//! Read-only simulation state passed to every steering callback.

use flock_agent::Boid;
use flock_core::Tick;

/// The previous tick's committed population, shared immutably by every
/// [`SteeringModel`][crate::SteeringModel] call in a force phase.
///
/// The borrow lives for one force phase; flock-sim never mutates the
/// previous buffer while a context exists.
pub struct SteeringContext<'a> {
    /// The tick being computed.
    pub tick: Tick,

    /// Every boid as committed at the end of the last tick, indexed by
    /// `AgentId`.
    pub previous: &'a [Boid],
}

impl<'a> SteeringContext<'a> {
    #[inline]
    pub fn new(tick: Tick, previous: &'a [Boid]) -> Self {
        Self { tick, previous }
    }
}

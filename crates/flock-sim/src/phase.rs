//! The per-tick phase sequence.

use std::fmt;

/// Where a [`FlockSim`][crate::FlockSim] is inside its tick.
///
/// `Idle → Neighbor → Force → Integrate → Snapshot → Idle`.  Between
/// calls to `step` the sim is always `Idle`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TickPhase {
    #[default]
    Idle,
    Neighbor,
    Force,
    Integrate,
    Snapshot,
}

impl TickPhase {
    /// The phase that follows `self`.
    pub fn next(self) -> TickPhase {
        match self {
            TickPhase::Idle      => TickPhase::Neighbor,
            TickPhase::Neighbor  => TickPhase::Force,
            TickPhase::Force     => TickPhase::Integrate,
            TickPhase::Integrate => TickPhase::Snapshot,
            TickPhase::Snapshot  => TickPhase::Idle,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TickPhase::Idle      => "idle",
            TickPhase::Neighbor  => "neighbor",
            TickPhase::Force     => "force",
            TickPhase::Integrate => "integrate",
            TickPhase::Snapshot  => "snapshot",
        }
    }
}

impl fmt::Display for TickPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Plain data row types written by output backends.

use flock_agent::Boid;
use flock_core::{AgentId, Tick};
use flock_sim::TickStats;

/// One boid's kinematic state at a given tick, plus its derived heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoidSnapshotRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub x:        f32,
    pub y:        f32,
    pub z:        f32,
    pub vx:       f32,
    pub vy:       f32,
    pub vz:       f32,
    /// Radians about +z, measured from +x.
    pub yaw:      f32,
    /// Radians above the horizontal plane.
    pub pitch:    f32,
}

impl BoidSnapshotRow {
    pub fn from_boid(agent: AgentId, tick: Tick, boid: &Boid) -> Self {
        let heading = boid.heading();
        Self {
            agent_id: agent.0,
            tick:     tick.0,
            x:        boid.position.x,
            y:        boid.position.y,
            z:        boid.position.z,
            vx:       boid.velocity.x,
            vy:       boid.velocity.y,
            vz:       boid.velocity.z,
            yaw:      heading.yaw,
            pitch:    heading.pitch,
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub mean_speed:     f32,
    pub max_speed:      f32,
    pub clamped_agents: u64,
}

impl TickSummaryRow {
    pub fn from_stats(tick: Tick, stats: &TickStats) -> Self {
        Self {
            tick:           tick.0,
            mean_speed:     stats.mean_speed,
            max_speed:      stats.max_speed,
            clamped_agents: stats.clamped_agents as u64,
        }
    }
}

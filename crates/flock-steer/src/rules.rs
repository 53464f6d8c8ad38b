//! The classic boid rules.
//!
//! Each rule is a pure function of the previous tick's state and returns a
//! delta-velocity.  [`ClassicSteering`] bundles all four behind the
//! [`SteeringModel`] trait.
//!
//! | Rule            | Reads                        | Pushes toward                     |
//! |-----------------|------------------------------|-----------------------------------|
//! | alignment       | neighbour velocities         | the neighbours' mean heading      |
//! | cohesion        | neighbour positions          | the neighbours' centroid          |
//! | separation      | neighbours within threshold  | away from each, harder when close |
//! | wall avoidance  | the boid alone               | back inside the cylinder          |

use flock_agent::Boid;
use flock_core::vector::{horizontal, limit_length, normalize};
use flock_core::{AgentId, AlignmentPolicy, FlockConfig, SteeringStrengths, Vec3};

use crate::{Cylinder, SteeringContext, SteeringForces, SteeringModel};

/// Smallest gap to a wall, floor, or ceiling used as a divisor.  Keeps a
/// boid that has already crossed a boundary pushed back inward.
pub const MIN_WALL_GAP: f32 = 1.0e-3;

// ── SteeringParams ────────────────────────────────────────────────────────────

/// The slice of [`FlockConfig`] the rules consult.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteeringParams {
    pub strengths:           SteeringStrengths,
    pub alignment_policy:    AlignmentPolicy,
    pub proximity_threshold: f32,
    pub wall_threshold:      f32,
    pub boundary:            Cylinder,
    pub max_speed:           f32,
}

impl SteeringParams {
    pub fn from_config(config: &FlockConfig) -> Self {
        Self {
            strengths:           config.strengths,
            alignment_policy:    config.alignment_policy,
            proximity_threshold: config.proximity_threshold,
            wall_threshold:      config.wall_threshold,
            boundary:            config.boundary.into(),
            max_speed:           config.max_speed,
        }
    }
}

// ── Rules ─────────────────────────────────────────────────────────────────────

fn neighbor_boids<'a>(
    neighbors: &'a [AgentId],
    previous:  &'a [Boid],
) -> impl Iterator<Item = &'a Boid> + 'a {
    neighbors.iter().map(move |id| {
        assert!(id.index() < previous.len(), "neighbour {id} outside population");
        &previous[id.index()]
    })
}

/// Steer toward the neighbours' mean heading.
///
/// With [`AlignmentPolicy::Velocity`] the target is the mean neighbour
/// velocity; with [`AlignmentPolicy::VelocityAndPosition`] it is the mean
/// of each neighbour's velocity plus position.  The subject's own velocity
/// is subtracted, the difference normalized, then scaled by `strength`.
pub fn alignment(
    subject:   &Boid,
    neighbors: &[AgentId],
    previous:  &[Boid],
    strength:  f32,
    policy:    AlignmentPolicy,
) -> Vec3 {
    if neighbors.is_empty() {
        return Vec3::ZERO;
    }
    let sum: Vec3 = neighbor_boids(neighbors, previous)
        .map(|n| match policy {
            AlignmentPolicy::Velocity            => n.velocity,
            AlignmentPolicy::VelocityAndPosition => n.velocity + n.position,
        })
        .sum();
    let mean = sum / neighbors.len() as f32;
    normalize(mean - subject.velocity) * strength
}

/// Steer toward the positional centroid of the neighbour set.
pub fn cohesion(
    subject:   &Boid,
    neighbors: &[AgentId],
    previous:  &[Boid],
    strength:  f32,
) -> Vec3 {
    if neighbors.is_empty() {
        return Vec3::ZERO;
    }
    let sum: Vec3 = neighbor_boids(neighbors, previous).map(|n| n.position).sum();
    let centroid = sum / neighbors.len() as f32;
    normalize(centroid - subject.position) * strength
}

/// Push away from every neighbour closer than `threshold`.
///
/// Each contribution is the unit vector away from the neighbour scaled by
/// `strength / distance`.  Neighbours at exactly the subject's position
/// have no direction to flee and are skipped.
pub fn separation(
    subject:   &Boid,
    neighbors: &[AgentId],
    previous:  &[Boid],
    threshold: f32,
    strength:  f32,
) -> Vec3 {
    let mut push = Vec3::ZERO;
    for n in neighbor_boids(neighbors, previous) {
        let away = subject.position - n.position;
        let d = away.length();
        if d > 0.0 && d < threshold {
            push += normalize(away) * (strength / d);
        }
    }
    push
}

/// Keep the boid inside `cylinder`.
///
/// Within `threshold` of the wall the horizontal velocity loses
/// `p.xy / (d × gap) × strength` (toward the axis, stronger as the gap
/// closes).  Within `threshold` of the ceiling the vertical velocity gains
/// `strength / (z − ceiling)` (downward); within `threshold` of the floor
/// it gains `strength / z` (upward).  A boid inside both bands gets both
/// terms.  The adjusted velocity is clamped to
/// `max_speed` and the change from the previous velocity returned.
pub fn wall_avoidance(
    boid:      &Boid,
    cylinder:  &Cylinder,
    threshold: f32,
    strength:  f32,
    max_speed: f32,
) -> Vec3 {
    let p = boid.position;
    let mut v = boid.velocity;

    // ── Radial ────────────────────────────────────────────────────────────
    let d = cylinder.radial_distance(p);
    if d > cylinder.radius - threshold && d > 0.0 {
        let gap = (cylinder.radius - d).max(MIN_WALL_GAP);
        v -= horizontal(p) / (d * gap) * strength;
    }

    // ── Vertical ──────────────────────────────────────────────────────────
    if p.z > cylinder.ceiling - threshold {
        v.z += strength / (p.z - cylinder.ceiling).min(-MIN_WALL_GAP);
    }
    if p.z < threshold {
        v.z += strength / p.z.max(MIN_WALL_GAP);
    }

    limit_length(v, max_speed) - boid.velocity
}

// ── ClassicSteering ───────────────────────────────────────────────────────────

/// Alignment + cohesion + separation + wall avoidance.
#[derive(Copy, Clone, Debug)]
pub struct ClassicSteering {
    pub params: SteeringParams,
}

impl ClassicSteering {
    pub fn new(params: SteeringParams) -> Self {
        Self { params }
    }

    pub fn from_config(config: &FlockConfig) -> Self {
        Self::new(SteeringParams::from_config(config))
    }
}

impl SteeringModel for ClassicSteering {
    fn steer(
        &self,
        agent:     AgentId,
        neighbors: &[AgentId],
        ctx:       &SteeringContext<'_>,
    ) -> SteeringForces {
        let p = &self.params;
        let s = &p.strengths;
        let subject = &ctx.previous[agent.index()];

        SteeringForces {
            alignment:  alignment(subject, neighbors, ctx.previous, s.alignment, p.alignment_policy),
            cohesion:   cohesion(subject, neighbors, ctx.previous, s.cohesion),
            separation: separation(subject, neighbors, ctx.previous, p.proximity_threshold, s.separation),
            wall:       wall_avoidance(subject, &p.boundary, p.wall_threshold, s.wall, p.max_speed),
        }
    }
}

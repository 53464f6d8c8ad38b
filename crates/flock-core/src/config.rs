//! Flock configuration.
//!
//! Every constant the simulation consults lives in [`FlockConfig`].  It is
//! settled before the first tick and never mutated mid-run.  Applications
//! typically build it from `FlockConfig::default()` with a few overrides, or
//! load it from JSON with the `serde` feature (missing fields fall back to
//! the defaults).

use crate::{FlockError, FlockResult, Vec3};

// ── AlignmentPolicy ───────────────────────────────────────────────────────────

/// How the alignment rule aggregates neighbour state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AlignmentPolicy {
    /// Match the neighbours' mean velocity.
    #[default]
    Velocity,
    /// Average the per-neighbour sum of velocity and position before
    /// subtracting the subject's velocity.  Couples heading to location.
    VelocityAndPosition,
}

// ── Sections ──────────────────────────────────────────────────────────────────

/// Cylindrical containment volume around the vertical axis.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoundaryConfig {
    /// Horizontal radius of the cylinder, world units.
    pub radius: f32,
    /// Height of the ceiling; the floor is `z = 0`.
    pub ceiling: f32,
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self { radius: 100.0, ceiling: 60.0 }
    }
}

/// Where boids are placed at initialisation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpawnConfig {
    /// Centre of the spawn disc.  `origin.z` is the lowest spawn height.
    pub origin: Vec3,
    /// Boids start within this horizontal distance of `origin`.
    pub radius: f32,
    /// Boids start at a height in `[origin.z, origin.z + ceiling)`.
    pub ceiling: f32,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            origin:  Vec3::new(0.0, 0.0, 10.0),
            radius:  40.0,
            ceiling: 30.0,
        }
    }
}

/// Per-rule strength coefficients.  Zero disables a rule.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SteeringStrengths {
    pub alignment:  f32,
    pub cohesion:   f32,
    pub separation: f32,
    pub wall:       f32,
}

impl SteeringStrengths {
    /// All rules disabled: boids coast in straight lines.
    pub const ZERO: SteeringStrengths = SteeringStrengths {
        alignment:  0.0,
        cohesion:   0.0,
        separation: 0.0,
        wall:       0.0,
    };
}

impl Default for SteeringStrengths {
    fn default() -> Self {
        Self {
            alignment:  0.05,
            cohesion:   0.03,
            separation: 0.5,
            wall:       1.0,
        }
    }
}

// ── FlockConfig ───────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlockConfig {
    /// Number of boids (N).  Fixed for the lifetime of the run.
    pub population: usize,

    /// Neighbours consulted per boid per tick (K).  Must be `< population`.
    pub neighbor_count: usize,

    /// Hard ceiling on every boid's speed, world units per tick.
    pub max_speed: f32,

    /// Speed of the randomised initial heading.  Clamped to `max_speed`.
    pub initial_speed: f32,

    /// Neighbours closer than this push the boid away (separation rule).
    pub proximity_threshold: f32,

    /// Containment cylinder.
    pub boundary: BoundaryConfig,

    /// Distance from a wall, floor, or ceiling at which avoidance starts.
    pub wall_threshold: f32,

    pub strengths: SteeringStrengths,

    pub alignment_policy: AlignmentPolicy,

    pub spawn: SpawnConfig,

    /// Master RNG seed.  The same seed always produces the same flock.
    pub seed: u64,

    /// Emit an observer snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            population:            15,
            neighbor_count:        6,
            max_speed:             1.0,
            initial_speed:         0.5,
            proximity_threshold:   5.0,
            boundary:              BoundaryConfig::default(),
            wall_threshold:        10.0,
            strengths:             SteeringStrengths::default(),
            alignment_policy:      AlignmentPolicy::default(),
            spawn:                 SpawnConfig::default(),
            seed:                  42,
            output_interval_ticks: 1,
        }
    }
}

impl FlockConfig {
    /// Check every field the simulation relies on.
    ///
    /// Called by the population initialiser and the simulation builder; a
    /// config that fails here never reaches the first tick.
    pub fn validate(&self) -> FlockResult<()> {
        if self.population == 0 {
            return Err(FlockError::InvalidPopulation { population: self.population });
        }
        if self.neighbor_count >= self.population {
            return Err(FlockError::NeighborCount {
                neighbor_count: self.neighbor_count,
                population:     self.population,
            });
        }
        if self.max_speed <= 0.0 || !self.max_speed.is_finite() {
            return Err(FlockError::InvalidMaxSpeed(self.max_speed));
        }
        if u32::try_from(self.population).is_err() {
            return Err(FlockError::Config(format!(
                "population {} exceeds the AgentId range",
                self.population
            )));
        }

        non_negative("initial_speed", self.initial_speed)?;
        non_negative("proximity_threshold", self.proximity_threshold)?;
        non_negative("wall_threshold", self.wall_threshold)?;
        positive("boundary.radius", self.boundary.radius)?;
        positive("boundary.ceiling", self.boundary.ceiling)?;
        non_negative("spawn.radius", self.spawn.radius)?;
        non_negative("spawn.ceiling", self.spawn.ceiling)?;

        let s = &self.strengths;
        for (name, value) in [
            ("strengths.alignment", s.alignment),
            ("strengths.cohesion", s.cohesion),
            ("strengths.separation", s.separation),
            ("strengths.wall", s.wall),
        ] {
            if !value.is_finite() {
                return Err(FlockError::Config(format!("{name} must be finite, got {value}")));
            }
        }
        if !self.spawn.origin.is_finite() {
            return Err(FlockError::Config("spawn.origin must be finite".into()));
        }
        Ok(())
    }

    /// The initial speed actually used (never above `max_speed`).
    #[inline]
    pub fn effective_initial_speed(&self) -> f32 {
        self.initial_speed.min(self.max_speed)
    }
}

fn non_negative(name: &str, value: f32) -> FlockResult<()> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(FlockError::Config(format!("{name} must be non-negative and finite, got {value}")))
    }
}

fn positive(name: &str, value: f32) -> FlockResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(FlockError::Config(format!("{name} must be positive and finite, got {value}")))
    }
}

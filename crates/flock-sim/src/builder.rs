//! Fluent builder for constructing a [`FlockSim`].

use flock_agent::{Boid, FlockBuffers, initialize_population};
use flock_core::vector::limit_length;
use flock_core::{FlockConfig, Tick};
use flock_spatial::{NeighborFinder, NeighborSet, SortedNeighborFinder};
use flock_steer::{ClassicSteering, SteeringModel};
use tracing::{debug, warn};

use crate::{FlockSim, SimError, SimResult, TickPhase};

/// Fluent builder for [`FlockSim<S, F>`].
///
/// # Required inputs
///
/// - [`FlockConfig`]: population, neighbour count, speeds, boundary, …
/// - `S: SteeringModel`: the steering implementation
/// - `F: NeighborFinder`: the neighbour search (e.g. [`SortedNeighborFinder`])
///
/// # Optional inputs (have defaults)
///
/// | Method                | Default                                        |
/// |-----------------------|------------------------------------------------|
/// | `.initial_state(v)`   | `initialize_population(config.population, …)`  |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = FlockBuilder::new(config, NoSteering, RTreeNeighborFinder)
///     .initial_state(boids)
///     .build()?;
/// sim.run_ticks(100, &mut NoopObserver);
/// ```
pub struct FlockBuilder<S: SteeringModel, F: NeighborFinder> {
    config:   FlockConfig,
    steering: S,
    finder:   F,
    initial:  Option<Vec<Boid>>,
}

impl FlockBuilder<ClassicSteering, SortedNeighborFinder> {
    /// The reference flock: the four classic rules configured from
    /// `config`, neighbours found by a full sort.
    pub fn classic(config: FlockConfig) -> Self {
        let steering = ClassicSteering::from_config(&config);
        Self::new(config, steering, SortedNeighborFinder)
    }
}

impl<S: SteeringModel, F: NeighborFinder> FlockBuilder<S, F> {
    /// Create a builder with all required inputs.
    pub fn new(config: FlockConfig, steering: S, finder: F) -> Self {
        Self { config, steering, finder, initial: None }
    }

    /// Supply the starting population (must be length `config.population`).
    ///
    /// Velocities faster than `config.max_speed` are clamped at build time.
    pub fn initial_state(mut self, boids: Vec<Boid>) -> Self {
        self.initial = Some(boids);
        self
    }

    /// Validate the configuration, resolve the initial population, and
    /// return a ready-to-run [`FlockSim`].
    pub fn build(self) -> SimResult<FlockSim<S, F>> {
        self.config.validate()?;
        let population = self.config.population;

        // ── Resolve the initial population ────────────────────────────────
        let initial = match self.initial {
            Some(mut boids) => {
                if boids.len() != population {
                    return Err(SimError::AgentCountMismatch {
                        expected: population,
                        got:      boids.len(),
                        what:     "initial state",
                    });
                }
                clamp_speeds(&mut boids, self.config.max_speed);
                boids
            }
            None => initialize_population(population, &self.config)?,
        };

        debug!(
            population,
            neighbor_count = self.config.neighbor_count,
            finder = self.finder.name(),
            seed = self.config.seed,
            "flock built"
        );

        Ok(FlockSim {
            buffers:   FlockBuffers::new(initial),
            neighbors: vec![NeighborSet::empty(); population],
            positions: Vec::with_capacity(population),
            config:    self.config,
            steering:  self.steering,
            finder:    self.finder,
            tick:      Tick::ZERO,
            phase:     TickPhase::Idle,
        })
    }
}

fn clamp_speeds(boids: &mut [Boid], max_speed: f32) {
    let mut clamped = 0usize;
    for boid in boids.iter_mut() {
        let limited = limit_length(boid.velocity, max_speed);
        if limited != boid.velocity {
            boid.velocity = limited;
            clamped += 1;
        }
    }
    if clamped > 0 {
        warn!(clamped, max_speed, "initial state exceeded max speed; velocities clamped");
    }
}

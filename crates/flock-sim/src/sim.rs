//! The `FlockSim` struct and its tick loop.

use flock_agent::{Boid, FlockBuffers};
use flock_core::vector::limit_length;
use flock_core::{AgentId, FlockConfig, Tick, Vec3};
use flock_spatial::{NeighborFinder, NeighborSet};
use flock_steer::{SteeringContext, SteeringModel};
use tracing::trace;

use crate::{FlockObserver, TickPhase, TickStats};

// ── FlockSim ──────────────────────────────────────────────────────────────────

/// The flock simulation runner.
///
/// `FlockSim<S, F>` owns both population buffers for its whole lifetime and
/// drives the four-phase tick loop:
///
/// 1. **Neighbor** (optionally parallel): rank every boid's K nearest
///    neighbours from the current positions using `F`.
/// 2. **Force** (optionally parallel): call [`SteeringModel::steer`] with
///    the previous buffer and write `limit_length(v_prev + Σforces,
///    max_speed)` into the boid's own current slot.
/// 3. **Integrate**: `position += velocity`.
/// 4. **Snapshot**: commit current into previous; advance the tick.
///
/// Create via [`FlockBuilder`][crate::FlockBuilder].
pub struct FlockSim<S: SteeringModel, F: NeighborFinder> {
    pub(crate) config:    FlockConfig,
    pub(crate) buffers:   FlockBuffers,
    pub(crate) steering:  S,
    pub(crate) finder:    F,

    /// Last computed neighbour set per boid, indexed by `AgentId`.  Empty
    /// before the first tick.
    pub(crate) neighbors: Vec<NeighborSet>,

    /// Scratch buffer of current positions handed to the finder.  Reused
    /// every tick to avoid a per-tick allocation.
    pub(crate) positions: Vec<Vec3>,

    pub(crate) tick:      Tick,
    pub(crate) phase:     TickPhase,
}

impl<S: SteeringModel, F: NeighborFinder> FlockSim<S, F> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Advance the flock by one tick.
    pub fn step(&mut self) -> TickStats {
        let now = self.tick;

        self.enter(TickPhase::Neighbor);
        self.find_neighbors();
        trace!(tick = now.0, phase = %self.phase, "neighbour sets ranked");

        self.enter(TickPhase::Force);
        let clamped = self.apply_forces(now);
        trace!(tick = now.0, phase = %self.phase, clamped, "velocities updated");

        self.enter(TickPhase::Integrate);
        self.integrate();
        trace!(tick = now.0, phase = %self.phase, "positions integrated");

        self.enter(TickPhase::Snapshot);
        self.buffers.commit();
        let stats = TickStats::measure(self.buffers.current(), clamped);
        self.tick = now.next();
        trace!(tick = now.0, phase = %self.phase, mean_speed = stats.mean_speed, "tick committed");

        self.enter(TickPhase::Idle);
        stats
    }

    /// Run exactly `n` ticks, calling observer hooks at every tick boundary.
    /// Use [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run_ticks<O: FlockObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            let now = self.tick;
            observer.on_tick_start(now);
            let stats = self.step();
            observer.on_tick_end(now, &stats);
            if now.is_on_interval(self.config.output_interval_ticks) {
                observer.on_snapshot(now, self.buffers.current());
            }
        }
        observer.on_run_end(self.tick);
    }

    /// The committed population: the read-only view a renderer draws.
    #[inline]
    pub fn snapshot(&self) -> &[Boid] {
        self.buffers.current()
    }

    /// The reference state of the last tick.  Equal to [`snapshot`] between
    /// ticks.
    ///
    /// [`snapshot`]: FlockSim::snapshot
    #[inline]
    pub fn previous(&self) -> &[Boid] {
        self.buffers.previous()
    }

    /// Number of ticks completed so far.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    #[inline]
    pub fn config(&self) -> &FlockConfig {
        &self.config
    }

    /// Always [`TickPhase::Idle`] when observed from outside `step`.
    #[inline]
    pub fn phase(&self) -> TickPhase {
        self.phase
    }

    /// The neighbour set `agent` used in the most recent tick.
    ///
    /// # Panics
    ///
    /// If `agent` is outside the population.
    pub fn neighbors_of(&self, agent: AgentId) -> &NeighborSet {
        &self.neighbors[agent.index()]
    }

    pub fn steering(&self) -> &S {
        &self.steering
    }

    pub fn finder(&self) -> &F {
        &self.finder
    }

    // ── Phases ────────────────────────────────────────────────────────────

    fn enter(&mut self, phase: TickPhase) {
        debug_assert_eq!(self.phase.next(), phase, "tick phases out of order");
        self.phase = phase;
    }

    /// Rank every boid's neighbours from the current positions.
    fn find_neighbors(&mut self) {
        self.positions.clear();
        self.positions.extend(self.buffers.current().iter().map(|b| b.position));

        let finder    = &self.finder;
        let positions = self.positions.as_slice();
        let k         = self.config.neighbor_count;
        let index     = finder.build_index(positions);

        #[cfg(not(feature = "parallel"))]
        {
            self.neighbors = AgentId::range(positions.len())
                .map(|agent| finder.nearest(&index, agent, positions, k))
                .collect();
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.neighbors = (0..positions.len() as u32)
                .into_par_iter()
                .map(|i| finder.nearest(&index, AgentId(i), positions, k))
                .collect();
        }
    }

    /// Steer every boid from the previous buffer and write its clamped
    /// velocity.  Returns the number of boids whose velocity was clamped.
    fn apply_forces(&mut self, now: Tick) -> usize {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let (current, previous) = self.buffers.split_mut();
        let steering  = &self.steering;
        let neighbors = self.neighbors.as_slice();
        let max_speed = self.config.max_speed;

        let ctx = SteeringContext::new(now, previous);

        let update = |(i, boid): (usize, &mut Boid)| -> bool {
            let forces = steering.steer(AgentId(i as u32), neighbors[i].as_slice(), &ctx);
            let raw = previous[i].velocity + forces.total();
            boid.velocity = limit_length(raw, max_speed);
            boid.velocity != raw
        };

        #[cfg(not(feature = "parallel"))]
        {
            current.iter_mut().enumerate().map(update).filter(|&c| c).count()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            current.par_iter_mut().enumerate().map(update).filter(|&c| c).count()
        }
    }

    /// Explicit Euler: one tick is one frame, so `p += v`.
    fn integrate(&mut self) {
        for boid in self.buffers.current_mut() {
            boid.position += boid.velocity;
        }
    }
}

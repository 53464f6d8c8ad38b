//! Simulation observer trait for progress reporting and data collection.

use flock_agent::Boid;
use flock_core::Tick;

use crate::TickStats;

/// Callbacks invoked by [`FlockSim::run_ticks`][crate::FlockSim::run_ticks]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl FlockObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
///         if tick.is_on_interval(self.interval) {
///             println!("tick {tick}: mean speed {:.3}", stats.mean_speed);
///         }
///     }
/// }
/// ```
pub trait FlockObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's snapshot phase has committed.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks; an interval of 0 disables it).
    ///
    /// `boids` is the committed population, the same view a renderer gets
    /// from [`FlockSim::snapshot`][crate::FlockSim::snapshot].
    fn on_snapshot(&mut self, _tick: Tick, _boids: &[Boid]) {}

    /// Called once after the last tick of a `run_ticks` call.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`FlockObserver`] that does nothing.  Use when you need to call
/// `run_ticks` but don't want progress callbacks.
pub struct NoopObserver;

impl FlockObserver for NoopObserver {}

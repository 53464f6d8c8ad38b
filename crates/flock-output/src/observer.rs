//! `FlockOutputObserver<W>`: bridges `FlockObserver` to an `OutputWriter`.

use flock_agent::Boid;
use flock_core::{AgentId, Tick};
use flock_sim::{FlockObserver, TickStats};

use crate::row::{BoidSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FlockObserver`] that writes boid snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `FlockObserver`
/// methods have no return value.  After `sim.run_ticks()` returns, check for
/// errors with [`take_error`][Self::take_error].  The writer is finished in
/// `on_run_end`.
pub struct FlockOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FlockOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run_ticks()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FlockObserver for FlockOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        let row = TickSummaryRow::from_stats(tick, stats);
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, boids: &[Boid]) {
        let rows: Vec<BoidSnapshotRow> = AgentId::range(boids.len())
            .zip(boids)
            .map(|(id, boid)| BoidSnapshotRow::from_boid(id, tick, boid))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}

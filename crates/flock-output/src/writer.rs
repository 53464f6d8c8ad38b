//! The `OutputWriter` trait implemented by all backend writers.

use crate::{BoidSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by output writers.
///
/// When driven by [`FlockOutputObserver`][crate::FlockOutputObserver] the
/// observer swallows errors and keeps the first one for
/// [`take_error`][crate::FlockOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one tick's worth of boid rows.
    fn write_snapshots(&mut self, rows: &[BoidSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

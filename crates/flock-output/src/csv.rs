//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `boid_snapshots.csv`
//! - `tick_summaries.csv`
//!
//! Floats are written with Rust's shortest round-trip formatting, so
//! parsing a cell back gives the exact `f32` the simulation held.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{BoidSnapshotRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

pub(crate) const SNAPSHOT_COLUMNS: [&str; 10] =
    ["agent_id", "tick", "x", "y", "z", "vx", "vy", "vz", "yaw", "pitch"];

pub(crate) const SUMMARY_COLUMNS: [&str; 4] =
    ["tick", "mean_speed", "max_speed", "clamped_agents"];

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots:  Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("boid_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_COLUMNS)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_COLUMNS)?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[BoidSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.agent_id.to_string(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                row.vz.to_string(),
                row.yaw.to_string(),
                row.pitch.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.mean_speed.to_string(),
            row.max_speed.to_string(),
            row.clamped_agents.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}

//! `flock-output`: simulation output writers for the rust_flock simulation.
//!
//! [`CsvWriter`] writes `boid_snapshots.csv` and `tick_summaries.csv`.
//! Writers implement [`OutputWriter`] and are driven by
//! [`FlockOutputObserver`], which implements `flock_sim::FlockObserver`.
//! A renderer that wants frames instead of files reads
//! `FlockSim::snapshot()` directly.
//!
//! # Usage
//!
//! ```rust,ignore
//! use flock_output::{CsvWriter, FlockOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = FlockOutputObserver::new(writer);
//! sim.run_ticks(600, &mut obs);
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FlockOutputObserver;
pub use row::{BoidSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;

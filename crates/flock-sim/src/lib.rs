//! `flock-sim`: tick loop orchestrator for the rust_flock simulation.
//!
//! # Four-phase tick
//!
//! ```text
//! step():
//!   ① Neighbor   build the finder index over current positions; one
//!                K-nearest NeighborSet per boid (parallel with `parallel`).
//!   ② Force      SteeringModel::steer reads the previous buffer; the new
//!                velocity v_prev + Σforces is clamped to max_speed and
//!                written into the boid's own current slot.
//!   ③ Integrate  position += velocity for every current boid.
//!   ④ Snapshot   FlockBuffers::commit copies current into previous;
//!                the tick counter advances.
//! ```
//!
//! No phase reads what another boid writes in the same phase, so the
//! sequential and parallel paths produce bit-identical results.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Runs the neighbour and force phases on Rayon's pool.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_core::FlockConfig;
//! use flock_sim::{FlockBuilder, NoopObserver};
//!
//! let mut sim = FlockBuilder::classic(FlockConfig::default()).build()?;
//! sim.run_ticks(600, &mut NoopObserver);
//! render(sim.snapshot());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod phase;
pub mod sim;
pub mod stats;


pub use builder::FlockBuilder;
pub use error::{SimError, SimResult};
pub use observer::{FlockObserver, NoopObserver};
pub use phase::TickPhase;
pub use sim::FlockSim;
pub use stats::TickStats;

//! `flock-steer`: steering rules and the steering model trait.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`boundary`] | `Cylinder`: the containment volume                             |
//! | [`context`]  | `SteeringContext<'a>`: read-only previous-tick snapshot        |
//! | [`model`]    | `SteeringModel` trait, `SteeringForces`                         |
//! | [`rules`]    | Pure rule functions, `SteeringParams`, `ClassicSteering`        |
//! | [`noop`]     | `NoSteering`: zero forces, pure integration                    |
//!
//! # Design notes
//!
//! Steering is the read half of the tick's force phase.  Every rule reads
//! only the previous tick's buffer through `&SteeringContext` and returns a
//! delta-velocity; the integrator in flock-sim adds the deltas to the
//! previous velocity, clamps the speed, and writes the result.  Models
//! therefore only need to be `Send + Sync` and never hold mutable state.

pub mod boundary;
pub mod context;
pub mod model;
pub mod noop;
pub mod rules;


pub use boundary::Cylinder;
pub use context::SteeringContext;
pub use model::{SteeringForces, SteeringModel};
pub use noop::NoSteering;
pub use rules::{ClassicSteering, SteeringParams};

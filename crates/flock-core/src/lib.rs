//! `flock-core`: foundational types for the `rust_flock` simulation.
//!
//! This crate is a dependency of every other `flock-*` crate.  It has no
//! `flock-*` dependencies and few external ones (`glam`, `rand`,
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`vector`]      | `Vec3` re-export, distance / normalize / cross / clamp |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `AgentRng` (per-agent deterministic RNG)              |
//! | [`config`]      | `FlockConfig` and its sub-sections, validation        |
//! | [`error`]       | `FlockError`, `FlockResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load `FlockConfig` from a file.                |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;
pub mod vector;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AlignmentPolicy, BoundaryConfig, FlockConfig, SpawnConfig, SteeringStrengths};
pub use error::{FlockError, FlockResult};
pub use ids::AgentId;
pub use rng::AgentRng;
pub use time::Tick;
pub use vector::Vec3;

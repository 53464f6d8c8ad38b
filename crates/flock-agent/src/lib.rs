//! `flock-agent`: boid state and population storage for `rust_flock`.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`boid`]    | `Boid`, `ColorTag`, `Heading`                             |
//! | [`store`]   | `FlockBuffers` (current / previous double buffer)         |
//! | [`builder`] | `PopulationBuilder`, `initialize_population`              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                      |
//! |---------|-------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.      |

pub mod boid;
pub mod builder;
pub mod store;

#[cfg(test)]
mod tests;

pub use boid::{Boid, ColorTag, Heading};
pub use builder::{PopulationBuilder, initialize_population};
pub use store::FlockBuffers;

//! `flock-spatial`: nearest-neighbour search for the flock.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                    |
//! |---------------|-------------------------------------------------------------|
//! | [`neighbors`] | `NeighborSet`, `NeighborFinder` trait, `SortedNeighborFinder`, `find_nearest_neighbors` |
//! | [`rtree`]     | `RTreeNeighborFinder`, `BoidTree` (R-tree via `rstar`)      |
//!
//! # Selection semantics
//!
//! Every finder returns the same thing for the same positions: the `k`
//! agents nearest (Euclidean) to the subject, nearest first, never the
//! subject itself, with equal distances ordered by ascending `AgentId`.
//! Finders differ only in cost.

pub mod neighbors;
pub mod rtree;

#[cfg(test)]
mod tests;

pub use neighbors::{NeighborFinder, NeighborSet, SortedNeighborFinder, find_nearest_neighbors};
pub use rtree::{BoidTree, RTreeNeighborFinder};

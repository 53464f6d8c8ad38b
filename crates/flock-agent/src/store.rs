//! Double-buffered population storage.
//!
//! # Why two buffers?
//!
//! Every boid's steering reads its neighbours' state.  If boid 3 wrote its
//! new velocity in place, boid 4 would see a half-updated flock and the
//! result would depend on iteration order.  `FlockBuffers` keeps a frozen
//! `previous` copy of the last committed tick next to the `current` buffer
//! being written:
//!
//! ```ignore
//! // flock-sim force phase (simplified):
//! let (current, previous) = buffers.split_mut();
//! for (i, boid) in current.iter_mut().enumerate() {
//!     boid.velocity = steer(AgentId(i as u32), previous);
//! }
//! buffers.commit();
//! ```
//!
//! `split_mut` hands out `&mut current` and `&previous` together, so the
//! borrow checker guarantees nothing writes to `previous` mid-tick.

use flock_core::AgentId;

use crate::Boid;

/// The `current` / `previous` pair of population buffers.
///
/// Both buffers always have the same length, fixed at construction.
#[derive(Clone, Debug)]
pub struct FlockBuffers {
    current:  Vec<Boid>,
    previous: Vec<Boid>,
}

impl FlockBuffers {
    /// Seed both buffers with the same initial population so the first
    /// tick's `previous` is well-defined.
    pub fn new(initial: Vec<Boid>) -> Self {
        let previous = initial.clone();
        Self { current: initial, previous }
    }

    /// Number of boids.
    #[inline]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + use<> {
        AgentId::range(self.len())
    }

    /// The buffer being written this tick (equal to `previous` between ticks).
    #[inline]
    pub fn current(&self) -> &[Boid] {
        &self.current
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut [Boid] {
        &mut self.current
    }

    /// The last committed tick.  Read-only by construction.
    #[inline]
    pub fn previous(&self) -> &[Boid] {
        &self.previous
    }

    /// Disjoint borrows: mutable `current`, shared `previous`.
    #[inline]
    pub fn split_mut(&mut self) -> (&mut [Boid], &[Boid]) {
        (&mut self.current, &self.previous)
    }

    /// Commit this tick: copy `current` into `previous` element for element.
    ///
    /// Bit-identical copy; nothing is recomputed.
    pub fn commit(&mut self) {
        self.previous.copy_from_slice(&self.current);
    }

    /// `true` when both buffers hold bit-identical state (the between-ticks
    /// invariant).
    pub fn is_committed(&self) -> bool {
        self.current.iter().zip(&self.previous).all(|(c, p)| {
            c.position.to_array().map(f32::to_bits) == p.position.to_array().map(f32::to_bits)
                && c.velocity.to_array().map(f32::to_bits) == p.velocity.to_array().map(f32::to_bits)
                && c.color == p.color
        })
    }
}

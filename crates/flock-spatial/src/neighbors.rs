//! Neighbour sets, the finder trait, and the reference sorted-scan finder.
//!
//! # Pluggability
//!
//! `flock-sim` queries neighbours through the [`NeighborFinder`] trait, so
//! applications can swap the O(N log N)-per-agent scan for a spatial index
//! ([`RTreeNeighborFinder`][crate::RTreeNeighborFinder]) or anything else
//! without touching the tick loop.
//!
//! # Ranking
//!
//! Candidates are ranked by squared distance, which orders identically to
//! distance and skips the square root.  Ties are broken by ascending
//! `AgentId`, so a fixed snapshot always yields the same sets.

use std::cmp::Ordering;
use std::ops::Deref;

use flock_core::vector::distance_squared;
use flock_core::{AgentId, Vec3};

// ── NeighborSet ───────────────────────────────────────────────────────────────

/// The agents nearest to one subject at one tick, nearest first.
///
/// Never contains the subject.  Holds `min(k, N - 1)` entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborSet(Vec<AgentId>);

impl NeighborSet {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Wrap an already-ordered list of agents.
    pub fn from_ordered(agents: Vec<AgentId>) -> Self {
        Self(agents)
    }

    #[inline]
    pub fn as_slice(&self) -> &[AgentId] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<AgentId> {
        self.0
    }
}

impl Deref for NeighborSet {
    type Target = [AgentId];
    fn deref(&self) -> &[AgentId] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a NeighborSet {
    type Item = &'a AgentId;
    type IntoIter = std::slice::Iter<'a, AgentId>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// ── NeighborFinder trait ──────────────────────────────────────────────────────

/// Pluggable k-nearest-neighbour search.
///
/// The simulation calls [`build_index`](Self::build_index) once per tick
/// with every agent's position, then [`nearest`](Self::nearest) once per
/// agent against that index.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` and their index `Sync` so one
/// index can be queried from many Rayon workers at once.
pub trait NeighborFinder: Send + Sync {
    /// Per-tick acceleration structure.
    type Index: Sync;

    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Prepare for a round of queries over `positions`.
    fn build_index(&self, positions: &[Vec3]) -> Self::Index;

    /// The `k` agents nearest to `agent`, nearest first, ties by index.
    ///
    /// `positions` is the same slice the index was built from.
    fn nearest(
        &self,
        index:     &Self::Index,
        agent:     AgentId,
        positions: &[Vec3],
        k:         usize,
    ) -> NeighborSet;
}

// ── SortedNeighborFinder ──────────────────────────────────────────────────────

/// Scan-and-sort finder: distance to every other agent, stable sort, take `k`.
///
/// # Scaling limit
///
/// O(N log N) per query and O(N² log N) per tick.  Fine for flocks of tens
/// of boids; for hundreds or more use
/// [`RTreeNeighborFinder`][crate::RTreeNeighborFinder], which selects the
/// same neighbours.
#[derive(Copy, Clone, Debug, Default)]
pub struct SortedNeighborFinder;

impl NeighborFinder for SortedNeighborFinder {
    type Index = ();

    fn name(&self) -> &'static str {
        "sorted"
    }

    fn build_index(&self, _positions: &[Vec3]) -> Self::Index {}

    fn nearest(&self, _index: &(), agent: AgentId, positions: &[Vec3], k: usize) -> NeighborSet {
        find_nearest_neighbors(agent, positions, k)
    }
}

/// The `k` agents nearest to `positions[agent]`, nearest first.
///
/// Equal distances keep ascending index order.  `agent` itself is never
/// selected.  Asking for more than `N - 1` neighbours returns `N - 1`.
///
/// # Panics
///
/// Panics if `agent` is out of bounds for `positions`.
pub fn find_nearest_neighbors(agent: AgentId, positions: &[Vec3], k: usize) -> NeighborSet {
    assert!(
        agent.index() < positions.len(),
        "{agent} out of bounds for {} positions",
        positions.len()
    );
    let origin = positions[agent.index()];

    let mut ranked: Vec<(f32, AgentId)> = positions
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != agent.index())
        .map(|(i, &p)| (distance_squared(origin, p), AgentId(i as u32)))
        .collect();
    rank(&mut ranked);
    ranked.truncate(k);

    NeighborSet(ranked.into_iter().map(|(_, id)| id).collect())
}

/// Sort `(distance, id)` pairs nearest first, ties by ascending id.
pub(crate) fn rank(candidates: &mut [(f32, AgentId)]) {
    candidates.sort_by(compare_ranked);
}

#[inline]
fn compare_ranked(a: &(f32, AgentId), b: &(f32, AgentId)) -> Ordering {
    a.0.total_cmp(&b.0).then(a.1.cmp(&b.1))
}

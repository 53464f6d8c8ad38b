//! Unit tests for flock-spatial.

use flock_core::{AgentId, AgentRng, Vec3};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Five points on the x axis at x = 0, 1, 3, 6, 10.
fn line() -> Vec<Vec3> {
    [0.0, 1.0, 3.0, 6.0, 10.0].iter().map(|&x| Vec3::new(x, 0.0, 0.0)).collect()
}

fn scattered(n: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = AgentRng::new(seed, AgentId(0));
    (0..n)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-100.0f32..100.0),
                rng.gen_range(-100.0f32..100.0),
                rng.gen_range(0.0f32..60.0),
            )
        })
        .collect()
}

/// Points on a small integer lattice: lots of exactly equal distances.
fn lattice() -> Vec<Vec3> {
    let mut out = Vec::new();
    for x in 0..4 {
        for y in 0..4 {
            for z in 0..2 {
                out.push(Vec3::new(x as f32, y as f32, z as f32));
            }
        }
    }
    out
}

fn ids(v: &[u32]) -> Vec<AgentId> {
    v.iter().map(|&i| AgentId(i)).collect()
}

// ── Sorted finder ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod sorted {
    use super::*;
    use crate::find_nearest_neighbors;

    #[test]
    fn nearest_first() {
        let set = find_nearest_neighbors(AgentId(1), &line(), 3);
        // Distances from x=1: 0→1, 3→2, 6→5, 10→9.
        assert_eq!(set.as_slice(), ids(&[0, 2, 3]).as_slice());
    }

    #[test]
    fn never_contains_subject() {
        let pts = scattered(40, 3);
        for i in AgentId::range(pts.len()) {
            let set = find_nearest_neighbors(i, &pts, 39);
            assert_eq!(set.len(), 39);
            assert!(!set.contains(&i), "{i} selected itself");
        }
    }

    #[test]
    fn ties_broken_by_index() {
        // Agent 0 at origin; agents 1..=4 all at distance 1.
        let pts = vec![
            Vec3::ZERO,
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        let set = find_nearest_neighbors(AgentId(0), &pts, 2);
        assert_eq!(set.as_slice(), ids(&[1, 2]).as_slice());
    }

    #[test]
    fn coincident_agents_are_still_neighbours() {
        let pts = vec![Vec3::ONE, Vec3::ONE, Vec3::ONE];
        let set = find_nearest_neighbors(AgentId(1), &pts, 2);
        assert_eq!(set.as_slice(), ids(&[0, 2]).as_slice());
    }

    #[test]
    fn pair_always_selects_the_other() {
        for seed in 0..20 {
            let pts = scattered(2, seed);
            assert_eq!(find_nearest_neighbors(AgentId(0), &pts, 1).as_slice(), &[AgentId(1)]);
            assert_eq!(find_nearest_neighbors(AgentId(1), &pts, 1).as_slice(), &[AgentId(0)]);
        }
        // Even when both sit on the same point.
        let same = vec![Vec3::ZERO, Vec3::ZERO];
        assert_eq!(find_nearest_neighbors(AgentId(0), &same, 1).as_slice(), &[AgentId(1)]);
    }

    #[test]
    fn k_larger_than_population_is_capped() {
        let set = find_nearest_neighbors(AgentId(0), &line(), 50);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn k_zero_is_empty() {
        assert!(find_nearest_neighbors(AgentId(2), &line(), 0).is_empty());
    }

    #[test]
    fn repeated_queries_are_identical() {
        let pts = lattice();
        for i in AgentId::range(pts.len()) {
            let a = find_nearest_neighbors(i, &pts, 6);
            let b = find_nearest_neighbors(i, &pts, 6);
            assert_eq!(a, b);
        }
    }

    #[test]
    #[should_panic]
    fn out_of_bounds_subject_panics() {
        find_nearest_neighbors(AgentId(5), &line(), 1);
    }
}

// ── Finder trait + R-tree agreement ───────────────────────────────────────────

#[cfg(test)]
mod finders {
    use super::*;
    use crate::{NeighborFinder, RTreeNeighborFinder, SortedNeighborFinder};

    fn all_sets<F: NeighborFinder>(finder: &F, pts: &[Vec3], k: usize) -> Vec<Vec<AgentId>> {
        let index = finder.build_index(pts);
        AgentId::range(pts.len())
            .map(|i| finder.nearest(&index, i, pts, k).into_vec())
            .collect()
    }

    #[test]
    fn rtree_index_holds_every_agent() {
        let pts = scattered(25, 1);
        let index = RTreeNeighborFinder.build_index(&pts);
        assert_eq!(index.len(), 25);
        assert!(!index.is_empty());
    }

    #[test]
    fn rtree_matches_sorted_on_scattered_points() {
        for seed in 0..5 {
            let pts = scattered(120, seed);
            for k in [1, 6, 20] {
                assert_eq!(
                    all_sets(&RTreeNeighborFinder, &pts, k),
                    all_sets(&SortedNeighborFinder, &pts, k),
                    "seed {seed}, k {k}"
                );
            }
        }
    }

    #[test]
    fn rtree_matches_sorted_with_heavy_ties() {
        let pts = lattice();
        for k in [1, 3, 6, 10, pts.len() - 1] {
            assert_eq!(
                all_sets(&RTreeNeighborFinder, &pts, k),
                all_sets(&SortedNeighborFinder, &pts, k),
                "k {k}"
            );
        }
    }

    #[test]
    fn rtree_handles_coincident_points() {
        let pts = vec![Vec3::ZERO; 6];
        let sets = all_sets(&RTreeNeighborFinder, &pts, 3);
        assert_eq!(sets[0], ids(&[1, 2, 3]));
        assert_eq!(sets[4], ids(&[0, 1, 2]));
    }

    #[test]
    fn rtree_k_zero_and_oversized_k() {
        let pts = line();
        let index = RTreeNeighborFinder.build_index(&pts);
        assert!(RTreeNeighborFinder.nearest(&index, AgentId(0), &pts, 0).is_empty());
        assert_eq!(RTreeNeighborFinder.nearest(&index, AgentId(0), &pts, 99).len(), 4);
    }

    #[test]
    fn finder_names() {
        assert_eq!(SortedNeighborFinder.name(), "sorted");
        assert_eq!(RTreeNeighborFinder.name(), "rtree");
    }
}

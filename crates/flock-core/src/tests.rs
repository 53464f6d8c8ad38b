//! Unit tests for flock-core primitives.

#[cfg(test)]
mod ids {
    use crate::AgentId;

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(AgentId::default(), AgentId::INVALID);
    }

    #[test]
    fn range_is_ascending() {
        let ids: Vec<_> = AgentId::range(3).collect();
        assert_eq!(ids, [AgentId(0), AgentId(1), AgentId(2)]);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod vector {
    use crate::vector::{cross, distance, horizontal, limit_length, normalize, scale};
    use crate::Vec3;

    #[test]
    fn distance_345() {
        let d = distance(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn normalize_zero_is_zero() {
        assert_eq!(normalize(Vec3::ZERO), Vec3::ZERO);
    }

    #[test]
    fn normalize_has_unit_length() {
        let n = normalize(Vec3::new(0.0, -7.0, 0.0));
        assert_eq!(n, Vec3::new(0.0, -1.0, 0.0));
        let m = normalize(Vec3::new(1.0, 2.0, 3.0));
        assert!((m.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cross_of_axes() {
        assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
        assert_eq!(cross(Vec3::Y, Vec3::X), -Vec3::Z);
        // Unnormalized.
        assert_eq!(cross(Vec3::X * 2.0, Vec3::Y * 3.0), Vec3::Z * 6.0);
    }

    #[test]
    fn scale_is_elementwise() {
        assert_eq!(scale(Vec3::new(1.0, -2.0, 3.0), 2.0), Vec3::new(2.0, -4.0, 6.0));
    }

    #[test]
    fn horizontal_drops_z() {
        assert_eq!(horizontal(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn limit_leaves_short_vectors_untouched() {
        let v = Vec3::new(0.3, 0.4, 0.0);
        assert_eq!(limit_length(v, 1.0), v);
    }

    #[test]
    fn limit_never_exceeds_max() {
        // Awkward magnitudes and directions that tend to round upward.
        let maxes = [0.1_f32, 0.7, 1.0, 1.3, 3.3333, 17.0];
        for (i, &max) in maxes.iter().enumerate() {
            for j in 0..200 {
                let t = (i * 200 + j) as f32 * 0.618_034;
                let v = Vec3::new(t.sin() * 91.0, t.cos() * 37.0, (t * 1.7).sin() * 53.0);
                let out = limit_length(v, max);
                assert!(out.length() <= max, "{v:?} clamped to {out:?} > {max}");
                // Direction preserved.
                assert!(normalize(out).dot(normalize(v)) > 0.9999);
            }
        }
    }

    #[test]
    fn limit_with_non_positive_max_is_zero() {
        assert_eq!(limit_length(Vec3::ONE, 0.0), Vec3::ZERO);
        assert_eq!(limit_length(Vec3::ONE, -1.0), Vec3::ZERO);
    }
}

#[cfg(test)]
mod time {
    use crate::Tick;

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.next(), Tick(11));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn interval_boundaries() {
        assert!(Tick(0).is_on_interval(5));
        assert!(Tick(10).is_on_interval(5));
        assert!(!Tick(11).is_on_interval(5));
        assert!(!Tick(10).is_on_interval(0));
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng};

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = AgentRng::new(12345, AgentId(0));
        let mut r2 = AgentRng::new(12345, AgentId(0));
        for _ in 0..100 {
            let a: f32 = r1.random();
            let b: f32 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_agents_differ() {
        let mut r0 = AgentRng::new(1, AgentId(0));
        let mut r1 = AgentRng::new(1, AgentId(1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent agents should diverge");
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = AgentRng::new(0, AgentId(0));
        for _ in 0..1000 {
            let v = rng.gen_range(-1.0f32..1.0);
            assert!((-1.0..1.0).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use crate::{FlockConfig, FlockError};

    #[test]
    fn default_is_valid() {
        let cfg = FlockConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.population, 15);
        assert_eq!(cfg.neighbor_count, 6);
    }

    #[test]
    fn zero_population_rejected() {
        let cfg = FlockConfig { population: 0, neighbor_count: 0, ..FlockConfig::default() };
        assert_eq!(cfg.validate(), Err(FlockError::InvalidPopulation { population: 0 }));
    }

    #[test]
    fn neighbor_count_must_be_below_population() {
        let cfg = FlockConfig { population: 4, neighbor_count: 4, ..FlockConfig::default() };
        assert_eq!(
            cfg.validate(),
            Err(FlockError::NeighborCount { neighbor_count: 4, population: 4 })
        );
        let ok = FlockConfig { population: 4, neighbor_count: 3, ..FlockConfig::default() };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn non_positive_max_speed_rejected() {
        for bad in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let cfg = FlockConfig { max_speed: bad, ..FlockConfig::default() };
            assert!(
                matches!(cfg.validate(), Err(FlockError::InvalidMaxSpeed(_))),
                "max_speed {bad} accepted"
            );
        }
    }

    #[test]
    fn boundary_must_be_positive() {
        let mut cfg = FlockConfig::default();
        cfg.boundary.radius = 0.0;
        assert!(matches!(cfg.validate(), Err(FlockError::Config(_))));

        let mut cfg = FlockConfig::default();
        cfg.boundary.ceiling = -5.0;
        assert!(matches!(cfg.validate(), Err(FlockError::Config(_))));
    }

    #[test]
    fn non_finite_strength_rejected() {
        let mut cfg = FlockConfig::default();
        cfg.strengths.cohesion = f32::NAN;
        assert!(matches!(cfg.validate(), Err(FlockError::Config(_))));
    }

    #[test]
    fn negative_thresholds_rejected() {
        let cfg = FlockConfig { proximity_threshold: -1.0, ..FlockConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = FlockConfig { wall_threshold: -0.5, ..FlockConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn initial_speed_capped_by_max() {
        let cfg = FlockConfig { initial_speed: 9.0, max_speed: 2.0, ..FlockConfig::default() };
        assert_eq!(cfg.effective_initial_speed(), 2.0);
    }

    #[test]
    fn error_messages_are_readable() {
        let err = FlockError::NeighborCount { neighbor_count: 6, population: 3 };
        assert_eq!(err.to_string(), "neighbor count 6 must be smaller than population 3");
    }
}

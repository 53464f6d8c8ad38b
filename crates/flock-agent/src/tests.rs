//! Unit tests for flock-agent.

#[cfg(test)]
mod boid_tests {
    use std::f32::consts::FRAC_PI_2;

    use flock_core::Vec3;

    use crate::{Boid, Heading};

    #[test]
    fn speed_is_velocity_length() {
        let b = Boid::new(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0));
        assert_eq!(b.speed(), 5.0);
    }

    #[test]
    fn heading_of_stationary_boid_is_zero() {
        let h = Heading::from_velocity(Vec3::ZERO);
        assert_eq!(h.direction, Vec3::ZERO);
        assert_eq!(h.yaw, 0.0);
        assert_eq!(h.pitch, 0.0);
    }

    #[test]
    fn heading_follows_velocity() {
        let along_y = Boid::new(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0)).heading();
        assert_eq!(along_y.direction, Vec3::Y);
        assert!((along_y.yaw - FRAC_PI_2).abs() < 1e-6);
        assert!(along_y.pitch.abs() < 1e-6);

        let climbing = Boid::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 0.5)).heading();
        assert!((climbing.pitch - FRAC_PI_2).abs() < 1e-6);
    }
}

#[cfg(test)]
mod store_tests {
    use flock_core::{AgentId, Vec3};

    use crate::{Boid, FlockBuffers};

    fn two_boids() -> Vec<Boid> {
        vec![
            Boid::new(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.1, 0.0, 0.0)),
            Boid::new(Vec3::new(-4.0, 0.5, 9.0), Vec3::new(0.0, -0.2, 0.3)),
        ]
    }

    #[test]
    fn new_seeds_both_buffers() {
        let buffers = FlockBuffers::new(two_boids());
        assert_eq!(buffers.len(), 2);
        assert_eq!(buffers.current(), buffers.previous());
        assert!(buffers.is_committed());
    }

    #[test]
    fn writes_to_current_leave_previous_untouched() {
        let mut buffers = FlockBuffers::new(two_boids());
        {
            let (current, previous) = buffers.split_mut();
            current[0].position += Vec3::X;
            assert_eq!(previous[0].position, Vec3::new(1.0, 2.0, 3.0));
        }
        assert!(!buffers.is_committed());
        assert_eq!(buffers.previous()[0].position, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn commit_is_bit_identical() {
        let mut buffers = FlockBuffers::new(two_boids());
        // Values that do not survive a decimal round-trip.
        buffers.current_mut()[0].position = Vec3::new(0.1 + 0.2, 1.0 / 3.0, -7.0e-8);
        buffers.current_mut()[1].velocity = Vec3::new(f32::MIN_POSITIVE, -0.0, 1.0e30);
        buffers.commit();

        for (c, p) in buffers.current().iter().zip(buffers.previous()) {
            for (a, b) in c.position.to_array().iter().zip(p.position.to_array()) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
            for (a, b) in c.velocity.to_array().iter().zip(p.velocity.to_array()) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
        assert!(buffers.is_committed());
    }

    #[test]
    fn agent_ids_cover_population() {
        let buffers = FlockBuffers::new(two_boids());
        let ids: Vec<_> = buffers.agent_ids().collect();
        assert_eq!(ids, [AgentId(0), AgentId(1)]);
    }
}

#[cfg(test)]
mod builder_tests {
    use flock_core::vector::horizontal;
    use flock_core::{FlockConfig, FlockError};

    use crate::{PopulationBuilder, initialize_population};

    #[test]
    fn builds_configured_population() {
        let cfg = FlockConfig::default();
        let boids = PopulationBuilder::new(&cfg).build().unwrap();
        assert_eq!(boids.len(), 15);
    }

    #[test]
    fn spawn_volume_respected() {
        let cfg = FlockConfig { population: 500, ..FlockConfig::default() };
        let boids = PopulationBuilder::new(&cfg).build().unwrap();
        let origin = cfg.spawn.origin;
        for b in &boids {
            let offset = b.position - origin;
            assert!(horizontal(offset).length() <= cfg.spawn.radius + 1e-3);
            assert!(offset.z >= 0.0 && offset.z <= cfg.spawn.ceiling + 1e-3);
        }
    }

    #[test]
    fn initial_speed_matches_config_and_respects_max() {
        let cfg = FlockConfig { initial_speed: 0.5, max_speed: 1.0, ..FlockConfig::default() };
        for b in PopulationBuilder::new(&cfg).build().unwrap() {
            assert!((b.speed() - 0.5).abs() < 1e-5);
        }

        let fast = FlockConfig { initial_speed: 10.0, max_speed: 1.0, ..FlockConfig::default() };
        for b in PopulationBuilder::new(&fast).build().unwrap() {
            assert!(b.speed() <= 1.0);
        }
    }

    #[test]
    fn same_seed_same_flock() {
        let cfg = FlockConfig::default();
        let a = PopulationBuilder::new(&cfg).build().unwrap();
        let b = PopulationBuilder::new(&cfg).build().unwrap();
        assert_eq!(a, b);

        let other = FlockConfig { seed: 7, ..FlockConfig::default() };
        let c = PopulationBuilder::new(&other).build().unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn growing_population_keeps_existing_boids() {
        let cfg = FlockConfig::default();
        let small = initialize_population(10, &cfg).unwrap();
        let large = initialize_population(40, &cfg).unwrap();
        assert_eq!(&large[..10], &small[..]);
    }

    #[test]
    fn zero_count_fails() {
        let cfg = FlockConfig { neighbor_count: 0, ..FlockConfig::default() };
        assert_eq!(
            initialize_population(0, &cfg),
            Err(FlockError::InvalidPopulation { population: 0 })
        );
    }

    #[test]
    fn neighbor_count_not_below_count_fails() {
        let cfg = FlockConfig::default(); // K = 6
        assert_eq!(
            initialize_population(6, &cfg),
            Err(FlockError::NeighborCount { neighbor_count: 6, population: 6 })
        );
        assert!(initialize_population(7, &cfg).is_ok());
    }
}

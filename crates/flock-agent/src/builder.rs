//! Randomised, deterministic population initialisation.
//!
//! # Usage
//!
//! ```rust
//! use flock_agent::PopulationBuilder;
//! use flock_core::FlockConfig;
//!
//! let config = FlockConfig::default();
//! let boids = PopulationBuilder::new(&config).build().unwrap();
//!
//! assert_eq!(boids.len(), config.population);
//! assert!(boids.iter().all(|b| b.speed() <= config.max_speed));
//! ```

use std::f32::consts::TAU;

use flock_core::vector::limit_length;
use flock_core::{AgentId, AgentRng, FlockConfig, FlockResult, Vec3};

use crate::{Boid, ColorTag};

/// Presentation colours; each boid draws one at random.
const PALETTE: [ColorTag; 6] = [
    ColorTag([255, 196, 0]),
    ColorTag([255, 96, 64]),
    ColorTag([64, 200, 255]),
    ColorTag([120, 255, 120]),
    ColorTag([220, 120, 255]),
    ColorTag([240, 240, 240]),
];

/// Builds the initial flock from a validated [`FlockConfig`].
///
/// Each boid is drawn from its own [`AgentRng`], so boid `i` is identical
/// across runs with the same seed regardless of population size.
pub struct PopulationBuilder<'a> {
    config: &'a FlockConfig,
    count:  usize,
}

impl<'a> PopulationBuilder<'a> {
    /// Builder for `config.population` boids.
    pub fn new(config: &'a FlockConfig) -> Self {
        Self { config, count: config.population }
    }

    /// Override the population size.  It is validated against the rest of
    /// the config exactly like `config.population`.
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Validate and construct the population.
    ///
    /// Positions are uniform over the spawn disc (horizontal) and the spawn
    /// height band; headings are uniform over the unit sphere at
    /// `initial_speed`.
    pub fn build(self) -> FlockResult<Vec<Boid>> {
        let config = FlockConfig { population: self.count, ..self.config.clone() };
        config.validate()?;

        let speed = config.effective_initial_speed();
        let boids = AgentId::range(config.population)
            .map(|id| {
                let mut rng = AgentRng::new(config.seed, id);
                spawn_boid(&mut rng, &config, speed)
            })
            .collect();
        Ok(boids)
    }
}

/// Construct `count` boids per `config` (the population field of `config`
/// is ignored in favour of `count`).
///
/// Fails when `count == 0`, `config.neighbor_count >= count`, or any other
/// configuration check fails.
pub fn initialize_population(count: usize, config: &FlockConfig) -> FlockResult<Vec<Boid>> {
    PopulationBuilder::new(config).count(count).build()
}

fn spawn_boid(rng: &mut AgentRng, config: &FlockConfig, speed: f32) -> Boid {
    let spawn = &config.spawn;

    // sqrt keeps the areal density uniform across the disc.
    let r = spawn.radius * rng.random::<f32>().sqrt();
    let theta = rng.random::<f32>() * TAU;
    let height = rng.random::<f32>() * spawn.ceiling;
    let position = spawn.origin + Vec3::new(r * theta.cos(), r * theta.sin(), height);

    let velocity = limit_length(random_unit(rng) * speed, config.max_speed);
    let color = PALETTE[rng.gen_range(0..PALETTE.len())];

    Boid { position, velocity, color }
}

/// Uniform direction on the unit sphere.
fn random_unit(rng: &mut AgentRng) -> Vec3 {
    let z = rng.random::<f32>() * 2.0 - 1.0;
    let phi = rng.random::<f32>() * TAU;
    let planar = (1.0 - z * z).max(0.0).sqrt();
    Vec3::new(planar * phi.cos(), planar * phi.sin(), z)
}

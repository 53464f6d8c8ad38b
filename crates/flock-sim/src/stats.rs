//! Per-tick summary statistics.

use flock_agent::Boid;
use flock_core::Vec3;

/// Aggregate state of the flock after one tick.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct TickStats {
    /// Mean boid speed (world units / tick).
    pub mean_speed: f32,
    /// Fastest boid this tick.  Never exceeds the configured `max_speed`.
    pub max_speed: f32,
    /// Boids whose raw steered velocity was over `max_speed` and got clamped.
    pub clamped_agents: usize,
    /// Mean position.
    pub centroid: Vec3,
}

impl TickStats {
    pub fn measure(boids: &[Boid], clamped_agents: usize) -> Self {
        if boids.is_empty() {
            return Self { clamped_agents, ..Self::default() };
        }
        let n = boids.len() as f32;
        let mut speed_sum = 0.0_f32;
        let mut max_speed = 0.0_f32;
        let mut position_sum = Vec3::ZERO;
        for b in boids {
            let s = b.speed();
            speed_sum += s;
            max_speed = max_speed.max(s);
            position_sum += b.position;
        }
        Self {
            mean_speed: speed_sum / n,
            max_speed,
            clamped_agents,
            centroid: position_sum / n,
        }
    }
}

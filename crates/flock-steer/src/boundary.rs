//! The cylindrical containment volume.

use flock_core::vector::horizontal;
use flock_core::{BoundaryConfig, Vec3};

/// Upright cylinder around the z axis: floor at `z = 0`, ceiling at
/// `z = ceiling`, wall at horizontal distance `radius`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cylinder {
    pub radius:  f32,
    pub ceiling: f32,
}

impl Cylinder {
    #[inline]
    pub fn new(radius: f32, ceiling: f32) -> Self {
        Self { radius, ceiling }
    }

    /// Horizontal distance from the axis.
    #[inline]
    pub fn radial_distance(&self, p: Vec3) -> f32 {
        horizontal(p).length()
    }

    /// `true` if `p` is inside or on the boundary.
    pub fn contains(&self, p: Vec3) -> bool {
        self.radial_distance(p) <= self.radius && p.z >= 0.0 && p.z <= self.ceiling
    }
}

impl From<BoundaryConfig> for Cylinder {
    fn from(b: BoundaryConfig) -> Self {
        Self::new(b.radius, b.ceiling)
    }
}

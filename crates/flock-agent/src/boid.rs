//! A single flocking agent.

use flock_core::Vec3;
use flock_core::vector::normalize;

/// Presentation colour carried alongside each boid.  The simulation never
/// reads it; renderers use it to tell boids apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorTag(pub [u8; 3]);

impl ColorTag {
    pub const WHITE: ColorTag = ColorTag([255, 255, 255]);
}

/// One boid: a position and a velocity in world units per tick.
///
/// `Boid` is `Copy` so the tick-end commit is a flat memory copy.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boid {
    pub position: Vec3,
    pub velocity: Vec3,
    pub color:    ColorTag,
}

impl Boid {
    #[inline]
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Self { position, velocity, color: ColorTag::WHITE }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Orientation along the direction of travel, for the renderer.
    pub fn heading(&self) -> Heading {
        Heading::from_velocity(self.velocity)
    }
}

/// Renderer-facing orientation derived from a velocity.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Heading {
    /// Unit direction of travel.  Zero when the boid is stationary.
    pub direction: Vec3,
    /// Rotation about +z, measured from +x, in radians (`-π..=π`).
    pub yaw: f32,
    /// Elevation above the horizontal plane, in radians (`-π/2..=π/2`).
    pub pitch: f32,
}

impl Heading {
    pub fn from_velocity(velocity: Vec3) -> Self {
        let direction = normalize(velocity);
        if direction == Vec3::ZERO {
            return Self { direction, yaw: 0.0, pitch: 0.0 };
        }
        let planar = (direction.x * direction.x + direction.y * direction.y).sqrt();
        Self {
            direction,
            yaw:   direction.y.atan2(direction.x),
            pitch: direction.z.atan2(planar),
        }
    }
}

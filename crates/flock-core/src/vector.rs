//! 3-D vector arithmetic on top of [`glam::Vec3`].
//!
//! All helpers are pure and total.  Zero-length inputs follow a no-op
//! policy (the zero vector comes back out) rather than producing NaN.
//! Coordinates are single precision; the flock lives in a volume of a
//! few hundred world units, well inside f32's comfortable range.

pub use glam::Vec3;

/// Euclidean distance between `a` and `b`.
#[inline]
pub fn distance(a: Vec3, b: Vec3) -> f32 {
    a.distance(b)
}

/// Squared Euclidean distance.  Monotone in [`distance`], so ranking by it
/// gives the same order without the square root.
#[inline]
pub fn distance_squared(a: Vec3, b: Vec3) -> f32 {
    a.distance_squared(b)
}

/// Scale `v` to unit length.  The zero vector is returned unchanged.
#[inline]
pub fn normalize(v: Vec3) -> Vec3 {
    let len = v.length();
    if len == 0.0 || !len.is_finite() {
        return Vec3::ZERO;
    }
    v / len
}

/// Standard right-handed cross product.  The result is not normalized.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

/// Multiply every component of `v` by `factor`.
#[inline]
pub fn scale(v: Vec3, factor: f32) -> Vec3 {
    v * factor
}

/// `v` projected onto the horizontal (x, y) plane.
#[inline]
pub fn horizontal(v: Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, 0.0)
}

/// Clamp the length of `v` to `max`.
///
/// Vectors already within `max` are returned bit-for-bit.  Longer vectors
/// are rescaled along the same direction; the result is guaranteed to
/// satisfy `result.length() <= max` after f32 rounding.  A non-positive
/// `max` yields the zero vector.
pub fn limit_length(v: Vec3, max: f32) -> Vec3 {
    if max <= 0.0 {
        return Vec3::ZERO;
    }
    if v.length() <= max {
        return v;
    }
    let len = v.length();
    if !len.is_finite() {
        return Vec3::ZERO;
    }
    let mut out = v * (max / len);
    // Rescaling can land a few ulps above `max`; walk down until it fits.
    while out.length() > max {
        out *= 1.0 - f32::EPSILON;
    }
    out
}

//! 2-D vector primitive used by the generator.
//!
//! Vectors are plain [`glam::Vec2`] values: `add` and `sub` are the `+` and
//! `-` operators, and every operation returns a new value. Scaling and
//! rotation by an angle are provided by [`VectorExt`].

use glam::Vec2;

/// A 2-D point or direction.
pub type Vector = Vec2;

/// Operations the generator needs on top of what `glam` provides.
pub trait VectorExt {
    /// Multiplies both components by `k`.
    fn scale_by(self, k: f32) -> Self;

    /// Rotates about the origin by `radians` using the standard 2-D
    /// rotation matrix:
    ///
    /// `x' = x·cos θ − y·sin θ`, `y' = x·sin θ + y·cos θ`.
    fn rotated_by(self, radians: f32) -> Self;
}

impl VectorExt for Vec2 {
    #[inline]
    fn scale_by(self, k: f32) -> Self {
        self * k
    }

    #[inline]
    fn rotated_by(self, radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

/// Converts an angle in degrees to radians.
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

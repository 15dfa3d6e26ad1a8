use std::time::Duration;

use glam::Vec2;
use rand::Rng;

use crate::{display::to_precision, error::ParameterError, types::Depth, types::Segment};

/// Generative parameters of the fractal tree.
///
/// ### Fields
/// - `angle` - Shift angle in degrees; negated on the left branch.
/// - `depth` - Number of branching levels to generate.
/// - `length_decay` - Factor applied to the parent length for the first branch.
/// - `left_decay_multiplier` - Extra factor compounded onto `length_decay`
///   for every left turn.
/// - `right_decay_multiplier` - Same as above for right turns.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FractalParameters {
    pub angle: f32,
    pub depth: Depth,
    pub length_decay: f32,
    pub left_decay_multiplier: f32,
    pub right_decay_multiplier: f32,
}

impl Default for FractalParameters {
    fn default() -> Self {
        Self {
            angle: 30.0,
            depth: 10,
            length_decay: 0.9,
            left_decay_multiplier: 0.91,
            right_decay_multiplier: 1.0,
        }
    }
}

impl FractalParameters {
    /// Checks that every floating-point parameter is finite.
    ///
    /// ### Returns
    /// - `Ok(())` if the record can be rendered.
    /// - `Err(ParameterError::NonFinite)` naming the first offending field.
    pub fn validate(&self) -> Result<(), ParameterError> {
        let floats = [
            ("angle", self.angle),
            ("length_decay", self.length_decay),
            ("left_decay_multiplier", self.left_decay_multiplier),
            ("right_decay_multiplier", self.right_decay_multiplier),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(ParameterError::NonFinite { name, value });
            }
        }
        Ok(())
    }

    /// Replaces every parameter with a random value in a range that keeps
    /// the tree readable: angle in `[0, 90)`, depth in `8..=15` and the
    /// decay factors in `[0.8, 1.0)`.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        self.angle = rng.random_range(0.0..90.0);
        self.depth = rng.random_range(8..=15);
        self.length_decay = rng.random_range(0.8..1.0);
        self.left_decay_multiplier = rng.random_range(0.8..1.0);
        self.right_decay_multiplier = rng.random_range(0.8..1.0);
    }

    /// Label/value pairs for on-screen display.
    ///
    /// Floats are shown with two significant digits, depth as an integer.
    pub fn display_values(&self) -> [(&'static str, String); 5] {
        [
            ("angle", to_precision(self.angle, 2)),
            ("depth", self.depth.to_string()),
            ("length decay", to_precision(self.length_decay, 2)),
            ("left decay", to_precision(self.left_decay_multiplier, 2)),
            ("right decay", to_precision(self.right_decay_multiplier, 2)),
        ]
    }
}

/// Fixed scene layout and timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneConfig {
    /// Logical size of the drawing surface. The y-axis points down.
    pub size: Vec2,
    /// Interval between two depth increments of the growth animation.
    pub tick_interval: Duration,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(1200.0, 900.0),
            tick_interval: Duration::from_millis(80),
        }
    }
}

impl SceneConfig {
    /// The trunk the tree grows from: a 120-unit vertical segment centred
    /// horizontally near the bottom of the surface, pointing up.
    pub fn root_segment(&self) -> Segment {
        let x = self.size.x / 2.0;
        Segment::new(
            Vec2::new(x, self.size.y - 180.0),
            Vec2::new(x, self.size.y - 300.0),
        )
    }
}

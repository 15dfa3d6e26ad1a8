use crate::vector::Vector;

/// One straight edge of the generated tree.
///
/// Segments are produced transiently while the tree is generated and handed
/// straight to a drawing sink; nothing keeps them around between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: Vector,
    pub end: Vector,
}

impl Segment {
    /// Creates a segment running from `start` to `end`.
    ///
    /// ### Parameters
    /// - `start` - Point the segment grows from.
    /// - `end` - Tip of the segment; children attach here.
    pub fn new(start: Vector, end: Vector) -> Self {
        Self { start, end }
    }

    /// Direction vector from `start` to `end`.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.end - self.start
    }

    /// Euclidean length of the segment.
    ///
    /// ### Returns
    /// `|end - start|`, `0.0` for a degenerate segment.
    #[inline]
    pub fn length(&self) -> f32 {
        self.direction().length()
    }
}

/// Remaining recursion depth. Signed so that a bad input can be detected
/// and treated as "nothing left to grow" instead of wrapping around.
pub type Depth = i32;

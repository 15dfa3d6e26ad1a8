//! Collaborators the core renders through.

use crate::vector::Vector;

/// Minimal drawing capability needed to render the tree.
pub trait DrawingSurface {
    /// Erases everything drawn so far.
    fn clear(&mut self);

    /// Strokes a straight line from `from` to `to`.
    fn draw_line(&mut self, from: Vector, to: Vector);
}

/// Host hook for display-refresh driven redraws.
///
/// Requests are single-shot: the render loop asks again at the end of every
/// frame it draws, and simply stops asking once it is stopped.
pub trait FrameScheduler {
    /// Asks the host to run the next frame once, at its next refresh.
    fn request_next_frame(&mut self);
}

/// Recording doubles for the collaborators above.
#[cfg(test)]
pub(crate) mod testing {
    use super::{DrawingSurface, FrameScheduler};
    use crate::{types::Segment, vector::Vector};

    /// In-memory surface that remembers what was drawn since the last clear.
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub lines: Vec<Segment>,
        pub clears: usize,
    }

    impl DrawingSurface for RecordingSurface {
        fn clear(&mut self) {
            self.lines.clear();
            self.clears += 1;
        }

        fn draw_line(&mut self, from: Vector, to: Vector) {
            self.lines.push(Segment::new(from, to));
        }
    }

    /// Scheduler that only counts requests; the caller decides when to run the
    /// next frame.
    #[derive(Debug, Default)]
    pub struct CountingScheduler {
        pub requests: usize,
    }

    impl FrameScheduler for CountingScheduler {
        fn request_next_frame(&mut self) {
            self.requests += 1;
        }
    }
}

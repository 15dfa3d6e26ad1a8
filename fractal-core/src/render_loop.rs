//! Continuous redraw of the tree, one frame per display refresh.

use std::{cell::Cell, rc::Rc};

use tracing::{debug, trace};

use crate::{
    generator,
    shared::ParameterSource,
    surface::{DrawingSurface, FrameScheduler},
    types::Segment,
};

/// Handle used to stop (or restart) a [`RenderLoop`] from outside.
///
/// Stopping takes effect on the next frame: the loop draws nothing and no
/// longer asks the scheduler for another frame.
#[derive(Clone, Debug)]
pub struct RenderHandle {
    running: Rc<Cell<bool>>,
}

impl RenderHandle {
    /// Stops the loop; the next frame draws nothing and requests nothing.
    pub fn stop(&self) {
        if self.running.replace(false) {
            debug!("render loop stopped");
        }
    }

    /// Re-arms a stopped loop. The host must request a frame to restart it.
    pub fn resume(&self) {
        if !self.running.replace(true) {
            debug!("render loop resumed");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// Redraws the whole tree every frame from the current parameters.
///
/// Nothing is carried over between frames except the shared
/// [`ParameterSource`], which others may change between two frames.
#[derive(Debug)]
pub struct RenderLoop {
    params: ParameterSource,
    root: Segment,
    handle: RenderHandle,
    frames: u64,
}

impl RenderLoop {
    /// Creates a running loop that grows the tree from `root`.
    pub fn new(params: ParameterSource, root: Segment) -> Self {
        Self {
            params,
            root,
            handle: RenderHandle {
                running: Rc::new(Cell::new(true)),
            },
            frames: 0,
        }
    }

    /// Returns a handle sharing this loop's running flag.
    pub fn handle(&self) -> RenderHandle {
        self.handle.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }

    /// The trunk every frame grows from.
    pub fn root(&self) -> Segment {
        self.root
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draws one frame and requests the next one.
    ///
    /// The surface is cleared, then every generated segment is drawn
    /// immediately in generation order. When the loop has been stopped the
    /// surface is left alone and no new frame is requested.
    ///
    /// ### Returns
    /// The number of segments drawn.
    pub fn render_frame(
        &mut self,
        surface: &mut impl DrawingSurface,
        scheduler: &mut impl FrameScheduler,
    ) -> usize {
        if !self.is_running() {
            return 0;
        }

        let params = self.params.get();
        surface.clear();

        let mut drawn = 0;
        generator::generate(self.root, &params, |s| {
            surface.draw_line(s.start, s.end);
            drawn += 1;
        });

        self.frames += 1;
        trace!(frame = self.frames, depth = params.depth, drawn, "frame drawn");

        scheduler.request_next_frame();
        drawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{FractalParameters, SceneConfig},
        surface::testing::{CountingScheduler, RecordingSurface},
    };

    fn setup(depth: i32) -> (ParameterSource, RenderLoop) {
        let params = ParameterSource::new(FractalParameters {
            depth,
            ..FractalParameters::default()
        });
        let root = SceneConfig::default().root_segment();
        let lp = RenderLoop::new(params.clone(), root);
        (params, lp)
    }

    #[test]
    fn frame_clears_draws_and_requests_next() {
        let (_params, mut lp) = setup(4);
        let mut surface = RecordingSurface::default();
        let mut sched = CountingScheduler::default();

        let drawn = lp.render_frame(&mut surface, &mut sched);

        assert_eq!(drawn, 15);
        assert_eq!(surface.lines.len(), 15);
        assert_eq!(surface.clears, 1);
        assert_eq!(sched.requests, 1);
        assert_eq!(lp.frames(), 1);
    }

    #[test]
    fn draws_in_generation_order() {
        let (params, mut lp) = setup(5);
        let mut surface = RecordingSurface::default();
        let mut sched = CountingScheduler::default();

        lp.render_frame(&mut surface, &mut sched);

        let expected = generator::collect(lp.root(), &params.get());
        assert_eq!(surface.lines, expected);
    }

    #[test]
    fn frames_do_not_accumulate() {
        let (_params, mut lp) = setup(3);
        let mut surface = RecordingSurface::default();
        let mut sched = CountingScheduler::default();

        for _ in 0..5 {
            lp.render_frame(&mut surface, &mut sched);
        }

        assert_eq!(surface.lines.len(), 7);
        assert_eq!(surface.clears, 5);
        assert_eq!(sched.requests, 5);
    }

    #[test]
    fn picks_up_parameter_changes_between_frames() {
        let (params, mut lp) = setup(2);
        let mut surface = RecordingSurface::default();
        let mut sched = CountingScheduler::default();

        assert_eq!(lp.render_frame(&mut surface, &mut sched), 3);
        params.set_depth(6);
        assert_eq!(lp.render_frame(&mut surface, &mut sched), 63);
        params.set_depth(0);
        assert_eq!(lp.render_frame(&mut surface, &mut sched), 0);
        assert!(surface.lines.is_empty());
    }

    #[test]
    fn stopped_loop_neither_draws_nor_reschedules() {
        let (_params, mut lp) = setup(3);
        let handle = lp.handle();
        let mut surface = RecordingSurface::default();
        let mut sched = CountingScheduler::default();

        lp.render_frame(&mut surface, &mut sched);
        handle.stop();
        assert!(!lp.is_running());

        assert_eq!(lp.render_frame(&mut surface, &mut sched), 0);
        assert_eq!(surface.clears, 1);
        assert_eq!(sched.requests, 1);
        assert_eq!(lp.frames(), 1);

        handle.resume();
        assert_eq!(lp.render_frame(&mut surface, &mut sched), 7);
        assert_eq!(sched.requests, 2);
    }
}

//! "Growing tree" animation of the recursion depth.
//!
//! [`ParameterAnimator::smooth_increase_depth`] resets the shared depth to 0
//! and then raises it by one on every tick. The run ends on the first tick
//! that takes the depth strictly past the target, so the last depth written
//! is `target + 1`.
//!
//! State machine:
//!
//! ```text
//! Idle --start--> Ticking --tick, depth <= target--> Ticking
//!                 Ticking --tick, depth >  target--> Idle
//! ```
//!
//! The host drives the animator by calling [`ParameterAnimator::update`] with
//! its current clock. Every tick that has come due since the previous call
//! fires, in order.

use std::time::Duration;

use tracing::{debug, trace};

use crate::{shared::ParameterSource, types::Depth};

/// Called with the new depth every time the animator writes it.
pub type DepthNotifier = Box<dyn FnMut(Depth)>;

/// The pending repetition of an in-flight run. Dropping it cancels the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct AnimationState {
    target: Depth,
    interval: Duration,
    next_tick: Duration,
}

/// Ramps `depth` in a [`ParameterSource`] from 0 up past a target.
///
/// At most one run is in flight: starting a new run replaces the previous
/// one, so two runs can never interleave their increments.
pub struct ParameterAnimator {
    params: ParameterSource,
    tick_interval: Duration,
    state: Option<AnimationState>,
    notifier: Option<DepthNotifier>,
}

impl ParameterAnimator {
    pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(80);

    /// Smallest accepted tick interval; shorter ones are raised to this.
    pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

    /// Creates an idle animator writing into `params`.
    ///
    /// ### Parameters
    /// - `params` - Shared parameters whose `depth` is animated.
    ///
    /// ### Returns
    /// An animator using [`Self::DEFAULT_TICK_INTERVAL`] and no notifier.
    pub fn new(params: ParameterSource) -> Self {
        Self {
            params,
            tick_interval: Self::DEFAULT_TICK_INTERVAL,
            state: None,
            notifier: None,
        }
    }

    /// Sets the interval used by [`Self::smooth_increase_depth`].
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval.max(Self::MIN_TICK_INTERVAL);
        self
    }

    /// Registers a fire-and-forget display hook for depth changes.
    pub fn with_notifier(mut self, notifier: impl FnMut(Depth) + 'static) -> Self {
        self.notifier = Some(Box::new(notifier));
        self
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// `true` while a run is in the `Ticking` state.
    pub fn is_animating(&self) -> bool {
        self.state.is_some()
    }

    /// Target depth of the in-flight run, if any.
    pub fn target(&self) -> Option<Depth> {
        self.state.map(|s| s.target)
    }

    /// Starts a run towards `target` using the configured tick interval.
    pub fn smooth_increase_depth(&mut self, target: Depth, now: Duration) {
        self.smooth_increase_depth_every(target, self.tick_interval, now);
    }

    /// Starts a run towards `target`, ticking every `interval` from `now`.
    ///
    /// Any run already in flight is cancelled first. The depth is reset to 0
    /// immediately and the notifier sees that reset.
    pub fn smooth_increase_depth_every(
        &mut self,
        target: Depth,
        interval: Duration,
        now: Duration,
    ) {
        if self.cancel() {
            debug!("restarting depth animation");
        }

        let interval = interval.max(Self::MIN_TICK_INTERVAL);
        self.params.set_depth(0);
        self.notify(0);

        self.state = Some(AnimationState {
            target,
            interval,
            next_tick: now + interval,
        });
        debug!(
            target_depth = target,
            interval_ms = interval.as_millis() as u64,
            "depth animation started"
        );
    }

    /// Cancels the in-flight run, leaving the depth where it is.
    ///
    /// ### Returns
    /// `true` if a run was actually cancelled.
    pub fn cancel(&mut self) -> bool {
        match self.state.take() {
            Some(state) => {
                debug!(
                    target_depth = state.target,
                    depth = self.params.depth(),
                    "depth animation cancelled"
                );
                true
            }
            None => false,
        }
    }

    /// Fires every tick due at `now`.
    ///
    /// ### Returns
    /// The number of ticks fired by this call.
    pub fn update(&mut self, now: Duration) -> usize {
        let mut fired = 0;

        while let Some(mut state) = self.state
            && now >= state.next_tick
        {
            let depth = self.params.depth().saturating_add(1);
            self.params.set_depth(depth);
            self.notify(depth);
            fired += 1;
            trace!(depth, target_depth = state.target, "depth tick");

            if depth > state.target {
                self.state = None;
                debug!(depth, "depth animation finished");
            } else {
                state.next_tick += state.interval;
                self.state = Some(state);
            }
        }

        fired
    }

    fn notify(&mut self, depth: Depth) {
        if let Some(notifier) = self.notifier.as_mut() {
            notifier(depth);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FractalParameters;
    use std::{cell::RefCell, rc::Rc};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn setup() -> (ParameterSource, ParameterAnimator, Rc<RefCell<Vec<Depth>>>) {
        let params = ParameterSource::new(FractalParameters::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let animator = ParameterAnimator::new(params.clone())
            .with_notifier(move |d| sink.borrow_mut().push(d));
        (params, animator, seen)
    }

    #[test]
    fn runs_one_past_target_then_stops() {
        let (params, mut animator, seen) = setup();

        animator.smooth_increase_depth(5, ms(0));
        assert!(animator.is_animating());
        assert_eq!(params.depth(), 0);

        let fired = animator.update(ms(10_000));

        assert_eq!(fired, 6);
        assert_eq!(params.depth(), 6);
        assert!(!animator.is_animating());
        assert_eq!(*seen.borrow(), vec![0, 1, 2, 3, 4, 5, 6]);

        // Nothing left to fire.
        assert_eq!(animator.update(ms(20_000)), 0);
        assert_eq!(params.depth(), 6);
    }

    #[test]
    fn ticks_follow_the_interval() {
        let (params, mut animator, _seen) = setup();
        animator.smooth_increase_depth(10, ms(1_000));

        assert_eq!(animator.update(ms(1_079)), 0);
        assert_eq!(params.depth(), 0);

        assert_eq!(animator.update(ms(1_080)), 1);
        assert_eq!(params.depth(), 1);

        assert_eq!(animator.update(ms(1_100)), 0);
        assert_eq!(animator.update(ms(1_400)), 4);
        assert_eq!(params.depth(), 5);
        assert_eq!(animator.target(), Some(10));
    }

    #[test]
    fn custom_interval_is_honoured() {
        let (params, mut animator, _seen) = setup();
        animator.smooth_increase_depth_every(3, ms(10), ms(0));

        assert_eq!(animator.update(ms(25)), 2);
        assert_eq!(params.depth(), 2);
        assert_eq!(animator.update(ms(40)), 2);
        assert_eq!(params.depth(), 4);
        assert!(!animator.is_animating());
    }

    #[test]
    fn restart_cancels_previous_run() {
        let (params, mut animator, seen) = setup();

        animator.smooth_increase_depth(10, ms(0));
        animator.update(ms(240));
        assert_eq!(params.depth(), 3);

        animator.smooth_increase_depth(2, ms(240));
        assert_eq!(params.depth(), 0);
        assert_eq!(animator.target(), Some(2));

        // Only the new run ticks: one increment per interval, not two.
        assert_eq!(animator.update(ms(320)), 1);
        assert_eq!(params.depth(), 1);

        animator.update(ms(5_000));
        assert_eq!(params.depth(), 3);
        assert!(!animator.is_animating());
        assert_eq!(*seen.borrow(), vec![0, 1, 2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn cancel_freezes_depth() {
        let (params, mut animator, _seen) = setup();

        assert!(!animator.cancel());

        animator.smooth_increase_depth(8, ms(0));
        animator.update(ms(160));
        assert!(animator.cancel());
        assert!(!animator.is_animating());

        assert_eq!(animator.update(ms(10_000)), 0);
        assert_eq!(params.depth(), 2);
    }

    #[test]
    fn builder_interval_is_clamped_and_used() {
        let params = ParameterSource::default();
        let mut animator =
            ParameterAnimator::new(params.clone()).with_tick_interval(Duration::ZERO);
        assert_eq!(animator.tick_interval(), ParameterAnimator::MIN_TICK_INTERVAL);

        animator.smooth_increase_depth(1, ms(0));
        assert_eq!(animator.update(ms(2)), 2);
        assert_eq!(params.depth(), 2);
    }

    #[test]
    fn negative_target_stops_after_first_tick() {
        let (params, mut animator, _seen) = setup();
        animator.smooth_increase_depth(-4, ms(0));
        assert_eq!(animator.update(ms(1_000)), 1);
        assert_eq!(params.depth(), 1);
        assert!(!animator.is_animating());
    }

    #[test]
    fn works_without_notifier() {
        let params = ParameterSource::default();
        let mut animator = ParameterAnimator::new(params.clone());
        animator.smooth_increase_depth(0, ms(0));
        assert_eq!(animator.update(ms(80)), 1);
        assert_eq!(params.depth(), 1);
    }
}

//! Interactive fractal tree window built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the shared parameters, the
//! render loop and the growth animator, and implements [`eframe::App`] to
//! draw the tree and expose the parameters as sliders.

use std::{cell::Cell, rc::Rc, time::Duration};

use eframe::App;
use fractal_core::{
    animator::ParameterAnimator,
    config::{FractalParameters, SceneConfig},
    render_loop::{RenderHandle, RenderLoop},
    shared::ParameterSource,
    surface::{DrawingSurface, FrameScheduler},
    types::Depth,
    vector::Vector,
};
use glam::Vec2;
use tracing::{debug, warn};

/// Placement of the fixed-size scene inside the available screen area.
///
/// The scene keeps its aspect ratio and is centred, leaving bars on the
/// sides that do not fit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneView {
    /// Screen rectangle covered by the scene.
    pub rect: egui::Rect,
    /// Screen pixels per scene unit.
    pub scale: f32,
}

impl SceneView {
    pub fn fit(scene_size: Vec2, available: egui::Rect) -> Self {
        let scale = (available.width() / scene_size.x)
            .min(available.height() / scene_size.y)
            .max(0.0);
        let size = egui::vec2(scene_size.x * scale, scene_size.y * scale);
        Self {
            rect: egui::Rect::from_center_size(available.center(), size),
            scale,
        }
    }

    /// Scene coordinates (y down) to screen coordinates.
    pub fn to_screen(&self, p: Vector) -> egui::Pos2 {
        egui::pos2(
            self.rect.min.x + p.x * self.scale,
            self.rect.min.y + p.y * self.scale,
        )
    }

    /// Inverse of [`SceneView::to_screen`].
    pub fn to_scene(&self, p: egui::Pos2) -> Vector {
        Vec2::new(
            (p.x - self.rect.min.x) / self.scale,
            (p.y - self.rect.min.y) / self.scale,
        )
    }

    /// Scene position under the pointer.
    ///
    /// ### Returns
    /// `None` when there is no pointer or it lies in the letter-box bars.
    pub fn hovered(&self, pointer: Option<egui::Pos2>) -> Option<Vector> {
        pointer
            .filter(|p| self.rect.contains(*p) && self.scale > 0.0)
            .map(|p| self.to_scene(p))
    }
}

/// [`DrawingSurface`] backed by an egui painter.
struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    view: SceneView,
    stroke: egui::Stroke,
}

impl DrawingSurface for PainterSurface<'_> {
    fn clear(&mut self) {
        self.painter
            .rect_filled(self.view.rect, 0.0, egui::Color32::WHITE);
    }

    fn draw_line(&mut self, from: Vector, to: Vector) {
        self.painter.line_segment(
            [self.view.to_screen(from), self.view.to_screen(to)],
            self.stroke,
        );
    }
}

/// Frame requests map onto egui repaints.
struct RepaintScheduler<'a>(&'a egui::Context);

impl FrameScheduler for RepaintScheduler<'_> {
    fn request_next_frame(&mut self) {
        self.0.request_repaint();
    }
}

/// Main application state for the viewer.
///
/// Per frame:
/// 1. Advance the growth animation from the egui clock.
/// 2. Build the control panel and apply slider edits.
/// 3. Let the render loop clear and redraw the tree.
///
/// ### Fields
/// - `params` - Parameters shared with the render loop and the animator.
/// - `scene` - Fixed scene size and growth tick interval.
/// - `render_loop` - Clears and redraws the tree once per frame.
/// - `render_handle` - Stop/resume switch of `render_loop`.
/// - `animator` - Ramps the shared depth for the growing-tree effect.
///
/// - `rng` - Random number generator used by the "Random" button.
///
/// - `goal_depth` - Depth the user asked for. Growth runs always aim here,
///   never at the shared depth, which ends one level past the goal.
/// - `started` - Whether the start-up growth animation has been launched.
/// - `animated_depth` - Last depth reported by the animator.
/// - `last_drawn` - Segments drawn in the last frame (for display only).
/// - `hover_scene` - Scene position under the pointer, if any.
pub struct Viewer {
    params: ParameterSource,
    scene: SceneConfig,
    render_loop: RenderLoop,
    render_handle: RenderHandle,
    animator: ParameterAnimator,

    rng: rand::rngs::ThreadRng,

    goal_depth: Depth,
    started: bool,
    animated_depth: Rc<Cell<Depth>>,
    last_drawn: usize,
    hover_scene: Option<Vector>,
}

impl Viewer {
    /// Creates a viewer that will grow the tree up to `initial.depth` on its
    /// first frame.
    ///
    /// ### Parameters
    /// - `initial` - Starting parameters; `initial.depth` becomes the goal depth.
    /// - `scene` - Scene size and tick interval.
    ///
    /// ### Returns
    /// A [`Viewer`] ready to be passed to `eframe::run_native`.
    pub fn new(initial: FractalParameters, scene: SceneConfig) -> Self {
        let params = ParameterSource::new(initial);
        let render_loop = RenderLoop::new(params.clone(), scene.root_segment());
        let render_handle = render_loop.handle();

        let animated_depth = Rc::new(Cell::new(initial.depth));
        let notified = animated_depth.clone();
        let animator = ParameterAnimator::new(params.clone())
            .with_tick_interval(scene.tick_interval)
            .with_notifier(move |depth| notified.set(depth));

        Self {
            params,
            scene,
            render_loop,
            render_handle,
            animator,
            rng: rand::rng(),
            goal_depth: initial.depth,
            started: false,
            animated_depth,
            last_drawn: 0,
            hover_scene: None,
        }
    }

    /// Launches the start-up animation once, then fires due animation ticks.
    ///
    /// ### Parameters
    /// - `now` - Time since the window opened.
    fn advance(&mut self, now: Duration) {
        if !self.started {
            self.started = true;
            self.grow(now);
        }
        self.animator.update(now);
    }

    /// Regrows the tree from depth 0 up to the goal depth.
    fn grow(&mut self, now: Duration) {
        self.animator.smooth_increase_depth(self.goal_depth, now);
    }

    /// Picks random parameters and grows a fresh tree with them.
    ///
    /// The new depth becomes the goal depth. If the source refuses the
    /// record, nothing changes.
    fn randomize(&mut self, now: Duration) {
        let mut next = self.params.get();
        next.randomize(&mut self.rng);
        if let Err(e) = self.params.set(next) {
            warn!(error = %e, "random parameters rejected");
            return;
        }
        debug!(?next, "randomized parameters");
        self.goal_depth = next.depth;
        self.grow(now);
    }

    /// Applies slider edits to the shared parameters.
    ///
    /// A changed depth becomes the new goal depth and stops any growth run,
    /// so the user's choice is not overwritten by the next tick.
    ///
    /// ### Returns
    /// `true` if the edit was accepted.
    fn apply_edit(&mut self, edited: FractalParameters) -> bool {
        let before = self.params.get();
        if edited == before {
            return true;
        }
        if let Err(e) = self.params.set(edited) {
            debug!(error = %e, "slider edit ignored");
            return false;
        }
        if edited.depth != before.depth {
            self.animator.cancel();
            self.goal_depth = edited.depth;
        }
        true
    }

    /// Flips the render loop between running and stopped.
    fn toggle_rendering(&mut self) {
        if self.render_handle.is_running() {
            self.render_handle.stop();
        } else {
            self.render_handle.resume();
        }
    }

    fn now(ctx: &egui::Context) -> Duration {
        Duration::from_secs_f64(ctx.input(|i| i.time).max(0.0))
    }

    /// Helper to draw a slider whose value label uses the shared formatting.
    fn labeled_slider(
        ui: &mut egui::Ui,
        label: &str,
        text: &str,
        slider: egui::Slider<'_>,
    ) -> egui::Response {
        ui.label(label);
        ui.horizontal(|ui| {
            let response = ui.add(slider.show_value(false));
            ui.label(text);
            response
        })
        .inner
    }

    /// Builds the right-hand panel with parameter sliders and actions.
    fn ui_control_panel(&mut self, ctx: &egui::Context) {
        let now = Self::now(ctx);
        let mut edited = self.params.get();
        let labels = edited.display_values();

        egui::SidePanel::right("control_panel")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Fractal");
                ui.separator();

                Self::labeled_slider(
                    ui,
                    "Angle",
                    &labels[0].1,
                    egui::Slider::new(&mut edited.angle, 0.0..=90.0),
                );

                Self::labeled_slider(
                    ui,
                    "Depth",
                    &labels[1].1,
                    egui::Slider::new(&mut edited.depth, 0..=20),
                );

                Self::labeled_slider(
                    ui,
                    "Length decay",
                    &labels[2].1,
                    egui::Slider::new(&mut edited.length_decay, 0.0..=1.5),
                );
                Self::labeled_slider(
                    ui,
                    "Left decay",
                    &labels[3].1,
                    egui::Slider::new(&mut edited.left_decay_multiplier, 0.0..=1.5),
                );
                Self::labeled_slider(
                    ui,
                    "Right decay",
                    &labels[4].1,
                    egui::Slider::new(&mut edited.right_decay_multiplier, 0.0..=1.5),
                );

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("🎲 Random").clicked() {
                        self.randomize(now);
                        edited = self.params.get();
                    }
                    if ui.button("🌱 Grow").clicked() {
                        self.grow(now);
                        edited = self.params.get();
                    }
                    let label = if self.render_handle.is_running() {
                        "⏸ Stop"
                    } else {
                        "▶ Resume"
                    };
                    if ui.button(label).clicked() {
                        self.toggle_rendering();
                    }
                });
            });

        self.apply_edit(edited);
    }

    /// Builds the bottom status bar.
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("frames = {}", self.render_loop.frames()));
                ui.label(format!("segments = {}", self.last_drawn));
                if let Some(p) = self.hover_scene {
                    ui.label(format!("x = {:.0}, y = {:.0}", p.x, p.y));
                }
                ui.separator();
                if let Some(target) = self.animator.target() {
                    ui.label(format!(
                        "growing: depth {} → {}",
                        self.animated_depth.get(),
                        target + 1
                    ));
                }
                if !self.render_handle.is_running() {
                    ui.label("rendering stopped");
                }
            });
        });
    }

    /// Builds the central panel and runs one render-loop frame into it.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
            let view = SceneView::fit(self.scene.size, response.rect);
            let painter = ui.painter_at(response.rect);
            self.hover_scene = view.hovered(response.hover_pos());

            let mut surface = PainterSurface {
                painter: &painter,
                view,
                stroke: egui::Stroke::new(1.0, egui::Color32::BLACK),
            };
            let mut scheduler = RepaintScheduler(ctx);
            self.last_drawn = self.render_loop.render_frame(&mut surface, &mut scheduler);
        });

        // Keep ticking the animation even when nothing else asks for frames.
        if self.animator.is_animating() {
            ctx.request_repaint_after(self.animator.tick_interval());
        }
    }
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.advance(Self::now(ctx));
        self.ui_control_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}

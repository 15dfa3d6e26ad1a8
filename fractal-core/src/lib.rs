//! Core of the animated 2-D fractal tree.
//!
//! Main components:
//! - [`vector`] — 2-D vector math on top of `glam::Vec2`.
//! - [`types`] — shared value types such as [`types::Segment`].
//! - [`config`] — fractal parameters and scene configuration.
//! - [`shared`] — the single-threaded parameter handle shared by the loops.
//! - [`generator`] — the recursive branching algorithm.
//! - [`surface`] — the drawing capability the core renders into.
//! - [`render_loop`] — per-frame clear and redraw.
//! - [`animator`] — the "growing tree" depth ramp.
//! - [`display`] — value formatting for on-screen labels.
//! - [`error`] — parameter validation errors.

pub mod animator;
pub mod config;
pub mod display;
pub mod error;
pub mod generator;
pub mod render_loop;
pub mod shared;
pub mod surface;
pub mod types;
pub mod vector;

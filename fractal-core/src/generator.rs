//! Recursive generation of the fractal tree.
//!
//! Starting from a root segment, every generated segment grows out of the
//! end of its parent:
//!
//! 1. Take the parent direction `end - start` scaled by the current length
//!    decay.
//! 2. Rotate it by the shift angle and attach it at the parent's end.
//! 3. Recurse twice from the new segment with one level less: first the
//!    "left" branch with the angle negated and the decay multiplied by the
//!    left multiplier, then the "right" branch with the angle unchanged and
//!    the decay multiplied by the right multiplier.
//!
//! A depth of `n >= 1` yields exactly `2^n - 1` segments in depth-first,
//! left-before-right order. Any depth `<= 0` yields nothing.

use crate::{
    config::FractalParameters,
    types::{Depth, Segment},
    vector::{VectorExt, to_radians},
};

/// Generates the tree and hands each segment to `emit` as soon as it is
/// computed, so the caller never has to buffer the whole tree.
///
/// ### Parameters
/// - `root` - The trunk; it is not emitted itself, the tree grows from
///   `root.end`.
/// - `params` - Shift angle, depth and decay factors.
/// - `emit` - Sink called once per segment in generation order.
pub fn generate<F>(root: Segment, params: &FractalParameters, mut emit: F)
where
    F: FnMut(Segment),
{
    grow(
        root,
        params.angle,
        params.depth,
        params.length_decay,
        params,
        &mut emit,
    );
}

/// Generates the tree into a vector.
pub fn collect(root: Segment, params: &FractalParameters) -> Vec<Segment> {
    let mut out = Vec::with_capacity(segment_count(params.depth).min(1 << 16) as usize);
    generate(root, params, |s| out.push(s));
    out
}

/// Number of segments [`generate`] emits for `depth`.
///
/// ### Returns
/// `2^depth - 1` for positive depths, `0` otherwise. Saturates at
/// `u64::MAX` for depths of 64 and above.
pub fn segment_count(depth: Depth) -> u64 {
    match depth {
        d if d <= 0 => 0,
        d if d >= 64 => u64::MAX,
        d => (1u64 << d) - 1,
    }
}

fn grow<F>(
    line: Segment,
    angle: f32,
    depth: Depth,
    decay: f32,
    params: &FractalParameters,
    emit: &mut F,
) where
    F: FnMut(Segment),
{
    // `<=` rather than `==`: a negative depth must terminate too.
    if depth <= 0 {
        return;
    }

    let v = line.direction().scale_by(decay);
    let next = Segment::new(line.end, line.end + v.rotated_by(to_radians(angle)));
    emit(next);

    let depth = depth - 1;
    grow(
        next,
        -angle,
        depth,
        decay * params.left_decay_multiplier,
        params,
        emit,
    );
    grow(
        next,
        angle,
        depth,
        decay * params.right_decay_multiplier,
        params,
        emit,
    );
}

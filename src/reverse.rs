//! Reverse-path transform for hover outlines.
//!
//! A stroke drawn along `forward ++ reverse(forward)` covers the same curve
//! twice and closes on itself, so a wide transparent stroke on it gives a
//! generous hover/click target without widening the visible line.

use crate::path::{PathCommand, PathSegment};

/// Trace a path backwards.
///
/// Commands are re-emitted in their original order, while the points they
/// consume are taken from the end of the original point list. A `MoveTo`
/// therefore lands on the old end point and every curve keeps its arity.
///
/// Malformed input never panics: a dangling coordinate is dropped and a
/// command that runs out of points is emitted with the points left.
pub fn reverse_path(segments: &[PathSegment]) -> Vec<PathSegment> {
    let mut commands: Vec<PathCommand> = Vec::new();
    let mut coords: Vec<f32> = Vec::new();

    for segment in segments {
        match *segment {
            PathSegment::Command(cmd) => commands.push(cmd),
            PathSegment::Coord(v) => coords.push(v),
        }
    }

    if coords.len() % 2 != 0 {
        log::warn!("reverse_path: dropping dangling coordinate in {} values", coords.len());
        coords.pop();
    }

    let mut points: Vec<(f32, f32)> = coords.chunks_exact(2).map(|c| (c[0], c[1])).collect();
    let expected: usize = commands.iter().map(|c| c.point_count()).sum();
    if expected != points.len() {
        log::warn!(
            "reverse_path: commands expect {} points, path has {}",
            expected,
            points.len()
        );
    }

    let mut out = Vec::with_capacity(segments.len());
    for cmd in commands {
        out.push(PathSegment::Command(cmd));
        for _ in 0..cmd.point_count() {
            let Some((x, y)) = points.pop() else {
                break;
            };
            out.push(PathSegment::Coord(x));
            out.push(PathSegment::Coord(y));
        }
    }

    out
}

/// Forward path followed by its reverse.
pub fn hover_outline(segments: &[PathSegment]) -> Vec<PathSegment> {
    let mut outline = segments.to_vec();
    outline.extend(reverse_path(segments));
    outline
}

//! Boundary path construction
//!
//! Walks a shape's vertices and edges once, combining the corner and
//! bulge solvers into an ordered command sequence for the closed
//! boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::bulge::solve_bulge;
use crate::corner::{CornerArc, solve_corner};
use crate::shape::Shape;
use crate::vector;

/// A drawing command in a boundary path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathCommand {
    /// Begin the path at a point
    MoveTo(Vec2),
    /// Straight segment to a point
    LineTo(Vec2),
    /// Circular arc to a point
    ArcTo {
        /// Arc endpoint
        end: Vec2,
        /// Arc radius
        radius: f32,
        /// Sweep direction
        sweep_clockwise: bool,
    },
}

/// Build the closed boundary path for a shape.
///
/// Pure and deterministic: identical shape state yields an identical
/// command sequence. Shapes with fewer than 2 vertices produce an empty
/// path. The path starts mid-edge, at the last corner's outgoing tangent
/// point, so it never opens on a rounded corner; the renderer closes it
/// back to the start point.
pub fn build_boundary_path(shape: &Shape) -> Vec<PathCommand> {
    let verts = shape.vertices();
    let n = verts.len();
    if n < 2 {
        return Vec::new();
    }

    let radii = shape.corner_radii();
    let depths = shape.segment_depths();

    let corners: Vec<CornerArc> = (0..n)
        .map(|i| {
            let prev = verts[(i + n - 1) % n];
            let next = verts[(i + 1) % n];
            solve_corner(verts[i], prev, next, radii[i])
        })
        .collect();

    let mut path = Vec::with_capacity(2 * n + 1);
    path.push(PathCommand::MoveTo(corners[n - 1].arc_end));

    for i in 0..n {
        let prev = (i + n - 1) % n;

        // The edge arriving at vertex i starts at vertex i - 1 and
        // carries that vertex's depth.
        match solve_bulge(corners[prev].arc_end, corners[i].arc_start, depths[prev]) {
            Some(arc) => path.push(PathCommand::ArcTo {
                end: corners[i].arc_start,
                radius: arc.radius,
                sweep_clockwise: arc.sweep_clockwise,
            }),
            None => path.push(PathCommand::LineTo(corners[i].arc_start)),
        }

        if corners[i].is_rounded() {
            // Sweep follows the polygon winding at this vertex
            let incoming = verts[i] - verts[prev];
            let outgoing = verts[(i + 1) % n] - verts[i];
            path.push(PathCommand::ArcTo {
                end: corners[i].arc_end,
                radius: corners[i].radius,
                sweep_clockwise: vector::cross(incoming, outgoing) < 0.0,
            });
        }
    }

    path
}

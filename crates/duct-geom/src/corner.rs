//! Rounded-corner solving
//!
//! For one vertex with a requested radius, finds the tangent points on
//! the adjacent edges and the radius actually usable there.

use glam::Vec2;

use crate::vector;

/// Effective radii below this are treated as no rounding (sub-pixel).
pub const MIN_CORNER_RADIUS: f32 = 0.1;

/// Solved rounding for one vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerArc {
    /// Tangent point on the edge toward the previous vertex
    pub arc_start: Vec2,
    /// Tangent point on the edge toward the next vertex
    pub arc_end: Vec2,
    /// Radius actually usable at this corner (0 = no rounding)
    pub radius: f32,
}

impl CornerArc {
    /// A corner with no rounding; both tangent points sit on the vertex.
    pub fn degenerate(p: Vec2) -> Self {
        Self {
            arc_start: p,
            arc_end: p,
            radius: 0.0,
        }
    }

    /// Whether this corner emits an arc
    pub fn is_rounded(&self) -> bool {
        self.radius > 0.0
    }
}

/// Solve the rounding at vertex `p` between neighbors `prev` and `next`.
///
/// The tangent distance `t = radius / tan(theta / 2)` is clamped to half
/// of each adjacent edge, so roundings on short edges never overlap.
/// Zero-length adjacent edges, spike vertices and sub-pixel effective
/// radii all yield a degenerate (unrounded) corner rather than an error.
pub fn solve_corner(p: Vec2, prev: Vec2, next: Vec2, radius: f32) -> CornerArc {
    if radius <= 0.0 {
        return CornerArc::degenerate(p);
    }

    let (Some(u), Some(v)) = (vector::unit_toward(p, prev), vector::unit_toward(p, next)) else {
        return CornerArc::degenerate(p);
    };
    let len_prev = vector::chord_length(p, prev);
    let len_next = vector::chord_length(p, next);

    let theta = vector::angle_between(u, v);
    let half_tan = (theta / 2.0).tan();
    if half_tan < vector::EPS {
        // Spike vertex: the edges fold back on each other
        return CornerArc::degenerate(p);
    }

    let t = (radius / half_tan).min(len_prev / 2.0).min(len_next / 2.0);
    let effective = t * half_tan;
    if effective < MIN_CORNER_RADIUS {
        return CornerArc::degenerate(p);
    }

    CornerArc {
        arc_start: p + u * t,
        arc_end: p + v * t,
        radius: effective,
    }
}

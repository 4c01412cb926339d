//! Bulged-edge solving
//!
//! Converts a signed sagitta depth on a chord into the circular arc
//! that passes through the chord endpoints with that sag.

use glam::Vec2;

use crate::vector;

/// Depths below this magnitude render as straight lines.
pub const MIN_BULGE_DEPTH: f32 = 0.1;

/// Solved arc for one bulged edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulgeArc {
    /// Arc radius (always positive)
    pub radius: f32,
    /// Sweep direction; positive depths sweep counter-clockwise
    pub sweep_clockwise: bool,
}

/// Solve the arc through chord `a`..`b` with signed sagitta `depth`.
///
/// Returns `None` for near-zero depths and degenerate chords; the edge
/// renders as a straight line in both cases. The cutoff also keeps the
/// sagitta-to-radius relation away from its singularity at zero depth.
pub fn solve_bulge(a: Vec2, b: Vec2, depth: f32) -> Option<BulgeArc> {
    if depth.abs() < MIN_BULGE_DEPTH {
        return None;
    }
    let chord = vector::chord_length(a, b);
    if chord < vector::EPS {
        return None;
    }

    let half = chord / 2.0;
    let radius = (depth * depth + half * half) / (2.0 * depth.abs());
    Some(BulgeArc {
        radius,
        sweep_clockwise: depth < 0.0,
    })
}

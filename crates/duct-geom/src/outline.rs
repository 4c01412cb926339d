//! Orthogonal centerline thickening
//!
//! Expands a centerline polyline into a closed outline polygon: two
//! offset rails at half thickness, joined by un-normalized miters at
//! every turn.

use glam::Vec2;

use crate::vector::{self, left_normal};

/// Cross-product magnitude below which a join is treated as collinear.
///
/// The miter vector degenerates toward zero length as a join approaches
/// a full reversal, so straight runs must be caught before the miter
/// branch.
const COLLINEAR_TOLERANCE: f32 = 0.1;

/// Thicken `centerline` into a closed outline polygon.
///
/// The result lists the right rail in order followed by the left rail
/// reversed, forming a simple closed polygon of
/// `2 * centerline.len()` points. Centerlines shorter than 2 points and
/// non-positive thicknesses produce an empty polygon.
pub fn build_outline(centerline: &[Vec2], thickness: f32) -> Vec<Vec2> {
    let n = centerline.len();
    if n < 2 || thickness <= 0.0 {
        return Vec::new();
    }
    let h = thickness / 2.0;

    let mut right = Vec::with_capacity(2 * n);
    let mut left = Vec::with_capacity(n);

    for i in 0..n {
        let p = centerline[i];
        let incoming = if i > 0 {
            vector::unit_toward(centerline[i - 1], p)
        } else {
            None
        };
        let outgoing = if i + 1 < n {
            vector::unit_toward(p, centerline[i + 1])
        } else {
            None
        };
        // Caps reuse the single adjacent direction; a repeated point
        // borrows its neighbor's.
        let in_dir = incoming.or(outgoing).unwrap_or(Vec2::X);
        let out_dir = outgoing.or(incoming).unwrap_or(Vec2::X);

        let offset = if i == 0 {
            left_normal(out_dir)
        } else if i == n - 1 {
            left_normal(in_dir)
        } else if vector::cross(in_dir, out_dir).abs() < COLLINEAR_TOLERANCE {
            left_normal(in_dir)
        } else {
            // Miter join: the normal sum is sized by the turn angle
            left_normal(in_dir) + left_normal(out_dir)
        };

        right.push(p - offset * h);
        left.push(p + offset * h);
    }

    right.extend(left.into_iter().rev());
    right
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_straight_run_width() {
        let centerline = [Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)];
        let outline = build_outline(&centerline, 150.0);
        assert_eq!(outline.len(), 4);
        assert_eq!(outline[0], Vec2::new(0.0, -75.0));
        assert_eq!(outline[1], Vec2::new(100.0, -75.0));
        assert_eq!(outline[2], Vec2::new(100.0, 75.0));
        assert_eq!(outline[3], Vec2::new(0.0, 75.0));
    }

    #[test]
    fn test_point_count_matches_centerline() {
        let centerline = [
            Vec2::new(0.0, 0.0),
            Vec2::new(200.0, 0.0),
            Vec2::new(200.0, 200.0),
            Vec2::new(400.0, 200.0),
        ];
        let outline = build_outline(&centerline, 150.0);
        assert_eq!(outline.len(), 2 * centerline.len());
    }

    #[test]
    fn test_left_turn_miter() {
        let centerline = [
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
        ];
        let outline = build_outline(&centerline, 20.0);
        assert_eq!(outline.len(), 6);
        // Outer corner sits past both rails, inner corner inside both
        let outer = outline[1];
        let inner = outline[4];
        assert_relative_eq!(outer.x, 110.0, epsilon = 1e-4);
        assert_relative_eq!(outer.y, -10.0, epsilon = 1e-4);
        assert_relative_eq!(inner.x, 90.0, epsilon = 1e-4);
        assert_relative_eq!(inner.y, 10.0, epsilon = 1e-4);
    }

    #[test]
    fn test_right_turn_mirrors_left() {
        let up = [
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 100.0),
        ];
        let down = [
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, -100.0),
        ];
        let up_outline = build_outline(&up, 20.0);
        let down_outline = build_outline(&down, 20.0);
        assert_eq!(up_outline.len(), down_outline.len());
        // Mirrored centerlines give y-mirrored corner sets
        let mut mirrored: Vec<Vec2> = down_outline
            .iter()
            .map(|p| Vec2::new(p.x, -p.y))
            .collect();
        mirrored.reverse();
        for p in &up_outline {
            assert!(
                mirrored.iter().any(|m| (*m - *p).length() < 1e-3),
                "missing mirrored point {p:?}"
            );
        }
    }

    #[test]
    fn test_collinear_interior_vertex() {
        let centerline = [
            Vec2::new(0.0, 0.0),
            Vec2::new(50.0, 0.0),
            Vec2::new(100.0, 0.0),
        ];
        let outline = build_outline(&centerline, 150.0);
        assert_eq!(outline.len(), 6);
        // Midpoint offsets stay at plain half-thickness, not a doubled miter
        assert_relative_eq!(outline[1].y, -75.0, epsilon = 1e-4);
        assert_relative_eq!(outline[4].y, 75.0, epsilon = 1e-4);
    }

    #[test]
    fn test_rails_stay_simple_on_staircase() {
        let centerline = [
            Vec2::new(0.0, 0.0),
            Vec2::new(300.0, 0.0),
            Vec2::new(300.0, 300.0),
            Vec2::new(600.0, 300.0),
            Vec2::new(600.0, 600.0),
        ];
        let outline = build_outline(&centerline, 150.0);
        assert_eq!(outline.len(), 10);
        // Each rail advances monotonically along the path direction,
        // so consecutive rail points never coincide.
        for w in outline.windows(2) {
            assert!((w[1] - w[0]).length() > 1.0);
        }
    }

    #[test]
    fn test_degenerate_inputs_are_empty() {
        assert!(build_outline(&[], 150.0).is_empty());
        assert!(build_outline(&[Vec2::ZERO], 150.0).is_empty());
        assert!(build_outline(&[Vec2::ZERO, Vec2::X], 0.0).is_empty());
    }

    #[test]
    fn test_repeated_point_does_not_panic() {
        let centerline = [
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::new(200.0, 0.0),
        ];
        let outline = build_outline(&centerline, 50.0);
        assert_eq!(outline.len(), 8);
    }
}

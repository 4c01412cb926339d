//! 2D vector primitives shared by the solvers

use glam::Vec2;

/// Length tolerance below which a vector is treated as zero.
pub const EPS: f32 = 1e-6;

/// Scalar 2D cross product.
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

/// Left-hand normal of a direction (90 degrees counter-clockwise).
pub fn left_normal(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}

/// Unit vector from `from` toward `to`, or `None` for coincident points.
pub fn unit_toward(from: Vec2, to: Vec2) -> Option<Vec2> {
    let d = to - from;
    let len = d.length();
    if len < EPS { None } else { Some(d / len) }
}

/// Distance between two points.
pub fn chord_length(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Interior angle between two vectors, in radians (0..=PI).
///
/// Zero-length inputs yield 0.
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    let la = a.length();
    let lb = b.length();
    if la < EPS || lb < EPS {
        return 0.0;
    }
    (a.dot(b) / (la * lb)).clamp(-1.0, 1.0).acos()
}

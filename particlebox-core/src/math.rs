//! Small vector helpers shared by forces, colliders and scene setup

use glam::Vec3;

/// Euclidean distance between two points
pub fn magnitude(a: Vec3, b: Vec3) -> f32 {
    (b - a).length()
}

/// Linearly remap `value` from `[in_min, in_max]` to `[out_min, out_max]`
///
/// A degenerate input range maps everything to `out_min`.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    out_min + (value - in_min) / span * (out_max - out_min)
}

/// Normalize `v`, or return `fallback` when `v` has no usable direction
pub fn normalize_or(v: Vec3, fallback: Vec3) -> Vec3 {
    v.try_normalize().unwrap_or(fallback)
}

/// Closest point to `p` on segment `a`-`b`, with its parameter `t` in `[0, 1]`
/// measured from `b` towards `a`
pub fn closest_point_on_segment(p: Vec3, a: Vec3, b: Vec3) -> (Vec3, f32) {
    let ab = a - b;
    let len_sq = ab.length_squared();
    let t = if len_sq > 0.0 {
        ((p - b).dot(ab) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (b + ab * t, t)
}

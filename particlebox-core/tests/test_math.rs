//! Tests for the vector helpers

use glam::Vec3;
use particlebox_core::math::{closest_point_on_segment, magnitude, map_range, normalize_or};
use particlebox_core::tests::test_helpers::{approx_eq_f32, approx_eq_vec3};

#[test]
fn test_magnitude_is_distance() {
    assert!(approx_eq_f32(
        magnitude(Vec3::new(1.0, 1.0, 1.0), Vec3::new(4.0, 5.0, 1.0)),
        5.0,
        1e-6
    ));
    assert_eq!(magnitude(Vec3::ONE, Vec3::ONE), 0.0);
}

#[test]
fn test_map_range() {
    assert!(approx_eq_f32(map_range(0.5, 0.0, 1.0, -5.0, 5.0), 0.0, 1e-6));
    assert!(approx_eq_f32(map_range(0.0, 0.0, 1.0, 5.0, 10.0), 5.0, 1e-6));
    assert!(approx_eq_f32(map_range(1.0, 0.0, 1.0, 5.0, 10.0), 10.0, 1e-6));
    // degenerate input range
    assert_eq!(map_range(3.0, 2.0, 2.0, 7.0, 9.0), 7.0);
}

#[test]
fn test_normalize_or_fallback() {
    assert!(approx_eq_vec3(
        normalize_or(Vec3::new(0.0, 3.0, 4.0), Vec3::X),
        Vec3::new(0.0, 0.6, 0.8),
        1e-6
    ));
    assert_eq!(normalize_or(Vec3::ZERO, Vec3::X), Vec3::X);
}

#[test]
fn test_closest_point_clamps_to_endpoints() {
    let a = Vec3::new(-2.0, 0.0, 0.0);
    let b = Vec3::new(2.0, 0.0, 0.0);

    let (point, t) = closest_point_on_segment(Vec3::new(10.0, 1.0, 0.0), a, b);
    assert_eq!(point, b);
    assert_eq!(t, 0.0);

    let (point, t) = closest_point_on_segment(Vec3::new(-10.0, 1.0, 0.0), a, b);
    assert_eq!(point, a);
    assert_eq!(t, 1.0);

    let (point, t) = closest_point_on_segment(Vec3::new(1.0, 3.0, 0.0), a, b);
    assert!(approx_eq_vec3(point, Vec3::new(1.0, 0.0, 0.0), 1e-6));
    assert!(approx_eq_f32(t, 0.25, 1e-6));
}

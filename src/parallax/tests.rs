//! Parallax domain: unit tests for offset math.

use bevy::prelude::Vec2;

use super::{pointer_offset, tilt_offset};

#[test]
fn test_pointer_offset_centered_cursor_is_zero() {
    let offset = pointer_offset(Vec2::new(640.0, 360.0), Vec2::new(1280.0, 720.0));
    assert_eq!(offset, Vec2::ZERO);
}

#[test]
fn test_pointer_offset_is_damped() {
    let offset = pointer_offset(Vec2::new(1280.0, 720.0), Vec2::new(1280.0, 720.0));
    assert!((offset.x - 640.0 / 15.0).abs() < 1e-5);
    assert!((offset.y - 360.0 / 15.0).abs() < 1e-5);
}

#[test]
fn test_pointer_offset_sign_follows_cursor() {
    let offset = pointer_offset(Vec2::new(0.0, 0.0), Vec2::new(1280.0, 720.0));
    assert!(offset.x < 0.0);
    assert!(offset.y < 0.0);
}

#[test]
fn test_tilt_offset_applies_axis_factors() {
    let offset = tilt_offset(Some(10.0), Some(10.0));
    assert!((offset.x - 12.0).abs() < 1e-5);
    assert!((offset.y - 8.0).abs() < 1e-5);
}

#[test]
fn test_tilt_offset_missing_axes_read_zero() {
    assert_eq!(tilt_offset(None, None), Vec2::ZERO);
    assert_eq!(tilt_offset(Some(5.0), None), Vec2::new(6.0, 0.0));
    assert_eq!(tilt_offset(None, Some(5.0)), Vec2::new(0.0, 4.0));
}

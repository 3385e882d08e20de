#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use super::*;

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- Viewport defaults ---

#[test]
fn viewport_default_is_empty_at_unit_density() {
    let vp = Viewport::default();
    assert_eq!(vp.width, 0.0);
    assert_eq!(vp.height, 0.0);
    assert_eq!(vp.dpr, 1.0);
    assert!(vp.is_empty());
}

// --- Viewport::new ---

#[test]
fn viewport_new_keeps_valid_values() {
    let vp = Viewport::new(800.0, 600.0, 2.0);
    assert_eq!(vp.width, 800.0);
    assert_eq!(vp.height, 600.0);
    assert_eq!(vp.dpr, 2.0);
    assert!(!vp.is_empty());
}

#[test]
fn viewport_new_rejects_zero_dpr() {
    assert_eq!(Viewport::new(10.0, 10.0, 0.0).dpr, 1.0);
}

#[test]
fn viewport_new_rejects_nan_dpr() {
    assert_eq!(Viewport::new(10.0, 10.0, f64::NAN).dpr, 1.0);
}

#[test]
fn viewport_new_clamps_negative_size() {
    let vp = Viewport::new(-5.0, 20.0, 1.0);
    assert_eq!(vp.width, 0.0);
    assert!(vp.is_empty());
}

// --- Backing store ---

#[test]
fn backing_size_scales_by_dpr() {
    let vp = Viewport::new(800.0, 600.0, 2.0);
    assert_eq!(vp.backing_size(), (1600, 1200));
}

#[test]
fn backing_size_rounds_fractional_density() {
    let vp = Viewport::new(101.0, 51.0, 1.5);
    assert_eq!(vp.backing_size(), (152, 77));
}

#[test]
fn transform_is_uniform_scale() {
    let vp = Viewport::new(100.0, 100.0, 3.0);
    assert_eq!(vp.transform(), [3.0, 0.0, 0.0, 3.0, 0.0, 0.0]);
}

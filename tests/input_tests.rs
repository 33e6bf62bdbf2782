// Host-side tests for pure input helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn drag_before_begin_is_zero() {
    let mut t = TouchTracker::default();
    assert!(!t.is_active());
    assert_eq!(t.drag(120.0), 0.0);
}

#[test]
fn finger_up_scrolls_down() {
    let mut t = TouchTracker::default();
    t.begin(500.0);
    assert_eq!(t.drag(470.0), 30.0);
    assert_eq!(t.drag(480.0), -10.0);
}

#[test]
fn end_resets_tracking() {
    let mut t = TouchTracker::default();
    t.begin(10.0);
    t.end();
    assert!(!t.is_active());
    t.begin(200.0);
    assert_eq!(t.drag(150.0), 50.0);
}

#[test]
fn transform_css_orders_translate_rotate_scale() {
    let css = glyph_transform_css(12.5, -3.0, 15.0, 0.75);
    assert_eq!(css, "translate(12.50px, -3.00px) rotate(15.00deg) scale(0.7500)");
}

// Host-side tests for the scatter -> centered title reveal.

use atelier_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

fn make_reveal(n: usize) -> TitleReveal {
    let mut rng = StdRng::seed_from_u64(42);
    TitleReveal::new(&scatter_all(&mut rng, n, &ScatterBounds::default()))
}

fn make_layout(n: usize, container: Vec2) -> Layout {
    let widths = vec![20.0; n];
    compute_centered_layout(
        &widths,
        Some(container),
        Some(Vec2::new(200.0, 48.0)),
        &Spacing::default(),
    )
}

fn run(reveal: &mut TitleReveal, seconds: f32) {
    for _ in 0..(seconds / DT).ceil() as usize {
        reveal.tick(DT);
    }
}

#[test]
fn stays_scattered_without_layout() {
    let mut r = make_reveal(4);
    let before = r.transforms();
    run(&mut r, 2.0);
    assert_eq!(r.phase(), RevealPhase::Scattered);
    assert_eq!(r.transforms(), before);
    for t in before {
        assert_eq!(t.opacity, SCATTER_OPACITY);
    }
}

#[test]
fn neutral_and_stale_layouts_are_rejected() {
    let mut r = make_reveal(4);
    assert_eq!(r.apply_layout(&Layout::neutral(4)), RevealUpdate::Rejected);
    assert_eq!(
        r.apply_layout(&make_layout(5, Vec2::new(800.0, 600.0))),
        RevealUpdate::Rejected
    );
    assert_eq!(r.phase(), RevealPhase::Scattered);
}

#[test]
fn first_valid_layout_starts_once() {
    let mut r = make_reveal(4);
    let l = make_layout(4, Vec2::new(800.0, 600.0));
    assert_eq!(r.apply_layout(&l), RevealUpdate::Started);
    assert_eq!(r.phase(), RevealPhase::Centered);
    assert_eq!(r.apply_layout(&l), RevealUpdate::Unchanged);
}

#[test]
fn glyphs_hold_during_settle_delay_then_stagger() {
    let mut r = make_reveal(3);
    let start = r.transforms();
    r.apply_layout(&make_layout(3, Vec2::new(800.0, 600.0)));

    r.tick(0.15);
    assert_eq!(r.transforms(), start);

    // 0.2s settle + 0.03s stagger: glyph 0 moves, glyph 2 (starts at 0.26s) does not.
    r.tick(0.1);
    let now = r.transforms();
    assert_ne!(now[0], start[0]);
    assert_eq!(now[2], start[2]);
}

#[test]
fn settles_at_layout_positions() {
    let mut r = make_reveal(6);
    let l = make_layout(6, Vec2::new(1024.0, 768.0));
    r.apply_layout(&l);
    run(&mut r, 12.0);
    assert!(r.is_settled());
    for (t, p) in r.transforms().iter().zip(&l.positions) {
        assert_eq!(t.offset, *p);
        assert_eq!(t.rotation_deg, 0.0);
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.opacity, 1.0);
    }
}

#[test]
fn resize_retargets_without_rescattering() {
    let mut r = make_reveal(5);
    r.apply_layout(&make_layout(5, Vec2::new(1024.0, 768.0)));
    run(&mut r, 12.0);
    assert!(r.is_settled());

    let wider = make_layout(5, Vec2::new(1440.0, 900.0));
    assert_eq!(r.apply_layout(&wider), RevealUpdate::Retargeted);
    assert_eq!(r.phase(), RevealPhase::Centered);
    // Still at the old centered spot, not thrown back to the scatter.
    for t in r.transforms() {
        assert_eq!(t.opacity, 1.0);
        assert_eq!(t.rotation_deg, 0.0);
    }
    run(&mut r, 12.0);
    for (t, p) in r.transforms().iter().zip(&wider.positions) {
        assert_eq!(t.offset, *p);
    }
}

#[test]
fn restart_returns_to_scatter() {
    let mut r = make_reveal(3);
    r.apply_layout(&make_layout(3, Vec2::new(800.0, 600.0)));
    run(&mut r, 1.0);
    let mut rng = StdRng::seed_from_u64(5);
    let fresh = scatter_all(&mut rng, 3, &ScatterBounds::default());
    r.restart(&fresh);
    assert_eq!(r.phase(), RevealPhase::Scattered);
    assert!(r.layout().is_none());
    assert_eq!(r.transforms()[0].offset, fresh[0].offset);
}

// Host-side tests for the smooth-scroll frame loop, driven frame by frame.

use atelier_core::*;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

#[derive(Default)]
struct CountingScheduler {
    next_id: i32,
    registrations: usize,
    active: HashSet<i32>,
    refuse: bool,
}

impl FrameScheduler for CountingScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        self.registrations += 1;
        self.active.insert(self.next_id);
        Some(FrameHandle(self.next_id))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.active.remove(&handle.0);
    }
}

struct FakeWindow {
    viewport: Option<f32>,
    limit: Option<f32>,
    writes: Vec<f32>,
}

impl FakeWindow {
    fn new(viewport: f32, limit: f32) -> Self {
        Self {
            viewport: Some(viewport),
            limit: Some(limit),
            writes: Vec::new(),
        }
    }
}

impl ScrollSurface for FakeWindow {
    fn viewport_height(&self) -> Option<f32> {
        self.viewport
    }

    fn scroll_limit(&self) -> Option<f32> {
        self.limit
    }

    fn set_offset(&mut self, offset: f32) {
        self.writes.push(offset);
    }
}

type Controller = ScrollMotionController<CountingScheduler, FakeWindow>;

fn make_controller() -> Controller {
    ScrollMotionController::new(CountingScheduler::default(), FakeWindow::new(800.0, 5000.0))
}

/// Simulates the display: fires the pending callback, as the browser would.
fn fire(c: &mut Controller, t: f64) {
    let h = c.pending_frame().expect("no pending frame");
    assert!(c.scheduler_mut().active.remove(&h.0), "fired a cancelled frame");
    c.on_frame(t);
}

#[test]
fn double_start_registers_one_frame() {
    let mut c = make_controller();
    c.start(ScrollConfig::default());
    c.start(ScrollConfig::default());
    assert_eq!(c.scheduler().registrations, 1);
    assert_eq!(c.scheduler().active.len(), 1);
}

#[test]
fn each_frame_schedules_exactly_one_successor() {
    let mut c = make_controller();
    c.start(ScrollConfig::default());
    for i in 0..10 {
        fire(&mut c, i as f64 * 16.0);
        assert_eq!(c.scheduler().active.len(), 1);
    }
    assert_eq!(c.scheduler().registrations, 11);
}

#[test]
fn stop_before_start_and_twice_is_harmless() {
    let mut c = make_controller();
    c.stop();
    c.stop();
    assert!(!c.is_running());
    assert!(c.scheduler().active.is_empty());

    c.start(ScrollConfig::default());
    c.stop();
    c.stop();
    assert!(c.pending_frame().is_none());
    assert!(c.scheduler().active.is_empty());
}

#[test]
fn late_frame_after_stop_is_ignored() {
    let mut c = make_controller();
    c.start(ScrollConfig::default());
    c.stop();
    let regs = c.scheduler().registrations;
    c.on_frame(100.0);
    assert_eq!(c.scheduler().registrations, regs);
    assert!(c.surface().writes.is_empty());
}

#[test]
fn restart_after_stop_works() {
    let mut c = make_controller();
    c.start(ScrollConfig::default());
    c.stop();
    c.start(ScrollConfig::default());
    assert!(c.is_running());
    assert_eq!(c.scheduler().active.len(), 1);
}

#[test]
fn refused_frame_request_halts_loop() {
    let mut c = ScrollMotionController::new(
        CountingScheduler {
            refuse: true,
            ..CountingScheduler::default()
        },
        FakeWindow::new(800.0, 1000.0),
    );
    c.start(ScrollConfig::default());
    assert!(!c.is_running());
    assert!(c.pending_frame().is_none());
}

/// Scheduler whose bookkeeping outlives the controller that owns it.
#[derive(Clone, Default)]
struct SharedScheduler(Rc<RefCell<HashSet<i32>>>);

impl FrameScheduler for SharedScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let mut active = self.0.borrow_mut();
        let id = active.len() as i32 + 1;
        active.insert(id);
        Some(FrameHandle(id))
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.0.borrow_mut().remove(&handle.0);
    }
}

#[test]
fn drop_cancels_pending_frame() {
    let sched = SharedScheduler::default();
    let active = sched.0.clone();
    {
        let mut c = ScrollMotionController::new(sched, FakeWindow::new(800.0, 1000.0));
        c.start(ScrollConfig::default());
        assert_eq!(active.borrow().len(), 1);
    }
    assert!(active.borrow().is_empty());
}

#[test]
fn smoothed_offset_lags_input_then_converges() {
    let mut c = make_controller();
    c.start(ScrollConfig::default());
    fire(&mut c, 0.0);
    c.on_wheel(100.0, WheelDeltaMode::Pixel);
    fire(&mut c, 16.0);
    let first = c.offset();
    assert!(first > 0.0 && first < 100.0, "offset {first}");

    let mut t = 16.0;
    let mut prev = first;
    for _ in 0..300 {
        t += 16.0;
        fire(&mut c, t);
        assert!(c.offset() >= prev);
        prev = c.offset();
    }
    assert_eq!(c.offset(), 100.0);
    assert_eq!(*c.surface().writes.last().unwrap(), 100.0);
}

#[test]
fn lower_smoothing_lags_more() {
    let offset_after = |smoothing: f32| {
        let mut c = make_controller();
        c.start(ScrollConfig {
            smoothing_factor: smoothing,
            ..ScrollConfig::default()
        });
        fire(&mut c, 0.0);
        c.on_wheel(100.0, WheelDeltaMode::Pixel);
        fire(&mut c, 16.0);
        c.offset()
    };
    assert!(offset_after(0.05) < offset_after(0.1));
    assert!(offset_after(0.1) < offset_after(0.3));
}

#[test]
fn progress_tracks_region_monotonically() {
    let mut c = ScrollMotionController::new(
        CountingScheduler::default(),
        FakeWindow::new(800.0, 10_000.0),
    );
    let region = ScrollRegion::new(1000.0, 2000.0);
    let mut prev = 0.0;
    for step in 0..=300 {
        let y = step as f32 * 10.0;
        c.on_native_scroll(y);
        let p = c.progress_for(&region);
        assert!((0.0..=1.0).contains(&p));
        if y <= 1000.0 {
            assert_eq!(p, 0.0, "before region at {y}");
        } else if y >= 2000.0 {
            assert_eq!(p, 1.0, "after region at {y}");
        } else {
            assert!(p > prev, "not increasing at {y}");
        }
        prev = p;
    }
}

#[test]
fn progress_follows_smoothed_not_raw_offset() {
    let mut c = make_controller();
    let region = ScrollRegion::new(0.0, 100.0);
    c.start(ScrollConfig::default());
    fire(&mut c, 0.0);
    c.on_wheel(100.0, WheelDeltaMode::Pixel);
    assert_eq!(c.progress_for(&region), 0.0);
    fire(&mut c, 16.0);
    let p = c.progress_for(&region);
    assert!(p > 0.0 && p < 1.0);
}

#[test]
fn progress_is_neutral_without_viewport() {
    let mut c = make_controller();
    c.on_native_scroll(1500.0);
    c.surface_mut().viewport = None;
    assert_eq!(c.progress_for(&ScrollRegion::new(1000.0, 2000.0)), 0.0);
    c.surface_mut().viewport = Some(0.0);
    assert_eq!(c.progress_for(&ScrollRegion::new(1000.0, 2000.0)), 0.0);
}

#[test]
fn zero_sized_surface_does_not_break_loop() {
    let mut c = ScrollMotionController::new(
        CountingScheduler::default(),
        FakeWindow {
            viewport: None,
            limit: Some(0.0),
            writes: Vec::new(),
        },
    );
    c.start(ScrollConfig::default());
    c.on_wheel(50.0, WheelDeltaMode::Line);
    for i in 0..5 {
        fire(&mut c, i as f64 * 16.0);
    }
    assert!(c.is_running());
    assert_eq!(c.offset(), 0.0);
}

#[test]
fn navigation_snaps_to_top_once_on_next_frame() {
    let mut c = make_controller();
    c.start(ScrollConfig::default());
    fire(&mut c, 0.0);
    c.on_wheel(100.0, WheelDeltaMode::Pixel);
    for i in 1..200 {
        fire(&mut c, i as f64 * 16.0);
    }
    assert_eq!(c.offset(), 100.0);

    assert!(c.notify_navigation("/projects"));
    assert!(!c.notify_navigation("/projects"));
    assert_eq!(c.offset(), 100.0, "reset waits for the next frame");

    let writes_before = c.surface().writes.len();
    fire(&mut c, 5000.0);
    assert_eq!(c.offset(), 0.0);
    let zero_writes = c.surface().writes[writes_before..]
        .iter()
        .filter(|w| **w == 0.0)
        .count();
    assert_eq!(zero_writes, 1);

    // Not eased: nothing left to animate.
    assert!(!c.simulation().is_moving());
}

#[test]
fn navigation_while_stopped_resets_immediately() {
    let mut c = make_controller();
    c.on_native_scroll(700.0);
    assert_eq!(c.offset(), 700.0);
    assert!(c.notify_navigation("/"));
    assert_eq!(c.offset(), 0.0);
    assert_eq!(c.surface().writes, vec![0.0]);
}

#[test]
fn native_scroll_is_ignored_mid_animation() {
    let mut c = make_controller();
    c.start(ScrollConfig::default());
    fire(&mut c, 0.0);
    c.on_wheel(100.0, WheelDeltaMode::Pixel);
    fire(&mut c, 16.0);
    let smoothed = c.offset();
    c.on_native_scroll(3.0);
    assert_eq!(c.offset(), smoothed);
}

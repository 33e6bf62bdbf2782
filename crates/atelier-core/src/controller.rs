//! Owned smooth-scroll frame loop.
//!
//! The controller never schedules itself; it asks a [`FrameScheduler`] for
//! exactly one pending frame at a time and cancels it on [`stop`]. On the web
//! the scheduler wraps `requestAnimationFrame`; tests count registrations and
//! call [`on_frame`] by hand.
//!
//! [`stop`]: ScrollMotionController::stop
//! [`on_frame`]: ScrollMotionController::on_frame

use crate::region::ScrollRegion;
use crate::scroll::{ScrollConfig, ScrollSimulation, WheelDeltaMode};

/// Opaque id of a scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// Register one callback for the next repaint. `None` if the platform
    /// refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// The scrolled surface (the window on the web).
pub trait ScrollSurface {
    /// `None` while nothing measurable is mounted.
    fn viewport_height(&self) -> Option<f32>;
    /// Maximum scroll offset, `None` when unknown.
    fn scroll_limit(&self) -> Option<f32>;
    fn set_offset(&mut self, offset: f32);
}

pub struct ScrollMotionController<F: FrameScheduler, S: ScrollSurface> {
    scheduler: F,
    surface: S,
    sim: ScrollSimulation,
    running: bool,
    pending: Option<FrameHandle>,
    route: Option<String>,
    reset_pending: bool,
    written: Option<f32>,
}

impl<F: FrameScheduler, S: ScrollSurface> ScrollMotionController<F, S> {
    pub fn new(scheduler: F, surface: S) -> Self {
        Self {
            scheduler,
            surface,
            sim: ScrollSimulation::default(),
            running: false,
            pending: None,
            route: None,
            reset_pending: false,
            written: None,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.sim.offset()
    }

    pub fn simulation(&self) -> &ScrollSimulation {
        &self.sim
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Begin the frame loop. Calling again while running changes nothing.
    pub fn start(&mut self, config: ScrollConfig) {
        if self.running {
            log::debug!("[scroll] start ignored; loop already running");
            return;
        }
        log::info!(
            "[scroll] start smoothing={} wheel_normalization={} touch_sync={}",
            config.smoothing_factor,
            config.wheel_normalization,
            config.touch_sync
        );
        self.sim.config = config;
        self.sim.reset_clock();
        self.refresh_limit();
        self.running = true;
        self.schedule();
    }

    /// Cancel the pending frame. Safe before `start` and when already stopped.
    pub fn stop(&mut self) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel_frame(h);
        }
        if self.running {
            self.running = false;
            log::info!("[scroll] stopped at offset {:.1}", self.sim.offset());
        }
    }

    /// One simulation step. Invoked by the scheduler's callback.
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        self.pending = None;
        if !self.running {
            return;
        }
        if self.reset_pending {
            self.reset_on_navigate();
        }
        self.refresh_limit();
        self.sim.advance(timestamp_ms);
        let offset = self.sim.offset();
        if self.written != Some(offset) {
            self.surface.set_offset(offset);
            self.written = Some(offset);
        }
        self.schedule();
    }

    pub fn on_wheel(&mut self, delta: f32, mode: WheelDeltaMode) {
        let vh = self.surface.viewport_height().unwrap_or(0.0);
        self.refresh_limit();
        self.sim.push_wheel(delta, mode, vh);
    }

    pub fn on_touch(&mut self, delta: f32) {
        self.refresh_limit();
        self.sim.push_touch(delta);
    }

    /// Adopt a native scroll position (scrollbar, keyboard, anchors) unless
    /// the simulation is mid-animation and produced it itself.
    pub fn on_native_scroll(&mut self, offset: f32) {
        if self.sim.is_moving() || self.written == Some(offset) {
            return;
        }
        self.refresh_limit();
        self.sim.sync_external(offset);
        self.written = Some(self.sim.offset());
    }

    /// Normalized progress of the smoothed offset through `region`.
    pub fn progress_for(&self, region: &ScrollRegion) -> f32 {
        match self.surface.viewport_height() {
            Some(h) if h > 0.0 => region.progress_at(self.sim.offset()),
            _ => 0.0,
        }
    }

    /// Jump to the top with no easing.
    pub fn reset_on_navigate(&mut self) {
        self.reset_pending = false;
        self.sim.snap_to(0.0);
        self.surface.set_offset(0.0);
        self.written = Some(0.0);
        log::debug!("[scroll] reset to top");
    }

    /// Record a route change. A new route queues one reset for the next
    /// frame, after the new view has mounted, or resets immediately when the
    /// loop is stopped. Returns true if the route changed.
    pub fn notify_navigation(&mut self, route: &str) -> bool {
        if self.route.as_deref() == Some(route) {
            return false;
        }
        log::info!("[scroll] navigation to {route}");
        self.route = Some(route.to_owned());
        if self.running {
            self.reset_pending = true;
        } else {
            self.reset_on_navigate();
        }
        true
    }

    fn refresh_limit(&mut self) {
        if let Some(limit) = self.surface.scroll_limit() {
            self.sim.set_limit(limit);
        }
    }

    fn schedule(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[scroll] frame request refused; loop halted");
            self.running = false;
        }
    }
}

impl<F: FrameScheduler, S: ScrollSurface> Drop for ScrollMotionController<F, S> {
    fn drop(&mut self) {
        self.stop();
    }
}

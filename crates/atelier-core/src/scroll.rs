//! Smooth-scroll simulation: raw input moves a target offset, the displayed
//! offset chases it with frame-rate independent exponential smoothing.

use crate::constants::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollConfig {
    /// Fraction of the remaining distance covered per 60Hz frame.
    pub smoothing_factor: f32,
    /// Scale line/page wheel deltas to pixels and clamp device spikes.
    pub wheel_normalization: bool,
    /// Smooth touch drags like wheel input instead of following the finger.
    pub touch_sync: bool,
    pub wheel_multiplier: f32,
    pub touch_multiplier: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smoothing_factor: SCROLL_SMOOTHING,
            wheel_normalization: true,
            touch_sync: true,
            wheel_multiplier: 1.0,
            touch_multiplier: 1.0,
        }
    }
}

/// Unit of a wheel delta, mirroring `WheelEvent.deltaMode`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelDeltaMode {
    Pixel,
    Line,
    Page,
}

impl WheelDeltaMode {
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }
}

/// Convert a wheel delta to pixels; with normalization on, line/page units
/// are scaled and the result clamped so high-resolution and notched devices
/// scroll at a comparable rate.
pub fn normalize_wheel_delta(
    delta: f32,
    mode: WheelDeltaMode,
    viewport_height: f32,
    normalize: bool,
) -> f32 {
    if !normalize {
        return delta;
    }
    let px = match mode {
        WheelDeltaMode::Pixel => delta,
        WheelDeltaMode::Line => delta * WHEEL_LINE_HEIGHT_PX,
        WheelDeltaMode::Page => delta * viewport_height.max(0.0),
    };
    px.clamp(-WHEEL_MAX_DELTA_PX, WHEEL_MAX_DELTA_PX)
}

/// Per-page-view scroll state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub current: f32,
    pub target: f32,
    pub velocity: f32,
    pub limit: f32,
    pub last_timestamp_ms: Option<f64>,
}

#[derive(Clone, Debug, Default)]
pub struct ScrollSimulation {
    pub config: ScrollConfig,
    state: ScrollState,
}

impl ScrollSimulation {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            state: ScrollState::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    #[inline]
    pub fn offset(&self) -> f32 {
        self.state.current
    }

    /// Maximum scrollable offset. Offsets are clamped into the new range.
    pub fn set_limit(&mut self, limit: f32) {
        let limit = if limit.is_finite() { limit.max(0.0) } else { 0.0 };
        self.state.limit = limit;
        self.state.target = self.state.target.clamp(0.0, limit);
        self.state.current = self.state.current.clamp(0.0, limit);
    }

    pub fn push_wheel(&mut self, delta: f32, mode: WheelDeltaMode, viewport_height: f32) {
        let px = normalize_wheel_delta(delta, mode, viewport_height, self.config.wheel_normalization);
        self.nudge_target(px * self.config.wheel_multiplier);
    }

    pub fn push_touch(&mut self, delta: f32) {
        self.nudge_target(delta * self.config.touch_multiplier);
        if !self.config.touch_sync {
            self.state.current = self.state.target;
            self.state.velocity = 0.0;
        }
    }

    /// Adopt an offset set by something else (scrollbar drag, anchor jump).
    pub fn sync_external(&mut self, offset: f32) {
        let o = offset.clamp(0.0, self.state.limit);
        self.state.current = o;
        self.state.target = o;
        self.state.velocity = 0.0;
    }

    fn nudge_target(&mut self, delta: f32) {
        if !delta.is_finite() {
            return;
        }
        self.state.target = (self.state.target + delta).clamp(0.0, self.state.limit);
    }

    /// Jump straight to `offset` without easing.
    pub fn snap_to(&mut self, offset: f32) {
        self.sync_external(offset);
    }

    /// Forget the previous frame time so the next frame does not integrate
    /// across a pause.
    pub fn reset_clock(&mut self) {
        self.state.last_timestamp_ms = None;
    }

    /// Step toward the target. Returns true while still moving.
    pub fn advance(&mut self, timestamp_ms: f64) -> bool {
        let dt = match self.state.last_timestamp_ms.replace(timestamp_ms) {
            Some(prev) => ((timestamp_ms - prev) / 1000.0) as f32,
            None => {
                self.state.velocity = 0.0;
                return self.is_moving();
            }
        };
        let dt = dt.clamp(0.0, SCROLL_MAX_FRAME_DT_SEC);

        let before = self.state.current;
        let lambda = self.config.smoothing_factor.clamp(0.0, 1.0) * SCROLL_REFERENCE_FPS;
        let alpha = if self.config.smoothing_factor >= 1.0 {
            1.0
        } else {
            1.0 - (-lambda * dt).exp()
        };
        let mut next = before + (self.state.target - before) * alpha;
        if (self.state.target - next).abs() < SCROLL_SNAP_EPSILON {
            next = self.state.target;
        }
        self.state.current = next;
        self.state.velocity = next - before;
        self.is_moving()
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.state.current != self.state.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_mode_scales_and_clamps() {
        assert_eq!(normalize_wheel_delta(3.0, WheelDeltaMode::Line, 800.0, true), 50.0);
        assert_eq!(normalize_wheel_delta(1.0, WheelDeltaMode::Page, 800.0, true), 100.0);
        assert_eq!(normalize_wheel_delta(-400.0, WheelDeltaMode::Pixel, 800.0, true), -100.0);
    }

    #[test]
    fn raw_deltas_pass_through_without_normalization() {
        assert_eq!(normalize_wheel_delta(3.0, WheelDeltaMode::Line, 800.0, false), 3.0);
    }

    #[test]
    fn first_frame_only_records_clock() {
        let mut sim = ScrollSimulation::new(ScrollConfig::default());
        sim.set_limit(1000.0);
        sim.push_wheel(100.0, WheelDeltaMode::Pixel, 800.0);
        assert!(sim.advance(0.0));
        assert_eq!(sim.offset(), 0.0);
        sim.advance(16.0);
        assert!(sim.offset() > 0.0 && sim.offset() < 100.0);
    }

    #[test]
    fn unsynced_touch_follows_finger() {
        let mut sim = ScrollSimulation::new(ScrollConfig {
            touch_sync: false,
            ..ScrollConfig::default()
        });
        sim.set_limit(500.0);
        sim.push_touch(40.0);
        assert_eq!(sim.offset(), 40.0);
    }

    #[test]
    fn target_is_clamped_to_limit() {
        let mut sim = ScrollSimulation::new(ScrollConfig::default());
        sim.set_limit(50.0);
        sim.push_touch(400.0);
        assert_eq!(sim.state().target, 50.0);
        sim.push_touch(-400.0);
        assert_eq!(sim.state().target, 0.0);
    }
}

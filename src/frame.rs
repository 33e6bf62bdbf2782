use atelier_core::{FrameHandle, FrameScheduler, ScrollSurface};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// `requestAnimationFrame` behind [`FrameScheduler`]. Owns the callback, so
/// dropping the scheduler invalidates it; owners cancel first.
pub struct RafScheduler {
    callback: Closure<dyn FnMut(f64)>,
}

impl RafScheduler {
    pub fn new(on_frame: impl FnMut(f64) + 'static) -> Self {
        Self {
            callback: Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>),
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let w = web::window()?;
        match w.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0);
        }
    }
}

/// The browser window as a scroll surface.
#[derive(Default)]
pub struct WindowSurface;

impl ScrollSurface for WindowSurface {
    fn viewport_height(&self) -> Option<f32> {
        dom::viewport_height()
    }

    fn scroll_limit(&self) -> Option<f32> {
        let root = dom::window_document()?.document_element()?;
        let vh = self.viewport_height()?;
        Some((root.scroll_height() as f32 - vh).max(0.0))
    }

    fn set_offset(&mut self, offset: f32) {
        if let Some(w) = web::window() {
            w.scroll_to_with_x_and_y(0.0, offset as f64);
        }
    }
}

/// Clamped seconds between two rAF timestamps.
#[inline]
pub fn frame_dt(last_ms: &mut Option<f64>, now_ms: f64, max_sec: f32) -> f32 {
    let dt = last_ms
        .replace(now_ms)
        .map(|prev| ((now_ms - prev) / 1000.0) as f32)
        .unwrap_or(0.0);
    dt.clamp(0.0, max_sec)
}

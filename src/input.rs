/// Vertical touch-drag tracker. Dragging the finger up scrolls down, so the
/// reported delta is `previous_y - current_y`.
#[derive(Default, Clone, Copy, Debug)]
pub struct TouchTracker {
    last_y: Option<f32>,
}

impl TouchTracker {
    #[inline]
    pub fn begin(&mut self, y: f32) {
        self.last_y = Some(y);
    }

    /// Scroll delta since the previous sample; 0 before `begin`.
    pub fn drag(&mut self, y: f32) -> f32 {
        match self.last_y.replace(y) {
            Some(prev) if prev.is_finite() && y.is_finite() => prev - y,
            _ => 0.0,
        }
    }

    #[inline]
    pub fn end(&mut self) {
        self.last_y = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.last_y.is_some()
    }
}

/// `translate(...) rotate(...) scale(...)` for one glyph.
pub fn glyph_transform_css(x: f32, y: f32, rotation_deg: f32, scale: f32) -> String {
    format!("translate({x:.2}px, {y:.2}px) rotate({rotation_deg:.2}deg) scale({scale:.4})")
}

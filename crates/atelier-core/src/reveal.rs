//! Two-phase title entrance: glyphs start scattered and spring into a
//! centered [`Layout`] once one is available.
//!
//! The transition is driven by [`TitleReveal::apply_layout`], not by timers,
//! so mount/measure/animate ordering cannot race: nothing moves until a valid
//! layout arrives, and a later layout only retargets the springs.

use crate::constants::*;
use crate::layout::Layout;
use crate::scatter::ScatterPosition;
use crate::spring::{Spring, SpringParams};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Scattered,
    Centered,
}

/// Outcome of offering a layout to the reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealUpdate {
    /// Neutral layout or wrong glyph count.
    Rejected,
    /// First valid layout; glyphs begin combining.
    Started,
    /// New positions for an already combining title.
    Retargeted,
    Unchanged,
}

/// Render-ready transform of one glyph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphTransform {
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug)]
struct GlyphMotion {
    x: Spring,
    y: Spring,
    rotation: Spring,
    scale: Spring,
    opacity: Spring,
}

impl GlyphMotion {
    fn scattered(s: &ScatterPosition) -> Self {
        Self {
            x: Spring::at(s.offset.x),
            y: Spring::at(s.offset.y),
            rotation: Spring::at(s.rotation_deg),
            scale: Spring::at(s.scale),
            opacity: Spring::at(SCATTER_OPACITY),
        }
    }

    fn springs_mut(&mut self) -> [&mut Spring; 5] {
        [
            &mut self.x,
            &mut self.y,
            &mut self.rotation,
            &mut self.scale,
            &mut self.opacity,
        ]
    }

    fn at_rest(&self) -> bool {
        [self.x, self.y, self.rotation, self.scale, self.opacity]
            .iter()
            .all(Spring::is_at_rest)
    }
}

pub struct TitleReveal {
    phase: RevealPhase,
    motions: Vec<GlyphMotion>,
    layout: Option<Layout>,
    elapsed: f32,
    pub params: SpringParams,
    pub settle_delay: f32,
    pub stagger: f32,
}

impl TitleReveal {
    pub fn new(scatter: &[ScatterPosition]) -> Self {
        Self {
            phase: RevealPhase::Scattered,
            motions: scatter.iter().map(GlyphMotion::scattered).collect(),
            layout: None,
            elapsed: 0.0,
            params: SpringParams::default(),
            settle_delay: REVEAL_SETTLE_DELAY_SEC,
            stagger: REVEAL_STAGGER_SEC,
        }
    }

    #[inline]
    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[inline]
    pub fn glyph_count(&self) -> usize {
        self.motions.len()
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    /// Begin a new cycle from fresh scatter positions.
    pub fn restart(&mut self, scatter: &[ScatterPosition]) {
        self.motions = scatter.iter().map(GlyphMotion::scattered).collect();
        self.phase = RevealPhase::Scattered;
        self.layout = None;
        self.elapsed = 0.0;
    }

    pub fn apply_layout(&mut self, layout: &Layout) -> RevealUpdate {
        if layout.is_neutral() || layout.len() != self.motions.len() {
            log::debug!(
                "[reveal] rejecting layout: neutral={} glyphs={} expected={}",
                layout.is_neutral(),
                layout.len(),
                self.motions.len()
            );
            return RevealUpdate::Rejected;
        }
        if self.layout.as_ref() == Some(layout) {
            return RevealUpdate::Unchanged;
        }
        for (m, p) in self.motions.iter_mut().zip(&layout.positions) {
            m.x.target = p.x;
            m.y.target = p.y;
            m.rotation.target = 0.0;
            m.scale.target = 1.0;
            m.opacity.target = 1.0;
        }
        self.layout = Some(layout.clone());
        match self.phase {
            RevealPhase::Scattered => {
                self.phase = RevealPhase::Centered;
                self.elapsed = 0.0;
                RevealUpdate::Started
            }
            RevealPhase::Centered => RevealUpdate::Retargeted,
        }
    }

    /// Advance the combine animation by `dt_sec`. No-op while scattered.
    pub fn tick(&mut self, dt_sec: f32) {
        if self.phase == RevealPhase::Scattered || dt_sec <= 0.0 {
            return;
        }
        let prev = self.elapsed;
        self.elapsed += dt_sec;
        for (i, m) in self.motions.iter_mut().enumerate() {
            let start = self.settle_delay + i as f32 * self.stagger;
            if self.elapsed <= start {
                continue;
            }
            let active = self.elapsed - prev.max(start);
            for s in m.springs_mut() {
                s.step(&self.params, active);
            }
        }
    }

    pub fn is_settled(&self) -> bool {
        self.phase == RevealPhase::Centered && self.motions.iter().all(GlyphMotion::at_rest)
    }

    pub fn transforms(&self) -> Vec<GlyphTransform> {
        self.motions
            .iter()
            .map(|m| GlyphTransform {
                offset: Vec2::new(m.x.value, m.y.value),
                rotation_deg: m.rotation.value,
                scale: m.scale.value,
                opacity: m.opacity.value,
            })
            .collect()
    }
}

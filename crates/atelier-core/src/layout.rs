//! Centered single-line glyph layout.

use crate::glyph::{build_glyphs, measure_glyph_widths, FontStyle, Glyph, GlyphMeasure, Spacing};
use glam::Vec2;

/// Per-glyph offsets relative to the container's top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub positions: Vec<Vec2>,
    pub total_width: f32,
    /// Container size the offsets were computed against. `None` for the
    /// neutral layout.
    pub container: Option<Vec2>,
}

impl Layout {
    /// All-zero placeholder used while measurement is unavailable.
    pub fn neutral(glyph_count: usize) -> Self {
        Self {
            positions: vec![Vec2::ZERO; glyph_count],
            total_width: 0.0,
            container: None,
        }
    }

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.container.is_none()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// True when this layout may be applied to `glyph_count` glyphs inside a
    /// container of `container` size.
    pub fn fits(&self, glyph_count: usize, container: Vec2) -> bool {
        !self.is_neutral() && self.len() == glyph_count && self.container == Some(container)
    }

    /// Space left of the first glyph and right of the last glyph's right edge.
    pub fn margins(&self) -> Option<(f32, f32)> {
        let container = self.container?;
        let left = self.positions.first()?.x;
        Some((left, container.x - left - self.total_width))
    }
}

#[inline]
fn measurable(size: Option<Vec2>) -> Option<Vec2> {
    size.filter(|s| s.x.is_finite() && s.y.is_finite() && s.x > 0.0 && s.y > 0.0)
}

/// Total width of a run: every glyph plus the gap after every glyph but the last.
pub fn total_width(widths: &[f32], spacing: &Spacing) -> f32 {
    let n = widths.len();
    widths
        .iter()
        .enumerate()
        .map(|(i, w)| if i + 1 < n { w + spacing.after(i) } else { *w })
        .sum()
}

/// Horizontally and vertically centered layout for pre-measured glyph widths.
///
/// Falls back to [`Layout::neutral`] when either the container or the text
/// block has no measurable size yet; callers recompute on the next
/// resize/mount.
pub fn compute_centered_layout(
    widths: &[f32],
    container: Option<Vec2>,
    text_block: Option<Vec2>,
    spacing: &Spacing,
) -> Layout {
    let (Some(container), Some(block)) = (measurable(container), measurable(text_block)) else {
        return Layout::neutral(widths.len());
    };

    let total = total_width(widths, spacing);
    let start_x = (container.x - total) / 2.0;
    let y = (container.y - block.y) / 2.0;

    let mut x = start_x;
    let positions = widths
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let p = Vec2::new(x, y);
            x += w + spacing.after(i);
            p
        })
        .collect();

    Layout {
        positions,
        total_width: total,
        container: Some(container),
    }
}

/// Stateless facade over measuring and layout; only holds spacing config.
#[derive(Clone, Debug, Default)]
pub struct GlyphLayoutEngine {
    pub spacing: Spacing,
}

impl GlyphLayoutEngine {
    pub fn new(spacing: Spacing) -> Self {
        Self { spacing }
    }

    pub fn glyphs(&self, text: &str, widths: &[f32]) -> Vec<Glyph> {
        build_glyphs(text, widths, &self.spacing)
    }

    /// Measure `text` and center it. Measurement failures degrade to the
    /// neutral layout.
    pub fn layout<M: GlyphMeasure + ?Sized>(
        &self,
        text: &str,
        font: &FontStyle,
        measurer: &mut M,
        container: Option<Vec2>,
        text_block: Option<Vec2>,
    ) -> Layout {
        match measure_glyph_widths(text, font, measurer) {
            Ok(widths) => compute_centered_layout(&widths, container, text_block, &self.spacing),
            Err(e) => {
                log::debug!("[layout] {e}; using neutral layout");
                Layout::neutral(text.chars().count())
            }
        }
    }
}

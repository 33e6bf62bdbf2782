//! Glyph records, font context and the measurement seam.
//!
//! Measurement is the only part of layout that touches the rendering surface,
//! so it sits behind [`GlyphMeasure`]. The web front-end implements it with
//! a throwaway `<span>`; tests implement it with fixed advance tables.

use crate::constants::{BASE_SPACING, TITLE_SPACING_OVERRIDES};
use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("glyph measurement unavailable: {0}")]
    MeasurementUnavailable(String),
    #[error("measured width for {character:?} at index {index} is not finite")]
    InvalidWidth { index: usize, character: char },
}

/// Font context the glyphs are measured in, captured from the computed style
/// of the reference text block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontStyle {
    pub size: String,
    pub family: String,
    pub weight: String,
}

/// Renders a single character in a font context and reports its width in px.
pub trait GlyphMeasure {
    fn measure(&mut self, character: char, font: &FontStyle) -> Result<f32, LayoutError>;
}

/// One width per character of `text`, order preserved.
pub fn measure_glyph_widths<M: GlyphMeasure + ?Sized>(
    text: &str,
    font: &FontStyle,
    measurer: &mut M,
) -> Result<Vec<f32>, LayoutError> {
    text.chars()
        .enumerate()
        .map(|(index, character)| {
            let w = measurer.measure(character, font)?;
            if !w.is_finite() || w < 0.0 {
                return Err(LayoutError::InvalidWidth { index, character });
            }
            Ok(w)
        })
        .collect()
}

/// Inter-glyph spacing: a base gap plus per-index replacements.
#[derive(Clone, Debug, PartialEq)]
pub struct Spacing {
    pub base: f32,
    pub overrides: FnvHashMap<usize, f32>,
}

impl Default for Spacing {
    fn default() -> Self {
        Self::uniform(BASE_SPACING)
    }
}

impl Spacing {
    pub fn uniform(base: f32) -> Self {
        Self {
            base,
            overrides: FnvHashMap::default(),
        }
    }

    /// Spacing tuned for the reference title.
    pub fn title() -> Self {
        Self::uniform(BASE_SPACING).with_overrides(TITLE_SPACING_OVERRIDES)
    }

    pub fn with_override(mut self, index: usize, spacing: f32) -> Self {
        self.overrides.insert(index, spacing);
        self
    }

    pub fn with_overrides(mut self, pairs: impl IntoIterator<Item = (usize, f32)>) -> Self {
        self.overrides.extend(pairs);
        self
    }

    /// Gap after glyph `index`. An override replaces the base, zero included.
    /// Negative or NaN gaps read as zero so glyphs never step backwards.
    #[inline]
    pub fn after(&self, index: usize) -> f32 {
        self.overrides.get(&index).copied().unwrap_or(self.base).max(0.0)
    }
}

/// A single measured character of the title.
#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub index: usize,
    pub character: char,
    pub measured_width: f32,
    pub spacing_after: f32,
}

impl Glyph {
    /// Character as it should be rendered; plain spaces collapse in inline
    /// layout so they become non-breaking.
    pub fn display_char(&self) -> char {
        if self.character == ' ' {
            '\u{00A0}'
        } else {
            self.character
        }
    }
}

pub fn build_glyphs(text: &str, widths: &[f32], spacing: &Spacing) -> Vec<Glyph> {
    text.chars()
        .zip(widths.iter().copied())
        .enumerate()
        .map(|(index, (character, measured_width))| Glyph {
            index,
            character,
            measured_width,
            spacing_after: spacing.after(index),
        })
        .collect()
}

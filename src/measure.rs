//! Glyph measurement against the live DOM.
//!
//! Each character is rendered into a throwaway inline-block `<span>` carrying
//! the reference text's font, measured, and removed before returning.

use atelier_core::{FontStyle, GlyphMeasure, LayoutError};
use web_sys as web;

use crate::dom;

fn unavailable(what: &str) -> LayoutError {
    LayoutError::MeasurementUnavailable(what.to_owned())
}

/// Font of `el` as resolved by the browser.
pub fn font_style_of(el: &web::Element) -> Option<FontStyle> {
    let style = web::window()?.get_computed_style(el).ok()??;
    let prop = |name: &str| style.get_property_value(name).unwrap_or_default();
    let font = FontStyle {
        size: prop("font-size"),
        family: prop("font-family"),
        weight: prop("font-weight"),
    };
    (!font.size.is_empty()).then_some(font)
}

pub struct DomGlyphMeasure {
    document: web::Document,
}

impl DomGlyphMeasure {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl GlyphMeasure for DomGlyphMeasure {
    fn measure(&mut self, character: char, font: &FontStyle) -> Result<f32, LayoutError> {
        let body = self.document.body().ok_or_else(|| unavailable("no document body"))?;
        let span = self
            .document
            .create_element("span")
            .map_err(|e| unavailable(&format!("{:?}", e)))?;
        let text = if character == ' ' {
            '\u{00A0}'.to_string()
        } else {
            character.to_string()
        };
        span.set_text_content(Some(&text));
        _ = span.set_attribute(
            "style",
            &format!(
                "position:absolute;visibility:hidden;white-space:pre;display:inline-block;\
                 font-size:{};font-family:{};font-weight:{}",
                font.size, font.family, font.weight
            ),
        );
        body.append_child(&span)
            .map_err(|e| unavailable(&format!("{:?}", e)))?;
        let width = span.get_bounding_client_rect().width() as f32;
        span.remove();
        Ok(width)
    }
}

/// Measure the hidden reference block and its container in one go.
pub fn hero_metrics(
    container: &web::Element,
    reference: &web::Element,
) -> (Option<glam::Vec2>, Option<glam::Vec2>) {
    (dom::element_size(container), dom::element_size(reference))
}

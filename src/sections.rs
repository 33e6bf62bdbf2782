use atelier_core::{Keyframes, RegionOffsets, ScrollRegion};
use web_sys as web;

use crate::constants::{FADE_ATTR, FADE_SELECTOR};
use crate::dom;
use crate::smooth_scroll::{Controller, FrameObserver};

struct FadeSection {
    el: web::HtmlElement,
    offsets: RegionOffsets,
    last_opacity: Option<f32>,
}

/// Sections whose opacity follows their scroll progress.
pub struct SectionFades {
    sections: Vec<FadeSection>,
    curve: Keyframes,
}

impl SectionFades {
    pub fn collect(document: &web::Document) -> Self {
        let sections = dom::all_html_elements(document, FADE_SELECTOR)
            .into_iter()
            .filter_map(|el| {
                let raw = el.get_attribute(FADE_ATTR).unwrap_or_default();
                match RegionOffsets::parse(&raw) {
                    Some(offsets) => Some(FadeSection {
                        el,
                        offsets,
                        last_opacity: None,
                    }),
                    None => {
                        log::warn!("[sections] bad {FADE_ATTR}={raw:?}; skipping");
                        None
                    }
                }
            })
            .collect::<Vec<_>>();
        log::info!("[sections] tracking {} fading sections", sections.len());
        Self {
            sections,
            curve: Keyframes::fade_through(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Regions are rebuilt every frame so layout shifts and resizes are
    /// picked up without a separate listener.
    pub fn apply(&mut self, controller: &Controller) {
        let Some(vh) = dom::viewport_height() else {
            return;
        };
        for s in &mut self.sections {
            let Some(top) = dom::document_top(&s.el) else {
                continue;
            };
            let height = s.el.get_bounding_client_rect().height() as f32;
            let region = ScrollRegion::from_element(top, height, vh, s.offsets);
            let opacity = self.curve.map(controller.progress_for(&region));
            if s.last_opacity != Some(opacity) {
                dom::set_style(&s.el, "opacity", &format!("{opacity:.3}"));
                s.last_opacity = Some(opacity);
            }
        }
    }

    pub fn into_observer(mut self) -> FrameObserver {
        Box::new(move |c: &Controller| self.apply(c))
    }
}

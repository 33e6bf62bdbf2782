//! Hero title: one absolutely positioned `<span>` per glyph, scattered on
//! mount and sprung into the centered layout once the page can be measured.

use anyhow::anyhow;
use atelier_core::{
    scatter_all, FrameHandle, FrameScheduler, GlyphLayoutEngine, RevealUpdate, ScatterBounds,
    Spacing, TitleReveal,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::constants::*;
use crate::dom;
use crate::events::ListenerGuard;
use crate::frame::{frame_dt, RafScheduler};
use crate::input::glyph_transform_css;
use crate::measure::{self, DomGlyphMeasure};

struct TitleState {
    text: String,
    engine: GlyphLayoutEngine,
    reveal: TitleReveal,
    measure: DomGlyphMeasure,
    container: web::HtmlElement,
    reference: web::HtmlElement,
    glyphs: Vec<web::HtmlElement>,
    scheduler: RafScheduler,
    pending: Option<FrameHandle>,
    last_ts: Option<f64>,
}

impl TitleState {
    fn relayout(&mut self) {
        let (container, block) = measure::hero_metrics(&self.container, &self.reference);
        let Some(font) = measure::font_style_of(&self.reference) else {
            log::debug!("[title] reference font not resolved yet");
            return;
        };
        let layout = self
            .engine
            .layout(&self.text, &font, &mut self.measure, container, block);
        // The container may have changed while measuring; never apply a
        // layout computed for another size.
        let current = dom::element_size(&self.container);
        match current {
            Some(size) if layout.fits(self.glyphs.len(), size) => {}
            _ => {
                log::debug!("[title] layout not applicable yet; waiting for next resize");
                return;
            }
        }
        match self.reveal.apply_layout(&layout) {
            RevealUpdate::Started => {
                log::info!("[title] reveal started, width {:.1}px", layout.total_width);
                self.kick();
            }
            RevealUpdate::Retargeted => {
                log::debug!("[title] relayout width {:.1}px", layout.total_width);
                self.kick();
            }
            RevealUpdate::Unchanged | RevealUpdate::Rejected => {}
        }
    }

    fn kick(&mut self) {
        if self.pending.is_none() {
            self.pending = self.scheduler.request_frame();
        }
    }

    fn frame(&mut self, ts: f64) {
        self.pending = None;
        let dt = frame_dt(&mut self.last_ts, ts, REVEAL_MAX_FRAME_DT_SEC);
        self.reveal.tick(dt);
        self.render();
        if self.reveal.is_settled() {
            self.last_ts = None;
        } else {
            self.kick();
        }
    }

    fn render(&self) {
        for (el, t) in self.glyphs.iter().zip(self.reveal.transforms()) {
            dom::set_style(
                el,
                "transform",
                &glyph_transform_css(t.offset.x, t.offset.y, t.rotation_deg, t.scale),
            );
            dom::set_style(el, "opacity", &format!("{:.3}", t.opacity));
        }
    }

    fn stop(&mut self) {
        if let Some(h) = self.pending.take() {
            self.scheduler.cancel_frame(h);
        }
    }
}

pub struct TitleAnimator {
    state: Rc<RefCell<TitleState>>,
    listeners: Vec<ListenerGuard>,
}

fn create_glyphs(
    document: &web::Document,
    host: &web::HtmlElement,
    engine: &GlyphLayoutEngine,
    text: &str,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    host.set_text_content(None);
    let n = text.chars().count();
    let mut out = Vec::with_capacity(n);
    for g in engine.glyphs(text, &vec![0.0; n]) {
        let el: web::HtmlElement = document
            .create_element("span")
            .map_err(|e| anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow!("{:?}", e))?;
        el.set_class_name(GLYPH_CLASS);
        el.set_text_content(Some(&g.display_char().to_string()));
        dom::set_style(&el, "position", "absolute");
        dom::set_style(&el, "left", "0");
        dom::set_style(&el, "top", "0");
        dom::set_style(&el, "will-change", "transform, opacity");
        host.append_child(&el).map_err(|e| anyhow!("{:?}", e))?;
        out.push(el);
    }
    Ok(out)
}

impl TitleAnimator {
    pub fn mount(document: &web::Document, text: &str, spacing: Spacing) -> anyhow::Result<Self> {
        let container = dom::html_element_by_id(document, HERO_CONTAINER_ID)
            .ok_or_else(|| anyhow!("missing #{HERO_CONTAINER_ID}"))?;
        let reference = dom::html_element_by_id(document, HERO_TITLE_REF_ID)
            .ok_or_else(|| anyhow!("missing #{HERO_TITLE_REF_ID}"))?;
        let host = dom::html_element_by_id(document, HERO_TITLE_ID)
            .ok_or_else(|| anyhow!("missing #{HERO_TITLE_ID}"))?;

        reference.set_text_content(Some(text));
        let engine = GlyphLayoutEngine::new(spacing);
        let glyphs = create_glyphs(document, &host, &engine, text)?;
        let scatter = scatter_all(&mut rand::thread_rng(), glyphs.len(), &ScatterBounds::default());
        log::info!("[title] mounted {} glyphs", glyphs.len());

        let measure = DomGlyphMeasure::new(document.clone());
        let state = Rc::new_cyclic(|weak: &Weak<RefCell<TitleState>>| {
            let weak = weak.clone();
            RefCell::new(TitleState {
                text: text.to_owned(),
                engine,
                reveal: TitleReveal::new(&scatter),
                measure,
                container,
                reference,
                glyphs,
                scheduler: RafScheduler::new(move |ts: f64| {
                    if let Some(s) = weak.upgrade() {
                        s.borrow_mut().frame(ts);
                    }
                }),
                pending: None,
                last_ts: None,
            })
        });
        {
            let mut s = state.borrow_mut();
            s.render();
            s.relayout();
        }

        let mut listeners = Vec::new();
        let s = state.clone();
        listeners.extend(ListenerGuard::on_window("resize", None, move |_: web::Event| {
            s.borrow_mut().relayout();
        }));

        // Web fonts swap in after first paint and change every glyph width.
        let fonts = document.fonts();
        let s = state.clone();
        listeners.extend(ListenerGuard::attach(
            fonts.unchecked_ref::<web::EventTarget>(),
            "loadingdone",
            None,
            move |_: web::Event| s.borrow_mut().relayout(),
        ));
        let weak = Rc::downgrade(&state);
        spawn_local(async move {
            let ready: js_sys::Promise = match fonts.ready() {
                Ok(p) => p,
                Err(e) => {
                    log::debug!("[title] document.fonts.ready unavailable: {:?}", e);
                    return;
                }
            };
            if JsFuture::from(ready).await.is_ok() {
                if let Some(s) = weak.upgrade() {
                    s.borrow_mut().relayout();
                }
            }
        });

        Ok(Self { state, listeners })
    }

    pub fn stop(&mut self) {
        self.listeners.clear();
        self.state.borrow_mut().stop();
    }
}

impl Drop for TitleAnimator {
    fn drop(&mut self) {
        self.stop();
    }
}

#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod lifecycle;
mod measure;
mod sections;
mod smooth_scroll;
mod title;

use config::SiteConfig;
use lifecycle::{lifecycle_action, route_key, LifecycleAction, PageTransition};
use sections::SectionFades;
use smooth_scroll::SmoothScroll;
use title::TitleAnimator;

/// Everything mounted for the current page view.
struct Page {
    scroll: SmoothScroll,
    title: Option<TitleAnimator>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("atelier-web starting");

    if let Err(e) = mount() {
        log::error!("init error: {:?}", e);
    }
    if let Some(window) = web::window() {
        wire_lifecycle(&window);
    }
    Ok(())
}

fn mount() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let config = document
        .body()
        .map(|b| SiteConfig::from_body(&b))
        .unwrap_or_default();

    let already = PAGE.with(|p| p.borrow().is_some());
    if already {
        log::warn!("[page] already mounted; ignoring");
        return Ok(());
    }

    let scroll = SmoothScroll::mount(config.scroll.clone());
    let fades = SectionFades::collect(&document);
    if !fades.is_empty() {
        scroll.observe(fades.into_observer());
    }

    // Missing hero markup leaves the rest of the page working.
    let title = match TitleAnimator::mount(&document, &config.title, config.spacing.clone()) {
        Ok(t) => Some(t),
        Err(e) => {
            log::warn!("[title] not mounted: {e}");
            None
        }
    };

    PAGE.with(|p| *p.borrow_mut() = Some(Page { scroll, title }));
    Ok(())
}

fn is_mounted() -> bool {
    PAGE.with(|p| p.borrow().is_some())
}

fn on_page_transition(transition: PageTransition) {
    match lifecycle_action(transition, is_mounted()) {
        LifecycleAction::Unmount => unmount(),
        LifecycleAction::Mount => {
            log::info!("[page] restored from back/forward cache; remounting");
            if let Err(e) = mount() {
                log::error!("remount error: {:?}", e);
            }
        }
        LifecycleAction::Keep => {}
    }
}

// Registered once per document; the listeners live as long as the page.
fn wire_lifecycle(window: &web::Window) {
    for (kind, show) in [("pagehide", false), ("pageshow", true)] {
        let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
            let persisted = ev.persisted();
            on_page_transition(if show {
                PageTransition::Show { persisted }
            } else {
                PageTransition::Hide { persisted }
            });
        }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Stop every loop and listener for this page view.
#[wasm_bindgen]
pub fn unmount() {
    // Take first so dropping runs without the slot borrowed.
    let page = PAGE.with(|p| p.borrow_mut().take());
    if let Some(mut page) = page {
        page.scroll.stop();
        if let Some(t) = page.title.as_mut() {
            t.stop();
        }
        log::info!("[page] unmounted");
    }
}

/// For client-side routers: call after the new view has mounted. Accepts a
/// path or a full URL; only the path takes part in deduplication.
#[wasm_bindgen]
pub fn navigated(route: &str) {
    PAGE.with(|p| {
        if let Some(page) = p.borrow().as_ref() {
            page.scroll.notify_navigation(route_key(route));
        }
    });
}

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event listener that removes itself when dropped.
pub struct ListenerGuard {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerGuard {
    /// Attach `handler` for `kind` events. `passive: Some(false)` is needed
    /// for handlers that call `prevent_default` on wheel/touch input.
    pub fn attach<E: JsCast + 'static>(
        target: &web::EventTarget,
        kind: &'static str,
        passive: Option<bool>,
        mut handler: impl FnMut(E) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web::Event)>);
        let res = match passive {
            Some(p) => {
                let opts = web::AddEventListenerOptions::new();
                opts.set_passive(p);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    kind,
                    closure.as_ref().unchecked_ref(),
                    &opts,
                )
            }
            None => target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref()),
        };
        if let Err(e) = res {
            log::warn!("[events] could not listen for {kind}: {:?}", e);
            return None;
        }
        Some(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    /// Listener on the window.
    pub fn on_window<E: JsCast + 'static>(
        kind: &'static str,
        passive: Option<bool>,
        handler: impl FnMut(E) + 'static,
    ) -> Option<Self> {
        let window = web::window()?;
        Self::attach(window.unchecked_ref::<web::EventTarget>(), kind, passive, handler)
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

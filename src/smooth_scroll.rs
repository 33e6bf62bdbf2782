//! Page-lifetime smooth scrolling: one [`ScrollMotionController`] driven by
//! `requestAnimationFrame`, fed by wheel/touch/native scroll events.

use atelier_core::{ScrollConfig, ScrollMotionController, WheelDeltaMode};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

use crate::constants::TOUCH_DEADZONE_PX;
use crate::events::ListenerGuard;
use crate::frame::{RafScheduler, WindowSurface};
use crate::input::TouchTracker;
use crate::lifecycle::route_key;

pub type Controller = ScrollMotionController<RafScheduler, WindowSurface>;

/// Called after every simulation step with the updated controller.
pub type FrameObserver = Box<dyn FnMut(&Controller)>;

pub struct SmoothScroll {
    controller: Rc<RefCell<Controller>>,
    observers: Rc<RefCell<Vec<FrameObserver>>>,
    listeners: Vec<ListenerGuard>,
}

fn current_route() -> Option<String> {
    let path = web::window()?.location().pathname().ok()?;
    Some(route_key(&path).to_owned())
}

impl SmoothScroll {
    pub fn mount(config: ScrollConfig) -> Self {
        let observers: Rc<RefCell<Vec<FrameObserver>>> = Rc::new(RefCell::new(Vec::new()));
        let observers_tick = observers.clone();
        let controller = Rc::new_cyclic(|weak: &Weak<RefCell<Controller>>| {
            let weak = weak.clone();
            let scheduler = RafScheduler::new(move |ts: f64| {
                let Some(c) = weak.upgrade() else {
                    return;
                };
                c.borrow_mut().on_frame(ts);
                let c = c.borrow();
                for obs in observers_tick.borrow_mut().iter_mut() {
                    obs(&c);
                }
            });
            RefCell::new(ScrollMotionController::new(scheduler, WindowSurface))
        });

        let touch_sync = config.touch_sync;
        {
            let mut c = controller.borrow_mut();
            if let Some(route) = current_route() {
                c.notify_navigation(&route);
            }
            c.start(config);
        }

        let mut listeners = Vec::new();

        let c = controller.clone();
        listeners.extend(ListenerGuard::on_window(
            "wheel",
            Some(false),
            move |ev: web::WheelEvent| {
                if ev.ctrl_key() {
                    return; // pinch-zoom
                }
                ev.prevent_default();
                c.borrow_mut()
                    .on_wheel(ev.delta_y() as f32, WheelDeltaMode::from_dom(ev.delta_mode()));
            },
        ));

        let touch = Rc::new(RefCell::new(TouchTracker::default()));
        let t = touch.clone();
        listeners.extend(ListenerGuard::on_window(
            "touchstart",
            Some(true),
            move |ev: web::TouchEvent| {
                if let Some(p) = ev.touches().get(0) {
                    t.borrow_mut().begin(p.client_y() as f32);
                }
            },
        ));
        if touch_sync {
            let c = controller.clone();
            let t = touch.clone();
            listeners.extend(ListenerGuard::on_window(
                "touchmove",
                Some(false),
                move |ev: web::TouchEvent| {
                    let Some(p) = ev.touches().get(0) else {
                        return;
                    };
                    let delta = t.borrow_mut().drag(p.client_y() as f32);
                    if delta.abs() < TOUCH_DEADZONE_PX {
                        return;
                    }
                    ev.prevent_default();
                    c.borrow_mut().on_touch(delta);
                },
            ));
        }
        let t = touch.clone();
        listeners.extend(ListenerGuard::on_window(
            "touchend",
            Some(true),
            move |_: web::Event| t.borrow_mut().end(),
        ));

        // Scrollbar drags, keyboard and anchor jumps move the window directly.
        let c = controller.clone();
        listeners.extend(ListenerGuard::on_window(
            "scroll",
            Some(true),
            move |_: web::Event| {
                if let Some(y) = web::window().and_then(|w| w.scroll_y().ok()) {
                    if let Ok(mut c) = c.try_borrow_mut() {
                        c.on_native_scroll(y as f32);
                    }
                }
            },
        ));

        let c = controller.clone();
        listeners.extend(ListenerGuard::on_window(
            "popstate",
            None,
            move |_: web::Event| {
                if let Some(route) = current_route() {
                    c.borrow_mut().notify_navigation(&route);
                }
            },
        ));

        Self {
            controller,
            observers,
            listeners,
        }
    }

    pub fn observe(&self, observer: FrameObserver) {
        self.observers.borrow_mut().push(observer);
    }

    /// Route changes made with `history.pushState` do not emit `popstate`;
    /// routers call this after mounting the new view.
    pub fn notify_navigation(&self, route: &str) {
        self.controller.borrow_mut().notify_navigation(route);
    }

    /// Cancel the frame loop and detach every listener. Idempotent.
    pub fn stop(&mut self) {
        self.controller.borrow_mut().stop();
        self.listeners.clear();
        self.observers.borrow_mut().clear();
    }
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        self.stop();
    }
}

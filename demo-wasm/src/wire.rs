//! Event listeners and the animation-frame loop around one controller.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, MutationObserver, MutationObserverInit, PointerEvent};

use driftboat::{DragController, DragObserver, Vec2};

use crate::dom;
use crate::surface::DomSurface;

/// Forwards splashes to the page's `createSplash(x, y)`.
pub struct JsSplash {
    callback: Option<js_sys::Function>,
}

impl JsSplash {
    pub fn new(callback: Option<js_sys::Function>) -> Self {
        JsSplash { callback }
    }
}

impl DragObserver for JsSplash {
    fn on_splash(&mut self, x: f64, y: f64) {
        let Some(f) = &self.callback else { return };
        if let Err(e) = f.call2(&JsValue::NULL, &x.into(), &y.into()) {
            log::warn!("createSplash threw: {:?}", e);
        }
    }
}

pub type Controller = DragController<DomSurface, JsSplash>;

/// Controller plus the frame-loop bookkeeping shared by every listener.
pub struct Driver {
    pub controller: RefCell<Controller>,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    scheduled: Cell<bool>,
}

impl Driver {
    pub fn new(controller: Controller) -> Rc<Self> {
        let driver = Rc::new(Driver {
            controller: RefCell::new(controller),
            frame: RefCell::new(None),
            scheduled: Cell::new(false),
        });
        let weak = Rc::downgrade(&driver);
        *driver.frame.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            if let Some(d) = weak.upgrade() {
                d.on_frame(ts);
            }
        }) as Box<dyn FnMut(f64)>));
        driver
    }

    /// Run `f` against the controller, then start the frame loop if it asks for one.
    /// Re-entrant calls (a page callback poking the handle mid-update) are dropped.
    pub fn with<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> Option<R> {
        let out = {
            let Ok(mut c) = self.controller.try_borrow_mut() else {
                log::debug!("controller busy, dropping re-entrant call");
                return None;
            };
            f(&mut c)
        };
        self.ensure_frame();
        Some(out)
    }

    fn ensure_frame(&self) {
        if self.scheduled.get() {
            return;
        }
        let wants = self.controller.try_borrow().map(|c| c.needs_frame()).unwrap_or(false);
        if !wants {
            return;
        }
        if let Some(cb) = self.frame.borrow().as_ref() {
            self.scheduled.set(true);
            dom::request_animation_frame(cb);
        }
    }

    fn on_frame(&self, ts: f64) {
        self.scheduled.set(false);
        if let Ok(mut c) = self.controller.try_borrow_mut() {
            c.tick(ts);
        }
        self.ensure_frame();
    }
}

/// Attach every listener the controller needs.
pub fn attach(driver: &Rc<Driver>) {
    let (element, gated) = {
        let c = driver.controller.borrow();
        (c.surface().element().clone(), c.config().is_gated())
    };

    let d = driver.clone();
    dom::listen(&element, "pointerdown", false, move |e: Event| {
        let Ok(e) = e.dyn_into::<PointerEvent>() else { return };
        if d.with(|c| c.pointer_down(e.pointer_id())) == Some(true) {
            e.prevent_default();
        }
    });

    let d = driver.clone();
    dom::listen(&element, "pointermove", false, move |e: Event| {
        let Ok(e) = e.dyn_into::<MouseEvent>() else { return };
        let client = Vec2::new(e.client_x() as f64, e.client_y() as f64);
        d.with(|c| c.pointer_move(client, dom::now()));
    });

    for name in ["pointerup", "pointercancel"] {
        let d = driver.clone();
        dom::listen(&element, name, false, move |e: Event| {
            let cancel = e.type_() == "pointercancel";
            d.with(|c| {
                if cancel {
                    c.pointer_cancel(dom::now())
                } else {
                    c.pointer_up(dom::now())
                }
            });
        });
    }

    let Some(window) = dom::window() else { return };

    for name in ["pointerup", "pointercancel"] {
        let d = driver.clone();
        dom::listen(&window, name, false, move |_: Event| {
            d.with(|c| c.end_drag(dom::now()));
        });
    }

    let d = driver.clone();
    dom::listen(&window, "pointermove", false, move |e: Event| {
        let Ok(e) = e.dyn_into::<MouseEvent>() else { return };
        let buttons = e.buttons();
        d.with(|c| c.window_pointer_move(buttons, dom::now()));
    });

    let d = driver.clone();
    dom::listen(&window, "blur", false, move |_: Event| {
        d.with(|c| c.blur(dom::now()));
    });

    let d = driver.clone();
    dom::listen(&window, "resize", true, move |_: Event| {
        d.with(|c| c.resize());
    });

    if gated {
        observe_classes(driver, &element);
    }
}

fn observe_classes(driver: &Rc<Driver>, element: &web_sys::HtmlElement) {
    let d = driver.clone();
    let cb = Closure::wrap(Box::new(move || {
        d.with(|c| c.classes_changed());
    }) as Box<dyn FnMut()>);
    let observer = match MutationObserver::new(cb.as_ref().unchecked_ref()) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("MutationObserver unavailable: {:?}", e);
            return;
        }
    };
    let init = MutationObserverInit::new();
    init.set_attributes(true);
    init.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("class")));
    observer.observe_with_options(element, &init).ok();
    cb.forget();
}

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use driftboat::Rect;

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
pub fn now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn query(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn query_in(parent: &Element, selector: &str) -> Option<Element> {
    parent.query_selector(selector).ok().flatten()
}

pub fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn set_body_style(name: &str, value: &str) {
    if let Some(body) = document().and_then(|d| d.body()) {
        body.style().set_property(name, value).ok();
    }
}

pub fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) {
    if let Some(w) = window() {
        w.request_animation_frame(f.as_ref().unchecked_ref()).ok();
    }
}

/// Attach `handler` to `target` for the lifetime of the page.
pub fn listen(target: &EventTarget, event: &str, passive: bool, handler: impl FnMut(Event) + 'static) {
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    let opts = AddEventListenerOptions::new();
    opts.set_passive(passive);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            cb.as_ref().unchecked_ref(),
            &opts,
        )
        .ok();
    cb.forget();
}

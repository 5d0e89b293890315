//! `Surface` implementation over live DOM nodes.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Animation, HtmlElement};

use driftboat::{Cursor, DragConfig, DragError, Length, Rect, Surface, Vec2};

use crate::dom;

/// The boat element and its wave container.
pub struct DomSurface {
    element: HtmlElement,
    container: HtmlElement,
    wave_selector: String,
}

impl DomSurface {
    /// Look up both nodes. Either one missing is an error the caller turns into "no controller".
    pub fn bind(config: &DragConfig) -> Result<Self, DragError> {
        let element = dom::query(&config.element_selector)
            .ok_or_else(|| DragError::ElementNotFound(config.element_selector.clone()))?;
        let container = dom::query(&config.container_selector)
            .ok_or_else(|| DragError::ContainerNotFound(config.container_selector.clone()))?;
        Ok(DomSurface {
            element,
            container,
            wave_selector: config.wave_selector.clone(),
        })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    fn style(&self, name: &str, value: &str) {
        self.element.style().set_property(name, value).ok();
    }

    fn clear_style(&self, name: &str) {
        self.element.style().remove_property(name).ok();
    }

    fn inline_length(&self, name: &str) -> Option<Length> {
        let value = self.element.style().get_property_value(name).ok()?;
        Length::parse(&value)
    }

    fn write_length(&self, name: &str, value: Option<Length>) {
        match value {
            Some(len) if len.is_finite() => self.style(name, &len.to_string()),
            Some(_) => {}
            None => self.clear_style(name),
        }
    }

    /// `element.getAnimations()`, CSS animations and script-driven ones alike.
    fn animations(&self) -> Vec<Animation> {
        let Ok(get) = js_sys::Reflect::get(&self.element, &JsValue::from_str("getAnimations")) else {
            return Vec::new();
        };
        let Ok(get) = get.dyn_into::<js_sys::Function>() else {
            return Vec::new();
        };
        let Ok(list) = get.call0(&self.element) else {
            return Vec::new();
        };
        js_sys::Array::from(&list)
            .iter()
            .filter_map(|a| a.dyn_into::<Animation>().ok())
            .collect()
    }

    fn find_animation(&self, name: &str) -> Option<Animation> {
        self.animations().into_iter().find(|a| {
            js_sys::Reflect::get(a, &JsValue::from_str("animationName"))
                .ok()
                .and_then(|n| n.as_string())
                .is_some_and(|n| n == name)
        })
    }
}

impl Surface for DomSurface {
    fn element_rect(&self) -> Rect {
        dom::rect_of(&self.element)
    }

    fn container_rect(&self) -> Rect {
        dom::rect_of(&self.container)
    }

    fn wave_rect(&self) -> Option<Rect> {
        dom::query_in(&self.container, &self.wave_selector)
            .or_else(|| dom::query(&self.wave_selector).map(Into::into))
            .map(|el| dom::rect_of(&el))
    }

    fn element_size(&self) -> Vec2 {
        Vec2::new(self.element.offset_width() as f64, self.element.offset_height() as f64)
    }

    fn viewport_width(&self) -> f64 {
        dom::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(f64::INFINITY)
    }

    fn left(&self) -> Option<Length> {
        self.inline_length("left")
    }

    fn bottom(&self) -> Option<Length> {
        self.inline_length("bottom")
    }

    fn set_left(&mut self, value: Option<Length>) {
        self.write_length("left", value);
    }

    fn set_top(&mut self, value: Option<Length>) {
        self.write_length("top", value);
    }

    fn set_bottom(&mut self, value: Option<Length>) {
        match value {
            None => self.style("bottom", "auto"),
            some => self.write_length("bottom", some),
        }
    }

    fn set_rotation(&mut self, degrees: Option<f64>) {
        match degrees {
            Some(d) if d.is_finite() => self.style("transform", &format!("rotate({}deg)", d)),
            _ => self.clear_style("transform"),
        }
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.style("opacity", &opacity.to_string());
    }

    fn clear_animation_delay(&mut self) {
        self.clear_style("animation-delay");
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn add_class(&mut self, class: &str) {
        self.element.class_list().add_1(class).ok();
    }

    fn remove_class(&mut self, class: &str) {
        self.element.class_list().remove_1(class).ok();
    }

    fn animation_time(&self, name: &str) -> Option<f64> {
        self.find_animation(name)?.current_time()
    }

    fn set_animation_time(&mut self, name: &str, time_ms: f64) -> bool {
        match self.find_animation(name) {
            Some(anim) => {
                anim.set_current_time(Some(time_ms));
                true
            }
            None => false,
        }
    }

    fn cancel_animations(&mut self) {
        for anim in self.animations() {
            anim.cancel();
        }
    }

    fn set_text_selection(&mut self, enabled: bool) {
        dom::set_body_style("user-select", if enabled { "" } else { "none" });
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.style("cursor", cursor.as_css());
    }

    fn set_interactive(&mut self, enabled: bool) {
        self.style("pointer-events", if enabled { "auto" } else { "none" });
    }

    fn capture_pointer(&mut self, pointer_id: i32) -> Result<(), DragError> {
        self.element
            .set_pointer_capture(pointer_id)
            .map_err(|e| DragError::PointerCapture(format!("{:?}", e)))
    }
}

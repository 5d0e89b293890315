//! In-memory layout model implementing [`Surface`].
//!
//! Positions the element from its inline `left`/`top`/`bottom` the way
//! absolute positioning would, tracks marker classes, and runs named
//! animations bound to classes. Used for tests, benches, and replaying a
//! sequence without a browser.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use crate::error::DragError;
use crate::geometry::{Length, Rect};
use crate::surface::{Cursor, Surface};
use crate::vec::Vec2;

/// A declarative animation currently applied to the element.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlessAnimation {
    pub name: String,
    pub time_ms: f64,
}

/// Inline style of the element.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineStyle {
    pub left: Option<Length>,
    pub top: Option<Length>,
    pub bottom: Option<Length>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub animation_delay_cleared: bool,
}

/// Headless element-in-container layout.
#[derive(Clone, Debug)]
pub struct HeadlessSurface {
    pub container: Rect,
    pub element_size: Vec2,
    pub viewport_width: f64,
    pub wave: Option<Rect>,
    /// Where the page stylesheet places the element when no inline position is set,
    /// relative to the container.
    pub resting: Vec2,
    pub style: InlineStyle,
    pub classes: Vec<String>,
    pub animations: Vec<HeadlessAnimation>,
    /// `(class, animation)` pairs: adding the class starts the animation.
    pub class_animations: Vec<(String, String)>,
    /// `(class, dy)` pairs: extra vertical offset the stylesheet applies while the class is present.
    pub class_offsets: Vec<(String, f64)>,
    pub text_selection: bool,
    pub cursor: Option<Cursor>,
    pub interactive: bool,
    pub captured_pointer: Option<i32>,
    pub refuse_capture: bool,
    /// Number of times the wave node was measured.
    pub wave_measurements: core::cell::Cell<usize>,
}

impl HeadlessSurface {
    /// A `width` x `height` container at client origin `(0, 0)` holding an element of `element_size`.
    pub fn new(width: f64, height: f64, element_size: Vec2) -> Self {
        HeadlessSurface {
            container: Rect::new(0.0, 0.0, width, height),
            element_size,
            viewport_width: 1280.0,
            wave: None,
            resting: Vec2::zero(),
            style: InlineStyle {
                left: None,
                top: None,
                bottom: None,
                rotation: None,
                opacity: None,
                animation_delay_cleared: false,
            },
            classes: Vec::new(),
            animations: Vec::new(),
            class_animations: Vec::new(),
            class_offsets: Vec::new(),
            text_selection: true,
            cursor: None,
            interactive: false,
            captured_pointer: None,
            refuse_capture: false,
            wave_measurements: core::cell::Cell::new(0),
        }
    }

    pub fn with_origin(mut self, left: f64, top: f64) -> Self {
        self.container.left = left;
        self.container.top = top;
        self
    }

    pub fn with_viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = width;
        self
    }

    /// Place a wave node whose top sits `top` px below the container top.
    pub fn with_wave(mut self, top: f64, height: f64) -> Self {
        self.wave = Some(Rect::new(
            self.container.left,
            self.container.top + top,
            self.container.width,
            height,
        ));
        self
    }

    pub fn with_resting(mut self, pos: Vec2) -> Self {
        self.resting = pos;
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Bind an animation to a class. Adding the class starts the animation at time zero.
    pub fn with_class_animation(mut self, class: &str, animation: &str) -> Self {
        self.class_animations.push((class.to_string(), animation.to_string()));
        if self.has_class(class) {
            self.start_animation(animation);
        }
        self
    }

    pub fn with_class_offset(mut self, class: &str, dy: f64) -> Self {
        self.class_offsets.push((class.to_string(), dy));
        self
    }

    /// Resize the container in place.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.container.width = width;
        self.container.height = height;
    }

    /// Advance every running animation by `dt_ms`.
    pub fn advance_animations(&mut self, dt_ms: f64) {
        for anim in self.animations.iter_mut() {
            anim.time_ms += dt_ms;
        }
    }

    pub fn animation(&self, name: &str) -> Option<&HeadlessAnimation> {
        self.animations.iter().find(|a| a.name == name)
    }

    /// Element position relative to the container.
    pub fn element_offset(&self) -> Vec2 {
        let r = self.element_rect();
        r.offset_in(&self.container)
    }

    fn start_animation(&mut self, name: &str) {
        if self.animation(name).is_none() {
            self.animations.push(HeadlessAnimation { name: name.to_string(), time_ms: 0.0 });
        }
    }

    fn class_offset(&self) -> f64 {
        self.class_offsets
            .iter()
            .filter(|(c, _)| self.has_class(c))
            .map(|(_, dy)| *dy)
            .sum()
    }
}

impl Surface for HeadlessSurface {
    fn element_rect(&self) -> Rect {
        let c = &self.container;
        let h = self.element_size.y;
        let x = self.style.left.map_or(self.resting.x, |l| l.to_px(c.width));
        let y = match (self.style.top, self.style.bottom) {
            (Some(top), _) => top.to_px(c.height),
            (None, Some(bottom)) => c.height - bottom.to_px(c.height) - h,
            (None, None) => self.resting.y,
        };
        Rect::new(
            c.left + x,
            c.top + y + self.class_offset(),
            self.element_size.x,
            h,
        )
    }

    fn container_rect(&self) -> Rect {
        self.container
    }

    fn wave_rect(&self) -> Option<Rect> {
        self.wave_measurements.set(self.wave_measurements.get() + 1);
        self.wave
    }

    fn element_size(&self) -> Vec2 {
        self.element_size
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn left(&self) -> Option<Length> {
        self.style.left
    }

    fn bottom(&self) -> Option<Length> {
        self.style.bottom
    }

    fn set_left(&mut self, value: Option<Length>) {
        self.style.left = value;
    }

    fn set_top(&mut self, value: Option<Length>) {
        self.style.top = value;
    }

    fn set_bottom(&mut self, value: Option<Length>) {
        self.style.bottom = value;
    }

    fn set_rotation(&mut self, degrees: Option<f64>) {
        self.style.rotation = degrees;
    }

    fn set_opacity(&mut self, opacity: f64) {
        self.style.opacity = Some(opacity);
    }

    fn clear_animation_delay(&mut self) {
        self.style.animation_delay_cleared = true;
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        self.classes.push(class.to_string());
        let started: Vec<String> = self
            .class_animations
            .iter()
            .filter(|(c, _)| c == class)
            .map(|(_, a)| a.clone())
            .collect();
        for name in started {
            self.start_animation(&name);
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
        let class_animations = &self.class_animations;
        let classes = &self.classes;
        // An animation keeps running while any class that drives it is still present
        self.animations.retain(|a| {
            class_animations
                .iter()
                .filter(|(_, name)| *name == a.name)
                .any(|(c, _)| classes.iter().any(|present| present == c))
        });
    }

    fn animation_time(&self, name: &str) -> Option<f64> {
        self.animation(name).map(|a| a.time_ms)
    }

    fn set_animation_time(&mut self, name: &str, time_ms: f64) -> bool {
        match self.animations.iter_mut().find(|a| a.name == name) {
            Some(anim) => {
                anim.time_ms = time_ms;
                true
            }
            None => false,
        }
    }

    fn cancel_animations(&mut self) {
        self.animations.clear();
    }

    fn set_text_selection(&mut self, enabled: bool) {
        self.text_selection = enabled;
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = Some(cursor);
    }

    fn set_interactive(&mut self, enabled: bool) {
        self.interactive = enabled;
    }

    fn capture_pointer(&mut self, pointer_id: i32) -> Result<(), DragError> {
        if self.refuse_capture {
            return Err(DragError::PointerCapture("capture refused by host".to_string()));
        }
        self.captured_pointer = Some(pointer_id);
        Ok(())
    }
}

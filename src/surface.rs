//! The layout host the controller drives.
//!
//! A `Surface` owns the two bound nodes (the movable element and its
//! container) and answers layout queries about them. In a browser this is a
//! thin wrapper over the DOM; [`HeadlessSurface`](crate::headless::HeadlessSurface)
//! is an in-memory model of the same contract.

use crate::error::DragError;
use crate::geometry::{Length, Rect};
use crate::vec::Vec2;

/// Pointer cursor hint for the element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// Layout, style, class and animation access for one element inside one container.
///
/// Every query is read live. Implementations must not cache rects, since
/// the container can resize between any two calls.
pub trait Surface {
    // ---- measurement ----

    /// Element bounding rect in client coordinates, including transforms and running animations.
    fn element_rect(&self) -> Rect;

    /// Container bounding rect in client coordinates.
    fn container_rect(&self) -> Rect;

    /// Wave node bounding rect, if one exists.
    fn wave_rect(&self) -> Option<Rect>;

    /// Element layout size (`offsetWidth`, `offsetHeight`), unaffected by transforms.
    fn element_size(&self) -> Vec2;

    /// Viewport width, for the device-class fling multiplier.
    fn viewport_width(&self) -> f64;

    // ---- inline style ----

    /// Inline `left`, if set to a parseable length.
    fn left(&self) -> Option<Length>;

    /// Inline `bottom`, if set to a parseable length.
    fn bottom(&self) -> Option<Length>;

    /// Write inline `left`; `None` clears it.
    fn set_left(&mut self, value: Option<Length>);

    /// Write inline `top`; `None` clears it.
    fn set_top(&mut self, value: Option<Length>);

    /// Write inline `bottom`; `None` sets it to `auto`.
    fn set_bottom(&mut self, value: Option<Length>);

    /// Write a `rotate()` transform in degrees; `None` clears the transform.
    fn set_rotation(&mut self, degrees: Option<f64>);

    fn set_opacity(&mut self, opacity: f64);

    fn clear_animation_delay(&mut self);

    // ---- marker classes ----

    fn has_class(&self, class: &str) -> bool;

    fn add_class(&mut self, class: &str);

    fn remove_class(&mut self, class: &str);

    // ---- declarative animations ----

    /// Elapsed time of the named running animation.
    fn animation_time(&self, name: &str) -> Option<f64>;

    /// Seek the named running animation. Returns false if it is not running.
    fn set_animation_time(&mut self, name: &str, time_ms: f64) -> bool;

    /// Cancel every animation currently applied to the element.
    fn cancel_animations(&mut self);

    // ---- interaction ----

    /// Toggle page-wide text selection.
    fn set_text_selection(&mut self, enabled: bool);

    fn set_cursor(&mut self, cursor: Cursor);

    /// Toggle whether the element receives pointer events at all.
    fn set_interactive(&mut self, enabled: bool);

    /// Route further events for `pointer_id` to the element. Best effort.
    fn capture_pointer(&mut self, pointer_id: i32) -> Result<(), DragError>;
}

//! Layout geometry: bounding rectangles and unit-tagged lengths.

use crate::vec::Vec2;

/// Bounding box in client (viewport) coordinates, as returned by
/// `getBoundingClientRect()`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Rect { left, top, width, height }
    }

    pub fn right(&self) -> f64 { self.left + self.width }

    pub fn bottom(&self) -> f64 { self.top + self.height }

    pub fn origin(&self) -> Vec2 { Vec2::new(self.left, self.top) }

    pub fn size(&self) -> Vec2 { Vec2::new(self.width, self.height) }

    /// Top-left corner of `self` relative to the top-left corner of `outer`.
    pub fn offset_in(&self, outer: &Rect) -> Vec2 {
        self.origin() - outer.origin()
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f64 { self.left + self.width * 0.5 }
}

/// A CSS length as written to an inline style.
///
/// Manual positioning writes pixels; the hand-off into the looping drift
/// animation must write a percentage of the container, because the drift
/// keyframes are authored in percent. Keeping the unit in the type means a
/// percentage is never mistaken for a pixel offset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Length {
    Px(f64),
    Percent(f64),
}

impl Length {
    /// Resolve to pixels against `basis` (the containing block's width or height).
    pub fn to_px(self, basis: f64) -> f64 {
        match self {
            Length::Px(v) => v,
            Length::Percent(p) => p * basis / 100.0,
        }
    }

    /// Raw numeric value, whatever the unit.
    pub fn value(self) -> f64 {
        match self {
            Length::Px(v) | Length::Percent(v) => v,
        }
    }

    pub fn is_finite(self) -> bool { self.value().is_finite() }

    pub fn is_percent(self) -> bool { matches!(self, Length::Percent(_)) }

    /// Parse an inline style value (`"12.5px"`, `"40%"`, `"0"`).
    ///
    /// Returns `None` for empty, `auto`, or unparseable input.
    pub fn parse(text: &str) -> Option<Length> {
        let text = text.trim();
        if let Some(num) = text.strip_suffix("px") {
            return num.trim().parse::<f64>().ok().map(Length::Px);
        }
        if let Some(num) = text.strip_suffix('%') {
            return num.trim().parse::<f64>().ok().map(Length::Percent);
        }
        // Unitless zero is legal CSS
        match text.parse::<f64>() {
            Ok(v) if v == 0.0 => Some(Length::Px(0.0)),
            _ => None,
        }
    }
}

impl core::fmt::Display for Length {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Percent(p) => write!(f, "{}%", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_resolves_against_basis() {
        assert_eq!(Length::Percent(25.0).to_px(800.0), 200.0);
        assert_eq!(Length::Px(17.0).to_px(800.0), 17.0);
    }

    #[test]
    fn parse_units() {
        assert_eq!(Length::parse("12.5px"), Some(Length::Px(12.5)));
        assert_eq!(Length::parse(" 40% "), Some(Length::Percent(40.0)));
        assert_eq!(Length::parse("0"), Some(Length::Px(0.0)));
        assert_eq!(Length::parse("auto"), None);
        assert_eq!(Length::parse(""), None);
    }

    #[test]
    fn offset_relative_to_container() {
        let container = Rect::new(10.0, 20.0, 500.0, 300.0);
        let el = Rect::new(60.0, 70.0, 40.0, 30.0);
        assert_eq!(el.offset_in(&container), Vec2::new(50.0, 50.0));
    }
}

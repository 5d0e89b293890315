//! Wave surface measurement and the resting line derived from it.

use crate::geometry::Rect;
use crate::vec::Vec2;

/// Fraction of the wave node's height at which the visible crest sits
/// (the wave artwork is 800 units tall with its surface at 500).
pub const WAVE_CREST_PROPORTION: f64 = 500.0 / 800.0;

/// Gap in pixels between the wave line and the element's resting bottom edge.
pub const REST_GAP: f64 = 8.0;

/// Inputs handed to a custom rest-offset function.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RestContext {
    /// Container bounding rect, freshly measured.
    pub container: Rect,
    /// Wave offset from the container top, possibly cached.
    pub wave_offset: f64,
    /// Element layout size (`offsetWidth`, `offsetHeight`).
    pub element_size: Vec2,
}

/// Caller-supplied replacement for the default rest-offset formula.
pub type RestOffsetFn = dyn Fn(&RestContext) -> f64;

/// Lazily measured wave offset, invalidated on resize.
#[derive(Clone, Debug)]
pub struct WaveLevel {
    cached: Option<f64>,
    fallback_ratio: f64,
}

impl WaveLevel {
    pub fn new(fallback_ratio: f64) -> Self {
        WaveLevel { cached: None, fallback_ratio }
    }

    /// Vertical offset of the wave surface from the container top.
    ///
    /// With a wave node the measurement is cached until [`invalidate`](Self::invalidate).
    /// Without one the fallback ratio is applied to the live container height
    /// and nothing is cached. `measure_wave` only runs on a cache miss.
    pub fn offset<F>(&mut self, container: &Rect, measure_wave: F) -> f64
    where
        F: FnOnce() -> Option<Rect>,
    {
        if let Some(y) = self.cached {
            return y;
        }
        let Some(wave) = measure_wave() else {
            return container.height * self.fallback_ratio;
        };
        let y = wave.top + WAVE_CREST_PROPORTION * wave.height - container.top;
        if y.is_finite() {
            log::trace!("wave offset measured: {}", y);
            self.cached = Some(y);
            y
        } else {
            container.height * self.fallback_ratio
        }
    }

    pub fn cached(&self) -> Option<f64> {
        self.cached
    }

    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

/// Default distance from the container bottom to the resting line.
pub fn default_rest_offset(ctx: &RestContext) -> f64 {
    ctx.container.height - ctx.wave_offset - REST_GAP
}

/// Resolve the rest offset, preferring `custom` when supplied and finite.
pub fn resolve_rest_offset(ctx: &RestContext, custom: Option<&RestOffsetFn>) -> f64 {
    if let Some(f) = custom {
        let v = f(ctx);
        if v.is_finite() {
            return v;
        }
        log::warn!("custom rest offset returned {}, using default", v);
    }
    default_rest_offset(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measured_offset_uses_crest_proportion() {
        let container = Rect::new(0.0, 100.0, 1000.0, 400.0);
        let wave = Rect::new(0.0, 200.0, 1000.0, 160.0);
        let mut level = WaveLevel::new(0.62);
        assert_eq!(level.offset(&container, || Some(wave)), 200.0);
        assert_eq!(level.cached(), Some(200.0));
    }

    #[test]
    fn fallback_is_not_cached() {
        let mut level = WaveLevel::new(0.5);
        let small = Rect::new(0.0, 0.0, 100.0, 200.0);
        let big = Rect::new(0.0, 0.0, 100.0, 400.0);
        assert_eq!(level.offset(&small, || None), 100.0);
        assert_eq!(level.offset(&big, || None), 200.0);
        assert_eq!(level.cached(), None);
    }

    #[test]
    fn default_rest_offset_formula() {
        let ctx = RestContext {
            container: Rect::new(0.0, 0.0, 800.0, 600.0),
            wave_offset: 400.0,
            element_size: Vec2::new(60.0, 40.0),
        };
        assert_eq!(default_rest_offset(&ctx), 192.0);
    }
}

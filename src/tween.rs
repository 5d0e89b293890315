//! Time-based scalar tweens.

use crate::easing::Easing;

/// A one-shot tween of a single value, sampled with absolute timestamps.
///
/// Tweens do not own a clock. The caller samples them from its frame
/// callback; dropping the tween cancels it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64, easing: impl Into<Easing>) -> Self {
        Tween { from, to, start_ms, duration_ms, easing: easing.into() }
    }

    /// Linear progress in `[0, 1]` at `now_ms`.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if !(self.duration_ms > 0.0) {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Value at `now_ms`. Holds `to` once finished.
    pub fn sample(&self, now_ms: f64) -> f64 {
        let p = self.progress(now_ms);
        if p >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(p)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }
}

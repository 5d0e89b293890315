//! Recent pointer samples and the fling velocity derived from them.

use alloc::collections::VecDeque;

use crate::float::Float;
use crate::vec::Vec2;

/// Number of pointer samples retained while dragging.
pub const HISTORY_CAPACITY: usize = 6;

/// Floor applied to the sample span so near-simultaneous samples cannot blow up the velocity.
pub const MIN_SAMPLE_SPAN_MS: f64 = 16.0;

/// Seconds per simulation frame used to turn px/s into px/frame.
pub const FRAME_SECONDS: f64 = 0.016;

/// Tilt per pixel of horizontal pointer travel between the last two samples.
pub const DRAG_TILT_FACTOR: f64 = 2.0;

/// Maximum tilt while dragging, in degrees.
pub const DRAG_TILT_LIMIT: f64 = 25.0;

/// One pointer sample in client coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sample {
    pub pos: Vec2,
    pub time_ms: f64,
}

/// Fixed-capacity FIFO of pointer samples, oldest first.
#[derive(Clone, Debug, Default)]
pub struct PositionHistory {
    samples: VecDeque<Sample>,
}

impl PositionHistory {
    pub fn new() -> Self {
        PositionHistory { samples: VecDeque::with_capacity(HISTORY_CAPACITY + 1) }
    }

    /// Append a sample, evicting the oldest beyond [`HISTORY_CAPACITY`].
    pub fn push(&mut self, pos: Vec2, time_ms: f64) {
        self.samples.push_back(Sample { pos, time_ms });
        while self.samples.len() > HISTORY_CAPACITY {
            self.samples.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.front()
    }

    pub fn newest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Cosmetic tilt in degrees from the two most recent samples.
    pub fn tilt(&self) -> Option<f64> {
        let n = self.samples.len();
        if n < 2 {
            return None;
        }
        let a = self.samples[n - 2];
        let b = self.samples[n - 1];
        Some(((b.pos.x - a.pos.x) * DRAG_TILT_FACTOR).clamp_abs(DRAG_TILT_LIMIT))
    }

    /// Release velocity in px/frame, from the oldest and newest retained samples.
    ///
    /// `scale` is the device-class multiplier. Fewer than two samples yields zero.
    pub fn launch_velocity(&self, scale: f64) -> Vec2 {
        let (Some(oldest), Some(newest)) = (self.oldest(), self.newest()) else {
            return Vec2::zero();
        };
        if self.samples.len() < 2 {
            return Vec2::zero();
        }
        let span_s = (newest.time_ms - oldest.time_ms).max(MIN_SAMPLE_SPAN_MS) / 1000.0;
        let v = (newest.pos - oldest.pos).scale(FRAME_SECONDS * scale / span_s);
        if v.is_finite() { v } else { Vec2::zero() }
    }
}

//! Observer trait for splash effects and controller progress.

use crate::controller::Phase;
use crate::vec::Vec2;

/// Receives the splash effect and optional progress notifications.
///
/// All methods have default no-op implementations.
pub trait DragObserver {
    /// Emit a splash at client coordinates `(x, y)`.
    fn on_splash(&mut self, _x: f64, _y: f64) {}

    /// Called after every phase transition.
    fn on_phase_change(&mut self, _from: Phase, _to: Phase) {}

    /// Called after each simulation frame while falling.
    fn on_frame(&mut self, _position: Vec2, _velocity: Vec2) {}
}

/// A no-op observer. Use when no splash effect is wired up.
pub struct NoOpDragObserver;

impl DragObserver for NoOpDragObserver {}

impl<F: FnMut(f64, f64)> DragObserver for F {
    fn on_splash(&mut self, x: f64, y: f64) {
        self(x, y)
    }
}

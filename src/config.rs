//! Configuration for the drag controller.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::Deserialize;

use crate::error::DragError;

/// Configuration for a [`DragController`](crate::controller::DragController).
///
/// Deserializes from the same camelCase option object a page script would
/// pass; every field is optional.
///
/// # Builder Pattern
/// ```
/// use driftboat::config::DragConfig;
///
/// let config = DragConfig::new()
///     .with_gravity(0.5)
///     .with_classes("visible", "launching")
///     .with_active_classes(["arrived"])
///     .with_launch(13.0, 3000.0);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DragConfig {
    /// Selector for the movable element. Default: `#waveBoat`.
    pub element_selector: String,
    /// Selector for the container. Default: `.wave-background`.
    pub container_selector: String,
    /// Selector for the wave node, looked up inside the container first. Default: `.wave-container-3`.
    pub wave_selector: String,
    /// Wave offset as a fraction of container height when no wave node exists. Default: 0.62.
    pub wave_fallback_ratio: f64,
    /// Downward acceleration in px/frame². Default: 0.4.
    pub gravity: f64,
    /// Marker class that runs the looping drift animation. Default: `visible`.
    pub drift_class: String,
    /// Marker class present while launching out of a splash. Default: `launching`.
    pub launch_class: String,
    /// Classes kept on through launch and drift, removed on grab.
    pub steady_classes: Vec<String>,
    /// If non-empty, grabbing is only allowed while one of these classes is present.
    pub active_classes: Vec<String>,
    /// Enable pointer interactivity once an active class appears.
    pub enable_pointer_on_active: bool,
    /// Clear any inline `animation-delay` on grab and on resume.
    pub clear_animation_delay: bool,
    /// Launch travel as a percentage of container width. Default: 13.
    pub launch_distance: f64,
    /// Launch tween duration. Default: 3000 ms.
    pub launch_duration_ms: f64,
    /// Duration of one drift loop. Default: 25000 ms.
    pub drift_duration_ms: f64,
    /// Name of the infinite drift keyframes. Default: `boatDrift`.
    pub drift_animation_name: String,
    /// Name of the vertical bob keyframes. Default: `boatBob`.
    pub bob_animation_name: String,
}

impl DragConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        DragConfig {
            element_selector: "#waveBoat".to_string(),
            container_selector: ".wave-background".to_string(),
            wave_selector: ".wave-container-3".to_string(),
            wave_fallback_ratio: 0.62,
            gravity: 0.4,
            drift_class: "visible".to_string(),
            launch_class: "launching".to_string(),
            steady_classes: Vec::new(),
            active_classes: Vec::new(),
            enable_pointer_on_active: false,
            clear_animation_delay: false,
            launch_distance: 13.0,
            launch_duration_ms: 3000.0,
            drift_duration_ms: 25000.0,
            drift_animation_name: "boatDrift".to_string(),
            bob_animation_name: "boatBob".to_string(),
        }
    }

    /// Parse a JSON option object and validate it.
    pub fn from_json(json: &str) -> Result<Self, DragError> {
        let config: DragConfig =
            serde_json::from_str(json).map_err(|e| DragError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_selectors(mut self, element: &str, container: &str) -> Self {
        self.element_selector = element.to_string();
        self.container_selector = container.to_string();
        self
    }

    pub fn with_wave(mut self, selector: &str, fallback_ratio: f64) -> Self {
        self.wave_selector = selector.to_string();
        self.wave_fallback_ratio = fallback_ratio;
        self
    }

    pub fn with_gravity(mut self, gravity: f64) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set the drift and launch marker classes.
    pub fn with_classes(mut self, drift: &str, launch: &str) -> Self {
        self.drift_class = drift.to_string();
        self.launch_class = launch.to_string();
        self
    }

    pub fn with_steady_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steady_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_active_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_classes = classes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_pointer_on_active(mut self, enabled: bool) -> Self {
        self.enable_pointer_on_active = enabled;
        self
    }

    pub fn with_clear_animation_delay(mut self, enabled: bool) -> Self {
        self.clear_animation_delay = enabled;
        self
    }

    /// Set launch distance (percent of container width) and duration.
    pub fn with_launch(mut self, distance_pct: f64, duration_ms: f64) -> Self {
        self.launch_distance = distance_pct;
        self.launch_duration_ms = duration_ms;
        self
    }

    pub fn with_drift(mut self, animation_name: &str, duration_ms: f64) -> Self {
        self.drift_animation_name = animation_name.to_string();
        self.drift_duration_ms = duration_ms;
        self
    }

    pub fn with_bob_animation(mut self, animation_name: &str) -> Self {
        self.bob_animation_name = animation_name.to_string();
        self
    }

    /// Check numeric fields.
    pub fn validate(&self) -> Result<(), DragError> {
        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(DragError::InvalidGravity(self.gravity));
        }
        if !(self.launch_duration_ms.is_finite() && self.launch_duration_ms > 0.0) {
            return Err(DragError::InvalidDuration {
                name: "launchDurationMs",
                value: self.launch_duration_ms,
            });
        }
        if !(self.drift_duration_ms.is_finite() && self.drift_duration_ms > 0.0) {
            return Err(DragError::InvalidDuration {
                name: "driftDurationMs",
                value: self.drift_duration_ms,
            });
        }
        if !(0.0..=1.0).contains(&self.wave_fallback_ratio) {
            return Err(DragError::InvalidRatio(self.wave_fallback_ratio));
        }
        if !self.launch_distance.is_finite() {
            return Err(DragError::InvalidLaunchDistance(self.launch_distance));
        }
        Ok(())
    }

    /// Classes stripped from the element when it is grabbed.
    pub fn animated_classes(&self) -> impl Iterator<Item = &str> {
        [self.drift_class.as_str(), self.launch_class.as_str()]
            .into_iter()
            .chain(self.steady_classes.iter().map(String::as_str))
            .filter(|c| !c.is_empty())
    }

    /// Whether grabbing requires an active class.
    pub fn is_gated(&self) -> bool {
        !self.active_classes.is_empty()
    }
}

impl Default for DragConfig {
    fn default() -> Self {
        Self::new()
    }
}

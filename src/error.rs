//! Error types for controller setup and host operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while binding or configuring a drag controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DragError {
    /// The movable element could not be found.
    #[error("element not found: {0}")]
    ElementNotFound(String),
    /// The container could not be found.
    #[error("container not found: {0}")]
    ContainerNotFound(String),
    /// Gravity must be finite and non-negative.
    #[error("gravity must be finite and non-negative, got {0}")]
    InvalidGravity(f64),
    /// A duration must be positive and finite.
    #[error("{name} must be a positive duration, got {value}")]
    InvalidDuration { name: &'static str, value: f64 },
    /// The wave fallback ratio must lie in [0, 1].
    #[error("wave fallback ratio must be in [0, 1], got {0}")]
    InvalidRatio(f64),
    /// Launch distance must be finite.
    #[error("launch distance must be finite, got {0}")]
    InvalidLaunchDistance(f64),
    /// The host refused pointer capture.
    #[error("pointer capture failed: {0}")]
    PointerCapture(String),
    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

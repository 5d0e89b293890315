//! Drag, fling, fall and splash physics for a decorative floating element.
//!
//! `driftboat` drives one element (a "boat") that normally rides a looping
//! CSS drift animation across an animated wave background. The user can grab
//! it, fling it, watch it fall under gravity, splash into the wave, and see it
//! launch back into the drift loop without a visible jump.
//!
//! # Features
//!
//! - **Single-owner positioning**: pointer, integrator, tween or declarative
//!   loop, never two at once
//! - **Fling velocity** from a 6-sample pointer history
//! - **Cyclic world**: horizontal and vertical wraparound while falling
//! - **Wave-aware landing** with a cached, resize-invalidated wave measurement
//! - **Seamless hand-off** back into percent-authored drift keyframes
//! - **Host-agnostic**: everything goes through the [`Surface`] trait;
//!   [`HeadlessSurface`] models it in memory
//! - **`no_std` compatible**: works in WASM without pulling in `std`

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod geometry;
pub mod easing;
pub mod tween;
pub mod history;
pub mod wave;
pub mod surface;
pub mod headless;
pub mod observer;
pub mod controller;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use geometry::{Length, Rect};
pub use easing::{CubicBezier, Easing, LAUNCH, OVERSHOOT};
pub use tween::Tween;
pub use history::{PositionHistory, Sample, HISTORY_CAPACITY};
pub use wave::{RestContext, WaveLevel};
pub use surface::{Cursor, Surface};
pub use headless::HeadlessSurface;
pub use observer::{DragObserver, NoOpDragObserver};
pub use controller::{DragController, Phase};
pub use config::DragConfig;
pub use error::DragError;

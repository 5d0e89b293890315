#![allow(dead_code)]

use driftboat::{DragConfig, DragController, DragObserver, HeadlessSurface, Phase, Vec2};

/// Frame interval used when pumping the controller.
pub const FRAME_MS: f64 = 16.0;

/// Records everything the controller reports.
#[derive(Default)]
pub struct Recorder {
    pub splashes: Vec<(f64, f64)>,
    pub phases: Vec<(Phase, Phase)>,
    pub frames: Vec<(Vec2, Vec2)>,
}

impl DragObserver for Recorder {
    fn on_splash(&mut self, x: f64, y: f64) {
        self.splashes.push((x, y));
    }

    fn on_phase_change(&mut self, from: Phase, to: Phase) {
        self.phases.push((from, to));
    }

    fn on_frame(&mut self, position: Vec2, velocity: Vec2) {
        self.frames.push((position, velocity));
    }
}

/// 1000x600 container at the client origin, 80x40 boat, wave crest at 400px
/// (rest line at 408px, resting top at 368px).
pub fn scene() -> HeadlessSurface {
    HeadlessSurface::new(1000.0, 600.0, Vec2::new(80.0, 40.0))
        .with_wave(300.0, 160.0)
        .with_resting(Vec2::new(200.0, 100.0))
        .with_class("visible")
        .with_class_animation("visible", "boatDrift")
}

pub type Controller = DragController<HeadlessSurface, Recorder>;

pub fn controller(surface: HeadlessSurface) -> Controller {
    DragController::new(surface, DragConfig::new(), Recorder::default()).unwrap()
}

pub fn controller_with(surface: HeadlessSurface, config: DragConfig) -> Controller {
    DragController::new(surface, config, Recorder::default()).unwrap()
}

/// Tick every frame until `done` holds or `max_frames` pass. Returns frames run.
pub fn run_until<F>(c: &mut Controller, now: &mut f64, max_frames: usize, done: F) -> usize
where
    F: Fn(&Controller) -> bool,
{
    for frame in 0..max_frames {
        if done(c) {
            return frame;
        }
        *now += FRAME_MS;
        c.tick(*now);
    }
    max_frames
}

/// Grab, drag through `points` (client coordinates, one every `FRAME_MS`), release.
pub fn fling(c: &mut Controller, now: &mut f64, points: &[(f64, f64)]) {
    assert!(c.pointer_down(1));
    for &(x, y) in points {
        c.pointer_move(Vec2::new(x, y), *now);
        *now += FRAME_MS;
    }
    c.pointer_up(*now);
}

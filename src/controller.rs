//! Drag, fling, fall, splash and drift-resume state machine.
//!
//! Exactly one driver owns the element's position at a time: the pointer
//! while [`Phase::Dragging`], the per-frame integrator while
//! [`Phase::Falling`], a manual tween while splashing or launching, and the
//! declarative drift animation otherwise. Every transition tears down the
//! previous driver before the next one writes a style.
//!
//! The controller never schedules work itself. The host forwards input
//! events and calls [`DragController::tick`] once per animation frame while
//! [`DragController::needs_frame`] is true.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::config::DragConfig;
use crate::easing::{LAUNCH, OVERSHOOT};
use crate::error::DragError;
use crate::float::Float;
use crate::geometry::{Length, Rect};
use crate::history::PositionHistory;
use crate::observer::{DragObserver, NoOpDragObserver};
use crate::surface::{Cursor, Surface};
use crate::tween::Tween;
use crate::vec::Vec2;
use crate::wave::{resolve_rest_offset, RestContext, RestOffsetFn, WaveLevel, REST_GAP};

/// Horizontal velocity retained per frame.
pub const AIR_DRAG: f64 = 0.99;
/// Tilt per px/frame of horizontal velocity while falling.
pub const FALL_TILT_FACTOR: f64 = 1.5;
/// Maximum tilt while falling, in degrees.
pub const FALL_TILT_LIMIT: f64 = 20.0;
/// Downward speed cap applied when a fall wraps back to the top.
pub const WRAP_FALL_SPEED_CAP: f64 = 8.0;
/// Delay between a landing and the start of the drift resume.
pub const LANDING_SETTLE_MS: f64 = 150.0;
/// Duration of the bob-up tween when released underwater.
pub const POP_DURATION_MS: f64 = 650.0;
/// Splash moment inside the bob-up tween.
pub const POP_SPLASH_MS: f64 = 295.0;
/// Delay between the end of the bob-up tween and the drift resume.
pub const POP_SETTLE_MS: f64 = 100.0;
/// Viewports narrower than this get the touch fling multiplier.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
/// Fling multiplier below [`MOBILE_BREAKPOINT_PX`].
pub const MOBILE_FLING_SCALE: f64 = 1.25;
/// Fling multiplier at and above [`MOBILE_BREAKPOINT_PX`].
pub const DESKTOP_FLING_SCALE: f64 = 0.5;
/// Horizontal span of one drift loop, in percent of the container (-5% to 105%).
pub const DRIFT_TRAVEL_PCT: f64 = 110.0;
/// How far left of the container the drift loop starts, in percent.
pub const DRIFT_ENTRY_PCT: f64 = 5.0;

const SPLASH_RISE: f64 = 0.25;
const SPLASH_NUDGE: f64 = 2.0;
const JUMP_EPSILON: f64 = 0.01;

/// Which driver currently owns the element's position.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Initial state; the page's own animation owns the element.
    Idle,
    /// The pointer owns the element.
    Dragging,
    /// The integrator owns the element.
    Falling,
    /// Landed or bobbing up; the simulation is frozen and the splash has fired or is pending.
    Splashing,
    /// The launch tween bridges into the drift loop.
    Launching,
    /// The drift loop owns the element again.
    Drifting,
}

/// Fling multiplier for the given viewport width.
pub fn fling_scale(viewport_width: f64) -> f64 {
    if viewport_width < MOBILE_BREAKPOINT_PX {
        MOBILE_FLING_SCALE
    } else {
        DESKTOP_FLING_SCALE
    }
}

/// Elapsed time to seed the drift loop with so it continues from `left_pct`.
pub fn drift_seed_ms(left_pct: f64, drift_duration_ms: f64) -> f64 {
    let progress = ((left_pct + DRIFT_ENTRY_PCT) / DRIFT_TRAVEL_PCT).clamp(0.0, 1.0);
    progress * drift_duration_ms
}

#[derive(Clone, Debug)]
enum Motion {
    /// Bob up (or down) to the resting line after an underwater release.
    Pop { tween: Tween, x: f64 },
    /// Launch forward out of the splash; `end_pct` is committed on completion.
    Launch { tween: Tween, end_pct: f64 },
}

#[derive(Copy, Clone, Debug)]
enum Deferred {
    Splash(Vec2),
    ResumeDrift(f64),
}

#[derive(Copy, Clone, Debug)]
struct Pending {
    due_ms: f64,
    action: Deferred,
}

/// Drag-and-physics controller for one element inside one container.
pub struct DragController<S: Surface, O: DragObserver = NoOpDragObserver> {
    surface: S,
    observer: O,
    config: DragConfig,
    rest_offset: Option<Box<RestOffsetFn>>,
    wave: WaveLevel,
    phase: Phase,
    pos: Vec2,
    vel: Vec2,
    history: PositionHistory,
    motion: Option<Motion>,
    pending: Vec<Pending>,
}

impl<S: Surface> DragController<S, NoOpDragObserver> {
    /// Bind to a surface with no splash effect.
    pub fn without_observer(surface: S, config: DragConfig) -> Result<Self, DragError> {
        Self::new(surface, config, NoOpDragObserver)
    }
}

impl<S: Surface, O: DragObserver> DragController<S, O> {
    /// Bind to a surface. Fails only on an invalid config; node lookup is the surface's job.
    pub fn new(surface: S, config: DragConfig, observer: O) -> Result<Self, DragError> {
        if let Err(e) = config.validate() {
            log::warn!("rejecting drag config: {}", e);
            return Err(e);
        }
        let mut controller = DragController {
            surface,
            observer,
            wave: WaveLevel::new(config.wave_fallback_ratio),
            config,
            rest_offset: None,
            phase: Phase::Idle,
            pos: Vec2::zero(),
            vel: Vec2::zero(),
            history: PositionHistory::new(),
            motion: None,
            pending: Vec::new(),
        };
        controller.classes_changed();
        Ok(controller)
    }

    /// Replace the default rest-offset formula.
    pub fn with_rest_offset<F>(mut self, f: F) -> Self
    where
        F: Fn(&RestContext) -> f64 + 'static,
    {
        self.rest_offset = Some(Box::new(f));
        self
    }

    // ---- accessors ----

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last position written by the controller, relative to the container.
    pub fn position(&self) -> Vec2 {
        self.pos
    }

    /// Velocity in px/frame.
    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn history(&self) -> &PositionHistory {
        &self.history
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    /// True while the host should keep calling [`tick`](Self::tick).
    pub fn needs_frame(&self) -> bool {
        self.phase == Phase::Falling || self.motion.is_some() || !self.pending.is_empty()
    }

    // ---- wave and rest line ----

    /// Wave surface offset from the container top, measured lazily and cached until resize.
    pub fn wave_offset(&mut self) -> f64 {
        let container = self.surface.container_rect();
        self.wave_offset_in(&container)
    }

    fn wave_offset_in(&mut self, container: &Rect) -> f64 {
        let surface = &self.surface;
        self.wave.offset(container, || surface.wave_rect())
    }

    fn rest_offset_in(&mut self, container: &Rect) -> f64 {
        let ctx = RestContext {
            container: *container,
            wave_offset: self.wave_offset_in(container),
            element_size: self.surface.element_size(),
        };
        resolve_rest_offset(&ctx, self.rest_offset.as_deref())
    }

    fn splash_point(&self, container: &Rect, rest: f64, x: f64) -> Vec2 {
        let size = self.surface.element_size();
        Vec2::new(
            container.left + x + size.x * 0.5,
            container.top + container.height - rest - Float::round(size.y * SPLASH_RISE) + SPLASH_NUDGE,
        )
    }

    // ---- global events ----

    /// Drop the cached wave offset. Call on window resize.
    pub fn resize(&mut self) {
        log::trace!("resize: wave offset invalidated");
        self.wave.invalidate();
    }

    /// Re-check the gating classes after the element's class list changed.
    ///
    /// Returns true if interactivity was enabled.
    pub fn classes_changed(&mut self) -> bool {
        if !(self.config.enable_pointer_on_active && self.config.is_gated()) {
            return false;
        }
        if !self.has_active_class() {
            return false;
        }
        self.surface.set_interactive(true);
        self.surface.set_cursor(Cursor::Grab);
        true
    }

    fn has_active_class(&self) -> bool {
        self.config.active_classes.iter().any(|c| self.surface.has_class(c))
    }

    fn set_phase(&mut self, to: Phase) {
        let from = self.phase;
        if from == to {
            return;
        }
        log::debug!("phase {:?} -> {:?}", from, to);
        self.phase = to;
        self.observer.on_phase_change(from, to);
    }

    // ---- drag ----

    /// Pin the element at its current on-screen position under manual pixel control.
    ///
    /// Strips the animation marker classes, cancels every running animation
    /// (including a manual tween), and writes explicit `left`/`top`.
    pub fn freeze_position(&mut self) -> Vec2 {
        self.motion = None;
        let rect = self.surface.element_rect();
        let container = self.surface.container_rect();
        let p = rect.offset_in(&container);

        for class in self.config.animated_classes() {
            self.surface.remove_class(class);
        }
        self.surface.cancel_animations();
        if self.config.clear_animation_delay {
            self.surface.clear_animation_delay();
        }
        self.surface.set_opacity(1.0);
        self.surface.set_left(Some(Length::Px(p.x)));
        self.surface.set_top(Some(Length::Px(p.y)));
        self.surface.set_bottom(None);
        self.surface.set_rotation(None);
        self.pos = p;
        p
    }

    /// Grab the element. Returns false if gating rejected the grab.
    pub fn pointer_down(&mut self, pointer_id: i32) -> bool {
        if self.config.is_gated() && !self.has_active_class() {
            log::trace!("pointer down ignored: no active class");
            return false;
        }
        self.surface.set_text_selection(false);
        if self.phase == Phase::Falling {
            log::trace!("grab interrupts fall at {:?}", self.pos);
        }
        self.pending.clear();
        self.freeze_position();
        self.vel = Vec2::zero();
        self.history.clear();
        self.set_phase(Phase::Dragging);
        self.surface.set_cursor(Cursor::Grabbing);
        if let Err(e) = self.surface.capture_pointer(pointer_id) {
            log::trace!("{}", e);
        }
        true
    }

    /// Move the grabbed element so its center follows `client`.
    pub fn pointer_move(&mut self, client: Vec2, now_ms: f64) {
        if self.phase != Phase::Dragging {
            return;
        }
        let container = self.surface.container_rect();
        let p = client - container.origin() - self.surface.element_size().half();
        self.surface.set_left(Some(Length::Px(p.x)));
        self.surface.set_top(Some(Length::Px(p.y)));
        self.pos = p;

        self.history.push(client, now_ms);
        if let Some(deg) = self.history.tilt() {
            self.surface.set_rotation(Some(deg));
        }
    }

    pub fn pointer_up(&mut self, now_ms: f64) {
        self.end_drag(now_ms);
    }

    pub fn pointer_cancel(&mut self, now_ms: f64) {
        self.end_drag(now_ms);
    }

    /// Window-level move. Ends the drag if no button is held any more.
    pub fn window_pointer_move(&mut self, buttons: u16, now_ms: f64) {
        if self.phase == Phase::Dragging && buttons == 0 {
            self.end_drag(now_ms);
        }
    }

    pub fn blur(&mut self, now_ms: f64) {
        self.end_drag(now_ms);
    }

    /// Release the element and fling it with the velocity of the recent samples.
    pub fn end_drag(&mut self, now_ms: f64) {
        if self.phase != Phase::Dragging {
            return;
        }
        self.surface.set_text_selection(true);
        self.surface.set_cursor(Cursor::Grab);

        let scale = fling_scale(self.surface.viewport_width());
        self.vel = self.history.launch_velocity(scale);
        log::debug!(
            "released with velocity ({:.2}, {:.2}) from {} samples",
            self.vel.x,
            self.vel.y,
            self.history.len()
        );
        self.start_fall(now_ms);
    }

    // ---- simulation ----

    fn start_fall(&mut self, now_ms: f64) {
        let container = self.surface.container_rect();
        let size = self.surface.element_size();
        if !self.pos.is_finite() {
            self.pos = self.surface.element_rect().offset_in(&container);
        }
        self.pos.x = self.pos.x.wrap(container.width);

        let wave = self.wave_offset_in(&container);
        if self.pos.y + size.y >= wave + REST_GAP {
            self.set_phase(Phase::Splashing);
            self.start_pop(now_ms, &container);
            return;
        }
        self.set_phase(Phase::Falling);
    }

    /// One frame of free fall.
    fn step(&mut self, now_ms: f64) {
        self.vel.y += self.config.gravity;
        self.vel.x *= AIR_DRAG;
        self.pos += self.vel;

        let container = self.surface.container_rect();
        let size = self.surface.element_size();
        self.surface.set_rotation(Some((self.vel.x * FALL_TILT_FACTOR).clamp_abs(FALL_TILT_LIMIT)));

        if self.pos.y > container.height + size.y {
            self.pos.y = -size.y;
            self.vel.y = self.vel.y.min(WRAP_FALL_SPEED_CAP);
        }

        if self.pos.x > container.width {
            self.pos.x = -size.x;
        } else if self.pos.x < -size.x {
            self.pos.x = container.width;
        }

        let rest = self.rest_offset_in(&container);
        let line = container.height - rest;
        if self.pos.y + size.y >= line && self.vel.y > 0.0 {
            self.land(now_ms, &container, rest);
            return;
        }

        self.surface.set_left(Some(Length::Px(self.pos.x)));
        self.surface.set_top(Some(Length::Px(self.pos.y)));
        self.observer.on_frame(self.pos, self.vel);
    }

    fn land(&mut self, now_ms: f64, container: &Rect, rest: f64) {
        let size = self.surface.element_size();
        self.pos.y = container.height - rest - size.y;
        self.vel = Vec2::zero();
        self.surface.set_left(Some(Length::Px(self.pos.x)));
        self.surface.set_top(Some(Length::Px(self.pos.y)));
        self.surface.set_rotation(None);
        self.set_phase(Phase::Splashing);

        let splash = self.splash_point(container, rest, self.pos.x);
        self.observer.on_splash(splash.x, splash.y);
        self.pending.push(Pending {
            due_ms: now_ms + LANDING_SETTLE_MS,
            action: Deferred::ResumeDrift(self.pos.x),
        });
    }

    /// Released already underwater: tween to the resting line instead of falling.
    fn start_pop(&mut self, now_ms: f64, container: &Rect) {
        let rest = self.rest_offset_in(container);
        let size = self.surface.element_size();
        let surface_y = container.height - rest - size.y;
        let x = self.pos.x;

        self.vel = Vec2::zero();
        self.surface.set_left(Some(Length::Px(x)));
        self.surface.set_rotation(None);
        self.motion = Some(Motion::Pop {
            tween: Tween::new(self.pos.y, surface_y, now_ms, POP_DURATION_MS, OVERSHOOT),
            x,
        });
        let splash = self.splash_point(container, rest, x);
        self.pending.push(Pending {
            due_ms: now_ms + POP_SPLASH_MS,
            action: Deferred::Splash(splash),
        });
    }

    /// Advance whatever currently owns the element by one animation frame.
    pub fn tick(&mut self, now_ms: f64) {
        self.run_due(now_ms);

        match self.motion.clone() {
            Some(Motion::Pop { tween, x }) => {
                let y = tween.sample(now_ms);
                self.surface.set_top(Some(Length::Px(y)));
                self.pos.y = y;
                if tween.is_finished(now_ms) {
                    self.motion = None;
                    self.pending.push(Pending {
                        due_ms: now_ms + POP_SETTLE_MS,
                        action: Deferred::ResumeDrift(x),
                    });
                }
            }
            Some(Motion::Launch { tween, end_pct }) => {
                let left = tween.sample(now_ms);
                self.surface.set_left(Some(Length::Px(left)));
                self.pos.x = left;
                if tween.is_finished(now_ms) {
                    self.finish_launch(end_pct);
                }
            }
            None => {}
        }

        if self.phase == Phase::Falling {
            self.step(now_ms);
        }
    }

    fn run_due(&mut self, now_ms: f64) {
        loop {
            let next = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.due_ms <= now_ms)
                .min_by(|(_, a), (_, b)| a.due_ms.total_cmp(&b.due_ms))
                .map(|(i, _)| i);
            let Some(i) = next else {
                return;
            };
            let pending = self.pending.remove(i);
            match pending.action {
                Deferred::Splash(at) => self.observer.on_splash(at.x, at.y),
                Deferred::ResumeDrift(x) => self.resume_drift(x, now_ms),
            }
        }
    }

    // ---- hand-off back to the drift loop ----

    /// Launch from horizontal offset `x` and hand the element back to the drift loop.
    ///
    /// Also usable on its own to replay the sequence without a drag.
    pub fn resume_drift(&mut self, x: f64, now_ms: f64) {
        self.motion = None;
        self.pending.retain(|p| !matches!(p.action, Deferred::ResumeDrift(_)));
        let container = self.surface.container_rect();
        let width = container.width;
        let x = x.wrap(width);
        let start_px = match self.surface.left() {
            Some(left) if left.is_finite() && left.to_px(width).is_finite() => left.to_px(width),
            _ => x,
        };

        self.surface.set_left(Some(Length::Px(start_px)));
        self.surface.set_rotation(None);
        if self.config.clear_animation_delay {
            self.surface.clear_animation_delay();
        }
        self.surface.set_opacity(1.0);

        let rect = self.surface.element_rect();
        let mut bottom = container.bottom() - rect.bottom();
        if !bottom.is_finite() {
            bottom = self.rest_offset_in(&container);
        }
        self.surface.set_bottom(Some(Length::Px(bottom)));
        self.surface.set_top(None);

        if !self.config.launch_class.is_empty() {
            self.surface.add_class(&self.config.launch_class);
        }
        self.add_steady_classes();

        // Commit where the tween actually ends; `left` may be off-screen after a wrap
        let end_px = start_px + width * self.config.launch_distance / 100.0;
        let end_pct = if width > 0.0 { end_px * 100.0 / width } else { 0.0 };
        self.motion = Some(Motion::Launch {
            tween: Tween::new(start_px, end_px, now_ms, self.config.launch_duration_ms, LAUNCH),
            end_pct,
        });
        self.vel = Vec2::zero();
        self.pos = Vec2::new(start_px, container.height - bottom - self.surface.element_size().y);
        self.set_phase(Phase::Launching);
    }

    fn add_steady_classes(&mut self) {
        for class in self.config.steady_classes.iter().filter(|c| !c.is_empty()) {
            self.surface.add_class(class);
        }
    }

    fn finish_launch(&mut self, end_pct: f64) {
        let bob_time = self.surface.animation_time(&self.config.bob_animation_name);
        let before = self.surface.element_rect();

        // Commit the end point before dropping the tween so `left` never snaps back
        self.surface.set_left(Some(Length::Percent(end_pct)));
        self.motion = None;
        if !self.config.launch_class.is_empty() {
            self.surface.remove_class(&self.config.launch_class);
        }
        if !self.config.drift_class.is_empty() {
            self.surface.add_class(&self.config.drift_class);
        }
        self.add_steady_classes();

        if let Some(t) = bob_time {
            self.surface.set_animation_time(&self.config.bob_animation_name, t);
        }

        let seed = drift_seed_ms(end_pct, self.config.drift_duration_ms);
        if !self.surface.set_animation_time(&self.config.drift_animation_name, seed) {
            log::trace!("{} not running; drift seed skipped", self.config.drift_animation_name);
        }

        // A larger `bottom` lifts the element, so a downward jump is undone by adding it
        let after = self.surface.element_rect();
        let delta = after.top - before.top;
        if Float::abs(delta) > JUMP_EPSILON {
            if let Some(Length::Px(bottom)) = self.surface.bottom() {
                if bottom.is_finite() {
                    self.surface.set_bottom(Some(Length::Px(bottom + delta)));
                }
            }
        }

        let container = self.surface.container_rect();
        self.pos.x = Length::Percent(end_pct).to_px(container.width);
        self.set_phase(Phase::Drifting);
    }
}

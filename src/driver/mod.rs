//! Driver loop model
//!
//! A [`Runner`] stands for one mounted view. The host calls [`Runner::frame`]
//! from its per-frame callback; the runner decides whether the simulation may
//! step (visibility, focus, frame cap) and whether the wall-clock interval has
//! elapsed. Key presses only record intent, consumed by the next step.

pub mod timer;

pub use timer::{FrameLimiter, IntervalTimer};

use crate::sim::{SimPhase, StepOutcome};

/// A game that can be stepped by a [`Runner`]
pub trait Simulation {
    /// Intent accumulated between ticks
    type Input: Default;

    /// Record intent for a pressed key. Returns whether the key was used.
    fn apply_key(input: &mut Self::Input, key: &str) -> bool;

    /// Record the pointer position in surface units
    fn apply_pointer_move(_input: &mut Self::Input, _x: f32, _y: f32) -> bool {
        false
    }

    /// Record a pointer button release
    fn apply_pointer_up(_input: &mut Self::Input) -> bool {
        false
    }

    /// Advance one tick, consuming the accumulated intent
    fn step(&mut self, input: &Self::Input) -> StepOutcome;

    /// Period of the wall-clock driven event, if any
    fn interval_ms(&self) -> Option<f64> {
        None
    }

    /// Called when the wall-clock interval elapses while running
    fn on_interval(&mut self) {}
}

/// Owns one simulation and gates its stepping
pub struct Runner<S: Simulation> {
    sim: S,
    pending: S::Input,
    limiter: FrameLimiter,
    interval: Option<IntervalTimer>,
    visible: bool,
    focused: bool,
    phase: SimPhase,
    ticks: u64,
}

impl<S: Simulation> Runner<S> {
    /// New runner, visible but unfocused
    pub fn new(sim: S, target_fps: u32) -> Self {
        let interval = sim.interval_ms().map(IntervalTimer::new);
        Self {
            sim,
            pending: S::Input::default(),
            limiter: FrameLimiter::new(target_fps),
            interval,
            visible: true,
            focused: false,
            phase: SimPhase::Idle,
            ticks: 0,
        }
    }

    /// Builder for views without a focus concept
    pub fn with_focus(mut self, focused: bool) -> Self {
        self.set_focused(focused);
        self
    }

    /// Read-only access for rendering
    pub fn sim(&self) -> &S {
        &self.sim
    }

    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Number of steps taken so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_active(&self) -> bool {
        self.visible && self.focused
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_visible(&mut self, visible: bool) {
        if self.visible != visible {
            self.visible = visible;
            self.gate_changed();
        }
    }

    pub fn set_focused(&mut self, focused: bool) {
        if self.focused != focused {
            self.focused = focused;
            self.gate_changed();
        }
    }

    fn gate_changed(&mut self) {
        if self.is_active() {
            // Resume from now, no catch-up on time spent idle
            self.limiter.reset();
            if let Some(timer) = &mut self.interval {
                timer.reset();
            }
            self.phase = SimPhase::Running;
        } else {
            self.pending = S::Input::default();
            self.phase = SimPhase::Idle;
        }
    }

    /// Forward a key press. Ignored while idle.
    pub fn key_down(&mut self, key: &str) -> bool {
        if !self.is_active() {
            return false;
        }
        S::apply_key(&mut self.pending, key)
    }

    /// Forward a pointer move. Ignored while idle.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.is_active() && S::apply_pointer_move(&mut self.pending, x, y)
    }

    /// Forward a pointer release. Ignored while idle.
    pub fn pointer_up(&mut self) -> bool {
        self.is_active() && S::apply_pointer_up(&mut self.pending)
    }

    /// Per-frame entry point. Steps at most once and returns the outcome if it did.
    pub fn frame(&mut self, now_ms: f64) -> Option<StepOutcome> {
        if !self.is_active() {
            return None;
        }

        if let Some(timer) = &mut self.interval {
            if timer.poll(now_ms) {
                self.sim.on_interval();
            }
        }

        if !self.limiter.ready(now_ms) {
            return None;
        }

        let input = std::mem::take(&mut self.pending);
        let outcome = self.sim.step(&input);
        self.ticks += 1;
        self.phase = outcome.phase();
        Some(outcome)
    }
}

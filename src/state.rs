//! Color state machine
//!
//! Arbitrates between autonomous hue cycling, a commanded fixed color and
//! timed transitions. Exactly one [`ColorMode`] governs the displayed color
//! at any instant, and every change goes through [`ColorState::apply`] or
//! [`ColorState::tick`].

use embassy_time::{Duration, Instant};

use crate::color::{Rgb, hsv, lerp_color};
use crate::command::Command;
use crate::hue::HueCounter;

/// Shortest accepted transition
const MIN_TRANSITION: Duration = Duration::from_millis(1);

/// A timed linear fade between two colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub start: Rgb,
    pub target: Rgb,
    pub started_at: Instant,
    pub duration: Duration,
}

impl Transition {
    /// Interpolated color after `elapsed`
    #[allow(clippy::cast_precision_loss)]
    pub fn sample(&self, elapsed: Duration) -> Rgb {
        let progress = elapsed.as_millis() as f32 / self.duration.as_millis().max(1) as f32;
        lerp_color(self.start, self.target, progress)
    }
}

/// Progress of the last transition command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Interpolating toward the target
    Active(Transition),
    /// Target reached; the target color stays on until the next command
    Settled,
}

/// Which source currently drives the displayed color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Color follows the advancing hue counter
    Auto,
    /// Color is a commanded literal
    Fixed,
    /// Color follows (or has finished) a timed transition
    Transitioning(TransitionPhase),
}

/// Flat mode tag for observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Auto,
    Fixed,
    Transitioning,
}

impl ColorMode {
    pub const fn kind(&self) -> ModeKind {
        match self {
            Self::Auto => ModeKind::Auto,
            Self::Fixed => ModeKind::Fixed,
            Self::Transitioning(_) => ModeKind::Transitioning,
        }
    }
}

/// Everything observable about the color state, for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSnapshot {
    pub mode: ModeKind,
    pub color: Rgb,
    pub hue: u8,
    pub transition_active: bool,
}

/// Owned color state of the device
#[derive(Debug, Clone)]
pub struct ColorState {
    mode: ColorMode,
    color: Rgb,
    hue: HueCounter,
}

impl ColorState {
    /// Create a state cycling hues automatically from hue 0
    pub fn new(hue_step: Duration) -> Self {
        let hue = HueCounter::new(hue_step);
        Self {
            mode: ColorMode::Auto,
            color: hsv(hue.value(), 255, 255),
            hue,
        }
    }

    pub const fn mode(&self) -> &ColorMode {
        &self.mode
    }

    /// Color shown by the last tick
    pub const fn color(&self) -> Rgb {
        self.color
    }

    pub const fn hue(&self) -> u8 {
        self.hue.value()
    }

    pub const fn is_transition_active(&self) -> bool {
        matches!(
            self.mode,
            ColorMode::Transitioning(TransitionPhase::Active(_))
        )
    }

    pub const fn snapshot(&self) -> ColorSnapshot {
        ColorSnapshot {
            mode: self.mode.kind(),
            color: self.color,
            hue: self.hue.value(),
            transition_active: self.is_transition_active(),
        }
    }

    /// Apply a command received at `now`
    ///
    /// Each command fully replaces the previous intent; a running transition
    /// is always cancelled or superseded.
    pub fn apply(&mut self, command: Command, now: Instant) {
        match command {
            Command::SetColor(color) => {
                self.mode = ColorMode::Fixed;
                self.color = color;
            }
            Command::SetHue(hue) => {
                self.mode = ColorMode::Fixed;
                self.hue.set(hue);
                self.color = hsv(hue, 255, 255);
            }
            Command::SetAutoMode(true) => {
                self.mode = ColorMode::Auto;
                self.hue.resume(now);
                self.color = hsv(self.hue.value(), 255, 255);
            }
            Command::SetAutoMode(false) => {
                // Freeze whatever is on the strip right now
                self.mode = ColorMode::Fixed;
            }
            Command::Transition { color, duration } => {
                self.start_transition(color, duration, now);
            }
        }
    }

    /// Advance time-based state and return the color to display
    pub fn tick(&mut self, now: Instant) -> Rgb {
        match self.mode {
            ColorMode::Transitioning(TransitionPhase::Active(transition)) => {
                let elapsed = now.saturating_duration_since(transition.started_at);
                if elapsed >= transition.duration {
                    self.color = transition.target;
                    self.mode = ColorMode::Transitioning(TransitionPhase::Settled);
                } else {
                    self.color = transition.sample(elapsed);
                }
            }
            ColorMode::Auto => {
                let hue = self.hue.advance(now);
                self.color = hsv(hue, 255, 255);
            }
            ColorMode::Fixed | ColorMode::Transitioning(TransitionPhase::Settled) => {}
        }
        self.color
    }

    fn start_transition(&mut self, target: Rgb, duration: Duration, now: Instant) {
        // Chain from the live color, including a half-finished fade
        let start = self.tick(now);

        if start == target {
            self.mode = ColorMode::Transitioning(TransitionPhase::Settled);
            return;
        }

        self.mode = ColorMode::Transitioning(TransitionPhase::Active(Transition {
            start,
            target,
            started_at: now,
            duration: duration.max(MIN_TRANSITION),
        }));
    }
}

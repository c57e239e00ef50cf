//! Autonomous effects with compile-time known variants
//!
//! All effects are stored in an enum to avoid heap allocations.
//! Each effect implements the `Effect` trait and draws on top of the
//! previous frame, so fading effects leave trails.

mod bpm;
mod cycler;
mod juggle;
mod rainbow;
mod sinelon;

use embassy_time::Instant;

pub use bpm::BpmEffect;
pub use cycler::{DEFAULT_DWELL, EffectCycler};
pub use juggle::JuggleEffect;
pub use rainbow::RainbowEffect;
pub use sinelon::SinelonEffect;

use crate::color::Rgb;

const EFFECT_NAME_RAINBOW: &str = "rainbow";
const EFFECT_NAME_SINELON: &str = "sinelon";
const EFFECT_NAME_BPM: &str = "bpm";
const EFFECT_NAME_JUGGLE: &str = "juggle";

const EFFECT_ID_RAINBOW: u8 = 0;
const EFFECT_ID_SINELON: u8 = 1;
const EFFECT_ID_BPM: u8 = 2;
const EFFECT_ID_JUGGLE: u8 = 3;

/// Number of effects in the showcase rotation
pub const EFFECT_COUNT: u8 = 4;

/// Per-frame inputs shared by every effect
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Time since boot, drives the beat generators
    pub now: Instant,
    /// Global hue counter
    pub hue: u8,
}

pub trait Effect {
    /// Render a single frame
    fn render(&mut self, ctx: FrameContext, leds: &mut [Rgb]);

    /// Reset effect state
    fn reset(&mut self) {}
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Hue gradient across the strip
    Rainbow(RainbowEffect),
    /// Single dot sweeping back and forth
    Sinelon(SinelonEffect),
    /// Breathing palette band
    Bpm(BpmEffect),
    /// Eight colored dots weaving at different speeds
    Juggle(JuggleEffect),
}

/// Known effect ids, in showcase order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    Rainbow = EFFECT_ID_RAINBOW,
    Sinelon = EFFECT_ID_SINELON,
    Bpm = EFFECT_ID_BPM,
    Juggle = EFFECT_ID_JUGGLE,
}

impl Default for EffectSlot {
    fn default() -> Self {
        Self::Rainbow(RainbowEffect::new())
    }
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_RAINBOW => Self::Rainbow,
            EFFECT_ID_SINELON => Self::Sinelon,
            EFFECT_ID_BPM => Self::Bpm,
            EFFECT_ID_JUGGLE => Self::Juggle,
            _ => return None,
        })
    }

    /// Next effect in the rotation, wrapping after the last one
    pub const fn next(self) -> Self {
        match self {
            Self::Rainbow => Self::Sinelon,
            Self::Sinelon => Self::Bpm,
            Self::Bpm => Self::Juggle,
            Self::Juggle => Self::Rainbow,
        }
    }

    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::Rainbow => EffectSlot::Rainbow(RainbowEffect::new()),
            Self::Sinelon => EffectSlot::Sinelon(SinelonEffect::new()),
            Self::Bpm => EffectSlot::Bpm(BpmEffect::new()),
            Self::Juggle => EffectSlot::Juggle(JuggleEffect::new()),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rainbow => EFFECT_NAME_RAINBOW,
            Self::Sinelon => EFFECT_NAME_SINELON,
            Self::Bpm => EFFECT_NAME_BPM,
            Self::Juggle => EFFECT_NAME_JUGGLE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_RAINBOW => Some(Self::Rainbow),
            EFFECT_NAME_SINELON => Some(Self::Sinelon),
            EFFECT_NAME_BPM => Some(Self::Bpm),
            EFFECT_NAME_JUGGLE => Some(Self::Juggle),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Render the current effect
    pub fn render(&mut self, ctx: FrameContext, leds: &mut [Rgb]) {
        match self {
            Self::Rainbow(effect) => effect.render(ctx, leds),
            Self::Sinelon(effect) => effect.render(ctx, leds),
            Self::Bpm(effect) => effect.render(ctx, leds),
            Self::Juggle(effect) => effect.render(ctx, leds),
        }
    }

    /// Reset the effect state
    pub fn reset(&mut self) {
        match self {
            Self::Rainbow(effect) => Effect::reset(effect),
            Self::Sinelon(effect) => Effect::reset(effect),
            Self::Bpm(effect) => Effect::reset(effect),
            Self::Juggle(effect) => Effect::reset(effect),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Rainbow(_) => EffectId::Rainbow,
            Self::Sinelon(_) => EffectId::Sinelon,
            Self::Bpm(_) => EffectId::Bpm,
            Self::Juggle(_) => EffectId::Juggle,
        }
    }
}

/// Last addressable pixel index as a beat range bound
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn last_index(leds: &[Rgb]) -> u16 {
    let last = leds.len().saturating_sub(1);
    last.min(usize::from(u16::MAX)) as u16
}

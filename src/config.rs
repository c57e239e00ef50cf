//! Device configuration
//!
//! Everything here is fixed at build time; the firmware exposes no runtime
//! configuration surface.

use embassy_time::Duration;

use crate::color::{ColorOrder, Rgb, rgb_from_u32};
use crate::effect::DEFAULT_DWELL;
use crate::hue::DEFAULT_HUE_STEP;

/// Correction profile for typical SMD5050 strips
pub const TYPICAL_LED_STRIP: Rgb = rgb_from_u32(0xFFB0F0);

/// Delay between a disconnect and making the device discoverable again
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Physical strip parameters, applied once at startup
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    pub pixel_count: usize,
    pub color_order: ColorOrder,
    pub correction: Rgb,
    pub brightness: u8,
}

impl StripConfig {
    /// 144 pixel GRB strip at full brightness
    pub const DEFAULT: Self = Self {
        pixel_count: 144,
        color_order: ColorOrder::Grb,
        correction: TYPICAL_LED_STRIP,
        brightness: 255,
    };
}

/// What drives the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Program {
    /// Color state machine driven by remote commands
    #[default]
    Remote,
    /// Autonomous effect rotation, remote commands are ignored
    Showcase,
}

/// Fixed timing constants of the firmware
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    /// Time between two hue counter steps
    pub hue_step: Duration,
    /// Time each showcase effect stays on
    pub effect_dwell: Duration,
    /// Delay before re-advertising after a disconnect
    pub settle_delay: Duration,
}

impl Timings {
    pub const DEFAULT: Self = Self {
        hue_step: DEFAULT_HUE_STEP,
        effect_dwell: DEFAULT_DWELL,
        settle_delay: DEFAULT_SETTLE_DELAY,
    };
}

/// Configuration for the whole firmware core
#[derive(Debug, Clone, Copy)]
pub struct FirmwareConfig {
    pub strip: StripConfig,
    pub program: Program,
    pub timings: Timings,
}

impl FirmwareConfig {
    pub const DEFAULT: Self = Self {
        strip: StripConfig::DEFAULT,
        program: Program::Remote,
        timings: Timings::DEFAULT,
    };

    /// Default configuration running the given program
    pub const fn with_program(program: Program) -> Self {
        Self {
            program,
            ..Self::DEFAULT
        }
    }
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

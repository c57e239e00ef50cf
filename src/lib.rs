#![no_std]

pub mod color;
pub mod command;
pub mod config;
pub mod control_loop;
pub mod effect;
pub mod hue;
pub mod link;
pub mod math8;
pub mod renderer;
pub mod sink;
pub mod state;

pub use command::{Command, ParseError};
pub use config::{FirmwareConfig, Program, StripConfig, Timings};
pub use control_loop::{ControlLoop, FrameResult};
pub use effect::{EffectCycler, EffectId, EffectSlot};
pub use link::{Link, LinkError, LinkReceiver, LinkSender};
pub use renderer::{Renderer, Scene};
pub use sink::SmartLedsSink;
pub use state::{ColorMode, ColorSnapshot, ColorState, ModeKind, TransitionPhase};

pub use color::{ColorOrder, Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Destination of rendered frames
///
/// Implement this trait to support different hardware platforms.
/// The control loop configures the sink once, then shows one frame per tick.
pub trait StripSink {
    /// Describe the attached strip
    fn configure(&mut self, pixel_count: usize, order: ColorOrder, correction: Rgb);

    /// Set the global output brightness (0-255)
    fn set_brightness(&mut self, level: u8);

    /// Push a full frame to the LEDs
    fn show(&mut self, pixels: &[Rgb]);
}

/// Wireless transport control used after a disconnect
pub trait Advertiser {
    /// Make the device discoverable again
    fn start_advertising(&mut self);
}

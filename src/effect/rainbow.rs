//! Rainbow gradient effect
//!
//! Spreads the hue wheel along the strip, starting at the global hue
//! counter so the whole gradient drifts as the counter advances.

use super::{Effect, FrameContext};
use crate::color::{Rgb, hsv};

const DEFAULT_DELTA_HUE: u8 = 7;
const DEFAULT_SATURATION: u8 = 240;

/// Rainbow effect - fixed hue step per pixel
#[derive(Debug, Clone)]
pub struct RainbowEffect {
    /// Hue step between neighbouring pixels
    delta_hue: u8,
    /// Saturation (0-255)
    saturation: u8,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl RainbowEffect {
    pub const fn new() -> Self {
        Self {
            delta_hue: DEFAULT_DELTA_HUE,
            saturation: DEFAULT_SATURATION,
        }
    }

    /// Set the hue step between neighbouring pixels
    #[must_use]
    pub const fn with_delta_hue(mut self, delta_hue: u8) -> Self {
        self.delta_hue = delta_hue;
        self
    }
}

impl Effect for RainbowEffect {
    fn render(&mut self, ctx: FrameContext, leds: &mut [Rgb]) {
        let mut hue = ctx.hue;
        for led in leds {
            *led = hsv(hue, self.saturation, 255);
            hue = hue.wrapping_add(self.delta_hue);
        }
    }
}

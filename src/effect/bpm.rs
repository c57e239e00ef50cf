//! Breathing band of palette colors pulsing at a fixed tempo

use super::{Effect, FrameContext};
use crate::{
    color::{PARTY_COLORS, Palette16, Rgb, color_from_palette},
    math8::beatsin8,
};

const BEATS_PER_MINUTE: u16 = 62;
const MIN_BEAT: u8 = 64;
const MAX_BEAT: u8 = 255;

#[derive(Debug, Clone)]
pub struct BpmEffect {
    palette: Palette16,
}

impl Default for BpmEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl BpmEffect {
    pub const fn new() -> Self {
        Self {
            palette: PARTY_COLORS,
        }
    }
}

impl Effect for BpmEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&mut self, ctx: FrameContext, leds: &mut [Rgb]) {
        let beat = beatsin8(BEATS_PER_MINUTE, MIN_BEAT, MAX_BEAT, ctx.now);
        for (i, led) in leds.iter_mut().enumerate() {
            // Pixel index wraps at 8 bits like the palette index does
            let i = i as u8;
            let index = ctx.hue.wrapping_add(i.wrapping_mul(2));
            let brightness = beat.wrapping_sub(ctx.hue).wrapping_add(i.wrapping_mul(10));
            *led = color_from_palette(&self.palette, index, brightness);
        }
    }
}

//! A single colored dot sweeping back and forth, with fading trails

use super::{Effect, FrameContext, last_index};
use crate::{
    color::{Rgb, add_saturating, fade_to_black_by, hsv},
    math8::beatsin16,
};

const SWEEP_BPM: u16 = 13;
const FADE_AMOUNT: u8 = 20;
const DOT_VALUE: u8 = 192;

#[derive(Debug, Clone, Default)]
pub struct SinelonEffect;

impl SinelonEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for SinelonEffect {
    fn render(&mut self, ctx: FrameContext, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }
        fade_to_black_by(leds, FADE_AMOUNT);

        let pos = usize::from(beatsin16(SWEEP_BPM, 0, last_index(leds), ctx.now));
        leds[pos] = add_saturating(leds[pos], hsv(ctx.hue, 255, DOT_VALUE));
    }
}

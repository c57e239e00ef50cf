//! Eight colored dots weaving in and out of sync

use super::{Effect, FrameContext, last_index};
use crate::{
    color::{Rgb, fade_to_black_by, hsv, max_blend},
    math8::beatsin16,
};

const DOT_COUNT: u16 = 8;
const BASE_BPM: u16 = 7;
const HUE_STEP: u8 = 32;
const DOT_SATURATION: u8 = 200;
const FADE_AMOUNT: u8 = 20;

#[derive(Debug, Clone, Default)]
pub struct JuggleEffect;

impl JuggleEffect {
    pub const fn new() -> Self {
        Self
    }
}

impl Effect for JuggleEffect {
    fn render(&mut self, ctx: FrameContext, leds: &mut [Rgb]) {
        if leds.is_empty() {
            return;
        }
        fade_to_black_by(leds, FADE_AMOUNT);

        let last = last_index(leds);
        let mut dot_hue: u8 = 0;
        for dot in 0..DOT_COUNT {
            let pos = usize::from(beatsin16(BASE_BPM + dot, 0, last, ctx.now));
            leds[pos] = max_blend(leds[pos], hsv(dot_hue, DOT_SATURATION, 255));
            dot_hue = dot_hue.wrapping_add(HUE_STEP);
        }
    }
}

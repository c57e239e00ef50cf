//! Showcase rotation through the autonomous effects

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use super::{EffectId, EffectSlot, FrameContext};
use crate::color::Rgb;
use crate::hue::HueCounter;

/// Default time each effect stays on before the next one is selected
pub const DEFAULT_DWELL: Duration = Duration::from_secs(10);

/// Cycles through every effect, one dwell period each
#[derive(Debug, Clone)]
pub struct EffectCycler {
    current: EffectSlot,
    dwell: Duration,
    /// Deadline of the next effect switch; `None` before the first frame
    next_switch: Option<Instant>,
    hue: HueCounter,
}

impl EffectCycler {
    pub fn new(first: EffectId, dwell: Duration, hue_step: Duration) -> Self {
        Self {
            current: first.to_slot(),
            dwell,
            next_switch: None,
            hue: HueCounter::new(hue_step),
        }
    }

    /// Currently running effect
    pub fn effect(&self) -> EffectId {
        self.current.id()
    }

    /// Current value of the global hue counter
    pub const fn hue(&self) -> u8 {
        self.hue.value()
    }

    /// Advance clocks and draw the active effect over the previous frame
    pub fn render(&mut self, now: Instant, leds: &mut [Rgb]) {
        let hue = self.hue.advance(now);

        match self.next_switch {
            None => self.next_switch = Some(now + self.dwell),
            Some(deadline) if now >= deadline => {
                self.switch_to(self.current.id().next());
                self.next_switch = Some(now + self.dwell);
            }
            Some(_) => {}
        }

        self.current.render(FrameContext { now, hue }, leds);
    }

    fn switch_to(&mut self, effect: EffectId) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[EffectCycler.switch_to] effect changed: {} ({})",
            effect as u8,
            effect.as_str()
        );
        self.current = effect.to_slot();
        self.current.reset();
    }
}

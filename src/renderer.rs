use embassy_time::Instant;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{BLACK, Rgb, fill_solid};
use crate::command::Command;
use crate::config::{FirmwareConfig, Program};
use crate::effect::{EffectCycler, EffectId};
use crate::state::ColorState;

/// Source of the pixels for each frame
#[derive(Debug, Clone)]
pub enum Scene {
    /// Solid color from the remote-controlled state machine
    Remote(ColorState),
    /// Autonomous effect rotation
    Showcase(EffectCycler),
}

impl Scene {
    pub fn new(config: &FirmwareConfig) -> Self {
        match config.program {
            Program::Remote => Self::Remote(ColorState::new(config.timings.hue_step)),
            Program::Showcase => Self::Showcase(EffectCycler::new(
                EffectId::Rainbow,
                config.timings.effect_dwell,
                config.timings.hue_step,
            )),
        }
    }
}

/// Owns the pixel buffer and fills it once per frame
pub struct Renderer<const MAX_LEDS: usize> {
    scene: Scene,
    frame_buffer: [Rgb; MAX_LEDS],
    pixel_count: usize,
}

impl<const MAX_LEDS: usize> Renderer<MAX_LEDS> {
    /// Create a renderer with a black frame
    ///
    /// The configured pixel count is clamped to the buffer size.
    pub fn new(config: &FirmwareConfig) -> Self {
        Self {
            scene: Scene::new(config),
            frame_buffer: [BLACK; MAX_LEDS],
            pixel_count: config.strip.pixel_count.min(MAX_LEDS),
        }
    }

    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Color state, when running the remote program
    pub const fn color_state(&self) -> Option<&ColorState> {
        match &self.scene {
            Scene::Remote(state) => Some(state),
            Scene::Showcase(_) => None,
        }
    }

    /// Number of pixels rendered per frame
    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Hand a decoded command to the active scene
    pub fn apply(&mut self, command: Command, now: Instant) {
        match &mut self.scene {
            Scene::Remote(state) => state.apply(command, now),
            Scene::Showcase(_) => {
                #[cfg(feature = "esp32-log")]
                println!("[Renderer.apply] showcase running, ignoring {:?}", command);
            }
        }
    }

    /// Render one frame
    pub fn render(&mut self, now: Instant) -> &[Rgb] {
        let frame = &mut self.frame_buffer[..self.pixel_count];
        match &mut self.scene {
            Scene::Remote(state) => {
                let color = state.tick(now);
                fill_solid(frame, color);
            }
            Scene::Showcase(cycler) => cycler.render(now, frame),
        }
        frame
    }
}

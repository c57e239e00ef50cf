//! [`StripSink`] adapter for `smart-leds` drivers
//!
//! Color correction and brightness are folded into one per-channel scale,
//! then channels are reordered for the wire.

use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripSink;
use crate::color::{ColorOrder, Rgb};
use crate::math8::scale8;

const NO_CORRECTION: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

/// Drives any `smart-leds` writer taking 8-bit RGB colors
pub struct SmartLedsSink<W> {
    writer: W,
    pixel_count: usize,
    order: ColorOrder,
    correction: Rgb,
    brightness: u8,
    /// Correction scaled by brightness
    adjustment: Rgb,
}

impl<W> SmartLedsSink<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    /// Wrap a writer; everything passes through unchanged until configured
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            pixel_count: usize::MAX,
            order: ColorOrder::Rgb,
            correction: NO_CORRECTION,
            brightness: 255,
            adjustment: NO_CORRECTION,
        }
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Per-channel output scale currently applied
    pub const fn adjustment(&self) -> Rgb {
        self.adjustment
    }

    fn update_adjustment(&mut self) {
        self.adjustment = Rgb {
            r: scale8(self.correction.r, self.brightness),
            g: scale8(self.correction.g, self.brightness),
            b: scale8(self.correction.b, self.brightness),
        };
    }
}

impl<W> StripSink for SmartLedsSink<W>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn configure(&mut self, pixel_count: usize, order: ColorOrder, correction: Rgb) {
        self.pixel_count = pixel_count;
        self.order = order;
        self.correction = correction;
        self.update_adjustment();
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
        self.update_adjustment();
    }

    fn show(&mut self, pixels: &[Rgb]) {
        let adjustment = self.adjustment;
        let order = self.order;
        let frame = pixels.iter().take(self.pixel_count).map(|pixel| {
            order.reorder(Rgb {
                r: scale8(pixel.r, adjustment.r),
                g: scale8(pixel.g, adjustment.g),
                b: scale8(pixel.b, adjustment.b),
            })
        });

        if self.writer.write(frame).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsSink.show] strip write failed, frame dropped");
        }
    }
}

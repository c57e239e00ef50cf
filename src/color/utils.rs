use crate::{
    color::{Hsv, Rgb, hsv2rgb},
    math8::{qadd8, scale8},
};

/// Build an RGB color from HSV components (hue on a 0-255 wheel)
#[inline]
pub fn hsv(hue: u8, sat: u8, val: u8) -> Rgb {
    hsv2rgb(Hsv { hue, sat, val })
}

/// Fill every pixel with one color
pub fn fill_solid(leds: &mut [Rgb], color: Rgb) {
    for led in leds {
        *led = color;
    }
}

/// Dim every pixel toward black by `amount` (0-255)
pub fn fade_to_black_by(leds: &mut [Rgb], amount: u8) {
    let keep = 255 - amount;
    for led in leds {
        led.r = scale8(led.r, keep);
        led.g = scale8(led.g, keep);
        led.b = scale8(led.b, keep);
    }
}

/// Per-channel saturating sum
#[inline]
pub fn add_saturating(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: qadd8(a.r, b.r),
        g: qadd8(a.g, b.g),
        b: qadd8(a.b, b.b),
    }
}

/// Per-channel maximum
#[inline]
pub fn max_blend(a: Rgb, b: Rgb) -> Rgb {
    Rgb {
        r: a.r.max(b.r),
        g: a.g.max(b.g),
        b: a.b.max(b.b),
    }
}

/// Linear interpolation between two colors
///
/// Each channel is computed as `start + (target - start) * progress` in
/// floating point and truncated, so slow fades do not band.
/// `progress` is clamped to 0.0-1.0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn lerp_color(start: Rgb, target: Rgb, progress: f32) -> Rgb {
    let progress = progress.clamp(0.0, 1.0);
    let channel = |from: u8, to: u8| -> u8 {
        let from = f32::from(from);
        let to = f32::from(to);
        (from + (to - from) * progress) as u8
    };
    Rgb {
        r: channel(start.r, target.r),
        g: channel(start.g, target.g),
        b: channel(start.b, target.b),
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
#[allow(clippy::cast_possible_truncation)]
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

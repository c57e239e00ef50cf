//! 16-entry color palettes with linear blending lookup (`FastLED` style)

use crate::{
    color::{Rgb, rgb_from_u32},
    math8::scale8,
};

/// Sixteen evenly spaced colors around a 0-255 index wheel
pub type Palette16 = [Rgb; 16];

/// Vivid party palette used by the pulsing band effect
pub const PARTY_COLORS: Palette16 = [
    rgb_from_u32(0x5500AB),
    rgb_from_u32(0x84007C),
    rgb_from_u32(0xB5004B),
    rgb_from_u32(0xE5001B),
    rgb_from_u32(0xE81700),
    rgb_from_u32(0xB84700),
    rgb_from_u32(0xAB7700),
    rgb_from_u32(0xABAB00),
    rgb_from_u32(0xAB5500),
    rgb_from_u32(0xDD2200),
    rgb_from_u32(0xF2000E),
    rgb_from_u32(0xC2003E),
    rgb_from_u32(0x8F0071),
    rgb_from_u32(0x5F00A1),
    rgb_from_u32(0x2F00D0),
    rgb_from_u32(0x0007F9),
];

/// Look up a palette color, blending linearly between neighbouring entries
///
/// The upper nibble of `index` selects the entry, the lower nibble the
/// blend toward the next one (wrapping from the last entry to the first).
/// `brightness` scales the result; 255 leaves it untouched.
pub fn color_from_palette(palette: &Palette16, index: u8, brightness: u8) -> Rgb {
    let entry = usize::from(index >> 4);
    let blend = index & 0x0F;

    let mut color = palette[entry];
    if blend != 0 {
        let next = palette[(entry + 1) % palette.len()];
        let amount_of_next = blend << 4;
        let amount_of_current = 255 - amount_of_next;
        color = Rgb {
            r: scale8(color.r, amount_of_current) + scale8(next.r, amount_of_next),
            g: scale8(color.g, amount_of_current) + scale8(next.g, amount_of_next),
            b: scale8(color.b, amount_of_current) + scale8(next.b, amount_of_next),
        };
    }

    match brightness {
        255 => color,
        0 => Rgb::default(),
        level => {
            let scale = level + 1;
            Rgb {
                r: scale8(color.r, scale),
                g: scale8(color.g, scale),
                b: scale8(color.b, scale),
            }
        }
    }
}

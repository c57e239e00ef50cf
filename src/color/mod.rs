mod order;
mod palette;
mod utils;

pub use order::ColorOrder;
pub use palette::{PARTY_COLORS, Palette16, color_from_palette};
use smart_leds::{RGB8, hsv::Hsv as HSV};
pub use utils::{
    add_saturating, fade_to_black_by, fill_solid, hsv, lerp_color, max_blend, rgb_from_u32,
};

pub use smart_leds::hsv::hsv2rgb;

pub type Rgb = RGB8;
pub type Hsv = HSV;

/// Pure black, the power-on content of the strip
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

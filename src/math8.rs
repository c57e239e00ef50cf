//! Fixed-width animation math (ported from `FastLED` lib8tion)
//!
//! Every function wraps explicitly at its counter width so animation
//! frequencies match `FastLED` on 8/16/32-bit targets.

use embassy_time::Instant;

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Scale a 16-bit value by a 16-bit factor (0-65535 = 0.0-1.0)
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale16(value: u16, scale: u16) -> u16 {
    ((value as u32 * (1 + scale as u32)) >> 16) as u16
}

/// Saturating 8-bit add
#[inline]
pub const fn qadd8(a: u8, b: u8) -> u8 {
    a.saturating_add(b)
}

const SIN8_TABLE: [u8; 8] = [0, 49, 49, 41, 90, 27, 117, 10];

/// 8-bit sine approximation, `theta` 0-255 maps to one full turn.
///
/// Output is centered at 128 (range 1-255).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn sin8(theta: u8) -> u8 {
    let mut offset = theta;
    if theta & 0x40 != 0 {
        offset = 255 - offset;
    }
    offset &= 0x3F;

    let mut sector_offset = offset & 0x0F;
    if theta & 0x40 != 0 {
        sector_offset += 1;
    }

    let section = (offset >> 4) as usize;
    let base = SIN8_TABLE[section * 2];
    let slope = SIN8_TABLE[section * 2 + 1];
    let mx = ((slope as u16 * sector_offset as u16) >> 4) as u8;

    let mut y = (mx + base) as i16;
    if theta & 0x80 != 0 {
        y = -y;
    }
    (y + 128) as u8
}

const SIN16_BASE: [u16; 8] = [0, 6393, 12539, 18204, 23170, 27245, 30273, 32137];
const SIN16_SLOPE: [u8; 8] = [49, 48, 44, 38, 31, 23, 14, 4];

/// 16-bit sine approximation, `theta` 0-65535 maps to one full turn.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub const fn sin16(theta: u16) -> i16 {
    let mut offset = (theta & 0x3FFF) >> 3;
    if theta & 0x4000 != 0 {
        offset = 2047 - offset;
    }

    let section = (offset / 256) as usize;
    let base = SIN16_BASE[section];
    let slope = SIN16_SLOPE[section] as u16;
    let sector_offset = (offset as u8 / 2) as u16;

    let y = (slope * sector_offset + base) as i16;
    if theta & 0x8000 != 0 { -y } else { y }
}

/// Sawtooth that wraps 0-65535 at `bpm88` beats per minute (Q8.8)
#[allow(clippy::cast_possible_truncation)]
pub fn beat88(bpm88: u16, now: Instant) -> u16 {
    // Arduino-style millisecond clock is 32 bits wide.
    let millis = now.as_millis() as u32;
    (millis.wrapping_mul(u32::from(bpm88)).wrapping_mul(280) >> 16) as u16
}

/// Sawtooth that wraps 0-65535 at `bpm` beats per minute
///
/// Values below 256 are whole beats per minute, larger values are Q8.8.
pub fn beat16(bpm: u16, now: Instant) -> u16 {
    let bpm88 = if bpm < 256 { bpm << 8 } else { bpm };
    beat88(bpm88, now)
}

/// Sawtooth that wraps 0-255 at `bpm` beats per minute
#[allow(clippy::cast_possible_truncation)]
pub fn beat8(bpm: u16, now: Instant) -> u8 {
    (beat16(bpm, now) >> 8) as u8
}

/// Sine wave oscillating between `lowest` and `highest` at `bpm`
pub fn beatsin8(bpm: u16, lowest: u8, highest: u8, now: Instant) -> u8 {
    let beat = beat8(bpm, now);
    let range = highest.wrapping_sub(lowest);
    lowest.wrapping_add(scale8(sin8(beat), range))
}

/// Sine wave oscillating between `lowest` and `highest` at `bpm`
#[allow(clippy::cast_sign_loss)]
pub fn beatsin16(bpm: u16, lowest: u16, highest: u16, now: Instant) -> u16 {
    let beat = beat16(bpm, now);
    let wave = (sin16(beat) as u16).wrapping_add(32768);
    let range = highest.wrapping_sub(lowest);
    lowest.wrapping_add(scale16(wave, range))
}

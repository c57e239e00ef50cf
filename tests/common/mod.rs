//! Shared test infrastructure for sirius-light integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use sirius_light::{Advertiser, ColorOrder, Instant, Rgb, StripSink};

pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const GREEN: Rgb = Rgb { r: 0, g: 255, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Instant at `ms` milliseconds after boot
pub fn at(ms: u64) -> Instant {
    Instant::from_millis(ms)
}

/// Strip sink recording every call
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub configured: Vec<(usize, ColorOrder, Rgb)>,
    pub brightness: Vec<u8>,
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingSink {
    pub fn last_frame(&self) -> &[Rgb] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl StripSink for RecordingSink {
    fn configure(&mut self, pixel_count: usize, order: ColorOrder, correction: Rgb) {
        self.configured.push((pixel_count, order, correction));
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness.push(level);
    }

    fn show(&mut self, pixels: &[Rgb]) {
        self.frames.push(pixels.to_vec());
    }
}

/// Advertiser counting restarts
#[derive(Debug, Default)]
pub struct CountingAdvertiser {
    pub restarts: usize,
}

impl Advertiser for CountingAdvertiser {
    fn start_advertising(&mut self) {
        self.restarts += 1;
    }
}

/// Assert two colors match within `tolerance` on every channel
pub fn assert_color_near(actual: Rgb, expected: Rgb, tolerance: u8) {
    let close = |a: u8, b: u8| a.abs_diff(b) <= tolerance;
    assert!(
        close(actual.r, expected.r) && close(actual.g, expected.g) && close(actual.b, expected.b),
        "expected {:?} within {} of {:?}",
        actual,
        tolerance,
        expected
    );
}

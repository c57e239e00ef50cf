//! Wall-clock driven hue counter

use embassy_time::{Duration, Instant};

/// Default time between two hue steps
pub const DEFAULT_HUE_STEP: Duration = Duration::from_millis(20);

/// Byte-sized hue clock advanced once per fixed interval
///
/// Elapsed time is converted to whole steps, and the remainder is carried
/// over, so the counter never drifts regardless of the frame rate.
#[derive(Debug, Clone)]
pub struct HueCounter {
    value: u8,
    step: Duration,
    /// Instant of the last counted step; `None` until first advanced
    anchor: Option<Instant>,
}

impl HueCounter {
    pub const fn new(step: Duration) -> Self {
        Self {
            value: 0,
            step,
            anchor: None,
        }
    }

    /// Current hue
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Overwrite the hue, keeping the step phase
    pub fn set(&mut self, value: u8) {
        self.value = value;
    }

    /// Restart the step clock at `now`
    ///
    /// Time spent while the counter was paused is not counted.
    pub fn resume(&mut self, now: Instant) {
        self.anchor = Some(now);
    }

    /// Advance by every full step elapsed since the last one
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, now: Instant) -> u8 {
        let Some(anchor) = self.anchor else {
            self.anchor = Some(now);
            return self.value;
        };

        let step_ms = self.step.as_millis().max(1);
        let steps = now.saturating_duration_since(anchor).as_millis() / step_ms;
        if steps > 0 {
            // Only the low byte matters for a wrapping counter
            self.value = self.value.wrapping_add(steps as u8);
            self.anchor = Some(anchor + Duration::from_millis(steps * step_ms));
        }
        self.value
    }
}

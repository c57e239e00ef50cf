//! Top-level cooperative control loop.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::Command;
use crate::config::FirmwareConfig;
use crate::link::{ConnectionEdge, ConnectionState, LinkReceiver};
use crate::renderer::Renderer;
use crate::{Advertiser, StripSink};

/// Target frame rate (60 FPS).
pub const FPS: u32 = 60;

/// Frame duration derived from the target frame rate.
pub const FRAME_DURATION: Duration = Duration::from_millis(1000 / FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Firmware main loop.
///
/// Each tick:
/// - Edge-detects the connection and re-arms advertising after a disconnect
/// - Decodes and applies every queued command
/// - Renders the frame and pushes it to the strip
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// static LINK: Link<8> = Link::new();
///
/// let mut control = ControlLoop::<_, _, 144, 8>::new(sink, radio, LINK.receiver(), &config);
/// loop {
///     let result = control.tick(Instant::now());
///     block_for(result.sleep_duration);
/// }
/// ```
pub struct ControlLoop<'a, S, A, const MAX_LEDS: usize, const LINK_SIZE: usize>
where
    S: StripSink,
    A: Advertiser,
{
    sink: S,
    advertiser: A,
    link: LinkReceiver<'a, LINK_SIZE>,
    renderer: Renderer<MAX_LEDS>,
    connection: ConnectionState,
    settle_delay: Duration,
    /// Pending re-advertise deadline after a disconnect
    readvertise_at: Option<Instant>,
    next_frame: Instant,
}

impl<'a, S, A, const MAX_LEDS: usize, const LINK_SIZE: usize>
    ControlLoop<'a, S, A, MAX_LEDS, LINK_SIZE>
where
    S: StripSink,
    A: Advertiser,
{
    /// Configure the strip and build the loop.
    pub fn new(
        mut sink: S,
        advertiser: A,
        link: LinkReceiver<'a, LINK_SIZE>,
        config: &FirmwareConfig,
    ) -> Self {
        let renderer = Renderer::new(config);
        let strip = config.strip;

        sink.configure(renderer.pixel_count(), strip.color_order, strip.correction);
        sink.set_brightness(strip.brightness);

        #[cfg(feature = "esp32-log")]
        println!(
            "[ControlLoop.new] started: {} pixels, {:?} order, brightness {}, {:?} program",
            renderer.pixel_count(),
            strip.color_order,
            strip.brightness,
            config.program
        );

        Self {
            sink,
            advertiser,
            link,
            renderer,
            connection: ConnectionState::default(),
            settle_delay: config.timings.settle_delay,
            readvertise_at: None,
            next_frame: Instant::from_millis(0),
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        if now > self.next_frame + FRAME_DURATION * 2 {
            self.next_frame = now;
        }

        self.poll_connection(now);
        self.process_commands(now);

        let frame = self.renderer.render(now);
        self.sink.show(frame);

        self.next_frame += FRAME_DURATION;
        let sleep_duration = if self.next_frame > now {
            self.next_frame - now
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    pub const fn renderer(&self) -> &Renderer<MAX_LEDS> {
        &self.renderer
    }

    pub const fn connection(&self) -> ConnectionState {
        self.connection
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub const fn advertiser(&self) -> &A {
        &self.advertiser
    }

    /// React to connection edges and run the re-advertise timer
    fn poll_connection(&mut self, now: Instant) {
        match self.connection.update(self.link.is_connected()) {
            Some(ConnectionEdge::Connected) => {
                #[cfg(feature = "esp32-log")]
                println!("[ControlLoop.poll_connection] central connected");
            }
            Some(ConnectionEdge::Disconnected) => {
                #[cfg(feature = "esp32-log")]
                println!("[ControlLoop.poll_connection] central disconnected");
                self.readvertise_at = Some(now + self.settle_delay);
            }
            None => {}
        }

        if let Some(deadline) = self.readvertise_at {
            if now >= deadline {
                self.readvertise_at = None;
                self.advertiser.start_advertising();
                #[cfg(feature = "esp32-log")]
                println!("[ControlLoop.poll_connection] advertising restarted");
            }
        }
    }

    /// Drain the inbox, dropping anything that does not decode
    fn process_commands(&mut self, now: Instant) {
        while let Ok(message) = self.link.try_receive() {
            match Command::parse(&message) {
                Ok(command) => {
                    #[cfg(feature = "esp32-log")]
                    println!("[ControlLoop.process_commands] {:?}", command);
                    self.renderer.apply(command, now);
                }
                Err(_err) => {
                    #[cfg(feature = "esp32-log")]
                    println!(
                        "[ControlLoop.process_commands] dropped message: {}",
                        _err.as_str()
                    );
                }
            }
        }
    }
}

//! Bridge between the wireless transport and the control loop.
//!
//! Transport callbacks fire from their own execution context. They only ever
//! touch a [`Link`]: the connection flag is a single atomic, inbound messages
//! go through a bounded queue guarded by `critical-section`. The control loop
//! drains the link once per frame and is the only writer of the color state,
//! so a command can never be observed half-applied during a render.

use core::cell::RefCell;
use core::sync::atomic::{AtomicBool, Ordering};

use critical_section::Mutex;
use heapless::{Deque, Vec};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Longest accepted inbound message, in bytes
pub const MESSAGE_CAPACITY: usize = 32;

/// Raw inbound message
pub type Message = Vec<u8, MESSAGE_CAPACITY>;

/// Error returned to the transport when a message cannot be queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// The loop has not drained earlier messages yet
    QueueFull,
    /// Message exceeds [`MESSAGE_CAPACITY`]
    MessageTooLong,
}

/// Error returned when trying to receive from an empty link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Shared transport state, suitable for a `static`.
pub struct Link<const SIZE: usize> {
    connected: AtomicBool,
    inbox: Mutex<RefCell<Deque<Message, SIZE>>>,
}

impl<const SIZE: usize> Link<SIZE> {
    /// Create a disconnected link with an empty inbox.
    pub const fn new() -> Self {
        Self {
            connected: AtomicBool::new(false),
            inbox: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for the transport callbacks.
    pub const fn sender(&self) -> LinkSender<'_, SIZE> {
        LinkSender { link: self }
    }

    /// Handle for the control loop.
    pub const fn receiver(&self) -> LinkReceiver<'_, SIZE> {
        LinkReceiver { link: self }
    }
}

impl<const SIZE: usize> Default for Link<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Transport side of a [`Link`].
#[derive(Clone, Copy)]
pub struct LinkSender<'a, const SIZE: usize> {
    link: &'a Link<SIZE>,
}

impl<const SIZE: usize> LinkSender<'_, SIZE> {
    /// A central connected.
    pub fn on_connect(&self) {
        self.link.connected.store(true, Ordering::Release);
    }

    /// The central went away.
    pub fn on_disconnect(&self) {
        self.link.connected.store(false, Ordering::Release);
    }

    /// Queue a message written by the central.
    ///
    /// The message is copied; the transport may reuse its buffer right away.
    pub fn on_message(&self, bytes: &[u8]) -> Result<(), LinkError> {
        let result = Message::from_slice(bytes)
            .map_err(|_| LinkError::MessageTooLong)
            .and_then(|message| {
                critical_section::with(|cs| {
                    let mut inbox = self.link.inbox.borrow(cs).borrow_mut();
                    inbox
                        .push_back(message)
                        .map_err(|_| LinkError::QueueFull)
                })
            });

        #[cfg(feature = "esp32-log")]
        {
            if let Err(err) = result {
                println!("[LinkSender.on_message] message rejected: {:?}", err);
            }
        }

        result
    }
}

/// Control loop side of a [`Link`].
#[derive(Clone, Copy)]
pub struct LinkReceiver<'a, const SIZE: usize> {
    link: &'a Link<SIZE>,
}

impl<const SIZE: usize> LinkReceiver<'_, SIZE> {
    /// Current connection level as last reported by the transport.
    pub fn is_connected(&self) -> bool {
        self.link.connected.load(Ordering::Acquire)
    }

    /// Take the oldest queued message.
    pub fn try_receive(&self) -> Result<Message, TryReceiveError> {
        critical_section::with(|cs| {
            let mut inbox = self.link.inbox.borrow(cs).borrow_mut();
            inbox.pop_front().ok_or(TryReceiveError)
        })
    }
}

/// Connection edge seen by the control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionEdge {
    Connected,
    Disconnected,
}

/// Edge detector over the connection level
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectionState {
    pub connected: bool,
    pub previously_connected: bool,
}

impl ConnectionState {
    /// Record the current level and report a change since the last call.
    pub fn update(&mut self, connected: bool) -> Option<ConnectionEdge> {
        self.connected = connected;
        let edge = match (self.previously_connected, connected) {
            (false, true) => Some(ConnectionEdge::Connected),
            (true, false) => Some(ConnectionEdge::Disconnected),
            _ => None,
        };
        self.previously_connected = connected;
        edge
    }
}

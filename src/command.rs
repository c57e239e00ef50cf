//! Remote command decoding
//!
//! Commands arrive as short ASCII messages. The first two characters select
//! the command, comma separated integers follow:
//!
//! | Message               | Command                      |
//! |-----------------------|------------------------------|
//! | `C:<r>,<g>,<b>`        | [`Command::SetColor`]        |
//! | `H:<hue>`             | [`Command::SetHue`]          |
//! | `M:<0\|1>`            | [`Command::SetAutoMode`]     |
//! | `T:<r>,<g>,<b>[,<ms>]` | [`Command::Transition`]      |

use embassy_time::Duration;
use heapless::Vec;

use crate::color::Rgb;

/// Transition length used when `T:` carries no duration
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(1000);

const MAX_FIELDS: usize = 4;

/// A decoded remote command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Show a fixed RGB color
    SetColor(Rgb),
    /// Show a fixed, fully saturated hue
    SetHue(u8),
    /// Enable or disable autonomous hue cycling
    SetAutoMode(bool),
    /// Fade from the displayed color to `color`
    Transition { color: Rgb, duration: Duration },
}

/// Reason a message was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Message is not valid UTF-8
    NotText,
    /// Message is shorter than a command prefix
    TooShort,
    /// Prefix does not name a known command
    UnknownPrefix,
    /// A field is not a decimal integer
    InvalidNumber,
    /// Wrong number of fields for the command
    FieldCount,
}

impl ParseError {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotText => "not text",
            Self::TooShort => "too short",
            Self::UnknownPrefix => "unknown prefix",
            Self::InvalidNumber => "invalid number",
            Self::FieldCount => "wrong field count",
        }
    }
}

impl Command {
    /// Decode a raw message
    ///
    /// Trailing whitespace and NUL padding are ignored.
    pub fn parse(raw: &[u8]) -> Result<Self, ParseError> {
        let text = core::str::from_utf8(raw).map_err(|_| ParseError::NotText)?;
        let text = text.trim_end_matches(|c: char| c.is_ascii_whitespace() || c == '\0');

        let (Some(prefix), Some(payload)) = (text.get(..2), text.get(2..)) else {
            return Err(ParseError::TooShort);
        };

        match prefix {
            "C:" => {
                let fields = parse_fields(payload)?;
                let [r, g, b] = fields.as_slice() else {
                    return Err(ParseError::FieldCount);
                };
                Ok(Self::SetColor(rgb(*r, *g, *b)))
            }
            "H:" => {
                let fields = parse_fields(payload)?;
                let [hue] = fields.as_slice() else {
                    return Err(ParseError::FieldCount);
                };
                Ok(Self::SetHue(low_byte(*hue)))
            }
            "M:" => {
                let fields = parse_fields(payload)?;
                let [mode] = fields.as_slice() else {
                    return Err(ParseError::FieldCount);
                };
                Ok(Self::SetAutoMode(*mode == 1))
            }
            "T:" => {
                let fields = parse_fields(payload)?;
                let (color, duration) = match fields.as_slice() {
                    [r, g, b] => (rgb(*r, *g, *b), DEFAULT_TRANSITION),
                    [r, g, b, ms] => {
                        // Negative durations collapse to the shortest fade
                        let ms = u64::try_from(*ms).unwrap_or(0);
                        (rgb(*r, *g, *b), Duration::from_millis(ms))
                    }
                    _ => return Err(ParseError::FieldCount),
                };
                Ok(Self::Transition { color, duration })
            }
            _ => Err(ParseError::UnknownPrefix),
        }
    }
}

fn parse_fields(payload: &str) -> Result<Vec<i32, MAX_FIELDS>, ParseError> {
    let mut fields = Vec::new();
    for field in payload.split(',') {
        let value = field
            .trim()
            .parse::<i32>()
            .map_err(|_| ParseError::InvalidNumber)?;
        fields.push(value).map_err(|_| ParseError::FieldCount)?;
    }
    Ok(fields)
}

/// Keep the low byte, as an 8-bit register assignment would
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn low_byte(value: i32) -> u8 {
    value as u8
}

const fn rgb(r: i32, g: i32, b: i32) -> Rgb {
    Rgb {
        r: low_byte(r),
        g: low_byte(g),
        b: low_byte(b),
    }
}

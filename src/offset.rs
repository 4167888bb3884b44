//! Offset parsing and the non-zero offset type
//!
//! Offsets are given in bytes. A positive offset drops bytes from the
//! start of the input and pads the end of the output; a negative offset
//! pads the start and drops bytes from the end.

use std::fmt;
use std::num::NonZeroI64;

/// Bytes per CD audio sample (16 bits per channel, 2 channels)
pub const CD_BYTES_PER_SAMPLE: i64 = 4;

/// Parsed offset text
///
/// `value` follows C `atoll`: leading whitespace, an optional sign, then
/// the longest run of decimal digits. `ignored` holds whatever followed
/// the digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedOffset<'a> {
    pub value: i64,
    pub ignored: &'a str,
}

/// Parse offset text the way the classic command line tool did
///
/// Text without digits yields zero, which callers treat as a no-op.
/// Values outside the `i64` range saturate.
pub fn parse_offset(text: &str) -> ParsedOffset<'_> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return ParsedOffset {
            value: 0,
            ignored: trimmed,
        };
    }

    let mut value: i64 = 0;
    for b in rest[..digits].bytes() {
        let digit = i64::from(b - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    ParsedOffset {
        value,
        ignored: &rest[digits..],
    }
}

/// Direction of a shift
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Skip input bytes at the start, pad the end of the output
    Forward,
    /// Pad the start of the output, drop input bytes at the end
    Backward,
}

/// A non-zero byte offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset(NonZeroI64);

impl Offset {
    /// Returns `None` for a zero offset, which has nothing to shift
    pub fn new(bytes: i64) -> Option<Self> {
        NonZeroI64::new(bytes).map(Offset)
    }

    /// Offset for a count of CD audio samples
    pub fn from_cd_samples(samples: i64) -> Option<Self> {
        Self::new(samples.saturating_mul(CD_BYTES_PER_SAMPLE))
    }

    pub fn bytes(self) -> i64 {
        self.0.get()
    }

    /// Absolute size of the shift in bytes
    pub fn magnitude(self) -> u64 {
        self.0.get().unsigned_abs()
    }

    pub fn direction(self) -> Direction {
        if self.0.get() > 0 {
            Direction::Forward
        } else {
            Direction::Backward
        }
    }

    /// The offset that undoes this one
    pub fn reversed(self) -> Option<Self> {
        self.0.get().checked_neg().and_then(Self::new)
    }

    /// Whether this offset leaves at least one input byte in the output
    pub fn fits(self, length: u64) -> bool {
        self.magnitude() < length
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

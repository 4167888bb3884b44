//! # boffset
//!
//! Shifts the byte content of a binary file forward or backward by a fixed
//! offset. The output has the same size as the input; the vacated region is
//! filled with zero bytes. The main use is fixing the read or write offset
//! of CD drives in ripped audio images, where one CD audio sample is four
//! bytes (16-bit stereo).
//!
//! ```text
//! input:      01 02 03 04 05 06 07 08
//! offset +3:  04 05 06 07 08 00 00 00
//! offset -3:  00 00 00 01 02 03 04 05
//! ```
//!

pub mod config;
pub mod error;
pub mod offset;
pub mod shifter;

pub use config::{Padding, ShiftConfig};
pub use error::{ShiftError, ShiftResult};
pub use offset::{parse_offset, Direction, Offset, CD_BYTES_PER_SAMPLE};
pub use shifter::{shift, shift_stream, shift_with, ShiftOutcome, StreamStats, BLOCK_SIZE};

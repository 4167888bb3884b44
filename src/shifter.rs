//! Byte offset shifter
//!
//! Copies an input file into a freshly created output file of the same
//! length, moved forward or backward by a fixed number of bytes. The
//! vacated region is zero-filled. Data moves in `BLOCK_SIZE` chunks, so
//! memory use does not depend on the file size or the offset.

use crate::config::{Padding, ShiftConfig};
use crate::error::{ShiftError, ShiftResult};
use crate::offset::{Direction, Offset};
use log::{debug, info, trace, warn};
use std::fs::{File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Copy chunk size in bytes
pub const BLOCK_SIZE: usize = 4096;

/// Result of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftOutcome {
    /// Zero offset; no file was opened or created
    NothingToDo,
    /// Output written
    Shifted {
        offset: i64,
        length: u64,
        copied: u64,
        padded: u64,
    },
}

/// Byte counts produced by [`shift_stream`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamStats {
    /// Input bytes copied to the output
    pub copied: u64,
    /// Zero bytes added to the output
    pub padded: u64,
}

impl StreamStats {
    pub fn total(&self) -> u64 {
        self.copied + self.padded
    }
}

/// Shift `input` by `offset` bytes into the new file `output`
pub fn shift(offset: i64, input: &Path, output: &Path) -> ShiftResult<ShiftOutcome> {
    shift_with(&ShiftConfig::new(offset, input, output))
}

/// Run a shift described by `config`
///
/// Checks happen in a fixed order: zero offset, input access, offset
/// against input length, then output creation. The output is created
/// exclusively, so an existing file is never touched. If copying fails
/// after the output exists, the partial file stays on disk.
pub fn shift_with(config: &ShiftConfig) -> ShiftResult<ShiftOutcome> {
    if config.offset().is_none() {
        info!("Zero offset: Nothing to do");
        return Ok(ShiftOutcome::NothingToDo);
    }

    let mut input = File::open(&config.input).map_err(|source| ShiftError::InputAccess {
        path: config.input.clone(),
        source,
    })?;

    let length = input.seek(SeekFrom::End(0))?;
    debug!("Input {} is {} bytes", config.input.display(), length);

    let Some(offset) = config.validate(length)? else {
        return Ok(ShiftOutcome::NothingToDo);
    };

    let mut output = create_output(&config.output)?;

    info!("Using offset: {} bytes", offset);

    let stats = match shift_stream(offset, &mut input, length, &mut output, config.padding) {
        Ok(stats) => stats,
        Err(err) => {
            warn!("Partial output left at {}", config.output.display());
            return Err(err.into());
        }
    };
    output.flush()?;

    debug!(
        "Wrote {} bytes to {} ({} copied, {} padding)",
        stats.total(),
        config.output.display(),
        stats.copied,
        stats.padded
    );

    Ok(ShiftOutcome::Shifted {
        offset: offset.bytes(),
        length,
        copied: stats.copied,
        padded: stats.padded,
    })
}

fn create_output(path: &Path) -> ShiftResult<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|source| match source.kind() {
            io::ErrorKind::AlreadyExists => ShiftError::OutputExists(path.to_path_buf()),
            _ => ShiftError::OutputAccess {
                path: path.to_path_buf(),
                source,
            },
        })
}

/// Shift `length` bytes of `input` into `output`
///
/// Both streams are rewound to their start. `output` ends up exactly
/// `length` bytes long when it starts empty. Fails with `InvalidInput`
/// if the offset does not fit inside `length`.
pub fn shift_stream<R, W>(
    offset: Offset,
    input: &mut R,
    length: u64,
    output: &mut W,
    padding: Padding,
) -> io::Result<StreamStats>
where
    R: Read + Seek,
    W: Write + Seek,
{
    if !offset.fits(length) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("offset {} does not fit in {} bytes", offset, length),
        ));
    }

    let magnitude = offset.magnitude();
    let mut stats = StreamStats::default();

    output.seek(SeekFrom::Start(0))?;
    match offset.direction() {
        Direction::Backward => {
            input.seek(SeekFrom::Start(0))?;
            stats.padded += pad(output, magnitude, padding)?;
        }
        Direction::Forward => {
            input.seek(SeekFrom::Start(magnitude))?;
        }
    }

    stats.copied = copy_chunked(input, output, length - magnitude)?;

    // Tail padding: the skipped bytes of a forward shift, plus anything
    // the input failed to deliver
    if stats.total() < length {
        stats.padded += pad(output, length - stats.total(), padding)?;
    }

    Ok(stats)
}

/// Copy at most `budget` bytes, one block at a time
fn copy_chunked<R: Read, W: Write>(input: &mut R, output: &mut W, budget: u64) -> io::Result<u64> {
    let mut buffer = [0u8; BLOCK_SIZE];
    let mut copied: u64 = 0;

    while copied < budget {
        let want = (budget - copied).min(BLOCK_SIZE as u64) as usize;
        let len = match input.read(&mut buffer[..want]) {
            Ok(0) => break,
            Ok(len) => len,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        };
        output.write_all(&buffer[..len])?;
        copied += len as u64;
        trace!("Copied {} bytes ({}/{})", len, copied, budget);
    }

    if copied < budget {
        warn!(
            "Input ended {} bytes early, padding the remainder",
            budget - copied
        );
    }

    Ok(copied)
}

/// Append `count` zero bytes at the current output position
fn pad<W: Write + Seek>(output: &mut W, count: u64, padding: Padding) -> io::Result<u64> {
    if count == 0 {
        return Ok(0);
    }

    match padding {
        Padding::ZeroFill => {
            let zeros = [0u8; BLOCK_SIZE];
            let mut remaining = count;
            while remaining > 0 {
                let len = remaining.min(BLOCK_SIZE as u64) as usize;
                output.write_all(&zeros[..len])?;
                remaining -= len as u64;
            }
        }
        Padding::Sparse => {
            let skip = i64::try_from(count - 1).map_err(|_| {
                io::Error::new(io::ErrorKind::InvalidInput, "padding too large to seek over")
            })?;
            output.seek(SeekFrom::Current(skip))?;
            output.write_all(&[0])?;
        }
    }

    trace!("Padded {} zero bytes", count);
    Ok(count)
}

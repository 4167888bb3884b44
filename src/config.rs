//! Configuration for a shift run
//!
//! This module holds the parameters of a single run and the checks that
//! depend on them. Nothing is read from files or the environment.

use crate::error::{ShiftError, ShiftResult};
use crate::offset::Offset;
use std::path::PathBuf;

/// How the zero-filled region of the output is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Write every padding byte explicitly
    #[default]
    ZeroFill,
    /// Seek past the gap and write only its last byte
    ///
    /// The skipped region reads back as zero only where the filesystem
    /// supports holes or the target is a fresh in-memory buffer.
    Sparse,
}

/// Parameters of a single shift run
#[derive(Debug, Clone)]
pub struct ShiftConfig {
    /// Signed offset in bytes, zero meaning nothing to do
    pub offset: i64,
    /// Existing file to read
    pub input: PathBuf,
    /// File to create; must not exist yet
    pub output: PathBuf,
    /// Padding strategy
    pub padding: Padding,
}

impl ShiftConfig {
    pub fn new(offset: i64, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            offset,
            input: input.into(),
            output: output.into(),
            padding: Padding::default(),
        }
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Non-zero offset for this run, `None` when there is nothing to shift
    pub fn offset(&self) -> Option<Offset> {
        Offset::new(self.offset)
    }

    /// Check the offset against the input length
    pub fn validate(&self, input_length: u64) -> ShiftResult<Option<Offset>> {
        match self.offset() {
            None => Ok(None),
            Some(offset) if offset.fits(input_length) => Ok(Some(offset)),
            Some(offset) => Err(ShiftError::OffsetTooLarge {
                offset: offset.bytes(),
                length: input_length,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_padding_is_zero_fill() {
        let config = ShiftConfig::new(3, "in.bin", "out.bin");
        assert_eq!(config.padding, Padding::ZeroFill);

        let config = config.padding(Padding::Sparse);
        assert_eq!(config.padding, Padding::Sparse);
    }

    #[test]
    fn test_validate_offset_against_length() {
        assert_eq!(
            ShiftConfig::new(9, "a", "b").validate(10).unwrap(),
            Offset::new(9)
        );
        assert_eq!(
            ShiftConfig::new(-9, "a", "b").validate(10).unwrap(),
            Offset::new(-9)
        );

        for offset in [10, -10, 11, i64::MIN] {
            match ShiftConfig::new(offset, "a", "b").validate(10) {
                Err(ShiftError::OffsetTooLarge { offset: o, length }) => {
                    assert_eq!(o, offset);
                    assert_eq!(length, 10);
                }
                other => panic!("expected OffsetTooLarge for {}, got {:?}", offset, other),
            }
        }
    }

    #[test]
    fn test_validate_zero_offset_is_not_an_error() {
        assert!(ShiftConfig::new(0, "a", "b").validate(0).unwrap().is_none());
        assert!(ShiftConfig::new(0, "a", "b").validate(10).unwrap().is_none());
    }
}

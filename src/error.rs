//! Error types for the offset shifter
//!
//! Every failure is terminal for the run. Each variant maps to the
//! process exit code reported by the command line tool.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for a shift run
#[derive(Debug, Error)]
pub enum ShiftError {
    /// Wrong number of command line arguments
    #[error("Expected exactly <offset> <infile> <outfile>")]
    Usage,

    /// Input file is missing or cannot be opened for reading
    #[error("Input file error: {path}: {source}")]
    InputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Offset magnitude is not strictly smaller than the input length
    #[error("Offset >= input file size ({offset} bytes, input is {length} bytes)")]
    OffsetTooLarge { offset: i64, length: u64 },

    /// Refusing to overwrite an existing output file
    #[error("Output file exists: {0}")]
    OutputExists(PathBuf),

    /// Output file cannot be created
    #[error("Output file error: {path}: {source}")]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Read, write or seek failure while copying
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl ShiftError {
    /// Process exit code for this failure
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Result type for shift operations
pub type ShiftResult<T> = std::result::Result<T, ShiftError>;

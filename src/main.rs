//! Binary file offset command line tool
//!
//! Shifts a file forward or backward by a number of bytes, padding with
//! zeros so the output keeps the input size.
//!
//!   Usage: boffset [+|-]<offset> <infile> <outfile>
//!
//! The offset is in bytes, not CD audio samples. Multiply a sample offset
//! by four (16 bits per sample, 2 channels) to get bytes.

use boffset::{parse_offset, shift_with, ShiftConfig, ShiftError};
use log::warn;
use std::env;
use std::process;

/// Command line arguments structure
struct Args {
    offset: i64,
    input_file: String,
    output_file: String,
}

impl Args {
    /// Parse exactly `<offset> <infile> <outfile>`
    ///
    /// No option parsing: `-3` is an offset, not a flag.
    fn parse(args: &[String]) -> Result<Self, ShiftError> {
        let [_, offset, input_file, output_file] = args else {
            return Err(ShiftError::Usage);
        };

        let parsed = parse_offset(offset);
        if !parsed.ignored.is_empty() {
            warn!(
                "Ignoring trailing text {:?} in offset {:?}",
                parsed.ignored, offset
            );
        }

        Ok(Args {
            offset: parsed.value,
            input_file: input_file.clone(),
            output_file: output_file.clone(),
        })
    }
}

/// Print usage information to stderr
fn print_usage(program: &str) {
    eprintln!("Usage: {} [+|-]<offset> <infile> <outfile>", program);
}

fn main() {
    // Informational messages go to stderr; RUST_LOG overrides the level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("boffset");

    let args = match Args::parse(&argv) {
        Ok(args) => args,
        Err(err) => {
            print_usage(program);
            process::exit(err.exit_code());
        }
    };

    let config = ShiftConfig::new(args.offset, args.input_file, args.output_file);
    if let Err(err) = shift_with(&config) {
        eprintln!("Fatal: {}", err);
        process::exit(err.exit_code());
    }
}

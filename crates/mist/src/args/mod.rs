//! Args Module - command-line schema for the MIST pipeline
//!
//! - validators: single-token checks (positive ints, unit floats, booleans)
//! - choices: enumerated option values
//! - main_args: `MainArgs`, the parsed configuration record
//!
//! ```text
//! mist --exec-mode train --data dataset.json --results out/ --gpus 0 1 --amp
//! ```

pub mod choices;
pub mod main_args;
pub mod validators;

#[cfg(test)]
mod proptests;

use clap::Parser;
use std::ffi::OsString;

use crate::error::ArgsError;

pub use choices::{BlendMode, ChoiceParser, ExecMode, LossKind, LrScheduler, ModelKind, OptimizerKind};
pub use main_args::MainArgs;
pub use validators::{float, float_0_1, integer, non_negative_int, positive_int, str2bool};

/// Name used in usage lines and diagnostics
pub const PROGRAM_NAME: &str = "mist";

/// Parse option tokens (without the program name) into a `MainArgs`
pub fn parse<I, T>(tokens: I) -> Result<MainArgs, ArgsError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv = std::iter::once(OsString::from(PROGRAM_NAME))
        .chain(tokens.into_iter().map(Into::<OsString>::into));
    MainArgs::try_parse_from(argv).map_err(ArgsError::from)
}

/// Parse, or terminate the process.
///
/// Help goes to stdout with status 0; any other failure is reported on
/// stderr with a non-zero status before any pipeline stage starts.
pub fn parse_or_exit<I, T>(tokens: I) -> MainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    match parse(tokens) {
        Ok(args) => args,
        Err(ArgsError::Help(text)) => {
            print!("{text}");
            std::process::exit(0);
        }
        // clap already rendered usage and hint
        Err(ArgsError::Usage(text)) => {
            eprint!("{text}");
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("{PROGRAM_NAME}: error ({}): {e}", e.kind());
            eprintln!("For more information, try '--help'.");
            std::process::exit(e.exit_code());
        }
    }
}

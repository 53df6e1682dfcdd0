//! Error types for argument validation and parsing
//!
//! `ValueError` is produced by the single-token validators in
//! [`crate::args::validators`]. `ArgsError` is what [`crate::args::parse`]
//! returns; it is built from the underlying `clap::Error` so callers never
//! have to inspect clap internals.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use std::error::Error as _;

/// Failure of a single-token validator
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("expected an integer but got {0}")]
    NotAnInteger(String),

    #[error("expected a float but got {0}")]
    NotAFloat(String),

    #[error("expected a boolean (yes/true/t/y/1 or no/false/f/n/0) but got {0}")]
    NotABoolean(String),

    #[error("expected a positive integer but got {0}")]
    NotPositive(String),

    #[error("expected a non-negative integer but got {0}")]
    Negative(String),

    #[error("expected a float in range [0, 1] but got {0}")]
    OutOfUnitInterval(String),

    #[error("expected one of {} but got '{value}'", .choices.join(", "))]
    NotAChoice { value: String, choices: Vec<String> },
}

impl ValueError {
    /// True when the token parsed but its value is outside the allowed bounds
    pub fn is_range(&self) -> bool {
        matches!(
            self,
            ValueError::NotPositive(_) | ValueError::Negative(_) | ValueError::OutOfUnitInterval(_)
        )
    }
}

/// Failure of a full argument parse
#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error("invalid value '{value}' for {option}: {reason}")]
    Type {
        option: String,
        value: String,
        reason: String,
    },

    #[error("value '{value}' for {option} is out of range: {reason}")]
    Range {
        option: String,
        value: String,
        reason: String,
    },

    #[error("invalid choice '{value}' for {option} (choose from {})", .choices.join(", "))]
    Choice {
        option: String,
        value: String,
        choices: Vec<String>,
    },

    #[error("unrecognized option: {token}")]
    UnknownOption { token: String },

    #[error("{0}")]
    Usage(String),

    /// Rendered help text. Not a failure from the user's point of view.
    #[error("{0}")]
    Help(String),
}

impl ArgsError {
    /// Process exit status for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            ArgsError::Help(_) => 0,
            _ => 2,
        }
    }

    /// Name of the error class, as reported in diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ArgsError::Type { .. } => "TypeError",
            ArgsError::Range { .. } => "RangeError",
            ArgsError::Choice { .. } => "ChoiceError",
            ArgsError::UnknownOption { .. } => "UnknownOptionError",
            ArgsError::Usage(_) => "UsageError",
            ArgsError::Help(_) => "Help",
        }
    }

    /// Option the error refers to, if any
    pub fn option(&self) -> Option<&str> {
        match self {
            ArgsError::Type { option, .. }
            | ArgsError::Range { option, .. }
            | ArgsError::Choice { option, .. } => Some(option),
            ArgsError::UnknownOption { token } => Some(token),
            ArgsError::Usage(_) | ArgsError::Help(_) => None,
        }
    }
}

fn context(err: &clap::Error, kind: ContextKind) -> Option<String> {
    err.get(kind).map(|v| v.to_string())
}

/// clap renders the offending argument as e.g. `--batch-size <BATCH_SIZE>`
fn option_name(err: &clap::Error) -> String {
    context(err, ContextKind::InvalidArg)
        .and_then(|arg| arg.split_whitespace().next().map(str::to_string))
        .unwrap_or_default()
}

impl From<clap::Error> for ArgsError {
    fn from(err: clap::Error) -> Self {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                ArgsError::Help(err.render().to_string())
            }
            ErrorKind::UnknownArgument => ArgsError::UnknownOption {
                token: context(&err, ContextKind::InvalidArg).unwrap_or_default(),
            },
            ErrorKind::InvalidValue => {
                let value = context(&err, ContextKind::InvalidValue).unwrap_or_default();
                match err.get(ContextKind::ValidValue) {
                    Some(ContextValue::Strings(choices)) if !value.is_empty() => {
                        ArgsError::Choice {
                            option: option_name(&err),
                            value,
                            choices: choices.clone(),
                        }
                    }
                    // Missing value after an option that requires one
                    _ => ArgsError::Usage(err.render().to_string()),
                }
            }
            ErrorKind::ValueValidation => {
                let option = option_name(&err);
                let value = context(&err, ContextKind::InvalidValue).unwrap_or_default();
                let source = err.source();
                match source.and_then(|s| s.downcast_ref::<ValueError>()) {
                    Some(ValueError::NotAChoice { value, choices }) => ArgsError::Choice {
                        option,
                        value: value.clone(),
                        choices: choices.clone(),
                    },
                    Some(v) if v.is_range() => ArgsError::Range {
                        option,
                        value,
                        reason: v.to_string(),
                    },
                    Some(v) => ArgsError::Type {
                        option,
                        value,
                        reason: v.to_string(),
                    },
                    None => ArgsError::Type {
                        option,
                        value,
                        reason: source.map(|s| s.to_string()).unwrap_or_default(),
                    },
                }
            }
            _ => ArgsError::Usage(err.render().to_string()),
        }
    }
}

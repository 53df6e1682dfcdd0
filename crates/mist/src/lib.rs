//! MIST - command-line configuration for the MIST medical image
//! segmentation pipeline.
//!
//! [`args::parse`] turns option tokens into a validated [`MainArgs`];
//! everything downstream (analysis, preprocessing, training, inference)
//! consumes that record and is not part of this crate.

pub mod args;
pub mod error;
pub mod logging;
pub mod record;

pub use args::{parse, MainArgs};
pub use error::{ArgsError, ValueError};

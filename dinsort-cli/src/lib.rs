//! dinsort CLI library
//!
//! This library provides the command-line interface for the dinsort
//! DIN 5007-2 collation library.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};

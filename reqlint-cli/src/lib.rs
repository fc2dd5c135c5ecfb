//! reqlint CLI library
//!
//! This library provides the command-line interface for the reqlint
//! requirement quality linter.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod lexicon;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

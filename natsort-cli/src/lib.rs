//! natsort CLI library
//!
//! This library provides the command-line interface for natural sorting
//! and numeric range filtering of entry lists.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};

//! nickdup CLI library
//!
//! This library provides the command-line interface for detecting Korean
//! nicknames that share a two-syllable substring.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};

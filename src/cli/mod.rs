//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;
mod error;

pub use args::{Args, Command, ConfigAction};
pub use commands::{format_stats, handle_config_action, render_output, run_convert};
pub use enums::OutputFormat;
pub use error::CliError;

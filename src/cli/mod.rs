//! Command-line interface for sitecheck.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, ValidateArgs, ValidateConfigArgs, ValidateContentArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, ReportOptions};

//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Every validate command renders
//! its report through [`emit_report`], so the format, strictness and
//! quiet handling are the same everywhere.

pub mod dispatcher;
pub mod report;
pub mod validate_all;
pub mod validate_config;
pub mod validate_content;
pub mod validate_env;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use report::{emit_report, ReportOptions};
pub use validate_all::ValidateAllCommand;
pub use validate_config::ValidateConfigCommand;
pub use validate_content::ValidateContentCommand;
pub use validate_env::ValidateEnvCommand;

//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ValidateArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::report::ReportOptions;
use super::validate_all::ValidateAllCommand;
use super::validate_config::ValidateConfigCommand;
use super::validate_content::ValidateContentCommand;
use super::validate_env::ValidateEnvCommand;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }

    /// Success or exit code 1.
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Self::success()
        } else {
            Self::failure(1)
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
    policy_path: Option<PathBuf>,
    options: ReportOptions,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf, options: ReportOptions) -> Self {
        Self {
            project_root,
            policy_path: None,
            options,
        }
    }

    /// Use an explicit policy file instead of searching the project root.
    pub fn with_policy(mut self, path: Option<PathBuf>) -> Self {
        self.policy_path = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it. No subcommand runs `validate`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let policy = self.policy_path.as_deref();
        match &cli.command {
            Some(Commands::ValidateConfig(args)) => {
                let cmd = ValidateConfigCommand::new(&self.project_root, args.clone(), self.options);
                cmd.execute(ui)
            }
            Some(Commands::ValidateContent(args)) => {
                let cmd = ValidateContentCommand::new(&self.project_root, args.clone(), self.options)
                    .with_policy(policy);
                cmd.execute(ui)
            }
            Some(Commands::ValidateEnv) => {
                let cmd = ValidateEnvCommand::new(&self.project_root, self.options).with_policy(policy);
                cmd.execute(ui)
            }
            Some(Commands::Validate(args)) => {
                let cmd = ValidateAllCommand::new(&self.project_root, args.clone(), self.options)
                    .with_policy(policy);
                cmd.execute(ui)
            }
            None => {
                let cmd =
                    ValidateAllCommand::new(&self.project_root, ValidateArgs::default(), self.options)
                        .with_policy(policy);
                cmd.execute(ui)
            }
        }
    }
}

//! Validate-config command implementation.

use std::path::{Path, PathBuf};

use crate::cli::args::ValidateConfigArgs;
use crate::error::Result;
use crate::lint::ValidationReport;
use crate::site::{default_config_path, ConfigValidator};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::report::{emit_report, ReportOptions};

/// The validate-config command implementation.
pub struct ValidateConfigCommand {
    project_root: PathBuf,
    args: ValidateConfigArgs,
    options: ReportOptions,
}

impl ValidateConfigCommand {
    /// Create a new validate-config command.
    pub fn new(project_root: &Path, args: ValidateConfigArgs, options: ReportOptions) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            options,
        }
    }

    /// The config file this command will check.
    pub fn config_path(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| default_config_path(&self.project_root))
    }

    /// Run the validator without emitting anything.
    pub fn report(&self) -> ValidationReport {
        ConfigValidator::new().validate_path(&self.config_path())
    }
}

impl Command for ValidateConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.report();
        let passed = emit_report(ui, &report, &self.options);
        Ok(CommandResult::from_passed(passed))
    }
}

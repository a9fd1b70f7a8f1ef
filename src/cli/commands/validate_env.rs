//! Validate-env command implementation.

use std::path::{Path, PathBuf};

use crate::config::load_policy;
use crate::error::Result;
use crate::lint::OutputFormat;
use crate::requirements::{EnvironmentValidator, ProcessRunner, SystemRunner, ToolReport};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::report::{emit_report, ReportOptions};

/// The validate-env command implementation.
pub struct ValidateEnvCommand {
    project_root: PathBuf,
    options: ReportOptions,
    policy_path: Option<PathBuf>,
}

impl ValidateEnvCommand {
    /// Create a new validate-env command.
    pub fn new(project_root: &Path, options: ReportOptions) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            options,
            policy_path: None,
        }
    }

    /// Use an explicit policy file.
    pub fn with_policy(mut self, path: Option<&Path>) -> Self {
        self.policy_path = path.map(Path::to_path_buf);
        self
    }

    /// Run against a custom process runner.
    pub fn execute_with<R: ProcessRunner>(
        &self,
        ui: &mut dyn UserInterface,
        runner: R,
    ) -> Result<CommandResult> {
        let policy = load_policy(&self.project_root, self.policy_path.as_deref())?;
        let validator =
            EnvironmentValidator::with_runner(policy.environment, &self.project_root, runner);
        let check = validator.check();

        if self.options.format == OutputFormat::Human && ui.output_mode().shows_status() {
            for tool in &check.tools {
                show_tool(ui, tool);
            }
            ui.message("");
        }

        let passed = emit_report(ui, &check.report, &self.options);
        Ok(CommandResult::from_passed(passed))
    }
}

fn show_tool(ui: &mut dyn UserInterface, tool: &ToolReport) {
    let summary = tool.summary();
    if tool.status.is_satisfied() {
        ui.success(&summary);
    } else if tool.required {
        ui.error(&summary);
    } else {
        ui.warning(&summary);
    }
}

impl Command for ValidateEnvCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with(ui, SystemRunner::new())
    }
}

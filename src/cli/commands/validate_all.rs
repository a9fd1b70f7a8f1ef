//! Validate command: configuration then content.

use std::path::{Path, PathBuf};

use crate::cli::args::{ValidateArgs, ValidateConfigArgs, ValidateContentArgs};
use crate::error::Result;
use crate::lint::{JsonFormatter, OutputFormat, ValidationReport};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::report::ReportOptions;
use super::validate_config::ValidateConfigCommand;
use super::validate_content::ValidateContentCommand;

/// Runs the config and content validators in sequence.
///
/// Both always run; the command fails if either fails.
pub struct ValidateAllCommand {
    project_root: PathBuf,
    args: ValidateArgs,
    options: ReportOptions,
    policy_path: Option<PathBuf>,
}

impl ValidateAllCommand {
    /// Create a new validate command.
    pub fn new(project_root: &Path, args: ValidateArgs, options: ReportOptions) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            options,
            policy_path: None,
        }
    }

    /// Use an explicit policy file.
    pub fn with_policy(mut self, path: Option<&Path>) -> Self {
        self.policy_path = path.map(Path::to_path_buf);
        self
    }

    /// Write both reports as one JSON document.
    fn emit_combined(
        &self,
        ui: &mut dyn UserInterface,
        config: ValidationReport,
        content: ValidationReport,
    ) -> Result<CommandResult> {
        let passed = self.options.passes(&config) && self.options.passes(&content);
        let formatter = JsonFormatter::new();
        let document = serde_json::json!({
            "config": formatter.to_value(&config).map_err(anyhow::Error::from)?,
            "content": formatter.to_value(&content).map_err(anyhow::Error::from)?,
            "success": passed,
        });
        let rendered = serde_json::to_string_pretty(&document).map_err(anyhow::Error::from)?;
        ui.message(&rendered);
        Ok(CommandResult::from_passed(passed))
    }
}

impl Command for ValidateAllCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = ValidateConfigCommand::new(
            &self.project_root,
            ValidateConfigArgs {
                path: self.args.config.clone(),
            },
            self.options,
        );
        let content = ValidateContentCommand::new(
            &self.project_root,
            ValidateContentArgs {
                path: self.args.content.clone(),
            },
            self.options,
        )
        .with_policy(self.policy_path.as_deref());

        if self.options.format == OutputFormat::Json {
            return self.emit_combined(ui, config.report(), content.report()?);
        }

        let config_result = config.execute(ui)?;
        ui.message("");
        let content_result = content.execute(ui)?;

        Ok(CommandResult::from_passed(
            config_result.success && content_result.success,
        ))
    }
}

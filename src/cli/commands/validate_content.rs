//! Validate-content command implementation.

use std::path::{Path, PathBuf};

use crate::cli::args::ValidateContentArgs;
use crate::config::load_policy;
use crate::content::ContentValidator;
use crate::error::Result;
use crate::lint::ValidationReport;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::report::{emit_report, ReportOptions};

/// Content directory name under the project root.
pub const DEFAULT_CONTENT_DIR: &str = "content";

/// The validate-content command implementation.
pub struct ValidateContentCommand {
    project_root: PathBuf,
    args: ValidateContentArgs,
    options: ReportOptions,
    policy_path: Option<PathBuf>,
}

impl ValidateContentCommand {
    /// Create a new validate-content command.
    pub fn new(project_root: &Path, args: ValidateContentArgs, options: ReportOptions) -> Self {
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

    /// The content directory this command will scan.
    pub fn content_root(&self) -> PathBuf {
        self.args
            .path
            .clone()
            .unwrap_or_else(|| self.project_root.join(DEFAULT_CONTENT_DIR))
    }

    /// Load the policy and scan the content root without emitting anything.
    pub fn report(&self) -> Result<ValidationReport> {
        let policy = load_policy(&self.project_root, self.policy_path.as_deref())?;
        let validator = ContentValidator::new(policy.content).with_project_root(&self.project_root);
        Ok(validator.validate(&self.content_root()))
    }
}

impl Command for ValidateContentCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.report()?;
        let passed = emit_report(ui, &report, &self.options);
        Ok(CommandResult::from_passed(passed))
    }
}
